//! Integration test: unlock popup lifecycle
//!
//! Tests the transient notification window by simulating the 100ms UI tick:
//! popups stay visible for the full window, expire independently, never
//! re-trigger while an achievement stays unlocked, and are cancelled
//! immediately by a reset.

use donut_counter::achievements::AchievementId;
use donut_counter::constants::{NOTIFICATION_DURATION_SECONDS, TICK_INTERVAL_MS};
use donut_counter::game_logic::{add_donut, reset_counter, update_notifications};
use donut_counter::game_state::GameState;

/// Ages the popup queue by `seconds`, one UI tick at a time.
fn run_ticks(state: &mut GameState, seconds: f64) {
    let delta = TICK_INTERVAL_MS as f64 / 1000.0;
    let ticks = (seconds / delta).round() as u32;
    for _ in 0..ticks {
        update_notifications(state, delta);
    }
}

#[test]
fn test_popup_lasts_for_the_full_window() {
    let mut state = GameState::new();
    add_donut(&mut state);
    assert!(state.is_newly_unlocked(AchievementId::FirstBite));

    run_ticks(&mut state, NOTIFICATION_DURATION_SECONDS - 0.2);
    assert!(
        state.is_newly_unlocked(AchievementId::FirstBite),
        "popup vanished before its window elapsed"
    );

    run_ticks(&mut state, 0.4);
    assert!(
        !state.is_newly_unlocked(AchievementId::FirstBite),
        "popup survived past its window"
    );
    // Expiry only removes the popup; the unlock itself stays
    assert!(state.is_unlocked(AchievementId::FirstBite));
}

#[test]
fn test_popups_expire_independently() {
    let mut state = GameState::new();
    add_donut(&mut state);

    // Second threshold crossed 2 seconds into the first popup's window
    run_ticks(&mut state, 2.0);
    for _ in 0..4 {
        add_donut(&mut state);
    }
    assert!(state.is_newly_unlocked(AchievementId::FirstBite));
    assert!(state.is_newly_unlocked(AchievementId::SweetTooth));

    // 1.5s later: first popup is past 3s, second has 1.5s left
    run_ticks(&mut state, 1.5);
    assert!(!state.is_newly_unlocked(AchievementId::FirstBite));
    assert!(state.is_newly_unlocked(AchievementId::SweetTooth));

    run_ticks(&mut state, 2.0);
    assert!(state.notifications.is_empty());
}

#[test]
fn test_expired_popup_does_not_retrigger_while_unlocked() {
    let mut state = GameState::new();
    add_donut(&mut state);
    run_ticks(&mut state, NOTIFICATION_DURATION_SECONDS + 1.0);
    assert!(state.notifications.is_empty());

    // Further donuts keep the achievement unlocked but bring no new popup
    add_donut(&mut state);
    add_donut(&mut state);
    assert!(state.is_unlocked(AchievementId::FirstBite));
    assert!(state.notifications.is_empty());
}

#[test]
fn test_reset_cancels_popups_before_expiry() {
    let mut state = GameState::new();
    for _ in 0..10 {
        add_donut(&mut state);
    }
    assert_eq!(state.notifications.len(), 3);

    // Reset lands well inside every popup's 3-second window
    reset_counter(&mut state);
    assert!(state.notifications.is_empty(), "reset must clear popups immediately");

    // Ticks covering the original deadlines mutate nothing further
    run_ticks(&mut state, NOTIFICATION_DURATION_SECONDS * 2.0);
    assert_eq!(state.donut_count, 0);
    assert!(state.notifications.is_empty());
    assert!(!state.is_unlocked(AchievementId::FirstBite));
}

#[test]
fn test_aging_with_oversized_delta_is_safe() {
    let mut state = GameState::new();
    add_donut(&mut state);

    // A single stalled-frame delta larger than the window drops the popup
    update_notifications(&mut state, NOTIFICATION_DURATION_SECONDS * 10.0);
    assert!(state.notifications.is_empty());
    assert!(state.is_unlocked(AchievementId::FirstBite));
}
