use crate::achievements::{AchievementId, ALL_ACHIEVEMENTS};
use crate::game_state::{GameState, UnlockNotification};

/// Eats one donut and re-evaluates achievements.
/// Returns the ids newly unlocked by this donut, in catalog order.
pub fn add_donut(state: &mut GameState) -> Vec<AchievementId> {
    state.donut_count += 1;
    refresh_achievements(state)
}

/// Resets the counter to zero, relocks every achievement, and cancels all
/// pending unlock popups. Relocking is a silent flag update; no popup is
/// emitted for it.
pub fn reset_counter(state: &mut GameState) {
    state.donut_count = 0;
    for flag in &mut state.unlocked {
        *flag = false;
    }
    state.notifications.clear();
}

/// Re-derives every unlock flag from the current count. A false→true edge
/// records the id and enqueues its popup; an id whose popup is already on
/// screen cannot re-trigger, since its flag is still true.
pub fn refresh_achievements(state: &mut GameState) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    for (i, def) in ALL_ACHIEVEMENTS.iter().enumerate() {
        let was_unlocked = state.unlocked[i];
        let is_now_unlocked = state.donut_count >= def.target;

        if !was_unlocked && is_now_unlocked {
            newly_unlocked.push(def.id);
            state.notifications.push(UnlockNotification::new(def.id));
        }

        state.unlocked[i] = is_now_unlocked;
    }

    newly_unlocked
}

/// Ages pending unlock popups by `delta` seconds, dropping expired ones.
/// Aging an empty queue is a no-op.
pub fn update_notifications(state: &mut GameState, delta: f64) {
    state
        .notifications
        .retain_mut(|notification| notification.update(delta));
}

/// Picks the motivational line for the current count.
pub fn motivational_message(count: u32) -> &'static str {
    if count == 0 {
        "Time to start your sweet journey!"
    } else if count < 5 {
        "Great start, keep it up!"
    } else if count < 10 {
        "You're a true sweet tooth!"
    } else if count < 25 {
        "An impressive result!"
    } else if count < 50 {
        "You're a donut master!"
    } else {
        "Incredible! You're a legend of this cafe!"
    }
}
