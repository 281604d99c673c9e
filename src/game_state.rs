use crate::achievements::{AchievementId, ALL_ACHIEVEMENTS};
use crate::constants::NOTIFICATION_DURATION_SECONDS;

/// A pending "achievement unlocked" popup with its own countdown.
///
/// Each unlock owns exactly one of these; dropping the entry (expiry, reset,
/// or teardown) cancels its timer.
#[derive(Debug, Clone)]
pub struct UnlockNotification {
    pub id: AchievementId,
    pub lifetime: f64,
    pub max_lifetime: f64,
}

impl UnlockNotification {
    pub fn new(id: AchievementId) -> Self {
        Self {
            id,
            lifetime: 0.0,
            max_lifetime: NOTIFICATION_DURATION_SECONDS,
        }
    }

    /// Ages the notification by `delta` seconds. Returns true while it
    /// should remain visible.
    pub fn update(&mut self, delta: f64) -> bool {
        self.lifetime += delta;
        self.lifetime <= self.max_lifetime
    }

    pub fn is_active(&self) -> bool {
        self.lifetime <= self.max_lifetime
    }
}

/// Main session state: the donut counter, per-achievement unlock flags,
/// and pending unlock popups.
///
/// `unlocked` is parallel to [`ALL_ACHIEVEMENTS`] and always re-derived as
/// `donut_count >= target`; it is stored only so the evaluator can detect
/// false→true edges.
#[derive(Debug, Clone)]
pub struct GameState {
    pub donut_count: u32,
    pub unlocked: Vec<bool>,
    pub notifications: Vec<UnlockNotification>,
}

impl GameState {
    /// Creates a fresh session: zero donuts, everything locked.
    pub fn new() -> Self {
        Self {
            donut_count: 0,
            unlocked: vec![false; ALL_ACHIEVEMENTS.len()],
            notifications: Vec::new(),
        }
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        ALL_ACHIEVEMENTS
            .iter()
            .position(|def| def.id == id)
            .is_some_and(|i| self.unlocked[i])
    }

    /// True while the achievement's unlock popup is still on screen.
    pub fn is_newly_unlocked(&self, id: AchievementId) -> bool {
        self.notifications.iter().any(|n| n.id == id)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new();
        assert_eq!(state.donut_count, 0);
        assert_eq!(state.unlocked.len(), ALL_ACHIEVEMENTS.len());
        assert!(state.unlocked.iter().all(|&flag| !flag));
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_notification_expires_after_window() {
        let mut notification = UnlockNotification::new(AchievementId::FirstBite);
        assert!(notification.is_active());
        assert!(notification.update(NOTIFICATION_DURATION_SECONDS / 2.0));
        assert!(!notification.update(NOTIFICATION_DURATION_SECONDS));
    }

    #[test]
    fn test_is_unlocked_fresh_state() {
        let state = GameState::new();
        assert!(!state.is_unlocked(AchievementId::FirstBite));
        assert!(!state.is_newly_unlocked(AchievementId::FirstBite));
    }
}
