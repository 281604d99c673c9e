//! Achievement system types and data structures.

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    FirstBite,     // 1 donut
    SweetTooth,    // 5 donuts
    BakeryRegular, // 10 donuts
    DonutMaster,   // 25 donuts
    CafeLegend,    // 50 donuts
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub target: u32,
    pub icon: &'static str,
}
