//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};

/// All achievement definitions in display order (ascending target).
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstBite,
        title: "First Bite",
        description: "Eat your first donut",
        target: 1,
        icon: "🍪",
    },
    AchievementDef {
        id: AchievementId::SweetTooth,
        title: "Sweet Tooth",
        description: "Eat 5 donuts",
        target: 5,
        icon: "💖",
    },
    AchievementDef {
        id: AchievementId::BakeryRegular,
        title: "Bakery Regular",
        description: "Eat 10 donuts",
        target: 10,
        icon: "⭐",
    },
    AchievementDef {
        id: AchievementId::DonutMaster,
        title: "Donut Master",
        description: "Eat 25 donuts",
        target: 25,
        icon: "👑",
    },
    AchievementDef {
        id: AchievementId::CafeLegend,
        title: "Cafe Legend",
        description: "Eat 50 donuts",
        target: 50,
        icon: "🏆",
    },
];

/// Look up the static definition for an achievement id.
pub fn get_achievement_def(id: AchievementId) -> &'static AchievementDef {
    ALL_ACHIEVEMENTS
        .iter()
        .find(|def| def.id == id)
        .unwrap_or(&ALL_ACHIEVEMENTS[0])
}
