//! Mission catalog, applicability filtering and the saturating cursor.

use eh_core::{ApplianceUsage, CookingHabits, HeatingHours, HotWaterUsage, LightingType, Profile};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub estimated_savings: Option<&'static str>,
    pub difficulty: Difficulty,
    #[serde(skip)]
    pub applicable: fn(&Profile) -> bool,
}

impl fmt::Debug for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mission")
            .field("id", &self.id)
            .field("difficulty", &self.difficulty)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Mission {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Shown when no other mission applies.
pub const FALLBACK_MISSION_ID: &str = "standby-hunt";

pub static MISSIONS: &[Mission] = &[
    Mission {
        id: "led-lighting",
        title: "LED Lighting Sprint",
        description: "Swap 2–3 of your most-used bulbs to LED this week. Start with rooms you use most often like the kitchen, living room, or bedroom.",
        estimated_savings: Some("Could save up to £20–£40/year"),
        difficulty: Difficulty::Easy,
        applicable: |p| p.lighting_type.is_some_and(|l| l != LightingType::MostlyLed),
    },
    Mission {
        id: "thermostat-tweak",
        title: "Thermostat Tweak Week",
        description: "Lower your thermostat by 1°C for 7 days. You might not even notice the difference, but your energy bill will!",
        estimated_savings: Some("Often saves around 8% on heating"),
        difficulty: Difficulty::Medium,
        applicable: |p| p.heating_hours.is_some_and(|h| h.is_heavy()),
    },
    Mission {
        id: "quick-shower",
        title: "Quick Shower Challenge",
        description: "Reduce shower time by 2 minutes for each person for 5 days. Set a timer to keep track!",
        estimated_savings: Some("Could save £45–£90/year per person"),
        difficulty: Difficulty::Medium,
        applicable: |p| p.hot_water_usage == Some(HotWaterUsage::High),
    },
    Mission {
        id: "appliance-audit",
        title: "Appliance Audit Quest",
        description: "Identify your 2 oldest high-use appliances and check their energy labels. Research replacement options if they're rated C or below.",
        estimated_savings: Some("Upgrading old appliances can save £100–£200/year"),
        difficulty: Difficulty::Hard,
        applicable: |p| {
            matches!(p.appliance_usage_age, Some(ApplianceUsage::OldHeavyUse | ApplianceUsage::MixedAge))
        },
    },
    Mission {
        id: FALLBACK_MISSION_ID,
        title: "Standby Hunt",
        description: "Walk around your home once this week and unplug unused chargers and devices in standby. Check TVs, computers, game consoles, and kitchen appliances.",
        estimated_savings: Some("Could save up to £65/year"),
        difficulty: Difficulty::Easy,
        applicable: |_| true,
    },
    Mission {
        id: "cooking-optimization",
        title: "Cooking Efficiency Mission",
        description: "Use lids on pots when cooking and try batch cooking for 3 days. This reduces cooking time and energy use significantly.",
        estimated_savings: Some("Can reduce cooking energy by 25–35%"),
        difficulty: Difficulty::Easy,
        applicable: |p| {
            matches!(p.cooking_habits, Some(CookingHabits::HeavyElectric | CookingHabits::NormalMixed))
        },
    },
    Mission {
        id: "heating-schedule",
        title: "Smart Heating Schedule",
        description: "Set your heating to turn off 30 minutes before you go to bed and turn on 30 minutes before you wake up. Your home will stay warm enough!",
        estimated_savings: Some("Could save £60–£80/year"),
        difficulty: Difficulty::Easy,
        applicable: |p| p.heating_hours.is_some_and(|h| h != HeatingHours::ZeroToTwo),
    },
];

pub fn find_mission(id: &str) -> Option<&'static Mission> {
    MISSIONS.iter().find(|m| m.id == id)
}

/// Applicable missions in catalog order; never empty.
pub fn select_missions(profile: &Profile) -> Vec<&'static Mission> {
    select_from(MISSIONS, profile)
}

pub(crate) fn select_from(catalog: &'static [Mission], profile: &Profile) -> Vec<&'static Mission> {
    let selected: Vec<&'static Mission> = catalog.iter().filter(|m| (m.applicable)(profile)).collect();
    if !selected.is_empty() {
        return selected;
    }
    find_mission(FALLBACK_MISSION_ID).into_iter().collect()
}

/// Selected missions plus a cursor clamped to `[0, len - 1]`.
///
/// Stepping past either end is a no-op.
#[derive(Debug, Clone)]
pub struct MissionQueue {
    missions: Vec<&'static Mission>,
    index: usize,
}

impl MissionQueue {
    pub fn for_profile(profile: &Profile) -> Self {
        Self::new(select_missions(profile))
    }

    pub fn new(missions: Vec<&'static Mission>) -> Self {
        Self { missions, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn missions(&self) -> &[&'static Mission] {
        &self.missions
    }

    pub fn current(&self) -> Option<&'static Mission> {
        self.missions.get(self.index).copied()
    }

    pub fn next(&mut self) -> Option<&'static Mission> {
        if self.index + 1 < self.missions.len() {
            self.index += 1;
        }
        self.current()
    }

    pub fn previous(&mut self) -> Option<&'static Mission> {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Jump to `index`, clamped to the last mission.
    pub fn seek(&mut self, index: usize) -> Option<&'static Mission> {
        self.index = index.min(self.missions.len().saturating_sub(1));
        self.current()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.missions.len()
    }

    /// "Mission 2 of 5"; empty for an empty queue.
    pub fn position(&self) -> String {
        if self.missions.is_empty() {
            return String::new();
        }
        format!("Mission {} of {}", self.index + 1, self.missions.len())
    }
}
