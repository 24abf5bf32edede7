//! Efficiency scoring from per-field weighted penalties.

use eh_core::{ApplianceUsage, Categorical, CookingHabits, Field, HeatingHours, HotWaterUsage, LightingType, Profile};
use serde::{Deserialize, Serialize};

pub const HEATING_PENALTIES: &[(HeatingHours, u32)] = &[
    (HeatingHours::ZeroToTwo, 0),
    (HeatingHours::ThreeToFive, 10),
    (HeatingHours::SixToEight, 15),
    (HeatingHours::NinePlus, 20),
];

pub const HOT_WATER_PENALTIES: &[(HotWaterUsage, u32)] = &[
    (HotWaterUsage::Low, 0),
    (HotWaterUsage::Medium, 8),
    (HotWaterUsage::High, 15),
];

pub const COOKING_PENALTIES: &[(CookingHabits, u32)] = &[
    (CookingHabits::LightMicrowave, 0),
    (CookingHabits::NormalMixed, 5),
    (CookingHabits::HeavyElectric, 12),
    (CookingHabits::GasCooking, 8),
];

pub const LIGHTING_PENALTIES: &[(LightingType, u32)] = &[
    (LightingType::MostlyLed, 0),
    (LightingType::Mixed, 10),
    (LightingType::MostlyOld, 18),
    (LightingType::Unsure, 8),
];

pub const APPLIANCE_PENALTIES: &[(ApplianceUsage, u32)] = &[
    (ApplianceUsage::NewEfficient, 0),
    (ApplianceUsage::MixedAge, 10),
    (ApplianceUsage::OldHeavyUse, 18),
    (ApplianceUsage::FewAppliances, 4),
];

pub const HIGH_THRESHOLD: u32 = 80;
pub const MEDIUM_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EfficiencyLabel {
    High,
    Medium,
    Low,
}

impl EfficiencyLabel {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_THRESHOLD {
            EfficiencyLabel::High
        } else if score >= MEDIUM_THRESHOLD {
            EfficiencyLabel::Medium
        } else {
            EfficiencyLabel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EfficiencyLabel::High => "High",
            EfficiencyLabel::Medium => "Medium",
            EfficiencyLabel::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub raw_risk_score: u32,
    pub efficiency_score: u32,
    pub efficiency_label: EfficiencyLabel,
}

fn penalty<T: Categorical>(table: &[(T, u32)], answer: Option<T>) -> u32 {
    answer
        .and_then(|a| table.iter().find(|(v, _)| *v == a))
        .map(|(_, p)| *p)
        .unwrap_or(0)
}

/// Penalty contributed by each field, in field order. Unset fields contribute 0.
pub fn penalty_breakdown(profile: &Profile) -> [(Field, u32); 5] {
    [
        (Field::HeatingHours, penalty(HEATING_PENALTIES, profile.heating_hours)),
        (Field::HotWaterUsage, penalty(HOT_WATER_PENALTIES, profile.hot_water_usage)),
        (Field::CookingHabits, penalty(COOKING_PENALTIES, profile.cooking_habits)),
        (Field::LightingType, penalty(LIGHTING_PENALTIES, profile.lighting_type)),
        (Field::ApplianceUsageAge, penalty(APPLIANCE_PENALTIES, profile.appliance_usage_age)),
    ]
}

pub fn score(profile: &Profile) -> ScoreResult {
    let raw_risk_score: u32 = penalty_breakdown(profile).iter().map(|(_, p)| p).sum();
    let efficiency_score = 100u32.saturating_sub(raw_risk_score);
    ScoreResult {
        raw_risk_score,
        efficiency_score,
        efficiency_label: EfficiencyLabel::from_score(efficiency_score),
    }
}
