//! Quick wins, investments and narrative recommendations.
//!
//! Each list is an ordered rule catalog: every rule whose predicate holds
//! contributes its text, in declaration order, truncated to [`MAX_ITEMS`].

use eh_core::{ApplianceUsage, CookingHabits, HotWaterUsage, Profile};

pub const MAX_ITEMS: usize = 5;

pub struct TextRule {
    pub applies: fn(&Profile) -> bool,
    pub text: &'static str,
}

pub const NARRATIVE_FALLBACK: &str = "Your energy usage appears moderate. Consider a smart meter for real-time monitoring to identify further savings opportunities.";

fn heavy_heating(p: &Profile) -> bool {
    p.heating_hours.is_some_and(|h| h.is_heavy())
}

fn heating_answered(p: &Profile) -> bool {
    p.heating_hours.is_some()
}

fn hot_water_medium_or_high(p: &Profile) -> bool {
    p.hot_water_usage.is_some_and(|w| w.is_medium_or_high())
}

fn old_or_mixed_lighting(p: &Profile) -> bool {
    p.lighting_type.is_some_and(|l| l.is_old_or_mixed())
}

pub static QUICK_WIN_RULES: &[TextRule] = &[
    TextRule { applies: heavy_heating, text: "Reduce heating time by 1 hour daily → Save £60-80/year" },
    TextRule { applies: heating_answered, text: "Lower thermostat by 1°C → Save £80-100/year" },
    TextRule { applies: hot_water_medium_or_high, text: "Reduce shower time by 1 minute → Save £45/year per person" },
    TextRule { applies: old_or_mixed_lighting, text: "Switch to LED bulbs → Save £40-65/year" },
    TextRule {
        applies: |p| p.appliance_usage_age.is_some_and(|a| a != ApplianceUsage::FewAppliances),
        text: "Unplug devices on standby → Save £65/year",
    },
    TextRule {
        applies: |p| p.appliance_usage_age.is_some_and(|a| a != ApplianceUsage::FewAppliances),
        text: "Wash clothes at 30°C → Save £30/year",
    },
    TextRule {
        applies: |p| matches!(p.cooking_habits, Some(CookingHabits::HeavyElectric | CookingHabits::NormalMixed)),
        text: "Use lids on pots → 30% less cooking energy",
    },
];

pub static INVESTMENT_RULES: &[TextRule] = &[
    TextRule { applies: heating_answered, text: "Smart thermostat (Nest/Hive) → £150-220, saves £80-150/year" },
    TextRule { applies: heating_answered, text: "Loft insulation top-up → Often FREE via ECO4" },
    TextRule { applies: hot_water_medium_or_high, text: "Low-flow showerhead → £20, saves £70/year" },
    TextRule { applies: hot_water_medium_or_high, text: "Hot water tank jacket → £25, saves £35/year" },
    TextRule { applies: old_or_mixed_lighting, text: "Full LED upgrade → £50-100, saves £150+/year" },
    TextRule {
        applies: |p| matches!(p.appliance_usage_age, Some(ApplianceUsage::OldHeavyUse | ApplianceUsage::MixedAge)),
        text: "Replace old appliances with A-rated models",
    },
    TextRule { applies: |_| true, text: "Solar panels → £6,000-8,000, saves £300-500/year" },
    TextRule { applies: |_| true, text: "Check ECO4 grant eligibility for free upgrades" },
];

pub static NARRATIVE_RULES: &[TextRule] = &[
    TextRule {
        applies: heavy_heating,
        text: "Your heating runs longer than average. Lowering your thermostat by 1°C can save around 8% on heating energy annually (£80-100/year).",
    },
    TextRule {
        applies: |p| p.hot_water_usage == Some(HotWaterUsage::High),
        text: "High hot water use detected. Consider efficient shower heads and slightly shorter showers to cut energy by 10-15%.",
    },
    TextRule {
        applies: old_or_mixed_lighting,
        text: "Switching fully to LED bulbs could reduce lighting electricity use by up to 80%, saving £40-65/year.",
    },
    TextRule {
        applies: |p| p.appliance_usage_age == Some(ApplianceUsage::OldHeavyUse),
        text: "Replacing older frequently used appliances (fridge, washing machine) with A-rated models can reduce electricity use by 30-50%.",
    },
    TextRule {
        applies: |p| p.cooking_habits == Some(CookingHabits::HeavyElectric),
        text: "Heavy electric cooking usage noted. Using lids on pots and batch cooking can reduce cooking energy by 25-35%.",
    },
];

/// Texts of every firing rule, in rule order, capped at `max`.
pub fn collect(rules: &[TextRule], profile: &Profile, max: usize) -> Vec<String> {
    rules
        .iter()
        .filter(|r| (r.applies)(profile))
        .take(max)
        .map(|r| r.text.to_string())
        .collect()
}

pub fn quick_wins(profile: &Profile) -> Vec<String> {
    collect(QUICK_WIN_RULES, profile, MAX_ITEMS)
}

pub fn investments(profile: &Profile) -> Vec<String> {
    collect(INVESTMENT_RULES, profile, MAX_ITEMS)
}

/// Never empty: falls back to [`NARRATIVE_FALLBACK`].
pub fn narrative_recommendations(profile: &Profile) -> Vec<String> {
    let recs = collect(NARRATIVE_RULES, profile, MAX_ITEMS);
    if recs.is_empty() {
        return vec![NARRATIVE_FALLBACK.to_string()];
    }
    recs
}
