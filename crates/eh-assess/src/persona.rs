//! Persona classification. First matching rule wins.

use eh_core::{ApplianceUsage, HotWaterUsage, Profile};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub name: &'static str,
    pub description: &'static str,
}

pub struct PersonaRule {
    pub applies: fn(&Profile) -> bool,
    pub persona: Persona,
}

pub const HEAVY_HEATER: Persona = Persona {
    name: "Heavy Heater Household",
    description: "Focus on heating optimisation & thermostat control. Your heating usage is above average, making it the primary area for energy savings.",
};

pub const HOT_WATER_INTENSIVE: Persona = Persona {
    name: "Hot Water Intensive Household",
    description: "Showers, baths, and hot water are your main focus. Reducing hot water usage can lead to significant energy savings.",
};

pub const APPLIANCE_POWER_USER: Persona = Persona {
    name: "Appliance Power User",
    description: "Older, frequently used appliances drive your energy use. Upgrading to efficient models could make a big difference.",
};

pub const LIGHTING_INEFFICIENT: Persona = Persona {
    name: "Lighting Inefficient Household",
    description: "Big potential in lighting upgrades. Switching to LED bulbs throughout your home could reduce lighting energy use by up to 80%.",
};

pub const BALANCED_USAGE: Persona = Persona {
    name: "Balanced Usage Household",
    description: "No single dominant waste area; small optimisations across all categories can add up to meaningful savings over time.",
};

/// Priority-ordered rules. [`BALANCED_USAGE`] applies when none match.
pub static PERSONA_RULES: &[PersonaRule] = &[
    PersonaRule {
        applies: |p| p.heating_hours.is_some_and(|h| h.is_heavy()),
        persona: HEAVY_HEATER,
    },
    PersonaRule {
        applies: |p| p.hot_water_usage == Some(HotWaterUsage::High),
        persona: HOT_WATER_INTENSIVE,
    },
    PersonaRule {
        applies: |p| p.appliance_usage_age == Some(ApplianceUsage::OldHeavyUse),
        persona: APPLIANCE_POWER_USER,
    },
    PersonaRule {
        applies: |p| p.lighting_type.is_some_and(|l| l.is_old_or_mixed()),
        persona: LIGHTING_INEFFICIENT,
    },
];

pub fn classify(profile: &Profile) -> Persona {
    PERSONA_RULES
        .iter()
        .find(|rule| (rule.applies)(profile))
        .map(|rule| rule.persona)
        .unwrap_or(BALANCED_USAGE)
}
