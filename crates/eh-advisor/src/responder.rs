//! Free-text responder: intent rule lookup plus profile interpolation.

use crate::intents::{first_match, normalize, Intent, INTENT_RULES};
use crate::responses;
use crate::template::{render, TemplateVars};
use eh_core::{ApplianceUsage, Field, HotWaterUsage, LightingType, Profile};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub intent: Intent,
    pub content: String,
}

fn described(profile: &Profile, field: Field, prefix: &str, missing: &str) -> String {
    match profile.code(field) {
        Some(_) => format!("{}{}", prefix, profile.label(field)),
        None => missing.to_string(),
    }
}

/// Placeholder values for every reply template.
pub fn profile_vars(profile: &Profile) -> TemplateVars {
    let heavy_heating = profile.heating_hours.is_some_and(|h| h.is_heavy());
    let high_water = profile.hot_water_usage == Some(HotWaterUsage::High);
    let old_lighting = profile.lighting_type == Some(LightingType::MostlyOld);
    let old_or_mixed_lighting = profile.lighting_type.is_some_and(|l| l.is_old_or_mixed());
    let old_appliances = profile.appliance_usage_age == Some(ApplianceUsage::OldHeavyUse);

    TemplateVars::new()
        .with("heating", profile.label(Field::HeatingHours))
        .with("hot_water", profile.label(Field::HotWaterUsage))
        .with("cooking", profile.label(Field::CookingHabits))
        .with("lighting", profile.label(Field::LightingType))
        .with("appliances", profile.label(Field::ApplianceUsageAge))
        .with(
            "bills_heating_line",
            if heavy_heating { "• Heating is your biggest opportunity - see my heating tips!" } else { "" },
        )
        .with("bills_lighting_line", if old_or_mixed_lighting { "• LED switch could save £150+/year" } else { "" })
        .with(
            "bills_appliance_line",
            if old_appliances { "• Old appliances may be costing you £100+/year extra" } else { "" },
        )
        .with("plan_heating", described(profile, Field::HeatingHours, "You heat for ", "Heating info not provided"))
        .with("plan_hot_water", described(profile, Field::HotWaterUsage, "Your usage: ", "Usage not specified"))
        .with("plan_appliances", described(profile, Field::ApplianceUsageAge, "Status: ", "Status not specified"))
        .with("plan_lighting", described(profile, Field::LightingType, "Type: ", "Type not specified"))
        .with(
            "tip_heating",
            if heavy_heating { "Reduce heating by 1 hour → £60-80/year" } else { "Turn thermostat down 1°C → £80-100/year" },
        )
        .with(
            "tip_hot_water",
            if high_water { "Shorter showers → £45/person/year" } else { "Fix any dripping taps → £18/tap/year" },
        )
        .with(
            "tip_lighting",
            if old_lighting { "Replace most-used bulbs with LED first" } else { "Turn off lights when leaving rooms" },
        )
}

pub fn respond_with_intent(text: &str, profile: &Profile) -> Reply {
    let normalized = normalize(text);
    let (intent, template) = match first_match(&INTENT_RULES, &normalized) {
        Some(rule) => (rule.intent, rule.template),
        None => (Intent::Menu, responses::MENU),
    };
    tracing::debug!(intent = intent.as_str(), chars = normalized.len(), "advisor intent matched");
    Reply { intent, content: render(template, &profile_vars(profile)) }
}

pub fn respond(text: &str, profile: &Profile) -> String {
    respond_with_intent(text, profile).content
}
