//! Label Resolver: raw profile codes to human-readable strings.

use crate::profile::Field;

pub const NOT_PROVIDED: &str = "Not provided";

pub const HEATING_LABELS: &[(&str, &str)] = &[
    ("0_2", "0–2 hours per day"),
    ("3_5", "3–5 hours per day"),
    ("6_8", "6–8 hours per day"),
    ("9_plus", "9+ hours per day"),
];

pub const HOT_WATER_LABELS: &[(&str, &str)] = &[
    ("low", "Low (1–2 uses per day)"),
    ("medium", "Medium (3–5 uses per day)"),
    ("high", "High (6+ uses per day)"),
];

pub const COOKING_LABELS: &[(&str, &str)] = &[
    ("light_microwave", "0–1 light meals (mostly microwave/toaster)"),
    ("normal_mixed", "1–2 full meals (mix of hob and oven)"),
    ("heavy_electric", "2–3+ cooked meals (electric hob/oven)"),
    ("gas_cooking", "Mostly gas hob/oven"),
];

pub const LIGHTING_LABELS: &[(&str, &str)] = &[
    ("mostly_led", "Mostly LED bulbs"),
    ("mixed", "Mix of LED and older bulbs"),
    ("mostly_old", "Mostly older bulbs (halogen/incandescent)"),
    ("unsure", "Not sure"),
];

pub const APPLIANCE_LABELS: &[(&str, &str)] = &[
    ("new_efficient", "New efficient appliances (under 5 years)"),
    ("mixed_age", "Mix of old and new appliances"),
    ("old_heavy_use", "Mostly older appliances (10+ years)"),
    ("few_appliances", "Limited appliance use"),
];

pub fn table(field: Field) -> &'static [(&'static str, &'static str)] {
    match field {
        Field::HeatingHours => HEATING_LABELS,
        Field::HotWaterUsage => HOT_WATER_LABELS,
        Field::CookingHabits => COOKING_LABELS,
        Field::LightingType => LIGHTING_LABELS,
        Field::ApplianceUsageAge => APPLIANCE_LABELS,
    }
}

pub fn lookup(field: Field, code: &str) -> Option<&'static str> {
    table(field).iter().find(|(c, _)| *c == code).map(|(_, l)| *l)
}

/// Resolve a raw code for display.
///
/// Unset resolves to [`NOT_PROVIDED`]; a code missing from the field's table
/// is passed through unchanged.
pub fn label(field: Field, raw: Option<&str>) -> String {
    match raw {
        None => NOT_PROVIDED.to_string(),
        Some(code) => lookup(field, code).unwrap_or(code).to_string(),
    }
}
