//! Advisory prompt text. Display only; never sent anywhere.

use eh_core::{Field, Profile};

fn answer(profile: &Profile, field: Field) -> String {
    match profile.code(field) {
        Some(_) => profile.label(field),
        None => "not provided".to_string(),
    }
}

pub fn advisory_prompt(profile: &Profile) -> String {
    let notes = if profile.extra_notes.is_empty() { "none" } else { profile.extra_notes.as_str() };
    format!(
        "User home energy profile:\n\n\
         - Heating hours per day: {}\n\
         - Hot water usage: {}\n\
         - Meals & cooking appliances: {}\n\
         - Main lighting type: {}\n\
         - Daily appliance usage & age: {}\n\
         - Extra notes from user: {}\n\n\
         Task: Based on this profile, generate 3–5 personalised, practical energy-saving recommendations.\n\
         Focus on:\n\
         - Heating behaviour\n\
         - Hot water use\n\
         - Cooking and appliance efficiency\n\
         - Lighting choices\n\
         Use a friendly, encouraging tone and mention potential percentage or rough cost savings where possible.\n\
         Assume a temperate climate similar to the UK.",
        answer(profile, Field::HeatingHours),
        answer(profile, Field::HotWaterUsage),
        answer(profile, Field::CookingHabits),
        answer(profile, Field::LightingType),
        answer(profile, Field::ApplianceUsageAge),
        notes,
    )
}
