//! Ordered intent rules. The first rule whose matcher accepts the
//! normalized input wins.

use crate::responses;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Gratitude,
    SmallTalk,
    Capabilities,
    SmartThermostat,
    HeatingCost,
    BoilerReplacement,
    Heating,
    HotWater,
    Grants,
    Solar,
    Appliances,
    Lighting,
    Insulation,
    Bills,
    SaveEnergy,
    Tips,
    Menu,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Gratitude => "gratitude",
            Intent::SmallTalk => "small_talk",
            Intent::Capabilities => "capabilities",
            Intent::SmartThermostat => "smart_thermostat",
            Intent::HeatingCost => "heating_cost",
            Intent::BoilerReplacement => "boiler_replacement",
            Intent::Heating => "heating",
            Intent::HotWater => "hot_water",
            Intent::Grants => "grants",
            Intent::Solar => "solar",
            Intent::Appliances => "appliances",
            Intent::Lighting => "lighting",
            Intent::Insulation => "insulation",
            Intent::Bills => "bills",
            Intent::SaveEnergy => "save_energy",
            Intent::Tips => "tips",
            Intent::Menu => "menu",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const HEATING_KEYWORDS: &[&str] = &["heat", "thermostat", "boiler", "radiator", "warm", "cold house"];
pub const SMART_KEYWORDS: &[&str] = &["smart", "nest", "hive", "tado"];
pub const HEATING_COST_KEYWORDS: &[&str] = &["bill", "cost", "expensive", "reduce", "save", "lower", "cut"];
pub const BOILER_KEYWORDS: &[&str] = &["boiler", "old", "replace", "new"];
pub const HOT_WATER_KEYWORDS: &[&str] = &["water", "shower", "bath", "tap", "hot water"];
pub const GRANT_KEYWORDS: &[&str] =
    &["grant", "free", "eco4", "scheme", "government", "funding", "subsidis", "help pay"];
pub const SOLAR_KEYWORDS: &[&str] = &["solar", "panel", "pv", "renewable", "generate"];
pub const APPLIANCE_KEYWORDS: &[&str] =
    &["appliance", "fridge", "washing", "dishwasher", "dryer", "tumble", "freezer", "oven", "microwave"];
pub const LIGHTING_KEYWORDS: &[&str] = &["light", "led", "bulb", "lamp", "bright"];
pub const INSULATION_KEYWORDS: &[&str] = &["insulat", "draft", "draught", "cold", "loft", "wall", "window"];
pub const BILL_KEYWORDS: &[&str] = &["bill", "cost", "expensive", "price", "tariff", "switch", "supplier", "pay"];
pub const SAVE_ENERGY_KEYWORDS: &[&str] =
    &["save energy", "saving energy", "energy saving", "reduce energy", "use less", "cut energy"];
pub const TIP_KEYWORDS: &[&str] = &["tip", "advice", "recommend", "suggest", "idea", "what should"];

/// Test applied to lower-cased, trimmed input.
#[derive(Debug, Clone)]
pub enum Matcher {
    Pattern(Regex),
    AnyOf(&'static [&'static str]),
    AllOf(Vec<Matcher>),
}

impl Matcher {
    fn pattern(re: &str) -> Self {
        Matcher::Pattern(Regex::new(re).unwrap())
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Pattern(re) => re.is_match(text),
            Matcher::AnyOf(keywords) => keywords.iter().any(|kw| text.contains(*kw)),
            Matcher::AllOf(all) => all.iter().all(|m| m.matches(text)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntentRule {
    pub intent: Intent,
    pub matcher: Matcher,
    pub template: &'static str,
}

fn rule(intent: Intent, matcher: Matcher, template: &'static str) -> IntentRule {
    IntentRule { intent, matcher, template }
}

fn heating_and(sub: &'static [&'static str]) -> Matcher {
    Matcher::AllOf(vec![Matcher::AnyOf(HEATING_KEYWORDS), Matcher::AnyOf(sub)])
}

pub fn default_intent_rules() -> Vec<IntentRule> {
    vec![
        rule(
            Intent::Greeting,
            Matcher::pattern(r"^(hi|hello|hey|hiya|good morning|good afternoon|good evening|howdy)\b"),
            responses::GREETING,
        ),
        rule(
            Intent::Gratitude,
            // Only `ta` needs word boundaries; it sits inside "tariff" and "data".
            Matcher::pattern(r"\bta\b|thank|cheers|appreciate|helpful"),
            responses::GRATITUDE,
        ),
        rule(
            Intent::SmallTalk,
            Matcher::pattern(r"how are you|how're you|how do you do|what's up|wassup"),
            responses::SMALL_TALK,
        ),
        rule(
            Intent::Capabilities,
            Matcher::pattern(r"what can you|help me|what do you do|how can you help|what are you"),
            responses::CAPABILITIES,
        ),
        // Heating sub-branches must precede the generic heating rule.
        rule(Intent::SmartThermostat, heating_and(SMART_KEYWORDS), responses::SMART_THERMOSTAT),
        rule(Intent::HeatingCost, heating_and(HEATING_COST_KEYWORDS), responses::HEATING_COST),
        rule(Intent::BoilerReplacement, heating_and(BOILER_KEYWORDS), responses::BOILER),
        rule(Intent::Heating, Matcher::AnyOf(HEATING_KEYWORDS), responses::HEATING),
        rule(Intent::HotWater, Matcher::AnyOf(HOT_WATER_KEYWORDS), responses::HOT_WATER),
        rule(Intent::Grants, Matcher::AnyOf(GRANT_KEYWORDS), responses::GRANTS),
        rule(Intent::Solar, Matcher::AnyOf(SOLAR_KEYWORDS), responses::SOLAR),
        rule(Intent::Appliances, Matcher::AnyOf(APPLIANCE_KEYWORDS), responses::APPLIANCES),
        rule(Intent::Lighting, Matcher::AnyOf(LIGHTING_KEYWORDS), responses::LIGHTING),
        rule(Intent::Insulation, Matcher::AnyOf(INSULATION_KEYWORDS), responses::INSULATION),
        rule(Intent::Bills, Matcher::AnyOf(BILL_KEYWORDS), responses::BILLS),
        rule(Intent::SaveEnergy, Matcher::AnyOf(SAVE_ENERGY_KEYWORDS), responses::SAVE_ENERGY),
        rule(Intent::Tips, Matcher::AnyOf(TIP_KEYWORDS), responses::TIPS),
    ]
}

pub static INTENT_RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(default_intent_rules);

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// First rule accepting already-normalized `text`.
pub fn first_match<'a>(rules: &'a [IntentRule], text: &str) -> Option<&'a IntentRule> {
    rules.iter().find(|r| r.matcher.matches(text))
}

pub fn match_intent(text: &str) -> Intent {
    first_match(&INTENT_RULES, &normalize(text)).map(|r| r.intent).unwrap_or(Intent::Menu)
}
