//! Household energy profile collected by the questionnaire.
//!
//! Every categorical answer is optional: `None` means "not answered", which
//! is a meaningful state distinct from any enumerated value. Each enum
//! serializes to the raw wizard code (`"9_plus"`, `"mostly_led"`, ...).

use crate::error::{EhError, Result};
use crate::labels;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five categorical questions of the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    HeatingHours,
    HotWaterUsage,
    CookingHabits,
    LightingType,
    ApplianceUsageAge,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::HeatingHours,
        Field::HotWaterUsage,
        Field::CookingHabits,
        Field::LightingType,
        Field::ApplianceUsageAge,
    ];

    /// JSON key of the field in a serialized profile.
    pub fn key(self) -> &'static str {
        match self {
            Field::HeatingHours => "heatingHours",
            Field::HotWaterUsage => "hotWaterUsage",
            Field::CookingHabits => "cookingHabits",
            Field::LightingType => "lightingType",
            Field::ApplianceUsageAge => "applianceUsageAge",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A closed enumeration answering one [`Field`].
pub trait Categorical: Copy + PartialEq + Sized + 'static {
    const FIELD: Field;
    const ALL: &'static [Self];

    /// Raw wizard code.
    fn code(self) -> &'static str;

    fn label(self) -> &'static str {
        labels::lookup(Self::FIELD, self.code()).unwrap_or(self.code())
    }

    fn parse_code(raw: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.code() == raw)
            .ok_or_else(|| EhError::UnknownValue { field: Self::FIELD.key(), value: raw.to_string() })
    }
}

/// Hours per day the home is heated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatingHours {
    #[serde(rename = "0_2")]
    ZeroToTwo,
    #[serde(rename = "3_5")]
    ThreeToFive,
    #[serde(rename = "6_8")]
    SixToEight,
    #[serde(rename = "9_plus")]
    NinePlus,
}

impl HeatingHours {
    /// The two heaviest buckets.
    pub fn is_heavy(self) -> bool {
        matches!(self, HeatingHours::SixToEight | HeatingHours::NinePlus)
    }
}

impl Categorical for HeatingHours {
    const FIELD: Field = Field::HeatingHours;
    const ALL: &'static [Self] =
        &[HeatingHours::ZeroToTwo, HeatingHours::ThreeToFive, HeatingHours::SixToEight, HeatingHours::NinePlus];

    fn code(self) -> &'static str {
        match self {
            HeatingHours::ZeroToTwo => "0_2",
            HeatingHours::ThreeToFive => "3_5",
            HeatingHours::SixToEight => "6_8",
            HeatingHours::NinePlus => "9_plus",
        }
    }
}

/// Showers, baths and washing-up per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotWaterUsage {
    Low,
    Medium,
    High,
}

impl HotWaterUsage {
    pub fn is_medium_or_high(self) -> bool {
        matches!(self, HotWaterUsage::Medium | HotWaterUsage::High)
    }
}

impl Categorical for HotWaterUsage {
    const FIELD: Field = Field::HotWaterUsage;
    const ALL: &'static [Self] = &[HotWaterUsage::Low, HotWaterUsage::Medium, HotWaterUsage::High];

    fn code(self) -> &'static str {
        match self {
            HotWaterUsage::Low => "low",
            HotWaterUsage::Medium => "medium",
            HotWaterUsage::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingHabits {
    LightMicrowave,
    NormalMixed,
    HeavyElectric,
    GasCooking,
}

impl Categorical for CookingHabits {
    const FIELD: Field = Field::CookingHabits;
    const ALL: &'static [Self] = &[
        CookingHabits::LightMicrowave,
        CookingHabits::NormalMixed,
        CookingHabits::HeavyElectric,
        CookingHabits::GasCooking,
    ];

    fn code(self) -> &'static str {
        match self {
            CookingHabits::LightMicrowave => "light_microwave",
            CookingHabits::NormalMixed => "normal_mixed",
            CookingHabits::HeavyElectric => "heavy_electric",
            CookingHabits::GasCooking => "gas_cooking",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingType {
    MostlyLed,
    Mixed,
    MostlyOld,
    Unsure,
}

impl LightingType {
    /// Mostly old bulbs, or a mix of old and LED.
    pub fn is_old_or_mixed(self) -> bool {
        matches!(self, LightingType::MostlyOld | LightingType::Mixed)
    }
}

impl Categorical for LightingType {
    const FIELD: Field = Field::LightingType;
    const ALL: &'static [Self] =
        &[LightingType::MostlyLed, LightingType::Mixed, LightingType::MostlyOld, LightingType::Unsure];

    fn code(self) -> &'static str {
        match self {
            LightingType::MostlyLed => "mostly_led",
            LightingType::Mixed => "mixed",
            LightingType::MostlyOld => "mostly_old",
            LightingType::Unsure => "unsure",
        }
    }
}

/// Daily appliance use and the age of those appliances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplianceUsage {
    NewEfficient,
    MixedAge,
    OldHeavyUse,
    FewAppliances,
}

impl Categorical for ApplianceUsage {
    const FIELD: Field = Field::ApplianceUsageAge;
    const ALL: &'static [Self] = &[
        ApplianceUsage::NewEfficient,
        ApplianceUsage::MixedAge,
        ApplianceUsage::OldHeavyUse,
        ApplianceUsage::FewAppliances,
    ];

    fn code(self) -> &'static str {
        match self {
            ApplianceUsage::NewEfficient => "new_efficient",
            ApplianceUsage::MixedAge => "mixed_age",
            ApplianceUsage::OldHeavyUse => "old_heavy_use",
            ApplianceUsage::FewAppliances => "few_appliances",
        }
    }
}

macro_rules! impl_from_str {
    ($($ty:ty),*) => {$(
        impl FromStr for $ty {
            type Err = EhError;

            fn from_str(s: &str) -> Result<Self> {
                <$ty as Categorical>::parse_code(s)
            }
        }
    )*};
}

impl_from_str!(HeatingHours, HotWaterUsage, CookingHabits, LightingType, ApplianceUsage);

/// Answers collected by the questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub heating_hours: Option<HeatingHours>,
    pub hot_water_usage: Option<HotWaterUsage>,
    pub cooking_habits: Option<CookingHabits>,
    pub lighting_type: Option<LightingType>,
    pub appliance_usage_age: Option<ApplianceUsage>,
    /// Free-text notes from the final step; empty when skipped.
    #[serde(rename = "extraQuestion")]
    pub extra_notes: String,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one wizard answer given as a raw code. `None` clears the field.
    pub fn set_answer(&mut self, field: Field, raw: Option<&str>) -> Result<()> {
        match field {
            Field::HeatingHours => self.heating_hours = raw.map(str::parse).transpose()?,
            Field::HotWaterUsage => self.hot_water_usage = raw.map(str::parse).transpose()?,
            Field::CookingHabits => self.cooking_habits = raw.map(str::parse).transpose()?,
            Field::LightingType => self.lighting_type = raw.map(str::parse).transpose()?,
            Field::ApplianceUsageAge => self.appliance_usage_age = raw.map(str::parse).transpose()?,
        }
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.extra_notes = notes.into();
    }

    /// Raw code of a categorical answer, if answered.
    pub fn code(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::HeatingHours => self.heating_hours.map(Categorical::code),
            Field::HotWaterUsage => self.hot_water_usage.map(Categorical::code),
            Field::CookingHabits => self.cooking_habits.map(Categorical::code),
            Field::LightingType => self.lighting_type.map(Categorical::code),
            Field::ApplianceUsageAge => self.appliance_usage_age.map(Categorical::code),
        }
    }

    /// Display label of a categorical answer, `"Not provided"` when unset.
    pub fn label(&self, field: Field) -> String {
        labels::label(field, self.code(field))
    }

    pub fn answered_count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.code(**f).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.answered_count() == 0 && self.extra_notes.trim().is_empty()
    }
}
