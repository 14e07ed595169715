use serde::Serialize;

use crate::model::categories::{BmiCategory, FatCategory};
use crate::model::measurements::Sex;

/// Placeholder rendered for any value that could not be computed.
pub const MISSING: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityMethod {
    SuppliedFatPercent,
    SuppliedDensity,
    SevenSite,
    ThreeSite,
    Insufficient,
}

impl DensityMethod {
    pub fn name(self) -> &'static str {
        match self {
            DensityMethod::SuppliedFatPercent => "supplied_fat_percent",
            DensityMethod::SuppliedDensity => "supplied_density",
            DensityMethod::SevenSite => "seven_site",
            DensityMethod::ThreeSite => "three_site",
            DensityMethod::Insufficient => "insufficient",
        }
    }
}

pub fn method_order() -> &'static [DensityMethod] {
    &[
        DensityMethod::SuppliedFatPercent,
        DensityMethod::SuppliedDensity,
        DensityMethod::SevenSite,
        DensityMethod::ThreeSite,
        DensityMethod::Insufficient,
    ]
}

/// Healthy weight range for a height, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealWeightBand {
    pub min_kg: f64,
    pub max_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayStrings {
    pub bmi: String,
    pub body_fat_percent: String,
    pub body_density: String,
    pub lean_mass_kg: String,
    pub fat_mass_kg: String,
    pub lean_mass_percent: String,
    pub ideal_weight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionResult {
    pub weight_kg: Option<f64>,
    pub height_m: Option<f64>,
    pub sex: Sex,
    pub age_years: f64,

    pub method: DensityMethod,
    pub sites_used: usize,

    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub bmi_label: &'static str,
    pub ideal_weight: Option<IdealWeightBand>,

    pub body_density: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub fat_category: Option<FatCategory>,
    pub fat_label: &'static str,

    pub lean_mass_kg: Option<f64>,
    pub fat_mass_kg: Option<f64>,
    pub lean_mass_percent: Option<f64>,

    pub display: DisplayStrings,
}
