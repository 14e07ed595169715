use serde::{Deserialize, Serialize};

/// Cut-offs and fallbacks shared by every call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdProfile {
    pub fallback_age_years: f64,
    pub seven_site_min_sites: usize,

    pub bmi_underweight_below: f64,
    pub bmi_normal_below: f64,
    pub bmi_overweight_below: f64,

    pub fat_low_below: f64,
    pub fat_normal_below: f64,
    pub fat_elevated_below: f64,

    pub ideal_bmi_min: f64,
    pub ideal_bmi_max: f64,

    pub gauge_bmi_min: f64,
    pub gauge_bmi_max: f64,
    pub gauge_span_percent: f64,
    pub gauge_offset_percent: f64,
}

impl ThresholdProfile {
    pub fn default_v1() -> Self {
        Self {
            fallback_age_years: 30.0,
            seven_site_min_sites: 4,
            bmi_underweight_below: 18.5,
            bmi_normal_below: 25.0,
            bmi_overweight_below: 30.0,
            fat_low_below: 10.0,
            fat_normal_below: 20.0,
            fat_elevated_below: 25.0,
            ideal_bmi_min: 18.5,
            ideal_bmi_max: 24.9,
            gauge_bmi_min: 10.0,
            gauge_bmi_max: 40.0,
            gauge_span_percent: 92.0,
            gauge_offset_percent: 4.0,
        }
    }
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
