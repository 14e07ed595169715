use std::path::Path;

use tracing::debug;

use crate::input::InputError;
use crate::input::reader::read_to_string_maybe_gz;
use crate::model::thresholds::ThresholdProfile;

/// Missing keys keep their `default_v1` value.
pub fn load_profile(path: &Path) -> Result<ThresholdProfile, InputError> {
    let text = read_to_string_maybe_gz(path)?;
    let profile = parse_profile(&text, &path.display().to_string())?;
    debug!(path = %path.display(), ?profile, "loaded threshold profile");
    Ok(profile)
}

pub fn parse_profile(text: &str, source: &str) -> Result<ThresholdProfile, InputError> {
    let profile: ThresholdProfile = serde_json::from_str(text)
        .map_err(|e| InputError::Parse(format!("{source}: {e}")))?;
    validate_profile(&profile).map_err(|msg| InputError::InvalidInput(format!("{source}: {msg}")))?;
    Ok(profile)
}

fn validate_profile(p: &ThresholdProfile) -> Result<(), String> {
    let ordered = |a: f64, b: f64, c: f64| a < b && b < c;
    if !ordered(p.bmi_underweight_below, p.bmi_normal_below, p.bmi_overweight_below) {
        return Err("BMI cut-offs must be strictly increasing".to_string());
    }
    if !ordered(p.fat_low_below, p.fat_normal_below, p.fat_elevated_below) {
        return Err("body-fat cut-offs must be strictly increasing".to_string());
    }
    if !(p.ideal_bmi_min < p.ideal_bmi_max) {
        return Err("ideal BMI range is empty".to_string());
    }
    if !(p.gauge_bmi_min < p.gauge_bmi_max) {
        return Err("gauge range is empty".to_string());
    }
    if !p.fallback_age_years.is_finite() {
        return Err("fallback age must be a finite number".to_string());
    }
    if p.seven_site_min_sites == 0 || p.seven_site_min_sites > 7 {
        return Err("seven-site minimum must be between 1 and 7".to_string());
    }
    Ok(())
}
