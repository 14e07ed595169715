use crate::model::categories::{BmiCategory, FatCategory};
use crate::model::composition::{CompositionResult, DisplayStrings, IdealWeightBand, MISSING};
use crate::model::measurements::NormalizedMeasurements;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage3_density::DensityOutcome;
use crate::pipeline::stage4_fat::{FAT_PERCENT_DECIMALS, round_to};

pub fn bmi(weight_kg: Option<f64>, height_m: Option<f64>) -> Option<f64> {
    let w = weight_kg.filter(|w| *w > 0.0)?;
    let h = height_m.filter(|h| *h > 0.0)?;
    let v = w / (h * h);
    v.is_finite().then_some(v)
}

pub fn ideal_weight_band(height_m: Option<f64>, profile: &ThresholdProfile) -> Option<IdealWeightBand> {
    let h = height_m.filter(|h| *h > 0.0)?;
    let h2 = h * h;
    Some(IdealWeightBand {
        min_kg: profile.ideal_bmi_min * h2,
        max_kg: profile.ideal_bmi_max * h2,
    })
}

/// Zero, negative and missing BMI values are left unclassified.
pub fn classify_bmi(bmi: Option<f64>, profile: &ThresholdProfile) -> Option<BmiCategory> {
    let v = bmi.filter(|v| *v > 0.0)?;
    let category = if v < profile.bmi_underweight_below {
        BmiCategory::Underweight
    } else if v < profile.bmi_normal_below {
        BmiCategory::Normal
    } else if v < profile.bmi_overweight_below {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };
    Some(category)
}

pub fn classify_fat(fat_percent: Option<f64>, profile: &ThresholdProfile) -> Option<FatCategory> {
    let p = fat_percent?;
    let category = if p < profile.fat_low_below {
        FatCategory::Low
    } else if p < profile.fat_normal_below {
        FatCategory::Normal
    } else if p < profile.fat_elevated_below {
        FatCategory::Elevated
    } else {
        FatCategory::High
    };
    Some(category)
}

/// Returns `(lean_kg, fat_kg)`; the two always add back up to the weight.
pub fn split_mass(weight_kg: Option<f64>, fat_percent: Option<f64>) -> Option<(f64, f64)> {
    let w = weight_kg?;
    let f = fat_percent?;
    let lean = w * (1.0 - f / 100.0);
    let fat = w - lean;
    Some((lean, fat))
}

/// Position of a BMI value along the gauge, in percent of its width.
pub fn bmi_gauge_position(bmi: Option<f64>, profile: &ThresholdProfile) -> f64 {
    let (min, max) = (profile.gauge_bmi_min, profile.gauge_bmi_max);
    if !(min < max) {
        return profile.gauge_offset_percent;
    }
    let clamped = bmi.unwrap_or(0.0).clamp(min, max);
    (clamped - min) / (max - min) * profile.gauge_span_percent + profile.gauge_offset_percent
}

/// Ties round away from zero (`21.125` renders as `21.13`), not to even.
pub fn format_or_missing(value: Option<f64>, decimals: usize, suffix: &str) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let rounded = round_to(v, decimals as i32);
            format!("{rounded:.decimals$}{suffix}")
        }
        _ => MISSING.to_string(),
    }
}

pub fn format_ideal_band(band: Option<IdealWeightBand>) -> String {
    match band {
        Some(b) => format!("{}kg e {}kg", b.min_kg.round(), b.max_kg.round()),
        None => MISSING.to_string(),
    }
}

pub fn aggregate(
    m: &NormalizedMeasurements,
    outcome: &DensityOutcome,
    profile: &ThresholdProfile,
) -> CompositionResult {
    let bmi = bmi(m.weight_kg, m.height_m);
    let bmi_category = classify_bmi(bmi, profile);
    let ideal_weight = ideal_weight_band(m.height_m, profile);

    let body_fat_percent = outcome
        .body_fat_percent
        .map(|f| round_to(f, FAT_PERCENT_DECIMALS))
        .filter(|f| f.is_finite());
    let fat_category = classify_fat(body_fat_percent, profile);

    let split = split_mass(m.weight_kg, body_fat_percent);
    let lean_mass_kg = split.map(|(lean, _)| lean);
    let fat_mass_kg = split.map(|(_, fat)| fat);
    let lean_mass_percent = split.and(body_fat_percent).map(|f| 100.0 - f);

    let display = DisplayStrings {
        bmi: format_or_missing(bmi, 1, ""),
        body_fat_percent: format_or_missing(body_fat_percent, 2, "%"),
        body_density: format_or_missing(outcome.density, 3, " g/cm³"),
        lean_mass_kg: format_or_missing(lean_mass_kg, 1, " kg"),
        fat_mass_kg: format_or_missing(fat_mass_kg, 1, " kg"),
        lean_mass_percent: format_or_missing(lean_mass_percent, 1, "%"),
        ideal_weight: format_ideal_band(ideal_weight),
    };

    CompositionResult {
        weight_kg: m.weight_kg,
        height_m: m.height_m,
        sex: m.sex,
        age_years: m.age_years,
        method: outcome.method,
        sites_used: outcome.sites_used,
        bmi,
        bmi_category,
        bmi_label: bmi_category.map(BmiCategory::label).unwrap_or(""),
        ideal_weight,
        body_density: outcome.density,
        body_fat_percent,
        fat_category,
        fat_label: fat_category.map(FatCategory::label).unwrap_or(""),
        lean_mass_kg,
        fat_mass_kg,
        lean_mass_percent,
        display,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_aggregate.rs"]
mod tests;
