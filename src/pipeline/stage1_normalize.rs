use chrono::NaiveDate;

use crate::model::measurements::{NormalizedMeasurements, Sex, SkinfoldSite, Skinfolds};
use crate::model::raw::{RawAssessmentInput, RawValue, Subject};
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage2_age::resolve_age;

/// Heights above this many metres are taken to be centimetres.
const HEIGHT_CM_CUTOFF: f64 = 3.0;

pub fn parse_number(value: Option<&RawValue>) -> Option<f64> {
    match value? {
        RawValue::Number(n) => n.is_finite().then_some(*n),
        RawValue::Text(s) => parse_decimal_text(s),
        RawValue::Other(_) => None,
    }
}

/// Accepts `"72.5"` and `"72,5"`; only the first comma is treated as a
/// decimal separator.
pub fn parse_decimal_text(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replacen(',', ".", 1);
    let n = normalized.parse::<f64>().ok()?;
    n.is_finite().then_some(n)
}

pub fn parse_height_meters(value: Option<&RawValue>) -> Option<f64> {
    let n = parse_number(value)?;
    if n > HEIGHT_CM_CUTOFF {
        Some(n / 100.0)
    } else {
        Some(n)
    }
}

/// Anything that is not recognisably female resolves to male, including a
/// missing value.
pub fn resolve_sex(raw: Option<&str>) -> Sex {
    let upper = raw.unwrap_or("").trim().to_uppercase();
    if upper.starts_with('F') || upper == "FEMININO" || upper == "FEMALE" {
        Sex::Female
    } else {
        Sex::Male
    }
}

pub fn read_skinfolds(input: &RawAssessmentInput) -> Skinfolds {
    let mut folds = Skinfolds::default();
    folds.set(
        SkinfoldSite::Subscapular,
        parse_number(input.subscapular.as_ref()),
    );
    folds.set(SkinfoldSite::Triceps, parse_number(input.triceps.as_ref()));
    folds.set(
        SkinfoldSite::Chest,
        parse_number(input.chest_fold()),
    );
    folds.set(
        SkinfoldSite::MidAxillary,
        parse_number(input.mid_axillary.as_ref()),
    );
    folds.set(
        SkinfoldSite::Suprailiac,
        parse_number(input.suprailiac.as_ref()),
    );
    folds.set(
        SkinfoldSite::Abdominal,
        parse_number(input.abdominal_fold()),
    );
    folds.set(SkinfoldSite::Femoral, parse_number(input.femoral.as_ref()));
    folds
}

pub fn normalize(
    input: &RawAssessmentInput,
    subject: Option<&Subject>,
    today: NaiveDate,
    profile: &ThresholdProfile,
) -> NormalizedMeasurements {
    let gender = input
        .gender
        .as_ref()
        .or_else(|| subject.and_then(|s| s.gender.as_ref()))
        .and_then(RawValue::as_text);
    let sex = resolve_sex(gender.as_deref());

    let age_years = resolve_age(
        parse_number(input.age.as_ref()),
        subject.and_then(Subject::birth_date),
        today,
        profile.fallback_age_years,
    );

    NormalizedMeasurements {
        weight_kg: parse_number(input.weight.as_ref()),
        height_m: parse_height_meters(input.height.as_ref()),
        sex,
        age_years,
        skinfolds: read_skinfolds(input),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
