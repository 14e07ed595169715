//! Raw record → normalized measurements → density → body fat → composition.
//!
//! Every stage is a pure function; `compute_body_composition` is the only
//! entry point call sites should use.

use chrono::{Local, NaiveDate};

use crate::model::composition::CompositionResult;
use crate::model::raw::{RawAssessmentInput, Subject};
use crate::model::thresholds::ThresholdProfile;

pub mod stage1_normalize;
pub mod stage2_age;
pub mod stage3_density;
pub mod stage4_fat;
pub mod stage5_aggregate;
pub mod stage6_report;

use stage1_normalize::normalize;
use stage3_density::{SuppliedValues, estimate_density};
use stage5_aggregate::aggregate;

/// Computes the body composition of one assessment using today's date for
/// age resolution and the default thresholds.
pub fn compute_body_composition(
    input: &RawAssessmentInput,
    subject: Option<&Subject>,
) -> CompositionResult {
    let today = Local::now().date_naive();
    compute_body_composition_at(input, subject, today, &ThresholdProfile::default_v1())
}

pub fn compute_body_composition_at(
    input: &RawAssessmentInput,
    subject: Option<&Subject>,
    today: NaiveDate,
    profile: &ThresholdProfile,
) -> CompositionResult {
    let measurements = normalize(input, subject, today, profile);
    let supplied = SuppliedValues::from_input(input);
    let outcome = estimate_density(supplied, &measurements, profile);
    aggregate(&measurements, &outcome, profile)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
