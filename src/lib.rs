//! Body-composition estimates for gym assessment records.
//!
//! A raw assessment (weight, height, skinfolds, demographics) goes through
//! [`pipeline::compute_body_composition`], which never fails: every missing
//! or malformed field degrades to an unknown value in the result.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::categories::{BmiCategory, FatCategory};
pub use model::composition::{CompositionResult, DensityMethod, IdealWeightBand, MISSING};
pub use model::measurements::{NormalizedMeasurements, Sex, SkinfoldSite, Skinfolds};
pub use model::raw::{RawAssessmentInput, RawValue, Subject};
pub use model::thresholds::ThresholdProfile;
pub use pipeline::{compute_body_composition, compute_body_composition_at};
