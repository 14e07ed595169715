use crate::model::composition::DensityMethod;
use crate::model::measurements::{NormalizedMeasurements, Sex, SkinfoldSite};
use crate::model::raw::RawAssessmentInput;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage1_normalize::parse_number;
use crate::pipeline::stage4_fat::fat_from_density;

const MALE_TRIPLET: [SkinfoldSite; 3] = [
    SkinfoldSite::Chest,
    SkinfoldSite::Abdominal,
    SkinfoldSite::Femoral,
];

const FEMALE_TRIPLET: [SkinfoldSite; 3] = [
    SkinfoldSite::Triceps,
    SkinfoldSite::Suprailiac,
    SkinfoldSite::Femoral,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityOutcome {
    pub method: DensityMethod,
    pub density: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub sites_used: usize,
}

impl DensityOutcome {
    fn insufficient() -> Self {
        Self {
            method: DensityMethod::Insufficient,
            density: None,
            body_fat_percent: None,
            sites_used: 0,
        }
    }
}

/// Values the record already carries, bypassing the regressions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SuppliedValues {
    pub density: Option<f64>,
    pub fat_percent: Option<f64>,
}

impl SuppliedValues {
    /// A supplied density of zero is treated as absent. Any other value,
    /// negative included, suppresses the regressions.
    pub fn from_input(input: &RawAssessmentInput) -> Self {
        Self {
            density: parse_number(input.supplied_density()).filter(|d| *d != 0.0),
            fat_percent: parse_number(input.supplied_fat_percent()),
        }
    }
}

/// Jackson & Pollock seven-site body density.
pub fn density_from_seven_site(sum: f64, age: f64, sex: Sex) -> f64 {
    match sex {
        Sex::Male => 1.112 - 0.00043499 * sum + 0.00000055 * (sum * sum) - 0.00028826 * age,
        Sex::Female => 1.097 - 0.00046971 * sum + 0.00000056 * (sum * sum) - 0.00012828 * age,
    }
}

/// Jackson & Pollock three-site body density.
pub fn density_from_three_site(sum: f64, age: f64, sex: Sex) -> f64 {
    match sex {
        Sex::Male => 1.10938 - 0.0008267 * sum + 0.0000016 * (sum * sum) - 0.0002574 * age,
        Sex::Female => {
            1.0994921 - 0.0009929 * sum + 0.0000023 * (sum * sum) - 0.0001392 * age
        }
    }
}

pub fn three_site_triplet(sex: Sex) -> &'static [SkinfoldSite; 3] {
    match sex {
        Sex::Male => &MALE_TRIPLET,
        Sex::Female => &FEMALE_TRIPLET,
    }
}

/// Supplied fat percentage, then supplied density, then the seven-site
/// regression, then the three-site regression.
pub fn estimate_density(
    supplied: SuppliedValues,
    m: &NormalizedMeasurements,
    profile: &ThresholdProfile,
) -> DensityOutcome {
    if let Some(fat) = supplied.fat_percent {
        return DensityOutcome {
            method: DensityMethod::SuppliedFatPercent,
            density: supplied.density,
            body_fat_percent: Some(fat),
            sites_used: 0,
        };
    }

    if let Some(density) = supplied.density {
        return DensityOutcome {
            method: DensityMethod::SuppliedDensity,
            density: Some(density),
            body_fat_percent: fat_from_density(density),
            sites_used: 0,
        };
    }

    let present = m.skinfolds.present_count();
    if present >= profile.seven_site_min_sites.max(1) {
        let sum = m.skinfolds.present_sum();
        let density = density_from_seven_site(sum, m.age_years, m.sex);
        tracing::trace!(sites = present, sum, density, "seven-site estimate");
        return DensityOutcome {
            method: DensityMethod::SevenSite,
            density: Some(density).filter(|d| d.is_finite()),
            body_fat_percent: fat_from_density(density),
            sites_used: present,
        };
    }

    if let Some(sum) = m.skinfolds.sum_of(three_site_triplet(m.sex)) {
        let density = density_from_three_site(sum, m.age_years, m.sex);
        tracing::trace!(sum, density, "three-site estimate");
        return DensityOutcome {
            method: DensityMethod::ThreeSite,
            density: Some(density).filter(|d| d.is_finite()),
            body_fat_percent: fat_from_density(density),
            sites_used: 3,
        };
    }

    DensityOutcome::insufficient()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_density.rs"]
mod tests;
