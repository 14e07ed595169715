use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinfoldSite {
    Subscapular,
    Triceps,
    Chest,
    MidAxillary,
    Suprailiac,
    Abdominal,
    Femoral,
}

impl SkinfoldSite {
    pub fn index(self) -> usize {
        match self {
            SkinfoldSite::Subscapular => 0,
            SkinfoldSite::Triceps => 1,
            SkinfoldSite::Chest => 2,
            SkinfoldSite::MidAxillary => 3,
            SkinfoldSite::Suprailiac => 4,
            SkinfoldSite::Abdominal => 5,
            SkinfoldSite::Femoral => 6,
        }
    }
}

/// Skinfold thicknesses in millimetres, `None` where the site was not measured.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Skinfolds {
    values: [Option<f64>; 7],
}

impl Skinfolds {
    pub fn get(&self, site: SkinfoldSite) -> Option<f64> {
        self.values[site.index()]
    }

    pub fn set(&mut self, site: SkinfoldSite, value: Option<f64>) {
        self.values[site.index()] = value;
    }

    pub fn with(mut self, site: SkinfoldSite, value: f64) -> Self {
        self.set(site, Some(value));
        self
    }

    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Sum over measured sites only; missing sites are not imputed.
    pub fn present_sum(&self) -> f64 {
        self.values.iter().flatten().sum()
    }

    /// Sum of the given sites, or `None` unless every one of them is present.
    pub fn sum_of(&self, sites: &[SkinfoldSite]) -> Option<f64> {
        let mut sum = 0.0;
        for site in sites {
            sum += self.get(*site)?;
        }
        Some(sum)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMeasurements {
    pub weight_kg: Option<f64>,
    pub height_m: Option<f64>,
    pub sex: Sex,
    pub age_years: f64,
    pub skinfolds: Skinfolds,
}
