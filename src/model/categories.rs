use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Magreza",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Sobrepeso",
            BmiCategory::Obese => "Obeso",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FatCategory {
    Low,
    Normal,
    Elevated,
    High,
}

impl FatCategory {
    pub fn label(self) -> &'static str {
        match self {
            FatCategory::Low => "baixo",
            FatCategory::Normal => "normal",
            FatCategory::Elevated => "elevado",
            FatCategory::High => "alto",
        }
    }
}

pub fn bmi_category_order() -> &'static [BmiCategory] {
    &[
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ]
}

pub fn fat_category_order() -> &'static [FatCategory] {
    &[
        FatCategory::Low,
        FatCategory::Normal,
        FatCategory::Elevated,
        FatCategory::High,
    ]
}
