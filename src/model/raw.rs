use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A loosely typed field as it arrives from the records provider.
///
/// Numbers may be JSON numbers or strings using `.` or `,` as the decimal
/// separator. Anything else is kept so that decoding a record never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawValue {
    pub fn text(s: impl Into<String>) -> Self {
        RawValue::Text(s.into())
    }

    /// String view used for identifiers and free-text fields.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            RawValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            RawValue::Number(n) if n.is_finite() => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(Cow::Owned(format!("{}", *n as i64)))
                } else {
                    Some(Cow::Owned(n.to_string()))
                }
            }
            _ => None,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// One physical assessment as stored by the backend.
///
/// Every field is optional; normalization happens once, in
/// `pipeline::stage1_normalize`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAssessmentInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscapular: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triceps: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest_skinfold: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid_axillary: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suprailiac: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abdominal_skinfold: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abdominal: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub femoral: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub densidade: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentual_gordura: Option<RawValue>,
    #[serde(
        default,
        rename = "fatPercent",
        skip_serializing_if = "Option::is_none"
    )]
    pub fat_percent_camel: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_percent: Option<RawValue>,
}

impl RawAssessmentInput {
    /// Supplied density; the Portuguese key shadows the English one.
    pub fn supplied_density(&self) -> Option<&RawValue> {
        self.densidade.as_ref().or(self.density.as_ref())
    }

    /// Supplied body-fat percentage; the Portuguese key shadows the English
    /// ones, and `fatPercent` shadows `fat_percent`.
    pub fn supplied_fat_percent(&self) -> Option<&RawValue> {
        self.percentual_gordura
            .as_ref()
            .or(self.fat_percent_camel.as_ref())
            .or(self.fat_percent.as_ref())
    }

    /// `chest_skinfold`, else the short `chest` key.
    pub fn chest_fold(&self) -> Option<&RawValue> {
        self.chest_skinfold.as_ref().or(self.chest.as_ref())
    }

    /// `abdominal_skinfold`, else the short `abdominal` key.
    pub fn abdominal_fold(&self) -> Option<&RawValue> {
        self.abdominal_skinfold.as_ref().or(self.abdominal.as_ref())
    }

    pub fn record_id(&self) -> Option<String> {
        self.id
            .as_ref()
            .and_then(RawValue::as_text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn user_key(&self) -> Option<String> {
        self.user_id
            .as_ref()
            .and_then(RawValue::as_text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

/// Student demographics used to fill gaps in an assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<RawValue>,
    #[serde(
        default,
        rename = "dateOfBirth",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_of_birth_camel: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nascimento: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<RawValue>,
}

impl Subject {
    /// First present of `date_of_birth`, `dateOfBirth`, `dob`, `nascimento`.
    pub fn birth_date(&self) -> Option<&RawValue> {
        self.date_of_birth
            .as_ref()
            .or(self.date_of_birth_camel.as_ref())
            .or(self.dob.as_ref())
            .or(self.nascimento.as_ref())
    }

    pub fn key(&self) -> Option<String> {
        self.id
            .as_ref()
            .and_then(RawValue::as_text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
