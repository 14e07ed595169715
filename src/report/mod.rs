use serde::Serialize;

use crate::model::thresholds::ThresholdProfile;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct NamedStats {
    pub name: &'static str,
    pub n: usize,
    pub median: Option<f64>,
    pub p10: Option<f64>,
    pub p90: Option<f64>,
}

impl NamedStats {
    pub fn from_values(name: &'static str, values: &[f64]) -> Self {
        Self {
            name,
            n: values.len(),
            median: median(values),
            p10: p10(values),
            p90: p90(values),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CountStat {
    pub name: &'static str,
    pub count: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
    pub git_hash: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: String,
    pub report_mode: String,
    pub reference_date: String,

    pub n_records: usize,
    pub n_users: usize,
    pub n_subjects_matched: usize,
    pub insufficient_fraction: f64,

    pub methods: Vec<CountStat>,
    pub bmi_categories: Vec<CountStat>,
    pub fat_categories: Vec<CountStat>,
    pub stats: Vec<NamedStats>,

    pub profile: ThresholdProfile,
}

impl SummaryData {
    pub fn stat(&self, name: &str) -> Option<&NamedStats> {
        self.stats.iter().find(|s| s.name == name)
    }
}

pub fn format_opt(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{x:.decimals$}"),
        _ => String::new(),
    }
}

pub fn quantile_indexed(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted.get(idx.min(n - 1)).copied()
}

pub fn median(values: &[f64]) -> Option<f64> {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> Option<f64> {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> Option<f64> {
    quantile_indexed(values, 0.90)
}

pub fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
