use std::collections::{BTreeMap, HashSet};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::input::AssessmentRecord;
use crate::model::categories::{bmi_category_order, fat_category_order};
use crate::model::composition::{CompositionResult, DensityMethod, method_order};
use crate::model::thresholds::ThresholdProfile;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{CountStat, NamedStats, SummaryData, ToolMeta, format_opt, fraction};

pub const TABLE_FILE: &str = "bodycomp.tsv";
pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_FILE: &str = "report.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Record,
    User,
}

impl ReportMode {
    pub fn name(self) -> &'static str {
        match self {
            ReportMode::Record => "record",
            ReportMode::User => "user",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stage6Input<'a> {
    pub records: &'a [AssessmentRecord],
    pub results: &'a [CompositionResult],
    pub subject_matched: &'a [bool],

    pub input_path: String,
    pub reference_date: NaiveDate,
    pub profile: &'a ThresholdProfile,

    pub tool_name: String,
    pub tool_version: String,
    pub git_hash: Option<String>,
}

pub fn write_reports(
    input: &Stage6Input<'_>,
    out_dir: &Path,
    mode: ReportMode,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let table_path = out_dir.join(TABLE_FILE);
    match mode {
        ReportMode::Record => write_record_tsv(input, &table_path)?,
        ReportMode::User => write_user_tsv(input, &table_path)?,
    }

    let summary = build_summary(input, mode);
    let json = render_summary_json(&summary).map_err(std::io::Error::other)?;
    fs::write(out_dir.join(SUMMARY_FILE), json)?;

    let report = render_report_text(&summary);
    fs::write(out_dir.join(REPORT_FILE), report)?;

    Ok(())
}

fn write_record_tsv(input: &Stage6Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "index",
        "record_id",
        "user_id",
        "method",
        "sites_used",
        "sex",
        "age_years",
        "weight_kg",
        "height_m",
        "bmi",
        "bmi_label",
        "ideal_weight",
        "body_density",
        "body_fat_percent",
        "fat_label",
        "lean_mass_kg",
        "fat_mass_kg",
        "lean_mass_percent",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for (record, r) in input.records.iter().zip(input.results) {
        let row = [
            record.index.to_string(),
            record.input.record_id().unwrap_or_default(),
            record.input.user_key().unwrap_or_default(),
            r.method.name().to_string(),
            r.sites_used.to_string(),
            r.sex.code().to_string(),
            format_opt(Some(r.age_years), 0),
            format_opt(r.weight_kg, 2),
            format_opt(r.height_m, 2),
            format_opt(r.bmi, 2),
            r.bmi_label.to_string(),
            r.display.ideal_weight.clone(),
            format_opt(r.body_density, 4),
            format_opt(r.body_fat_percent, 2),
            r.fat_label.to_string(),
            format_opt(r.lean_mass_kg, 1),
            format_opt(r.fat_mass_kg, 1),
            format_opt(r.lean_mass_percent, 1),
        ]
        .join("\t");
        writeln!(w, "{}", row)?;
    }

    w.flush()
}

/// One row per student: latest values plus the change in body fat and lean
/// mass since their first assessment with an estimate.
fn write_user_tsv(input: &Stage6Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(
        w,
        "user_id\tn_assessments\tlatest_record_id\tlatest_bmi\tlatest_bmi_label\tlatest_body_fat_percent\tlatest_fat_label\tlatest_lean_mass_kg\tbody_fat_change\tlean_mass_change_kg"
    )?;

    for (user, idxs) in group_by_user(input.records) {
        let Some(&last) = idxs.last() else {
            continue;
        };
        let Some(latest) = input.results.get(last) else {
            continue;
        };

        let with_fat = idxs
            .iter()
            .filter_map(|&i| input.results.get(i))
            .filter(|r| r.body_fat_percent.is_some())
            .collect::<Vec<_>>();
        let (fat_change, lean_change) = match (with_fat.first(), with_fat.last()) {
            (Some(a), Some(b)) if with_fat.len() > 1 => {
                (
                    b.body_fat_percent.zip(a.body_fat_percent).map(|(b, a)| b - a),
                    b.lean_mass_kg.zip(a.lean_mass_kg).map(|(b, a)| b - a),
                )
            }
            _ => (None, None),
        };

        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            user,
            idxs.len(),
            input.records[last].input.record_id().unwrap_or_default(),
            format_opt(latest.bmi, 2),
            latest.bmi_label,
            format_opt(latest.body_fat_percent, 2),
            latest.fat_label,
            format_opt(latest.lean_mass_kg, 1),
            format_opt(fat_change, 2),
            format_opt(lean_change, 1),
        )?;
    }

    w.flush()
}

/// Records without a user id each form their own group, keyed `#<index>`.
fn group_by_user(records: &[AssessmentRecord]) -> BTreeMap<String, Vec<usize>> {
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (pos, record) in records.iter().enumerate() {
        let key = record
            .input
            .user_key()
            .unwrap_or_else(|| format!("#{}", record.index));
        groups.entry(key).or_default().push(pos);
    }
    groups
}

pub fn build_summary(input: &Stage6Input<'_>, mode: ReportMode) -> SummaryData {
    let results = input.results;
    let n = results.len();

    let methods = method_order()
        .iter()
        .map(|m| {
            let count = results.iter().filter(|r| r.method == *m).count();
            CountStat {
                name: m.name(),
                count,
                fraction: fraction(count, n),
            }
        })
        .collect();

    let bmi_categories = bmi_category_order()
        .iter()
        .map(|c| {
            let count = results.iter().filter(|r| r.bmi_category == Some(*c)).count();
            CountStat {
                name: c.label(),
                count,
                fraction: fraction(count, n),
            }
        })
        .collect();

    let fat_categories = fat_category_order()
        .iter()
        .map(|c| {
            let count = results.iter().filter(|r| r.fat_category == Some(*c)).count();
            CountStat {
                name: c.label(),
                count,
                fraction: fraction(count, n),
            }
        })
        .collect();

    let bmi = results.iter().filter_map(|r| r.bmi).collect::<Vec<_>>();
    let fat = results
        .iter()
        .filter_map(|r| r.body_fat_percent)
        .collect::<Vec<_>>();
    let lean = results
        .iter()
        .filter_map(|r| r.lean_mass_kg)
        .collect::<Vec<_>>();
    let age = results.iter().map(|r| r.age_years).collect::<Vec<_>>();

    let insufficient = results
        .iter()
        .filter(|r| r.method == DensityMethod::Insufficient)
        .count();

    let users = input
        .records
        .iter()
        .filter_map(|r| r.input.user_key())
        .collect::<HashSet<_>>();

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
            git_hash: input.git_hash.clone(),
        },
        input: input.input_path.clone(),
        report_mode: mode.name().to_string(),
        reference_date: input.reference_date.format("%Y-%m-%d").to_string(),
        n_records: n,
        n_users: users.len(),
        n_subjects_matched: input.subject_matched.iter().filter(|m| **m).count(),
        insufficient_fraction: fraction(insufficient, n),
        methods,
        bmi_categories,
        fat_categories,
        stats: vec![
            NamedStats::from_values("bmi", &bmi),
            NamedStats::from_values("body_fat_percent", &fat),
            NamedStats::from_values("lean_mass_kg", &lean),
            NamedStats::from_values("age_years", &age),
        ],
        profile: input.profile.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
