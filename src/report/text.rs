use crate::report::{CountStat, SummaryData, format_opt};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Body Composition Report\n");
    out.push_str("=======================\n\n");

    out.push_str("1. Input\n");
    out.push_str(&format!("Source: {}\n", data.input));
    out.push_str(&format!("Reference date: {}\n", data.reference_date));
    out.push_str(&format!("Records: {}\n", data.n_records));
    out.push_str(&format!("Students: {}\n", data.n_users));
    out.push_str(&format!(
        "Records matched to a student profile: {}\n\n",
        data.n_subjects_matched
    ));

    out.push_str("2. Estimation methods\n");
    out.push_str(&format_counts(&data.methods));
    out.push_str(&format!(
        "{}\n\n",
        coverage_statement(data.insufficient_fraction)
    ));

    out.push_str("3. BMI\n");
    push_stat_line(&mut out, data, "bmi", "BMI", 1);
    out.push_str(&format_counts(&data.bmi_categories));
    out.push('\n');

    out.push_str("4. Body fat\n");
    push_stat_line(&mut out, data, "body_fat_percent", "Body fat %", 2);
    push_stat_line(&mut out, data, "lean_mass_kg", "Lean mass kg", 1);
    out.push_str(&format_counts(&data.fat_categories));
    out.push('\n');

    out.push_str("5. Assumptions\n");
    out.push_str(&format!(
        "Age fallback: {} years when neither age nor date of birth is known\n",
        data.profile.fallback_age_years
    ));
    out.push_str(&format!(
        "Seven-site estimate requires at least {} measured skinfolds\n",
        data.profile.seven_site_min_sites
    ));
    out.push_str("Unspecified sex is treated as male\n");

    out
}

fn push_stat_line(out: &mut String, data: &SummaryData, name: &str, title: &str, decimals: usize) {
    let Some(stat) = data.stat(name) else {
        return;
    };
    if stat.n == 0 {
        out.push_str(&format!("{title}: no values\n"));
        return;
    }
    out.push_str(&format!(
        "{title} median: {} (p10 {}, p90 {}, n={})\n",
        format_opt(stat.median, decimals),
        format_opt(stat.p10, decimals),
        format_opt(stat.p90, decimals),
        stat.n
    ));
}

fn format_counts(counts: &[CountStat]) -> String {
    let mut out = String::new();
    for c in counts {
        if c.count == 0 {
            continue;
        }
        out.push_str(&format!(
            "  {}: {} ({:.1}%)\n",
            c.name,
            c.count,
            c.fraction * 100.0
        ));
    }
    out
}

fn coverage_statement(insufficient_fraction: f64) -> &'static str {
    if insufficient_fraction == 0.0 {
        "Body fat could be estimated for every record."
    } else if insufficient_fraction < 0.25 {
        "A few records lack enough skinfolds for an estimate."
    } else {
        "Many records lack enough skinfolds for an estimate."
    }
}
