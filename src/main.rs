use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use bodycomp::input::{SubjectIndex, load_profile, load_records, load_subjects};
use bodycomp::logging::init_tracing;
use bodycomp::model::composition::DensityMethod;
use bodycomp::model::raw::{RawAssessmentInput, Subject};
use bodycomp::model::thresholds::ThresholdProfile;
use bodycomp::pipeline::compute_body_composition_at;
use bodycomp::pipeline::stage5_aggregate::bmi_gauge_position;
use bodycomp::pipeline::stage6_report::{ReportMode, Stage6Input, write_reports};
use bodycomp::report::json::render_result_json;

#[derive(Parser, Debug)]
#[command(author, version, about = "Body-composition estimates from gym assessment records", long_about = None)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute compositions for a file of assessments and write reports
    Run(RunArgs),
    /// Compute the composition of a single assessment given as JSON
    Compute(ComputeArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Assessments as a JSON array, `{"data": [...]}` envelope or JSON Lines (.gz allowed)
    #[arg(long)]
    input: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Students (id, date_of_birth, gender) matched to assessments by user_id
    #[arg(long)]
    students: Option<PathBuf>,

    /// Threshold profile JSON; missing keys keep their defaults
    #[arg(long)]
    profile: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ModeOpt::Record)]
    mode: ModeOpt,

    /// Reference date for ages computed from a date of birth (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,
}

#[derive(Parser, Debug)]
struct ComputeArgs {
    /// Assessment JSON object
    #[arg(long)]
    record: String,

    /// Student JSON object
    #[arg(long)]
    subject: Option<String>,

    #[arg(long)]
    profile: Option<PathBuf>,

    #[arg(long, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeOpt {
    /// One row per assessment
    Record,
    /// One row per student with progress since the first assessment
    User,
}

impl From<ModeOpt> for ReportMode {
    fn from(value: ModeOpt) -> Self {
        match value {
            ModeOpt::Record => ReportMode::Record,
            ModeOpt::User => ReportMode::User,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Run(args) => run_batch(&args),
        Command::Compute(args) => run_single(&args),
    }
}

fn run_batch(args: &RunArgs) -> Result<(), String> {
    let profile = resolve_profile(args.profile.as_deref())?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let records = load_records(&args.input).map_err(|e| e.to_string())?;
    let subjects = match &args.students {
        Some(path) => load_subjects(path).map_err(|e| e.to_string())?,
        None => SubjectIndex::new(),
    };
    info!(
        "loaded {} assessments and {} students from {}",
        records.len(),
        subjects.len(),
        args.input.display()
    );

    let mut results = Vec::with_capacity(records.len());
    let mut matched = Vec::with_capacity(records.len());
    for record in &records {
        let subject = record.input.user_key().and_then(|k| subjects.get(&k));
        if args.students.is_some() && subject.is_none() {
            warn!(
                "no student profile for assessment {} (user_id {})",
                record.index,
                record.input.user_key().unwrap_or_else(|| "-".to_string())
            );
        }
        let result = compute_body_composition_at(&record.input, subject, today, &profile);
        if result.method == DensityMethod::Insufficient {
            warn!(
                "assessment {} has too few skinfolds for a body-fat estimate",
                record.index
            );
        }
        matched.push(subject.is_some());
        results.push(result);
    }

    let input = Stage6Input {
        records: &records,
        results: &results,
        subject_matched: &matched,
        input_path: args.input.display().to_string(),
        reference_date: today,
        profile: &profile,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: read_git_hash(&PathBuf::from(".")),
    };
    write_reports(&input, &args.out, args.mode.into()).map_err(|e| e.to_string())?;
    info!("reports written to {}", args.out.display());

    Ok(())
}

fn run_single(args: &ComputeArgs) -> Result<(), String> {
    let profile = resolve_profile(args.profile.as_deref())?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let record: RawAssessmentInput =
        serde_json::from_str(&args.record).map_err(|e| format!("invalid --record: {e}"))?;
    let subject: Option<Subject> = args
        .subject
        .as_deref()
        .map(serde_json::from_str::<Subject>)
        .transpose()
        .map_err(|e| format!("invalid --subject: {e}"))?;

    let result = compute_body_composition_at(&record, subject.as_ref(), today, &profile);
    info!(
        method = result.method.name(),
        gauge = bmi_gauge_position(result.bmi, &profile),
        "computed body composition"
    );
    let json = render_result_json(&result).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn resolve_profile(path: Option<&Path>) -> Result<ThresholdProfile, String> {
    match path {
        Some(p) => load_profile(p).map_err(|e| e.to_string()),
        None => Ok(ThresholdProfile::default_v1()),
    }
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn read_git_hash(repo_root: &Path) -> Option<String> {
    let head = repo_root.join(".git/HEAD");
    let content = std::fs::read_to_string(head).ok()?;
    if let Some(ref_line) = content.strip_prefix("ref: ") {
        let ref_path = repo_root.join(".git").join(ref_line.trim());
        return std::fs::read_to_string(ref_path)
            .ok()
            .map(|s| s.trim().to_string());
    }
    Some(content.trim().to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
