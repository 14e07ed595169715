use crate::model::composition::CompositionResult;
use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}

pub fn render_result_json(result: &CompositionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
