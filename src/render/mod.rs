//! Presentation of analysis results.

pub mod text;

use crate::model::Analytics;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

pub fn render(data: &Analytics, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => text::render_text_report(data),
        Format::Json => render_json_report(data),
    }
}

/// Pretty-printed JSON, newline terminated.
pub fn render_json_report(data: &Analytics) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}
