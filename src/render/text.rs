use crate::model::Analytics;
use std::fmt::Write;

/// Plain-text report, one section per metric.
pub fn render_text_report(data: &Analytics) -> anyhow::Result<String> {
    let mut out = String::new();

    writeln!(out, "unique ips count: {}", data.unique_ips)?;
    write_list(&mut out, "most visited urls", &data.most_visited_urls)?;
    write_list(&mut out, "most active ips", &data.most_active_ips)?;
    writeln!(
        out,
        "lines: {} (matched {}, skipped {})",
        data.stats.lines, data.stats.matched, data.stats.skipped
    )?;

    Ok(out)
}

fn write_list(out: &mut String, title: &str, items: &[String]) -> std::fmt::Result {
    if items.is_empty() {
        return writeln!(out, "{}: -", title);
    }
    writeln!(out, "{}:", title)?;
    for (rank, item) in items.iter().enumerate() {
        writeln!(out, "  {}. {}", rank + 1, item)?;
    }
    Ok(())
}
