//! Rendering of comparison tables for CLI output.

use std::fmt::Write;
use std::str::FromStr;

use console::Style;
use jsoncmplib::ComparisonTable;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text table
    #[default]
    Table,
    /// Pretty-printed JSON of the table structure
    Json,
    /// Comma-separated values
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Render a table in the requested format.
pub fn render(table: &ComparisonTable, format: OutputFormat) -> Result<String, anyhow::Error> {
    match format {
        OutputFormat::Table => Ok(render_text(table)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)? + "\n"),
        OutputFormat::Csv => Ok(render_csv(table)),
    }
}

/// Compute per-column display widths: max of header and every cell.
fn column_widths(table: &ComparisonTable) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.len()).collect();

    for row in &table.rows {
        widths[0] = widths[0].max(row.label.len());
        for (i, value) in row.values.iter().enumerate() {
            widths[i + 1] = widths[i + 1].max(value.len());
        }
    }

    widths
}

/// Render the group header tier: one cell per group, spanning the
/// widths of its sub-columns.
fn render_group_tier(table: &ComparisonTable, widths: &[usize], style: &Style) -> String {
    let groups = match &table.groups {
        Some(groups) => groups,
        None => return String::new(),
    };

    let mut line = format!("{:<width$}", "", width = widths[0]);
    let mut col = 1;

    for group in groups {
        // A group with no surviving keys takes no space
        if group.span == 0 {
            continue;
        }
        let span_width: usize =
            widths[col..col + group.span].iter().sum::<usize>() + 2 * (group.span - 1);
        line.push_str("  ");
        let _ = write!(
            line,
            "{}",
            style.apply_to(format!("{:<width$}", group.label, width = span_width))
        );
        col += group.span;
    }

    line.push('\n');
    line
}

/// Render a plain text table: optional group tier, header row,
/// separator, then one line per document.
fn render_text(table: &ComparisonTable) -> String {
    let widths = column_widths(table);
    let header_style = Style::new().bold();

    let mut out = render_group_tier(table, &widths, &header_style);

    // Header row: label column left-aligned, value columns right-aligned
    let _ = write!(
        out,
        "{}",
        header_style.apply_to(format!("{:<width$}", table.headers[0], width = widths[0]))
    );
    for (header, width) in table.headers[1..].iter().zip(&widths[1..]) {
        let _ = write!(
            out,
            "  {}",
            header_style.apply_to(format!("{:>width$}", header, width = width))
        );
    }
    out.push('\n');

    let total_width: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    for row in &table.rows {
        let _ = write!(out, "{:<width$}", row.label, width = widths[0]);
        for (value, width) in row.values.iter().zip(&widths[1..]) {
            let _ = write!(out, "  {:>width$}", value, width = width);
        }
        out.push('\n');
    }

    out
}

/// Quote a CSV field, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render the table as CSV, one header row and one line per document.
fn render_csv(table: &ComparisonTable) -> String {
    let mut out = String::new();

    let header: Vec<String> = table.headers.iter().map(|h| csv_field(h)).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for row in &table.rows {
        let mut fields = vec![csv_field(&row.label)];
        fields.extend(row.values.iter().map(|v| csv_field(v)));
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}
