//! Table rendering
//!
//! Formats the table (or its aggregate result, when one is present) as
//! text. Three visual styles are supported, mirroring common tabular
//! output conventions: a box-drawn grid, Markdown-style pipes, and HTML
//! markup. Numeric columns are right-aligned in the text formats.

use clap::ValueEnum;

use crate::table::{CellValue, Table};

/// Visual style of the rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    /// Box-drawn ASCII grid
    Grid,
    /// Markdown-style pipe table
    Pipe,
    /// HTML table markup
    Html,
}

/// How the header row is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeaderMode {
    /// Column names as the header row
    Keys,
    /// First data row promoted to the header
    Firstrow,
}

/// Render the table in the requested format.
///
/// When an aggregate result is present, exactly that single-row mapping
/// is rendered; otherwise all surviving records, with column names as
/// headers in record field order. An empty table renders as an empty or
/// headers-only table, never an error.
pub fn render(table: &Table, format: TableFormat, header_mode: HeaderMode) -> String {
    let frame = build_frame(table, header_mode);
    match format {
        TableFormat::Grid => render_grid(&frame),
        TableFormat::Pipe => render_pipe(&frame),
        TableFormat::Html => render_html(&frame),
    }
}

/// Stringified table contents plus per-column alignment
struct Frame {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    right_align: Vec<bool>,
}

fn build_frame(table: &Table, header_mode: HeaderMode) -> Frame {
    let (headers, cell_rows): (Vec<String>, Vec<Vec<CellValue>>) =
        if let Some(aggregate) = table.aggregated() {
            (
                vec![aggregate.label.clone()],
                vec![vec![CellValue::Number(aggregate.value)]],
            )
        } else {
            (
                table.columns().to_vec(),
                table
                    .records()
                    .iter()
                    .map(|record| record.values().cloned().collect())
                    .collect(),
            )
        };

    let right_align = (0..headers.len())
        .map(|index| {
            !cell_rows.is_empty()
                && cell_rows
                    .iter()
                    .all(|row| row.get(index).is_some_and(CellValue::is_number))
        })
        .collect();

    let mut rows: Vec<Vec<String>> = cell_rows
        .iter()
        .map(|row| row.iter().map(render_cell).collect())
        .collect();

    let mut headers = headers;
    if header_mode == HeaderMode::Firstrow && !rows.is_empty() {
        headers = rows.remove(0);
    }

    Frame {
        headers,
        rows,
        right_align,
    }
}

fn render_cell(value: &CellValue) -> String {
    value.to_string()
}

fn column_widths(frame: &Frame) -> Vec<usize> {
    let mut widths: Vec<usize> = frame
        .headers
        .iter()
        .map(|header| header.chars().count())
        .collect();

    for row in &frame.rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() {
                widths[index] = widths[index].max(cell.chars().count());
            }
        }
    }

    widths
}

fn format_row(cells: &[String], widths: &[usize], right_align: &[bool]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let text = cells.get(index).map(String::as_str).unwrap_or("");
            if right_align.get(index).copied().unwrap_or(false) {
                format!("{:>width$}", text, width = width)
            } else {
                format!("{:<width$}", text, width = width)
            }
        })
        .collect();

    format!("| {} |", padded.join(" | "))
}

fn rule(widths: &[usize], fill: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| fill.to_string().repeat(width + 2))
        .collect();

    format!("+{}+", segments.join("+"))
}

fn render_grid(frame: &Frame) -> String {
    if frame.headers.is_empty() {
        return String::new();
    }

    let widths = column_widths(frame);
    let border = rule(&widths, '-');
    let header_rule = rule(&widths, '=');

    let mut lines = vec![
        border.clone(),
        format_row(&frame.headers, &widths, &frame.right_align),
        header_rule,
    ];
    for row in &frame.rows {
        lines.push(format_row(row, &widths, &frame.right_align));
        lines.push(border.clone());
    }

    lines.join("\n")
}

fn render_pipe(frame: &Frame) -> String {
    if frame.headers.is_empty() {
        return String::new();
    }

    let widths = column_widths(frame);
    let separator: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            if frame.right_align.get(index).copied().unwrap_or(false) {
                format!("{}:", "-".repeat(width + 1))
            } else {
                format!(":{}", "-".repeat(width + 1))
            }
        })
        .collect();

    let mut lines = vec![
        format_row(&frame.headers, &widths, &frame.right_align),
        format!("|{}|", separator.join("|")),
    ];
    for row in &frame.rows {
        lines.push(format_row(row, &widths, &frame.right_align));
    }

    lines.join("\n")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn render_html(frame: &Frame) -> String {
    if frame.headers.is_empty() {
        return String::new();
    }

    let header_cells: Vec<String> = frame
        .headers
        .iter()
        .map(|header| format!("<th>{}</th>", escape_html(header)))
        .collect();

    let mut lines = vec![
        "<table>".to_string(),
        "<thead>".to_string(),
        format!("<tr>{}</tr>", header_cells.join("")),
        "</thead>".to_string(),
        "<tbody>".to_string(),
    ];
    for row in &frame.rows {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| format!("<td>{}</td>", escape_html(cell)))
            .collect();
        lines.push(format!("<tr>{}</tr>", cells.join("")));
    }
    lines.push("</tbody>".to_string());
    lines.push("</table>".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{AggregateResult, Record, Table};

    fn sample_table() -> Table {
        let columns = vec!["name".to_string(), "rating".to_string()];
        let records = vec![
            Record::from_raw_fields(&columns, ["iphone", "4.9"]),
            Record::from_raw_fields(&columns, ["galaxy", "4.8"]),
        ];
        Table::from_parts(columns, records)
    }

    #[test]
    fn test_grid_format_structure() {
        let table = sample_table();
        let output = render(&table, TableFormat::Grid, HeaderMode::Keys);
        let lines: Vec<&str> = output.lines().collect();

        // border, header, header rule, then (row, border) per record
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("+-"));
        assert!(lines[1].contains("name"));
        assert!(lines[1].contains("rating"));
        assert!(lines[2].starts_with("+="));
        assert!(lines[3].contains("iphone"));
        assert!(lines[5].contains("galaxy"));
    }

    #[test]
    fn test_grid_right_aligns_numeric_columns() {
        let table = sample_table();
        let output = render(&table, TableFormat::Grid, HeaderMode::Keys);

        // "rating" is 6 wide, so numeric cells pick up leading padding
        assert!(output.contains("|    4.9 |"));
        assert!(output.contains("| iphone |"));
    }

    #[test]
    fn test_pipe_format_structure() {
        let table = sample_table();
        let output = render(&table, TableFormat::Pipe, HeaderMode::Keys);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("| name"));
        assert!(lines[1].contains("---"));
        assert!(lines[1].ends_with(":|"), "numeric column separator: {}", lines[1]);
        assert!(lines[2].contains("iphone"));
    }

    #[test]
    fn test_html_format_structure() {
        let table = sample_table();
        let output = render(&table, TableFormat::Html, HeaderMode::Keys);

        assert!(output.starts_with("<table>"));
        assert!(output.ends_with("</table>"));
        assert!(output.contains("<th>name</th>"));
        assert!(output.contains("<td>iphone</td>"));
        assert!(output.contains("<td>4.9</td>"));
    }

    #[test]
    fn test_html_escapes_markup_in_cells() {
        let columns = vec!["note".to_string()];
        let records = vec![Record::from_raw_fields(&columns, ["<b>&co"])];
        let table = Table::from_parts(columns, records);

        let output = render(&table, TableFormat::Html, HeaderMode::Keys);
        assert!(output.contains("<td>&lt;b&gt;&amp;co</td>"));
    }

    #[test]
    fn test_aggregate_result_renders_as_single_row() {
        let mut table = sample_table();
        table.set_aggregated(AggregateResult {
            label: "rating_max".to_string(),
            value: 4.9,
        });

        let output = render(&table, TableFormat::Grid, HeaderMode::Keys);
        assert!(output.contains("rating_max"));
        assert!(output.contains("4.9"));
        assert!(!output.contains("iphone"));
    }

    #[test]
    fn test_firstrow_mode_promotes_first_record() {
        let table = sample_table();
        let output = render(&table, TableFormat::Pipe, HeaderMode::Firstrow);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("iphone"));
        assert!(lines[2].contains("galaxy"));
    }

    #[test]
    fn test_empty_table_renders_headers_only() {
        let table = Table::from_parts(
            vec!["name".to_string(), "rating".to_string()],
            Vec::new(),
        );

        let output = render(&table, TableFormat::Grid, HeaderMode::Keys);
        assert!(output.contains("name"));
        assert!(!output.contains("| 4.9"));
    }

    #[test]
    fn test_integer_valued_numbers_render_without_decimals() {
        let columns = vec!["price".to_string()];
        let records = vec![Record::from_raw_fields(&columns, ["999.0"])];
        let table = Table::from_parts(columns, records);

        let output = render(&table, TableFormat::Pipe, HeaderMode::Keys);
        assert!(output.contains("999"));
        assert!(!output.contains("999.0"));
    }
}
