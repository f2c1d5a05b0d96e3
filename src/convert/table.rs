//! Markdown table rendering shared by every tabular converter.

/// Escape pipe characters so a value can sit inside a table cell.
pub fn escape_pipe(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Render headers and rows as a GitHub-flavored markdown table.
///
/// Returns an empty string when there are no headers. Rows shorter than the
/// header are padded with empty cells; longer rows keep every cell, so such a
/// row ends up wider than the header and separator.
pub fn to_markdown_table(headers: &[String], rows: &[Vec<String>]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers.iter().map(String::as_str)));
    lines.push(format_row(headers.iter().map(|_| "---")));

    for row in rows {
        let padding = headers.len().saturating_sub(row.len());
        let cells = row.iter().map(String::as_str).chain(std::iter::repeat_n("", padding));
        lines.push(format_row(cells));
    }

    lines.join("\n")
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let escaped: Vec<String> = cells.map(escape_pipe).collect();
    format!("| {} |", escaped.join(" | "))
}
