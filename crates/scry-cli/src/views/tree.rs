use super::ViewOpts;
use owo_colors::OwoColorize;
use scry_render::CYCLE_MARKER;
use scry_types::RenderNode;

const INDENT: &str = "  ";

/// Formats a render tree into terminal lines.
pub fn format_node(node: &RenderNode, opts: &ViewOpts) -> Vec<String> {
    match node {
        RenderNode::Text(text) => vec![leaf(text, opts)],
        RenderNode::Table { headers, rows } => format_table(headers, rows, opts),
        RenderNode::List(children) => {
            let mut lines = Vec::new();
            for child in children {
                for (i, line) in format_node(child, opts).into_iter().enumerate() {
                    if i == 0 {
                        lines.push(format!("- {line}"));
                    } else {
                        lines.push(format!("{INDENT}{line}"));
                    }
                }
            }
            lines
        }
        RenderNode::KeyValueList(entries) => {
            let mut lines = Vec::new();
            for (key, value) in entries {
                let label = if opts.enable_color {
                    format!("{}", key.bold())
                } else {
                    key.clone()
                };
                match value {
                    RenderNode::Text(text) => lines.push(format!("{label}: {}", leaf(text, opts))),
                    nested => {
                        lines.push(format!("{label}:"));
                        for line in format_node(nested, opts) {
                            lines.push(format!("{INDENT}{line}"));
                        }
                    }
                }
            }
            lines
        }
    }
}

/// Leaf styling: the cycle marker in red, other bracketed markers dimmed,
/// ordinary text untouched.
fn leaf(text: &str, opts: &ViewOpts) -> String {
    if !opts.enable_color {
        return text.to_string();
    }
    if text == CYCLE_MARKER {
        format!("{}", text.red())
    } else if text.starts_with('[') && text.ends_with(']') {
        format!("{}", text.bright_black())
    } else {
        text.to_string()
    }
}

fn format_table(headers: &[String], rows: &[Vec<RenderNode>], opts: &ViewOpts) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            let len = cell.as_text().unwrap_or("").chars().count();
            if column < widths.len() && len > widths[column] {
                widths[column] = len;
            }
        }
    }

    let mut lines = Vec::new();

    let header_cells: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| {
            let padded = format!("{header:<width$}");
            if opts.enable_color {
                format!("{}", padded.bold())
            } else {
                padded
            }
        })
        .collect();
    lines.push(header_cells.join("  ").trim_end().to_string());

    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    lines.push(rule.join("  "));

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| {
                let text = cell.as_text().unwrap_or("");
                format!("{text:<width$}")
            })
            .collect();
        lines.push(cells.join("  ").trim_end().to_string());
    }

    lines
}
