use super::tree::format_node;
use super::ViewOpts;
use crate::canvas::Canvas;
use owo_colors::OwoColorize;

const INDENT: &str = "  ";

/// Formats a canvas into terminal lines.
pub fn format_canvas(canvas: &Canvas, opts: &ViewOpts) -> Vec<String> {
    match canvas {
        Canvas::Empty => {
            let message = "No results to display.";
            vec![if opts.enable_color {
                format!("{}", message.bright_black())
            } else {
                message.to_string()
            }]
        }
        Canvas::Template { title, body } => {
            let mut lines = vec![if opts.enable_color {
                format!("{}", title.cyan().bold())
            } else {
                (*title).to_string()
            }];
            for line in format_node(body, opts) {
                lines.push(format!("{INDENT}{line}"));
            }
            lines
        }
        Canvas::UnknownTemplate { tag, fallback } => {
            let marker = format!("[unknown template] unexpected template: {tag}");
            let mut lines = vec![if opts.enable_color {
                format!("{}", marker.red())
            } else {
                marker
            }];
            for line in format_node(fallback, opts) {
                lines.push(format!("{INDENT}{line}"));
            }
            lines
        }
        Canvas::Plain(node) => format_node(node, opts),
    }
}
