use super::ViewOpts;
use owo_colors::OwoColorize;

/// Formats the full document listing: a count heading, then each document as
/// a pretty-printed JSON block.
pub fn format_docs(docs: &[serde_json::Value], opts: &ViewOpts) -> Vec<String> {
    if docs.is_empty() {
        let message = "No documents found.";
        return vec![if opts.enable_color {
            format!("{}", message.bright_black())
        } else {
            message.to_string()
        }];
    }

    let heading = format!("All documents ({}):", docs.len());
    let mut lines = vec![if opts.enable_color {
        format!("{}", heading.bold())
    } else {
        heading
    }];

    for doc in docs {
        lines.push(String::new());
        let pretty = serde_json::to_string_pretty(doc).unwrap_or_else(|_| doc.to_string());
        for line in pretty.lines() {
            lines.push(line.to_string());
        }
    }

    lines
}
