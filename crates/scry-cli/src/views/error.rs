use super::ViewOpts;
use owo_colors::OwoColorize;

/// Recoverable failure panel shown instead of results, never instead of the
/// whole program.
pub fn format_error_panel(message: &str, opts: &ViewOpts) -> Vec<String> {
    let heading = "Something went wrong while rendering the results.";
    vec![
        if opts.enable_color {
            format!("{}", heading.red().bold())
        } else {
            heading.to_string()
        },
        format!("  {message}"),
    ]
}
