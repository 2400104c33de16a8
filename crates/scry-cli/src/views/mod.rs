pub mod canvas;
pub mod docs;
pub mod error;
pub mod tree;

use is_terminal::IsTerminal;

/// Options shared by the plain-text views.
#[derive(Debug, Clone)]
pub struct ViewOpts {
    pub enable_color: bool,
}

impl Default for ViewOpts {
    fn default() -> Self {
        Self { enable_color: true }
    }
}

impl ViewOpts {
    /// Color on only when stdout is a terminal.
    pub fn detect() -> Self {
        Self {
            enable_color: std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self {
            enable_color: false,
        }
    }
}
