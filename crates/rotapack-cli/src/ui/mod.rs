//! Status lines on stderr.
//!
//! Command results (JSON, modules, resolved paths) go to stdout; everything
//! in this module writes to stderr so output stays pipeable.

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// NO_COLOR wins over FORCE_COLOR; otherwise colors follow whether a user
/// is attached to stderr.
///
/// # Returns
///
/// `true` if colors should be used
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}

/// Decide once whether status lines are colored. Call early in `main`.
///
/// # Arguments
///
/// * `no_color` - The `--no-color` flag; disables colors regardless of the
///   environment
///
/// # Examples
///
/// ```no_run
/// use rotapack_cli::ui;
///
/// ui::init_colors(false);
/// ui::success("Created rotapack.toml");
/// ```
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
