//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the form shortcuts (submit, terms, quit)
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Terms toggle shortcut display
pub const TERMS_SHORTCUT: &str = "Ctrl+T";

/// Quit hint shown at the right of the status bar
/// - macOS: Esc only (Ctrl+C is often remapped)
/// - Linux/Windows: Esc or ^C
#[cfg(target_os = "macos")]
pub const QUIT_HINT: &str = " Esc:quit ";

#[cfg(not(target_os = "macos"))]
pub const QUIT_HINT: &str = " Esc/^C:quit ";
