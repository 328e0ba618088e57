//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the shell.
//! Text assets and the seed manifest are loaded at compile time using
//! `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner displayed when a session starts.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Default filesystem hierarchy every session starts from.
pub const SEED_MANIFEST: &str = include_str!("../assets/seed.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the banner.
pub const APP_NAME: &str = "vaultsh";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Prompts
// =============================================================================

/// Name of the root directory, shown in the prompt.
pub const ROOT_NAME: &str = "/";

/// Marker appended to the current path in normal mode.
pub const PROMPT_SUFFIX: &str = "$> ";

/// Word that asks for a hint while a password is expected.
pub const HINT_KEYWORD: &str = "hint";

/// Shown once every hint for a file has been used.
pub const NO_MORE_HINTS: &str = "No more hints available.";
