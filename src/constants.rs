//! # Constants
//!
//! Names, file names, and candidate lists shared across the crate.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Command name used for installation and help text.
pub const APP_NAME: &str = "cedit";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration file name, stored next to the executable.
pub const CONFIG_FILE_NAME: &str = "cedit.toml";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "CEDIT_CONFIG";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "CEDIT_LOG";

/// Editors tried in order when none is configured.
pub const DEFAULT_EDITORS: &[&str] = &["kate", "gedit", "leafpad", "kwrite", "nano", "vim", "vi"];

/// Elevation commands tried in order when none is configured.
pub const DEFAULT_ELEVATION_COMMANDS: &[&str] = &["kdesudo", "gksudo", "pkexec", "sudo", "doas"];

/// Directories searched after `$PATH` when resolving executables.
pub const FALLBACK_BIN_DIRS: &[&str] = &["/usr/bin", "/usr/local/bin", "/bin"];

/// Preferred system-wide install directory, used when present on `$PATH`.
pub const SYSTEM_INSTALL_DIR: &str = "/usr/local/bin";

/// Standard system binary directory, the last resort for installs.
pub const SYSTEM_BIN_DIR: &str = "/usr/bin";

/// Home-relative bin directories checked for `--install --user`.
pub const USER_BIN_DIRS: &[&str] = &[".local/bin", "bin"];

/// Exit code when the user declines a prompt.
///
/// With `--wait` the editor's own exit code is passed through unchanged, so
/// an editor exiting with 2 is indistinguishable by code alone. Cancellation
/// also prints `Cancelled.` on stderr.
pub const EXIT_CANCELLED: u8 = 2;

/// Long description printed by `--about`.
pub const ABOUT: &str = "\
cedit opens files with your favorite editor, using your favorite elevation
command only when the file needs it. Instead of a 'permission denied'
message you are asked for your password.

If no favorites are set yet, cedit looks for popular editors and elevation
commands and uses the first one found. If none are found you have to set
your own with `cedit --editor PATH` or `cedit --elevcmd PATH`.

To install cedit as a command for a single user run:
    cedit --install --user

To install it for all users run:
    sudo cedit --install";
