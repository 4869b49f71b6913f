//! Centralized constants for prompt defaults, control bytes, and exit codes.

/// Suffix appended to yes/no prompts when none is configured.
pub const DEFAULT_YES_NO_SUFFIX: &str = " [Y/N]";

/// Prefix written before every prompt message when none is configured.
pub const DEFAULT_INPUT_PREFIX: &str = "> ";

/// Suffix written after every prompt message when none is configured.
pub const DEFAULT_INPUT_SUFFIX: &str = ": ";

/// Reason carried by the input error for an unrecognised yes/no answer.
pub const YES_NO_REASON: &str = "Please specify 'y', 'yes', 'n', or 'no'";

/// Exit status used after an interrupt during a masked read.
pub const INTERRUPT_EXIT_CODE: i32 = 0;

/// Ctrl+C as delivered by a terminal in raw mode.
pub const CTRL_C: u8 = 0x03;

/// Backspace as sent by most terminals.
pub const BACKSPACE: u8 = 0x08;

/// DEL, sent for backspace by xterm-style terminals.
pub const DELETE: u8 = 0x7f;

/// Name of the superuser account on Unix.
pub const ROOT_USERNAME: &str = "root";

/// Raw device that only an Administrator may open on Windows.
pub const WINDOWS_RAW_DEVICE: &str = r"\\.\PHYSICALDRIVE0";

/// Environment variable pointing at the prompt config file.
pub const CONFIG_ENV: &str = "GOAMET_USERUTIL_CONFIG";

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "GOAMET_USERUTIL_LOG";
