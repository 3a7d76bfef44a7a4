// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Library-wide constants.
// - DEFAULT_TEMPLATE: the stock line layout, escape-encoded in template syntax
// - LEVEL_RESET: suffix appended after every decorated level label
// - DEFAULT_*: the built-in palette installed by ColorRegistry::load_defaults
// - FIELD_*: placeholder names understood by the renderer

/// `[ref][LEVEL] - (file:line)` on the first line, the message on the second.
/// Brackets around REF and LEVEL are escaped so they print literally.
pub const DEFAULT_TEMPLATE: &str = "/[[REF]/]/[[LEVEL]/] - ([FILENAME]:[LINE])\n- [MSG]\n";

pub const LEVEL_RESET: &str = "\x1b[0m";

pub const DEFAULT_TRACE: &str = "\x1b[0;37m"; // light gray
pub const DEFAULT_DEBUG: &str = "\x1b[0;34m"; // blue
pub const DEFAULT_INFO: &str = "\x1b[0;32m"; // green
pub const DEFAULT_WARNING: &str = "\x1b[0;33m"; // yellow
pub const DEFAULT_ERROR: &str = "\x1b[0;31m"; // red
pub const DEFAULT_FATAL: &str = "\x1b[1;31m"; // bold red

pub const FIELD_REF: &str = "REF";
pub const FIELD_LEVEL: &str = "LEVEL";
pub const FIELD_DATE: &str = "DATE";
pub const FIELD_TIME: &str = "TIME";
pub const FIELD_FILENAME: &str = "FILENAME";
pub const FIELD_LINE: &str = "LINE";
pub const FIELD_MSG: &str = "MSG";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
