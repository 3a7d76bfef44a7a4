// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                 LOGLINE                                      ║
// ║                     Template-Driven Log Line Renderer                        ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// A logger is a name, a sink, a severity floor and a line template. The template
// is written once in a tiny bracket language and compiled once; every log call
// after that just walks the compiled instructions.
//
// 📦 TEMPLATE LANGUAGE
// --------------------
//   [REF] [LEVEL] [DATE] [TIME] [FILENAME] [LINE] [MSG]   dynamic values
//   /[  /]                                               literal brackets
//   [ANYTHING_ELSE]                                      renders as nothing
//
//   "/[[REF]/] [LEVEL] ([FILENAME]:[LINE]) [MSG]\n"  →  [svc] INFO (main.rs:12) ready
//
// 🎨 COLORS
// ---------
// Level labels can be decorated per severity through one process-wide
// ColorRegistry (see color.rs). Decorations are plain prefixes, suffixed with
// a reset sequence automatically.
//
// ⚠️ THREADING
// ------------
// Loggers are plain values with no internal locking. Configure colors before
// logging begins if several threads log at once.
//
// 📜 LICENSE: MIT
//
// ══════════════════════════════════════════════════════════════════════════════

pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod level;
pub mod logger;
pub mod print;
pub mod render;
pub mod template;

pub use clock::{Clock, FixedClock, SystemClock, Timestamp};
pub use color::ColorRegistry;
pub use config::{ColorConfig, LoggerConfig};
pub use constants::DEFAULT_TEMPLATE;
pub use error::{CompileError, ConfigError};
pub use level::Level;
pub use logger::Logger;
pub use render::CallSite;
pub use template::{compile, CompiledTemplate, Field, Instruction};

// ══════════════════════════════════════════════════════════════════════════════
// CALL-SITE MACROS
// ══════════════════════════════════════════════════════════════════════════════
//
// The message is only formatted when the logger's floor lets the call through.
// Sink errors are dropped; call Logger::log directly to observe them.

/// Logs at an explicit level: `log_at!(logger, Level::Info, "x = {}", x)`.
#[macro_export]
macro_rules! log_at {
	($logger:expr, $level:expr, $($arg:tt)+) => {{
		let logger = &mut $logger;
		let level: $crate::Level = $level;
		if logger.enabled(level) {
			let _ = logger.log($crate::CallSite::new(file!(), line!()), level, format_args!($($arg)+));
		}
	}};
}

#[macro_export]
macro_rules! trace {
	($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Trace, $($arg)+) };
}

#[macro_export]
macro_rules! debug {
	($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
	($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! warning {
	($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! error {
	($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Error, $($arg)+) };
}

#[macro_export]
macro_rules! fatal {
	($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Fatal, $($arg)+) };
}

/// `log_array!(logger, Level::Debug, &items, print_int, "{} items", items.len())`
#[macro_export]
macro_rules! log_array {
	($logger:expr, $level:expr, $items:expr, $printer:expr, $($arg:tt)+) => {{
		let logger = &mut $logger;
		let level: $crate::Level = $level;
		if logger.enabled(level) {
			let _ = logger.log_array(
				$crate::CallSite::new(file!(), line!()),
				level,
				$items,
				$printer,
				format_args!($($arg)+),
			);
		}
	}};
}
