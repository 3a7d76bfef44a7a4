// ══════════════════════════════════════════════════════════════════════════════
// LEVEL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The seven ordered severities. `Off` doubles as "never emit" when used as a
// message severity and as "suppress everything" when used as a floor.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
	Trace = 0,
	Debug = 1,
	Info = 2,
	Warning = 3,
	Error = 4,
	Fatal = 5,
	Off = 6,
}

/// Raw value meaning "leave the level unchanged" in partial updates.
pub const LEVEL_UNCHANGED: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity name '{0}'")]
pub struct ParseLevelError(pub String);

impl Level {
	/// Every severity in ascending order, `Off` last.
	pub const ALL: [Level; 7] = [
		Level::Trace,
		Level::Debug,
		Level::Info,
		Level::Warning,
		Level::Error,
		Level::Fatal,
		Level::Off,
	];

	/// Converts a raw integer the way the change operations expect it:
	/// `-1` is "absent" (`None`), `0..=6` map onto the enum, anything else clamps to `Off`.
	pub fn from_raw(raw: i32) -> Option<Level> {
		if raw == LEVEL_UNCHANGED {
			return None;
		}
		Some(Self::from_index(raw).unwrap_or(Level::Off))
	}

	/// Strict conversion, no clamping.
	pub fn from_index(raw: i32) -> Option<Level> {
		usize::try_from(raw).ok().and_then(|i| Self::ALL.get(i).copied())
	}

	pub fn index(self) -> usize {
		self as usize
	}

	pub fn name(self) -> &'static str {
		match self {
			Level::Trace => "TRACE",
			Level::Debug => "DEBUG",
			Level::Info => "INFO",
			Level::Warning => "WARNING",
			Level::Error => "ERROR",
			Level::Fatal => "FATAL",
			Level::Off => "OFF",
		}
	}

	/// Name for a raw value that may be out of range.
	pub fn raw_name(raw: i32) -> &'static str {
		Self::from_index(raw).map(Level::name).unwrap_or("UNKNOWN")
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Level {
	type Err = ParseLevelError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_uppercase().as_str() {
			"TRACE" => Ok(Level::Trace),
			"DEBUG" => Ok(Level::Debug),
			"INFO" => Ok(Level::Info),
			"WARNING" | "WARN" => Ok(Level::Warning),
			"ERROR" => Ok(Level::Error),
			"FATAL" => Ok(Level::Fatal),
			"OFF" => Ok(Level::Off),
			_ => Err(ParseLevelError(s.to_string())),
		}
	}
}

impl<'de> Deserialize<'de> for Level {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let name = String::deserialize(deserializer)?;
		name.parse().map_err(serde::de::Error::custom)
	}
}
