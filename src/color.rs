// ══════════════════════════════════════════════════════════════════════════════
// COLOR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Per-severity label decorations. A decoration is any prefix string (normally an
// ANSI color code); when one is set the label is followed by LEVEL_RESET.
//
// One registry is shared process-wide through the functions at the bottom of
// this file. Independent registries can be built for tests or for callers that
// pass one explicitly to Logger::log_with.
//
// The global lock only satisfies Rust's rules for statics. A `set` racing a
// render from another thread may still produce either label; callers who care
// must configure colors before logging starts.

use parking_lot::{const_rwlock, RwLock};
use crate::constants::{
	DEFAULT_DEBUG, DEFAULT_ERROR, DEFAULT_FATAL, DEFAULT_INFO, DEFAULT_TRACE, DEFAULT_WARNING, LEVEL_RESET,
};
use crate::level::Level;

const DECORATED_LEVELS: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorRegistry {
	codes: [Option<String>; DECORATED_LEVELS],
}

impl ColorRegistry {
	/// A registry with no decorations.
	pub const fn new() -> Self {
		Self { codes: [None, None, None, None, None, None] }
	}

	/// A registry preloaded with the built-in palette.
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry.load_defaults();
		registry
	}

	/// Sets or clears (`None`) the decoration for `level`. `Off` is ignored.
	pub fn set(&mut self, level: Level, code: Option<&str>) {
		if let Some(slot) = self.codes.get_mut(level.index()) {
			*slot = code.map(str::to_string);
		}
	}

	/// Same as [`set`](Self::set) for a raw level value; out-of-range values are ignored.
	pub fn set_raw(&mut self, raw: i32, code: Option<&str>) {
		if let Some(level) = Level::from_index(raw) {
			self.set(level, code);
		}
	}

	/// Installs light gray, blue, green, yellow, red and bold red for TRACE..FATAL.
	pub fn load_defaults(&mut self) {
		let palette = [DEFAULT_TRACE, DEFAULT_DEBUG, DEFAULT_INFO, DEFAULT_WARNING, DEFAULT_ERROR, DEFAULT_FATAL];
		for (slot, code) in self.codes.iter_mut().zip(palette) {
			*slot = Some(code.to_string());
		}
	}

	pub fn reset_all(&mut self) {
		self.codes = Self::new().codes;
	}

	pub fn decoration(&self, level: Level) -> Option<&str> {
		self.codes.get(level.index()).and_then(|c| c.as_deref())
	}

	/// The level name, wrapped as `decoration + name + reset` when decorated.
	pub fn render_label(&self, level: Level) -> String {
		decorate(level.name(), self.decoration(level))
	}

	/// Like [`render_label`](Self::render_label) but accepts any raw value;
	/// unknown values render as a plain `UNKNOWN`.
	pub fn render_raw_label(&self, raw: i32) -> String {
		match Level::from_index(raw) {
			Some(level) => self.render_label(level),
			None => Level::raw_name(raw).to_string(),
		}
	}
}

fn decorate(name: &str, code: Option<&str>) -> String {
	match code {
		Some(code) => {
			let mut label = String::with_capacity(code.len() + name.len() + LEVEL_RESET.len());
			label.push_str(code);
			label.push_str(name);
			label.push_str(LEVEL_RESET);
			label
		}
		None => name.to_string(),
	}
}

// ══════════════════════════════════════════════════════════════════════════════
// PROCESS-WIDE REGISTRY
// ══════════════════════════════════════════════════════════════════════════════

static GLOBAL: RwLock<ColorRegistry> = const_rwlock(ColorRegistry::new());

/// Runs `f` against the shared registry.
pub fn with_global<R>(f: impl FnOnce(&ColorRegistry) -> R) -> R {
	f(&*GLOBAL.read())
}

/// Runs `f` with mutable access to the shared registry.
pub fn with_global_mut<R>(f: impl FnOnce(&mut ColorRegistry) -> R) -> R {
	f(&mut *GLOBAL.write())
}

pub fn set_level_color(level: Level, code: Option<&str>) {
	with_global_mut(|registry| registry.set(level, code));
}

pub fn load_default_colors() {
	with_global_mut(ColorRegistry::load_defaults);
}

pub fn reset_colors() {
	with_global_mut(ColorRegistry::reset_all);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_registry_renders_plain_names() {
		let registry = ColorRegistry::new();
		for level in Level::ALL {
			assert_eq!(registry.render_label(level), level.name());
		}
	}

	#[test]
	fn set_wraps_label_with_reset() {
		let mut registry = ColorRegistry::new();
		registry.set(Level::Info, Some("X"));
		assert_eq!(registry.render_label(Level::Info), "XINFO\x1b[0m");
		assert_eq!(registry.render_label(Level::Debug), "DEBUG");
	}

	#[test]
	fn none_clears_one_level() {
		let mut registry = ColorRegistry::with_defaults();
		registry.set(Level::Error, None);
		assert_eq!(registry.render_label(Level::Error), "ERROR");
		assert_eq!(registry.render_label(Level::Fatal), "\x1b[1;31mFATAL\x1b[0m");
	}

	#[test]
	fn off_never_carries_a_decoration() {
		let mut registry = ColorRegistry::with_defaults();
		registry.set(Level::Off, Some("X"));
		assert_eq!(registry.render_label(Level::Off), "OFF");
		assert_eq!(registry, ColorRegistry::with_defaults());
	}

	#[test]
	fn out_of_range_raw_levels_are_ignored() {
		let mut registry = ColorRegistry::new();
		registry.set_raw(17, Some("X"));
		registry.set_raw(-3, Some("X"));
		assert_eq!(registry, ColorRegistry::new());
		assert_eq!(registry.render_raw_label(17), "UNKNOWN");
		registry.set_raw(4, Some("E"));
		assert_eq!(registry.render_raw_label(4), "EERROR\x1b[0m");
	}

	#[test]
	fn defaults_then_reset_matches_untouched() {
		let untouched = ColorRegistry::new();
		let mut registry = ColorRegistry::new();
		registry.load_defaults();
		registry.reset_all();
		for level in Level::ALL {
			assert_eq!(registry.render_label(level), untouched.render_label(level));
		}
	}

	#[test]
	fn default_palette() {
		let registry = ColorRegistry::with_defaults();
		assert_eq!(registry.decoration(Level::Trace), Some("\x1b[0;37m"));
		assert_eq!(registry.decoration(Level::Warning), Some("\x1b[0;33m"));
		assert_eq!(registry.decoration(Level::Off), None);
	}
}
