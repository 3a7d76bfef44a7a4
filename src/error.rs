// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Typed failures returned at the crate boundary. Rendering has no error type of
// its own: unknown placeholders render as nothing and sink failures are plain
// `std::io::Error`s.

use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while turning template text into instructions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
	/// A `[` opened a placeholder that never closed.
	#[error("unterminated placeholder: '[' at byte {offset} has no matching ']'")]
	UnterminatedPlaceholder {
		/// Byte offset of the opening bracket.
		offset: usize,
	},

	/// The host could not reserve storage for the compiled sequence.
	#[error("out of memory while compiling template: {0}")]
	Allocation(#[from] TryReserveError),
}

/// Failure while loading a logger configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("cannot read config file '{path}': {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("malformed config: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("invalid template in config: {0}")]
	Template(#[from] CompileError),
}
