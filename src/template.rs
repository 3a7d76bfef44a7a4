// ══════════════════════════════════════════════════════════════════════════════
// TEMPLATE MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Compiles template text into a flat instruction list, once. The renderer walks
// that list on every log call without looking at the original text again.
//
// Syntax, scanned left to right:
//   /[  /]       literal bracket (escape)
//   [NAME]       placeholder; NAME may be empty or unknown
//   anything     literal text, collected into one maximal run

use std::collections::TryReserveError;
use std::str::FromStr;
use crate::constants::{FIELD_DATE, FIELD_FILENAME, FIELD_LEVEL, FIELD_LINE, FIELD_MSG, FIELD_REF, FIELD_TIME};
use crate::error::CompileError;

// ══════════════════════════════════════════════════════════════════════════════
// INSTRUCTIONS
// ══════════════════════════════════════════════════════════════════════════════

/// A placeholder name, resolved at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
	Ref,
	Level,
	Date,
	Time,
	Filename,
	Line,
	Msg,
	/// Kept so the template still compiles; renders as nothing.
	Unknown(String),
}

impl Field {
	pub fn from_name(name: &str) -> Field {
		match name {
			FIELD_REF => Field::Ref,
			FIELD_LEVEL => Field::Level,
			FIELD_DATE => Field::Date,
			FIELD_TIME => Field::Time,
			FIELD_FILENAME => Field::Filename,
			FIELD_LINE => Field::Line,
			FIELD_MSG => Field::Msg,
			other => Field::Unknown(other.to_string()),
		}
	}

	pub fn name(&self) -> &str {
		match self {
			Field::Ref => FIELD_REF,
			Field::Level => FIELD_LEVEL,
			Field::Date => FIELD_DATE,
			Field::Time => FIELD_TIME,
			Field::Filename => FIELD_FILENAME,
			Field::Line => FIELD_LINE,
			Field::Msg => FIELD_MSG,
			Field::Unknown(name) => name,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
	Literal(String),
	Placeholder(Field),
}

/// Ordered, immutable result of [`compile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledTemplate {
	instructions: Vec<Instruction>,
}

impl CompiledTemplate {
	/// A template with no instructions; renders to nothing.
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn instructions(&self) -> &[Instruction] {
		&self.instructions
	}

	pub fn len(&self) -> usize {
		self.instructions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.instructions.is_empty()
	}

	/// True if any placeholder in the template resolves to `field`.
	pub fn uses(&self, field: &Field) -> bool {
		self.instructions.iter().any(|i| matches!(i, Instruction::Placeholder(f) if f == field))
	}
}

impl FromStr for CompiledTemplate {
	type Err = CompileError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		compile(s)
	}
}

// ══════════════════════════════════════════════════════════════════════════════
// COMPILER
// ══════════════════════════════════════════════════════════════════════════════

/// Parses `template` into instructions. Empty input yields an empty template.
pub fn compile(template: &str) -> Result<CompiledTemplate, CompileError> {
	let bytes = template.as_bytes();
	let mut instructions: Vec<Instruction> = Vec::new();
	let mut i = 0;

	while i < bytes.len() {
		let instruction = if let Some(bracket) = escape_at(bytes, i) {
			i += 2;
			Instruction::Literal(owned(bracket)?)
		} else if bytes[i] == b'[' {
			let open = i;
			let close = bytes[open + 1..]
				.iter()
				.position(|&b| b == b']')
				.map(|n| open + 1 + n)
				.ok_or(CompileError::UnterminatedPlaceholder { offset: open })?;
			i = close + 1;
			Instruction::Placeholder(Field::from_name(&template[open + 1..close]))
		} else {
			let start = i;
			while i < bytes.len() && bytes[i] != b'[' && escape_at(bytes, i).is_none() {
				i += 1;
			}
			Instruction::Literal(owned(&template[start..i])?)
		};

		instructions.try_reserve(1)?;
		instructions.push(instruction);
	}

	Ok(CompiledTemplate { instructions })
}

/// Returns the bracket text if `/[` or `/]` starts at `i`.
fn escape_at(bytes: &[u8], i: usize) -> Option<&'static str> {
	if bytes[i] != b'/' {
		return None;
	}
	match bytes.get(i + 1) {
		Some(b'[') => Some("["),
		Some(b']') => Some("]"),
		_ => None,
	}
}

fn owned(text: &str) -> Result<String, TryReserveError> {
	let mut s = String::new();
	s.try_reserve_exact(text.len())?;
	s.push_str(text);
	Ok(s)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::constants::DEFAULT_TEMPLATE;

	fn lit(s: &str) -> Instruction {
		Instruction::Literal(s.to_string())
	}

	fn ph(f: Field) -> Instruction {
		Instruction::Placeholder(f)
	}

	#[test]
	fn empty_input_compiles_to_nothing() {
		let t = compile("").unwrap();
		assert!(t.is_empty());
	}

	#[test]
	fn plain_text_is_one_literal() {
		let t = compile("hello, world\n").unwrap();
		assert_eq!(t.instructions(), &[lit("hello, world\n")]);
	}

	#[test]
	fn placeholders_split_literal_runs() {
		let t = compile("a[REF]b[MSG]").unwrap();
		assert_eq!(t.instructions(), &[lit("a"), ph(Field::Ref), lit("b"), ph(Field::Msg)]);
	}

	#[test]
	fn escapes_emit_bracket_literals() {
		let t = compile("/[[REF]/]").unwrap();
		assert_eq!(t.instructions(), &[lit("["), ph(Field::Ref), lit("]")]);
	}

	#[test]
	fn lone_slash_stays_literal() {
		let t = compile("a/b//[c").unwrap();
		assert_eq!(t.instructions(), &[lit("a/b/"), lit("["), lit("c")]);

		let t = compile("a/b/").unwrap();
		assert_eq!(t.instructions(), &[lit("a/b/")]);
	}

	#[test]
	fn literal_before_escape_is_not_merged() {
		let t = compile("x/]y").unwrap();
		assert_eq!(t.instructions(), &[lit("x"), lit("]"), lit("y")]);
	}

	#[test]
	fn empty_and_unknown_names_are_kept() {
		let t = compile("[][NOPE]").unwrap();
		assert_eq!(
			t.instructions(),
			&[ph(Field::Unknown(String::new())), ph(Field::Unknown("NOPE".into()))]
		);
	}

	#[test]
	fn names_are_case_sensitive() {
		let t = compile("[ref]").unwrap();
		assert_eq!(t.instructions(), &[ph(Field::Unknown("ref".into()))]);
	}

	#[test]
	fn unterminated_placeholder_reports_offset() {
		assert_eq!(
			compile("abc[def").unwrap_err(),
			CompileError::UnterminatedPlaceholder { offset: 3 }
		);
	}

	#[test]
	fn multibyte_text_survives() {
		let t = compile("→ [MSG] ✔").unwrap();
		assert_eq!(t.instructions(), &[lit("→ "), ph(Field::Msg), lit(" ✔")]);
	}

	#[test]
	fn default_template_layout() {
		let t: CompiledTemplate = DEFAULT_TEMPLATE.parse().unwrap();
		assert_eq!(
			t.instructions(),
			&[
				lit("["),
				ph(Field::Ref),
				lit("]"),
				lit("["),
				ph(Field::Level),
				lit("]"),
				lit(" - ("),
				ph(Field::Filename),
				lit(":"),
				ph(Field::Line),
				lit(")\n- "),
				ph(Field::Msg),
				lit("\n"),
			]
		);
		assert!(t.uses(&Field::Msg));
		assert!(!t.uses(&Field::Date));
	}
}
