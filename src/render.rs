// ══════════════════════════════════════════════════════════════════════════════
// RENDER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Evaluates a compiled template against the values of one log call. Rendering
// cannot fail: unknown placeholders produce nothing, and a message whose
// Display impls report an error simply stops short.

use std::fmt::{self, Write};
use crate::clock::Timestamp;
use crate::level::Level;
use crate::template::{CompiledTemplate, Field, Instruction};

/// Source location of a log call, normally captured with `file!()` / `line!()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
	pub file: &'a str,
	pub line: u32,
}

impl<'a> CallSite<'a> {
	pub const fn new(file: &'a str, line: u32) -> Self {
		Self { file, line }
	}
}

/// Everything a placeholder can refer to during one call.
pub struct LineFields<'a> {
	pub reference: &'a str,
	pub level_label: &'a str,
	pub timestamp: &'a Timestamp,
	pub call_site: CallSite<'a>,
	pub message: fmt::Arguments<'a>,
}

/// Whether a message at `severity` passes a logger whose floor is `floor`.
/// `Off` never passes, whatever the floor.
pub fn should_emit(floor: Level, severity: Level) -> bool {
	severity != Level::Off && severity >= floor
}

/// Appends the rendered line to `out`.
///
/// Every `[MSG]` re-renders the message from its format arguments, so a
/// template that mentions MSG twice prints the same message twice.
pub fn render_into(out: &mut String, template: &CompiledTemplate, fields: &LineFields<'_>) {
	for instruction in template.instructions() {
		let field = match instruction {
			Instruction::Literal(text) => {
				out.push_str(text);
				continue;
			}
			Instruction::Placeholder(field) => field,
		};

		match field {
			Field::Ref => out.push_str(fields.reference),
			Field::Level => out.push_str(fields.level_label),
			Field::Date => out.push_str(&fields.timestamp.date),
			Field::Time => out.push_str(&fields.timestamp.time),
			Field::Filename => out.push_str(fields.call_site.file),
			Field::Line => {
				let _ = write!(out, "{}", fields.call_site.line);
			}
			Field::Msg => {
				let _ = out.write_fmt(fields.message);
			}
			Field::Unknown(_) => {}
		}
	}
}

pub fn render_to_string(template: &CompiledTemplate, fields: &LineFields<'_>) -> String {
	let mut out = String::new();
	render_into(&mut out, template, fields);
	out
}
