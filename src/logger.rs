// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// A Logger owns one compiled template and a severity floor, borrows its display
// reference, and writes to a caller-provided sink. Each change_* call replaces a
// single field; passing None leaves that field alone.
//
// Log calls render the whole line into a buffer first and hand it to the sink
// with a single write_all.

use std::fmt;
use std::io::{self, Write};
use crate::clock::{Clock, SystemClock};
use crate::color::{self, ColorRegistry};
use crate::config::LoggerConfig;
use crate::error::CompileError;
use crate::level::Level;
use crate::render::{render_into, should_emit, CallSite, LineFields};
use crate::template::{compile, CompiledTemplate};

pub struct Logger<'a, W: Write> {
	reference: &'a str,
	sink: W,
	template: CompiledTemplate,
	level: Level,
}

impl<'a, W: Write> Logger<'a, W> {
	/// Compiles `template` (`None` gives an empty template) and builds the logger.
	pub fn create(reference: &'a str, sink: W, template: Option<&str>, level: Level) -> Result<Self, CompileError> {
		let template = match template {
			Some(text) => compile(text)?,
			None => CompiledTemplate::empty(),
		};
		log::debug!("logger '{}' created with {} template instruction(s), floor {}", reference, template.len(), level);
		Ok(Self { reference, sink, template, level })
	}

	/// Builds a logger from a loaded configuration, borrowing its reference.
	pub fn from_config(config: &'a LoggerConfig, sink: W) -> Result<Self, CompileError> {
		Self::create(&config.reference, sink, Some(config.template.as_str()), config.level)
	}

	/// Drops the compiled template and gives the sink back.
	pub fn remove(self) -> W {
		log::debug!("logger '{}' removed", self.reference);
		self.sink
	}

	pub fn reference(&self) -> &'a str {
		self.reference
	}

	pub fn sink(&self) -> &W {
		&self.sink
	}

	pub fn sink_mut(&mut self) -> &mut W {
		&mut self.sink
	}

	pub fn template(&self) -> &CompiledTemplate {
		&self.template
	}

	pub fn level(&self) -> Level {
		self.level
	}

	/// Whether a call at `level` would write anything.
	pub fn enabled(&self, level: Level) -> bool {
		should_emit(self.level, level)
	}

	// ══════════════════════════════════════════════════════════════════════════
	// FIELD CHANGES
	// ══════════════════════════════════════════════════════════════════════════

	pub fn change_reference(&mut self, reference: Option<&'a str>) {
		if let Some(reference) = reference {
			self.reference = reference;
		}
	}

	/// Swaps in a new sink and returns the previous one.
	pub fn change_file(&mut self, sink: Option<W>) -> Option<W> {
		sink.map(|sink| std::mem::replace(&mut self.sink, sink))
	}

	/// Recompiles the template. On error the previous template stays in place.
	pub fn change_format(&mut self, template: Option<&str>) -> Result<(), CompileError> {
		let Some(text) = template else {
			return Ok(());
		};
		match compile(text) {
			Ok(compiled) => {
				self.template = compiled;
				log::debug!("logger '{}' template replaced ({} instruction(s))", self.reference, self.template.len());
				Ok(())
			}
			Err(e) => {
				log::warn!("logger '{}' kept its previous template: {}", self.reference, e);
				Err(e)
			}
		}
	}

	pub fn change_level(&mut self, level: Option<Level>) {
		if let Some(level) = level {
			self.level = level;
		}
	}

	/// Raw form of [`change_level`](Self::change_level): `-1` is a no-op and
	/// anything outside `TRACE..=OFF` clamps to `OFF`.
	pub fn change_level_raw(&mut self, raw: i32) {
		self.change_level(Level::from_raw(raw));
	}

	/// Applies every present value. The other fields are updated even when the
	/// template fails to compile; that failure is returned.
	pub fn change_all(
		&mut self,
		reference: Option<&'a str>,
		sink: Option<W>,
		template: Option<&str>,
		level: Option<Level>,
	) -> Result<(), CompileError> {
		self.change_reference(reference);
		self.change_file(sink);
		self.change_level(level);
		self.change_format(template)
	}

	// ══════════════════════════════════════════════════════════════════════════
	// LOGGING
	// ══════════════════════════════════════════════════════════════════════════

	/// Renders one line with the process-wide colors and the system clock.
	pub fn log(&mut self, call_site: CallSite<'_>, level: Level, message: fmt::Arguments<'_>) -> io::Result<()> {
		if !self.enabled(level) {
			return Ok(());
		}
		let label = color::with_global(|colors| colors.render_label(level));
		self.emit(&label, &SystemClock, call_site, message)
	}

	/// Renders one line with an explicit color registry and clock.
	pub fn log_with(
		&mut self,
		colors: &ColorRegistry,
		clock: &dyn Clock,
		call_site: CallSite<'_>,
		level: Level,
		message: fmt::Arguments<'_>,
	) -> io::Result<()> {
		if !self.enabled(level) {
			return Ok(());
		}
		let label = colors.render_label(level);
		self.emit(&label, clock, call_site, message)
	}

	/// Logs `message`, then one `i<index>: ` line per element of `items`
	/// written by `print_element`.
	pub fn log_array<T, F>(
		&mut self,
		call_site: CallSite<'_>,
		level: Level,
		items: &[T],
		print_element: F,
		message: fmt::Arguments<'_>,
	) -> io::Result<()>
	where
		F: FnMut(&mut dyn Write, &T) -> io::Result<()>,
	{
		if !self.enabled(level) {
			return Ok(());
		}
		self.log(call_site, level, message)?;
		self.write_items(items, print_element)
	}

	/// [`log_array`](Self::log_array) with an explicit color registry and clock.
	#[allow(clippy::too_many_arguments)]
	pub fn log_array_with<T, F>(
		&mut self,
		colors: &ColorRegistry,
		clock: &dyn Clock,
		call_site: CallSite<'_>,
		level: Level,
		items: &[T],
		print_element: F,
		message: fmt::Arguments<'_>,
	) -> io::Result<()>
	where
		F: FnMut(&mut dyn Write, &T) -> io::Result<()>,
	{
		if !self.enabled(level) {
			return Ok(());
		}
		self.log_with(colors, clock, call_site, level, message)?;
		self.write_items(items, print_element)
	}

	fn emit(
		&mut self,
		level_label: &str,
		clock: &dyn Clock,
		call_site: CallSite<'_>,
		message: fmt::Arguments<'_>,
	) -> io::Result<()> {
		let timestamp = clock.timestamp();
		let fields = LineFields {
			reference: self.reference,
			level_label,
			timestamp: &timestamp,
			call_site,
			message,
		};
		let mut line = String::new();
		render_into(&mut line, &self.template, &fields);
		self.sink.write_all(line.as_bytes())
	}

	fn write_items<T, F>(&mut self, items: &[T], mut print_element: F) -> io::Result<()>
	where
		F: FnMut(&mut dyn Write, &T) -> io::Result<()>,
	{
		for (i, item) in items.iter().enumerate() {
			write!(self.sink, "i{}: ", i)?;
			print_element(&mut self.sink as &mut dyn Write, item)?;
		}
		Ok(())
	}
}

impl<W: Write> fmt::Debug for Logger<'_, W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Logger")
			.field("reference", &self.reference)
			.field("template", &self.template)
			.field("level", &self.level)
			.finish_non_exhaustive()
	}
}
