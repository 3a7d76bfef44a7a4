// ══════════════════════════════════════════════════════════════════════════════
// LOGLINE CLI
// ══════════════════════════════════════════════════════════════════════════════
//
// Small companion tool for writing templates:
//   logline check   "<template>"      show what a template compiles to
//   logline preview "<message>"       render one line through a real logger
//
// Status messages go to stderr; the rendered line is the only thing on stdout.

mod status;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use colored::*;
use logline::color;
use logline::{compile, CallSite, Field, Instruction, Level, Logger, LoggerConfig};
use crate::status::{report, Status};

/// Compile and preview bracket log templates
#[derive(Parser)]
#[command(name = "logline")]
#[command(version)]
#[command(about = "Compile and preview bracket log templates", long_about = None)]
struct Cli {
	/// Disable level colors and colored status output
	#[arg(long, global = true)]
	no_color: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Compile a template and list its instructions
	Check {
		/// Template text, e.g. "/[[REF]/] [LEVEL] [MSG]"
		template: String,
	},

	/// Render one message through a logger
	Preview {
		/// Message text substituted for [MSG]
		message: String,

		/// Template text (overrides the config file)
		#[arg(short, long)]
		template: Option<String>,

		/// TOML logger configuration
		#[arg(short, long)]
		config: Option<PathBuf>,

		/// Severity of the previewed message
		#[arg(short, long, default_value = "info")]
		level: Level,

		/// Minimum severity the logger lets through (overrides the config file)
		#[arg(short, long)]
		floor: Option<Level>,

		/// Logger reference shown by [REF] (overrides the config file)
		#[arg(short, long)]
		reference: Option<String>,

		/// File name shown by [FILENAME]
		#[arg(long, default_value = "preview")]
		file: String,

		/// Line number shown by [LINE]
		#[arg(long, default_value_t = 1)]
		line: u32,
	},
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	if cli.no_color {
		colored::control::set_override(false);
	}

	let result = match cli.command {
		Commands::Check { template } => check(&template),
		Commands::Preview { message, template, config, level, floor, reference, file, line } => {
			let overrides = Overrides { template, floor, reference };
			preview(&message, config, overrides, level, CallSite::new(&file, line), cli.no_color)
		}
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			report(Status::Error, &e);
			ExitCode::FAILURE
		}
	}
}

fn check(template: &str) -> Result<(), String> {
	let compiled = compile(template).map_err(|e| format!("Template rejected: {}", e))?;

	report(Status::Success, &format!("Compiled into {} instruction(s)", compiled.len()));
	for (i, instruction) in compiled.instructions().iter().enumerate() {
		match instruction {
			Instruction::Literal(text) => println!("{:>4}  literal      {:?}", i, text),
			Instruction::Placeholder(Field::Unknown(name)) => {
				println!("{:>4}  {}  [{}]", i, "unknown    ".yellow(), name);
			}
			Instruction::Placeholder(field) => println!("{:>4}  {}  [{}]", i, "placeholder".cyan(), field.name()),
		}
	}

	let unknown = compiled
		.instructions()
		.iter()
		.filter(|i| matches!(i, Instruction::Placeholder(Field::Unknown(_))))
		.count();
	if unknown > 0 {
		report(Status::Warning, &format!("{} unknown placeholder(s) will render as nothing", unknown));
	}
	Ok(())
}

struct Overrides {
	template: Option<String>,
	floor: Option<Level>,
	reference: Option<String>,
}

fn preview(
	message: &str,
	config_path: Option<PathBuf>,
	overrides: Overrides,
	level: Level,
	call_site: CallSite<'_>,
	no_color: bool,
) -> Result<(), String> {
	let mut config = match config_path {
		Some(path) => LoggerConfig::load(&path).map_err(|e| e.to_string())?,
		None => LoggerConfig::default(),
	};
	if let Some(template) = overrides.template {
		config.template = template;
	}
	if let Some(floor) = overrides.floor {
		config.level = floor;
	}
	if let Some(reference) = overrides.reference {
		config.reference = reference;
	}

	color::with_global_mut(|registry| {
		registry.reset_all();
		if !no_color {
			registry.load_defaults();
			config.apply_colors(registry);
		}
	});

	report(Status::Info, &format!("Rendering a {} message as '{}'", level, config.reference.cyan()));
	let mut logger = Logger::from_config(&config, io::stdout()).map_err(|e| format!("Template rejected: {}", e))?;
	if !logger.enabled(level) {
		report(Status::Warning, &format!("{} is below the logger floor ({}); nothing written", level, logger.level()));
		return Ok(());
	}

	logger
		.log(call_site, level, format_args!("{}", message))
		.map_err(|e| format!("Cannot write to stdout: {}", e))?;
	Ok(())
}
