// ══════════════════════════════════════════════════════════════════════════════
// STATUS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Colored, timestamped status lines for the command-line tool. They go to
// stderr so that stdout carries nothing but rendered log output.

use colored::*;
use chrono::Local;

pub enum Status {
	Info,
	Success,
	Warning,
	Error,
}

pub fn report(status: Status, message: &str) {
	let timestamp = Local::now().format("%H:%M:%S").to_string();
	let marker = match status {
		Status::Info => "·".blue().bold(),
		Status::Success => "✔".green().bold(),
		Status::Warning => "⚠".yellow().bold(),
		Status::Error => "✘".red().bold(),
	};

	eprintln!("[{}] {} {}", timestamp.dimmed(), marker, message);
}
