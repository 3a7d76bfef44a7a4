// ══════════════════════════════════════════════════════════════════════════════
// CONFIG MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Declarative logger setup loaded from TOML:
//
//   reference = "svc"
//   template  = "[TIME] [LEVEL] [MSG]\n"
//   level     = "warning"
//
//   [colors]
//   defaults = true
//   error    = "\u001b[1;35m"
//   trace    = ""            # empty string clears the level
//
// Every key is optional. The template is compiled during loading so a bad one is
// reported before any logger exists.

use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::color::ColorRegistry;
use crate::constants::DEFAULT_TEMPLATE;
use crate::error::ConfigError;
use crate::level::Level;
use crate::template::compile;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
	pub reference: String,
	pub template: String,
	pub level: Level,
	pub colors: ColorConfig,
}

impl Default for LoggerConfig {
	fn default() -> Self {
		Self {
			reference: "app".to_string(),
			template: DEFAULT_TEMPLATE.to_string(),
			level: Level::Info,
			colors: ColorConfig::default(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
	/// Install the built-in palette before applying the overrides below.
	pub defaults: bool,
	pub trace: Option<String>,
	pub debug: Option<String>,
	pub info: Option<String>,
	pub warning: Option<String>,
	pub error: Option<String>,
	pub fatal: Option<String>,
}

impl ColorConfig {
	pub fn apply(&self, registry: &mut ColorRegistry) {
		if self.defaults {
			registry.load_defaults();
		}
		let overrides = [
			(Level::Trace, &self.trace),
			(Level::Debug, &self.debug),
			(Level::Info, &self.info),
			(Level::Warning, &self.warning),
			(Level::Error, &self.error),
			(Level::Fatal, &self.fatal),
		];
		for (level, code) in overrides {
			if let Some(code) = code {
				registry.set(level, Some(code.as_str()).filter(|c| !c.is_empty()));
			}
		}
	}
}

impl LoggerConfig {
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		let config: LoggerConfig = toml::from_str(text)?;
		compile(&config.template)?;
		Ok(config)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let text = fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
		let config = Self::from_toml_str(&text)?;
		log::debug!("loaded logger config '{}' from {}", config.reference, path.display());
		Ok(config)
	}

	pub fn apply_colors(&self, registry: &mut ColorRegistry) {
		self.colors.apply(registry);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::CompileError;

	#[test]
	fn empty_document_gives_defaults() {
		let config = LoggerConfig::from_toml_str("").unwrap();
		assert_eq!(config, LoggerConfig::default());
		assert_eq!(config.template, DEFAULT_TEMPLATE);
	}

	#[test]
	fn full_document() {
		let config = LoggerConfig::from_toml_str(
			r#"
reference = "svc"
template = "[TIME] [LEVEL] [MSG]\n"
level = "warn"

[colors]
defaults = true
error = "\u001b[1;35m"
trace = ""
"#,
		)
		.unwrap();
		assert_eq!(config.reference, "svc");
		assert_eq!(config.level, Level::Warning);

		let mut registry = ColorRegistry::new();
		config.apply_colors(&mut registry);
		assert_eq!(registry.decoration(Level::Error), Some("\x1b[1;35m"));
		assert_eq!(registry.decoration(Level::Trace), None);
		assert_eq!(registry.decoration(Level::Info), Some("\x1b[0;32m"));
	}

	#[test]
	fn bad_level_name_is_a_parse_error() {
		let err = LoggerConfig::from_toml_str("level = \"loud\"").unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[test]
	fn unknown_key_is_rejected() {
		assert!(matches!(LoggerConfig::from_toml_str("colour = 1"), Err(ConfigError::Parse(_))));
	}

	#[test]
	fn bad_template_is_reported() {
		let err = LoggerConfig::from_toml_str("template = \"oops [MSG\"").unwrap_err();
		assert!(matches!(err, ConfigError::Template(CompileError::UnterminatedPlaceholder { offset: 5 })));
	}

	#[test]
	fn missing_file() {
		let err = LoggerConfig::load("/definitely/not/here.toml").unwrap_err();
		assert!(matches!(err, ConfigError::Read { .. }));
	}
}
