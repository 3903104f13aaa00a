use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::MucError;
use crate::io::read_text;
use crate::markup::Markup;
use crate::vocabulary::VocabularyMode;

pub const DEFAULT_MIN_WORDS: usize = 50_000;
pub const DEFAULT_SENTENCES: usize = 5;
pub const DEFAULT_CREDENTIALS: &str = "mucletters.yaml";
pub const DEFAULT_API_BASE: &str = "https://api.wordnik.com/v4";
/// Share of original words in a mixed single letter.
pub const DEFAULT_CHANCE_OF_ORIGINAL: f64 = 50.0;

/// Wordnik access, read from a YAML file:
///
/// ```yaml
/// wordnik_api_key: YOUR_KEY
/// api_base: https://api.wordnik.com/v4   # optional
/// ```
#[derive(Deserialize, Debug, Clone)]
pub struct Credentials {
	#[serde(default)]
	pub wordnik_api_key: String,
	#[serde(default = "default_api_base")]
	pub api_base: String,
}

fn default_api_base() -> String {
	DEFAULT_API_BASE.to_owned()
}

impl Credentials {
	/// Loads and checks a credentials file.
	///
	/// # Errors
	/// `Credentials` if the file cannot be read, is not valid YAML, or has
	/// no (or a blank) `wordnik_api_key`.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MucError> {
		let path = path.as_ref();
		let fail = |reason: String| MucError::Credentials { path: path.to_path_buf(), reason };

		let contents = read_text(path).map_err(|e| fail(e.to_string()))?;
		let credentials: Credentials = serde_yaml::from_str(&contents).map_err(|e| fail(e.to_string()))?;
		if credentials.wordnik_api_key.trim().is_empty() {
			return Err(fail("no wordnik_api_key".to_owned()));
		}
		Ok(credentials)
	}
}

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
	/// Produce a whole novel instead of a single letter.
	pub novel: bool,
	/// Novel target length in words.
	pub min_words: usize,
	/// Body length in single-letter mode.
	pub sentences_per_letter: usize,
	pub vocabulary: VocabularyMode,
	/// Percent chance that a mixed single letter draws an original word.
	/// Novels ignore it and follow the pacing curve.
	pub chance_of_original: f64,
	/// Cross-link repeated words (Html novels only).
	pub link: bool,
	pub markup: Markup,
	/// Verbose pacing logs.
	pub log: bool,
	pub credentials_path: PathBuf,
	/// Fixed seed for reproducible output.
	pub seed: Option<u64>,
	/// Give up on a novel that takes longer than this.
	pub time_limit: Option<Duration>,
}

impl Default for RunConfig {
	fn default() -> Self {
		Self {
			novel: false,
			min_words: DEFAULT_MIN_WORDS,
			sentences_per_letter: DEFAULT_SENTENCES,
			vocabulary: VocabularyMode::Original,
			chance_of_original: DEFAULT_CHANCE_OF_ORIGINAL,
			link: false,
			markup: Markup::Plain,
			log: false,
			credentials_path: PathBuf::from(DEFAULT_CREDENTIALS),
			seed: None,
			time_limit: None,
		}
	}
}

impl RunConfig {
	/// Rejects settings that would make generation meaningless.
	pub fn validate(&self) -> Result<(), MucError> {
		if self.novel && self.min_words == 0 {
			return Err(MucError::Config("min_words must be positive in novel mode".to_owned()));
		}
		if !self.novel && self.sentences_per_letter == 0 {
			return Err(MucError::Config("a letter needs at least one sentence".to_owned()));
		}
		if !(0.0..=100.0).contains(&self.chance_of_original) {
			return Err(MucError::Config(format!("chance of original must be a percentage, got {}", self.chance_of_original)));
		}
		Ok(())
	}

	/// Loads credentials when the vocabulary mode needs them.
	pub fn credentials(&self) -> Result<Option<Credentials>, MucError> {
		if self.vocabulary.needs_provider() {
			Credentials::load(&self.credentials_path).map(Some)
		} else {
			Ok(None)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::io::write_text;

	fn temp_yaml(name: &str, contents: &str) -> PathBuf {
		let path = std::env::temp_dir().join(format!("muc-config-{}-{name}.yaml", std::process::id()));
		write_text(&path, contents).unwrap();
		path
	}

	#[test]
	fn defaults_validate() {
		assert!(RunConfig::default().validate().is_ok());
	}

	#[test]
	fn novel_needs_positive_target() {
		let config = RunConfig { novel: true, min_words: 0, ..Default::default() };
		assert!(matches!(config.validate(), Err(MucError::Config(_))));
	}

	#[test]
	fn single_letter_needs_sentences() {
		let config = RunConfig { sentences_per_letter: 0, ..Default::default() };
		assert!(config.validate().is_err());
	}

	#[test]
	fn chance_of_original_is_a_percentage() {
		assert_eq!(RunConfig::default().chance_of_original, 50.0);
		let config = RunConfig { chance_of_original: 120.0, ..Default::default() };
		assert!(matches!(config.validate(), Err(MucError::Config(_))));
		let config = RunConfig { chance_of_original: f64::NAN, ..Default::default() };
		assert!(config.validate().is_err());
	}

	#[test]
	fn original_mode_skips_credentials() {
		let config = RunConfig { credentials_path: PathBuf::from("/nope.yaml"), ..Default::default() };
		assert!(config.credentials().unwrap().is_none());
	}

	#[test]
	fn credentials_load_with_default_base() {
		let path = temp_yaml("ok", "wordnik_api_key: abc123\n");
		let credentials = Credentials::load(&path).unwrap();
		assert_eq!(credentials.wordnik_api_key, "abc123");
		assert_eq!(credentials.api_base, DEFAULT_API_BASE);
		std::fs::remove_file(path).unwrap();
	}

	#[test]
	fn missing_key_is_fatal() {
		let path = temp_yaml("nokey", "api_base: http://localhost\n");
		let config = RunConfig { vocabulary: VocabularyMode::Mixed, credentials_path: path.clone(), ..Default::default() };
		assert!(matches!(config.credentials(), Err(MucError::Credentials { .. })));
		std::fs::remove_file(path).unwrap();
	}

	#[test]
	fn missing_file_is_fatal() {
		let config = RunConfig {
			vocabulary: VocabularyMode::External,
			credentials_path: PathBuf::from("/definitely/not/here.yaml"),
			..Default::default()
		};
		assert!(matches!(config.credentials(), Err(MucError::Credentials { .. })));
	}
}
