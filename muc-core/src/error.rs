use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::vocabulary::PartOfSpeech;

/// Errors raised while configuring or running a generation pass.
///
/// Everything that can stop a run is fatal to that run: the caller is
/// expected to report it and exit. Non-fatal conditions (a provider
/// top-up returning nothing, for instance) are logged and never surface
/// here.
#[derive(Debug, Error)]
pub enum MucError {
	/// Credentials file missing, unreadable, or without an API key.
	#[error("Wordnik credentials missing from YAML: {}: {reason}", .path.display())]
	Credentials { path: PathBuf, reason: String },

	/// Run configuration rejected before generation starts.
	#[error("invalid configuration: {0}")]
	Config(String),

	/// The enrichment provider failed.
	#[error("word provider failed for {part_of_speech}: {reason}")]
	Provider { part_of_speech: PartOfSpeech, reason: String },

	/// A slot had to be filled from an external pool that is empty.
	#[error("no {0} left in the external vocabulary")]
	EmptyVocabulary(PartOfSpeech),

	/// The caller-supplied deadline passed before the novel was long enough.
	#[error("deadline exceeded after {letters} letters ({words} words)")]
	DeadlineExceeded { letters: usize, words: usize },

	#[error(transparent)]
	Io(#[from] io::Error),
}
