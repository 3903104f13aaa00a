//! Word selection for template slots.
//!
//! This module provides:
//! - The fixed built-in word lists (`word_lists`)
//! - A shrinking pool for externally provided words (`WordPool`)
//! - The run-wide frequency tally (`WordTally`)
//! - The slot filler that ties them together (`VocabularySelector`)

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// The fixed lists of the original Manchester letters.
pub mod word_lists;

/// Multiset of enrichment-provided words with draw-or-consume semantics.
pub mod pool;

/// Global word-usage counts for one run.
pub mod tally;

/// Slot filling across the original, external, and mixed sources.
pub mod selector;

pub use pool::WordPool;
pub use selector::{VocabularySelector, Word};
pub use tally::WordTally;

/// Part of speech understood by the enrichment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
	Adjective,
	Noun,
	Adverb,
	Verb,
}

impl PartOfSpeech {
	pub const ALL: [PartOfSpeech; 4] = [
		PartOfSpeech::Adjective,
		PartOfSpeech::Noun,
		PartOfSpeech::Adverb,
		PartOfSpeech::Verb,
	];

	/// Name used in provider queries.
	pub fn as_str(&self) -> &'static str {
		match self {
			PartOfSpeech::Adjective => "adjective",
			PartOfSpeech::Noun => "noun",
			PartOfSpeech::Adverb => "adverb",
			PartOfSpeech::Verb => "verb",
		}
	}
}

impl fmt::Display for PartOfSpeech {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A grammatical blank in a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
	/// First word of the opening line, capitalised ("Dearest").
	SalutationFirst,
	/// Second word of the opening line ("DUCK").
	SalutationSecond,
	Adjective,
	Noun,
	Adverb,
	Verb,
}

impl SlotKind {
	/// The built-in list this slot draws from in original mode.
	pub fn builtin(&self) -> &'static [&'static str] {
		match self {
			SlotKind::SalutationFirst => word_lists::SALUTATIONS1,
			SlotKind::SalutationSecond => word_lists::SALUTATIONS2,
			SlotKind::Adjective => word_lists::ADJECTIVES,
			SlotKind::Noun => word_lists::NOUNS,
			SlotKind::Adverb => word_lists::ADVERBS,
			SlotKind::Verb => word_lists::VERBS,
		}
	}

	/// The external pool this slot draws from.
	///
	/// Salutations borrow the adjective and noun pools.
	pub fn part_of_speech(&self) -> PartOfSpeech {
		match self {
			SlotKind::SalutationFirst | SlotKind::Adjective => PartOfSpeech::Adjective,
			SlotKind::SalutationSecond | SlotKind::Noun => PartOfSpeech::Noun,
			SlotKind::Adverb => PartOfSpeech::Adverb,
			SlotKind::Verb => PartOfSpeech::Verb,
		}
	}
}

/// Where a selected word came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
	/// The fixed built-in lists.
	Original,
	/// The enrichment provider.
	External,
}

/// Which source(s) a run draws its words from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyMode {
	/// Built-in lists only; no provider is ever contacted.
	#[default]
	Original,
	/// Provider words only.
	#[serde(alias = "wordnik")]
	External,
	/// Built-in words with a decaying probability, provider words otherwise.
	Mixed,
}

impl VocabularyMode {
	/// Whether this mode needs an enrichment provider.
	pub fn needs_provider(&self) -> bool {
		*self != VocabularyMode::Original
	}
}

impl fmt::Display for VocabularyMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			VocabularyMode::Original => "original",
			VocabularyMode::External => "external",
			VocabularyMode::Mixed => "mixed",
		})
	}
}

impl FromStr for VocabularyMode {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"original" => Ok(VocabularyMode::Original),
			"external" | "wordnik" => Ok(VocabularyMode::External),
			"mixed" => Ok(VocabularyMode::Mixed),
			other => Err(format!("Unsupported vocabulary mode '{other}' (expected original, external or mixed)")),
		}
	}
}
