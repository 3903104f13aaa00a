//! Enrichment providers: external sources of fresh words.
//!
//! A provider is asked for a batch of words of one part of speech. It may
//! return fewer than requested (even none); that is not an error.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::Credentials;
use crate::error::MucError;
use crate::vocabulary::PartOfSpeech;

/// Source of external vocabulary.
pub trait WordProvider {
	/// Fetches up to `limit` words for `part_of_speech`.
	fn fetch_words(&mut self, part_of_speech: PartOfSpeech, limit: usize) -> Result<Vec<String>, MucError>;
}

impl<P: WordProvider + ?Sized> WordProvider for Box<P> {
	fn fetch_words(&mut self, part_of_speech: PartOfSpeech, limit: usize) -> Result<Vec<String>, MucError> {
		(**self).fetch_words(part_of_speech, limit)
	}
}

/// Provider used when the vocabulary is purely original.
///
/// Any request fails: reaching it means a run asked for external words
/// without configuring a source for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProvider;

impl WordProvider for NoProvider {
	fn fetch_words(&mut self, part_of_speech: PartOfSpeech, _limit: usize) -> Result<Vec<String>, MucError> {
		Err(MucError::Provider {
			part_of_speech,
			reason: "no word provider configured".to_owned(),
		})
	}
}

/// In-memory provider serving the same fixed lists on every request.
///
/// Useful offline and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
	lists: HashMap<PartOfSpeech, Vec<String>>,
	requests: usize,
}

impl StaticProvider {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the list served for `part_of_speech`.
	pub fn with_words(mut self, part_of_speech: PartOfSpeech, words: &[&str]) -> Self {
		self.lists.insert(part_of_speech, words.iter().map(|w| (*w).to_owned()).collect());
		self
	}

	/// Number of batches requested so far.
	pub fn requests(&self) -> usize {
		self.requests
	}
}

impl WordProvider for StaticProvider {
	fn fetch_words(&mut self, part_of_speech: PartOfSpeech, limit: usize) -> Result<Vec<String>, MucError> {
		self.requests += 1;
		Ok(self
			.lists
			.get(&part_of_speech)
			.map(|words| words.iter().take(limit).cloned().collect())
			.unwrap_or_default())
	}
}

/// One entry of the Wordnik `randomWords` response.
#[derive(Deserialize)]
struct RandomWord {
	word: String,
}

/// Blocking client for the Wordnik random-words endpoint.
pub struct WordnikProvider {
	client: Client,
	api_base: String,
	api_key: String,
}

impl WordnikProvider {
	/// Builds a client with a 5 second timeout.
	///
	/// # Errors
	/// Returns `Credentials` if the API key is empty and `Config` if the
	/// HTTP client cannot be built.
	pub fn new(credentials: &Credentials) -> Result<Self, MucError> {
		if credentials.wordnik_api_key.trim().is_empty() {
			return Err(MucError::Credentials {
				path: Default::default(),
				reason: "empty wordnik_api_key".to_owned(),
			});
		}
		let client = Client::builder()
			.timeout(Duration::new(5, 0))
			.build()
			.map_err(|e| MucError::Config(format!("cannot build HTTP client: {e}")))?;
		Ok(Self {
			client,
			api_base: credentials.api_base.trim_end_matches('/').to_owned(),
			api_key: credentials.wordnik_api_key.clone(),
		})
	}

	fn request(&self, part_of_speech: PartOfSpeech, limit: usize) -> reqwest::Result<Vec<RandomWord>> {
		let limit = limit.to_string();
		self.client
			.get(format!("{}/words.json/randomWords", self.api_base))
			.query(&[
				("includePartOfSpeech", part_of_speech.as_str()),
				("limit", limit.as_str()),
				("api_key", self.api_key.as_str()),
			])
			.send()?
			.error_for_status()?
			.json()
	}
}

impl WordProvider for WordnikProvider {
	fn fetch_words(&mut self, part_of_speech: PartOfSpeech, limit: usize) -> Result<Vec<String>, MucError> {
		let words = self.request(part_of_speech, limit).map_err(|e| MucError::Provider {
			part_of_speech,
			reason: e.to_string(),
		})?;
		log::debug!("Wordnik returned {} {}s", words.len(), part_of_speech);
		Ok(words.into_iter().map(|w| w.word).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn static_provider_respects_limit_and_counts_requests() {
		let mut provider = StaticProvider::new().with_words(PartOfSpeech::Verb, &["kindles", "haunts", "wakes"]);

		assert_eq!(provider.fetch_words(PartOfSpeech::Verb, 2).unwrap(), vec!["kindles", "haunts"]);
		assert!(provider.fetch_words(PartOfSpeech::Noun, 10).unwrap().is_empty());
		assert_eq!(provider.requests(), 2);
	}

	#[test]
	fn no_provider_always_fails() {
		let err = NoProvider.fetch_words(PartOfSpeech::Adverb, 1000).unwrap_err();
		assert!(matches!(err, MucError::Provider { part_of_speech: PartOfSpeech::Adverb, .. }));
	}

	#[test]
	fn wordnik_rejects_blank_key() {
		let credentials = Credentials {
			wordnik_api_key: "   ".to_owned(),
			api_base: "https://api.wordnik.com/v4".to_owned(),
		};
		assert!(matches!(WordnikProvider::new(&credentials), Err(MucError::Credentials { .. })));
	}
}
