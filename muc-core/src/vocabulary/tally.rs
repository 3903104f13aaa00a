use std::collections::BTreeMap;

/// Per-word occurrence counts for one generation run.
///
/// Counts only ever grow while letters are generated. Linking reads a
/// pruned copy (see [`WordTally::repeated`]) and never mutates the run's
/// tally. Words are kept sorted so that iteration, and therefore any
/// seeded randomness driven by it, is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTally {
	counts: BTreeMap<String, usize>,
}

impl WordTally {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one more occurrence of `word`.
	pub fn record(&mut self, word: &str) {
		*self.counts.entry(word.to_owned()).or_insert(0) += 1;
	}

	/// Number of times `word` was selected (0 if never).
	pub fn count(&self, word: &str) -> usize {
		self.counts.get(word).copied().unwrap_or(0)
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts, i.e. the number of filled slots.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(word, count)| (word.as_str(), *count))
	}

	/// Returns a copy restricted to words selected more than once.
	///
	/// Singletons can never be linked to another occurrence, so they are
	/// dropped here.
	pub fn repeated(&self) -> WordTally {
		WordTally {
			counts: self
				.counts
				.iter()
				.filter(|(_, count)| **count > 1)
				.map(|(word, count)| (word.clone(), *count))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn record_accumulates() {
		let mut tally = WordTally::new();
		tally.record("LOVE");
		tally.record("LOVE");
		tally.record("WISH");

		assert_eq!(tally.count("LOVE"), 2);
		assert_eq!(tally.count("WISH"), 1);
		assert_eq!(tally.count("LUST"), 0);
		assert_eq!(tally.total(), 3);
		assert_eq!(tally.len(), 2);
	}

	#[test]
	fn repeated_drops_singletons_without_touching_source() {
		let mut tally = WordTally::new();
		for word in ["LOVE", "LOVE", "WISH", "CHARM", "CHARM", "CHARM"] {
			tally.record(word);
		}

		let repeated = tally.repeated();
		assert_eq!(repeated.len(), 2);
		assert!(repeated.iter().all(|(_, count)| count > 1));
		assert_eq!(repeated.count("WISH"), 0);
		assert_eq!(tally.count("WISH"), 1);
	}
}
