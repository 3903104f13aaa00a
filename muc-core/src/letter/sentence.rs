use rand::Rng;

use crate::error::MucError;
use crate::markup::Markup;
use crate::provider::WordProvider;
use crate::random::percent_chance;
use crate::vocabulary::{SlotKind, VocabularySelector};

/// Paragraph breaks are only sprinkled into letters longer than this.
pub const PARAGRAPH_MIN_SENTENCES: usize = 20;

/// Chance (percent) of a paragraph break after any sentence of a long letter.
pub const PARAGRAPH_BREAK_PERCENT: f64 = 10.0;

/// The two basic sentence shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceType {
	/// "My [adj] [noun] [adv] [verb] your [adj] [noun]." or the short
	/// "My [noun] [verb] your [noun]."
	First,
	/// "You are my [adj] [noun]." or, right after another one, the
	/// continuation "my [adj] [noun]."
	Second,
}

/// One rendered sentence and its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
	kind: SentenceType,
	text: String,
}

impl Sentence {
	pub fn kind(&self) -> SentenceType {
		self.kind
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// Turns the closing ". " into ", " so the next sentence continues it.
	fn continue_into_next(&mut self) {
		if let Some(stripped) = self.text.strip_suffix(". ") {
			self.text = format!("{stripped}, ");
		}
	}

	fn break_paragraph(&mut self) {
		self.text.push_str("\n\n");
	}
}

/// Builds sentence sequences, filling slots through a `VocabularySelector`.
///
/// # Behavior
/// Each sentence is independently of either type (50/50). A `First`
/// sentence is the full six-slot form half the time and the three-slot form
/// otherwise. A `Second` sentence following another `Second` rewrites its
/// predecessor's full stop into a comma and drops its own "You are".
pub struct SentenceGenerator<'a, P: WordProvider> {
	selector: &'a mut VocabularySelector<P>,
	markup: Markup,
}

impl<'a, P: WordProvider> SentenceGenerator<'a, P> {
	pub fn new(selector: &'a mut VocabularySelector<P>, markup: Markup) -> Self {
		Self { selector, markup }
	}

	/// Generates exactly `n` sentences (none for `n == 0`).
	///
	/// When `n` exceeds 20, each sentence then gets a trailing paragraph
	/// break with 10% chance.
	///
	/// # Errors
	/// Propagates slot-filling failures (empty external vocabulary).
	pub fn generate<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Result<Vec<Sentence>, MucError> {
		let mut sentences: Vec<Sentence> = Vec::with_capacity(n);

		while sentences.len() < n {
			let sentence = if percent_chance(rng, 50.0) {
				self.first_type(rng)?
			} else {
				let after_second = match sentences.last_mut() {
					Some(previous) if previous.kind == SentenceType::Second => {
						previous.continue_into_next();
						true
					}
					_ => false,
				};
				self.second_type(after_second, rng)?
			};
			sentences.push(sentence);
		}

		if sentences.len() > PARAGRAPH_MIN_SENTENCES {
			for sentence in sentences.iter_mut() {
				if percent_chance(rng, PARAGRAPH_BREAK_PERCENT) {
					sentence.break_paragraph();
				}
			}
		}

		Ok(sentences)
	}

	fn first_type<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Sentence, MucError> {
		let text = if percent_chance(rng, 50.0) {
			let adj1 = self.fill(SlotKind::Adjective, rng)?;
			let noun1 = self.fill(SlotKind::Noun, rng)?;
			let adv = self.fill(SlotKind::Adverb, rng)?;
			let verb = self.fill(SlotKind::Verb, rng)?;
			let adj2 = self.fill(SlotKind::Adjective, rng)?;
			let noun2 = self.fill(SlotKind::Noun, rng)?;
			format!("My {adj1} {noun1} {adv} {verb} your {adj2} {noun2}. ")
		} else {
			let noun1 = self.fill(SlotKind::Noun, rng)?;
			let verb = self.fill(SlotKind::Verb, rng)?;
			let noun2 = self.fill(SlotKind::Noun, rng)?;
			format!("My {noun1} {verb} your {noun2}. ")
		};
		Ok(Sentence { kind: SentenceType::First, text })
	}

	fn second_type<R: Rng + ?Sized>(&mut self, after_second: bool, rng: &mut R) -> Result<Sentence, MucError> {
		let adj = self.fill(SlotKind::Adjective, rng)?;
		let noun = self.fill(SlotKind::Noun, rng)?;
		let text = if after_second {
			format!("my {adj} {noun}. ")
		} else {
			format!("You are my {adj} {noun}. ")
		};
		Ok(Sentence { kind: SentenceType::Second, text })
	}

	fn fill<R: Rng + ?Sized>(&mut self, slot: SlotKind, rng: &mut R) -> Result<String, MucError> {
		let word = self.selector.select(slot, rng)?;
		Ok(self.markup.word(&word))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn generate(n: usize, seed: u64) -> Vec<Sentence> {
		let mut rng = StdRng::seed_from_u64(seed);
		let mut selector = VocabularySelector::original();
		SentenceGenerator::new(&mut selector, Markup::Plain).generate(n, &mut rng).unwrap()
	}

	#[test]
	fn generates_exactly_n() {
		for n in [0, 1, 5, 20, 21, 120] {
			assert_eq!(generate(n, n as u64).len(), n);
		}
	}

	#[test]
	fn consecutive_second_types_are_joined() {
		for seed in 0..50 {
			let sentences = generate(40, seed);
			for pair in sentences.windows(2) {
				if pair[0].kind() == SentenceType::Second && pair[1].kind() == SentenceType::Second {
					assert!(pair[0].text().trim_end_matches('\n').ends_with(", "), "{:?}", pair[0]);
					assert!(!pair[1].text().starts_with("You are"), "{:?}", pair[1]);
					assert!(pair[1].text().starts_with("my "));
				}
			}
		}
	}

	#[test]
	fn lone_second_type_is_a_full_sentence() {
		for seed in 0..50 {
			let sentences = generate(10, seed);
			for (i, sentence) in sentences.iter().enumerate() {
				let after_second = i > 0 && sentences[i - 1].kind() == SentenceType::Second;
				if sentence.kind() == SentenceType::Second && !after_second {
					assert!(sentence.text().starts_with("You are my "));
				}
			}
		}
	}

	#[test]
	fn first_type_shapes() {
		for seed in 0..20 {
			for sentence in generate(10, seed) {
				if sentence.kind() == SentenceType::First {
					assert!(sentence.text().starts_with("My "));
					assert!(sentence.text().contains(" your "));
				}
			}
		}
	}

	#[test]
	fn short_letters_have_no_paragraph_breaks() {
		for seed in 0..30 {
			assert!(generate(20, seed).iter().all(|s| !s.text().contains("\n\n")));
		}
	}

	#[test]
	fn long_letters_get_some_paragraph_breaks() {
		let breaks: usize = (0..10)
			.map(|seed| generate(120, seed).iter().filter(|s| s.text().ends_with("\n\n")).count())
			.sum();
		assert!(breaks > 0);
	}

	#[test]
	fn every_slot_is_tallied() {
		let mut rng = StdRng::seed_from_u64(9);
		let mut selector = VocabularySelector::original();
		SentenceGenerator::new(&mut selector, Markup::Plain).generate(30, &mut rng).unwrap();

		// Sentences hold two, three or six slots.
		let total = selector.tally().total();
		assert!((2 * 30..=6 * 30).contains(&total), "{total}");
	}
}
