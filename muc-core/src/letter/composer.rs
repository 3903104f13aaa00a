use std::fmt;

use rand::Rng;

use super::sentence::{Sentence, SentenceGenerator};
use crate::error::MucError;
use crate::markup::Markup;
use crate::provider::WordProvider;
use crate::vocabulary::{SlotKind, VocabularySelector};

/// The letters are all signed by the Manchester University Computer.
pub const SIGNATURE: &str = "M. U. C.";

/// One love letter: salutation, body, sign-off.
///
/// Built by [`LetterComposer`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
	salutation: String,
	sentences: Vec<Sentence>,
	closing: String,
}

impl Letter {
	/// Opening line, e.g. `"DEAREST DUCK,\n\n"`.
	pub fn salutation(&self) -> &str {
		&self.salutation
	}

	pub fn sentences(&self) -> &[Sentence] {
		&self.sentences
	}

	/// Sign-off, e.g. `"\n\nYours FONDLY,\n\nM. U. C."`.
	pub fn closing(&self) -> &str {
		&self.closing
	}

	/// The full letter text.
	pub fn render(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Letter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.salutation)?;
		for sentence in &self.sentences {
			f.write_str(sentence.text())?;
		}
		f.write_str(&self.closing)
	}
}

/// Wraps a generated sentence sequence into a letter.
pub struct LetterComposer<'a, P: WordProvider> {
	selector: &'a mut VocabularySelector<P>,
	markup: Markup,
}

impl<'a, P: WordProvider> LetterComposer<'a, P> {
	pub fn new(selector: &'a mut VocabularySelector<P>, markup: Markup) -> Self {
		Self { selector, markup }
	}

	/// Composes a letter with `n` body sentences.
	///
	/// Slots are drawn in this order: both salutation words, the sign-off
	/// adverb, then the body.
	pub fn compose<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Result<Letter, MucError> {
		let first = self.selector.select(SlotKind::SalutationFirst, rng)?;
		let second = self.selector.select(SlotKind::SalutationSecond, rng)?;
		let salutation = format!("{} {},\n\n", self.markup.word(&first), self.markup.word(&second));

		let adverb = self.selector.select(SlotKind::Adverb, rng)?;
		let closing = format!("\n\nYours {},\n\n{SIGNATURE}", self.markup.word(&adverb));

		let sentences = SentenceGenerator::new(&mut *self.selector, self.markup).generate(n, rng)?;

		Ok(Letter { salutation, sentences, closing })
	}
}
