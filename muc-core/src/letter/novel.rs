use std::time::Instant;

use rand::Rng;

use super::composer::{Letter, LetterComposer};
use crate::error::MucError;
use crate::markup::{Markup, count_words};
use crate::provider::WordProvider;
use crate::vocabulary::VocabularySelector;

/// Every letter has at least this many body sentences.
pub const MIN_LINES: usize = 5;

/// Body length ceiling, reached half-way through a novel.
pub const MAX_LINES: usize = 120;

/// Once the first letter is written, the original vocabulary never gets
/// more than this chance (percent).
pub const MAX_MIXED_CHANCE: f64 = 95.0;

/// An ordered run of letters and their total word count.
#[derive(Debug, Clone, Default)]
pub struct Novel {
	letters: Vec<Letter>,
	word_count: usize,
}

impl Novel {
	pub fn letters(&self) -> &[Letter] {
		&self.letters
	}

	/// Words counted so far (markup stripped).
	pub fn word_count(&self) -> usize {
		self.word_count
	}

	pub fn len(&self) -> usize {
		self.letters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.letters.is_empty()
	}

	fn push(&mut self, letter: Letter, words: usize) {
		self.letters.push(letter);
		self.word_count += words;
	}
}

/// Pacing parameters for the next letter, derived from progress alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pace {
	/// Percent chance of an original word in mixed mode.
	pub chance_of_original: f64,
	/// Midpoint of the novel, in words.
	pub centre: f64,
	/// Words between the current position and the midpoint.
	pub dist_from_centre: f64,
	/// 1 at both ends of the novel, 0 at its midpoint.
	pub amplitude: f64,
	/// Upper bound (before the 5-line floor) for the next letter's length.
	pub target_lines: usize,
}

impl Pace {
	/// Computes the pace after `words_so_far` of `min_words` words.
	///
	/// # Behavior
	/// - chance of original falls linearly from 100 to 0, and is capped at
	///   95 as soon as it drops below 100
	/// - amplitude is the distance to the midpoint, normalised: a triangle
	///   going 1 → 0 → 1
	/// - target lines is `(1 - amplitude) * 120`, truncated
	pub fn at(words_so_far: usize, min_words: usize) -> Self {
		if min_words == 0 {
			return Self { chance_of_original: 100.0, centre: 0.0, dist_from_centre: 0.0, amplitude: 1.0, target_lines: 0 };
		}
		let words = words_so_far as f64;
		let total = min_words as f64;

		let percent_complete = 100.0 * words / total;
		let mut chance_of_original = 100.0 - percent_complete;
		if chance_of_original < 100.0 {
			chance_of_original = chance_of_original.min(MAX_MIXED_CHANCE);
		}

		let centre = total / 2.0;
		let dist_from_centre = (centre - words).abs();
		let amplitude = dist_from_centre / centre;

		let target_lines = ((1.0 - amplitude) * MAX_LINES as f64).max(0.0) as usize;

		Self { chance_of_original, centre, dist_from_centre, amplitude, target_lines }
	}
}

/// Writes letters until a novel reaches its target length.
///
/// Letters start short, swell to up to 120 sentences around the middle of
/// the novel, and shrink again towards the end. In mixed vocabulary mode the
/// share of original words decays as the novel progresses.
#[derive(Debug, Clone)]
pub struct NovelPacer {
	min_words: usize,
	deadline: Option<Instant>,
}

impl NovelPacer {
	pub fn new(min_words: usize) -> Self {
		Self { min_words, deadline: None }
	}

	/// Stops production with `DeadlineExceeded` once `deadline` has passed.
	pub fn with_deadline(mut self, deadline: Instant) -> Self {
		self.deadline = Some(deadline);
		self
	}

	pub fn min_words(&self) -> usize {
		self.min_words
	}

	/// Composes letters until at least `min_words` words are written.
	///
	/// Returns an empty novel straight away when `min_words` is 0.
	///
	/// # Errors
	/// - slot-filling failures from the selector
	/// - `DeadlineExceeded` if a deadline was set and has passed
	pub fn produce<P, R>(&self, selector: &mut VocabularySelector<P>, markup: Markup, rng: &mut R) -> Result<Novel, MucError>
	where
		P: WordProvider,
		R: Rng + ?Sized,
	{
		let mut novel = Novel::default();

		while novel.word_count() < self.min_words {
			if let Some(deadline) = self.deadline {
				if Instant::now() >= deadline {
					return Err(MucError::DeadlineExceeded { letters: novel.len(), words: novel.word_count() });
				}
			}

			let pace = Pace::at(novel.word_count(), self.min_words);
			selector.set_chance_of_original(pace.chance_of_original);
			let lines = rng.random_range(MIN_LINES..=pace.target_lines.max(MIN_LINES));

			log::debug!(
				"chance_of_original {:.2}, centre {:.1}, dist_from_centre {:.1}, amplitude {:.3}, target_lines {}, lines {}",
				pace.chance_of_original,
				pace.centre,
				pace.dist_from_centre,
				pace.amplitude,
				pace.target_lines,
				lines
			);

			let letter = LetterComposer::new(&mut *selector, markup).compose(lines, rng)?;
			let rendered = letter.render();
			let words = count_words(&rendered);
			log::debug!("letter {}: {} chars, {} words", novel.len() + 1, rendered.chars().count(), words);

			novel.push(letter, words);
		}

		log::info!("Novel complete: {} letters, {} words", novel.len(), novel.word_count());
		Ok(novel)
	}
}
