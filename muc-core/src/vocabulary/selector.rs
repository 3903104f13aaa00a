use std::collections::HashMap;

use rand::Rng;

use super::{PartOfSpeech, Provenance, SlotKind, VocabularyMode, WordPool, WordTally};
use crate::error::MucError;
use crate::provider::{NoProvider, WordProvider};
use crate::random::percent_chance;

/// External pools are topped up when they hold fewer words than this.
pub const REFILL_THRESHOLD: usize = 30;

/// Number of words requested per provider call.
pub const BATCH_SIZE: usize = 1000;

/// Chance (percent) that a mixed-mode external draw consumes its word.
pub const CONSUME_PERCENT: f64 = 20.0;

/// A word chosen for a slot, with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
	pub text: String,
	pub provenance: Provenance,
}

/// Fills template slots and keeps the run's word tally.
///
/// # Responsibilities
/// - Choose a word for a slot from the built-in lists, the external pools,
///   or a mix of both depending on the `VocabularyMode`
/// - Top up external pools from the provider when they run low
/// - Count every selection in the run's `WordTally`
///
/// The selector is the run context: it is created once per run, borrowed
/// mutably by the generators, and its tally is handed to the linker at the
/// end.
pub struct VocabularySelector<P: WordProvider = NoProvider> {
	mode: VocabularyMode,
	/// Percent chance (0..=100) of an original draw in mixed mode.
	chance_of_original: f64,
	provider: P,
	pools: HashMap<PartOfSpeech, WordPool>,
	tally: WordTally,
}

impl VocabularySelector<NoProvider> {
	/// Selector over the built-in lists only.
	pub fn original() -> Self {
		Self::new(VocabularyMode::Original, NoProvider)
	}
}

impl<P: WordProvider> VocabularySelector<P> {
	/// Creates a selector with empty external pools.
	///
	/// Call [`prime`](Self::prime) before generating when `mode` needs a
	/// provider.
	pub fn new(mode: VocabularyMode, provider: P) -> Self {
		Self {
			mode,
			chance_of_original: 100.0,
			provider,
			pools: PartOfSpeech::ALL.iter().map(|pos| (*pos, WordPool::new())).collect(),
			tally: WordTally::new(),
		}
	}

	/// Fetches one batch per part of speech.
	///
	/// No-op in original mode.
	///
	/// # Errors
	/// Any provider failure: enrichment is required up front.
	pub fn prime(&mut self) -> Result<(), MucError> {
		if !self.mode.needs_provider() {
			return Ok(());
		}
		for pos in PartOfSpeech::ALL {
			let words = self.provider.fetch_words(pos, BATCH_SIZE)?;
			log::info!("Primed {} external {}s", words.len(), pos);
			self.pool_mut(pos).extend(words);
		}
		Ok(())
	}

	pub fn mode(&self) -> VocabularyMode {
		self.mode
	}

	pub fn chance_of_original(&self) -> f64 {
		self.chance_of_original
	}

	/// Sets the mixed-mode chance of an original draw, clamped to 0..=100.
	pub fn set_chance_of_original(&mut self, percent: f64) {
		self.chance_of_original = percent.clamp(0.0, 100.0);
	}

	pub fn tally(&self) -> &WordTally {
		&self.tally
	}

	pub fn into_tally(self) -> WordTally {
		self.tally
	}

	/// Words currently waiting in the external pool for `part_of_speech`.
	pub fn pool(&self, part_of_speech: PartOfSpeech) -> Option<&WordPool> {
		self.pools.get(&part_of_speech)
	}

	pub fn provider(&self) -> &P {
		&self.provider
	}

	/// Chooses a word for `slot`.
	///
	/// - original: uniform pick from the built-in list
	/// - external: uniform pick from the external pool, never consumed
	/// - mixed: original with `chance_of_original` percent, otherwise an
	///   external pick that is consumed 20% of the time
	///
	/// The raw word is counted in the tally; salutation-first words are then
	/// capitalised.
	///
	/// # Errors
	/// `EmptyVocabulary` if an external draw finds its pool empty even after
	/// a top-up attempt.
	pub fn select<R: Rng + ?Sized>(&mut self, slot: SlotKind, rng: &mut R) -> Result<Word, MucError> {
		let mut word = match self.mode {
			VocabularyMode::Original => Self::pick_original(slot, rng),
			VocabularyMode::External => self.pick_external(slot, false, rng)?,
			VocabularyMode::Mixed => {
				if percent_chance(rng, self.chance_of_original) {
					Self::pick_original(slot, rng)
				} else {
					let consume = percent_chance(rng, CONSUME_PERCENT);
					self.pick_external(slot, consume, rng)?
				}
			}
		};

		self.tally.record(&word.text);

		if slot == SlotKind::SalutationFirst {
			word.text = upper_first(&word.text);
		}
		Ok(word)
	}

	fn pick_original<R: Rng + ?Sized>(slot: SlotKind, rng: &mut R) -> Word {
		let list = slot.builtin();
		Word {
			text: list[rng.random_range(0..list.len())].to_owned(),
			provenance: Provenance::Original,
		}
	}

	fn pick_external<R: Rng + ?Sized>(&mut self, slot: SlotKind, consume: bool, rng: &mut R) -> Result<Word, MucError> {
		let pos = slot.part_of_speech();
		self.top_up(pos);
		let text = self
			.pool_mut(pos)
			.draw(rng, consume)
			.ok_or(MucError::EmptyVocabulary(pos))?;
		Ok(Word { text, provenance: Provenance::External })
	}

	/// Requests a new batch when the pool is running low.
	///
	/// Failures and empty batches are logged and otherwise ignored.
	fn top_up(&mut self, pos: PartOfSpeech) {
		if self.pool_mut(pos).len() >= REFILL_THRESHOLD {
			return;
		}
		match self.provider.fetch_words(pos, BATCH_SIZE) {
			Ok(words) if words.is_empty() => log::warn!("Top-up returned no {}s", pos),
			Ok(words) => {
				log::debug!("Topped up {} {}s", words.len(), pos);
				self.pool_mut(pos).extend(words);
			}
			Err(e) => log::warn!("Top-up failed: {e}"),
		}
	}

	fn pool_mut(&mut self, pos: PartOfSpeech) -> &mut WordPool {
		self.pools.entry(pos).or_default()
	}
}

/// Uppercases the first character ("darling" -> "Darling").
fn upper_first(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		None => String::new(),
		Some(c) => c.to_uppercase().chain(chars).collect(),
	}
}
