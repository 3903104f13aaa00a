use rand::Rng;

/// A shrinking multiset of externally provided words for one part of speech.
///
/// Draws are uniform. A draw either consumes the word (it will never be
/// offered again) or leaves it in the pool for later draws. Entry order
/// carries no meaning and may change when words are consumed.
#[derive(Debug, Clone, Default)]
pub struct WordPool {
	words: Vec<String>,
}

impl WordPool {
	/// Creates an empty pool.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Appends a top-up batch. Blank entries are dropped.
	pub fn extend<I: IntoIterator<Item = String>>(&mut self, words: I) {
		self.words.extend(words.into_iter().filter(|w| !w.trim().is_empty()));
	}

	/// Draws a uniform-random word.
	///
	/// - `consume == true` removes the drawn word from the pool.
	/// - `consume == false` returns a copy and keeps the pool unchanged.
	///
	/// Returns `None` when the pool is empty.
	pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R, consume: bool) -> Option<String> {
		if self.words.is_empty() {
			return None;
		}
		let index = rng.random_range(0..self.words.len());
		if consume {
			Some(self.words.swap_remove(index))
		} else {
			Some(self.words[index].clone())
		}
	}

	pub fn contains(&self, word: &str) -> bool {
		self.words.iter().any(|w| w == word)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn pool_of(words: &[&str]) -> WordPool {
		let mut pool = WordPool::new();
		pool.extend(words.iter().map(|w| w.to_string()));
		pool
	}

	#[test]
	fn empty_pool_draws_nothing() {
		let mut rng = StdRng::seed_from_u64(1);
		let mut pool = WordPool::new();
		assert_eq!(pool.draw(&mut rng, false), None);
		assert_eq!(pool.draw(&mut rng, true), None);
	}

	#[test]
	fn consuming_draw_removes_the_word() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut pool = pool_of(&["gleaming", "hollow", "restless"]);

		let drawn = pool.draw(&mut rng, true).unwrap();
		assert_eq!(pool.len(), 2);
		assert!(!pool.contains(&drawn));
	}

	#[test]
	fn plain_draw_keeps_the_word() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut pool = pool_of(&["gleaming", "hollow"]);

		for _ in 0..50 {
			let drawn = pool.draw(&mut rng, false).unwrap();
			assert!(pool.contains(&drawn));
		}
		assert_eq!(pool.len(), 2);
	}

	#[test]
	fn blank_words_are_ignored() {
		let pool = pool_of(&["", "  ", "lantern"]);
		assert_eq!(pool.len(), 1);
	}
}
