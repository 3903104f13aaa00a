use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::RunConfig;
use crate::document::render_novel;
use crate::error::MucError;
use crate::letter::{Letter, LetterComposer, Novel, NovelPacer};
use crate::provider::{NoProvider, WordProvider, WordnikProvider};
use crate::vocabulary::{VocabularySelector, WordTally};

/// One generation pass: configuration, vocabulary, tally and randomness.
///
/// Starting a run fails fast: configuration is validated and, when the
/// vocabulary needs external words, credentials are loaded and the external
/// pools primed before anything is written.
pub struct Run<P: WordProvider = Box<dyn WordProvider>> {
	config: RunConfig,
	selector: VocabularySelector<P>,
	rng: StdRng,
}

impl Run<Box<dyn WordProvider>> {
	/// Starts a run with the provider the configuration asks for.
	pub fn start(config: RunConfig) -> Result<Self, MucError> {
		config.validate()?;
		let provider: Box<dyn WordProvider> = match config.credentials()? {
			Some(credentials) => Box::new(WordnikProvider::new(&credentials)?),
			None => Box::new(NoProvider),
		};
		Run::with_provider(config, provider)
	}
}

impl<P: WordProvider> Run<P> {
	/// Starts a run over an explicit provider.
	pub fn with_provider(config: RunConfig, provider: P) -> Result<Self, MucError> {
		config.validate()?;
		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		let mut selector = VocabularySelector::new(config.vocabulary, provider);
		selector.prime()?;
		log::info!("Run started: {} vocabulary, {:?} markup", config.vocabulary, config.markup);
		Ok(Self { config, selector, rng })
	}

	pub fn config(&self) -> &RunConfig {
		&self.config
	}

	pub fn tally(&self) -> &WordTally {
		self.selector.tally()
	}

	/// Writes one letter of `sentences_per_letter` sentences. Mixed runs draw
	/// original words with the configured `chance_of_original`.
	pub fn letter(&mut self) -> Result<Letter, MucError> {
		self.selector.set_chance_of_original(self.config.chance_of_original);
		LetterComposer::new(&mut self.selector, self.config.markup).compose(self.config.sentences_per_letter, &mut self.rng)
	}

	/// Writes letters until the novel reaches `min_words`, or until the
	/// configured time limit runs out.
	pub fn novel(&mut self) -> Result<Novel, MucError> {
		let mut pacer = NovelPacer::new(self.config.min_words);
		if let Some(limit) = self.config.time_limit {
			pacer = pacer.with_deadline(Instant::now() + limit);
		}
		pacer.produce(&mut self.selector, self.config.markup, &mut self.rng)
	}

	/// Renders a finished novel, linking repeated words if configured.
	pub fn document(&mut self, novel: &Novel) -> String {
		render_novel(novel, self.selector.tally(), self.config.markup, self.config.link, &mut self.rng)
	}
}
