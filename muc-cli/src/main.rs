use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use env_logger::Env;

use muc_core::markup::count_words;
use muc_core::vocabulary::VocabularyMode;
use muc_core::{Run, RunConfig, io};

/// Generate love letters, or a whole epistolary novel of them, in the manner
/// of the Manchester University Computer (1952).
///
/// A single letter:
///   mucletters
///
/// A NaNoGenMo novel:
///   mucletters --link --html --nanogenmo -v mixed -o mucletters.html
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
struct Args {
	/// Number of middle sentences (single letter)
	#[arg(short, long, default_value_t = 5)]
	number: usize,

	/// Create a NaNoGenMo novel
	#[arg(long)]
	nanogenmo: bool,

	/// Minimum number of words of the full work
	#[arg(short, long = "minwords", default_value_t = 50_000)]
	min_words: usize,

	/// Vocabulary to use: original, external (wordnik) or mixed
	#[arg(short, long, default_value_t = VocabularyMode::Original)]
	vocabulary: VocabularyMode,

	/// Percent of original words in a mixed single letter
	#[arg(long, default_value_t = muc_core::config::DEFAULT_CHANCE_OF_ORIGINAL)]
	original_chance: f64,

	/// Link words randomly to other occurrences of the same word
	#[arg(long)]
	link: bool,

	/// HTML tags for formatting
	#[arg(long)]
	html: bool,

	/// Log some extra stuff
	#[arg(short, long)]
	log: bool,

	/// YAML file containing the Wordnik API key
	#[arg(short, long, default_value = "mucletters.yaml")]
	yaml: PathBuf,

	/// Seed for reproducible output
	#[arg(long)]
	seed: Option<u64>,

	/// Give up on a novel after this many seconds
	#[arg(long)]
	time_limit: Option<u64>,

	/// Write to this file instead of stdout
	#[arg(short, long)]
	output: Option<PathBuf>,
}

impl Args {
	fn run_config(&self) -> RunConfig {
		RunConfig {
			novel: self.nanogenmo,
			min_words: self.min_words,
			sentences_per_letter: self.number,
			vocabulary: self.vocabulary,
			chance_of_original: self.original_chance,
			link: self.link,
			markup: self.html.into(),
			log: self.log,
			credentials_path: self.yaml.clone(),
			seed: self.seed,
			time_limit: self.time_limit.map(Duration::from_secs),
		}
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();
	let config = args.run_config();

	let default_level = if config.log { "debug" } else { "warn" };
	env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

	let mut run = Run::start(config)?;

	let text = if args.nanogenmo {
		let novel = run.novel()?;
		run.document(&novel)
	} else {
		let letter = run.letter()?.render();
		format!("{letter}\n\n{} chars\n{} words\n", letter.chars().count(), count_words(&letter))
	};

	match &args.output {
		Some(path) => {
			io::write_text(path, &text)?;
			log::info!("Wrote {}", path.display());
		}
		None => print!("{text}"),
	}

	Ok(())
}
