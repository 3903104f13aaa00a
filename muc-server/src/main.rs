use std::env;
use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use serde::Deserialize;

use muc_core::vocabulary::VocabularyMode;
use muc_core::{MucError, Run, RunConfig};

/// Largest novel the server agrees to write.
const MAX_MIN_WORDS: usize = 200_000;

/// Largest single letter the server agrees to write.
const MAX_SENTENCES: usize = 1_000;

/// Query parameters for `/v1/letter`
#[derive(Deserialize)]
struct LetterParams {
	sentences: Option<usize>,
	vocabulary: Option<VocabularyMode>,
	markup: Option<bool>,
	seed: Option<u64>,
}

/// Query parameters for `/v1/novel`
#[derive(Deserialize)]
struct NovelParams {
	min_words: Option<usize>,
	vocabulary: Option<VocabularyMode>,
	markup: Option<bool>,
	link: Option<bool>,
	seed: Option<u64>,
}

struct SharedData {
	/// Credentials file used for external and mixed vocabularies.
	credentials_path: Option<PathBuf>,
}

impl SharedData {
	/// Builds a run configuration shared by both endpoints.
	fn base_config(&self, vocabulary: Option<VocabularyMode>, markup: Option<bool>, seed: Option<u64>) -> Result<RunConfig, String> {
		let vocabulary = vocabulary.unwrap_or_default();
		let mut config = RunConfig { vocabulary, markup: markup.unwrap_or(false).into(), seed, ..Default::default() };
		if vocabulary.needs_provider() {
			match &self.credentials_path {
				Some(path) => config.credentials_path = path.clone(),
				None => return Err("External vocabulary is not configured on this server".into()),
			}
		}
		Ok(config)
	}
}

/// Runs a generation job on the blocking pool and maps the outcome.
async fn generate<F>(job: F) -> HttpResponse
where
	F: FnOnce() -> Result<String, MucError> + Send + 'static,
{
	match web::block(job).await {
		Ok(Ok(text)) => HttpResponse::Ok().body(text),
		Ok(Err(e @ (MucError::Config(_) | MucError::Credentials { .. }))) => HttpResponse::BadRequest().body(e.to_string()),
		Ok(Err(e)) => {
			log::error!("Generation failed: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
		Err(_) => HttpResponse::InternalServerError().body("Generation worker failed"),
	}
}

/// HTTP GET endpoint `/v1/letter`
///
/// Writes a single letter.
#[get("/v1/letter")]
async fn get_letter(data: web::Data<SharedData>, query: web::Query<LetterParams>) -> impl Responder {
	let sentences = query.sentences.unwrap_or(5);
	if sentences == 0 || sentences > MAX_SENTENCES {
		return HttpResponse::BadRequest().body(format!("sentences must be between 1 and {MAX_SENTENCES}"));
	}

	let mut config = match data.base_config(query.vocabulary, query.markup, query.seed) {
		Ok(c) => c,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	config.sentences_per_letter = sentences;

	generate(move || Ok(Run::start(config)?.letter()?.render())).await
}

/// HTTP GET endpoint `/v1/novel`
///
/// Writes a novel and returns the rendered document.
#[get("/v1/novel")]
async fn get_novel(data: web::Data<SharedData>, query: web::Query<NovelParams>) -> impl Responder {
	let min_words = query.min_words.unwrap_or(1000);
	if min_words == 0 || min_words > MAX_MIN_WORDS {
		return HttpResponse::BadRequest().body(format!("min_words must be between 1 and {MAX_MIN_WORDS}"));
	}

	let mut config = match data.base_config(query.vocabulary, query.markup, query.seed) {
		Ok(c) => c,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	config.novel = true;
	config.min_words = min_words;
	config.link = query.link.unwrap_or(false);

	generate(move || {
		let mut run = Run::start(config)?;
		let novel = run.novel()?;
		Ok(run.document(&novel))
	})
	.await
}

/// Main entry point for the server.
///
/// # Notes
/// - Binds to `MUC_BIND` (default 127.0.0.1:5000).
/// - `MUC_CREDENTIALS` points at the Wordnik YAML file; without it only the
///   original vocabulary is served.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let bind = env::var("MUC_BIND").unwrap_or_else(|_| "127.0.0.1:5000".to_owned());
	let shared_data = web::Data::new(SharedData {
		credentials_path: env::var_os("MUC_CREDENTIALS").map(PathBuf::from),
	});
	log::info!("Listening on {bind}");

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.app_data(shared_data.clone())
			.service(get_letter)
			.service(get_novel)
	})
		.bind(bind)?
		.run()
		.await
}
