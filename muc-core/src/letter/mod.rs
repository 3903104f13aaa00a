//! Letter generation, from single sentences up to a whole novel.
//!
//! - Sentence sequences with the two-type alternation rule (`SentenceGenerator`)
//! - Salutation + body + sign-off (`LetterComposer`)
//! - Progress-driven chaining of letters into a novel (`NovelPacer`)

/// Sentence templates and the type-alternation state machine.
pub mod sentence;

/// One letter around a sentence sequence.
pub mod composer;

/// Novel-length pacing.
pub mod novel;

pub use composer::{Letter, LetterComposer};
pub use novel::{Novel, NovelPacer, Pace};
pub use sentence::{Sentence, SentenceGenerator, SentenceType};
