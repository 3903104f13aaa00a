//! Love-letter generation after Christopher Strachey's 1952 program for
//! the Manchester University Computer.
//!
//! This crate provides:
//! - Word selection from the original lists, an external provider, or a mix
//! - The two-type sentence grammar and letter framing
//! - Novel-length pacing of many letters
//! - Cross-reference linking of repeated words in Html output
//!
//! Most callers only need [`Run`]: it validates a [`RunConfig`], primes the
//! vocabulary, and produces letters, novels and rendered documents.

/// Error type shared by every fallible operation.
pub mod error;

/// Run settings and provider credentials.
pub mod config;

/// Word lists, pools, tally, and slot selection.
pub mod vocabulary;

/// Enrichment providers (Wordnik, in-memory, none).
pub mod provider;

/// Sentences, letters and novels.
pub mod letter;

/// Ring links between repeated words.
pub mod linker;

/// Word markup, tag stripping and word counting.
pub mod markup;

/// Html and plain document shells.
pub mod document;

/// File helpers.
pub mod io;

mod random;
mod run;

pub use config::{Credentials, RunConfig};
pub use error::MucError;
pub use run::Run;
