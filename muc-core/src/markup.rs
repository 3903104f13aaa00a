//! Text rendering helpers shared by the generators and the document shell.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::vocabulary::{Provenance, Word};

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("valid tag pattern"));

/// How selected words are written into the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Markup {
	/// Bare words.
	#[default]
	Plain,
	/// Each word wrapped in a `<span>` whose class tells its provenance.
	Html,
}

impl Markup {
	pub fn is_html(&self) -> bool {
		*self == Markup::Html
	}

	/// Renders one selected word. Html output is escaped.
	///
	/// Example (Html): `LOVE` from the built-in lists →
	/// `<span class="o">LOVE</span>`
	pub fn word(&self, word: &Word) -> String {
		match self {
			Markup::Plain => word.text.clone(),
			Markup::Html => format!(r#"<span class="{}">{}</span>"#, class_name(word.provenance), escape_html(&word.text)),
		}
	}
}

impl From<bool> for Markup {
	fn from(html: bool) -> Self {
		if html { Markup::Html } else { Markup::Plain }
	}
}

/// CSS class for a provenance: `o` (original) or `w` (Wordnik/external).
pub fn class_name(provenance: Provenance) -> &'static str {
	match provenance {
		Provenance::Original => "o",
		Provenance::External => "w",
	}
}

/// Escapes the characters that are special in Html text and attributes.
pub fn escape_html(text: &str) -> Cow<'_, str> {
	if !text.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(text);
	}
	let mut out = String::with_capacity(text.len() + 8);
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	Cow::Owned(out)
}

/// Reverses [`escape_html`].
pub fn unescape_html(text: &str) -> Cow<'_, str> {
	if !text.contains('&') {
		return Cow::Borrowed(text);
	}
	// `&amp;` last, so `&amp;lt;` comes back as `&lt;`.
	let text = text
		.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&#39;", "'")
		.replace("&amp;", "&");
	Cow::Owned(text)
}

/// Removes every tag, leaving the text between them.
pub fn strip_tags(text: &str) -> Cow<'_, str> {
	TAG.replace_all(text, "")
}

/// Counts whitespace-separated words once markup is stripped.
pub fn count_words(text: &str) -> usize {
	strip_tags(text).split_whitespace().count()
}

/// Formats a number with thousands separators (`50000` → `50,000`).
pub fn commafy(value: usize) -> String {
	let digits = value.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(c);
	}
	out
}
