//! Cross-reference linking: every repeated word links to another of its
//! occurrences.
//!
//! Works on Html-marked text, where each selected word sits in a
//! `<span class="o|w">WORD</span>`, the word Html-escaped. Two linear scans: the first counts the
//! marked occurrences of each repeated word, the second rewrites every such
//! span into an anchor that links to a different occurrence.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use rand::Rng;
use rand::seq::SliceRandom;
use regex::{Captures, Regex};

use crate::markup::unescape_html;
use crate::vocabulary::WordTally;

static SPAN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#"<span class="([ow])">([^<]+)</span>"#).expect("valid span pattern"));

/// The links between all occurrences of one word.
///
/// Occurrence `i` (in order of appearance) is given anchor id
/// `anchors[i]` and links to `targets[i]`. `word` is kept as it appears in
/// the marked text, escaped. Targets are the anchors rotated
/// by a nonzero offset, so the links form a single ring with no occurrence
/// pointing at itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGroup {
	word: String,
	anchors: Vec<usize>,
	targets: Vec<usize>,
}

impl LinkGroup {
	/// Builds the ring for `occurrences` copies of `word`.
	///
	/// Returns `None` below two occurrences: there is nothing to link to.
	pub fn new<R: Rng + ?Sized>(word: &str, occurrences: usize, rng: &mut R) -> Option<Self> {
		if occurrences < 2 {
			return None;
		}
		let mut anchors: Vec<usize> = (0..occurrences).collect();
		anchors.shuffle(rng);

		let offset = rng.random_range(1..occurrences);
		let targets = (0..occurrences).map(|i| anchors[(i + offset) % occurrences]).collect();

		Some(Self { word: word.to_owned(), anchors, targets })
	}

	pub fn word(&self) -> &str {
		&self.word
	}

	pub fn len(&self) -> usize {
		self.anchors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.anchors.is_empty()
	}

	/// Anchor id of the `occurrence`-th appearance, e.g. `FELLOW_FEELING-3`.
	pub fn anchor_id(&self, occurrence: usize) -> String {
		self.element_id(self.anchors[occurrence])
	}

	/// Anchor id the `occurrence`-th appearance links to.
	pub fn target_id(&self, occurrence: usize) -> String {
		self.element_id(self.targets[occurrence])
	}

	fn element_id(&self, number: usize) -> String {
		let stem: String = self.word.chars().map(|c| if c.is_whitespace() { '_' } else { c }).collect();
		format!("{stem}-{number}")
	}
}

/// Rewrites every marked occurrence of a repeated word into a link.
///
/// Only words with a tally above one are considered. Text without such
/// words is returned unchanged; the tally itself is never modified.
///
/// Example: `<span class="o">LOVE</span>` becomes
/// `<span class="o"><a id="LOVE-2" href="#LOVE-0">LOVE</a></span>`
pub fn link_words<R: Rng + ?Sized>(text: &str, tally: &WordTally, rng: &mut R) -> String {
	let repeated = tally.repeated();
	if repeated.is_empty() {
		return text.to_owned();
	}

	let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
	for caps in SPAN.captures_iter(text) {
		if let Some(word) = caps.get(2).map(|m| m.as_str()) {
			if repeated.count(&unescape_html(word)) > 1 {
				*occurrences.entry(word).or_insert(0) += 1;
			}
		}
	}

	let groups: HashMap<&str, LinkGroup> = occurrences
		.iter()
		.filter_map(|(word, count)| LinkGroup::new(word, *count, rng).map(|group| (*word, group)))
		.collect();
	if groups.is_empty() {
		return text.to_owned();
	}
	log::info!("Linking {} repeated words", groups.len());

	let mut seen: HashMap<&str, usize> = HashMap::new();
	SPAN.replace_all(text, |caps: &Captures| {
		let class = &caps[1];
		let word = &caps[2];
		match groups.get(word) {
			Some(group) => {
				let index = seen.entry(group.word()).or_insert(0);
				let link = format!(
					r##"<span class="{class}"><a id="{}" href="#{}">{word}</a></span>"##,
					group.anchor_id(*index),
					group.target_id(*index)
				);
				*index += 1;
				link
			}
			None => caps[0].to_owned(),
		}
	})
	.into_owned()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn span(word: &str) -> String {
		format!(r#"<span class="o">{word}</span>"#)
	}

	fn links(text: &str) -> Vec<(String, String)> {
		let re = Regex::new(r##"<a id="([^"]+)" href="#([^"]+)">"##).unwrap();
		re.captures_iter(text).map(|c| (c[1].to_owned(), c[2].to_owned())).collect()
	}

	#[test]
	fn groups_are_derangements() {
		let mut rng = StdRng::seed_from_u64(1);
		for k in 2..40 {
			for _ in 0..20 {
				let group = LinkGroup::new("LOVE", k, &mut rng).unwrap();
				let mut anchors: Vec<String> = (0..k).map(|i| group.anchor_id(i)).collect();
				let mut targets: Vec<String> = (0..k).map(|i| group.target_id(i)).collect();

				for i in 0..k {
					assert_ne!(group.anchor_id(i), group.target_id(i));
				}
				anchors.sort();
				targets.sort();
				assert_eq!(anchors, targets);
			}
		}
	}

	#[test]
	fn nothing_to_link_below_two() {
		let mut rng = StdRng::seed_from_u64(2);
		assert!(LinkGroup::new("LOVE", 0, &mut rng).is_none());
		assert!(LinkGroup::new("LOVE", 1, &mut rng).is_none());
	}

	#[test]
	fn no_repeats_is_identity() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut tally = WordTally::new();
		let text = format!("My {} LOVES your {}. ", span("HEART"), span("WISH"));
		tally.record("HEART");
		tally.record("WISH");

		assert_eq!(link_words(&text, &tally, &mut rng), text);
		assert_eq!(link_words("plain text", &WordTally::new(), &mut rng), "plain text");
	}

	#[test]
	fn repeated_word_forms_a_ring() {
		let mut rng = StdRng::seed_from_u64(4);
		let mut tally = WordTally::new();
		let mut text = String::new();
		for _ in 0..5 {
			text.push_str(&format!("You are my {} {}. ", span("SWEET"), span("FELLOW FEELING")));
			tally.record("SWEET");
			tally.record("FELLOW FEELING");
		}
		text.push_str(&span("CHARM"));
		tally.record("CHARM");

		let linked = link_words(&text, &tally, &mut rng);
		let pairs = links(&linked);
		assert_eq!(pairs.len(), 10);
		assert!(pairs.iter().all(|(id, href)| id != href));
		assert!(linked.contains(&span("CHARM")));
		assert!(linked.contains(r#"id="FELLOW_FEELING-"#));

		for word in ["SWEET-", "FELLOW_FEELING-"] {
			let mut ids: Vec<&String> = pairs.iter().filter(|(id, _)| id.starts_with(word)).map(|(id, _)| id).collect();
			let mut hrefs: Vec<&String> =
				pairs.iter().filter(|(id, _)| id.starts_with(word)).map(|(_, href)| href).collect();
			assert_eq!(ids.len(), 5);
			ids.sort();
			hrefs.sort();
			assert_eq!(ids, hrefs);
		}
	}

	#[test]
	fn text_outside_spans_is_untouched() {
		let mut rng = StdRng::seed_from_u64(5);
		let mut tally = WordTally::new();
		tally.record("LOVE");
		tally.record("LOVE");
		let text = format!("LOVE {} and LOVE {}", span("LOVE"), span("LOVE"));

		let linked = link_words(&text, &tally, &mut rng);
		assert!(linked.starts_with("LOVE <span"));
		assert!(linked.contains("</span> and LOVE <span"));
		assert_eq!(links(&linked).len(), 2);
	}

	#[test]
	fn linking_keeps_provenance_class() {
		let mut rng = StdRng::seed_from_u64(6);
		let mut tally = WordTally::new();
		tally.record("lantern");
		tally.record("lantern");
		let text = r#"<span class="w">lantern</span> <span class="w">lantern</span>"#;

		let linked = link_words(text, &tally, &mut rng);
		assert_eq!(linked.matches(r#"<span class="w"><a id="lantern-"#).count(), 2);
	}

	#[test]
	fn ids_of_digit_ending_words_do_not_collide() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut tally = WordTally::new();
		let mut text = String::new();
		for _ in 0..11 {
			text.push_str(&span("a"));
			tally.record("a");
		}
		for _ in 0..2 {
			text.push_str(&span("a1"));
			tally.record("a1");
		}

		let ids: Vec<String> = links(&link_words(&text, &tally, &mut rng)).into_iter().map(|(id, _)| id).collect();
		assert_eq!(ids.len(), 13);
		let unique: std::collections::BTreeSet<&String> = ids.iter().collect();
		assert_eq!(unique.len(), 13);
		assert!(ids.contains(&"a-10".to_owned()));
		assert!(ids.contains(&"a1-0".to_owned()));
	}

	#[test]
	fn escaped_words_are_linked() {
		let mut rng = StdRng::seed_from_u64(8);
		let mut tally = WordTally::new();
		tally.record("R&D");
		tally.record("R&D");
		let text = r#"<span class="w">R&amp;D</span> <span class="w">R&amp;D</span>"#;

		let linked = link_words(text, &tally, &mut rng);
		let pairs = links(&linked);
		assert_eq!(pairs.len(), 2);
		assert!(pairs.iter().all(|(id, href)| id.starts_with("R&amp;D-") && href.starts_with("R&amp;D-")));
		assert!(!linked.contains("R&D"));
	}
}
