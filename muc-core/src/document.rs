//! Final assembly of a novel into a printable document.

use rand::Rng;

use crate::letter::Novel;
use crate::linker::link_words;
use crate::markup::{Markup, commafy};
use crate::vocabulary::WordTally;

const HTML_HEAD: &str = r#"<html>
<head>
  <meta charset="utf-8" />
  <title>MUC letters - NaNoGenMo2015</title>
  <link rel="stylesheet" type="text/css" href="mucletters.css">
  <link rel="shortcut icon" type="image/ico" href="favicon.ico"/>
</head>
<body>
"#;

const HTML_TAIL: &str = "</body></html>\n";

const SUBTITLE: &str = "An epistolary novel for NaNoGenMo";
const HOMAGE: &str = "after Christopher Strachey and Manchester University Computer (1952)";

/// Renders `novel` as a complete document.
///
/// In Html mode, letters get anchors, alternating paragraph classes and
/// `<br>` line breaks; when `link` is set, repeated words are cross-linked
/// (see [`link_words`]). Plain mode ignores `link`, having no marked words
/// to link.
pub fn render_novel<R: Rng + ?Sized>(novel: &Novel, tally: &WordTally, markup: Markup, link: bool, rng: &mut R) -> String {
	match markup {
		Markup::Html => render_html(novel, tally, link, rng),
		Markup::Plain => {
			if link {
				log::warn!("Linking needs Html markup; skipped");
			}
			render_plain(novel)
		}
	}
}

fn render_html<R: Rng + ?Sized>(novel: &Novel, tally: &WordTally, link: bool, rng: &mut R) -> String {
	let mut body = Vec::with_capacity(novel.len() * 2);
	for (i, letter) in novel.letters().iter().enumerate() {
		let parity = if i % 2 == 1 { "even" } else { "odd" };
		body.push(format!(r#"<span id="{}"></span>"#, i + 1));
		body.push(format!("<P class={parity}>{}", letter.render().replace('\n', "<br>\n")));
	}
	let mut body = body.join("\n");
	if link {
		body = link_words(&body, tally, rng);
	}

	let mut out = String::with_capacity(body.len() + 1024);
	out.push_str(HTML_HEAD);
	out.push_str("<div class=\"border even\">\n");
	out.push_str(&format!(
		"<H1 id=\"0\"><img src=\"favicon.ico\"> {} Love Letters <img src=\"favicon.ico\"></H1>\n",
		novel.len()
	));
	out.push_str(&format!("<H2>{SUBTITLE}</H2>\n"));
	out.push_str("<H2>after Christopher Strachey and<br>Manchester University Computer (1952)</H2>\n");
	out.push_str(&format!("<H3>{} words</H3>\n", commafy(novel.word_count())));
	out.push_str("</div>\n");
	out.push_str(&body);
	out.push('\n');
	out.push_str(HTML_TAIL);
	out
}

fn render_plain(novel: &Novel) -> String {
	let mut out = format!(
		"{} Love Letters\n{SUBTITLE}\n{HOMAGE}\n{} words\n\n\n",
		novel.len(),
		commafy(novel.word_count())
	);
	let letters: Vec<String> = novel.letters().iter().map(|letter| letter.render()).collect();
	out.push_str(&letters.join("\n\n\n"));
	out.push('\n');
	out
}
