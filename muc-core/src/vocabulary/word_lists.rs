//! The fixed vocabulary of the 1952 Manchester program.
//!
//! Salutations open a letter; the four part-of-speech lists fill the
//! sentence templates. These lists never change during a run.

pub const SALUTATIONS1: &[&str] = &[
	"BELOVED",
	"DARLING",
	"DEAR",
	"DEAREST",
	"FANCIFUL",
	"HONEY",
];

pub const SALUTATIONS2: &[&str] = &[
	"CHICKPEA",
	"DEAR",
	"DUCK",
	"JEWEL",
	"LOVE",
	"MOPPET",
	"SWEETHEART",
];

pub const ADJECTIVES: &[&str] = &[
	"AFFECTIONATE",
	"AMOROUS",
	"ANXIOUS",
	"AVID",
	"BEAUTIFUL",
	"BREATHLESS",
	"BURNING",
	"COVETOUS",
	"CRAVING",
	"CURIOUS",
	"EAGER",
	"FERVENT",
	"FONDEST",
	"LOVEABLE",
	"LOVESICK",
	"LOVING",
	"PASSIONATE",
	"PRECIOUS",
	"SEDUCTIVE",
	"SWEET",
	"SYMPATHETIC",
	"TENDER",
	"UNSATISFIED",
	"WINNING",
	"WISTFUL",
];

pub const NOUNS: &[&str] = &[
	"ADORATION",
	"AFFECTION",
	"AMBITION",
	"APPETITE",
	"ARDOUR",
	"BEING",
	"BURNING",
	"CHARM",
	"CRAVING",
	"DESIRE",
	"DEVOTION",
	"EAGERNESS",
	"ENCHANTMENT",
	"ENTHUSIASM",
	"FANCY",
	"FELLOW FEELING",
	"FERVOUR",
	"FONDNESS",
	"HEART",
	"HUNGER",
	"INFATUATION",
	"LITTLE LIKING",
	"LONGING",
	"LOVE",
	"LUST",
	"PASSION",
	"RAPTURE",
	"SYMPATHY",
	"THIRST",
	"WISH",
	"YEARNING",
];

pub const ADVERBS: &[&str] = &[
	"AFFECTIONATELY",
	"ARDENTLY",
	"ANXIOUSLY",
	"BEAUTIFULLY",
	"BURNINGLY",
	"COVETOUSLY",
	"CURIOUSLY",
	"EAGERLY",
	"FERVENTLY",
	"FONDLY",
	"IMPATIENTLY",
	"KEENLY",
	"LOVINGLY",
	"PASSIONATELY",
	"SEDUCTIVELY",
	"TENDERLY",
	"WISTFULLY",
];

pub const VERBS: &[&str] = &[
	"ADORES",
	"ATTRACTS",
	"CLINGS TO",
	"HOLDS DEAR",
	"HOPES FOR",
	"HUNGERS FOR",
	"LIKES",
	"LONGS FOR",
	"LOVES",
	"LUSTS AFTER",
	"PANTS FOR",
	"PINES FOR",
	"SIGHS FOR",
	"TEMPTS",
	"THIRSTS FOR",
	"TREASURES",
	"YEARNS FOR",
	"WOOS",
];
