//! Lightweight part-of-speech tagging
//!
//! Only the distinction that matters for entity chunking is modelled:
//! proper nouns versus everything else. Closed-class words come from fixed
//! lists, capitalization decides proper nouns, and a common-word lexicon
//! keeps ordinary words that are capitalized only because they open a
//! sentence (or are shouted in all caps) from being read as names.
//! Regular inflections (`Tickets`, `Injuries`, `Rallied`, `Stopping`) are
//! looked up by their base form.

use std::collections::HashSet;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "another", "such", "what", "which", "whatever", "all", "both", "either", "neither", "few",
    "many", "much", "several",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "someone", "somebody", "something", "anyone", "anybody", "anything", "everyone",
    "everybody", "everything", "nobody", "nothing", "none",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "as",
    "at", "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "despite",
    "down", "during", "except", "for", "from", "in", "inside", "into", "like", "near", "of",
    "off", "on", "onto", "out", "outside", "over", "past", "per", "since", "through",
    "throughout", "till", "to", "toward", "towards", "under", "underneath", "until", "up",
    "upon", "via", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while", "whereas",
    "if", "unless", "whether", "when", "where", "than", "then", "however",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

/// Punctuation after which the next word counts as sentence-initial
const OPENERS: &[&str] = &["\"", "\u{201C}", "\u{2018}", ":", "(", "["];

/// Coarse part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Name of a person, place, organization, ...
    ProperNoun,
    /// Article or other determiner
    Determiner,
    /// Personal, possessive or indefinite pronoun
    Pronoun,
    /// Preposition
    Preposition,
    /// Coordinating or subordinating conjunction
    Conjunction,
    /// Auxiliary or modal verb
    Auxiliary,
    /// Numeric literal
    Number,
    /// Punctuation or symbol
    Punctuation,
    /// Any other word
    Word,
}

/// A token with its tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Token text as it appeared
    pub text: String,
    /// Assigned tag
    pub tag: PosTag,
}

/// Rule-based tagger backed by a common-word lexicon
#[derive(Debug, Clone, Default)]
pub struct HeuristicTagger {
    lexicon: HashSet<String>,
}

impl HeuristicTagger {
    /// Create a tagger; `lexicon` holds lowercase common words
    pub fn new(lexicon: HashSet<String>) -> Self {
        Self { lexicon }
    }

    /// Tag a token sequence
    pub fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut tagged = Vec::with_capacity(tokens.len());
        let mut initial = true;

        for token in tokens {
            let tag = self.tag_one(token, initial);
            initial = match tag {
                PosTag::Punctuation => initial || OPENERS.contains(&token.as_str()),
                _ => false,
            };
            tagged.push(TaggedToken {
                text: token.clone(),
                tag,
            });
        }

        tagged
    }

    fn tag_one(&self, token: &str, initial: bool) -> PosTag {
        if !token.chars().any(char::is_alphanumeric) {
            return PosTag::Punctuation;
        }
        if is_number(token) {
            return PosTag::Number;
        }

        let lower = token.to_lowercase();
        let known = self.is_common_word(&lower);

        // Acronyms are names unless the word is ordinary text in caps
        if is_all_caps(token) {
            return if known { PosTag::Word } else { PosTag::ProperNoun };
        }

        if let Some(tag) = closed_class(&lower) {
            return tag;
        }

        if token.chars().next().is_some_and(char::is_uppercase) {
            if initial && known {
                return PosTag::Word;
            }
            return PosTag::ProperNoun;
        }

        PosTag::Word
    }

    /// True if `lower` or one of its base forms is in the lexicon
    pub fn is_common_word(&self, lower: &str) -> bool {
        self.lexicon.contains(lower)
            || base_forms(lower)
                .iter()
                .any(|base| self.lexicon.contains(base))
    }
}

/// Candidate base forms of a regularly inflected word, most specific first
fn base_forms(word: &str) -> Vec<String> {
    let mut forms = Vec::new();

    if let Some(stem) = word.strip_suffix("ies") {
        forms.push(format!("{}y", stem));
    }
    if let Some(stem) = word.strip_suffix("es") {
        forms.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        if !stem.ends_with('s') {
            forms.push(stem.to_string());
        }
    }
    if let Some(stem) = word.strip_suffix("ied") {
        forms.push(format!("{}y", stem));
    }
    for suffix in ["ed", "ing"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            forms.push(stem.to_string());
            forms.push(format!("{}e", stem));
            if let Some(single) = undouble(stem) {
                forms.push(single);
            }
        }
    }

    forms.retain(|form| form.chars().count() > 1);
    forms
}

// "stopp" -> "stop"
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && !"aeiou".contains(last) {
        let mut single = stem.to_string();
        single.pop();
        Some(single)
    } else {
        None
    }
}

fn closed_class(lower: &str) -> Option<PosTag> {
    if DETERMINERS.contains(&lower) {
        Some(PosTag::Determiner)
    } else if PRONOUNS.contains(&lower) {
        Some(PosTag::Pronoun)
    } else if PREPOSITIONS.contains(&lower) {
        Some(PosTag::Preposition)
    } else if CONJUNCTIONS.contains(&lower) {
        Some(PosTag::Conjunction)
    } else if AUXILIARIES.contains(&lower) {
        Some(PosTag::Auxiliary)
    } else {
        None
    }
}

fn is_number(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

fn is_all_caps(token: &str) -> bool {
    let mut letters = 0;
    for c in token.chars().filter(|c| c.is_alphabetic()) {
        if !c.is_uppercase() {
            return false;
        }
        letters += 1;
    }
    letters > 1
}
