//! Treebank-style word tokenizer.

use fakebuzz_application::Tokenizer;
use regex::Regex;

/// Regex rewrite rules applied in order, followed by a whitespace split.
///
/// Follows Penn Treebank conventions: punctuation becomes its own token,
/// contractions split off their clitic (`Don't` → `Do n't`), while hyphenated
/// words, decimal numbers and thousands separators stay whole.
pub struct TreebankTokenizer {
    rules: Vec<(Regex, &'static str)>,
}

const RULES: &[(&str, &str)] = &[
    // double quotes
    (r#"""#, " '' "),
    // commas and colons not inside numbers
    (r"([:,])([^\d])", " ${1} ${2}"),
    (r"\.\.\.", " ... "),
    (r"[;@#$%&]", " ${0} "),
    // sentence-final period, possibly followed by closing brackets or quotes
    (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2}${3} "),
    (r"[?!]", " ${0} "),
    (r"([^'])' ", "${1} ' "),
    (r"[\]\[(){}<>]", " ${0} "),
    (r"--", " -- "),
    // clitics
    (r"([^' ])('[sSmMdD]|') ", "${1} ${2} "),
    (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    (r"(?i)\b(can)(not)\b", "${1} ${2}"),
];

impl TreebankTokenizer {
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .map(|(pattern, replacement)| {
                let regex = Regex::new(pattern).expect("tokenizer patterns are valid");
                (regex, *replacement)
            })
            .collect();
        Self { rules }
    }
}

impl Default for TreebankTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut text = format!(" {} ", text);
        for (regex, replacement) in &self.rules {
            text = regex.replace_all(&text, *replacement).into_owned();
        }
        text.split_whitespace().map(str::to_string).collect()
    }
}
