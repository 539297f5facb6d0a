use crate::Convention;

/// Split an identifier into lowercase words.
///
/// Words break on delimiters (see [`Convention`]) and on camelCase humps,
/// i.e. an ASCII lowercase letter directly followed by an ASCII uppercase one.
/// Runs of delimiters never produce empty words.
///
/// # Examples
/// ```
/// use recase_core::{Convention, tokenize};
/// assert_eq!(tokenize("My name is  Dieko", Convention::Dot), ["my", "name", "is", "dieko"]);
/// assert_eq!(tokenize("myVariableName", Convention::Kebab), ["my", "variable", "name"]);
/// assert_eq!(tokenize("mobile-number", Convention::Kebab), ["mobile-number"]);
/// ```
pub fn tokenize(input: &str, convention: Convention) -> Vec<String> {
    fn flush(word: &mut String, words: &mut Vec<String>) {
        if !word.is_empty() {
            words.push(word.to_lowercase());
            word.clear();
        }
    }

    let mut words = Vec::new();
    let mut word = String::new();
    let mut prev: Option<char> = None;

    for c in input.trim().chars() {
        if convention.is_delimiter(c) {
            flush(&mut word, &mut words);
        } else {
            if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
                flush(&mut word, &mut words);
            }
            word.push(c);
        }
        prev = Some(c);
    }
    flush(&mut word, &mut words);

    log::trace!("tokenized {input:?} for {convention} into {words:?}");
    words
}
