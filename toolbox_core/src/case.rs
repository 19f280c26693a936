//! Case conversion for free-form text.

use crate::CaseStyle;

/// Convert `text` to the requested case style.
///
/// Whitespace-only input converts to an empty string. Word-based styles split
/// on whitespace, `_`, `-` and lower-to-upper camel humps, and lowercase every
/// word before re-joining.
#[must_use]
pub fn convert_case(text: &str, style: CaseStyle) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    match style {
        CaseStyle::Uppercase => text.to_uppercase(),
        CaseStyle::Lowercase => text.to_lowercase(),
        CaseStyle::SentenceCase => capitalize(&text.to_lowercase()),
        CaseStyle::TitleCase => join_capitalized(&words(text), " "),
        CaseStyle::PascalCase => join_capitalized(&words(text), ""),
        CaseStyle::CamelCase => {
            let words = words(text);
            let mut output = String::new();
            for (index, word) in words.iter().enumerate() {
                if index == 0 {
                    output.push_str(word);
                } else {
                    output.push_str(&capitalize(word));
                }
            }
            output
        }
        CaseStyle::SnakeCase => words(text).join("_"),
        CaseStyle::KebabCase => words(text).join("-"),
    }
}

fn words(text: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(text.len() + text.len() / 4);
    let mut previous: Option<char> = None;
    for ch in text.chars() {
        if ch.is_ascii_uppercase() && previous.is_some_and(|prev| prev.is_ascii_lowercase()) {
            spaced.push(' ');
        }
        spaced.push(ch);
        previous = Some(ch);
    }

    spaced
        .to_lowercase()
        .split(|ch: char| ch.is_whitespace() || ch == '_' || ch == '-')
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn join_capitalized(words: &[String], separator: &str) -> String {
    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(separator)
}
