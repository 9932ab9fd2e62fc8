use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::language::Language;

pub const DEFAULT_MAX_CHARS: usize = 8000;

/// Everything `encodeURIComponent` escapes.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn translation_prompt(language: Language, text: &str) -> String {
    format!("Translate the following to {}:\n\n{}", language.name(), text)
}

/// Keeps the first `limit` characters. Nothing marks the cut.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

pub fn encode(prompt: &str) -> String {
    utf8_percent_encode(prompt, URI_COMPONENT).to_string()
}

#[test]
fn test_prompt_shape() {
    assert_eq!(
        "Translate the following to French:\n\nHi",
        translation_prompt(Language::French, "Hi")
    );
}

#[test]
fn test_truncate_chars() {
    assert_eq!("abc", truncate_chars("abcdef", 3));
    assert_eq!("ab", truncate_chars("ab", 3));
    assert_eq!("", truncate_chars("abc", 0));
    // multi-byte characters count once
    assert_eq!("日本", truncate_chars("日本語", 2));
}

#[test]
fn test_encode_reserved() {
    assert_eq!("a%20b%3A%0A%26%3D%3F%2B%2F%23", encode("a b:\n&=?+/#"));
}

#[test]
fn test_encode_keeps_uri_component_marks() {
    assert_eq!("call%20f()%20it's%20*ok*!", encode("call f() it's *ok*!"));
    assert_eq!("A-z_0.9~", encode("A-z_0.9~"));
}

#[test]
fn test_encode_non_ascii() {
    assert_eq!("%E6%97%A5%E6%9C%AC", encode("日本"));
}
