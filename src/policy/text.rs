// src/policy/text.rs
// Keyword helpers for consumers of the classified output.
//
// These turn page text or a URL slug into a plain keyword phrase that can be
// checked with UrlPolicy::keyword_match().

/// Characters replaced with a space before keywords are split out.
const IGNORE_SYMBOLS: &[char] = &[
    '=', '+', ',', ':', '.', '!', '?', '"', '\'', '-', ')', '(', '*', '%', '$', '#', '@', '`',
    '^', '&', '}', '{', ']', '[', '\\', '|', '/', '>', '<', '~', '1', '2', '3', '4', '5', '6',
    '7', '8', '9', '0',
];

fn is_emoji(c: char) -> bool {
    matches!(c, '\u{1F600}'..='\u{1F77F}' | '\u{2600}'..='\u{27BF}')
}

// Lower-cases text, blanks out symbols and digits, drops emoji and collapses
// all whitespace runs into single spaces
//
// Example:
//   "Hello, World! 2024 ☀" -> "hello world"
pub fn clean_text(text: &str) -> String {
    let blanked: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !is_emoji(*c))
        .map(|c| if IGNORE_SYMBOLS.contains(&c) { ' ' } else { c })
        .collect();

    blanked.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn keyword_from_text(text: &str) -> String {
    clean_text(text)
}

// Keyword phrase from the last path segment of a URL
//
// Example:
//   "https://x.com/products/email-marketing.html" -> "email marketing"
pub fn keyword_from_url(url: &str) -> String {
    let lowered = url.to_lowercase();
    let last = lowered.rsplit('/').next().unwrap_or("");

    let mut slug = last;
    for ext in ["html", "php", "xml"] {
        for sep in ['.', '-'] {
            if let Some(stripped) = slug.strip_suffix(ext).and_then(|s| s.strip_suffix(sep)) {
                slug = stripped;
            }
        }
    }

    keyword_from_text(&slug.replace('-', " "))
}
