// src/core/sanitize.rs

/// Slug → display name: dashes become spaces, then title-case.
/// `"bear-creek"` → `"Bear Creek"`.
pub fn display_name(slug: &str) -> String {
    title_case(&slug.replace('-', " "))
}

/// Uppercase the first letter of every run of letters, lowercase the rest.
/// Any non-letter (space, digit, apostrophe) starts a new word, so
/// `"o'brien 2nd"` → `"O'Brien 2Nd"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word { out.extend(ch.to_lowercase()); } else { out.extend(ch.to_uppercase()); }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
