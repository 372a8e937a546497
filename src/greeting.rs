use crate::lang::Language;

/// Greeting for `Language::Russian`.
pub const GREETING_RU: &str = "Привет";
/// Greeting for `Language::English`.
pub const GREETING_EN: &str = "Hello";
/// Greeting when no recognized language is supplied.
pub const DEFAULT_GREETING: &str = "👋";

/// Map a language to its greeting. `None` means the caller did not specify
/// a language and gets the default greeting.
pub fn greet(lang: Option<Language>) -> &'static str {
    match lang {
        Some(Language::Russian) => GREETING_RU,
        Some(Language::English) => GREETING_EN,
        None => DEFAULT_GREETING,
    }
}

/// String boundary for hosts that carry the tag as free-form text.
/// Unrecognized tags fall open to the default greeting rather than failing.
pub fn greet_tag(tag: &str) -> &'static str {
    greet(Language::parse(tag))
}
