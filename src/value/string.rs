//! Strings and keywords.
//!
//! Both share one payload representation. A keyword is a payload that starts
//! with [`SENTINEL`] followed by at least one more character; the tag is
//! computed once from the encoded payload at construction.

/// Reserved code point that marks a payload as a keyword.
pub const SENTINEL: char = '\u{029E}';

/// Printed in place of the sentinel.
pub const KEYWORD_PREFIX: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKind {
    Plain,
    Keyword,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LispString {
    kind: StringKind,
    payload: String,
}

impl LispString {
    /// Build from raw text.
    ///
    /// `already_encoded` keeps `text` as the payload; otherwise `keyword`
    /// prepends the sentinel. The kind is then read off the payload, so any
    /// text that already begins with the sentinel becomes a keyword.
    pub fn new(text: impl Into<String>, already_encoded: bool, keyword: bool) -> Self {
        let text = text.into();
        let payload = if already_encoded || !keyword {
            text
        } else {
            let mut encoded = String::with_capacity(text.len() + SENTINEL.len_utf8());
            encoded.push(SENTINEL);
            encoded.push_str(&text);
            encoded
        };
        Self::from_encoded(payload)
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false, false)
    }

    pub fn keyword(name: impl Into<String>) -> Self {
        Self::new(name, false, true)
    }

    pub fn encoded(payload: impl Into<String>) -> Self {
        Self::new(payload, true, false)
    }

    fn from_encoded(payload: String) -> Self {
        let kind = match payload.strip_prefix(SENTINEL) {
            Some(rest) if !rest.is_empty() => StringKind::Keyword,
            _ => StringKind::Plain,
        };
        Self { kind, payload }
    }

    pub fn kind(&self) -> StringKind {
        self.kind
    }

    pub fn is_keyword(&self) -> bool {
        self.kind == StringKind::Keyword
    }

    /// The stored payload, sentinel included for keywords.
    pub fn as_encoded(&self) -> &str {
        &self.payload
    }

    /// Text without the sentinel: the keyword name, or the whole payload.
    pub fn text(&self) -> &str {
        match self.kind {
            StringKind::Keyword => &self.payload[SENTINEL.len_utf8()..],
            StringKind::Plain => &self.payload,
        }
    }

    pub fn into_encoded(self) -> String {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_flag_prefixes_sentinel() {
        let kw = LispString::keyword("foo");
        assert!(kw.is_keyword());
        assert_eq!(kw.as_encoded(), "\u{029E}foo");
        assert_eq!(kw.text(), "foo");
    }

    #[test]
    fn already_encoded_text_is_kept_verbatim() {
        let s = LispString::new("\u{029E}bar", true, false);
        assert!(s.is_keyword());
        assert_eq!(s.text(), "bar");

        let s = LispString::new("bar", true, true);
        assert_eq!(s.kind(), StringKind::Plain);
        assert_eq!(s.as_encoded(), "bar");
    }

    #[test]
    fn plain_text_starting_with_sentinel_is_a_keyword() {
        let s = LispString::plain("\u{029E}x");
        assert!(s.is_keyword());
        assert_eq!(s, LispString::keyword("x"));
    }

    #[test]
    fn lone_sentinel_is_not_a_keyword() {
        let s = LispString::keyword("");
        assert_eq!(s.kind(), StringKind::Plain);
        assert_eq!(s.as_encoded(), "\u{029E}");
        assert_eq!(s.text(), "\u{029E}");
    }

    #[test]
    fn plain_strings_are_not_keywords() {
        assert!(!LispString::plain("foo").is_keyword());
        assert!(!LispString::plain("").is_keyword());
        assert!(!LispString::plain(":foo").is_keyword());
    }
}
