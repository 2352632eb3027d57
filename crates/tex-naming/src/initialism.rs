//! The initialism table and the case patterns that make a token eligible for it.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// Canonical initialisms, all uppercase.
pub const DEFAULT_INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IEEE", "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP",
    "TLS", "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF",
    "XSS",
];

lazy_static! {
    static ref INITIALISMS: HashSet<&'static str> = DEFAULT_INITIALISMS.iter().copied().collect();
}

/// Looks up `candidate` case-insensitively, returning the canonical entry.
pub fn lookup(candidate: &str) -> Option<&'static str> {
    if candidate.is_empty() {
        return None;
    }
    let key = candidate.to_ascii_uppercase();
    INITIALISMS.get(key.as_str()).copied()
}

/// Returns every known initialism, sorted.
pub fn all() -> Vec<&'static str> {
    let mut list: Vec<_> = INITIALISMS.iter().copied().collect();
    list.sort_unstable();
    list
}

/// Casing shape of a token, judged on ASCII letters only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    /// No uppercase letters. Includes tokens with no letters at all.
    Lower,
    /// No lowercase letters.
    Upper,
    /// Uppercase first character, no uppercase after it.
    Title,
    /// Anything else; passed through verbatim.
    Mixed,
}

impl CasePattern {
    pub fn is_eligible(self) -> bool {
        !matches!(self, CasePattern::Mixed)
    }
}

pub fn classify(token: &str) -> CasePattern {
    let bytes = token.as_bytes();
    let has_upper = bytes.iter().any(u8::is_ascii_uppercase);
    let has_lower = bytes.iter().any(u8::is_ascii_lowercase);

    if !has_upper {
        CasePattern::Lower
    } else if !has_lower {
        CasePattern::Upper
    } else if bytes[0].is_ascii_uppercase() && !bytes[1..].iter().any(u8::is_ascii_uppercase) {
        CasePattern::Title
    } else {
        CasePattern::Mixed
    }
}

/// An initialism found in a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialismMatch<'a> {
    /// Canonical uppercase form.
    pub canonical: &'static str,
    /// Digits that followed the initialism in the token, kept as written.
    pub suffix: &'a str,
}

/// Matches a whole token against the table, falling back to its letter run
/// when the token is letters followed only by digits (`Rpc1150`).
pub fn match_token(token: &str) -> Option<InitialismMatch<'_>> {
    if let Some(canonical) = lookup(token) {
        return Some(InitialismMatch {
            canonical,
            suffix: "",
        });
    }

    let split = token.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = token.split_at(split);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    lookup(letters).map(|canonical| InitialismMatch {
        canonical,
        suffix: digits,
    })
}

/// Splits a Mixed token like `APIProxy` into a leading initialism and the
/// Title-case word after it. The last letter of the uppercase run starts the word.
pub fn split_leading(token: &str) -> Option<(&'static str, &str)> {
    let bytes = token.as_bytes();
    let run = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
    if run < 2 || !bytes.get(run).is_some_and(u8::is_ascii_lowercase) {
        return None;
    }

    let (prefix, rest) = token.split_at(run - 1);
    if classify(rest) != CasePattern::Title {
        return None;
    }
    lookup(prefix).map(|canonical| (canonical, rest))
}
