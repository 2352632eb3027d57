//! Recomposition of segmented tokens into an identifier.

use crate::initialism::{self, InitialismMatch};
use crate::segment::{Segments, Token, TokenKind};

/// Emitted for underscore-only input in unexported mode, so the discard
/// identifier `_` is never produced.
pub const UNDERSCORE_PLACEHOLDER: &str = "_Arg";

/// Target identifier convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Leading uppercase, initialisms uppercase everywhere.
    Exported,
    /// Leading lowercase, a leading initialism lowercased.
    Unexported,
}

/// Case applied to the first letter of an ordinary token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lead {
    Upper,
    Lower,
    AsWritten,
}

/// Builds the identifier for `input` from its `segments`.
pub fn compose(input: &str, segments: &Segments<'_>, mode: Mode) -> String {
    if input.is_empty() {
        return String::new();
    }
    if segments.is_empty() {
        return match mode {
            Mode::Exported => String::new(),
            Mode::Unexported => UNDERSCORE_PLACEHOLDER.to_string(),
        };
    }

    let mut out = String::with_capacity(input.len() + 1);
    let underscore_prefix = mode == Mode::Unexported && segments.leading_underscore;
    if underscore_prefix {
        out.push('_');
    }

    for (i, token) in segments.tokens.iter().enumerate() {
        let lead = match (mode, i) {
            (Mode::Unexported, 0) if underscore_prefix => Lead::AsWritten,
            (Mode::Unexported, 0) => Lead::Lower,
            _ => Lead::Upper,
        };
        push_token(&mut out, token, lead);
    }

    out
}

fn push_token(out: &mut String, token: &Token<'_>, lead: Lead) {
    let text = token.text;

    if token.kind == TokenKind::Digit {
        out.push('_');
        out.push_str(text);
        return;
    }

    if !initialism::classify(text).is_eligible() {
        // `APIProxy` is an initialism glued to a Title-case word; anything
        // else Mixed (`QUUXBar`, `fOO`) is kept as written.
        match initialism::split_leading(text) {
            Some((canonical, rest)) => {
                push_initialism(out, canonical, lead);
                push_with_lead(out, rest, Lead::Upper);
            }
            None => out.push_str(text),
        }
        return;
    }

    match initialism::match_token(text) {
        Some(InitialismMatch { canonical, suffix }) => {
            push_initialism(out, canonical, lead);
            out.push_str(suffix);
        }
        None => push_with_lead(out, text, lead),
    }
}

/// A leading initialism is lowercase in unexported mode, underscore prefix or not.
fn push_initialism(out: &mut String, canonical: &str, lead: Lead) {
    match lead {
        Lead::Upper => out.push_str(canonical),
        Lead::Lower | Lead::AsWritten => out.push_str(&canonical.to_ascii_lowercase()),
    }
}

fn push_with_lead(out: &mut String, text: &str, lead: Lead) {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return;
    };
    let first = match lead {
        Lead::Upper => first.to_ascii_uppercase(),
        Lead::Lower => first.to_ascii_lowercase(),
        Lead::AsWritten => first,
    };
    out.push(first);
    out.push_str(chars.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;

    fn run(input: &str, mode: Mode) -> String {
        compose(input, &segment(input), mode)
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(run("", Mode::Exported), "");
        assert_eq!(run("", Mode::Unexported), "");
        assert_eq!(run("_", Mode::Exported), "");
        assert_eq!(run("___", Mode::Exported), "");
        assert_eq!(run("_", Mode::Unexported), "_Arg");
        assert_eq!(run("____", Mode::Unexported), "_Arg");
    }

    #[test]
    fn test_initialism_position() {
        assert_eq!(run("id_foo", Mode::Exported), "IDFoo");
        assert_eq!(run("id_foo", Mode::Unexported), "idFoo");
        assert_eq!(run("foo_id", Mode::Exported), "FooID");
        assert_eq!(run("foo_id", Mode::Unexported), "fooID");
    }

    #[test]
    fn test_mixed_tokens_pass_through() {
        assert_eq!(run("fOO", Mode::Exported), "fOO");
        assert_eq!(run("fOO", Mode::Unexported), "fOO");
        assert_eq!(run("foo_IDs", Mode::Exported), "FooIDs");
        assert_eq!(run("foo_IDs", Mode::Unexported), "fooIDs");
        assert_eq!(run("QUUXBar", Mode::Unexported), "QUUXBar");
    }

    #[test]
    fn test_leading_initialism_split_from_title_word() {
        assert_eq!(run("APIProxy", Mode::Exported), "APIProxy");
        assert_eq!(run("APIProxy", Mode::Unexported), "apiProxy");
        assert_eq!(run("HTTPServer", Mode::Exported), "HTTPServer");
        assert_eq!(run("HTTPServer", Mode::Unexported), "httpServer");
        assert_eq!(run("_APIProxy", Mode::Unexported), "_apiProxy");
        assert_eq!(run("foo_XMLHttp", Mode::Unexported), "fooXMLHttp");
        assert_eq!(run("JSONBlob2", Mode::Unexported), "jsonBlob2");
    }

    #[test]
    fn test_leading_underscore_keeps_first_letter() {
        assert_eq!(run("_Leading", Mode::Unexported), "_Leading");
        assert_eq!(run("_leading", Mode::Unexported), "_leading");
        assert_eq!(run("_leading", Mode::Exported), "Leading");
    }

    #[test]
    fn test_leading_underscore_still_lowercases_initialism() {
        assert_eq!(run("_id", Mode::Unexported), "_id");
        assert_eq!(run("_Id", Mode::Unexported), "_id");
        assert_eq!(run("_ID", Mode::Unexported), "_id");
        assert_eq!(run("__Uid_foo", Mode::Unexported), "_uidFoo");
        assert_eq!(run("_API_key", Mode::Unexported), "_apiKey");
        assert_eq!(run("_Rpc1150", Mode::Unexported), "_rpc1150");
    }

    #[test]
    fn test_digit_tokens_rejoin_with_underscore() {
        assert_eq!(run("v_2", Mode::Exported), "V_2");
        assert_eq!(run("v_2", Mode::Unexported), "v_2");
        assert_eq!(run("_2fa", Mode::Exported), "2fa");
        assert_eq!(run("_2fa", Mode::Unexported), "_2fa");
    }

    #[test]
    fn test_punctuation_and_non_ascii() {
        assert_eq!(run("foo-bar", Mode::Exported), "Foo-bar");
        assert_eq!(run("!!", Mode::Unexported), "!!");
        assert_eq!(run("größe_wert", Mode::Exported), "GrößeWert");
        assert_eq!(run("éclair", Mode::Exported), "éclair");
    }
}
