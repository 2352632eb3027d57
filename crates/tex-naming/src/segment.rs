//! Word segmentation of raw names.

/// How a token is joined onto the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Fused directly onto whatever precedes it.
    Word,
    /// Digit-led segment that followed an underscore run. Rejoined with a single `_`.
    Digit,
}

/// A contiguous, non-empty slice of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    fn word(text: &'a str) -> Self {
        Self {
            text,
            kind: TokenKind::Word,
        }
    }
}

/// Output of [`segment`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments<'a> {
    pub tokens: Vec<Token<'a>>,
    pub leading_underscore: bool,
    pub trailing_underscore: bool,
}

impl Segments<'_> {
    /// True if the input held nothing but underscores (or nothing at all).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Splits `input` into word tokens.
///
/// Underscore runs separate words and never appear in a token. Within a
/// separated run, a cut is made wherever an ASCII lowercase letter is followed
/// by an ASCII uppercase letter. Letter case is never changed here.
pub fn segment(input: &str) -> Segments<'_> {
    let mut segments = Segments {
        tokens: Vec::new(),
        leading_underscore: input.starts_with('_'),
        trailing_underscore: input.ends_with('_'),
    };

    for (index, run) in input.split('_').enumerate() {
        if run.is_empty() {
            continue;
        }

        // A digit run glued on by a leading underscore is still the first word.
        let after_separator = index > 0 && !segments.tokens.is_empty();
        let digit_led = run.as_bytes()[0].is_ascii_digit();

        let mut pieces = camel_pieces(run);
        if let Some(first) = pieces.first_mut() {
            if after_separator && digit_led {
                first.kind = TokenKind::Digit;
            }
        }
        segments.tokens.extend(pieces);
    }

    segments
}

fn camel_pieces(run: &str) -> Vec<Token<'_>> {
    let bytes = run.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;

    // ASCII letters are single bytes, so byte cuts always land on char boundaries.
    for i in 1..bytes.len() {
        if bytes[i - 1].is_ascii_lowercase() && bytes[i].is_ascii_uppercase() {
            pieces.push(Token::word(&run[start..i]));
            start = i;
        }
    }
    pieces.push(Token::word(&run[start..]));

    pieces
}
