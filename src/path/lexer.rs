use std::fmt;

/// Byte range of a token in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

/// Path-data command family, independent of absolute/relative addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `M` / `m`
    Move,
    /// `L` / `l`
    Line,
    /// `H` / `h`
    Horizontal,
    /// `V` / `v`
    Vertical,
    /// `C` / `c`
    Cubic,
    /// `S` / `s`
    SmoothCubic,
    /// `Q` / `q`
    Quad,
    /// `T` / `t`
    SmoothQuad,
    /// `A` / `a`
    Arc,
    /// `Z` / `z`
    Close,
}

impl CommandKind {
    /// Number of numeric arguments in one coordinate group.
    pub fn param_count(self) -> usize {
        match self {
            Self::Move | Self::Line | Self::SmoothQuad => 2,
            Self::Horizontal | Self::Vertical => 1,
            Self::Cubic => 6,
            Self::SmoothCubic | Self::Quad => 4,
            Self::Arc => 7,
            Self::Close => 0,
        }
    }
}

/// A recognized command letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command {
    /// Command family.
    pub kind: CommandKind,
    /// Lowercase letters address coordinates relative to the pen.
    pub relative: bool,
}

impl Command {
    /// Map an ASCII letter onto a command; `None` for letters outside the path grammar.
    pub fn from_letter(c: u8) -> Option<Self> {
        let kind = match c.to_ascii_uppercase() {
            b'M' => CommandKind::Move,
            b'L' => CommandKind::Line,
            b'H' => CommandKind::Horizontal,
            b'V' => CommandKind::Vertical,
            b'C' => CommandKind::Cubic,
            b'S' => CommandKind::SmoothCubic,
            b'Q' => CommandKind::Quad,
            b'T' => CommandKind::SmoothQuad,
            b'A' => CommandKind::Arc,
            b'Z' => CommandKind::Close,
            _ => return None,
        };
        Some(Self {
            kind,
            relative: c.is_ascii_lowercase(),
        })
    }
}

/// Token payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// One of the path commands.
    Command(Command),
    /// An ASCII letter that is not a path command. Kept so output text stays faithful.
    Letter(u8),
    /// A numeric literal.
    Number(f64),
}

/// A scanned token with its original text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// Classified payload.
    pub kind: TokenKind,
    /// Exact source text, reused verbatim on re-serialization.
    pub text: &'a str,
    /// Location in the input.
    pub span: Span,
}

/// Lexical outcome that stops decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Nothing in the input looked like a command or a number.
    Empty,
    /// A numeric literal was scanned but could not be converted.
    Malformed {
        /// Byte offset of the literal.
        offset: usize,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path data contains no tokens"),
            Self::Malformed { offset } => write!(f, "malformed number at byte {offset}"),
        }
    }
}

impl std::error::Error for PathError {}

/// Scan path data into letters and numbers.
///
/// Anything that is neither an ASCII letter nor the start of a number (whitespace, commas,
/// stray punctuation) acts as a separator and is skipped.
pub fn lex(input: &str) -> Result<Vec<Token<'_>>, PathError> {
    let bytes = input.as_bytes();
    let mut out = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i];
        let start = i;

        if c.is_ascii_alphabetic() {
            i += 1;
            let kind = match Command::from_letter(c) {
                Some(cmd) => TokenKind::Command(cmd),
                None => TokenKind::Letter(c),
            };
            out.push(Token {
                kind,
                text: &input[start..i],
                span: Span { start, end: i },
            });
            continue;
        }

        if let Some(end) = scan_number(bytes, start) {
            let text = &input[start..end];
            let v: f64 = text
                .parse()
                .map_err(|_| PathError::Malformed { offset: start })?;
            out.push(Token {
                kind: TokenKind::Number(v),
                text,
                span: Span { start, end },
            });
            i = end;
            continue;
        }

        i += 1;
    }

    if out.is_empty() {
        return Err(PathError::Empty);
    }
    Ok(out)
}

// Number: [+-]? ( [0-9]* '.' [0-9]+ | [0-9]+ ) ( [eE] [+-]? [0-9]+ )?
// The exponent is only taken when digits follow it; otherwise the `e` lexes as a letter.
fn scan_number(bytes: &[u8], start: usize) -> Option<usize> {
    let digit_at = |j: usize| bytes.get(j).is_some_and(u8::is_ascii_digit);
    let skip_digits = |mut j: usize| {
        while digit_at(j) {
            j += 1;
        }
        j
    };

    let mut i = start;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_end = skip_digits(i);
    if bytes.get(int_end) == Some(&b'.') && digit_at(int_end + 1) {
        i = skip_digits(int_end + 1);
    } else if int_end > i {
        i = int_end;
    } else {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if digit_at(j) {
            i = skip_digits(j);
        }
    }

    Some(i)
}

#[cfg(test)]
#[path = "../../tests/unit/path/lexer.rs"]
mod tests;
