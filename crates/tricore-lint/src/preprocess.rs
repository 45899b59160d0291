//! Comment stripping and whitespace normalization.
//!
//! The scanner expects at most one space at the start of a line and one
//! space between the mnemonic and its operands, with no whitespace after a
//! label colon or inside the operand list. Line feeds are always preserved,
//! including those inside block comments, so diagnostics keep the line
//! numbers of the original text.

use std::iter::Peekable;
use std::str::Chars;

/// Whitespace collapsing state for the current line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spacing {
    /// Nothing emitted on this line yet.
    LineStart,
    /// Leading space emitted, or a label colon just closed the first word.
    Separated,
    /// Inside the first word of a statement.
    FirstWord,
    /// Past the mnemonic separator; further whitespace is dropped.
    Operands,
}

impl Spacing {
    const fn keeps_space(self) -> bool {
        matches!(self, Self::LineStart | Self::FirstWord)
    }

    const fn after_space(self) -> Self {
        match self {
            Self::LineStart => Self::Separated,
            _ => Self::Operands,
        }
    }

    const fn after_char(self) -> Self {
        match self {
            Self::LineStart | Self::Separated => Self::FirstWord,
            other => other,
        }
    }
}

/// Normalizes raw assembly source for the document scanner.
///
/// - `#` and `//` comments are removed up to the line feed.
/// - `/* ... */` comments are removed; their line feeds are kept.
/// - Quoted strings are copied verbatim.
/// - `\r\n` becomes `\n`; a lone `\r` is kept.
/// - Whitespace runs collapse to one space at the start of a line and after
///   the first word, and vanish elsewhere.
#[must_use]
pub fn preprocess(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut spacing = Spacing::LineStart;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' => {
                while chars.next_if(|next| matches!(next, ' ' | '\t')).is_some() {}
                if spacing.keeps_space() {
                    out.push(' ');
                    spacing = spacing.after_space();
                }
            }
            '"' | '\'' => copy_quoted(c, &mut chars, &mut out),
            '#' => skip_line(&mut chars),
            '/' => match chars.peek() {
                Some('/') => skip_line(&mut chars),
                Some('*') => {
                    chars.next();
                    if skip_block_comment(&mut chars, &mut out) {
                        spacing = Spacing::LineStart;
                    }
                }
                _ => out.push('/'),
            },
            '\r' => {
                if chars.next_if_eq(&'\n').is_some() {
                    out.push('\n');
                    spacing = Spacing::LineStart;
                } else {
                    out.push('\r');
                }
            }
            '\n' => {
                out.push('\n');
                spacing = Spacing::LineStart;
            }
            ':' if spacing == Spacing::FirstWord => {
                out.push(':');
                spacing = Spacing::Separated;
            }
            other => {
                out.push(other);
                spacing = spacing.after_char();
            }
        }
    }

    out
}

fn copy_quoted(quote: char, chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    out.push(quote);
    let mut previous = quote;
    for c in chars.by_ref() {
        out.push(c);
        if c == quote && previous != '\\' {
            return;
        }
        previous = c;
    }
}

fn skip_line(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| *c != '\n').is_some() {}
}

/// Skips past `*/`, re-emitting line feeds. Returns true if any were seen.
fn skip_block_comment(chars: &mut Peekable<Chars<'_>>, out: &mut String) -> bool {
    let mut saw_line_feed = false;
    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                out.push('\n');
                saw_line_feed = true;
            }
            '*' if chars.next_if_eq(&'/').is_some() => break,
            _ => {}
        }
    }
    saw_line_feed
}
