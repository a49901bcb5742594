//! Compiles route patterns into typed segments.
//!
//! ```text
//!  Syntax            Segment
//!  /users            static text
//!  :name             named parameter, matches up to the next '/'
//!  *name             wildcard, matches greedily, '/' included
//!  (:name)           bracketed parameter, may be followed by more text
//!  (:name[0-9]+)     parameter constrained by an inline regex
//!  (*name)           bracketed wildcard
//! ```
use crate::error::InsertError;

use regex::Regex;
use std::fmt;

// Bytes that start the inline-regex part of a bracketed parameter.
const REGEX_SPECIAL: &[u8] = b".\\+*?|[](){}^$";

/// One lexical chunk of a route pattern.
#[derive(Clone, Debug)]
pub enum Segment {
    /// Literal text.
    Static(String),
    /// A parameter bound up to the next `/` or the following literal.
    Named(String),
    /// A parameter bound greedily, anchored to the following literal.
    Wildcard(String),
    /// A named parameter whose value must satisfy `regex`.
    Regex {
        /// Parameter name.
        name: String,
        /// The expression as written in the pattern.
        source: String,
        /// `source` compiled as `^(source)$`.
        regex: Regex,
    },
}

impl Segment {
    /// Returns `true` for literal text.
    pub fn is_static(&self) -> bool {
        matches!(self, Segment::Static(_))
    }

    /// Returns the parameter name of a capture segment.
    pub fn name(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Named(name) | Segment::Wildcard(name) | Segment::Regex { name, .. } => {
                Some(name)
            }
        }
    }

    // Static text that would be read as part of a preceding capture's name.
    pub(crate) fn extends_name(&self) -> bool {
        match self {
            Segment::Static(text) => matches!(text.as_bytes().first(), Some(&c) if is_name_byte(c)),
            _ => false,
        }
    }

    /// Renders the segment as pattern text in front of `next`.
    ///
    /// Unlike [`Display`](fmt::Display), captures are bracketed when `next`
    /// would otherwise read as part of their name.
    ///
    /// ```
    /// use routetrie::pattern::Segment;
    ///
    /// let name = Segment::Named("name".into());
    /// assert_eq!(name.render(Some(&Segment::Static("ssss".into()))), "(:name)");
    /// assert_eq!(name.render(Some(&Segment::Static("/".into()))), ":name");
    /// ```
    pub fn render(&self, next: Option<&Segment>) -> String {
        let bracket = matches!(next, Some(next) if next.extends_name());

        match self {
            Segment::Named(name) if bracket => format!("(:{})", name),
            Segment::Wildcard(name) if bracket => format!("(*{})", name),
            _ => self.to_string(),
        }
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Segment::Static(a), Segment::Static(b))
            | (Segment::Named(a), Segment::Named(b))
            | (Segment::Wildcard(a), Segment::Wildcard(b)) => a == b,
            (
                Segment::Regex {
                    name: a, source: x, ..
                },
                Segment::Regex {
                    name: b, source: y, ..
                },
            ) => a == b && x == y,
            _ => false,
        }
    }
}

impl Eq for Segment {}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Static(text) => f.write_str(text),
            Segment::Named(name) => write!(f, ":{}", name),
            Segment::Wildcard(name) => write!(f, "*{}", name),
            Segment::Regex { name, source, .. } => write!(f, "(:{}{})", name, source),
        }
    }
}

/// Parses a route pattern into an ordered list of segments covering the
/// whole string.
///
/// Static text is split before every `/`, so `/static/css` yields the two
/// segments `/static` and `/css`.
///
/// ```
/// use routetrie::pattern::{parse, Segment};
///
/// let segments = parse("/users/:id").unwrap();
/// assert_eq!(
///     segments,
///     [
///         Segment::Static("/users".into()),
///         Segment::Static("/".into()),
///         Segment::Named("id".into()),
///     ]
/// );
/// ```
pub fn parse(pattern: &str) -> Result<Vec<Segment>, InsertError> {
    let bytes = pattern.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' => {
                if i > start {
                    push_static(&mut segments, &pattern[start..i]);
                    start = i;
                }
                i += 1;
            }
            b'(' if matches!(bytes.get(i + 1).copied(), Some(b':' | b'*')) => {
                push_static(&mut segments, &pattern[start..i]);

                let close =
                    closing_bracket(bytes, i).ok_or(InsertError::UnclosedBracket { position: i })?;
                segments.push(capture(&pattern[i + 1..close], true)?);

                i = close + 1;
                start = i;
            }
            b':' | b'*' => {
                push_static(&mut segments, &pattern[start..i]);

                let len = bytes[i + 1..]
                    .iter()
                    .take_while(|&&c| is_name_byte(c))
                    .count();
                segments.push(capture(&pattern[i..i + 1 + len], false)?);

                i += 1 + len;
                start = i;
            }
            _ => i += 1,
        }
    }

    push_static(&mut segments, &pattern[start..]);
    Ok(segments)
}

/// Writes segments back out as a pattern that parses to the same segments.
pub fn render(segments: &[Segment]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| segment.render(segments.get(i + 1)))
        .collect()
}

/// Rejects two captures that follow each other directly; the matcher needs
/// literal text after every capture to know where it ends.
pub fn validate(segments: &[Segment]) -> Result<(), InsertError> {
    for (i, pair) in segments.windows(2).enumerate() {
        if !pair[0].is_static() && !pair[1].is_static() {
            return Err(InsertError::AdjacentParams {
                first: pair[0].render(Some(&pair[1])),
                second: pair[1].render(segments.get(i + 2)),
            });
        }
    }

    Ok(())
}

fn push_static(segments: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        segments.push(Segment::Static(text.to_owned()));
    }
}

// Index of the `)` closing the bracket opened at `open`. Parentheses inside an
// inline regex nest, and a backslash escapes the following byte.
fn closing_bracket(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0;
    let mut i = open;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

// Builds a capture from its body, sigil included: `:name`, `:name[0-9]+` or `*name`.
fn capture(body: &str, bracketed: bool) -> Result<Segment, InsertError> {
    let (sigil, rest) = body.split_at(1);

    if sigil == "*" {
        check_name(rest)?;
        return Ok(Segment::Wildcard(rest.to_owned()));
    }

    let split = if bracketed {
        rest.bytes()
            .position(|c| REGEX_SPECIAL.contains(&c))
            .unwrap_or(rest.len())
    } else {
        rest.len()
    };
    let (name, source) = rest.split_at(split);
    check_name(name)?;

    if source.is_empty() {
        return Ok(Segment::Named(name.to_owned()));
    }

    let regex = Regex::new(&format!("^({})$", source)).map_err(|err| InsertError::InvalidRegex {
        name: name.to_owned(),
        message: err.to_string(),
    })?;

    Ok(Segment::Regex {
        name: name.to_owned(),
        source: source.to_owned(),
        regex,
    })
}

fn check_name(name: &str) -> Result<(), InsertError> {
    if name.is_empty() {
        return Err(InsertError::UnnamedParam);
    }

    if !name.bytes().all(is_name_byte) {
        return Err(InsertError::InvalidParamName {
            name: name.to_owned(),
        });
    }

    Ok(())
}

fn is_name_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}
