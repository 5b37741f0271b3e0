//! Shell-style glob matching of slash-separated names.
//!
//! Pattern syntax:
//!
//! ```text
//! pattern:
//!     { term }
//! term:
//!     '*'         matches any sequence of non-/ characters
//!     '?'         matches any single non-/ character
//!     '[' [ '^' ] { character-range } ']'
//!                 character class (must be non-empty)
//!     c           matches character c (c != '*', '?', '\\', '[')
//!     '\\' c      matches character c
//!
//! character-range:
//!     c           matches character c (c != '\\', '-', ']')
//!     '\\' c      matches character c
//!     lo '-' hi   matches character c for lo <= c <= hi
//! ```
//!
//! The pattern must match all of the name, not just a substring. The whole
//! pattern is parsed before matching, so a malformed pattern is reported even
//! when the name would not have matched anyway.

use crate::error::{Error, Result};

/// Report whether `name` matches the shell pattern `pattern`.
///
/// # Errors
/// [`Error::BadPattern`] when the pattern is malformed.
///
/// # Examples
/// ```
/// use slashpath::matches;
/// assert_eq!(matches("/a/b/*.png", "/a/b/zz.png"), Ok(true));
/// assert_eq!(matches("/a/*.png", "/a/b/zz.png"), Ok(false));
/// assert!(matches("[", "x").is_err());
/// ```
pub fn matches(pattern: &str, name: &str) -> Result<bool> {
    let tokens = parse(pattern)
        .inspect_err(|_| crate::debug!("glob"; "malformed pattern `{}`", pattern))?;
    let name: Vec<char> = name.chars().collect();
    Ok(match_tokens(&tokens, &name))
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Literal(char),
    /// `?`
    AnyChar,
    /// `*`, consecutive stars collapsed
    AnyRun,
    Class { negated: bool, ranges: Vec<(char, char)> },
}

impl Token {
    /// Whether this single-character token accepts `c`.
    fn accepts(&self, c: char) -> bool {
        match self {
            Self::Literal(lit) => *lit == c,
            Self::AnyChar => c != '/',
            Self::AnyRun => false,
            Self::Class { negated, ranges } => {
                let hit = ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
                hit != *negated
            }
        }
    }
}

fn parse(pattern: &str) -> Result<Vec<Token>> {
    let bad = || Error::BadPattern(pattern.to_string());
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        let token = match c {
            '*' => {
                if tokens.last() == Some(&Token::AnyRun) {
                    continue;
                }
                Token::AnyRun
            }
            '?' => Token::AnyChar,
            '\\' => Token::Literal(chars.next().ok_or_else(bad)?),
            '[' => {
                let negated = chars.next_if_eq(&'^').is_some();
                let mut ranges = Vec::new();
                loop {
                    if !ranges.is_empty() && chars.next_if_eq(&']').is_some() {
                        break;
                    }
                    let lo = class_char(&mut chars).ok_or_else(bad)?;
                    let hi = if chars.next_if_eq(&'-').is_some() {
                        class_char(&mut chars).ok_or_else(bad)?
                    } else {
                        lo
                    };
                    ranges.push((lo, hi));
                }
                Token::Class { negated, ranges }
            }
            lit => Token::Literal(lit),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// One (possibly escaped) character inside a class. `None` when the class
/// ends early or an unescaped `-` or `]` appears where a character belongs.
fn class_char(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<char> {
    match chars.next()? {
        '-' | ']' => None,
        '\\' => chars.next(),
        c => Some(c),
    }
}

/// Backtracking match; only the most recent `*` is ever extended, and a
/// `*` never extends over a slash.
fn match_tokens(tokens: &[Token], name: &[char]) -> bool {
    let (mut t, mut n) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    loop {
        match tokens.get(t) {
            Some(Token::AnyRun) => {
                star = Some((t + 1, n));
                t += 1;
                continue;
            }
            Some(token) if n < name.len() && token.accepts(name[n]) => {
                t += 1;
                n += 1;
                continue;
            }
            None if n == name.len() => return true,
            _ => {}
        }

        match star {
            Some((resume, from)) if from < name.len() && name[from] != '/' => {
                star = Some((resume, from + 1));
                t = resume;
                n = from + 1;
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let cases = [
            ("abc", "abc", true),
            ("*", "abc", true),
            ("*c", "abc", true),
            ("a*", "a", true),
            ("a*", "abc", true),
            ("a*", "ab/c", false),
            ("a*/b", "abc/b", true),
            ("a*/b", "a/c/b", false),
            ("a*b*c*d*e*/f", "axbxcxdxe/f", true),
            ("a*b*c*d*e*/f", "axbxcxdxexxx/f", true),
            ("a*b*c*d*e*/f", "axbxcxdxe/xxx/f", false),
            ("a*b*c*d*e*/f", "axbxcxdxexxx/fff", false),
            ("a*b?c*x", "abxbbxdbxebxczzx", true),
            ("a*b?c*x", "abxbbxdbxebxczzy", false),
            ("ab[c]", "abc", true),
            ("ab[b-d]", "abc", true),
            ("ab[e-g]", "abc", false),
            ("ab[^c]", "abc", false),
            ("ab[^b-d]", "abc", false),
            ("ab[^e-g]", "abc", true),
            ("a\\*b", "a*b", true),
            ("a\\*b", "ab", false),
            ("a?b", "a☺b", true),
            ("a[^a]b", "a☺b", true),
            ("a???b", "a☺b", false),
            ("[a-ζ]*", "α", true),
            ("*[a-ζ]", "A", false),
            ("a?b", "a/b", false),
            ("a*b", "a/b", false),
            ("[\\]a]", "]", true),
            ("[\\-]", "-", true),
            ("[x\\-]", "x", true),
            ("[x\\-]", "-", true),
            ("[x\\-]", "z", false),
            ("[\\-x]", "x", true),
            ("*x", "xxx", true),
            ("/a/b/*.png", "/a/b/zz.png", true),
        ];
        for (pattern, name, expected) in cases {
            assert_eq!(
                matches(pattern, name),
                Ok(expected),
                "matches({pattern:?}, {name:?})"
            );
        }
    }

    #[test]
    fn test_bad_patterns() {
        let cases = [
            ("[", "a"),
            ("[^", "a"),
            ("[^bc", "a"),
            ("a[", "a"),
            ("a[", "ab"),
            ("[]a]", "]"),
            ("[-]", "-"),
            ("[x-]", "x"),
            ("[-x]", "x"),
            ("\\", "a"),
            ("[a-b-c]", "a"),
            ("*x\\", "xxx"),
        ];
        for (pattern, name) in cases {
            assert_eq!(
                matches(pattern, name),
                Err(Error::BadPattern(pattern.to_string())),
                "matches({pattern:?}, {name:?})"
            );
        }
    }

    #[test]
    fn test_collapses_stars() {
        let tokens = parse("a**b").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Literal('a'), Token::AnyRun, Token::Literal('b')]
        );
    }
}
