//! Path value type for slash-separated paths.
//!
//! A [`Path`] is just a string with specialised methods. It is never cleaned
//! on construction; only the composing operations (`of`, `prepend`,
//! `append`) and `clean` itself normalize.
//!
//! - [`Elem`]: mixed-type elements for [`Path::of_any`]
//! - [`Value`]: untyped storage shape for [`Path::scan`] / [`Path::value`]

mod elem;
mod value;

pub use elem::Elem;
pub use value::Value;

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{divide, error::Result, lexical};

/// Slash-separated path (immutable, cheap to clone)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Arc<str>);

impl Path {
    /// Wrap a string verbatim.
    pub fn new(path: &str) -> Self {
        Self(Arc::from(path))
    }

    /// Join any number of elements into a path, adding separating slashes as
    /// necessary. The result is cleaned; empty elements are ignored.
    ///
    /// If the first non-empty element has a leading slash, so does the path.
    /// It never has a trailing slash, except for the root.
    pub fn of<I, S>(elems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from(lexical::join(elems))
    }

    /// Like [`Path::of`], with elements that may be text, paths or any other
    /// displayable value. See also the [`path_of!`](crate::path_of) macro.
    pub fn of_any<I>(elems: I) -> Self
    where
        I: IntoIterator<Item = Elem>,
    {
        Self::of(elems)
    }

    /// Join elements onto the front of the path. The result is cleaned.
    pub fn prepend<I, S>(&self, elems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = lexical::join(elems);
        if !self.0.starts_with('/') {
            joined.push('/');
        }
        joined.push_str(&self.0);
        Self::from(lexical::clean(&joined))
    }

    /// Join elements onto the end of the path. The result is cleaned.
    pub fn append<I, S>(&self, elems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = self.0.to_string();
        if !joined.ends_with('/') {
            joined.push('/');
        }
        joined.push_str(&lexical::join(elems));
        Self::from(lexical::clean(&joined))
    }

    /// Shortest lexically equivalent path (see [`lexical::clean`]).
    pub fn clean(&self) -> Self {
        Self::from(lexical::clean(&self.0))
    }

    /// Split immediately after the final slash into directory and file name.
    pub fn split(&self) -> (Self, String) {
        let (dir, file) = lexical::split(&self.0);
        (Self::new(dir), file.to_string())
    }

    /// Split the file name from its extension; the dot stays with the extension.
    pub fn split_ext(&self) -> (Self, String) {
        let (stem, ext) = divide::split_ext(&self.0);
        (Self::new(stem), ext.to_string())
    }

    /// Extension of the final element, dot included.
    pub fn ext(&self) -> String {
        lexical::ext(&self.0).to_string()
    }

    /// Extension of the final element, without the dot.
    pub fn ext_only(&self) -> String {
        let ext = lexical::ext(&self.0);
        ext.strip_prefix('.').unwrap_or(ext).to_string()
    }

    /// Last element of the path.
    pub fn base(&self) -> String {
        lexical::base(&self.0).to_string()
    }

    /// All but the last element of the path, cleaned.
    pub fn dir(&self) -> Self {
        Self::from(lexical::dir(&self.0))
    }

    #[inline]
    pub fn is_abs(&self) -> bool {
        lexical::is_abs(&self.0)
    }

    /// Exact textual prefix check, no normalization.
    #[inline]
    pub fn has_prefix(&self, other: &Path) -> bool {
        self.0.starts_with(other.as_str())
    }

    /// Exact textual suffix check, no normalization.
    #[inline]
    pub fn has_suffix(&self, other: &Path) -> bool {
        self.0.ends_with(other.as_str())
    }

    /// Whether the path matches a shell glob pattern.
    pub fn matches(&self, pattern: &str) -> Result<bool> {
        lexical::matches(pattern, &self.0)
    }

    /// Divide at the nth slash, not counting a leading slash.
    ///
    /// `head + tail` always reproduces the path.
    pub fn divide(&self, nth: usize) -> (Self, Self) {
        let (head, tail) = divide::divide(&self.0, nth);
        (Self::new(head), Self::new(tail))
    }

    /// Head part of [`Path::divide`].
    pub fn take(&self, wanted: usize) -> Self {
        Self::new(divide::take(&self.0, wanted))
    }

    /// Tail part of [`Path::divide`].
    pub fn drop(&self, unwanted: usize) -> Self {
        Self::new(divide::drop(&self.0, unwanted))
    }

    /// First segment (without any leading `/`) and the rest.
    ///
    /// Iterating with `next` ends when the remainder [`is_empty`](Path::is_empty).
    pub fn next(&self) -> (String, Self) {
        let (head, tail) = divide::divide(&self.0, 1);
        let name = head.strip_prefix('/').unwrap_or(head);
        (name.to_string(), Self::new(tail))
    }

    /// Iterator over the segment names produced by repeated [`Path::next`].
    pub fn walk(&self) -> Walk {
        Walk {
            rest: self.clone(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parts between slashes, with one leading and one trailing slash removed
    /// first. Both `/` and the empty path give an empty list.
    pub fn segments(&self) -> Vec<String> {
        if self.0.is_empty() || self.0.as_ref() == "/" {
            return Vec::new();
        }
        let trimmed = self.0.strip_prefix('/').unwrap_or(&self.0);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        trimmed.split('/').map(str::to_string).collect()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Segment iterator returned by [`Path::walk`].
#[derive(Debug, Clone)]
pub struct Walk {
    rest: Path,
}

impl Iterator for Walk {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.rest.is_empty() {
            return None;
        }
        let (name, rest) = self.rest.next();
        self.rest = rest;
        Some(name)
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new("")
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Path {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from)
    }
}
