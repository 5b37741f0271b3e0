//! Segment division and extension splitting on raw path strings.
//!
//! Pure functions, no allocation: every result borrows from the input.
//!
//! - [`divide`]: split at the nth slash boundary (`take`/`drop` keep one half)
//! - [`split_ext`]: split the final element's extension off

/// Divide a path at the nth slash, not counting a leading slash if there is one.
///
/// The resulting pair `(head, tail)` always satisfies `head + tail == path`.
/// Asking for more divisions than the path has slash boundaries yields
/// `(path, "")`; `nth == 0` yields `("", path)`.
///
/// # Examples
/// ```
/// use slashpath::divide;
/// assert_eq!(divide("a/b/c/x.png", 2), ("a/b", "/c/x.png"));
/// assert_eq!(divide("/a/b/c/", 3), ("/a/b/c", "/"));
/// assert_eq!(divide("a/b/c", 10), ("a/b/c", ""));
/// ```
pub fn divide(path: &str, nth: usize) -> (&str, &str) {
    if path.is_empty() {
        return ("", "");
    }
    if nth == 0 {
        return ("", path);
    }

    let mut pivot = usize::from(path.starts_with('/'));
    for _ in 0..nth {
        match path[pivot..].find('/') {
            // An empty segment ends the division just like a missing slash
            Some(offset) if offset > 0 => pivot += offset + 1,
            _ => return (path, ""),
        }
    }

    path.split_at(pivot - 1)
}

/// Head part of [`divide`].
#[inline]
pub fn take(path: &str, wanted: usize) -> &str {
    divide(path, wanted).0
}

/// Tail part of [`divide`].
#[inline]
pub fn drop(path: &str, unwanted: usize) -> &str {
    divide(path, unwanted).1
}

/// Split the file name from its extension.
///
/// The extension is the suffix beginning at the final dot in the final
/// slash-separated element of `path`, dot included. It is empty if there
/// is no dot. Everything before the dot is the first result.
///
/// # Examples
/// ```
/// use slashpath::split_ext;
/// assert_eq!(split_ext("/a/b/zz.png"), ("/a/b/zz", ".png"));
/// assert_eq!(split_ext("/a.d/zz"), ("/a.d/zz", ""));
/// ```
pub fn split_ext(path: &str) -> (&str, &str) {
    match path.rfind(['/', '.']) {
        Some(i) if path.as_bytes()[i] == b'.' => path.split_at(i),
        _ => (path, ""),
    }
}
