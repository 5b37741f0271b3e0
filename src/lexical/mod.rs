//! Lexical processing of slash-separated paths.
//!
//! Pure string functions, nothing here touches the filesystem:
//! - [`clean`], [`join`]: normalization (duplicate slashes, `.` and `..`)
//! - [`split`], [`base`], [`dir`], [`ext`], [`is_abs`]: decomposition
//! - [`matches`]: shell glob matching (see [`glob`])

pub mod glob;

pub use glob::matches;

/// Return the shortest path equivalent to `path` by purely lexical processing.
///
/// Rules, applied until nothing changes:
/// 1. Replace multiple slashes with a single slash.
/// 2. Eliminate each `.` element.
/// 3. Eliminate each inner `..` element along with the non-`..` element before it.
/// 4. Eliminate `..` elements that begin a rooted path (`/..` becomes `/`).
///
/// The result ends in a slash only if it is the root `/`. An empty result
/// becomes `.`.
///
/// # Examples
/// ```
/// use slashpath::clean;
/// assert_eq!(clean("/a//./b/.."), "/a");
/// assert_eq!(clean("a/../.."), "..");
/// assert_eq!(clean(""), ".");
/// ```
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut kept: Vec<&str> = Vec::new();

    for element in path.split('/') {
        match element {
            "" | "." => {}
            ".." => match kept.last() {
                Some(&last) if last != ".." => {
                    kept.pop();
                }
                // `..` at the root stays at the root
                _ if rooted => {}
                _ => kept.push(".."),
            },
            name => kept.push(name),
        }
    }

    let body = kept.join("/");
    if rooted {
        format!("/{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}

/// Join path elements with separating slashes, skipping empty ones, then
/// [`clean`] the result. Joining nothing (or only empty elements) gives `""`.
///
/// # Examples
/// ```
/// use slashpath::join;
/// assert_eq!(join(["/a", "b", "cc"]), "/a/b/cc");
/// assert_eq!(join(["", "", ""]), "");
/// ```
pub fn join<I, S>(elems: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for elem in elems {
        let elem = elem.as_ref();
        if elem.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push('/');
        }
        joined.push_str(elem);
    }

    if joined.is_empty() {
        joined
    } else {
        clean(&joined)
    }
}

/// Split `path` immediately after the final slash into directory and file
/// name. Without a slash, the directory is empty. `dir + file == path`.
#[inline]
pub fn split(path: &str) -> (&str, &str) {
    path.rfind('/')
        .map_or(("", path), |i| path.split_at(i + 1))
}

/// Last element of `path`, after trailing slashes are removed.
///
/// An empty path gives `.`; a path made only of slashes gives `/`.
pub fn base(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    trimmed.rfind('/').map_or(trimmed, |i| &trimmed[i + 1..])
}

/// All but the last element of `path`, cleaned.
///
/// An empty path gives `.`. The result only ends in a slash for the root.
#[inline]
pub fn dir(path: &str) -> String {
    clean(split(path).0)
}

/// Extension of the final element of `path`, dot included, or `""`.
#[inline]
pub fn ext(path: &str) -> &str {
    crate::divide::split_ext(path).1
}

/// Whether the path is rooted.
#[inline]
pub fn is_abs(path: &str) -> bool {
    path.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        let cases = [
            ("", "."),
            (".", "."),
            ("/", "/"),
            ("///", "/"),
            ("/a/b/..", "/a"),
            ("/a//./b/..", "/a"),
            ("a/b/", "a/b"),
            ("a/./b", "a/b"),
            ("a/../..", ".."),
            ("../a/..", ".."),
            ("../../a", "../../a"),
            ("/../a", "/a"),
            ("/..", "/"),
            ("a/..", "."),
            ("abc/def/../../..", ".."),
        ];
        for (input, expected) in cases {
            assert_eq!(clean(input), expected, "clean({input:?})");
        }
    }

    #[test]
    fn test_clean_idempotent() {
        for input in ["", "/a/../b//c/", "../x/./y", "///", "a/b/../../.."] {
            let once = clean(input);
            assert_eq!(clean(&once), once);
        }
    }

    #[test]
    fn test_join() {
        assert_eq!(join(["/a", "b", "cc"]), "/a/b/cc");
        assert_eq!(join(["", "cc", "d", "", "/e/", "x.png"]), "cc/d/e/x.png");
        assert_eq!(join(["", "/cc", "d", "/e/", ""]), "/cc/d/e");
        assert_eq!(join(Vec::<String>::new()), "");
        assert_eq!(join(["", ""]), "");
        assert_eq!(join(["a", ".."]), ".");
    }

    #[test]
    fn test_split() {
        assert_eq!(split("/a/b/zz.png"), ("/a/b/", "zz.png"));
        assert_eq!(split("zz.png"), ("", "zz.png"));
        assert_eq!(split("/a/"), ("/a/", ""));
        assert_eq!(split(""), ("", ""));
    }

    #[test]
    fn test_base() {
        assert_eq!(base("/a/b/zz.png"), "zz.png");
        assert_eq!(base("/a/b/"), "b");
        assert_eq!(base("zz"), "zz");
        assert_eq!(base("///"), "/");
        assert_eq!(base(""), ".");
    }

    #[test]
    fn test_dir() {
        assert_eq!(dir("/a/b/zz.png"), "/a/b");
        assert_eq!(dir("/zz.png"), "/");
        assert_eq!(dir("zz.png"), ".");
        assert_eq!(dir(""), ".");
        assert_eq!(dir("a//b/"), "a/b");
    }

    #[test]
    fn test_ext_and_is_abs() {
        assert_eq!(ext("/a/b/zz.png"), ".png");
        assert_eq!(ext("/a.b/zz"), "");
        assert!(is_abs("/a/b/zz.png"));
        assert!(!is_abs("a/b/zz.png"));
        assert!(!is_abs(""));
    }
}
