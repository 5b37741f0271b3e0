//! Heterogeneous path elements for [`Path::of_any`].

use std::fmt::Display;

use super::Path;

/// One element of a mixed-type path construction.
///
/// Each variant renders to text before joining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Elem {
    Text(String),
    Path(Path),
    /// Display rendering of any other value
    Other(String),
}

impl Elem {
    /// Wrap any displayable value.
    pub fn display(value: &impl Display) -> Self {
        Self::Other(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Other(s) => s,
            Self::Path(p) => p.as_str(),
        }
    }
}

impl AsRef<str> for Elem {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Elem {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Elem {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Elem {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<Path> for Elem {
    fn from(p: Path) -> Self {
        Self::Path(p)
    }
}

impl From<&Path> for Elem {
    fn from(p: &Path) -> Self {
        Self::Path(p.clone())
    }
}

macro_rules! elem_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Elem {
                fn from(v: $ty) -> Self {
                    Self::Other(v.to_string())
                }
            }
        )*
    };
}

elem_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// Build a [`Path`] from mixed-type elements.
///
/// Each argument is converted with `Elem::from`, then passed to
/// [`Path::of_any`].
///
/// # Examples
/// ```
/// use slashpath::{Path, path_of};
/// let p = path_of!("", "cc", "d", 1, Path::new("/e/f"), "x.png");
/// assert_eq!(p, Path::new("cc/d/1/e/f/x.png"));
/// ```
#[macro_export]
macro_rules! path_of {
    ($($elem:expr),* $(,)?) => {
        $crate::Path::of_any([$($crate::Elem::from($elem)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elem_rendering() {
        assert_eq!(Elem::from("cc").as_str(), "cc");
        assert_eq!(Elem::from(1).as_str(), "1");
        assert_eq!(Elem::from(2.5).as_str(), "2.5");
        assert_eq!(Elem::from(true).as_str(), "true");
        assert_eq!(Elem::from(Path::new("/e/f")).as_str(), "/e/f");
        assert_eq!(Elem::display(&'x').as_str(), "x");
    }

    #[test]
    fn test_path_of_macro() {
        let p = crate::path_of!("", "cc", "d", "", 1, Path::new("/e/f"), "x.png");
        assert_eq!(p, Path::new("cc/d/1/e/f/x.png"));
    }

    #[test]
    fn test_path_of_macro_empty() {
        assert_eq!(crate::path_of!(), Path::new(""));
    }
}
