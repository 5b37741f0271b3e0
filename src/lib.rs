//! Slashpath - manipulation of slash-separated paths.
//!
//! Paths here are plain strings as found in URLs and virtual filesystems;
//! nothing in this crate touches a real filesystem, decodes URL escapes or
//! understands backslashes.
//!
//! - [`divide`], [`take`], [`drop`]: split a path at its nth slash boundary
//! - [`split_ext`]: split the extension off the final element
//! - [`lexical`]: `clean`, `join`, `split`, `base`, `dir`, `ext`, `is_abs`, glob `matches`
//! - [`Path`]: string newtype exposing all of the above as methods, plus
//!   composition (`of`, `prepend`, `append`) and iteration (`next`, `walk`,
//!   `segments`)
//!
//! # Example
//!
//! ```
//! use slashpath::Path;
//!
//! let path = Path::new("/a/b").append(["cc", "d", "xx.png"]);
//! assert_eq!(path, "/a/b/cc/d/xx.png");
//! assert_eq!(path.take(2), "/a/b");
//! assert_eq!(path.ext_only(), "png");
//! assert_eq!(path.segments(), ["a", "b", "cc", "d", "xx.png"]);
//! ```

mod divide;
mod error;
pub mod lexical;
pub mod logger;
mod path;

pub use divide::{divide, drop, split_ext, take};
pub use error::{Error, Result};
pub use lexical::{base, clean, dir, ext, is_abs, join, matches, split};
pub use path::{Elem, Path, Value, Walk};
