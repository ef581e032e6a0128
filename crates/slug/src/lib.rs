//! Transliterating slug generation.
//!
//! Converts arbitrary text into a slug: a normalized, ASCII-safe,
//! separator-joined token suitable for URLs, filenames, or identifiers.
//!
//! - **Transliteration**: accented Latin, Greek, Cyrillic, Arabic,
//!   Vietnamese and other scripts, currency signs, and pictographic symbols
//!   are replaced with ASCII approximations from static tables
//! - **Multi-character idioms**: short sequences like `w/`, `<3`, `&&`, and
//!   `||` are replaced as a unit before single characters are considered
//! - **Filtering**: characters outside the mode's allowed set are dropped
//! - **Collapsing**: whitespace and hyphen runs become a single separator
//! - **Fallback**: input with no ASCII rendering at all is slugified via its
//!   base64 encoding instead of producing an empty string
//!
//! # Example
//!
//! ```
//! use slug::{Mode, Options, slug, slug_with};
//!
//! assert_eq!(slug("Hello, Wörld!"), "hello-world");
//! assert_eq!(slug_with("foo bar baz", "_"), "foo_bar_baz");
//! assert_eq!(
//!     slug_with("Hello World.", Options::from(Mode::Rfc3986)),
//!     "hello-world.",
//! );
//! ```
//!
//! The free functions use a shared read-only context with the built-in
//! tables. To add custom character mappings, own a [`Slugifier`]:
//!
//! ```
//! use slug::{Options, Slugifier};
//!
//! let mut slugifier = Slugifier::new();
//! slugifier.extend([('♫', "music")]);
//! assert_eq!(slugifier.slug("cool ♫", &Options::new()), "cool-music");
//! ```

#![warn(missing_docs)]

mod charmap;
mod error;
mod mode;
mod options;
mod slugify;
pub mod tables;

use std::sync::LazyLock;

pub use charmap::{CharMap, MultiCharMap, default_charmap, default_multicharmap};
pub use error::SlugError;
pub use mode::Mode;
pub use options::{Options, Remove, Resolved};
pub use slugify::Slugifier;

/// Shared context backing the free functions. Built-in tables only.
static DEFAULT: LazyLock<Slugifier> = LazyLock::new(Slugifier::new);

/// Slugifies `input` with the default options (pretty mode).
pub fn slug(input: &str) -> String {
    DEFAULT.slug(input, &Options::new())
}

/// Slugifies `input` with the given options.
///
/// Accepts anything convertible into [`Options`]: a full options value, a
/// [`Mode`], or a bare separator string.
pub fn slug_with(input: &str, options: impl Into<Options>) -> String {
    DEFAULT.slug(input, &options.into())
}
