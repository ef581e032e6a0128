//! Mode presets controlling separator, removal, and case behavior.

use std::fmt;
use std::str::FromStr;

use crate::error::SlugError;

/// A named preset bundle of slug-generation options.
///
/// Each mode fixes the default separator, the allowed character set, the
/// default removal set, and whether output is lowercased. Individual options
/// can still be overridden per call via [`crate::Options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Aggressive cleanup: only ASCII letters, digits, and separators
    /// survive, and literal periods are stripped.
    #[default]
    Pretty,
    /// Preserves the RFC 3986 unreserved characters `.`, `_`, and `~` so the
    /// slug remains a valid URI path segment without percent-encoding.
    Rfc3986,
}

impl Mode {
    /// Returns the canonical name of this mode, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Rfc3986 => "rfc3986",
        }
    }

    /// Default separator placed between words.
    pub fn default_replacement(self) -> &'static str {
        "-"
    }

    /// Whether this mode lowercases output by default.
    pub fn default_lower(self) -> bool {
        true
    }

    /// Characters this mode strips after the allowed-set filter, if any.
    pub fn default_remove(self) -> Option<&'static [char]> {
        match self {
            Self::Pretty => Some(&['.']),
            Self::Rfc3986 => None,
        }
    }

    /// Whether `c` survives the allowed-character filter in this mode.
    ///
    /// Whitespace always survives here; it is collapsed into the separator
    /// at the end of the pipeline.
    pub fn allows(self, c: char) -> bool {
        match self {
            Self::Pretty => c.is_ascii_alphanumeric() || c.is_whitespace(),
            Self::Rfc3986 => {
                c.is_ascii_alphanumeric()
                    || c == '_'
                    || c.is_whitespace()
                    || matches!(c, '-' | '.' | '~')
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SlugError;

    /// Parses a mode name. Unknown names are an error rather than a silent
    /// fallback to the default mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(Self::Pretty),
            "rfc3986" => Ok(Self::Rfc3986),
            _ => Err(SlugError::UnknownMode {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_modes() {
        assert_eq!("pretty".parse::<Mode>().unwrap(), Mode::Pretty);
        assert_eq!("rfc3986".parse::<Mode>().unwrap(), Mode::Rfc3986);
    }

    #[test]
    fn parse_unknown_mode_fails() {
        let err = "strict".parse::<Mode>().unwrap_err();
        assert_eq!(
            err,
            SlugError::UnknownMode {
                name: "strict".to_string()
            }
        );
        assert!(err.to_string().contains("strict"));
    }

    #[test]
    fn name_round_trips() {
        for mode in [Mode::Pretty, Mode::Rfc3986] {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn default_mode_is_pretty() {
        assert_eq!(Mode::default(), Mode::Pretty);
    }

    #[test]
    fn pretty_allows_only_alphanumerics_and_whitespace() {
        assert!(Mode::Pretty.allows('a'));
        assert!(Mode::Pretty.allows('7'));
        assert!(Mode::Pretty.allows(' '));
        assert!(!Mode::Pretty.allows('-'));
        assert!(!Mode::Pretty.allows('.'));
        assert!(!Mode::Pretty.allows('_'));
        assert!(!Mode::Pretty.allows('é'));
    }

    #[test]
    fn rfc3986_allows_unreserved_characters() {
        for c in ['a', '7', ' ', '-', '.', '_', '~'] {
            assert!(Mode::Rfc3986.allows(c), "expected {c:?} to be allowed");
        }
        assert!(!Mode::Rfc3986.allows('!'));
        assert!(!Mode::Rfc3986.allows('é'));
    }
}
