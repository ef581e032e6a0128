//! Per-call option overrides and their resolution against mode defaults.

use crate::charmap::{CharMap, MultiCharMap, default_charmap, default_multicharmap};
use crate::error::SlugError;
use crate::mode::Mode;

/// Which characters to strip after the allowed-character filter.
///
/// This is a three-way choice rather than an `Option` so that "explicitly
/// strip nothing" can override a mode whose default strips something.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Remove {
    /// Use the mode's default removal set.
    #[default]
    Inherit,
    /// Strip nothing, even if the mode's default would.
    Nothing,
    /// Strip every character in the given set.
    Chars(Vec<char>),
}

/// Per-call slug options.
///
/// Every field except the mode is an override: fields left unset inherit the
/// selected mode's defaults at resolution time. Explicitly set values always
/// win, including explicitly "off" values like `lower(false)` or
/// [`Remove::Nothing`].
///
/// A bare separator string converts into an options value, mirroring the
/// common replace-the-separator case:
///
/// ```
/// use slug::slug_with;
///
/// assert_eq!(slug_with("foo bar baz", "_"), "foo_bar_baz");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    /// Selected mode preset.
    mode: Mode,
    /// Separator override; inherits the mode's separator when unset.
    replacement: Option<String>,
    /// Lowercase override; inherits the mode's flag when unset.
    lower: Option<bool>,
    /// Removal-set override.
    remove: Remove,
    /// Full single-character table override. Replaces the context's table
    /// entirely for the call; it is not merged with the defaults.
    charmap: Option<CharMap>,
    /// Full multi-character table override.
    multicharmap: Option<MultiCharMap>,
}

impl Options {
    /// Creates options inheriting everything from the default mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for a mode named at runtime.
    ///
    /// Unknown names fail with [`SlugError::UnknownMode`] rather than
    /// falling back to the default mode.
    pub fn with_mode_name(name: &str) -> Result<Self, SlugError> {
        Ok(Self::new().mode(name.parse()?))
    }

    /// Returns the preset bundle for `mode` with every field resolved.
    ///
    /// This is the introspection form: all overrides are explicitly set to
    /// the mode's defaults, including copies of the built-in tables.
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            mode,
            replacement: Some(mode.default_replacement().to_string()),
            lower: Some(mode.default_lower()),
            remove: match mode.default_remove() {
                Some(chars) => Remove::Chars(chars.to_vec()),
                None => Remove::Nothing,
            },
            charmap: Some(default_charmap()),
            multicharmap: Some(default_multicharmap()),
        }
    }

    /// Selects the mode preset.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the separator placed between words. May be empty, in which
    /// case words are concatenated directly.
    pub fn replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }

    /// Overrides whether the result is lowercased.
    pub fn lower(mut self, lower: bool) -> Self {
        self.lower = Some(lower);
        self
    }

    /// Overrides the removal set.
    pub fn remove(mut self, remove: Remove) -> Self {
        self.remove = remove;
        self
    }

    /// Replaces the single-character table for this call. No merging with
    /// the context's table takes place.
    pub fn charmap(mut self, charmap: CharMap) -> Self {
        self.charmap = Some(charmap);
        self
    }

    /// Replaces the multi-character table for this call.
    pub fn multicharmap(mut self, multicharmap: MultiCharMap) -> Self {
        self.multicharmap = Some(multicharmap);
        self
    }

    /// Resolves these options against the mode defaults and the context's
    /// tables, producing the effective configuration for one call.
    pub fn resolve<'a>(
        &'a self,
        charmap: &'a CharMap,
        multicharmap: &'a MultiCharMap,
    ) -> Resolved<'a> {
        Resolved {
            mode: self.mode,
            replacement: self
                .replacement
                .as_deref()
                .unwrap_or_else(|| self.mode.default_replacement()),
            lower: self.lower.unwrap_or_else(|| self.mode.default_lower()),
            remove: match &self.remove {
                Remove::Inherit => self.mode.default_remove(),
                Remove::Nothing => None,
                Remove::Chars(chars) => Some(chars.as_slice()),
            },
            charmap: self.charmap.as_ref().unwrap_or(charmap),
            multicharmap: self.multicharmap.as_ref().unwrap_or(multicharmap),
        }
    }
}

impl From<Mode> for Options {
    fn from(mode: Mode) -> Self {
        Self::new().mode(mode)
    }
}

impl From<&str> for Options {
    /// Shorthand: a bare string is a separator override.
    fn from(replacement: &str) -> Self {
        Self::new().replacement(replacement)
    }
}

impl From<String> for Options {
    fn from(replacement: String) -> Self {
        Self::new().replacement(replacement)
    }
}

/// The effective configuration for a single call, with every field filled
/// from the caller's overrides or the mode defaults.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// Selected mode.
    pub mode: Mode,
    /// Separator placed between words.
    pub replacement: &'a str,
    /// Whether to lowercase the result.
    pub lower: bool,
    /// Characters stripped after the allowed-set filter.
    pub remove: Option<&'a [char]>,
    /// Single-character replacement table.
    pub charmap: &'a CharMap,
    /// Multi-character replacement table.
    pub multicharmap: &'a MultiCharMap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charmap::{shared_charmap, shared_multicharmap};

    fn resolve(options: &Options) -> Resolved<'_> {
        options.resolve(shared_charmap(), shared_multicharmap())
    }

    #[test]
    fn unset_fields_inherit_mode_defaults() {
        let options = Options::new();
        let resolved = resolve(&options);
        assert_eq!(resolved.mode, Mode::Pretty);
        assert_eq!(resolved.replacement, "-");
        assert!(resolved.lower);
        assert_eq!(resolved.remove, Some(&['.'][..]));
    }

    #[test]
    fn rfc3986_removes_nothing_by_default() {
        let options = Options::from(Mode::Rfc3986);
        assert_eq!(resolve(&options).remove, None);
    }

    #[test]
    fn explicit_false_is_not_overridden() {
        let options = Options::new().lower(false);
        assert!(!resolve(&options).lower);
    }

    #[test]
    fn remove_nothing_overrides_pretty_default() {
        let options = Options::new().remove(Remove::Nothing);
        assert_eq!(resolve(&options).remove, None);
    }

    #[test]
    fn string_shorthand_sets_replacement_only() {
        let options = Options::from("_");
        let resolved = resolve(&options);
        assert_eq!(resolved.replacement, "_");
        assert_eq!(resolved.mode, Mode::Pretty);
        assert!(resolved.lower);
    }

    #[test]
    fn charmap_override_is_not_merged() {
        let mut custom = CharMap::new();
        custom.insert('x', "y".to_string());
        let options = Options::new().charmap(custom);
        let resolved = resolve(&options);
        assert_eq!(resolved.charmap.len(), 1);
        assert!(!resolved.charmap.contains_key(&'À'));
    }

    #[test]
    fn for_mode_is_fully_resolved() {
        let preset = Options::for_mode(Mode::Pretty);
        assert_eq!(preset.replacement.as_deref(), Some("-"));
        assert_eq!(preset.lower, Some(true));
        assert_eq!(preset.remove, Remove::Chars(vec!['.']));
        assert!(preset.charmap.is_some());
        assert!(preset.multicharmap.is_some());
    }

    #[test]
    fn with_mode_name_rejects_unknown_names() {
        assert!(Options::with_mode_name("rfc3986").is_ok());
        let err = Options::with_mode_name("fancy").unwrap_err();
        assert_eq!(
            err,
            SlugError::UnknownMode {
                name: "fancy".to_string()
            }
        );
    }
}
