//! The slug transformation pipeline.
//!
//! The pipeline runs in two layers: a character scan that applies the
//! multi-character and single-character replacement tables and filters each
//! produced unit, then a post-processing pass that trims, collapses
//! whitespace and hyphen runs into the separator, and folds case. If the
//! whole pipeline produces an empty string for non-empty input, it is run
//! once more over the base64 encoding of the original input so that
//! meaningful input essentially never slugifies to nothing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::charmap::{CharMap, MultiCharMap, default_charmap, default_multicharmap};
use crate::options::{Options, Resolved};

/// Slug generation context.
///
/// Owns the replacement tables used when a call does not override them. The
/// default context uses the built-in tables; [`extend`](Self::extend) adds
/// entries to this context only, leaving the built-in defaults and every
/// other context untouched.
///
/// All slugification goes through `&self`, so a context can be shared freely
/// between threads once configured.
#[derive(Debug, Clone)]
pub struct Slugifier {
    /// Single-character replacements applied when no multi-character key
    /// matches.
    charmap: CharMap,
    /// Multi-character replacements, matched first at each scan position.
    multicharmap: MultiCharMap,
}

impl Default for Slugifier {
    fn default() -> Self {
        Self {
            charmap: default_charmap(),
            multicharmap: default_multicharmap(),
        }
    }
}

impl Slugifier {
    /// Creates a context with the built-in replacement tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges entries into this context's single-character table. Later
    /// entries win on key conflict.
    ///
    /// Calls that pass an explicit charmap override are unaffected.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        self.charmap
            .extend(entries.into_iter().map(|(c, s)| (c, s.into())));
    }

    /// Returns this context's single-character table.
    pub fn charmap(&self) -> &CharMap {
        &self.charmap
    }

    /// Returns this context's multi-character table.
    pub fn multicharmap(&self) -> &MultiCharMap {
        &self.multicharmap
    }

    /// Slugifies `input` under `options`.
    ///
    /// Returns an empty string only for input that is itself empty.
    pub fn slug(&self, input: &str, options: &Options) -> String {
        let resolved = options.resolve(&self.charmap, &self.multicharmap);
        let result = transliterate(input, &resolved);
        if result.is_empty() && !input.is_empty() {
            // Nothing survived transliteration. Slugify the base64 encoding
            // of the original input instead, which always has an ASCII form.
            return transliterate(&STANDARD.encode(input.as_bytes()), &resolved);
        }
        result
    }
}

/// Runs one full transliteration pass over `input`.
fn transliterate(input: &str, options: &Resolved<'_>) -> String {
    let chars: Vec<char> = input.chars().collect();
    let lengths = key_lengths(options.multicharmap);

    let mut raw = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        let unit = match multichar_match(&chars, i, &lengths, options.multicharmap) {
            Some((replacement, consumed)) => {
                i += consumed;
                replacement.to_string()
            }
            None => {
                let c = chars[i];
                i += 1;
                match options.charmap.get(&c) {
                    Some(replacement) => replacement.clone(),
                    None => c.to_string(),
                }
            }
        };
        push_unit(&mut raw, &unit, options);
    }

    finish(&raw, options)
}

/// Distinct key lengths present in the multi-character table, in ascending
/// order. Each length is tried at every scan position.
fn key_lengths(multicharmap: &MultiCharMap) -> Vec<usize> {
    let mut lengths: Vec<usize> = multicharmap.keys().map(|key| key.chars().count()).collect();
    lengths.sort_unstable();
    lengths.dedup();
    lengths
}

/// Looks for a multi-character key starting at position `at`. Returns the
/// replacement and the number of characters consumed.
fn multichar_match<'a>(
    chars: &[char],
    at: usize,
    lengths: &[usize],
    multicharmap: &'a MultiCharMap,
) -> Option<(&'a str, usize)> {
    for &len in lengths {
        if at + len > chars.len() {
            continue;
        }
        let candidate: String = chars[at..at + len].iter().collect();
        if let Some(replacement) = multicharmap.get(&candidate) {
            return Some((replacement.as_str(), len));
        }
    }
    None
}

/// Filters one replaced unit and appends the surviving characters to `out`.
///
/// Separator occurrences become spaces first so that a separator character
/// which is not otherwise in the allowed set survives to the collapse step.
fn push_unit(out: &mut String, unit: &str, options: &Resolved<'_>) {
    let protected = if options.replacement.is_empty() {
        unit.to_string()
    } else {
        unit.replace(options.replacement, " ")
    };
    for c in protected.chars() {
        if !options.mode.allows(c) {
            continue;
        }
        if let Some(remove) = options.remove
            && remove.contains(&c)
        {
            continue;
        }
        out.push(c);
    }
}

/// Trims, collapses whitespace and hyphen runs into the separator, strips a
/// trailing separator, and lowercases when configured.
fn finish(raw: &str, options: &Resolved<'_>) -> String {
    let trimmed = raw.trim();

    let mut result = String::with_capacity(trimmed.len());
    let mut in_run = false;
    for c in trimmed.chars() {
        if c == '-' || c.is_whitespace() {
            if !in_run {
                result.push_str(options.replacement);
            }
            in_run = true;
        } else {
            result.push(c);
            in_run = false;
        }
    }

    if !options.replacement.is_empty() && result.ends_with(options.replacement) {
        result.truncate(result.len() - options.replacement.len());
    }

    if options.lower { result.to_lowercase() } else { result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Remove;

    fn slug(input: &str) -> String {
        Slugifier::new().slug(input, &Options::new())
    }

    #[test]
    fn joins_words_with_separator() {
        assert_eq!(slug("foo bar baz"), "foo-bar-baz");
    }

    #[test]
    fn collapses_space_and_hyphen_runs() {
        assert_eq!(slug("foo  bar--baz"), "foo-bar-baz");
        assert_eq!(slug("foo- bar baz"), "foo-bar-baz");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(slug(" foo bar baz "), "foo-bar-baz");
    }

    #[test]
    fn strips_trailing_separator() {
        assert_eq!(slug("foo bar-"), "foo-bar");
    }

    #[test]
    fn lowercases_by_default() {
        assert_eq!(slug("Hello World"), "hello-world");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(slug(""), "");
    }

    #[test]
    fn custom_separator() {
        let slugifier = Slugifier::new();
        assert_eq!(
            slugifier.slug("foo bar baz", &Options::from("_")),
            "foo_bar_baz"
        );
        assert_eq!(
            slugifier.slug("foo bar baz", &Options::from("")),
            "foobarbaz"
        );
    }

    #[test]
    fn multichar_match_is_atomic() {
        assert_eq!(slug("w/ <3 && sugar || ☠"), "with-love-and-sugar-or-skull-and-bones");
    }

    #[test]
    fn multichar_wins_over_single_char() {
        // '&' alone maps to "and"; '&&' must consume both characters at once.
        assert_eq!(slug("a && b"), "a-and-b");
        assert_eq!(slug("a & b"), "a-and-b");
    }

    #[test]
    fn charmap_applies_to_unmatched_chars() {
        assert_eq!(slug("déjà vu"), "deja-vu");
    }

    #[test]
    fn extend_adds_entries_to_this_context_only() {
        let mut custom = Slugifier::new();
        custom.extend([('♫', "music")]);
        assert_eq!(custom.slug("cool ♫", &Options::new()), "cool-music");
        assert_eq!(slug("cool ♫"), "cool");
    }

    #[test]
    fn extend_later_entry_wins() {
        let mut custom = Slugifier::new();
        custom.extend([('€', "eur")]);
        assert_eq!(custom.slug("5 €", &Options::new()), "5-eur");
    }

    #[test]
    fn base64_fallback_for_unmapped_input() {
        let input = "鳄梨";
        let expected = {
            let encoded = STANDARD.encode(input.as_bytes());
            slug(&encoded)
        };
        assert_eq!(slug(input), expected);
        assert!(!slug(input).is_empty());
    }

    #[test]
    fn remove_set_strips_after_filtering() {
        use crate::mode::Mode;

        let slugifier = Slugifier::new();
        // rfc3986 keeps periods; an explicit removal set strips them anyway.
        let options = Options::from(Mode::Rfc3986).remove(Remove::Chars(vec!['.']));
        assert_eq!(slugifier.slug("foo bar.baz", &options), "foo-barbaz");
    }

    #[test]
    fn idempotent_under_defaults() {
        for input in ["foo bar baz", "Hello, Wörld!", "a && b", "foo  bar--baz"] {
            let once = slug(input);
            assert_eq!(slug(&once), once, "not idempotent for {input:?}");
        }
    }
}
