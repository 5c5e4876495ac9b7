//! Ordered pattern-to-ASCII substitution rules.
//!
//! Rules are applied one after another, in the order they were supplied, each rewriting
//! every match in the output of the previous one. An earlier rule therefore wins over a later
//! one whenever both could consume the same characters: `Ä → Ae` must come before a generic
//! `Ä|Á → A` for the German spelling to survive.

use crate::error::{TextError, TextErrorExt};
use regex::{NoExpand, Regex};
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::{Arc, LazyLock};
use tracing::{debug, error};

/// A single substitution: every match of `pattern` is replaced by `replacement`.
///
/// `pattern` is a regular expression (usually an alternation of single characters such as
/// `À|Á|Â`). When `pattern` has capture groups, `replacement` may reference them with `$1` /
/// `${name}` (write `$$` for a literal `$`). Without groups the replacement is inserted
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
}

impl Rule {
    #[must_use]
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self { pattern: pattern.into(), replacement: replacement.into() }
    }
}

#[derive(Debug)]
struct CompiledRule {
    pattern: Regex,
    replacement: String,
    expand: bool,
}

impl CompiledRule {
    fn new(pattern: Regex, replacement: String) -> Self {
        // Group 0 is the whole match.
        let expand = pattern.captures_len() > 1;
        Self { pattern, replacement, expand }
    }

    fn replace_all<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.expand {
            self.pattern.replace_all(value, self.replacement.as_str())
        } else {
            self.pattern.replace_all(value, NoExpand(&self.replacement))
        }
    }
}

/// A compiled, read-only transliteration table.
///
/// Cloning is cheap: compiled rules sit behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct TransliterationTable {
    rules: Arc<[CompiledRule]>,
}

static BUILTIN: LazyLock<TransliterationTable> = LazyLock::new(|| {
    let rules = BUILTIN_RULES
        .iter()
        .enumerate()
        .filter_map(|(index, (pattern, replacement))| match Regex::new(pattern) {
            Ok(pattern) => Some(CompiledRule::new(pattern, (*replacement).to_owned())),
            Err(err) => {
                error!(index, %err, "Skipping malformed built-in transliteration rule");
                None
            },
        })
        .collect::<Vec<_>>();

    debug!(rules = rules.len(), "Built-in transliteration table compiled");
    TransliterationTable { rules: rules.into() }
});

impl TransliterationTable {
    /// Compiles `rules` into a table, preserving their order.
    ///
    /// # Errors
    /// Returns [`TextError::InvalidPattern`] for the first rule whose pattern does not
    /// compile; the context names the rule index and pattern.
    ///
    /// ```rust
    /// use tkit_textops::{Rule, TransliterationTable};
    ///
    /// let table = TransliterationTable::new([Rule::new("ß", "ss"), Rule::new("ü", "ue")]).unwrap();
    /// assert_eq!(table.apply("Grüße"), "Gruesse");
    /// ```
    pub fn new<I>(rules: I) -> Result<Self, TextError>
    where
        I: IntoIterator<Item = Rule>,
    {
        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(index, rule)| {
                let pattern = Regex::new(&rule.pattern)
                    .context(format!("rule #{index} `{}`", rule.pattern))?;
                Ok(CompiledRule::new(pattern, rule.replacement))
            })
            .collect::<Result<Vec<_>, TextError>>()?;

        debug!(rules = rules.len(), "Transliteration table compiled");
        Ok(Self { rules: rules.into() })
    }

    /// The table shipped with the crate: accented Latin letters, German umlauts,
    /// ligatures and Russian Cyrillic.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// A table without rules; [`Self::apply`] becomes the identity.
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Arc::from([]) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule over `value`, in table order.
    ///
    /// Borrows `value` untouched when no rule matches.
    #[must_use]
    pub fn apply<'a>(&self, value: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(value);
        for rule in self.rules.iter() {
            let replaced = match rule.replace_all(&current) {
                Cow::Owned(replaced) => Some(replaced),
                Cow::Borrowed(_) => None,
            };
            if let Some(replaced) = replaced {
                current = Cow::Owned(replaced);
            }
        }
        current
    }
}

impl Default for TransliterationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Multi-letter spellings come first so they take priority over the generic letter rules.
const BUILTIN_RULES: &[(&str, &str)] = &[
    // German
    ("Ä", "Ae"),
    ("ä", "ae"),
    ("Ö", "Oe"),
    ("ö", "oe"),
    ("Ü", "Ue"),
    ("ü", "ue"),
    ("ß|ẞ", "ss"),
    // Ligatures
    ("Æ|Ǽ", "AE"),
    ("æ|ǽ", "ae"),
    ("Œ", "OE"),
    ("œ", "oe"),
    ("Ĳ", "IJ"),
    ("ĳ", "ij"),
    ("Þ", "TH"),
    ("þ", "th"),
    // Cyrillic digraphs
    ("Ж", "Zh"),
    ("ж", "zh"),
    ("Х", "Kh"),
    ("х", "kh"),
    ("Ц", "Ts"),
    ("ц", "ts"),
    ("Ч", "Ch"),
    ("ч", "ch"),
    ("Ш", "Sh"),
    ("ш", "sh"),
    ("Щ", "Shch"),
    ("щ", "shch"),
    ("Ю", "Yu"),
    ("ю", "yu"),
    ("Я", "Ya"),
    ("я", "ya"),
    ("Ё", "Yo"),
    ("ё", "yo"),
    ("Ъ|Ь", ""),
    ("ъ|ь", ""),
    // Single letters
    ("À|Á|Â|Ã|Å|Ǻ|Ā|Ă|Ą|Ǎ|А", "A"),
    ("à|á|â|ã|å|ǻ|ā|ă|ą|ǎ|ª|а", "a"),
    ("Б", "B"),
    ("б", "b"),
    ("Ç|Ć|Ĉ|Ċ|Č", "C"),
    ("ç|ć|ĉ|ċ|č", "c"),
    ("Ð|Ď|Đ|Д", "D"),
    ("ð|ď|đ|д", "d"),
    ("È|É|Ê|Ë|Ē|Ĕ|Ė|Ę|Ě|Е|Э", "E"),
    ("è|é|ê|ë|ē|ĕ|ė|ę|ě|е|э", "e"),
    ("Ф", "F"),
    ("ƒ|ф", "f"),
    ("Ĝ|Ğ|Ġ|Ģ|Г", "G"),
    ("ĝ|ğ|ġ|ģ|г", "g"),
    ("Ĥ|Ħ", "H"),
    ("ĥ|ħ", "h"),
    ("Ì|Í|Î|Ï|Ĩ|Ī|Ĭ|Ǐ|Į|İ|И", "I"),
    ("ì|í|î|ï|ĩ|ī|ĭ|ǐ|į|ı|и", "i"),
    ("Ĵ|Й", "J"),
    ("ĵ|й", "j"),
    ("Ķ|К", "K"),
    ("ķ|к", "k"),
    ("Ĺ|Ļ|Ľ|Ŀ|Ł|Л", "L"),
    ("ĺ|ļ|ľ|ŀ|ł|л", "l"),
    ("М", "M"),
    ("м", "m"),
    ("Ñ|Ń|Ņ|Ň|Н", "N"),
    ("ñ|ń|ņ|ň|ŉ|н", "n"),
    ("Ò|Ó|Ô|Õ|Ō|Ŏ|Ǒ|Ő|Ơ|Ø|Ǿ|О", "O"),
    ("ò|ó|ô|õ|ō|ŏ|ǒ|ő|ơ|ø|ǿ|º|о", "o"),
    ("П", "P"),
    ("п", "p"),
    ("Ŕ|Ŗ|Ř|Р", "R"),
    ("ŕ|ŗ|ř|р", "r"),
    ("Ś|Ŝ|Ş|Ș|Š|С", "S"),
    ("ś|ŝ|ş|ș|š|ſ|с", "s"),
    ("Ţ|Ț|Ť|Ŧ|Т", "T"),
    ("ţ|ț|ť|ŧ|т", "t"),
    ("Ù|Ú|Û|Ũ|Ū|Ŭ|Ů|Ű|Ų|Ư|Ǔ|Ǖ|Ǘ|Ǚ|Ǜ|У", "U"),
    ("ù|ú|û|ũ|ū|ŭ|ů|ű|ų|ư|ǔ|ǖ|ǘ|ǚ|ǜ|у", "u"),
    ("В", "V"),
    ("в", "v"),
    ("Ŵ", "W"),
    ("ŵ", "w"),
    ("Ý|Ÿ|Ŷ|Ы", "Y"),
    ("ý|ÿ|ŷ|ы", "y"),
    ("Ź|Ż|Ž|З", "Z"),
    ("ź|ż|ž|з", "z"),
];
