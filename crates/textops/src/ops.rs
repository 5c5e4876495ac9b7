use crate::config::TextOpsConfig;
use crate::encoding::Encoding;
use crate::error::TextError;
use crate::pool::{self, POOL_REPEAT, PoolKind};
use crate::transliteration::{Rule, TransliterationTable};
use rand::seq::SliceRandom;
use regex::Regex;
use std::borrow::Cow;
use tracing::{debug, trace, warn};

/// Default character budget of [`TextOps::limit`] and [`TextOps::limit_exact`].
pub const DEFAULT_LIMIT: usize = 100;
/// Default word budget of [`TextOps::words`].
pub const DEFAULT_WORDS: usize = 100;
/// Default suffix appended to truncated text.
pub const DEFAULT_END: &str = "...";
/// Default separator of [`TextOps::slug`].
pub const DEFAULT_SEPARATOR: &str = "-";

/// Encoding-aware string operations.
///
/// Holds the two pieces of read-only state every operation may consult: the [`Encoding`]
/// and the [`TransliterationTable`]. Both are fixed at construction, so a `TextOps` can be
/// cloned freely and shared across threads.
///
/// ```rust
/// use tkit_textops::TextOps;
///
/// let text = TextOps::default();
/// assert_eq!(text.slug("This is my blog post!", "-"), "this-is-my-blog-post");
/// assert_eq!(text.limit("Taylor Otwell", 6, "..."), "Taylor...");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextOps {
    encoding: Encoding,
    table: TransliterationTable,
}

/// Builder for [`TextOps`].
#[derive(Debug, Default)]
pub struct TextOpsBuilder {
    encoding: Encoding,
    rules: Option<Vec<Rule>>,
}

impl TextOpsBuilder {
    /// Sets the encoding. Defaults to [`Encoding::Utf8`].
    #[must_use]
    pub const fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Appends a transliteration rule.
    ///
    /// Supplying any rule replaces the built-in table.
    #[must_use]
    pub fn rule(mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.rules.get_or_insert_with(Vec::new).push(Rule::new(pattern, replacement));
        self
    }

    /// Appends transliteration rules, keeping their order.
    ///
    /// Supplying rules, even none, replaces the built-in table.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.get_or_insert_with(Vec::new).extend(rules);
        self
    }

    /// Compiles the transliteration table and returns the ready [`TextOps`].
    ///
    /// # Errors
    /// Returns [`TextError::InvalidPattern`] if a rule does not compile.
    pub fn build(self) -> Result<TextOps, TextError> {
        let table = match self.rules {
            Some(rules) => TransliterationTable::new(rules)?,
            None => TransliterationTable::builtin(),
        };

        debug!(encoding = %self.encoding, rules = table.len(), "Text operations ready");
        Ok(TextOps { encoding: self.encoding, table })
    }
}

impl TextOps {
    /// Creates an instance from an already compiled table.
    #[must_use]
    pub const fn new(encoding: Encoding, table: TransliterationTable) -> Self {
        Self { encoding, table }
    }

    /// Starts a [`TextOpsBuilder`] with UTF-8 and the built-in table.
    #[must_use]
    pub fn builder() -> TextOpsBuilder {
        TextOpsBuilder::default()
    }

    /// Builds an instance from deserialized settings.
    ///
    /// # Errors
    /// Returns [`TextError::InvalidPattern`] if a configured rule does not compile.
    pub fn from_config(config: &TextOpsConfig) -> Result<Self, TextError> {
        let builder = Self::builder().encoding(config.encoding);
        let builder = match &config.transliteration {
            Some(rules) => builder.rules(rules.iter().cloned()),
            None => builder,
        };

        builder.build()
    }

    /// The encoding every operation of this instance interprets.
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The transliteration table used by [`Self::ascii`] and [`Self::slug`].
    #[must_use]
    pub const fn table(&self) -> &TransliterationTable {
        &self.table
    }

    /// Best-effort decoding of raw bytes; ill-formed sequences become `U+FFFD`.
    #[must_use]
    pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
        String::from_utf8_lossy(bytes)
    }

    /// Number of code points, or of bytes in single-byte mode.
    #[must_use]
    pub fn length(&self, value: &str) -> usize {
        if self.encoding.is_multibyte() { value.chars().count() } else { value.len() }
    }

    #[must_use]
    pub fn lower(&self, value: &str) -> String {
        if self.encoding.is_multibyte() { value.to_lowercase() } else { value.to_ascii_lowercase() }
    }

    #[must_use]
    pub fn upper(&self, value: &str) -> String {
        if self.encoding.is_multibyte() { value.to_uppercase() } else { value.to_ascii_uppercase() }
    }

    /// Upper-cases the first character of every whitespace-delimited word and lower-cases the rest.
    ///
    /// ```rust
    /// # use tkit_textops::TextOps;
    /// let text = TextOps::default();
    /// assert_eq!(text.title("taylor OTWELL"), "Taylor Otwell");
    /// assert_eq!(text.title("νωθρού κυνός"), "Νωθρού Κυνός");
    /// ```
    #[must_use]
    pub fn title(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        let mut word_start = true;

        for c in value.chars() {
            if c.is_whitespace() {
                out.push(c);
                word_start = true;
                continue;
            }

            match (self.encoding.is_multibyte(), word_start) {
                (true, true) => out.extend(c.to_uppercase()),
                (true, false) => out.extend(c.to_lowercase()),
                (false, true) => out.push(c.to_ascii_uppercase()),
                (false, false) => out.push(c.to_ascii_lowercase()),
            }
            word_start = false;
        }

        out
    }

    /// Keeps the first `limit` characters and appends `end`, unless `value` already fits.
    #[must_use]
    pub fn limit(&self, value: &str, limit: usize, end: &str) -> String {
        if self.length(value) <= limit {
            return value.to_owned();
        }

        trace!(limit, "Truncating value");
        format!("{}{end}", self.prefix(value, limit))
    }

    /// Like [`Self::limit`], but the suffix counts against the budget.
    ///
    /// When `end` alone is longer than `limit`, the text is cut to nothing and only `end`
    /// is returned.
    #[must_use]
    pub fn limit_exact(&self, value: &str, limit: usize, end: &str) -> String {
        if self.length(value) <= limit {
            return value.to_owned();
        }

        self.limit(value, limit.saturating_sub(self.length(end)), end)
    }

    /// Keeps the first `words` whitespace-delimited words.
    ///
    /// `end` is appended only when something was cut off; blank input yields an empty string.
    ///
    /// ```rust
    /// # use tkit_textops::TextOps;
    /// let text = TextOps::default();
    /// assert_eq!(text.words("a b c", 2, "..."), "a b...");
    /// assert_eq!(text.words("a b", 5, "..."), "a b");
    /// ```
    #[must_use]
    pub fn words(&self, value: &str, words: usize, end: &str) -> String {
        if value.trim().is_empty() {
            return String::new();
        }

        let mut rest = value.trim_start();
        for _ in 0..words {
            if rest.is_empty() {
                break;
            }
            let token = rest.find(char::is_whitespace).unwrap_or(rest.len());
            rest = rest[token..].trim_start();
        }

        let matched = &value[..value.len() - rest.len()];
        let end = if rest.is_empty() { "" } else { end };

        format!("{}{end}", matched.trim_end())
    }

    /// Derives an identifier-style name: `my_post-name` becomes `My_Post_Name`.
    #[must_use]
    pub fn classify(&self, value: &str) -> String {
        let spaced = value.replace(['_', '-', '.'], " ");

        self.title(&spaced).chars().map(|c| if c.is_whitespace() { '_' } else { c }).collect()
    }

    /// Splits a URI-style path into its non-empty segments.
    #[must_use]
    pub fn segments<'a>(&self, value: &'a str) -> Vec<&'a str> {
        value.trim_matches('/').split('/').filter(|segment| !segment.is_empty()).collect()
    }

    /// Generates a random string from the pool named by `kind` (`alpha` or `alnum`).
    ///
    /// # Errors
    /// Returns [`TextError::InvalidArgument`] for an unknown `kind`.
    pub fn random(&self, length: usize, kind: &str) -> Result<String, TextError> {
        pool::parse_kind(kind).map(|kind| self.random_with(length, kind))
    }

    /// Shuffles five copies of the pool and keeps the first `length` characters.
    ///
    /// The output is therefore at most [`PoolKind::capacity`] characters long. Uses the
    /// thread-local generator and is not suitable for secrets.
    #[must_use]
    pub fn random_with(&self, length: usize, kind: PoolKind) -> String {
        let mut candidates: Vec<char> = kind.characters().repeat(POOL_REPEAT).chars().collect();
        candidates.shuffle(&mut rand::rng());

        candidates.into_iter().take(length).collect()
    }

    /// Wildcard match where `*` stands for any run of characters.
    ///
    /// The match may start anywhere in `value` but must reach its end. The pattern `/`
    /// matches only `/` itself.
    ///
    /// The pattern is compiled to a [`Regex`] on every call. Callers matching one pattern
    /// against many values in a hot loop should build the regex once themselves.
    ///
    /// ```rust
    /// # use tkit_textops::TextOps;
    /// let text = TextOps::default();
    /// assert!(text.is("library/*", "library/foo/bar"));
    /// assert!(!text.is("/", "/x"));
    /// ```
    #[must_use]
    pub fn is(&self, pattern: &str, value: &str) -> bool {
        if pattern == "/" {
            return value == "/";
        }

        let translated = pattern.split('*').map(regex::escape).collect::<Vec<_>>().join(".*");

        match Regex::new(&format!(r"(?s){translated}\z")) {
            Ok(re) => re.is_match(value),
            Err(err) => {
                warn!(%err, pattern, "Wildcard pattern could not be compiled");
                false
            },
        }
    }

    /// Builds a URL-friendly slug.
    ///
    /// `title` is split on whitespace and on every character of `separator`, before any
    /// transliteration, so the separator survives unchanged whatever its script or case. Each
    /// chunk is transliterated and lower-cased, and only letters and digits are kept. The
    /// non-empty chunks are joined with `separator`, which never appears at either end.
    ///
    /// ```rust
    /// # use tkit_textops::TextOps;
    /// let text = TextOps::default();
    /// let once = text.slug("Hello World", "–");
    /// assert_eq!(once, "hello–world");
    /// assert_eq!(text.slug(&once, "–"), once);
    /// ```
    #[must_use]
    pub fn slug(&self, title: &str, separator: &str) -> String {
        let is_break = |c: char| c.is_whitespace() || separator.contains(c);
        let mut out = String::with_capacity(title.len());

        for chunk in title.split(is_break).filter(|chunk| !chunk.is_empty()) {
            let cleaned = self.lower(&self.ascii(chunk));

            // Transliterating and lower-casing may produce separator characters; they split too.
            for word in cleaned.split(is_break) {
                let word: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
                if word.is_empty() {
                    continue;
                }
                if !out.is_empty() {
                    out.push_str(separator);
                }
                out.push_str(&word);
            }
        }

        out
    }

    /// Transliterates `value` and drops everything outside printable 7-bit ASCII
    /// (tab, line feed and carriage return are kept).
    #[must_use]
    pub fn ascii(&self, value: &str) -> String {
        self.table
            .apply(value)
            .chars()
            .filter(|&c| matches!(c, '\t' | '\n' | '\r' | ' '..='~'))
            .collect()
    }

    /// Character set for a pool tag.
    ///
    /// # Errors
    /// Returns [`TextError::InvalidArgument`] naming the unknown tag.
    pub fn pool(&self, kind: &str) -> Result<&'static str, TextError> {
        pool::pool(kind)
    }

    /// Leading slice of `value` holding at most `count` characters (bytes in single-byte
    /// mode). Byte offsets that fall inside a code point back off to its start.
    fn prefix<'a>(&self, value: &'a str, count: usize) -> &'a str {
        if self.encoding.is_multibyte() {
            return value.char_indices().nth(count).map_or(value, |(index, _)| &value[..index]);
        }

        if count >= value.len() {
            return value;
        }
        let mut index = count;
        while !value.is_char_boundary(index) {
            index -= 1;
        }
        &value[..index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_byte() -> TextOps {
        TextOps::builder().encoding(Encoding::SingleByte).build().unwrap()
    }

    #[test]
    fn prefix_counts_code_points() {
        let text = TextOps::default();
        assert_eq!(text.prefix("héllo", 2), "hé");
        assert_eq!(text.prefix("héllo", 10), "héllo");
        assert_eq!(text.prefix("héllo", 0), "");
    }

    #[test]
    fn single_byte_prefix_never_splits_code_points() {
        let text = single_byte();
        // 'é' occupies bytes 1..3
        assert_eq!(text.prefix("héllo", 2), "h");
        assert_eq!(text.prefix("héllo", 3), "hé");
    }

    #[test]
    fn single_byte_case_mapping_leaves_non_ascii() {
        let text = single_byte();
        assert_eq!(text.upper("straße é"), "STRAßE é");
        assert_eq!(text.lower("ÉCOLE"), "École");
        assert_eq!(text.title("hELLO wORLD"), "Hello World");
    }

    #[test]
    fn builder_rules_replace_builtin_table() {
        let text = TextOps::builder().rule("ü", "u").build().unwrap();
        assert_eq!(text.table().len(), 1);
        assert_eq!(text.ascii("Über"), "ber");
        assert_eq!(text.ascii("über"), "uber");
    }

    #[test]
    fn empty_rule_list_disables_transliteration() {
        let text = TextOps::builder().rules([]).build().unwrap();
        assert!(text.table().is_empty());
        assert_eq!(text.slug("Crème brûlée", "-"), "crme-brle");
    }

    #[test]
    fn slug_keeps_separator_verbatim() {
        let text = TextOps::default();

        let dash = text.slug("Hello World", "–");
        assert_eq!(dash, "hello–world");
        assert_eq!(text.slug(&dash, "–"), dash);

        let upper = text.slug("Hello World", "X");
        assert_eq!(upper, "helloXworld");
        assert_eq!(text.slug(&upper, "X"), upper);
    }

    #[test]
    fn slug_splits_on_transliterated_separator() {
        let text = TextOps::default();
        // "á" becomes "a", which is also the separator.
        let once = text.slug("áx b", "a");
        assert_eq!(once, "xab");
        assert_eq!(text.slug(&once, "a"), once);
    }

    #[test]
    fn decode_is_lossy() {
        assert_eq!(TextOps::decode(b"ok\xFFok"), "ok\u{FFFD}ok");
    }
}
