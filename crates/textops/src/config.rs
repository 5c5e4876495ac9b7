use crate::encoding::Encoding;
use crate::transliteration::Rule;
use serde::Deserialize;

/// Serializable settings for [`crate::TextOps`].
///
/// ```toml
/// encoding = "utf-8"
///
/// [[transliteration]]
/// pattern = "Ä"
/// replacement = "Ae"
/// ```
///
/// A missing `transliteration` key selects the built-in table. An explicit list, even an
/// empty one, replaces it entirely.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextOpsConfig {
    pub encoding: Encoding,
    pub transliteration: Option<Vec<Rule>>,
}
