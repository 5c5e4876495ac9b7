use crate::error::TextError;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Upper and lower case ASCII letters.
pub const ALPHA: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII digits followed by [`ALPHA`].
pub const ALNUM: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// How many copies of a pool are shuffled together when generating a random string.
pub const POOL_REPEAT: usize = 5;

/// Character pool used for random string generation.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum PoolKind {
    Alpha,
    #[default]
    Alnum,
}

impl PoolKind {
    /// Returns the fixed character set for this pool.
    #[must_use]
    pub const fn characters(self) -> &'static str {
        match self {
            Self::Alpha => ALPHA,
            Self::Alnum => ALNUM,
        }
    }

    /// Longest string [`crate::TextOps::random_with`] can produce from this pool.
    #[must_use]
    pub const fn capacity(self) -> usize {
        self.characters().len() * POOL_REPEAT
    }
}

/// Resolves a pool tag (`alpha` or `alnum`) to its character set.
///
/// # Errors
/// Returns [`TextError::InvalidArgument`] carrying `kind` when the tag is unknown.
pub fn pool(kind: &str) -> Result<&'static str, TextError> {
    parse_kind(kind).map(PoolKind::characters)
}

pub(crate) fn parse_kind(kind: &str) -> Result<PoolKind, TextError> {
    kind.parse().map_err(|_| TextError::InvalidArgument {
        message: kind.to_owned().into(),
        context: Some("Invalid random string type".into()),
    })
}
