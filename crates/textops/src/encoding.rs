use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

/// Text encoding that selects between multi-byte and single-byte routines.
///
/// Tags are matched case-insensitively:
///
/// | Tag                                                  | Variant                  |
/// |------------------------------------------------------|--------------------------|
/// | `utf-8`, `utf8`                                      | [`Encoding::Utf8`]       |
/// | `ascii`, `us-ascii`, `8bit`, `latin1`, `iso-8859-1`  | [`Encoding::SingleByte`] |
///
/// ```rust
/// use tkit_textops::Encoding;
///
/// assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
/// assert_eq!(Encoding::SingleByte.to_string(), "ascii");
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(try_from = "String")]
pub enum Encoding {
    /// Lengths and offsets count code points; case mapping covers all of Unicode.
    #[default]
    #[strum(to_string = "utf-8", serialize = "utf8")]
    Utf8,
    /// Lengths and offsets count bytes; case mapping touches ASCII letters only.
    #[strum(
        to_string = "ascii",
        serialize = "us-ascii",
        serialize = "8bit",
        serialize = "latin1",
        serialize = "iso-8859-1"
    )]
    SingleByte,
}

impl Encoding {
    /// Whether operations run in code-point (rather than byte) mode.
    #[must_use]
    pub const fn is_multibyte(self) -> bool {
        matches!(self, Self::Utf8)
    }
}

impl TryFrom<String> for Encoding {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse().map_err(|_| format!("unsupported encoding `{value}`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags() {
        assert_eq!("utf-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("utf8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("ISO-8859-1".parse::<Encoding>().unwrap(), Encoding::SingleByte);
        assert_eq!("Latin1".parse::<Encoding>().unwrap(), Encoding::SingleByte);
    }

    #[test]
    fn rejects_unknown_tags() {
        let err = Encoding::try_from("koi8-r".to_owned()).unwrap_err();
        assert_eq!(err, "unsupported encoding `koi8-r`");
    }

    #[test]
    fn default_is_multibyte() {
        assert!(Encoding::default().is_multibyte());
        assert!(!Encoding::SingleByte.is_multibyte());
        assert_eq!(Encoding::default().as_ref(), "utf-8");
    }
}
