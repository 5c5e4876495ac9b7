//! # Text Errors
//!
//! Operations over well-formed `&str` input are total. The only call-time failure is an
//! unknown character pool; the remaining variant is raised while a transliteration table
//! is compiled.

use std::borrow::Cow;

/// Failures raised by [`crate::TextOps`] and its supporting types.
#[tkit_derive::tkit_error]
pub enum TextError {
    /// An argument outside the accepted domain, e.g. an unknown random pool type.
    ///
    /// `message` carries the offending value verbatim.
    #[error("Invalid argument{}: {message}", format_context(.context))]
    InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A transliteration rule whose pattern is not a valid regular expression.
    #[error("Invalid transliteration pattern{}: {source}", format_context(.context))]
    InvalidPattern { source: regex::Error, context: Option<Cow<'static, str>> },
}
