#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the Textkit crates.
//!
//! The only attribute exported here is [`macro@tkit_error`], which every crate in the
//! workspace uses to declare its error enum.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a workspace error type.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug` and `thiserror::Error`, unless already derived.
/// * **Context trait**: a companion `<Name>Ext` trait with `.context(...)`, implemented
///   for `Result<T, Name>` and for `Result<T, Source>` of every variant that wraps a source.
/// * **Conversions**: `From<Source>` for each variant holding a `source` field (or a field
///   marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal fallback**: `From<&'static str>` and `From<String>` when the enum has an
///   `Internal { message, context }` variant.
/// * **`format_context`**: a module-private helper rendering ` (context)` or nothing, meant
///   to be used from `#[error(...)]` strings.
///
/// # Requirements
///
/// * Only enums are accepted, and every variant must use named fields.
/// * A variant wrapping a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[tkit_derive::tkit_error]
/// pub enum TableError {
///     #[error("Invalid pattern{}: {source}", format_context(.context))]
///     Pattern { source: regex::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal table error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn compile(raw: &str) -> Result<regex::Regex, TableError> {
///     Ok(regex::Regex::new(raw).context("Compiling rule")?)
/// }
/// ```
#[proc_macro_attribute]
pub fn tkit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
