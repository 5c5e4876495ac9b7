use std::borrow::Cow;
use tkit_derive::tkit_error;

#[tkit_error]
pub enum ParseError {
    #[error("Bad number{}: {source}", format_context(.context))]
    Number { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Out of range{}: {message}", format_context(.context))]
    Range { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal parse error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_small(raw: &str) -> Result<u8, ParseError> {
    let value = raw.parse::<u32>().context("Reading limit")?;
    u8::try_from(value)
        .map_err(|_| ParseError::Range { message: raw.to_owned().into(), context: None })
}

#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/tkit_error_pass.rs");
}

#[test]
fn source_context_is_rendered() {
    let err = parse_small("abc").unwrap_err();
    assert!(matches!(err, ParseError::Number { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Bad number (Reading limit): "));
}

#[test]
fn from_source_leaves_context_empty() {
    let source = "x".parse::<u32>().unwrap_err();
    let err = ParseError::from(source);
    assert!(err.to_string().starts_with("Bad number: "));
}

#[test]
fn context_can_be_attached_to_own_errors() {
    let result: Result<u8, ParseError> = parse_small("300").context("limit flag");
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Out of range (limit flag): 300");
}

#[test]
fn strings_convert_into_internal() {
    let from_static: ParseError = "boom".into();
    let from_owned: ParseError = String::from("bang").into();

    assert_eq!(from_static.to_string(), "Internal parse error: boom");
    assert_eq!(from_owned.to_string(), "Internal parse error: bang");
}
