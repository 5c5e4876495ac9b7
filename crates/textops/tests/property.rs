use proptest::prelude::*;
use tkit_textops::{Encoding, TextOps};

fn single_byte() -> TextOps {
    TextOps::builder().encoding(Encoding::SingleByte).build().unwrap()
}

proptest! {
    #[test]
    fn ascii_length_agrees_across_encodings(value in "[\\x00-\\x7F]{0,64}") {
        prop_assert_eq!(TextOps::default().length(&value), single_byte().length(&value));
    }

    #[test]
    fn limit_keeps_exactly_limit_characters(value in "\\PC{0,80}", limit in 0usize..40) {
        let text = TextOps::default();
        let out = text.limit(&value, limit, "...");

        if text.length(&value) <= limit {
            prop_assert_eq!(out, value);
        } else {
            let kept = out.strip_suffix("...").unwrap_or(&out);
            prop_assert_eq!(text.length(kept), limit);
            prop_assert!(value.starts_with(kept));
        }
    }

    #[test]
    fn limit_exact_never_exceeds_budget(value in "\\PC{0,80}", limit in 3usize..40) {
        let text = TextOps::default();
        prop_assert!(text.length(&text.limit_exact(&value, limit, "...")) <= limit);
    }

    #[test]
    fn single_byte_limit_is_valid_utf8_prefix(value in "\\PC{0,40}", limit in 0usize..40) {
        let text = single_byte();
        let out = text.limit(&value, limit, "");
        prop_assert!(value.starts_with(&out));
        prop_assert!(out.len() <= limit);
    }

    #[test]
    fn slug_is_idempotent(
        value in "\\PC{0,60}",
        separator in "\\PC{0,2}".prop_filter("non-whitespace", |s| !s.contains(char::is_whitespace)),
    ) {
        let text = TextOps::default();
        let once = text.slug(&value, &separator);
        prop_assert_eq!(text.slug(&once, &separator), once.clone());
    }

    #[test]
    fn slug_never_edges_with_separator(value in "\\PC{0,60}", separator in "[-_.~]|–|X|ß") {
        let slug = TextOps::default().slug(&value, &separator);
        prop_assert!(!slug.starts_with(&separator) && !slug.ends_with(&separator));
    }

    #[test]
    fn slug_output_alphabet(value in "\\PC{0,60}") {
        let slug = TextOps::default().slug(&value, "-");
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn ascii_output_is_printable(value in any::<String>()) {
        let out = TextOps::default().ascii(&value);
        prop_assert!(out.bytes().all(|b| matches!(b, b'\t' | b'\n' | b'\r' | 0x20..=0x7E)));
    }

    #[test]
    fn classify_has_no_whitespace(value in "\\PC{0,40}") {
        prop_assert!(!TextOps::default().classify(&value).contains(char::is_whitespace));
    }

    #[test]
    fn segments_are_non_empty_and_slash_free(value in "[a-z/]{0,40}") {
        for segment in TextOps::default().segments(&value) {
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.contains('/'));
        }
    }
}
