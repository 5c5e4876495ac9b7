use tkit_textops::{Encoding, Rule, TextError, TextOps, TextOpsConfig};

#[test]
fn defaults_select_builtin_table() {
    let cfg: TextOpsConfig = toml::from_str("").expect("config deserialize");
    assert_eq!(cfg.encoding, Encoding::Utf8);
    assert!(cfg.transliteration.is_none());

    let text = TextOps::from_config(&cfg).unwrap();
    assert_eq!(text.slug("Grüße aus Köln", "-"), "gruesse-aus-koeln");
}

#[test]
fn rules_keep_file_order() {
    let raw = r#"
        encoding = "ISO-8859-1"

        [[transliteration]]
        pattern = "ä"
        replacement = "ae"

        [[transliteration]]
        pattern = "ä|á"
        replacement = "a"
    "#;

    let cfg: TextOpsConfig = toml::from_str(raw).expect("config deserialize");
    assert_eq!(cfg.encoding, Encoding::SingleByte);
    assert_eq!(
        cfg.transliteration.as_deref(),
        Some([Rule::new("ä", "ae"), Rule::new("ä|á", "a")].as_slice())
    );

    let text = TextOps::from_config(&cfg).unwrap();
    assert_eq!(text.encoding(), Encoding::SingleByte);
    assert_eq!(text.ascii("äá"), "aea");
}

#[test]
fn empty_rule_list_replaces_builtin_table() {
    let cfg: TextOpsConfig = toml::from_str("transliteration = []").expect("config deserialize");
    let text = TextOps::from_config(&cfg).unwrap();
    assert!(text.table().is_empty());
    assert_eq!(text.ascii("Köln"), "Kln");
}

#[test]
fn unknown_encoding_is_rejected() {
    let err = toml::from_str::<TextOpsConfig>(r#"encoding = "ebcdic""#).unwrap_err();
    assert!(err.to_string().contains("unsupported encoding `ebcdic`"), "unexpected: {err}");
}

#[test]
fn invalid_rule_fails_construction() {
    let cfg = TextOpsConfig {
        encoding: Encoding::Utf8,
        transliteration: Some(vec![Rule::new("[unclosed", "x")]),
    };

    let err = TextOps::from_config(&cfg).unwrap_err();
    assert!(matches!(err, TextError::InvalidPattern { context: Some(_), .. }));
}
