//! Integration tests for KernelConfig and ColumnCheck.

use colkern::config::{ColumnCheck, KernelConfig};

#[test]
fn default_is_strict() {
    assert_eq!(ColumnCheck::default(), ColumnCheck::Strict);
    assert_eq!(KernelConfig::default().column_check, ColumnCheck::Strict);
}

#[test]
fn column_check_from_str() {
    assert_eq!("strict".parse::<ColumnCheck>(), Ok(ColumnCheck::Strict));
    assert_eq!("LENIENT".parse::<ColumnCheck>(), Ok(ColumnCheck::Lenient));
    assert!("sometimes".parse::<ColumnCheck>().is_err());
}

#[test]
fn column_check_display_round_trips_through_from_str() {
    for check in [ColumnCheck::Strict, ColumnCheck::Lenient] {
        assert_eq!(check.to_string().parse::<ColumnCheck>(), Ok(check));
    }
}

#[test]
fn empty_json_object_uses_defaults() {
    let cfg: KernelConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, KernelConfig::default());
}

#[test]
fn json_selects_lenient() {
    let cfg: KernelConfig = serde_json::from_str(r#"{"column_check": "lenient"}"#).unwrap();
    assert_eq!(cfg.column_check, ColumnCheck::Lenient);

    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("\"lenient\""));
}

#[test]
fn unknown_column_check_is_rejected() {
    let parsed = serde_json::from_str::<KernelConfig>(r#"{"column_check": "loose"}"#);
    assert!(parsed.is_err());
}

#[test]
fn builder_overrides_column_check() {
    let cfg = KernelConfig::default().with_column_check(ColumnCheck::Lenient);
    assert_eq!(cfg.column_check, ColumnCheck::Lenient);
}
