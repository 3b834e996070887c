//! 환율 테이블/표시 환산 테스트.
use solar_productive_calculator::currency::{convert, region_currency, ExchangeRateTable};

#[test]
fn convert_is_linear() {
    let rate = 129.37;
    let a = 1850.0;
    let b = 473.25;
    let sum = convert(a, rate) + convert(b, rate);
    let direct = convert(a + b, rate);
    assert!((sum - direct).abs() < 1e-9 * direct.abs().max(1.0));
}

#[test]
fn unit_rate_is_identity() {
    for x in [0.0, 1.0, 3700.0, 0.0357] {
        assert_eq!(convert(x, 1.0), x);
    }
}

#[test]
fn empty_table_defaults_to_no_conversion() {
    let table = ExchangeRateTable::default();
    assert!(table.is_empty());
    assert_eq!(table.rate_for("KES"), 1.0);
    assert_eq!(table.rate_for("USD"), 1.0);
}

#[test]
fn lookup_is_case_insensitive_and_unknown_defaults() {
    let mut table = ExchangeRateTable::new();
    table.insert("kes", 129.0);
    assert_eq!(table.rate_for("KES"), 129.0);
    assert_eq!(table.rate_for("kes"), 129.0);
    assert_eq!(table.rate_for("ZZZ"), 1.0);
    assert!(table.contains("KES"));
    assert!(table.contains("USD"));
    assert!(!table.contains("ZZZ"));
}

#[test]
fn currencies_lists_usd_first_then_sorted() {
    let table = ExchangeRateTable::from_rates([
        ("TZS".to_string(), 2610.0),
        ("KES".to_string(), 129.0),
        ("EUR".to_string(), 0.92),
    ]);
    assert_eq!(table.currencies(), vec!["USD", "EUR", "KES", "TZS"]);
}

#[test]
fn region_currency_covers_target_markets() {
    assert_eq!(region_currency("KE"), Some("KES"));
    assert_eq!(region_currency("tz"), Some("TZS"));
    assert_eq!(region_currency("US"), Some("USD"));
    assert_eq!(region_currency("DE"), Some("EUR"));
    assert_eq!(region_currency("XX"), None);
}
