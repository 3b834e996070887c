//! 로컬 환율 파일(rates.toml) 파싱 테스트. 네트워크 조회는 테스트하지 않는다.
use solar_productive_calculator::rates::parse_rates_toml;

#[test]
fn parses_rates_table() {
    let table = parse_rates_toml(
        r#"
[rates]
KES = 129.0
TZS = 2610.0
eur = 0.92
"#,
    )
    .expect("parse");
    assert_eq!(table.len(), 3);
    assert_eq!(table.rate_for("KES"), 129.0);
    // 키는 대문자로 정규화된다
    assert_eq!(table.rate_for("EUR"), 0.92);
}

#[test]
fn missing_rates_section_is_an_error() {
    assert!(parse_rates_toml("[other]\nKES = 129.0\n").is_err());
}

#[test]
fn malformed_toml_is_an_error() {
    assert!(parse_rates_toml("rates = [not toml").is_err());
}
