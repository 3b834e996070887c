use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::currency::ExchangeRateTable;

/// 환율 API 주소. USD 기준 전체 테이블을 내려준다.
const EXCHANGE_RATE_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// 환율 조회/로드 오류를 표현한다.
#[derive(Debug)]
pub enum RateError {
    /// HTTP 요청 실패
    Http(reqwest::Error),
    /// 비정상 응답 코드
    Status(u16),
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// rates.toml 파싱 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for RateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateError::Http(e) => write!(f, "환율 API 요청 오류: {e}"),
            RateError::Status(code) => write!(f, "환율 API 응답 오류: HTTP {code}"),
            RateError::Io(e) => write!(f, "환율 파일 입출력 오류: {e}"),
            RateError::Parse(e) => write!(f, "환율 파일 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for RateError {}

impl From<reqwest::Error> for RateError {
    fn from(value: reqwest::Error) -> Self {
        RateError::Http(value)
    }
}

impl From<std::io::Error> for RateError {
    fn from(value: std::io::Error) -> Self {
        RateError::Io(value)
    }
}

impl From<toml::de::Error> for RateError {
    fn from(value: toml::de::Error) -> Self {
        RateError::Parse(value)
    }
}

/// API 응답에서 쓰는 필드만 받는다.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// USD 기준 환율 테이블을 API에서 받아온다. 실패하면 호출자가
/// 기본 테이블(무변환)로 대체한다.
pub fn fetch_usd_rates() -> Result<ExchangeRateTable, RateError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let resp = client.get(EXCHANGE_RATE_URL).send()?;
    if !resp.status().is_success() {
        return Err(RateError::Status(resp.status().as_u16()));
    }
    let body: RatesResponse = resp.json()?;
    Ok(ExchangeRateTable::from_rates(body.rates))
}

/// rates.toml 파일 형식:
///
/// ```toml
/// [rates]
/// KES = 129.0
/// TZS = 2610.0
/// ```
#[derive(Debug, Deserialize)]
struct RatesFile {
    rates: HashMap<String, f64>,
}

/// 로컬 환율 파일을 읽는다.
pub fn load_rates_file(path: &Path) -> Result<ExchangeRateTable, RateError> {
    let content = fs::read_to_string(path)?;
    parse_rates_toml(&content)
}

/// rates.toml 문자열을 파싱한다.
pub fn parse_rates_toml(content: &str) -> Result<ExchangeRateTable, RateError> {
    let file: RatesFile = toml::from_str(content)?;
    Ok(ExchangeRateTable::from_rates(file.rates))
}
