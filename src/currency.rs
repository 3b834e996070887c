use std::collections::HashMap;

use sys_locale::get_locale;

/// 통화 코드 → USD당 환율 테이블. 외부 공급자가 채워주는 읽기 전용 데이터이며
/// 표시 환산에만 쓰인다. 내부 계산은 항상 USD 기준이다.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateTable {
    rates: HashMap<String, f64>,
}

impl ExchangeRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rates<I>(rates: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        Self {
            rates: rates
                .into_iter()
                .map(|(code, rate)| (code.to_ascii_uppercase(), rate))
                .collect(),
        }
    }

    pub fn insert(&mut self, code: &str, rate_per_usd: f64) {
        self.rates.insert(code.to_ascii_uppercase(), rate_per_usd);
    }

    /// 알 수 없는 통화(빈 테이블 포함)는 1.0(무변환)으로 처리한다.
    pub fn rate_for(&self, code: &str) -> f64 {
        if code.eq_ignore_ascii_case("USD") {
            return 1.0;
        }
        self.rates
            .get(&code.to_ascii_uppercase())
            .copied()
            .unwrap_or(1.0)
    }

    pub fn contains(&self, code: &str) -> bool {
        code.eq_ignore_ascii_case("USD") || self.rates.contains_key(&code.to_ascii_uppercase())
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// USD를 맨 앞에 두고 나머지는 코드순으로 정렬해 반환한다.
    pub fn currencies(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .rates
            .keys()
            .filter(|c| c.as_str() != "USD")
            .cloned()
            .collect();
        codes.sort();
        let mut out = vec!["USD".to_string()];
        out.extend(codes);
        out
    }
}

/// 표시용 환산. USD 금액에 환율을 곱하기만 하며 내부 계산에는 쓰지 않는다.
pub fn convert(amount_usd: f64, rate_per_usd: f64) -> f64 {
    amount_usd * rate_per_usd
}

/// 시스템 로케일의 지역 코드로 기본 표시 통화를 추정한다.
pub fn locale_currency() -> Option<&'static str> {
    let locale = get_locale()?;
    let region = locale.rsplit(['-', '_']).next()?.to_ascii_uppercase();
    region_currency(&region)
}

/// 지역 코드 → 통화 코드. 환율 API가 제공하는 주요 통화만 다룬다.
pub fn region_currency(region: &str) -> Option<&'static str> {
    REGION_CURRENCIES
        .iter()
        .find(|(r, _)| r.eq_ignore_ascii_case(region))
        .map(|(_, c)| *c)
}

const REGION_CURRENCIES: &[(&str, &str)] = &[
    ("US", "USD"),
    ("KE", "KES"),
    ("TZ", "TZS"),
    ("UG", "UGX"),
    ("NG", "NGN"),
    ("GH", "GHS"),
    ("ZA", "ZAR"),
    ("ZM", "ZMW"),
    ("MW", "MWK"),
    ("RW", "RWF"),
    ("ET", "ETB"),
    ("EG", "EGP"),
    ("MA", "MAD"),
    ("GB", "GBP"),
    ("DE", "EUR"),
    ("FR", "EUR"),
    ("ES", "EUR"),
    ("IT", "EUR"),
    ("NL", "EUR"),
    ("PT", "EUR"),
    ("IE", "EUR"),
    ("KR", "KRW"),
    ("JP", "JPY"),
    ("CN", "CNY"),
    ("IN", "INR"),
    ("PK", "PKR"),
    ("BD", "BDT"),
    ("ID", "IDR"),
    ("PH", "PHP"),
    ("VN", "VND"),
    ("AU", "AUD"),
    ("NZ", "NZD"),
    ("CA", "CAD"),
    ("BR", "BRL"),
    ("MX", "MXN"),
    ("PE", "PEN"),
    ("CO", "COP"),
];
