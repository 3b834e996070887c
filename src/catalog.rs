/// 생산설비(제분기 등) 사양 테이블과 태양광 부품 기본 단가를 제공한다.
/// 값은 참고용 목록가이며 실제 견적 시 공급사 가격으로 검증해야 한다.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct ApplianceData {
    pub code: &'static str,
    pub name: &'static str,
    /// 정격 소비전력 [kW]
    pub rated_power_kw: f64,
    /// 기기 가격 [USD]
    pub price_usd: f64,
    /// 처리 속도 [kg/h]
    pub processing_rate_kg_per_hr: f64,
    pub notes: &'static str,
}

pub fn appliances() -> &'static [ApplianceData] {
    APPLIANCES
}

pub fn find_appliance(key: &str) -> Option<&'static ApplianceData> {
    APPLIANCES
        .iter()
        .find(|a| a.code.eq_ignore_ascii_case(key) || a.name.eq_ignore_ascii_case(key))
}

const APPLIANCES: &[ApplianceData] = &[
    ApplianceData {
        code: "MILL2",
        name: "Mill 2kW",
        rated_power_kw: 2.0,
        price_usd: 600.0,
        processing_rate_kg_per_hr: 100.0,
        notes: "Grain mill; 기준 모델",
    },
    ApplianceData {
        code: "MILL3",
        name: "Mill 3kW",
        rated_power_kw: 3.0,
        price_usd: 800.0,
        processing_rate_kg_per_hr: 150.0,
        notes: "Grain mill; 대용량",
    },
    ApplianceData {
        code: "HULLER15",
        name: "Huller 1.5kW",
        rated_power_kw: 1.5,
        price_usd: 450.0,
        processing_rate_kg_per_hr: 120.0,
        notes: "Rice/coffee huller; 참고용 목록가",
    },
    ApplianceData {
        code: "PRESS22",
        name: "Oil Press 2.2kW",
        rated_power_kw: 2.2,
        price_usd: 1200.0,
        processing_rate_kg_per_hr: 40.0,
        notes: "Cold oil press; 참고용 목록가",
    },
];

/// 패널 1매 정격 [kWp]
pub const PANEL_RATED_KW: f64 = 0.5;
/// 패널 1매 단가 [USD]
pub const PANEL_COST_USD: f64 = 50.0;
/// AC 시스템 인버터 단가 [USD/kWp]
pub const INVERTER_USD_PER_KWP: f64 = 100.0;
/// DC 시스템 충전 컨트롤러 단가 [USD/kWp]
pub const CONTROLLER_USD_PER_KWP: f64 = 50.0;
/// 배터리 단가 [USD/kWh]
pub const BATTERY_USD_PER_KWH: f64 = 300.0;

/// 부품 단가 설정. config.toml에서 덮어쓸 수 있다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentCosts {
    /// 패널 1매 정격 [kWp]
    pub panel_rated_kw: f64,
    /// 패널 1매 단가 [USD]
    pub panel_cost_usd: f64,
    /// 인버터 단가 [USD/kWp] (AC 시스템)
    pub inverter_usd_per_kwp: f64,
    /// 충전 컨트롤러 단가 [USD/kWp] (DC 시스템)
    pub controller_usd_per_kwp: f64,
    /// 배터리 단가 [USD/kWh]
    pub battery_usd_per_kwh: f64,
}

impl Default for ComponentCosts {
    fn default() -> Self {
        Self {
            panel_rated_kw: PANEL_RATED_KW,
            panel_cost_usd: PANEL_COST_USD,
            inverter_usd_per_kwp: INVERTER_USD_PER_KWP,
            controller_usd_per_kwp: CONTROLLER_USD_PER_KWP,
            battery_usd_per_kwh: BATTERY_USD_PER_KWH,
        }
    }
}
