use serde::{Deserialize, Serialize};

/// 시스템 전원 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemType {
    Ac,
    Dc,
}

impl SystemType {
    pub fn label(&self) -> &'static str {
        match self {
            SystemType::Ac => "AC",
            SystemType::Dc => "DC",
        }
    }
}

/// 비용 집계 입력값. 금액은 모두 USD 기준.
#[derive(Debug, Clone)]
pub struct CostingInput {
    /// 기기 가격 [USD]
    pub appliance_price_usd: f64,
    /// 필요 패널 수 [매]
    pub panels_required: u32,
    /// 패널 1매 단가 [USD]
    pub panel_cost_usd: f64,
    /// 권장 시스템 용량 [kWp]
    pub recommended_size_kwp: f64,
    /// 배터리 용량 [kWh]
    pub battery_capacity_kwh: f64,
    pub system_type: SystemType,
    /// 인버터 단가 [USD/kWp]
    pub inverter_usd_per_kwp: f64,
    /// 충전 컨트롤러 단가 [USD/kWp]
    pub controller_usd_per_kwp: f64,
    /// 배터리 단가 [USD/kWh]
    pub battery_usd_per_kwh: f64,
    /// 수입/설치 비용 가산율 [%]
    pub install_increase_pct: f64,
}

/// 비용 집계 결과 [USD].
#[derive(Debug, Clone)]
pub struct CostBreakdown {
    pub appliance_usd: f64,
    pub panels_usd: f64,
    /// AC 시스템이 아니면 0
    pub inverter_usd: f64,
    /// DC 시스템이 아니면 0
    pub controller_usd: f64,
    pub battery_usd: f64,
    /// FOB 소계 (수입/설치 가산 전)
    pub fob_subtotal_usd: f64,
    /// 설치 완료 총액 (가산 후)
    pub installed_total_usd: f64,
}

/// FOB 소계와 설치 총액을 집계한다. 환산 없이 USD로만 계산한다.
pub fn compute_costs(input: CostingInput) -> CostBreakdown {
    let panels_usd = input.panels_required as f64 * input.panel_cost_usd;
    let (inverter_usd, controller_usd) = match input.system_type {
        SystemType::Ac => (input.recommended_size_kwp * input.inverter_usd_per_kwp, 0.0),
        SystemType::Dc => (0.0, input.recommended_size_kwp * input.controller_usd_per_kwp),
    };
    let battery_usd = input.battery_capacity_kwh * input.battery_usd_per_kwh;
    let fob_subtotal_usd =
        input.appliance_price_usd + panels_usd + inverter_usd + controller_usd + battery_usd;
    let installed_total_usd = fob_subtotal_usd * (1.0 + input.install_increase_pct / 100.0);

    CostBreakdown {
        appliance_usd: input.appliance_price_usd,
        panels_usd,
        inverter_usd,
        controller_usd,
        battery_usd,
        fob_subtotal_usd,
        installed_total_usd,
    }
}
