use crate::catalog::{self, ApplianceData, ComponentCosts};
use crate::currency::{self, ExchangeRateTable};
use crate::finance::loan::{self, LoanCalcError, LoanInput, LoanSchedule};
use crate::finance::viability::{self, ViabilityInput, ViabilityResult};
use crate::solar::costing::{self, CostBreakdown, CostingInput, SystemType};
use crate::solar::sizing::{self, SizingError, SizingInput, SizingResult};

/// 계산 파이프라인 오류를 표현한다.
#[derive(Debug)]
pub enum EngineError {
    /// 카탈로그에 없는 기기 이름
    UnknownAppliance(String),
    /// 기기/시스템 방식이 선택되지 않음. 계산 전에 호출자가 확인한다.
    MissingSelection(&'static str),
    /// 잘못된 입력값
    InvalidInput(&'static str),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::UnknownAppliance(name) => write!(f, "알 수 없는 기기: {name}"),
            EngineError::MissingSelection(what) => write!(f, "선택되지 않음: {what}"),
            EngineError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<SizingError> for EngineError {
    fn from(value: SizingError) -> Self {
        match value {
            SizingError::InvalidInput(msg) => EngineError::InvalidInput(msg),
        }
    }
}

impl From<LoanCalcError> for EngineError {
    fn from(value: LoanCalcError) -> Self {
        match value {
            LoanCalcError::InvalidInput(msg) => EngineError::InvalidInput(msg),
        }
    }
}

/// 운전/현장 조건 입력값.
#[derive(Debug, Clone)]
pub struct SystemInputs {
    /// 일일 가동 시간 [h/일]
    pub runtime_hours_per_day: f64,
    /// 연간 가동 일수 [일]
    pub operating_days_per_year: u32,
    /// kg당 수입 [USD/kg]
    pub income_per_kg_usd: f64,
    /// 일일 평균 일조 시간 [h/일]
    pub sun_hours_per_day: f64,
    /// 시스템 종합 효율 [%]
    pub system_efficiency_pct: f64,
    /// 배터리 백업 시간 [h]
    pub battery_hours: f64,
    /// 일일 운영비(인건비, 임차료 등) [USD/일]
    pub daily_operating_cost_usd: f64,
    pub system_type: SystemType,
}

/// 금융 조건 입력값.
#[derive(Debug, Clone)]
pub struct FinancingInputs {
    /// 대출 기간 [년]
    pub loan_term_years: u32,
    /// 연 이자율 (소수, 0.15 = 15%)
    pub annual_interest_rate: f64,
    /// 보증금(선납) [USD]
    pub deposit_usd: f64,
    /// 수입/설치 비용 가산율 [%] (0~100)
    pub install_increase_pct: f64,
}

/// 표시 통화와 USD당 환율.
#[derive(Debug, Clone)]
pub struct DisplayCurrency {
    pub code: String,
    pub rate_per_usd: f64,
}

impl DisplayCurrency {
    pub fn usd() -> Self {
        Self {
            code: "USD".to_string(),
            rate_per_usd: 1.0,
        }
    }

    /// 테이블에서 환율을 찾는다. 없는 코드는 1.0(무변환)으로 처리된다.
    pub fn from_table(code: &str, table: &ExchangeRateTable) -> Self {
        Self {
            code: code.to_ascii_uppercase(),
            rate_per_usd: table.rate_for(code),
        }
    }
}

/// 한 번의 계산 호출이 만들어내는 전체 결과. 금액 필드는 모두 USD 기준이며
/// 표시 환산은 to_display()에서만 일어난다.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    pub appliance: ApplianceData,
    pub system_type: SystemType,
    pub sizing: SizingResult,
    pub costs: CostBreakdown,
    pub loan: LoanSchedule,
    pub viability: ViabilityResult,
    pub display: DisplayCurrency,
}

/// 표시 통화로 환산된 사용자 표시용 금액 모음.
#[derive(Debug, Clone)]
pub struct DisplayReport {
    pub currency: String,
    pub rate_per_usd: f64,
    pub appliance_cost: f64,
    pub panel_cost: f64,
    pub inverter_cost: f64,
    pub controller_cost: f64,
    pub battery_cost: f64,
    pub fob_subtotal: f64,
    pub installed_total: f64,
    pub loan_principal: f64,
    pub monthly_payment: f64,
    pub total_repayment: f64,
    pub total_interest: f64,
    pub daily_repayment: f64,
    pub income_per_day: f64,
    pub net_income_per_day: f64,
    pub gross_income_per_year: f64,
    /// Viable일 때만 채워진다.
    pub daily_surplus: Option<f64>,
}

impl CalculationResult {
    /// 표시 환산 경계. 여기서 한 번만 환율을 곱하며, 환산값이 계산으로
    /// 되돌아가는 일은 없다.
    pub fn to_display(&self) -> DisplayReport {
        let r = self.display.rate_per_usd;
        DisplayReport {
            currency: self.display.code.clone(),
            rate_per_usd: r,
            appliance_cost: currency::convert(self.costs.appliance_usd, r),
            panel_cost: currency::convert(self.costs.panels_usd, r),
            inverter_cost: currency::convert(self.costs.inverter_usd, r),
            controller_cost: currency::convert(self.costs.controller_usd, r),
            battery_cost: currency::convert(self.costs.battery_usd, r),
            fob_subtotal: currency::convert(self.costs.fob_subtotal_usd, r),
            installed_total: currency::convert(self.costs.installed_total_usd, r),
            loan_principal: currency::convert(self.loan.principal_usd, r),
            monthly_payment: currency::convert(self.loan.monthly_payment_usd, r),
            total_repayment: currency::convert(self.loan.total_repayment_usd, r),
            total_interest: currency::convert(self.loan.total_interest_usd, r),
            daily_repayment: currency::convert(self.loan.daily_repayment_usd, r),
            income_per_day: currency::convert(self.viability.income_per_day_usd, r),
            net_income_per_day: currency::convert(self.viability.net_income_per_day_usd, r),
            gross_income_per_year: currency::convert(self.viability.gross_income_per_year_usd, r),
            daily_surplus: self
                .viability
                .daily_surplus_usd
                .map(|usd| currency::convert(usd, r)),
        }
    }
}

/// 전체 파이프라인: 사이징 → 비용 집계 → 대출 상환 → 수익성 평가.
/// 외부 I/O 없이 입력만으로 결정되는 순수 계산이다.
pub fn compute(
    appliance: &ApplianceData,
    system: &SystemInputs,
    financing: &FinancingInputs,
    costs_cfg: &ComponentCosts,
    display: DisplayCurrency,
) -> Result<CalculationResult, EngineError> {
    validate_inputs(system, financing)?;

    let sizing = sizing::compute_sizing(SizingInput {
        rated_power_kw: appliance.rated_power_kw,
        runtime_hours_per_day: system.runtime_hours_per_day,
        sun_hours_per_day: system.sun_hours_per_day,
        system_efficiency_pct: system.system_efficiency_pct,
        battery_hours: system.battery_hours,
        processing_rate_kg_per_hr: appliance.processing_rate_kg_per_hr,
        panel_rated_kw: costs_cfg.panel_rated_kw,
    })?;

    let costs = costing::compute_costs(CostingInput {
        appliance_price_usd: appliance.price_usd,
        panels_required: sizing.panels_required,
        panel_cost_usd: costs_cfg.panel_cost_usd,
        recommended_size_kwp: sizing.recommended_size_kwp,
        battery_capacity_kwh: sizing.battery_capacity_kwh,
        system_type: system.system_type,
        inverter_usd_per_kwp: costs_cfg.inverter_usd_per_kwp,
        controller_usd_per_kwp: costs_cfg.controller_usd_per_kwp,
        battery_usd_per_kwh: costs_cfg.battery_usd_per_kwh,
        install_increase_pct: financing.install_increase_pct,
    });

    let loan = loan::amortize(LoanInput {
        installed_total_usd: costs.installed_total_usd,
        deposit_usd: financing.deposit_usd,
        loan_term_years: financing.loan_term_years,
        annual_interest_rate: financing.annual_interest_rate,
    })?;

    let viability = viability::evaluate(ViabilityInput {
        income_per_kg_usd: system.income_per_kg_usd,
        production_kg_per_day: sizing.production_kg_per_day,
        daily_operating_cost_usd: system.daily_operating_cost_usd,
        daily_repayment_usd: loan.daily_repayment_usd,
        installed_total_usd: costs.installed_total_usd,
        operating_days_per_year: system.operating_days_per_year,
    });

    Ok(CalculationResult {
        appliance: *appliance,
        system_type: system.system_type,
        sizing,
        costs,
        loan,
        viability,
        display,
    })
}

/// 이름(코드 또는 표시명)으로 카탈로그를 조회한 뒤 compute를 수행한다.
pub fn compute_by_name(
    appliance_name: &str,
    system: &SystemInputs,
    financing: &FinancingInputs,
    costs_cfg: &ComponentCosts,
    display: DisplayCurrency,
) -> Result<CalculationResult, EngineError> {
    let appliance = catalog::find_appliance(appliance_name)
        .ok_or_else(|| EngineError::UnknownAppliance(appliance_name.to_string()))?;
    compute(appliance, system, financing, costs_cfg, display)
}

fn validate_inputs(system: &SystemInputs, financing: &FinancingInputs) -> Result<(), EngineError> {
    if system.operating_days_per_year == 0 {
        return Err(EngineError::InvalidInput(
            "연간 가동 일수는 1일 이상이어야 합니다.",
        ));
    }
    if system.income_per_kg_usd < 0.0 {
        return Err(EngineError::InvalidInput("kg당 수입은 음수가 될 수 없습니다."));
    }
    if financing.install_increase_pct < 0.0 || financing.install_increase_pct > 100.0 {
        return Err(EngineError::InvalidInput(
            "수입/설치 가산율은 0~100% 범위여야 합니다.",
        ));
    }
    Ok(())
}
