/// 사업성 판정 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viability {
    /// 일일 순수익이 상환액 이상
    Viable,
    /// 순수익은 있으나 상환액에 미달
    NotViable,
    /// 순수익 또는 상환액이 0 이하라 판정 대상이 아님
    NotApplicable,
}

impl Viability {
    pub fn label(&self) -> &'static str {
        match self {
            Viability::Viable => "가능",
            Viability::NotViable => "불가",
            Viability::NotApplicable => "N/A",
        }
    }
}

/// 수익성 평가 입력값.
#[derive(Debug, Clone)]
pub struct ViabilityInput {
    /// kg당 수입 [USD/kg]
    pub income_per_kg_usd: f64,
    /// 일일 처리량 [kg/일]
    pub production_kg_per_day: f64,
    /// 일일 운영비(인건비, 임차료 등) [USD/일]
    pub daily_operating_cost_usd: f64,
    /// 일일 상환액 [USD/일]
    pub daily_repayment_usd: f64,
    /// 설치 완료 총액 [USD]
    pub installed_total_usd: f64,
    /// 연간 가동 일수 [일]
    pub operating_days_per_year: u32,
}

/// 수익성 평가 결과. 금액은 모두 USD 기준.
#[derive(Debug, Clone)]
pub struct ViabilityResult {
    /// 일일 총수입 [USD/일]
    pub income_per_day_usd: f64,
    /// 연간 총수입 [USD/년]
    pub gross_income_per_year_usd: f64,
    /// 운영비 차감 후 일일 순수익 [USD/일]
    pub net_income_per_day_usd: f64,
    /// 일일 수입 대비 상환 비중 [%]. 수입이 0이면 정책상 0.
    pub repayment_pct_of_income: f64,
    pub verdict: Viability,
    /// 상환 후 일일 잉여 [USD/일]. Viable일 때만 채워진다.
    pub daily_surplus_usd: Option<f64>,
    /// 단순 회수기간 [년]. Viable일 때만 채워진다.
    pub simple_payback_years: Option<f64>,
}

/// 일일 수입/순수익과 상환액을 비교해 사업성을 판정한다.
pub fn evaluate(input: ViabilityInput) -> ViabilityResult {
    let income_per_day = input.income_per_kg_usd * input.production_kg_per_day;
    let gross_income_per_year = income_per_day * input.operating_days_per_year as f64;
    let net_income_per_day = income_per_day - input.daily_operating_cost_usd;

    let repayment_pct_of_income = if income_per_day > 0.0 {
        (input.daily_repayment_usd / income_per_day) * 100.0
    } else {
        0.0
    };

    let verdict = if net_income_per_day > 0.0 && input.daily_repayment_usd > 0.0 {
        if net_income_per_day >= input.daily_repayment_usd {
            Viability::Viable
        } else {
            Viability::NotViable
        }
    } else {
        Viability::NotApplicable
    };

    // Viable이 아니면 잉여/회수기간은 정의하지 않는다 (0으로 채우지 않음)
    let (daily_surplus_usd, simple_payback_years) = if verdict == Viability::Viable {
        let surplus = net_income_per_day - input.daily_repayment_usd;
        let annual_net = net_income_per_day * input.operating_days_per_year as f64;
        (Some(surplus), Some(input.installed_total_usd / annual_net))
    } else {
        (None, None)
    };

    ViabilityResult {
        income_per_day_usd: income_per_day,
        gross_income_per_year_usd: gross_income_per_year,
        net_income_per_day_usd: net_income_per_day,
        repayment_pct_of_income,
        verdict,
        daily_surplus_usd,
        simple_payback_years,
    }
}
