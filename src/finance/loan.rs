/// 대출 계산 오류를 표현한다.
#[derive(Debug)]
pub enum LoanCalcError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for LoanCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanCalcError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for LoanCalcError {}

/// 원리금 균등 상환 계산 입력값.
#[derive(Debug, Clone)]
pub struct LoanInput {
    /// 설치 완료 총액 [USD]
    pub installed_total_usd: f64,
    /// 보증금(선납) [USD]
    pub deposit_usd: f64,
    /// 대출 기간 [년]
    pub loan_term_years: u32,
    /// 연 이자율 (소수, 0.15 = 15%)
    pub annual_interest_rate: f64,
}

/// 상환 스케줄 요약 [USD].
#[derive(Debug, Clone)]
pub struct LoanSchedule {
    pub principal_usd: f64,
    pub monthly_payment_usd: f64,
    pub total_repayment_usd: f64,
    pub total_interest_usd: f64,
    pub annual_repayment_usd: f64,
    pub daily_repayment_usd: f64,
}

/// 고정금리 원리금 균등 상환 스케줄을 계산한다. 이자율 0이면 단순 분할 상환.
pub fn amortize(input: LoanInput) -> Result<LoanSchedule, LoanCalcError> {
    if input.loan_term_years < 1 {
        return Err(LoanCalcError::InvalidInput("대출 기간은 1년 이상이어야 합니다."));
    }
    if input.annual_interest_rate < 0.0 {
        return Err(LoanCalcError::InvalidInput("연 이자율은 음수가 될 수 없습니다."));
    }
    if input.deposit_usd < 0.0 {
        return Err(LoanCalcError::InvalidInput("보증금은 음수가 될 수 없습니다."));
    }
    if input.deposit_usd > input.installed_total_usd {
        return Err(LoanCalcError::InvalidInput(
            "보증금이 설치 총액을 초과할 수 없습니다.",
        ));
    }

    let principal = input.installed_total_usd - input.deposit_usd;
    let months = input.loan_term_years * 12;
    let monthly_rate = input.annual_interest_rate / 12.0;

    let monthly_payment = if monthly_rate > 0.0 {
        principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-(months as i32)))
    } else {
        principal / months as f64
    };

    let total_repayment = monthly_payment * months as f64;
    let annual_repayment = monthly_payment * 12.0;

    Ok(LoanSchedule {
        principal_usd: principal,
        monthly_payment_usd: monthly_payment,
        total_repayment_usd: total_repayment,
        total_interest_usd: total_repayment - principal,
        annual_repayment_usd: annual_repayment,
        daily_repayment_usd: annual_repayment / 365.0,
    })
}
