/// 사이징 계산 오류를 표현한다.
#[derive(Debug)]
pub enum SizingError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for SizingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for SizingError {}

/// 에너지·어레이 사이징 입력값.
#[derive(Debug, Clone)]
pub struct SizingInput {
    /// 기기 정격 전력 [kW]
    pub rated_power_kw: f64,
    /// 일일 가동 시간 [h/일]
    pub runtime_hours_per_day: f64,
    /// 일일 평균 일조 시간 [h/일]
    pub sun_hours_per_day: f64,
    /// 시스템 종합 효율 [%] (0 초과 100 이하)
    pub system_efficiency_pct: f64,
    /// 배터리 백업 시간 [h]
    pub battery_hours: f64,
    /// 기기 처리 속도 [kg/h]
    pub processing_rate_kg_per_hr: f64,
    /// 패널 1매 정격 [kWp]
    pub panel_rated_kw: f64,
}

/// 사이징 결과.
#[derive(Debug, Clone)]
pub struct SizingResult {
    /// 비효율(처리량/에너지) [kg/kWh]. 기기 선택만으로 정해진다.
    pub specific_efficiency_kg_per_kwh: f64,
    /// 일일 필요 에너지 [kWh/일]
    pub energy_required_kwh_per_day: f64,
    /// 손실을 반영해 어레이가 내야 하는 일일 에너지 [kWh/일]
    pub energy_production_kwh_per_day: f64,
    /// 일일 처리량 [kg/일]
    pub production_kg_per_day: f64,
    /// 필요 패널 수 [매]
    pub panels_required: u32,
    /// 권장 시스템 용량 [kWp]. 0.5 kWp 단위로 올림한다.
    pub recommended_size_kwp: f64,
    /// 배터리 용량 [kWh]
    pub battery_capacity_kwh: f64,
}

/// 기기 정격과 현장 조건으로 어레이/배터리 사이징을 계산한다.
pub fn compute_sizing(input: SizingInput) -> Result<SizingResult, SizingError> {
    if input.rated_power_kw <= 0.0 {
        return Err(SizingError::InvalidInput("기기 정격 전력은 0보다 커야 합니다."));
    }
    if input.runtime_hours_per_day <= 0.0 {
        return Err(SizingError::InvalidInput("일일 가동 시간은 0보다 커야 합니다."));
    }
    if input.sun_hours_per_day <= 0.0 {
        return Err(SizingError::InvalidInput("일조 시간은 0보다 커야 합니다."));
    }
    if input.system_efficiency_pct <= 0.0 || input.system_efficiency_pct > 100.0 {
        return Err(SizingError::InvalidInput(
            "시스템 효율은 0 초과 100 이하(%)여야 합니다.",
        ));
    }
    if input.panel_rated_kw <= 0.0 {
        return Err(SizingError::InvalidInput("패널 정격은 0보다 커야 합니다."));
    }
    if input.battery_hours < 0.0 || input.processing_rate_kg_per_hr < 0.0 {
        return Err(SizingError::InvalidInput(
            "배터리 시간과 처리 속도는 음수가 될 수 없습니다.",
        ));
    }

    let specific_efficiency = input.processing_rate_kg_per_hr / input.rated_power_kw;
    let energy_required = input.runtime_hours_per_day * input.rated_power_kw;
    let energy_production = energy_required / (input.system_efficiency_pct / 100.0);
    let production_per_day = specific_efficiency * energy_required;

    // 패널 1매가 하루에 내는 에너지 기준으로 올림
    let panel_energy_per_day = input.panel_rated_kw * input.sun_hours_per_day;
    let panels_required = (energy_production / panel_energy_per_day).ceil() as u32;

    // 0.5 kWp 단위 올림
    let recommended_size_kwp = ((energy_production / input.sun_hours_per_day) * 2.0).ceil() / 2.0;
    let battery_capacity_kwh = recommended_size_kwp * input.battery_hours;

    Ok(SizingResult {
        specific_efficiency_kg_per_kwh: specific_efficiency,
        energy_required_kwh_per_day: energy_required,
        energy_production_kwh_per_day: energy_production,
        production_kg_per_day: production_per_day,
        panels_required,
        recommended_size_kwp,
        battery_capacity_kwh,
    })
}
