//! 전체 파이프라인 회귀 테스트. 기준 시나리오:
//! Mill 2kW, AC, 4h 가동, 4h 일조, 효율 80%, 배터리 1h, kg당 5/140 USD,
//! 연 250일, 운영비 10, 3년 15% 대출, 보증금 0, 설치 가산 100%.
use solar_productive_calculator::catalog::ComponentCosts;
use solar_productive_calculator::engine::{
    compute_by_name, DisplayCurrency, EngineError, FinancingInputs, SystemInputs,
};
use solar_productive_calculator::finance::viability::Viability;
use solar_productive_calculator::solar::costing::SystemType;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn base_system() -> SystemInputs {
    SystemInputs {
        runtime_hours_per_day: 4.0,
        operating_days_per_year: 250,
        income_per_kg_usd: 5.0 / 140.0,
        sun_hours_per_day: 4.0,
        system_efficiency_pct: 80.0,
        battery_hours: 1.0,
        daily_operating_cost_usd: 10.0,
        system_type: SystemType::Ac,
    }
}

fn base_financing() -> FinancingInputs {
    FinancingInputs {
        loan_term_years: 3,
        annual_interest_rate: 0.15,
        deposit_usd: 0.0,
        install_increase_pct: 100.0,
    }
}

#[test]
fn reference_scenario_end_to_end() {
    let result = compute_by_name(
        "Mill 2kW",
        &base_system(),
        &base_financing(),
        &ComponentCosts::default(),
        DisplayCurrency::usd(),
    )
    .expect("compute");

    // 사이징
    assert_close("energy_required", result.sizing.energy_required_kwh_per_day, 8.0, 1e-12);
    assert_close(
        "energy_production",
        result.sizing.energy_production_kwh_per_day,
        10.0,
        1e-12,
    );
    assert_eq!(result.sizing.panels_required, 5);
    assert_close("size_kwp", result.sizing.recommended_size_kwp, 2.5, 1e-12);
    assert_close("battery_kwh", result.sizing.battery_capacity_kwh, 2.5, 1e-12);

    // 비용 (USD): 600 + 5*50 + 2.5*100 + 2.5*300 = 1850, 가산 100% → 3700
    assert_close("appliance", result.costs.appliance_usd, 600.0, 1e-12);
    assert_close("panels", result.costs.panels_usd, 250.0, 1e-12);
    assert_close("inverter", result.costs.inverter_usd, 250.0, 1e-12);
    assert_close("controller", result.costs.controller_usd, 0.0, 1e-12);
    assert_close("battery", result.costs.battery_usd, 750.0, 1e-12);
    assert_close("fob", result.costs.fob_subtotal_usd, 1850.0, 1e-12);
    assert_close("installed", result.costs.installed_total_usd, 3700.0, 1e-12);

    // 대출
    assert_close("principal", result.loan.principal_usd, 3700.0, 1e-12);
    assert_close("monthly", result.loan.monthly_payment_usd, 128.2617, 1e-4);
    assert_close("daily", result.loan.daily_repayment_usd, 4.2168, 1e-3);

    // 수익성
    assert_eq!(result.viability.verdict, Viability::Viable);
    assert_close(
        "net_income",
        result.viability.net_income_per_day_usd,
        4.2857,
        1e-3,
    );
    assert_close(
        "repayment_pct",
        result.viability.repayment_pct_of_income,
        29.52,
        1e-3,
    );
    let payback = result.viability.simple_payback_years.expect("payback");
    assert_close("payback", payback, 3.4533, 1e-3);
}

#[test]
fn dc_system_uses_controller_instead_of_inverter() {
    let mut system = base_system();
    system.system_type = SystemType::Dc;
    let result = compute_by_name(
        "Mill 2kW",
        &system,
        &base_financing(),
        &ComponentCosts::default(),
        DisplayCurrency::usd(),
    )
    .expect("compute");
    assert_close("inverter", result.costs.inverter_usd, 0.0, 1e-12);
    assert_close("controller", result.costs.controller_usd, 125.0, 1e-12);
    // FOB: 600 + 250 + 125 + 750 = 1725
    assert_close("fob", result.costs.fob_subtotal_usd, 1725.0, 1e-12);
}

#[test]
fn display_conversion_scales_money_but_not_technical_values() {
    let usd = compute_by_name(
        "Mill 2kW",
        &base_system(),
        &base_financing(),
        &ComponentCosts::default(),
        DisplayCurrency::usd(),
    )
    .expect("compute");
    let kes = compute_by_name(
        "Mill 2kW",
        &base_system(),
        &base_financing(),
        &ComponentCosts::default(),
        DisplayCurrency {
            code: "KES".to_string(),
            rate_per_usd: 129.0,
        },
    )
    .expect("compute");

    // 내부 USD 값은 환율과 무관하다
    assert_close(
        "installed unchanged",
        kes.costs.installed_total_usd,
        usd.costs.installed_total_usd,
        1e-12,
    );
    assert_close(
        "monthly unchanged",
        kes.loan.monthly_payment_usd,
        usd.loan.monthly_payment_usd,
        1e-12,
    );

    // 표시 값만 환율 배수가 된다
    let d_usd = usd.to_display();
    let d_kes = kes.to_display();
    assert_close(
        "installed display",
        d_kes.installed_total,
        d_usd.installed_total * 129.0,
        1e-9,
    );
    assert_close(
        "monthly display",
        d_kes.monthly_payment,
        d_usd.monthly_payment * 129.0,
        1e-9,
    );
    assert_eq!(usd.sizing.panels_required, kes.sizing.panels_required);
}

#[test]
fn unknown_appliance_is_rejected() {
    let err = compute_by_name(
        "Sawmill 9kW",
        &base_system(),
        &base_financing(),
        &ComponentCosts::default(),
        DisplayCurrency::usd(),
    );
    match err {
        Err(EngineError::UnknownAppliance(name)) => assert_eq!(name, "Sawmill 9kW"),
        other => panic!("expected UnknownAppliance, got {other:?}"),
    }
}

#[test]
fn lookup_accepts_code_and_ignores_case() {
    assert!(compute_by_name(
        "mill2",
        &base_system(),
        &base_financing(),
        &ComponentCosts::default(),
        DisplayCurrency::usd(),
    )
    .is_ok());
    assert!(compute_by_name(
        "MILL 2KW",
        &base_system(),
        &base_financing(),
        &ComponentCosts::default(),
        DisplayCurrency::usd(),
    )
    .is_ok());
}

#[test]
fn invalid_inputs_are_rejected_at_engine_boundary() {
    let mut system = base_system();
    system.operating_days_per_year = 0;
    assert!(matches!(
        compute_by_name(
            "Mill 2kW",
            &system,
            &base_financing(),
            &ComponentCosts::default(),
            DisplayCurrency::usd(),
        ),
        Err(EngineError::InvalidInput(_))
    ));

    let mut system = base_system();
    system.sun_hours_per_day = 0.0;
    assert!(matches!(
        compute_by_name(
            "Mill 2kW",
            &system,
            &base_financing(),
            &ComponentCosts::default(),
            DisplayCurrency::usd(),
        ),
        Err(EngineError::InvalidInput(_))
    ));

    let mut financing = base_financing();
    financing.install_increase_pct = 150.0;
    assert!(matches!(
        compute_by_name(
            "Mill 2kW",
            &base_system(),
            &financing,
            &ComponentCosts::default(),
            DisplayCurrency::usd(),
        ),
        Err(EngineError::InvalidInput(_))
    ));

    let mut financing = base_financing();
    financing.deposit_usd = 10_000.0;
    assert!(matches!(
        compute_by_name(
            "Mill 2kW",
            &base_system(),
            &financing,
            &ComponentCosts::default(),
            DisplayCurrency::usd(),
        ),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn custom_component_costs_flow_through() {
    // 패널을 1kWp/80USD로 바꾸면 패널 수와 패널 비용이 달라진다
    let costs = ComponentCosts {
        panel_rated_kw: 1.0,
        panel_cost_usd: 80.0,
        ..ComponentCosts::default()
    };
    let result = compute_by_name(
        "Mill 2kW",
        &base_system(),
        &base_financing(),
        &costs,
        DisplayCurrency::usd(),
    )
    .expect("compute");
    assert_eq!(result.sizing.panels_required, 3); // ceil(10 / (1.0*4)) = 3
    assert_close("panels", result.costs.panels_usd, 240.0, 1e-12);
}
