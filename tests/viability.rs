//! 사업성 판정 테스트. 3상태(가능/불가/N/A) 구분과 정의되지 않는 필드 생략을 확인한다.
use solar_productive_calculator::finance::viability::{evaluate, Viability, ViabilityInput};

fn base_input() -> ViabilityInput {
    // 기준 시나리오: 일일 400kg 처리, kg당 5/140 USD, 운영비 10, 상환 4.2168
    ViabilityInput {
        income_per_kg_usd: 5.0 / 140.0,
        production_kg_per_day: 400.0,
        daily_operating_cost_usd: 10.0,
        daily_repayment_usd: 4.2168,
        installed_total_usd: 3700.0,
        operating_days_per_year: 250,
    }
}

#[test]
fn viable_scenario_has_surplus_and_payback() {
    let res = evaluate(base_input());
    assert_eq!(res.verdict, Viability::Viable);
    assert!((res.income_per_day_usd - 14.2857).abs() < 1e-3);
    assert!((res.net_income_per_day_usd - 4.2857).abs() < 1e-3);
    let surplus = res.daily_surplus_usd.expect("surplus");
    assert!((surplus - 0.0689).abs() < 1e-3);
    let payback = res.simple_payback_years.expect("payback");
    assert!((payback - 3.4533).abs() < 1e-3);
}

#[test]
fn not_viable_when_repayment_exceeds_net_income() {
    let mut input = base_input();
    input.daily_repayment_usd = 5.0;
    let res = evaluate(input);
    assert_eq!(res.verdict, Viability::NotViable);
    assert!(res.daily_surplus_usd.is_none());
    assert!(res.simple_payback_years.is_none());
}

#[test]
fn not_applicable_when_net_income_non_positive() {
    let mut input = base_input();
    input.daily_operating_cost_usd = 20.0;
    let res = evaluate(input);
    assert!(res.net_income_per_day_usd < 0.0);
    assert_eq!(res.verdict, Viability::NotApplicable);
    assert!(res.daily_surplus_usd.is_none());
    assert!(res.simple_payback_years.is_none());
}

#[test]
fn not_applicable_when_repayment_non_positive() {
    let mut input = base_input();
    input.daily_repayment_usd = 0.0;
    let res = evaluate(input);
    assert_eq!(res.verdict, Viability::NotApplicable);
    assert!(res.daily_surplus_usd.is_none());
}

#[test]
fn zero_income_yields_zero_repayment_share() {
    let mut input = base_input();
    input.income_per_kg_usd = 0.0;
    let res = evaluate(input);
    assert_eq!(res.income_per_day_usd, 0.0);
    assert_eq!(res.repayment_pct_of_income, 0.0);
    assert_eq!(res.verdict, Viability::NotApplicable);
}

#[test]
fn raising_income_never_breaks_viability() {
    // kg당 수입을 올리면 Viable이 NotViable/N/A로 떨어지지 않는다
    let mut last_viable = false;
    for step in 0..40 {
        let mut input = base_input();
        input.income_per_kg_usd = 0.001 * step as f64;
        let res = evaluate(input);
        let viable = res.verdict == Viability::Viable;
        if last_viable {
            assert!(
                viable,
                "income step {step}: viability lost after being gained"
            );
        }
        last_viable = viable;
    }
    assert!(last_viable, "highest income should be viable");
}
