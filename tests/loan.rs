//! 원리금 균등 상환 회귀 테스트.
use solar_productive_calculator::finance::loan::{amortize, LoanCalcError, LoanInput};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn reference_schedule() {
    // 3700 USD, 3년, 연 15%
    let res = amortize(LoanInput {
        installed_total_usd: 3700.0,
        deposit_usd: 0.0,
        loan_term_years: 3,
        annual_interest_rate: 0.15,
    })
    .expect("amortize");
    assert_close("principal", res.principal_usd, 3700.0, 1e-12);
    assert_close("monthly", res.monthly_payment_usd, 128.2617, 1e-4);
    assert_close("annual", res.annual_repayment_usd, 1539.1404, 1e-4);
    assert_close("daily", res.daily_repayment_usd, 4.2168, 1e-3);
}

#[test]
fn amortization_identities() {
    let res = amortize(LoanInput {
        installed_total_usd: 10_000.0,
        deposit_usd: 1_500.0,
        loan_term_years: 5,
        annual_interest_rate: 0.12,
    })
    .expect("amortize");
    let months = 60.0;
    assert_close(
        "total=monthly*months",
        res.monthly_payment_usd * months,
        res.total_repayment_usd,
        1e-12,
    );
    assert_close(
        "interest=total-principal",
        res.total_repayment_usd - res.principal_usd,
        res.total_interest_usd,
        1e-12,
    );
    assert_close(
        "daily=annual/365",
        res.annual_repayment_usd / 365.0,
        res.daily_repayment_usd,
        1e-12,
    );
    assert!(res.total_interest_usd > 0.0);
}

#[test]
fn zero_rate_uses_simple_division() {
    let res = amortize(LoanInput {
        installed_total_usd: 3600.0,
        deposit_usd: 0.0,
        loan_term_years: 3,
        annual_interest_rate: 0.0,
    })
    .expect("amortize");
    assert_close("monthly", res.monthly_payment_usd, 100.0, 1e-12);
    assert_close("interest", res.total_interest_usd, 0.0, 1e-9);
}

#[test]
fn deposit_reduces_principal() {
    let full = amortize(LoanInput {
        installed_total_usd: 5000.0,
        deposit_usd: 0.0,
        loan_term_years: 2,
        annual_interest_rate: 0.1,
    })
    .expect("amortize");
    let half = amortize(LoanInput {
        installed_total_usd: 5000.0,
        deposit_usd: 2500.0,
        loan_term_years: 2,
        annual_interest_rate: 0.1,
    })
    .expect("amortize");
    assert_close("principal", half.principal_usd, 2500.0, 1e-12);
    assert_close(
        "monthly halves",
        half.monthly_payment_usd,
        full.monthly_payment_usd / 2.0,
        1e-9,
    );
}

#[test]
fn rejects_deposit_over_installed_total() {
    let err = amortize(LoanInput {
        installed_total_usd: 1000.0,
        deposit_usd: 1200.0,
        loan_term_years: 3,
        annual_interest_rate: 0.15,
    });
    assert!(matches!(err, Err(LoanCalcError::InvalidInput(_))));
}

#[test]
fn rejects_zero_term_and_negative_inputs() {
    assert!(matches!(
        amortize(LoanInput {
            installed_total_usd: 1000.0,
            deposit_usd: 0.0,
            loan_term_years: 0,
            annual_interest_rate: 0.15,
        }),
        Err(LoanCalcError::InvalidInput(_))
    ));
    assert!(matches!(
        amortize(LoanInput {
            installed_total_usd: 1000.0,
            deposit_usd: -1.0,
            loan_term_years: 3,
            annual_interest_rate: 0.15,
        }),
        Err(LoanCalcError::InvalidInput(_))
    ));
    assert!(matches!(
        amortize(LoanInput {
            installed_total_usd: 1000.0,
            deposit_usd: 0.0,
            loan_term_years: 3,
            annual_interest_rate: -0.01,
        }),
        Err(LoanCalcError::InvalidInput(_))
    ));
}

#[test]
fn full_deposit_means_zero_payments() {
    let res = amortize(LoanInput {
        installed_total_usd: 1000.0,
        deposit_usd: 1000.0,
        loan_term_years: 3,
        annual_interest_rate: 0.15,
    })
    .expect("amortize");
    assert_close("principal", res.principal_usd, 0.0, 1e-12);
    assert_close("monthly", res.monthly_payment_usd, 0.0, 1e-12);
}
