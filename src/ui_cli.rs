use std::io::{self, Write};

use crate::app::AppError;
use crate::catalog::{self, ApplianceData};
use crate::config::Config;
use crate::currency::ExchangeRateTable;
use crate::engine::{self, DisplayCurrency, FinancingInputs, SystemInputs};
use crate::finance::viability::Viability;
use crate::rates;
use crate::solar::costing::SystemType;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Catalog,
    Rates,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Solar Productive Use Calculator ===");
    println!("1) 시스템 계산");
    println!("2) 기기 카탈로그");
    println!("3) 환율 조회/갱신");
    println!("4) 설정 (부품 단가)");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Catalog),
            "3" => return Ok(MenuChoice::Rates),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 계산 메뉴를 처리한다. 입력을 모아 엔진을 호출하고 결과 보고서를 출력한다.
/// 계산 오류는 메시지만 출력하고 메뉴로 돌아가 재입력을 허용한다.
pub fn handle_calculation(cfg: &Config, table: &ExchangeRateTable) -> Result<(), AppError> {
    println!("\n-- 시스템 계산 --");
    let Some(appliance) = select_appliance()? else {
        println!("오류: {}", engine::EngineError::MissingSelection("생산 기기"));
        return Ok(());
    };
    let Some(system_type) = select_system_type()? else {
        println!("오류: {}", engine::EngineError::MissingSelection("AC/DC 방식"));
        return Ok(());
    };

    let runtime = read_f64_default("일일 가동 시간 [h] ", 4.0)?;
    let operating_days = read_u32_default("연간 가동 일수 ", 250)?;
    let income_per_kg = read_f64_default("kg당 수입 [USD] ", 5.0 / 140.0)?;
    let sun_hours = read_f64_default("일일 일조 시간 [h] ", 4.0)?;
    let efficiency = read_f64_default("시스템 효율 [%] ", 80.0)?;
    let battery_hours = read_f64_default("배터리 백업 시간 [h] ", 1.0)?;
    let operating_cost = read_f64_default("일일 운영비 [USD] ", 10.0)?;
    let loan_term = read_u32_default("대출 기간 [년] ", 3)?;
    let interest_pct = read_f64_default("연 이자율 [%] ", 15.0)?;
    let deposit = read_f64_default("보증금 [USD] ", 0.0)?;
    let install_pct = read_f64_default("수입/설치 가산율 [%] ", 100.0)?;

    let system = SystemInputs {
        runtime_hours_per_day: runtime,
        operating_days_per_year: operating_days,
        income_per_kg_usd: income_per_kg,
        sun_hours_per_day: sun_hours,
        system_efficiency_pct: efficiency,
        battery_hours,
        daily_operating_cost_usd: operating_cost,
        system_type,
    };
    let financing = FinancingInputs {
        loan_term_years: loan_term,
        annual_interest_rate: interest_pct / 100.0,
        deposit_usd: deposit,
        install_increase_pct: install_pct,
    };
    let display = DisplayCurrency::from_table(&cfg.display_currency, table);

    match engine::compute(appliance, &system, &financing, &cfg.component_costs, display) {
        Ok(result) => print_report(&result, &system),
        Err(e) => println!("오류: {e}"),
    }
    Ok(())
}

fn select_appliance() -> Result<Option<&'static ApplianceData>, AppError> {
    println!("생산 기기:");
    for (i, a) in catalog::appliances().iter().enumerate() {
        println!(
            "{}) {} ({:.1}kW, {:.0} kg/h, {:.0} USD)",
            i + 1,
            a.name,
            a.rated_power_kw,
            a.processing_rate_kg_per_hr,
            a.price_usd
        );
    }
    println!("0) 선택 안 함");
    loop {
        let sel = read_line("기기 선택: ")?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if n == 0 {
                return Ok(None);
            }
            if let Some(a) = catalog::appliances().get(n - 1) {
                return Ok(Some(a));
            }
        }
        println!("잘못된 입력입니다. 다시 선택하세요.");
    }
}

fn select_system_type() -> Result<Option<SystemType>, AppError> {
    println!("시스템 방식: 1) AC  2) DC  0) 선택 안 함");
    loop {
        let sel = read_line("방식 선택: ")?;
        match sel.trim() {
            "1" => return Ok(Some(SystemType::Ac)),
            "2" => return Ok(Some(SystemType::Dc)),
            "0" => return Ok(None),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 결과 보고서를 4개 섹션(개요/기술/비용·대출/수익성)으로 출력한다.
/// 반올림은 여기 표시 단계에서만 한다.
fn print_report(result: &engine::CalculationResult, system: &SystemInputs) {
    let d = result.to_display();
    let cur = d.currency.as_str();
    let s = &result.sizing;
    let v = &result.viability;

    println!("\n[개요]");
    println!(
        "기기: {} ({:.1}kW, {} 시스템)",
        result.appliance.name,
        result.appliance.rated_power_kw,
        result.system_type.label()
    );
    println!(
        "가동: {:.1} h/일, {} 일/년",
        system.runtime_hours_per_day, system.operating_days_per_year
    );
    println!("권장 시스템 용량: {:.1} kWp", s.recommended_size_kwp);
    println!("필요 패널 수: {} 매", s.panels_required);
    println!(
        "배터리: {:.1} kWh ({:.1} 시간 백업)",
        s.battery_capacity_kwh, system.battery_hours
    );

    println!("\n[기술]");
    println!("일일 필요 에너지: {:.1} kWh", s.energy_required_kwh_per_day);
    println!(
        "일일 생산 목표 에너지: {:.1} kWh (효율 {:.0}%)",
        s.energy_production_kwh_per_day, system.system_efficiency_pct
    );
    println!("일일 처리량: {:.1} kg", s.production_kg_per_day);
    println!(
        "비효율: {:.2} kg/kWh",
        s.specific_efficiency_kg_per_kwh
    );

    println!("\n[비용/대출] (통화: {cur})");
    println!("기기 비용: {:.1}", d.appliance_cost);
    println!("패널 비용: {:.1}", d.panel_cost);
    match result.system_type {
        SystemType::Ac => println!("인버터 비용: {:.1}", d.inverter_cost),
        SystemType::Dc => println!("컨트롤러 비용: {:.1}", d.controller_cost),
    }
    println!("배터리 비용: {:.1}", d.battery_cost);
    println!("FOB 소계: {:.1}", d.fob_subtotal);
    println!("설치 완료 총액: {:.1}", d.installed_total);
    println!("대출 원금: {:.1}", d.loan_principal);
    println!("월 상환액: {:.1}", d.monthly_payment);
    println!("총 상환액: {:.1} (이자 {:.1})", d.total_repayment, d.total_interest);
    println!("일일 상환액: {:.1}", d.daily_repayment);

    println!("\n[수익성]");
    println!("사업성 판정: {}", v.verdict.label());
    println!("일일 총수입: {:.1} {cur}", d.income_per_day);
    println!("일일 순수익: {:.1} {cur}", d.net_income_per_day);
    println!("연간 총수입: {:.1} {cur}", d.gross_income_per_year);
    println!("수입 대비 상환 비중: {:.1} %", v.repayment_pct_of_income);
    if let Some(surplus) = d.daily_surplus {
        println!("일일 잉여: {:.1} {cur}", surplus);
    }
    if let Some(payback) = v.simple_payback_years {
        println!("단순 회수기간: {:.1} 년", payback);
    }
    if v.verdict != Viability::Viable {
        println!("(사업성이 확보되지 않아 잉여/회수기간은 표시하지 않습니다)");
    }
    println!("적용 환율: 1 USD = {:.2} {cur}", d.rate_per_usd);
}

/// 기기 카탈로그를 출력한다.
pub fn handle_catalog() -> Result<(), AppError> {
    println!("\n-- 기기 카탈로그 --");
    println!("{:<10} {:<16} {:>7} {:>9} {:>10}", "코드", "이름", "kW", "kg/h", "USD");
    for a in catalog::appliances() {
        println!(
            "{:<10} {:<16} {:>7.1} {:>9.0} {:>10.0}  {}",
            a.code, a.name, a.rated_power_kw, a.processing_rate_kg_per_hr, a.price_usd, a.notes
        );
    }
    Ok(())
}

/// 환율 메뉴를 처리한다.
pub fn handle_rates(cfg: &mut Config, table: &mut ExchangeRateTable) -> Result<(), AppError> {
    println!("\n-- 환율 --");
    println!(
        "표시 통화: {} (1 USD = {:.4}) / 테이블 {}건",
        cfg.display_currency,
        table.rate_for(&cfg.display_currency),
        table.len()
    );
    println!("1) 표시 통화 변경  2) 온라인 갱신  0) 뒤로");
    loop {
        let sel = read_line("선택: ")?;
        match sel.trim() {
            "1" => {
                let code = read_line("통화 코드 (예: KES): ")?;
                let code = code.trim().to_ascii_uppercase();
                if code.is_empty() {
                    println!("통화 코드가 비었습니다.");
                    continue;
                }
                if !table.contains(&code) {
                    println!("환율 테이블에 없는 통화입니다. 1.0(무변환)으로 처리됩니다.");
                }
                cfg.display_currency = code;
                return Ok(());
            }
            "2" => {
                match rates::fetch_usd_rates() {
                    Ok(t) => {
                        *table = t;
                        println!("환율 {}건을 받았습니다.", table.len());
                    }
                    Err(e) => println!("환율 조회 실패: {e} (기존 테이블 유지)"),
                }
                return Ok(());
            }
            "0" => return Ok(()),
            _ => println!("잘못된 입력입니다."),
        }
    }
}

/// 부품 단가 설정을 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 (부품 단가) --");
    let c = &mut cfg.component_costs;
    c.panel_rated_kw = read_f64_default("패널 정격 [kWp] ", c.panel_rated_kw)?;
    c.panel_cost_usd = read_f64_default("패널 단가 [USD/매] ", c.panel_cost_usd)?;
    c.inverter_usd_per_kwp = read_f64_default("인버터 단가 [USD/kWp] ", c.inverter_usd_per_kwp)?;
    c.controller_usd_per_kwp =
        read_f64_default("컨트롤러 단가 [USD/kWp] ", c.controller_usd_per_kwp)?;
    c.battery_usd_per_kwh = read_f64_default("배터리 단가 [USD/kWh] ", c.battery_usd_per_kwh)?;
    println!("저장되었습니다.");
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

/// 빈 입력이면 기본값을 쓴다.
fn read_f64_default(prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let line = read_line(&format!("{prompt}[기본 {default}]: "))?;
        let t = line.trim();
        if t.is_empty() {
            return Ok(default);
        }
        if let Ok(v) = t.parse::<f64>() {
            return Ok(v);
        }
        println!("숫자를 입력하세요.");
    }
}

fn read_u32_default(prompt: &str, default: u32) -> Result<u32, AppError> {
    loop {
        let line = read_line(&format!("{prompt}[기본 {default}]: "))?;
        let t = line.trim();
        if t.is_empty() {
            return Ok(default);
        }
        if let Ok(v) = t.parse::<u32>() {
            return Ok(v);
        }
        println!("정수를 입력하세요.");
    }
}
