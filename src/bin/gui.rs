#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점. 입력 폼 하나와 결과 패널로 구성한다.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, path::Path};

use solar_productive_calculator::{
    catalog, config,
    currency::{self, ExchangeRateTable},
    engine::{self, CalculationResult, DisplayCurrency, FinancingInputs, SystemInputs},
    finance::viability::Viability,
    rates,
    solar::costing::SystemType,
};

fn main() -> Result<(), eframe::Error> {
    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app_cfg = config::load_or_default().unwrap_or_default();
    eframe::run_native(
        "Solar Productive Use Calculator",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 라벨 표시를 위해 시스템 폰트를 탐색해 적용한다.
/// 1) assets/fonts/ 아래 사용자 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림 등)
/// 3) Linux Noto CJK
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    let linux_candidates = [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    ];
    for cand in linux_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    Err("Korean-capable font not found; falling back to default fonts.".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, name.to_owned());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(name.to_owned());
    ctx.set_fonts(fonts);
}

struct GuiApp {
    config: config::Config,
    rate_table: ExchangeRateTable,
    rate_status: String,
    // 입력
    appliance_idx: Option<usize>,
    system_type: Option<SystemType>,
    runtime_hours: f64,
    operating_days: u32,
    income_per_kg: f64,
    sun_hours: f64,
    efficiency_pct: f64,
    battery_hours: f64,
    operating_cost: f64,
    loan_term_years: u32,
    interest_pct: f64,
    deposit_usd: f64,
    install_pct: f64,
    display_currency: String,
    // 결과
    result: Option<CalculationResult>,
    error: Option<String>,
    save_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let display_currency = if config.display_currency != "USD" {
            config.display_currency.clone()
        } else {
            currency::locale_currency().unwrap_or("USD").to_string()
        };
        Self {
            config,
            rate_table: ExchangeRateTable::default(),
            rate_status: "환율 미수신 (무변환)".to_string(),
            appliance_idx: None,
            system_type: None,
            runtime_hours: 4.0,
            operating_days: 250,
            income_per_kg: 5.0 / 140.0,
            sun_hours: 4.0,
            efficiency_pct: 80.0,
            battery_hours: 1.0,
            operating_cost: 10.0,
            loan_term_years: 3,
            interest_pct: 15.0,
            deposit_usd: 0.0,
            install_pct: 100.0,
            display_currency,
            result: None,
            error: None,
            save_status: None,
        }
    }

    fn run_calculation(&mut self) {
        self.save_status = None;
        let Some(idx) = self.appliance_idx else {
            self.error = Some(engine::EngineError::MissingSelection("생산 기기").to_string());
            self.result = None;
            return;
        };
        let Some(system_type) = self.system_type else {
            self.error = Some(engine::EngineError::MissingSelection("AC/DC 방식").to_string());
            self.result = None;
            return;
        };
        let appliance = &catalog::appliances()[idx];

        let system = SystemInputs {
            runtime_hours_per_day: self.runtime_hours,
            operating_days_per_year: self.operating_days,
            income_per_kg_usd: self.income_per_kg,
            sun_hours_per_day: self.sun_hours,
            system_efficiency_pct: self.efficiency_pct,
            battery_hours: self.battery_hours,
            daily_operating_cost_usd: self.operating_cost,
            system_type,
        };
        let financing = FinancingInputs {
            loan_term_years: self.loan_term_years,
            annual_interest_rate: self.interest_pct / 100.0,
            deposit_usd: self.deposit_usd,
            install_increase_pct: self.install_pct,
        };
        let display = DisplayCurrency::from_table(&self.display_currency, &self.rate_table);

        match engine::compute(
            appliance,
            &system,
            &financing,
            &self.config.component_costs,
            display,
        ) {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        ui.heading("입력");
        ui.add_space(6.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("input_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("생산 기기");
                    egui::ComboBox::from_id_source("appliance")
                        .selected_text(
                            self.appliance_idx
                                .map(|i| catalog::appliances()[i].name)
                                .unwrap_or("선택"),
                        )
                        .show_ui(ui, |ui| {
                            for (i, a) in catalog::appliances().iter().enumerate() {
                                ui.selectable_value(&mut self.appliance_idx, Some(i), a.name);
                            }
                        });
                    ui.end_row();

                    ui.label("시스템 방식");
                    ui.horizontal(|ui| {
                        ui.selectable_value(&mut self.system_type, Some(SystemType::Ac), "AC");
                        ui.selectable_value(&mut self.system_type, Some(SystemType::Dc), "DC");
                    });
                    ui.end_row();

                    ui.label("일일 가동 시간 [h]");
                    ui.add(egui::DragValue::new(&mut self.runtime_hours).speed(0.5));
                    ui.end_row();

                    ui.label("연간 가동 일수");
                    ui.add(egui::DragValue::new(&mut self.operating_days).speed(1.0));
                    ui.end_row();

                    ui.label("kg당 수입 [USD]");
                    ui.add(egui::DragValue::new(&mut self.income_per_kg).speed(0.001));
                    ui.end_row();

                    ui.label("일일 일조 시간 [h]");
                    ui.add(egui::DragValue::new(&mut self.sun_hours).speed(0.5));
                    ui.end_row();

                    ui.label("시스템 효율 [%]");
                    ui.add(egui::DragValue::new(&mut self.efficiency_pct).speed(1.0));
                    ui.end_row();

                    ui.label("배터리 백업 [h]");
                    ui.add(egui::DragValue::new(&mut self.battery_hours).speed(0.5));
                    ui.end_row();

                    ui.label("일일 운영비 [USD]");
                    ui.add(egui::DragValue::new(&mut self.operating_cost).speed(1.0));
                    ui.end_row();
                });
        });

        ui.add_space(6.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label("금융 조건");
            egui::Grid::new("finance_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("대출 기간 [년]");
                    ui.add(egui::DragValue::new(&mut self.loan_term_years).speed(1.0));
                    ui.end_row();

                    ui.label("연 이자율 [%]");
                    ui.add(egui::DragValue::new(&mut self.interest_pct).speed(0.1));
                    ui.end_row();

                    ui.label("보증금 [USD]");
                    ui.add(egui::DragValue::new(&mut self.deposit_usd).speed(10.0));
                    ui.end_row();

                    ui.label("수입/설치 가산율 [%]");
                    ui.add(egui::DragValue::new(&mut self.install_pct).speed(10.0));
                    ui.end_row();
                });
        });

        ui.add_space(6.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label("통화");
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_source("currency")
                    .selected_text(self.display_currency.clone())
                    .show_ui(ui, |ui| {
                        for code in self.rate_table.currencies() {
                            ui.selectable_value(&mut self.display_currency, code.clone(), code);
                        }
                    });
                if ui.button("환율 갱신").clicked() {
                    match rates::fetch_usd_rates() {
                        Ok(table) => {
                            self.rate_status = format!("환율 {}건 수신", table.len());
                            self.rate_table = table;
                        }
                        Err(e) => self.rate_status = format!("환율 조회 실패: {e}"),
                    }
                }
            });
            ui.small(self.rate_status.as_str());
        });

        ui.add_space(10.0);
        if ui
            .add(egui::Button::new("계산").min_size(egui::vec2(ui.available_width(), 32.0)))
            .clicked()
        {
            self.run_calculation();
        }

        if let Some(err) = &self.error {
            ui.add_space(6.0);
            ui.colored_label(egui::Color32::LIGHT_RED, err);
        }
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        ui.heading("결과");
        ui.add_space(6.0);
        let Some(result) = &self.result else {
            ui.label("좌측에서 입력을 채우고 [계산]을 누르세요.");
            return;
        };
        let d = result.to_display();
        let s = &result.sizing;
        let v = &result.viability;
        let cur = d.currency.clone();

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("개요");
            egui::Grid::new("overview_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label("기기");
                    ui.label(format!(
                        "{} ({:.1}kW, {})",
                        result.appliance.name,
                        result.appliance.rated_power_kw,
                        result.system_type.label()
                    ));
                    ui.end_row();
                    ui.label("권장 시스템 용량");
                    ui.label(format!("{:.1} kWp", s.recommended_size_kwp));
                    ui.end_row();
                    ui.label("필요 패널 수");
                    ui.label(format!("{} 매", s.panels_required));
                    ui.end_row();
                    ui.label("배터리 용량");
                    ui.label(format!("{:.1} kWh", s.battery_capacity_kwh));
                    ui.end_row();
                    ui.label("일일 필요/생산 에너지");
                    ui.label(format!(
                        "{:.1} / {:.1} kWh",
                        s.energy_required_kwh_per_day, s.energy_production_kwh_per_day
                    ));
                    ui.end_row();
                    ui.label("일일 처리량");
                    ui.label(format!("{:.1} kg", s.production_kg_per_day));
                    ui.end_row();
                });
        });

        ui.add_space(6.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(format!("비용/대출 ({cur})"));
            egui::Grid::new("cost_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label("기기 비용");
                    ui.label(format!("{:.1}", d.appliance_cost));
                    ui.end_row();
                    ui.label("패널 비용");
                    ui.label(format!("{:.1}", d.panel_cost));
                    ui.end_row();
                    match result.system_type {
                        SystemType::Ac => {
                            ui.label("인버터 비용");
                            ui.label(format!("{:.1}", d.inverter_cost));
                        }
                        SystemType::Dc => {
                            ui.label("컨트롤러 비용");
                            ui.label(format!("{:.1}", d.controller_cost));
                        }
                    }
                    ui.end_row();
                    ui.label("배터리 비용");
                    ui.label(format!("{:.1}", d.battery_cost));
                    ui.end_row();
                    ui.label("FOB 소계");
                    ui.label(format!("{:.1}", d.fob_subtotal));
                    ui.end_row();
                    ui.label("설치 완료 총액");
                    ui.label(format!("{:.1}", d.installed_total));
                    ui.end_row();
                    ui.label("대출 원금");
                    ui.label(format!("{:.1}", d.loan_principal));
                    ui.end_row();
                    ui.label("월 상환액");
                    ui.label(format!("{:.1}", d.monthly_payment));
                    ui.end_row();
                    ui.label("총 상환액 (이자)");
                    ui.label(format!("{:.1} ({:.1})", d.total_repayment, d.total_interest));
                    ui.end_row();
                    ui.label("일일 상환액");
                    ui.label(format!("{:.1}", d.daily_repayment));
                    ui.end_row();
                });
        });

        ui.add_space(6.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("수익성");
            let (text, color) = match v.verdict {
                Viability::Viable => ("사업성: 가능", egui::Color32::from_rgb(0x4c, 0xaf, 0x50)),
                Viability::NotViable => ("사업성: 불가", egui::Color32::from_rgb(0xf4, 0x43, 0x36)),
                Viability::NotApplicable => {
                    ("사업성: N/A", egui::Color32::from_rgb(0xff, 0x98, 0x00))
                }
            };
            ui.colored_label(color, egui::RichText::new(text).strong());
            egui::Grid::new("viability_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label("일일 총수입");
                    ui.label(format!("{:.1} {cur}", d.income_per_day));
                    ui.end_row();
                    ui.label("일일 순수익");
                    ui.label(format!("{:.1} {cur}", d.net_income_per_day));
                    ui.end_row();
                    ui.label("연간 총수입");
                    ui.label(format!("{:.1} {cur}", d.gross_income_per_year));
                    ui.end_row();
                    ui.label("수입 대비 상환 비중");
                    ui.label(format!("{:.1} %", v.repayment_pct_of_income));
                    ui.end_row();
                    if let Some(surplus) = d.daily_surplus {
                        ui.label("일일 잉여");
                        ui.label(format!("{:.1} {cur}", surplus));
                        ui.end_row();
                    }
                    if let Some(payback) = v.simple_payback_years {
                        ui.label("단순 회수기간");
                        ui.label(format!("{:.1} 년", payback));
                        ui.end_row();
                    }
                });
            ui.small(format!("적용 환율: 1 USD = {:.2} {cur}", d.rate_per_usd));
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("보고서 저장").clicked() {
                let text = report_text(result);
                if let Some(path) = FileDialog::new()
                    .add_filter("Text", &["txt"])
                    .set_file_name("solar_report.txt")
                    .save_file()
                {
                    self.save_status = Some(match fs::write(&path, text) {
                        Ok(()) => format!("저장됨: {}", path.display()),
                        Err(e) => format!("저장 실패: {e}"),
                    });
                }
            }
            if let Some(status) = &self.save_status {
                ui.small(status.as_str());
            }
        });
    }
}

/// 저장용 텍스트 보고서를 만든다. 표시 반올림은 여기서만 한다.
fn report_text(result: &CalculationResult) -> String {
    let d = result.to_display();
    let s = &result.sizing;
    let v = &result.viability;
    let cur = d.currency.as_str();
    let mut out = String::new();

    out.push_str("=== Solar Productive Use Calculator ===\n");
    out.push_str(&format!(
        "기기: {} ({:.1}kW, {})\n",
        result.appliance.name,
        result.appliance.rated_power_kw,
        result.system_type.label()
    ));
    out.push_str(&format!("권장 시스템 용량: {:.1} kWp\n", s.recommended_size_kwp));
    out.push_str(&format!("필요 패널 수: {} 매\n", s.panels_required));
    out.push_str(&format!("배터리 용량: {:.1} kWh\n", s.battery_capacity_kwh));
    out.push_str(&format!(
        "일일 필요/생산 에너지: {:.1} / {:.1} kWh\n",
        s.energy_required_kwh_per_day, s.energy_production_kwh_per_day
    ));
    out.push_str(&format!("일일 처리량: {:.1} kg\n", s.production_kg_per_day));
    out.push_str(&format!("FOB 소계: {:.1} {cur}\n", d.fob_subtotal));
    out.push_str(&format!("설치 완료 총액: {:.1} {cur}\n", d.installed_total));
    out.push_str(&format!("대출 원금: {:.1} {cur}\n", d.loan_principal));
    out.push_str(&format!("월 상환액: {:.1} {cur}\n", d.monthly_payment));
    out.push_str(&format!("일일 상환액: {:.1} {cur}\n", d.daily_repayment));
    out.push_str(&format!("사업성 판정: {}\n", v.verdict.label()));
    out.push_str(&format!("일일 순수익: {:.1} {cur}\n", d.net_income_per_day));
    if let Some(surplus) = d.daily_surplus {
        out.push_str(&format!("일일 잉여: {:.1} {cur}\n", surplus));
    }
    if let Some(payback) = v.simple_payback_years {
        out.push_str(&format!("단순 회수기간: {:.1} 년\n", payback));
    }
    out.push_str(&format!("적용 환율: 1 USD = {:.2} {cur}\n", d.rate_per_usd));
    out
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("inputs")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.ui_inputs(ui);
                });
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.ui_results(ui);
            });
        });
    }
}
