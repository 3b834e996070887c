use std::path::{Path, PathBuf};

use clap::Parser;
use solar_productive_calculator::{app, config, currency, rates};

/// 태양광 생산설비 사업성 계산기 CLI.
#[derive(Debug, Parser)]
#[command(name = "solar_productive_calculator_cli")]
struct Cli {
    /// 표시 통화 코드. 생략 시 설정값 또는 로케일로 추정한다.
    #[arg(long)]
    currency: Option<String>,
    /// 로컬 환율 파일(rates.toml) 경로
    #[arg(long)]
    rates: Option<PathBuf>,
    /// 온라인 환율 조회를 생략한다
    #[arg(long)]
    offline: bool,
}

/// 프로그램의 엔트리 포인트. 설정과 환율 테이블을 준비한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;

    if let Some(code) = &cli.currency {
        cfg.display_currency = code.to_ascii_uppercase();
    } else if cfg.display_currency == "USD" {
        // 아직 통화를 고르지 않았다면 로케일 지역으로 추정한다
        if let Some(code) = currency::locale_currency() {
            if code != "USD" {
                println!("로케일 기준 표시 통화: {code}");
                cfg.display_currency = code.to_string();
            }
        }
    }

    let mut table = build_rate_table(&cli, &cfg);
    app::run(&mut cfg, &mut table)?;
    Ok(())
}

/// 우선순위: --rates 파일 > 설정의 rates_file > 온라인 조회 > 무변환 기본 테이블.
fn build_rate_table(cli: &Cli, cfg: &config::Config) -> currency::ExchangeRateTable {
    let file = cli
        .rates
        .as_deref()
        .or_else(|| cfg.rates_file.as_deref().map(Path::new));
    if let Some(path) = file {
        match rates::load_rates_file(path) {
            Ok(table) => return table,
            Err(e) => eprintln!("환율 파일 로드 실패: {e}"),
        }
    }
    if !cli.offline {
        match rates::fetch_usd_rates() {
            Ok(table) => return table,
            Err(e) => eprintln!("환율 조회 실패: {e} (무변환 기본 테이블 사용)"),
        }
    }
    currency::ExchangeRateTable::default()
}
