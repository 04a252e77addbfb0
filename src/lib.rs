pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod rate_limiter;
pub mod services;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap::Parser;
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;

use crate::api::models::AnalysisReport;
use crate::domain::RankEntry;
use crate::cli::Command;
use crate::config::AppConfig;
use crate::errors::fetch_context;
use crate::services::analysis::AnalysisService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_analyze(summoner_input: &str, as_json: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let report = runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = AnalysisService::new(&config);
        service
            .analyze(summoner_input)
            .await
            .with_context(|| fetch_context(&format!("analysis for {}", summoner_input)))
    })?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    let potential = &report.potential;
    let player = &report.player;

    println!(
        "{} {}",
        format!("{}#{}", player.game_name, player.tag_line).bold(),
        player
            .summoner_level
            .map(|level| format!("(Lv. {})", level))
            .unwrap_or_default()
            .dimmed()
    );

    match &report.rank {
        Some(rank) if rank.is_estimated() => {
            println!("  티어: {} {}", rank.entry.label(), "(추정)".dimmed())
        }
        Some(rank) => println!("  티어: {}", rank_summary(&rank.entry)),
        None => println!("  티어: {}", "언랭크".dimmed()),
    }

    let score = format!("{}", potential.score);
    let score = match potential.score {
        70..=u8::MAX => score.green(),
        40..=69 => score.yellow(),
        _ => score.red(),
    };
    println!("  잠재력 점수: {} / 100 ({})", score.bold(), potential.trend.as_str());
    println!("  {}", potential.one_line);

    println!("{}", "강점".green().bold());
    for item in &potential.strengths {
        println!("  + {}", item);
    }
    println!("{}", "개선점".yellow().bold());
    for item in &potential.improvements {
        println!("  - {}", item);
    }

    let m = &report.metrics;
    println!(
        "{}",
        format!(
            "최근 {}경기 · KDA {:.2} · 분당 CS {:.1} · 승률 {:.0}% · 일관성 {:.0}",
            m.games_analyzed, m.avg_kda, m.avg_cs_per_min, m.recent_win_rate, m.consistency
        )
        .dimmed()
    );
}

fn rank_summary(entry: &RankEntry) -> String {
    let record = match entry.win_rate() {
        Some(rate) => format!("{}승 {}패, 승률 {:.0}%", entry.wins, entry.losses, rate),
        None => "배치 전".to_string(),
    };
    format!("{} {}LP ({})", entry.label(), entry.league_points, record)
}
