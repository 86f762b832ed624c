//! `folio` command-line host.
//!
//! # Responsibility
//! - Load config and content, then drive a search session like the site
//!   header does.
//! - Render result sections as text or JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{
    default_log_level, init_logging, normalize_level, FolioConfig, LoadingOutcome,
    PortfolioContent, ResultSection, SearchResults, SearchSession, SkillCategory,
    CONFIG_FILE_NAME,
};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Search and inspect portfolio content")]
struct Cli {
    /// Config file (TOML). Defaults to ./folio.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Content JSON file; overrides `content_path` from config.
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Absolute directory for log files; overrides config.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print `pong` from the core crate.
    Ping,
    /// Print the core crate version.
    Version,
    /// Search every content block for a free-text query.
    Search {
        query: String,
        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Load and validate a content file.
    Validate { file: PathBuf },
    /// Summarize the loaded content.
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    start_logging(cli, &config)?;

    match &cli.command {
        Command::Ping => println!("folio_core ping={}", folio_core::ping()),
        Command::Version => println!("folio_core version={}", folio_core::core_version()),
        Command::Search { query, json } => {
            let content = load_content(cli, &config)?;
            run_search(&content, &config, query, *json)?;
        }
        Command::Validate { file } => {
            let content = PortfolioContent::from_path(file)
                .with_context(|| format!("validating {}", file.display()))?;
            println!(
                "ok: {} projects, {} skills, {} experience entries, {} social links",
                content.projects.len(),
                content.skills.len(),
                content.experience.len(),
                content.socials.len()
            );
        }
        Command::Show => {
            let content = load_content(cli, &config)?;
            print_summary(&content);
        }
    }
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<FolioConfig> {
    let path = explicit.unwrap_or_else(|| Path::new(CONFIG_FILE_NAME));
    FolioConfig::load(path).with_context(|| format!("loading config {}", path.display()))
}

fn start_logging(cli: &Cli, config: &FolioConfig) -> Result<()> {
    let level = resolve_log_level(cli, config)?;
    let Some(log_dir) = cli.log_dir.as_ref().or(config.log_dir.as_ref()) else {
        return Ok(());
    };
    init_logging(level, log_dir).context("starting logging")?;
    Ok(())
}

/// Flag beats config beats build default; checked even when logging is off.
fn resolve_log_level(cli: &Cli, config: &FolioConfig) -> Result<&'static str> {
    match cli.log_level.as_deref().or(config.log_level.as_deref()) {
        Some(level) => normalize_level(level)
            .map_err(anyhow::Error::msg)
            .context("resolving log level"),
        None => Ok(default_log_level()),
    }
}

fn load_content(cli: &Cli, config: &FolioConfig) -> Result<PortfolioContent> {
    match cli.content.as_ref().or(config.content_path.as_ref()) {
        Some(path) => PortfolioContent::from_path(path)
            .with_context(|| format!("loading content {}", path.display())),
        None => Ok(PortfolioContent::builtin().clone()),
    }
}

fn run_search(
    content: &PortfolioContent,
    config: &FolioConfig,
    query: &str,
    json: bool,
) -> Result<()> {
    let mut session = SearchSession::with_loading_delay(content, config.loading_delay());
    if let Some(ticket) = session.set_query(query) {
        if !json && !ticket.delay().is_zero() {
            eprintln!("searching...");
            std::thread::sleep(ticket.delay());
        }
        if session.finish_loading(ticket) == LoadingOutcome::Stale {
            info!("event=cli_search module=cli status=stale");
        }
    }

    let empty = SearchResults::default();
    let results = session.results().unwrap_or(&empty);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(results).context("encoding results")?
        );
        return Ok(());
    }

    print_results(query, results);
    Ok(())
}

fn print_results(query: &str, results: &SearchResults<'_>) {
    println!("Search results for \"{}\"", query.trim());
    if !results.has_matches() {
        println!();
        println!("No results found");
        println!("Try searching for different keywords");
        return;
    }

    for section in results.visible_sections() {
        println!();
        match section {
            ResultSection::Projects => {
                println!(
                    "{} ({})  -> {}",
                    section.title(),
                    results.projects.len(),
                    section.route()
                );
                for project in &results.projects {
                    println!("  - {}: {}", project.title, project.technologies.join(", "));
                }
            }
            ResultSection::Skills => {
                println!(
                    "{} ({})  -> {}",
                    section.title(),
                    results.skills.len(),
                    section.route()
                );
                for skill in &results.skills {
                    println!(
                        "  - {} [{}] {}%",
                        skill.name,
                        skill.category.as_str(),
                        skill.proficiency
                    );
                }
            }
            ResultSection::Experience => {
                println!(
                    "{} ({})  -> {}",
                    section.title(),
                    results.experience.len(),
                    section.route()
                );
                for entry in &results.experience {
                    println!("  - {} at {}", entry.title, entry.company);
                }
            }
            ResultSection::Socials => {
                println!("{}  -> {}", section.title(), section.route());
                for link in &results.socials {
                    println!("  - {}: {}", link.name, link.url);
                }
            }
            _ => println!("{}  -> {}", section.title(), section.route()),
        }
    }
}

fn print_summary(content: &PortfolioContent) {
    println!("{} - {}", content.personal.name, content.personal.title);
    println!("{}", content.personal.location);
    println!();
    println!("Featured projects:");
    for project in content.featured_projects() {
        println!("  - {}", project.title);
    }
    println!();
    println!("Skills:");
    for category in SkillCategory::ALL {
        let skills = content.skills_by_category(category);
        if skills.is_empty() {
            continue;
        }
        let names: Vec<_> = skills.iter().map(|skill| skill.name.as_str()).collect();
        println!("  {}: {}", category.as_str(), names.join(", "));
    }
    println!();
    println!(
        "{} experience entries, {} social links",
        content.experience.len(),
        content.socials.len()
    );
}

#[cfg(test)]
mod tests {
    use super::{resolve_log_level, start_logging, Cli, Command};
    use clap::Parser;
    use folio_core::FolioConfig;

    #[test]
    fn search_accepts_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "folio",
            "search",
            "react",
            "--json",
            "--content",
            "x.json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Search { ref query, json: true } if query == "react"
        ));
        assert_eq!(cli.content.as_deref(), Some(std::path::Path::new("x.json")));
    }

    #[test]
    fn search_requires_query() {
        assert!(Cli::try_parse_from(["folio", "search"]).is_err());
    }

    #[test]
    fn invalid_log_level_fails_without_log_dir() {
        let cli = Cli::try_parse_from(["folio", "ping", "--log-level", "loud"]).unwrap();
        let err = start_logging(&cli, &FolioConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported log level `loud`"));
    }

    #[test]
    fn log_level_flag_overrides_config() {
        let cli = Cli::try_parse_from(["folio", "ping", "--log-level", "WARNING"]).unwrap();
        let config = FolioConfig {
            log_level: Some("debug".to_string()),
            ..FolioConfig::default()
        };
        assert_eq!(resolve_log_level(&cli, &config).unwrap(), "warn");

        let cli = Cli::try_parse_from(["folio", "ping"]).unwrap();
        assert_eq!(resolve_log_level(&cli, &config).unwrap(), "debug");
    }
}
