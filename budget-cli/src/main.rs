use anyhow::{Context, Result};
use budget_core::{MeasureClassifier, MeasureHeader};
use budget_ingest::{detect_schema, read_raw_table};
use budget_report::{build_tables, write_tables};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

mod config;
mod output;

use config::{Config, load_config};

#[derive(Parser, Debug)]
#[command(
    name = "budget",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUDGET_BUILD_REV"), ")"),
    about = "Reshape a wide union budget export into long, summary and forecast tables"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read the budget CSV and write the four output tables
    Run {
        /// Input CSV (default: raw/budget.csv)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output directory, created if absent (default: output)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Config file (default: ./budget.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show how each measure column header is decoded
    Headers {
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long)]
        config: Option<PathBuf>,

        /// Print one JSON object per header
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Write a default budget.toml (never overwrites)
    InitConfig {
        #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            input,
            output_dir,
            config,
        } => {
            let cfg = load_config(config.as_deref())?.with_overrides(input, output_dir);
            run(&cfg)?;
        }

        Command::Headers {
            input,
            config,
            json,
        } => {
            let cfg = load_config(config.as_deref())?.with_overrides(input, None);
            headers(&cfg, json)?;
        }

        Command::InitConfig { path } => {
            config::init_config(&path)?;
        }
    }

    Ok(())
}

fn run(cfg: &Config) -> Result<()> {
    let input = &cfg.paths.input;
    let raw = read_raw_table(input).with_context(|| format!("loading {}", input.display()))?;

    // everything is computed before the first file is touched
    let tables = build_tables(&raw, &cfg.columns)?;

    output::ensure_output_dir(&cfg.paths.output_dir)?;
    let files = write_tables(&cfg.paths.output_dir, &tables)
        .with_context(|| format!("writing tables to {}", cfg.paths.output_dir.display()))?;

    info!("clean rows: {}", tables.clean.len());
    println!("Outputs:");
    for path in files.all() {
        println!("  {}", path.display());
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct HeaderReport<'a> {
    header: &'a str,
    matched: bool,
    stage: Option<String>,
    fiscal_year: Option<String>,
    component: Option<String>,
}

fn headers(cfg: &Config, json: bool) -> Result<()> {
    let input = &cfg.paths.input;
    let raw = read_raw_table(input).with_context(|| format!("loading {}", input.display()))?;
    let ids = detect_schema(&raw.headers, &cfg.columns)?;
    let classifier = MeasureClassifier::new()?;

    for i in ids.measure_columns(raw.column_count()) {
        let header = raw.headers[i].as_str();
        let report = match classifier.classify(header) {
            MeasureHeader::Matched {
                stage,
                fiscal_year,
                component,
            } => HeaderReport {
                header,
                matched: true,
                stage: Some(stage.to_string()),
                fiscal_year: Some(fiscal_year.to_string()),
                component: Some(component.to_string()),
            },
            MeasureHeader::Unmatched => HeaderReport {
                header,
                matched: false,
                stage: None,
                fiscal_year: None,
                component: None,
            },
        };

        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else if report.matched {
            println!(
                "{:<50} -> {} | {} | {}",
                header.replace('\n', " "),
                report.stage.unwrap_or_default(),
                report.fiscal_year.unwrap_or_default(),
                report.component.unwrap_or_default()
            );
        } else {
            println!("{:<50} -> (dropped: no fiscal year)", header.replace('\n', " "));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_run_flags() {
        let cli = Cli::try_parse_from([
            "budget",
            "run",
            "--input",
            "data/in.csv",
            "--output-dir",
            "out",
        ])
        .unwrap();
        match cli.command {
            Command::Run {
                input, output_dir, ..
            } => {
                assert_eq!(input, Some(PathBuf::from("data/in.csv")));
                assert_eq!(output_dir, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_run_writes_tables_into_fresh_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("budget.csv");
        std::fs::write(
            &input,
            "Category,Ministry/Department,Budget Estimates 2021-2022 Total\n\
             Health,Min A,\"₹1,000 cr\"\n\
             Health,Min B,500\n",
        )
        .unwrap();

        let out = tmp.path().join("output");
        let cfg = Config::default().with_overrides(Some(input), Some(out.clone()));
        run(&cfg).unwrap();

        let sector = std::fs::read_to_string(out.join("sector_year_summary.csv")).unwrap();
        assert!(sector.contains("2021,2021-2022,Budget Estimates,Health,1500.0"));
    }

    #[test]
    fn test_run_missing_input_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("output");
        let cfg = Config::default()
            .with_overrides(Some(tmp.path().join("missing.csv")), Some(out.clone()));
        assert!(run(&cfg).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn test_run_bad_schema_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("budget.csv");
        std::fs::write(&input, "Sector,Actuals 2021-2022 Total\nHealth,1\n").unwrap();
        let out = tmp.path().join("output");
        let cfg = Config::default().with_overrides(Some(input), Some(out.clone()));
        let err = run(&cfg).unwrap_err();
        assert!(err.to_string().contains("Category"));
        assert!(!out.exists());
    }
}
