//! `easygrid` command line.
//!
//! Compiles a YAML or JSON table config into grid options:
//!
//! ```text
//! easygrid options table.yaml --data parts.csv
//! easygrid payload table.yaml --data parts.json --compact
//! easygrid icons
//! easygrid icons check --color "#16a34a"
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use easygrid::color::CssColor;
use easygrid::{icons, Dataset, JsonRenderer, Table, TableConfig};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Compile declarative table configs into data-grid options.
#[derive(Parser, Debug)]
#[command(name = "easygrid", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the compiled gridOptions
    Options(TableArgs),
    /// Print the full render request (options, rows and widget flags)
    Payload(TableArgs),
    /// List icon names, or print one icon as SVG
    Icons {
        /// Icon to print
        name: Option<String>,
        /// Color substituted into the icon
        #[arg(long, default_value = "#000000")]
        color: String,
    },
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Table config (.yaml, .yml or .json)
    config: PathBuf,

    /// Dataset (.csv or .json); empty when omitted
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Print JSON on one line
    #[arg(long)]
    compact: bool,
}

impl TableArgs {
    fn load(&self) -> Result<(Table, Dataset)> {
        let config = TableConfig::from_path(&self.config)
            .with_context(|| format!("failed to load config {}", self.config.display()))?;
        let table = config
            .into_table()
            .with_context(|| format!("invalid table in {}", self.config.display()))?;
        let data = match &self.data {
            Some(path) => Dataset::from_path(path)
                .with_context(|| format!("failed to load dataset {}", path.display()))?,
            None => Dataset::default(),
        };
        Ok((table, data))
    }
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn write_json<W: Write>(out: &mut W, value: &serde_json::Value, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Command::Options(args) => {
            let (table, data) = args.load()?;
            write_json(out, &table.grid_options(&data), args.compact)
        }
        Command::Payload(args) => {
            let (table, data) = args.load()?;
            let mut renderer = JsonRenderer::new(&mut *out);
            if args.compact {
                renderer = renderer.compact();
            }
            table
                .render(&data, &mut renderer)
                .context("failed to write payload")?;
            Ok(())
        }
        Command::Icons { name: None, .. } => {
            for name in icons::names() {
                writeln!(out, "{}", name)?;
            }
            Ok(())
        }
        Command::Icons {
            name: Some(name),
            color,
        } => {
            let color = CssColor::parse(&color)
                .map_err(|err| anyhow!("invalid --color '{}': {}", color, err))?;
            let Some(svg) = icons::svg(&name, &color.to_css()) else {
                bail!(
                    "unknown icon '{}' (run `easygrid icons` for the list)",
                    name
                );
            };
            writeln!(out, "{}", svg)?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if TermLogger::init(
        level(cli.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("easygrid: logger already initialized");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TABLE: &str = r##"
options: { sideBar: true }
columns:
  - { kind: text, id: name, alias: Name }
  - kind: status
    id: state
    states:
      - { id: 1, label: OK, color: "#0f0" }
"##;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn fixture() -> (TempDir, String, String) {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("table.yaml");
        let data = dir.path().join("rows.csv");
        fs::write(&config, TABLE).unwrap();
        fs::write(&data, "name,state\nbolt,1\nnut,2\n").unwrap();
        let config = config.to_string_lossy().into_owned();
        let data = data.to_string_lossy().into_owned();
        (dir, config, data)
    }

    #[test]
    fn options_prints_grid_options() {
        let (_dir, config, data) = fixture();
        let out = run_args(&["easygrid", "options", &config, "--data", &data]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["columnDefs"].as_array().unwrap().len(), 3);
        assert_eq!(value["columnDefs"][1]["headerName"], "Name");
        assert!(value.get("sideBar").is_some());
        assert!(out.contains("\n  "));
    }

    #[test]
    fn payload_compact_includes_rows() {
        let (_dir, config, data) = fixture();
        let out = run_args(&["easygrid", "-v", "payload", &config, "-d", &data, "--compact"]).unwrap();
        assert_eq!(out.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["rowData"][1]["name"], "nut");
        assert_eq!(value["theme"], "streamlit");
    }

    #[test]
    fn options_without_data() {
        let (_dir, config, _data) = fixture();
        let out = run_args(&["easygrid", "options", &config]).unwrap();
        assert!(out.contains("agSetColumnFilter"));
    }

    #[test]
    fn icons_lists_catalog() {
        let out = run_args(&["easygrid", "icons"]).unwrap();
        assert_eq!(out.lines().count(), icons::names().count());
        assert!(out.lines().any(|l| l == "crown"));
    }

    #[test]
    fn icon_svg_with_color() {
        let out = run_args(&["easygrid", "icons", "check", "--color", "#16a34a"]).unwrap();
        assert!(out.starts_with("<svg"));
        assert!(out.contains("#16a34a"));
    }

    #[test]
    fn icon_color_is_validated() {
        let out = run_args(&["easygrid", "icons", "check", "--color", "#0F0"]).unwrap();
        assert!(out.contains("#00ff00"));

        let err = run_args(&["easygrid", "icons", "check", "--color", "red\"/><script>"]).unwrap_err();
        assert!(err.to_string().contains("invalid --color"));
    }

    #[test]
    fn unknown_icon_fails() {
        let err = run_args(&["easygrid", "icons", "unicorn"]).unwrap_err();
        assert!(err.to_string().contains("unknown icon 'unicorn'"));
    }

    #[test]
    fn bad_config_has_context() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("bad.yaml");
        fs::write(&config, "columns:\n  - { kind: status, id: s, states: [] }\n").unwrap();
        let err = run_args(&["easygrid", "options", &config.to_string_lossy()]).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("invalid table"));
        assert!(msg.contains("non-empty states"));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level(0), LevelFilter::Warn);
        assert_eq!(level(2), LevelFilter::Debug);
        assert_eq!(level(9), LevelFilter::Trace);
    }
}
