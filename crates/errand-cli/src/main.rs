//! The `errand` command line tool.
//!
//! Runs one registered task per invocation and writes its output to stdout.
//! Logs go to stderr; set `ERRAND_LOG` (e.g. `ERRAND_LOG=debug`) to see them.

use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use errand_core::app::{App, AppBuilder};
use errand_core::impls::DotenvProvider;
use errand_core::ports::{ConfigProvider, EnvProvider};
use errand_core::tasks;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ERRAND_LOG";
const DEFAULT_ENV_FILE: &str = ".env";

/// Minimal task host
#[derive(Parser)]
#[command(
    name = "errand",
    version,
    after_help = "Usage examples:\n\
                  \n  \
                  errand run my_task -p name=Ada -p age=30\n  \
                  errand run my_task --params-json '{\"name\":\"Ada\",\"age\":30}'\n"
)]
struct Cli {
    /// Read extra configuration from this .env file (default: ./.env if present)
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Runs a registered task
    Run {
        /// Task name, e.g. `my_task`
        task: String,

        /// Task parameter as KEY=VALUE; the value is passed as text
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Task parameters as a JSON object, applied before any --param
        #[arg(long, value_name = "JSON")]
        params_json: Option<String>,
    },

    /// Lists registered tasks
    List,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, _)) if k.is_empty() => Err(format!("missing KEY in `{s}`")),
        Some((k, v)) => Ok((k.to_string(), v.to_string())),
        None => Err(format!("expected KEY=VALUE, got `{s}`")),
    }
}

fn build_params(
    params_json: Option<&str>,
    params: &[(String, String)],
) -> Result<serde_json::Map<String, serde_json::Value>> {
    let mut map = match params_json {
        Some(raw) => {
            let value: serde_json::Value =
                serde_json::from_str(raw).context("--params-json is not valid JSON")?;
            match value {
                serde_json::Value::Object(map) => map,
                other => bail!("--params-json must be a JSON object, got {other}"),
            }
        }
        None => serde_json::Map::new(),
    };
    for (k, v) in params {
        map.insert(k.clone(), serde_json::Value::String(v.clone()));
    }
    Ok(map)
}

fn config_provider(env_file: Option<&Path>) -> Result<Arc<dyn ConfigProvider>> {
    let path = match env_file {
        Some(path) => path,
        None if Path::new(DEFAULT_ENV_FILE).is_file() => Path::new(DEFAULT_ENV_FILE),
        None => return Ok(Arc::new(EnvProvider)),
    };
    let provider = DotenvProvider::load(path, EnvProvider)
        .with_context(|| format!("failed to read configuration from {}", path.display()))?;
    Ok(Arc::new(provider))
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn build_app() -> Result<App> {
    let app = tasks::register_bundled(AppBuilder::new())?
        .expect_tasks(tasks::BUNDLED)
        .build()?;
    Ok(app)
}

/// Runs `task` and writes its stdout artifacts to `out`, even when it fails.
async fn run_task(
    app: &App,
    task: &str,
    params: serde_json::Map<String, serde_json::Value>,
    config: Arc<dyn ConfigProvider>,
    out: &mut impl Write,
) -> Result<()> {
    let report = app
        .runtime(config)
        .run(task, serde_json::Value::Object(params))
        .await
        .with_context(|| format!("failed to run task `{task}`"))?;
    tracing::debug!(run_id = %report.run_id, "run complete");

    out.write_all(report.outcome.stdout().as_bytes())?;
    out.flush()?;

    if !report.outcome.is_success() {
        bail!(
            "task `{task}` failed: {}",
            report.outcome.reason.as_deref().unwrap_or("no reason given")
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let app = build_app()?;

    match cli.command {
        Command::List => {
            let mut out = std::io::stdout().lock();
            for task_type in app.task_types() {
                writeln!(out, "{task_type}")?;
            }
        }
        Command::Run {
            task,
            params,
            params_json,
        } => {
            let params = build_params(params_json.as_deref(), &params)?;
            let config = config_provider(cli.env_file.as_deref())?;
            run_task(&app, &task, params, config, &mut std::io::stdout().lock()).await?;
        }
    }

    Ok(())
}
