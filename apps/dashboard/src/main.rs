use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

mod backend_bridge;
mod config;
mod controller;
mod render;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use dashboard_core::DashboardController;
use shared::{
    domain::{PayloadRange, Selection},
    error::{ApiError, ApiException},
};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{load_settings, LoadedSettings, Settings},
    controller::{
        events::{UiError, UiErrorContext},
        input::{parse_command, parse_site, ControlState, InputCommand, HELP},
        orchestration::dispatch_selection_change,
    },
    render::{render_error, render_event, render_layout, render_publication, render_selection},
};

#[derive(Parser, Debug)]
#[command(about = "Launch records dashboard over a CSV dataset")]
struct Cli {
    /// Launch CSV to load instead of the configured one.
    #[arg(long)]
    dataset: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the controls derived from the dataset.
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Compute both views once for a selection.
    Query {
        #[arg(long, default_value = "ALL")]
        site: String,
        #[arg(long)]
        min: Option<f64>,
        #[arg(long)]
        max: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Read control changes from stdin and print every update.
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let LoadedSettings {
        mut settings,
        warnings,
    } = load_settings();
    if let Some(path) = &cli.dataset {
        settings.dataset_path = path.to_string_lossy().into_owned();
    }

    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let rows = storage::load_launch_records(storage::resolve_dataset_path(&settings.dataset_path))?;
    let controller = DashboardController::initialize(rows).map_err(|err| {
        let error = UiError::from_api(UiErrorContext::Startup, &ApiError::from(&err));
        anyhow!(render_error(&error))
    })?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Summary { json } => run_summary(&controller, &settings, json),
        Command::Query {
            site,
            min,
            max,
            json,
        } => run_query(controller, &site, min, max, json),
        Command::Interactive => run_interactive(controller, &settings),
    }
}

fn run_summary(controller: &DashboardController, settings: &Settings, json: bool) -> Result<()> {
    let layout = controller.dataset().layout(settings.payload_slider());
    if json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        println!("{}", render_layout(&layout));
    }
    Ok(())
}

fn run_query(
    mut controller: DashboardController,
    site: &str,
    min: Option<f64>,
    max: Option<f64>,
    json: bool,
) -> Result<()> {
    let bounds = controller.dataset().payload_bounds();
    let selection = Selection::new(
        parse_site(site),
        PayloadRange::new(min.unwrap_or(bounds.lo), max.unwrap_or(bounds.hi)),
    );

    let publication = controller
        .on_selection_change(selection)
        .map_err(|err| ApiException::from(ApiError::from(&err)))?;

    if json {
        println!("{}", serde_json::to_string_pretty(publication)?);
    } else {
        print!("{}", render_publication(publication));
    }
    Ok(())
}

fn run_interactive(mut controller: DashboardController, settings: &Settings) -> Result<()> {
    let layout = controller.dataset().layout(settings.payload_slider());
    println!("{}", render_layout(&layout));
    println!("{HELP}");

    let presenter = backend_bridge::runtime::spawn_presenter(controller.subscribe_events(), |event| {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", render_event(&event));
    })?;
    controller.refresh();

    let worker = backend_bridge::runtime::launch(controller, settings.command_queue_capacity)?;
    let mut controls = ControlState::new(&layout);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read dashboard command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{}", render_error(&err));
                continue;
            }
        };

        match command {
            InputCommand::Quit => break,
            InputCommand::Help => println!("{HELP}"),
            InputCommand::Show => println!("controls: {}", render_selection(controls.selection())),
            command => match controls.apply(&command, &layout) {
                Ok(Some(selection)) => {
                    if let Err(err) = dispatch_selection_change(&worker.selections, selection) {
                        println!("{}", render_error(&err));
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => println!("{}", render_error(&err)),
            },
        }
    }

    drop(worker.selections);
    let stats = worker
        .join
        .join()
        .map_err(|_| anyhow!(render_error(&UiError::thread_panicked("selection worker"))))?;
    let delivered = presenter
        .join()
        .map_err(|_| anyhow!(render_error(&UiError::thread_panicked("presenter"))))?;

    tracing::info!(
        received = stats.received,
        applied = stats.applied,
        discarded = stats.discarded,
        rejected = stats.rejected,
        delivered,
        "dashboard session finished"
    );
    Ok(())
}
