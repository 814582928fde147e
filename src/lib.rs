// Contract Central document digitization wizard
// Main library entry point

pub mod api;
pub mod config;
pub mod models;
mod tui;
pub mod utils;
pub mod wizard;

use config::AppConfig;
use log::{error, info};
use std::path::PathBuf;

/// Initialize logging system with dual format (JSON + human-readable)
fn init_logging(config: &AppConfig, with_stdout: bool) -> anyhow::Result<PathBuf> {
    let log_dir = utils::path_resolver::resolve_log_folder(config.log_dir.as_deref())?;
    std::fs::create_dir_all(&log_dir)?;

    let timestamp = chrono::Utc::now().format("%Y-%m-%d-%H%M%S");
    let json_log_file = log_dir.join(format!("digitization-wizard-{}.log", timestamp));
    let txt_log_file = log_dir.join(format!("digitization-wizard-{}.txt", timestamp));

    // stdout stays off in TUI mode; it would corrupt the terminal UI.
    let mut dispatch = fern::Dispatch::new().level(config.level_filter()?);

    if with_stdout {
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(move |out, message, record| {
                    let timestamp_local = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
                    let message_str = format!("{}", message);
                    let (phase, step, cleaned_message) =
                        utils::logging::parse_log_metadata(&message_str);
                    let txt_line = utils::logging::format_human_readable_log(
                        &timestamp_local.to_string(),
                        record.level(),
                        record.target(),
                        &cleaned_message,
                        phase.as_deref(),
                        step.as_deref(),
                    );
                    out.finish(format_args!("{}", txt_line));
                })
                .chain(std::io::stdout()),
        );
    }

    if config.json_log {
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(move |out, message, record| {
                    let timestamp_utc = chrono::Utc::now().to_rfc3339();
                    let message_str = format!("{}", message);
                    let (phase, step, cleaned_message) =
                        utils::logging::parse_log_metadata(&message_str);
                    let json_line = utils::logging::format_json_log(
                        &timestamp_utc,
                        record.level(),
                        record.target(),
                        &cleaned_message,
                        phase.as_deref(),
                        step.as_deref(),
                    );
                    out.finish(format_args!("{}\n", json_line));
                })
                .chain(fern::log_file(json_log_file)?),
        );
    }

    dispatch = dispatch.chain(
        fern::Dispatch::new()
            .format(move |out, message, record| {
                let timestamp_local = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
                let message_str = format!("{}", message);
                let (phase, step, cleaned_message) =
                    utils::logging::parse_log_metadata(&message_str);
                let txt_line = utils::logging::format_human_readable_log(
                    &timestamp_local.to_string(),
                    record.level(),
                    record.target(),
                    &cleaned_message,
                    phase.as_deref(),
                    step.as_deref(),
                );
                out.finish(format_args!("{}\n", txt_line));
            })
            .chain(fern::log_file(txt_log_file)?),
    );

    dispatch.apply()?;

    log::info!(
        "[PHASE: initialization] Logging initialized, log directory: {:?}",
        log_dir
    );
    Ok(log_dir)
}

pub fn run_tui(config: &AppConfig) {
    // Initialize logging (no stdout to avoid corrupting the TUI)
    if let Err(e) = init_logging(config, false) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!(
        "[PHASE: initialization] Digitization wizard starting at {} start_view={:?}",
        chrono::Utc::now(),
        config.start_view
    );

    if let Err(e) = tui::run(config.start_view) {
        error!("[PHASE: tui] [STEP: fatal] TUI exited with error: {:?}", e);
        eprintln!("Wizard error: {}", e);
        std::process::exit(1);
    }
}

/// Non-interactive TUI smoke mode (for automated checks).
/// Renders a single frame into an in-memory backend and exits 0/1.
pub fn run_tui_smoke(config: &AppConfig, target: Option<String>) {
    if let Err(e) = init_logging(config, false) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!(
        "[PHASE: initialization] Headless TUI smoke starting at {}",
        chrono::Utc::now()
    );

    let target = target.as_deref().unwrap_or("discover");
    if let Err(e) = tui::smoke(target) {
        error!(
            "[PHASE: tui] [STEP: smoke] TUI smoke exited with error: {:?}",
            e
        );
        eprintln!("Wizard error: {}", e);
        std::process::exit(1);
    }
    println!("TUI smoke OK: {}", target);
}

/// Print the effective configuration as TOML.
pub fn print_config(config: &AppConfig) {
    match config.to_toml() {
        Ok(s) => print!("{}", s),
        Err(e) => {
            eprintln!("Failed to render configuration: {}", e);
            std::process::exit(1);
        }
    }
}
