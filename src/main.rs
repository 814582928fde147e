use digitization_wizard::config::{AppConfig, StartView};
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // --config=<path> replaces the default `digitization-wizard.toml` lookup in the CWD.
    let config_path = args
        .iter()
        .find_map(|a| a.strip_prefix("--config="))
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);

    let mut config = match AppConfig::load(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(2);
        }
    };

    if args.iter().any(|a| a == "--admin") {
        config.start_view = StartView::Admin;
    }

    if args.iter().any(|a| a == "--print-config") {
        digitization_wizard::print_config(&config);
        return;
    }

    // Non-interactive TUI smoke test mode (for automated checks).
    // Usage: --tui-smoke or --tui-smoke=discover|explore|validate|deploy|admin|feedback
    if let Some(arg) = args
        .iter()
        .find(|a| a.as_str() == "--tui-smoke" || a.starts_with("--tui-smoke="))
    {
        let target = arg
            .split_once('=')
            .map(|(_, v)| v.to_string())
            .filter(|v| !v.trim().is_empty());
        digitization_wizard::run_tui_smoke(&config, target);
        return;
    }

    digitization_wizard::run_tui(&config);
}
