mod backup;
mod config;
mod errors;
mod frequency_table;
mod loader;
mod menu;
mod report;

use std::io::{self, BufRead, ErrorKind, Write};
use std::path::Path;
use std::process::ExitCode;

use backup::write_backup;
use config::{read_config, Config, CONFIG_FILE};
use errors::TrackerError;
use loader::load_items;
use log::LevelFilter;
use menu::Menu;

fn main() -> ExitCode {
    let (config, config_error) = match read_config(Path::new(CONFIG_FILE)) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level_filter().unwrap_or(LevelFilter::Warn))
        .target(env_logger::Target::Stderr)
        .init();

    match config_error {
        Some(err) => eprintln!("WARNING: {}. Using default settings.", err),
        None => log::info!("Configuration: {:?}", config),
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run(&config, stdin.lock(), stdout.lock());
    ExitCode::from(exit_status(result, &mut io::stderr()))
}

/// Reports a failed run on `diagnostics` and maps it to a process exit status.
fn exit_status<E: Write>(result: Result<(), TrackerError>, diagnostics: &mut E) -> u8 {
    let Err(err) = result else {
        return 0;
    };

    // Best effort: a closed stderr must not change the status.
    let _ = writeln!(diagnostics, "ERROR: {}", err);
    if let TrackerError::SourceUnavailable { source, .. } = &err {
        if source.kind() == ErrorKind::NotFound {
            let _ = writeln!(
                diagnostics,
                "Ensure the input file is in the same folder as the executable."
            );
        }
    }
    1
}

/// Loads the day's purchases, writes the backup, then serves the menu until exit.
fn run<R: BufRead, W: Write>(config: &Config, input: R, output: W) -> Result<(), TrackerError> {
    let table = load_items(&config.input_path)?;
    if table.is_empty() {
        log::warn!("No items found in {}", config.input_path.display());
    }

    if let Err(err) = write_backup(&table, &config.backup_path) {
        if config.backup_failure_fatal {
            return Err(err);
        }
        eprintln!("ERROR: {}", err);
        log::warn!("Continuing without a backup; queries use the in-memory counts");
    }

    Menu::new(&table, config.histogram_style(), input, output).run()?;
    Ok(())
}
