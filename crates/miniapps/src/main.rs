#![forbid(unsafe_code)]

//! Binary entry point: options, logging, persistence, then the program loop.

use std::path::PathBuf;
use std::process::exit;
use std::time::Duration;

use miniapps::app::AppModel;
use miniapps::{cli, logging};
use miniapps_runtime::{
    FileStorage, MemoryStorage, Program, ProgramConfig, StateStore, StorageBackend,
};

fn default_state_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("miniapps").join("state.json"))
}

fn main() {
    let opts = match cli::parse(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("miniapps: {e}");
            eprintln!("Try 'miniapps --help'.");
            exit(2);
        }
    };
    if opts.help {
        print!("{}", cli::HELP);
        return;
    }
    if opts.version {
        println!("miniapps {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Some(path) = &opts.log_file
        && let Err(e) = logging::init(path)
    {
        eprintln!("miniapps: cannot open log file {}: {e}", path.display());
        exit(1);
    }

    let backend: Box<dyn StorageBackend> =
        match opts.state_file.clone().or_else(default_state_path) {
            Some(path) => Box::new(FileStorage::new(path)),
            None => {
                tracing::warn!("no config directory found; state will not persist");
                Box::new(MemoryStorage::new())
            }
        };
    let mut model = AppModel::new(StateStore::load(backend));
    if let Some(screen) = opts.screen {
        model.set_screen(screen);
    }

    let config = ProgramConfig {
        alternate_screen: true,
        exit_after: opts.exit_after_ms.map(Duration::from_millis),
    };
    let result = Program::with_config(model, config).and_then(|mut program| program.run());
    if let Err(e) = result {
        eprintln!("Runtime error: {e}");
        exit(1);
    }
}
