use spendbook::{
    cli::{output, shell, state::CliState, CliResult},
    config::ConfigManager,
    core::{utils::app_base_dir, BookManager},
    storage::CsvStorage,
};

fn run() -> CliResult<()> {
    let config_manager = ConfigManager::new()?;
    let config = match config_manager.load() {
        Ok(config) => config,
        Err(err) => {
            output::warning(format!("could not read configuration, using defaults: {}", err));
            Default::default()
        }
    };

    let data_dir = config.resolved_data_dir(&app_base_dir());
    let storage = CsvStorage::new(data_dir)?;
    let (manager, warnings) = BookManager::load(Box::new(storage))?;
    for warning in &warnings {
        output::warning(warning);
    }

    let mut state = CliState::new(manager, config.default_currency);
    shell::run(&mut state)
}

fn main() {
    spendbook::init();
    if let Err(err) = run() {
        output::error(err);
        std::process::exit(1);
    }
}
