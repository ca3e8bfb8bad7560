use star_search::star::HttpStarService;
use star_search::tui::app::App;
use star_search::{logging, Cli, Result};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logging::error_log(&err.to_string());
            eprintln!("{}", err);
            if let Some(suggestion) = err.get_recovery_suggestion() {
                eprintln!(" {}", suggestion);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.to_config()?;

    if config.debug {
        let log_path = logging::init_debug_logging()?;
        eprintln!("Debug log: {}", log_path.display());
    }
    let service = HttpStarService::new(config.endpoint.clone(), config.timeout)?;
    logging::info_log(&format!(
        "Starting with endpoint {}, ordering {:?}",
        service.endpoint().route(),
        config.ordering
    ));
    logging::info_log(&format!(
        "Content policy {}: {}",
        config.content_policy.name(),
        config.content_policy.description()
    ));

    let app = App::new(&config, Arc::new(service))?;
    star_search::tui::run(app)
}
