use clap::{CommandFactory, Parser};
use klarnaai_cli::cli::dispatcher::Dispatcher;
use klarnaai_cli::cli::main_types::Cli;
use klarnaai_cli::display::print_error;
use klarnaai_cli::storage::config::Config;
use klarnaai_cli::utils::logging::print_verbose;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    // Load Config
    let config_path = Config::path_in_dir(cli.config_dir.as_deref());

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            print_error(&format!("Error loading config: {}", err));
            std::process::exit(1);
        }
    };

    print_verbose(cli.verbose, "Verbose mode is enabled");
    if let Some(config_dir) = &cli.config_dir {
        print_verbose(
            cli.verbose,
            &format!("Using config directory: {}", config_dir),
        );
    }

    let dispatcher = Dispatcher::new(config, config_path, cli.base_url, cli.verbose);

    // Execute the command
    if let Err(e) = dispatcher.dispatch(command).await {
        print_error(&e.display_friendly());
        if let Some(hint) = e.troubleshooting_hint() {
            print_verbose(cli.verbose, &format!("Hint: {}", hint));
        }
        std::process::exit(1);
    }

    Ok(())
}
