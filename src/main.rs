use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

use passforge::cli::{self, handlers, Args, CliCommand, CliError};
use passforge::core::config::Config;
use passforge::core::session::GeneratorSession;
use passforge::{api, logging};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, warnings) = Config::load();
    logging::init(&config)?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let json = args.json;
    let outcome = match args.command.unwrap_or(CliCommand::Menu) {
        CliCommand::Generate { length, no_lowercase, uppercase, digits, symbols } => {
            let generation = cli::commands::generation_config(no_lowercase, uppercase, digits, symbols);
            handlers::handle_generate(&length, &generation, json)
        }
        CliCommand::Validate { length } => handlers::handle_validate(&length, json),
        CliCommand::Classes => handlers::handle_classes(json),
        CliCommand::Menu => {
            run_menu(&config)?;
            return Ok(ExitCode::SUCCESS);
        }
        CliCommand::Serve { address, port } => {
            let address = address.unwrap_or_else(|| config.api_address.clone());
            let port = port.unwrap_or(config.api_port);
            println!("🚀 API server starting on http://{}:{}", address, port);
            api::start_server(&address, port).await?;
            log::info!("API server shut down gracefully");
            return Ok(ExitCode::SUCCESS);
        }
    };

    match outcome {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            let rendered = handlers::render_error(&e, json);
            if json {
                println!("{}", rendered);
            } else {
                eprintln!("{}", rendered);
            }
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}

fn run_menu(config: &Config) -> Result<(), CliError> {
    let should_exit = Arc::new(AtomicBool::new(false));

    {
        let should_exit = Arc::clone(&should_exit);
        if let Err(e) = ctrlc::set_handler(move || {
            log::info!("Ctrl+C received, closing generator");
            should_exit.store(true, Ordering::SeqCst);
        }) {
            log::warn!("Failed to set Ctrl+C handler: {}", e);
        }
    }

    let session = GeneratorSession::new(&config.default_length);
    cli::menu::run_generator_menu(session, should_exit)?;
    println!("\n👋 Goodbye!");
    Ok(())
}
