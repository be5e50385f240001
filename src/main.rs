//! Espy entry point - routes command-line arguments into the CLI service.

use std::{env, error::Error, process};

use espy::{
    cli::{CliService, formatting::format_error},
    config::Config,
    tracing_config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let config = Config::load()?;
    tracing_config::init(&config.general.log_level)?;

    let cli_service = CliService::new(config);

    let category = args.get(1).map(|s| s.as_str()).unwrap_or("help");
    if category == "help" {
        println!("{}", cli_service.help_text());
        return Ok(());
    }

    let command = args.get(2).map(|s| s.as_str()).unwrap_or("");
    let command_args = args.get(3..).unwrap_or(&[]);

    match cli_service
        .execute_command(category, command, command_args)
        .await
    {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
