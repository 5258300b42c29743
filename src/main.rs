//! Apollo CLI - package, validate and publish a Python distribution
//!
//! Usage: apollo deploy (--test | --prod) [--skip-sanity-check] [--verbose]
//!
//! Exit codes:
//!   0  package pushed
//!   1  user not on the allow-list
//!   2  invalid command line
//!   3  deployment declined
//!   4  config, credentials, prompt or file error
//!   5  clean or build failed
//!   6  sanity check failed
//!   7  upload failed

mod cli;
mod commands;

use apollo::config::OutputConfig;
use apollo::ui::context::UiContext;
use apollo::ui::error::print_error;
use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match &cli.command {
        Commands::Deploy {
            test,
            prod,
            skip_sanity_check,
            verbose,
            build_mode,
        } => commands::deploy::cmd_deploy(
            &cli,
            commands::deploy::DeployArgs {
                test: *test,
                prod: *prod,
                skip_sanity_check: *skip_sanity_check,
                verbose: *verbose,
                build_mode: *build_mode,
            },
        ),
    };

    if let Err(err) = result {
        if commands::needs_report(&err) {
            let ui = UiContext::new(cli.json, cli.color, cli.no_animation, &OutputConfig::default());
            print_error(&err, &ui);
        }
        std::process::exit(commands::exit_code(&err));
    }
}

fn init_tracing(debug: bool) {
    let filter = match std::env::var("APOLLO_LOG") {
        Ok(value) if !value.trim().is_empty() => value,
        _ if debug => "apollo=debug".to_string(),
        _ => "apollo=warn".to_string(),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_level(true)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
