use std::sync::Arc;

use anyhow::{Context, Result};
use apollo::config::{default_config_path, Config};
use apollo::domain::ports::DeployEventSink;
use apollo::infrastructure::{
    current_username, ConfigWorkspace, ConsoleEventSink, JsonEventSink, PypircStore,
    ShellCommandRunner, TerminalPrompter,
};
use apollo::ui::context::UiContext;
use apollo::ui::output::print_config_warnings;
use apollo::ui::views::deploy::render_deploy_header;
use apollo::{AllowList, BuildMode, DeployOptions, DeployTarget, DeployUseCase};

use crate::cli::Cli;

/// Flags of `apollo deploy`
#[derive(Debug, Clone, Copy)]
pub struct DeployArgs {
    pub test: bool,
    pub prod: bool,
    pub skip_sanity_check: bool,
    pub verbose: bool,
    pub build_mode: BuildMode,
}

pub fn cmd_deploy(cli: &Cli, args: DeployArgs) -> Result<()> {
    let target = DeployTarget::from_flags(args.test, args.prod)
        .context("exactly one of --test or --prod is required")?;

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let (config, warnings) = Config::load_or_default(&config_path)?;
    tracing::debug!(path = %config_path.display(), "config loaded");

    let ui = UiContext::new(cli.json, cli.color, cli.no_animation, &config.output);
    print_config_warnings(&warnings, &ui);

    let username = current_username().unwrap_or_else(|| "unknown".to_string());
    let cwd = std::env::current_dir().context("failed to read current directory")?;

    let options = DeployOptions::new(target, username)
        .with_allow_list(AllowList::new(&config.deploy.allowed_users))
        .with_skip_sanity_check(args.skip_sanity_check)
        .with_verbose(args.verbose)
        .with_build_mode(args.build_mode)
        .with_changelog_dir(&cwd)
        .with_commands(config.commands.clone());

    if !ui.json {
        eprintln!("{}", render_deploy_header(&options, ui.color, ui.unicode));
    }

    let credentials = PypircStore::from_config(&config.credentials)?;
    let workspace = ConfigWorkspace::new(&config_path, &config, &cwd);
    let use_case = DeployUseCase::new(
        TerminalPrompter::new(&ui),
        ShellCommandRunner::new(&ui),
        credentials,
        workspace,
    );

    let events: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr(&ui, target))
    };

    let outcome = use_case.execute_with_events(&options, events)?;
    tracing::debug!(
        repository = outcome.target.repository(),
        commands = outcome.commands.len(),
        "deploy finished"
    );
    Ok(())
}
