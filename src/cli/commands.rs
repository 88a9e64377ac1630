//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::format_parents;
use crate::application::services::ForestSummary;
use crate::cli::args::{Cli, Commands, ConfigCommands, InputArgs};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{global_config_path, local_config_path, OutputFormat, Settings};
use crate::domain::{DominatingSet, ForestRender};
use crate::infrastructure::di::{InputSpec, ServiceContainer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config_dir.as_deref())?;
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Solve {
            input,
            format,
            verify,
        }) => cmd_solve(&container, input, *format, *verify),
        Some(Commands::Tree { input, verify }) => cmd_tree(&container, input, *verify),
        Some(Commands::Check { input }) => cmd_check(&container, input),
        Some(Commands::Config { command }) => cmd_config(&container, cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

fn read_input(container: &ServiceContainer, input: &InputArgs) -> CliResult<String> {
    let spec = InputSpec::resolve(input.parents.as_deref(), input.file.as_ref());
    Ok(container.load_input(&spec)?)
}

#[instrument(skip(container))]
fn cmd_solve(
    container: &ServiceContainer,
    input: &InputArgs,
    format: Option<OutputFormat>,
    verify: bool,
) -> CliResult<()> {
    let text = read_input(container, input)?;
    let report = container.solve_service().with_verify(verify).solve_text(&text)?;
    let format = format.unwrap_or(container.settings.format);
    debug!("format: {}", format);

    print_set(&report.set, format);
    Ok(())
}

fn print_set(set: &DominatingSet, format: OutputFormat) {
    match format {
        OutputFormat::Plain => output::info(set),
        OutputFormat::Lines => set.iter().for_each(|id| output::info(&id)),
        OutputFormat::Count => output::info(&set.len()),
    }
}

#[instrument(skip(container))]
fn cmd_tree(container: &ServiceContainer, input: &InputArgs, verify: bool) -> CliResult<()> {
    let text = read_input(container, input)?;
    let (report, forest) = container.solve_service().with_verify(verify).tree_text(&text)?;
    let set = &report.set;

    for tree in forest.to_trees(Some(set)) {
        output::info(&tree);
    }
    output::field(
        "members",
        &format!("{} of {} ({})", set.len(), report.parents.len(), set.iter().join(", ")),
    );
    Ok(())
}

#[instrument(skip(container))]
fn cmd_check(container: &ServiceContainer, input: &InputArgs) -> CliResult<()> {
    let text = read_input(container, input)?;
    let service = container.solve_service();
    let (parents, forest) = service.forest_text(&text)?;
    let summary = ForestSummary::from(&forest);

    output::success("valid forest");
    output::field("parents", &format_parents(&parents, "None"));
    output::field("nodes", &summary.nodes);
    output::field("roots", &summary.roots);
    output::field("leaves", &summary.leaves);
    output::field("depth", &summary.depth);
    Ok(())
}

fn cmd_config(
    container: &ServiceContainer,
    cli: &Cli,
    command: &ConfigCommands,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Path => {
            output::header("Config locations");
            match global_config_path() {
                Some(path) => output::field("global", &path.display()),
                None => output::field("global", "unavailable"),
            }
            match &cli.config_dir {
                Some(dir) => output::field("local", &local_config_path(dir).display()),
                None => output::field("local", "none (use -C <DIR>)"),
            }
        }
        ConfigCommands::Template => {
            output::info(&Settings::template());
        }
    }
    Ok(())
}
