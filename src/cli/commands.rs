//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::render::{render_json, render_tree};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, OutputFormat, Settings};
use crate::domain::{OrgDirectory, OrgFilter};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let project_dir = resolve_project_dir(cli.project_dir.as_deref())?;
    debug!("project_dir: {}", project_dir.display());

    match &cli.command {
        Some(Commands::Tree {
            department,
            unit,
            format,
        }) => {
            let container = ServiceContainer::new(Settings::load(Some(&project_dir))?);
            let filter = OrgFilter::new(*department, *unit);
            let (text, empty) = render_chart(&container, cli.data.as_deref(), &filter, *format)?;
            output::info(&text);
            if empty {
                output::warning("no employees match the selected filter");
            }
            Ok(())
        }
        Some(Commands::Departments) => {
            let container = ServiceContainer::new(Settings::load(Some(&project_dir))?);
            list_departments(&container, cli.data.as_deref())
        }
        Some(Commands::Units { department }) => {
            let container = ServiceContainer::new(Settings::load(Some(&project_dir))?);
            list_units(&container, cli.data.as_deref(), *department)
        }
        Some(Commands::Config { command }) => config_command(command, &project_dir),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell);
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, run `orgtree --help`".to_string(),
        )),
    }
}

fn resolve_project_dir(project_dir: Option<&Path>) -> CliResult<PathBuf> {
    match project_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir()
            .map_err(|e| CliError::Infra(InfraError::io("determine current directory", e))),
    }
}

fn load_directory(container: &ServiceContainer, data: Option<&Path>) -> CliResult<OrgDirectory> {
    let path = data
        .map(Path::to_path_buf)
        .or_else(|| container.settings.data_file.clone())
        .ok_or(ApplicationError::DataFileNotSet)?;
    Ok(container.org_chart().load(&path)?)
}

/// Build and render the chart. Returns the text and whether the chart is empty.
#[instrument(skip(container))]
pub fn render_chart(
    container: &ServiceContainer,
    data: Option<&Path>,
    filter: &OrgFilter,
    format: Option<OutputFormat>,
) -> CliResult<(String, bool)> {
    let directory = load_directory(container, data)?;
    let chart = container.org_chart().chart(&directory, filter);
    let format = format.unwrap_or(container.settings.display.format);

    let text = match format {
        OutputFormat::Tree => render_tree(&chart, &container.settings.display),
        OutputFormat::Json => render_json(&chart)?,
    };
    Ok((text, chart.is_empty()))
}

#[instrument(skip(container))]
fn list_departments(container: &ServiceContainer, data: Option<&Path>) -> CliResult<()> {
    let directory = load_directory(container, data)?;
    output::header(&format!("{} departments", directory.departments.len()));
    for department in &directory.departments {
        output::detail(&format!(
            "{:>4}  {:<8} {}",
            department.id,
            department.code.as_deref().unwrap_or("-"),
            department.name.as_deref().unwrap_or("")
        ));
    }
    Ok(())
}

#[instrument(skip(container))]
fn list_units(
    container: &ServiceContainer,
    data: Option<&Path>,
    department: Option<i64>,
) -> CliResult<()> {
    let directory = load_directory(container, data)?;
    let filter = OrgFilter::new(department, None);
    let units = container.org_chart().units(&directory, &filter);
    output::header(&format!("{} units", units.len()));
    for unit in units {
        let department_name = unit
            .department
            .as_ref()
            .and_then(|d| d.name.clone())
            .unwrap_or_default();
        output::detail(&format!(
            "{:>4}  {:<8} {:<24} {}",
            unit.id,
            unit.code.as_deref().unwrap_or("-"),
            unit.name.as_deref().unwrap_or(""),
            department_name
        ));
    }
    Ok(())
}

fn config_command(command: &ConfigCommands, project_dir: &Path) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(Some(project_dir))?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| describe_path(&p))
                .unwrap_or_else(|| "unavailable".to_string());
            output::action("global", &global);
            output::action("local", &describe_path(&local_config_path(project_dir)));
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".to_string())
                })?
            } else {
                local_config_path(project_dir)
            };
            init_config(&ServiceContainer::new(Settings::default()), &path)?;
            output::action("created", &path.display());
            Ok(())
        }
    }
}

/// Write the config template, refusing to overwrite an existing file.
pub fn init_config(container: &ServiceContainer, path: &Path) -> CliResult<()> {
    if container.fs.exists(path) {
        return Err(CliError::Usage(format!(
            "config already exists: {}",
            path.display()
        )));
    }
    container
        .fs
        .ensure_parent(path)
        .map_err(|e| InfraError::at_path("create directory for", path, e))?;
    container
        .fs
        .write(path, &Settings::template())
        .map_err(|e| InfraError::at_path("write", path, e))?;
    Ok(())
}

fn describe_path(path: &Path) -> String {
    let state = if path.exists() { "exists" } else { "not found" };
    format!("{} ({})", path.display(), state)
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
