//! Garden scaffolding CLI - creates project and module configs

use anyhow::Result;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, Subcommand};
use scaffold_core::tui::{self, ClackPrompter, ClackReporter};
use scaffold_core::{NewModuleArgs, NewProjectArgs, ProductConfig, WriteOutcome};
use tracing_subscriber::{fmt, EnvFilter};

/// Garden product configuration
#[derive(Clone)]
pub struct GardenConfig;

impl ProductConfig for GardenConfig {
    fn display_name(&self) -> &'static str {
        "Garden"
    }

    fn docs_url(&self) -> &'static str {
        "https://docs.garden.io"
    }

    fn cli_description(&self) -> &'static str {
        "Create a new Garden project or add a new module"
    }

    fn project_root_env(&self) -> &'static str {
        "GARDEN_PROJECT_ROOT"
    }
}

#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(version)]
pub struct Args {
    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project or add a new module
    New {
        #[command(subcommand)]
        target: NewCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum NewCommand {
    /// Create scaffolding for a new project
    #[command(alias = "p")]
    Project(CliProjectArgs),
    /// Create scaffolding for a new module
    #[command(alias = "m")]
    Module(CliModuleArgs),
}

#[derive(Parser, Debug)]
pub struct CliProjectArgs {
    /// The name of the project (defaults to project root directory name)
    pub project_name: Option<String>,

    /// Relative path to modules directory (if any). Use comma as a separator to specify multiple directories
    #[arg(long = "module-dirs")]
    pub module_dirs: Option<String>,

    /// Create a new directory for the project instead of using the project root
    #[arg(long = "from-scratch")]
    pub from_scratch: bool,
}

impl From<CliProjectArgs> for NewProjectArgs {
    fn from(args: CliProjectArgs) -> Self {
        NewProjectArgs {
            project_name: args.project_name,
            module_dirs: args.module_dirs,
            from_scratch: args.from_scratch,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliModuleArgs {
    /// The name of the module (defaults to current directory name)
    pub module_name: Option<String>,

    /// Type of module (container, function, npm-package)
    #[arg(short, long = "type")]
    pub module_type: Option<String>,

    /// Requires a module name to be given
    #[arg(long = "from-scratch")]
    pub from_scratch: bool,
}

impl From<CliModuleArgs> for NewModuleArgs {
    fn from(args: CliModuleArgs) -> Self {
        NewModuleArgs {
            module_name: args.module_name,
            module_type: args.module_type,
            from_scratch: args.from_scratch,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(config: &GardenConfig, command: NewCommand) -> Result<()> {
    let mut prompter = ClackPrompter;
    let reporter = ClackReporter;

    match command {
        NewCommand::Project(args) => {
            let project_root = config.project_root()?;
            let report = scaffold_core::new_project(
                config,
                &project_root,
                &args.into(),
                &mut prompter,
                &reporter,
            )
            .await?;
            tracing::info!(
                project = %report.name,
                modules = report.modules.len(),
                "project scaffolded"
            );
            tui::finish(&format!("Project {} ready", report.name))?;
        }
        NewCommand::Module(args) => {
            let working_dir = std::env::current_dir()?;
            let outcome =
                scaffold_core::new_module(config, &working_dir, &args.into(), &mut prompter, &reporter)
                    .await?;
            let message = match outcome {
                Some(WriteOutcome::Written) => "Module ready",
                Some(WriteOutcome::SkippedExisting) => "Module already initialized",
                None => "No module initialized",
            };
            tui::finish(message)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = GardenConfig;
    let matches = Args::command()
        .about(config.cli_description())
        .get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    init_tracing(args.verbose);

    let result = match args.command {
        Command::New { target } => run(&config, target).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
