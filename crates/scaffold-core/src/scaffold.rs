//! Module and project scaffolding flows
//!
//! Both flows check every argument before the first prompt or filesystem
//! change. Configs are only ever created, never overwritten, so a flow can
//! be re-run over a partially initialized project.

use crate::config::{
    compose_module, compose_project, composer::default_name, write_config, ComposedModuleConfig,
    ModuleDraft, WriteOutcome,
};
use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use crate::prompt::{collect_modules, existing_module_prompt, Prompter};
use crate::registry::{self, ModuleType};
use crate::report::{Activity, Reporter};
use crate::scan;
use crate::validate::{validate, NameContext};
use serde::Serialize;
use std::path::{Path, PathBuf};

const SEPARATOR: &str = "---------";

/// Arguments for `new module`
#[derive(Debug, Clone, Default)]
pub struct NewModuleArgs {
    /// Module name, defaults to the working directory name
    pub module_name: Option<String>,

    /// Module type id; prompted for when absent
    pub module_type: Option<String>,

    pub from_scratch: bool,
}

/// Arguments for `new project`
#[derive(Debug, Clone, Default)]
pub struct NewProjectArgs {
    /// Project name, defaults to the project root directory name
    pub project_name: Option<String>,

    /// Comma-separated directories (relative to the project root) to scan
    /// for modules
    pub module_dirs: Option<String>,

    /// Create the project in a new `<root>/<name>` directory
    pub from_scratch: bool,
}

/// A project being assembled before anything is written
#[derive(Debug, Clone)]
pub struct ProjectScaffold {
    pub name: String,
    pub root: PathBuf,
    pub module_dirs: Option<Vec<PathBuf>>,
    pub modules: Vec<ModuleDraft>,
}

impl ProjectScaffold {
    pub fn module_types(&self) -> Vec<ModuleType> {
        self.modules.iter().map(|m| m.module_type).collect()
    }
}

/// What a project scaffolding run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReport {
    pub name: String,
    pub root: PathBuf,
    pub modules: Vec<(String, WriteOutcome)>,
    pub project: WriteOutcome,
}

/// Scaffold a single module in `working_dir`.
///
/// Returns `None` if the user declined to initialize the module.
pub async fn new_module<C, P, R>(
    config: &C,
    working_dir: &Path,
    args: &NewModuleArgs,
    prompter: &mut P,
    reporter: &R,
) -> Result<Option<WriteOutcome>>
where
    C: ProductConfig,
    P: Prompter,
    R: Reporter,
{
    if args.from_scratch && args.module_name.is_none() {
        return Err(ScaffoldError::parameter(
            "A module name is required if --from-scratch option is used",
        ));
    }

    let name = resolve_name(args.module_name.as_deref(), working_dir, NameContext::Module)?;

    let module_type = match args.module_type.as_deref() {
        Some(id) => Some(
            registry::lookup(id)
                .ok_or_else(|| ScaffoldError::parameter(format!("Module type not available: {}", id)))?,
        ),
        None => None,
    };

    reporter.header(&format!("{} new", config.display_name()))?;
    reporter.info(&format!("Initializing new module {}", name))?;
    reporter.info(SEPARATOR)?;

    let module_type = match module_type {
        Some(t) => t,
        None => {
            reporter.suspend()?;
            match existing_module_prompt(prompter, &name)? {
                Some(t) => t,
                None => {
                    reporter.info(&format!("Skipping module {}", name))?;
                    return Ok(None);
                }
            }
        }
    };

    let composed = compose_module(&ModuleDraft::new(name, module_type, working_dir));

    reporter.info(SEPARATOR)?;
    let outcome = write_module_config(&composed, config.config_file_name(), reporter).await?;

    Ok(Some(outcome))
}

/// Scaffold a project rooted at `project_root`, collecting its modules
/// either from `--module-dirs` or interactively.
pub async fn new_project<C, P, R>(
    config: &C,
    project_root: &Path,
    args: &NewProjectArgs,
    prompter: &mut P,
    reporter: &R,
) -> Result<ProjectReport>
where
    C: ProductConfig,
    P: Prompter,
    R: Reporter,
{
    if args.from_scratch && args.project_name.is_none() {
        return Err(ScaffoldError::parameter(
            "A project name is required if --from-scratch option is used",
        ));
    }
    if args.from_scratch && args.module_dirs.is_some() {
        return Err(ScaffoldError::parameter(
            "The --module-dirs option cannot be used together with --from-scratch",
        ));
    }

    let name = resolve_name(args.project_name.as_deref(), project_root, NameContext::Project)?;

    let module_dirs = args
        .module_dirs
        .as_deref()
        .map(|raw| parse_module_dirs(raw, project_root))
        .transpose()?;

    let root = if args.from_scratch {
        let root = project_root.join(&name);
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| ScaffoldError::io(&root, e))?;
        root
    } else {
        project_root.to_path_buf()
    };

    let mut scaffold = ProjectScaffold {
        name,
        root,
        module_dirs,
        modules: Vec::new(),
    };

    reporter.header(&format!("{} new", config.display_name()))?;
    reporter.info(&format!(
        "Initializing new {} project {}",
        config.display_name(),
        scaffold.name
    ))?;
    reporter.info(SEPARATOR)?;
    reporter.suspend()?;

    match &scaffold.module_dirs {
        Some(dirs) => {
            for dir in dirs {
                for candidate in scan::scan(dir).await? {
                    let module_name = validate(&candidate, NameContext::Module)?;
                    if let Some(module_type) = existing_module_prompt(prompter, &module_name)? {
                        scaffold
                            .modules
                            .push(ModuleDraft::new(module_name, module_type, dir));
                    }
                }
            }
        }
        None => {
            for module in collect_modules(prompter)? {
                scaffold.modules.push(ModuleDraft::new(
                    module.name,
                    module.module_type,
                    &scaffold.root,
                ));
            }
        }
    }

    reporter.info(SEPARATOR)?;
    write_project(config, &scaffold, reporter).await
}

async fn write_project<C: ProductConfig, R: Reporter>(
    config: &C,
    scaffold: &ProjectScaffold,
    reporter: &R,
) -> Result<ProjectReport> {
    let file_name = config.config_file_name();

    let mut modules = Vec::with_capacity(scaffold.modules.len());
    for draft in &scaffold.modules {
        let composed = compose_module(draft);
        let outcome = write_module_config(&composed, file_name, reporter).await?;
        modules.push((composed.name, outcome));
    }

    let project_config = compose_project(&scaffold.name, &scaffold.module_types());
    let project = write_with_activity(
        reporter,
        &project_config,
        &scaffold.root.join(file_name),
        "Setting up project",
        &format!("Project {} set up", scaffold.name),
        &format!(
            "{} config file already exists for project {}, skipping",
            config.display_name(),
            scaffold.name
        ),
    )
    .await?;

    reporter.info(&format!(
        "All set up! Be sure to check out our docs at `{}`",
        config.docs_url()
    ))?;

    Ok(ProjectReport {
        name: scaffold.name.clone(),
        root: scaffold.root.clone(),
        modules,
        project,
    })
}

/// Write one module config, reported as its own activity
pub async fn write_module_config<R: Reporter>(
    composed: &ComposedModuleConfig,
    file_name: &str,
    reporter: &R,
) -> Result<WriteOutcome> {
    write_with_activity(
        reporter,
        &composed.document(),
        &composed.config_path(file_name),
        &format!("Initializing module {}", composed.name),
        &format!("Module {} initialized", composed.name),
        &format!(
            "Config file already exists for module {}, skipping",
            composed.name
        ),
    )
    .await
}

async fn write_with_activity<T: Serialize, R: Reporter>(
    reporter: &R,
    config: &T,
    destination: &Path,
    start: &str,
    written: &str,
    skipped: &str,
) -> Result<WriteOutcome> {
    let activity = reporter.start(start)?;
    match write_config(config, destination).await {
        Ok(WriteOutcome::Written) => {
            activity.success(written)?;
            Ok(WriteOutcome::Written)
        }
        Ok(WriteOutcome::SkippedExisting) => {
            activity.warn(skipped)?;
            Ok(WriteOutcome::SkippedExisting)
        }
        Err(e) => {
            activity.fail(&e.to_string())?;
            Err(e)
        }
    }
}

fn resolve_name(given: Option<&str>, dir: &Path, context: NameContext) -> Result<String> {
    let name = match given {
        Some(name) => name.trim().to_string(),
        None => default_name(dir).ok_or_else(|| {
            ScaffoldError::parameter(format!(
                "Cannot derive a {} name from {}, please provide one",
                context,
                dir.display()
            ))
        })?,
    };
    validate(&name, context)
}

fn parse_module_dirs(raw: &str, project_root: &Path) -> Result<Vec<PathBuf>> {
    raw.split(',')
        .map(|dir| validate(dir.trim(), NameContext::Module).map(|dir| project_root.join(dir)))
        .collect()
}
