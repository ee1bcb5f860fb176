//! Implementation of the `goscaff new` command.
//!
//! Responsibility: merge CLI flags over the `[defaults]` of the app config
//! into a core `ProjectConfig`, call the generator service, and display
//! results. No business logic lives here.

use std::io::IsTerminal as _;
use std::path::Path;

use serde_json::json;
use tracing::{debug, info, instrument};

use goscaff_adapters::{GoServiceRenderer, LocalFilesystem};
use goscaff_core::{
    application::{GenerationReport, GeneratorService},
    domain::{CiProvider, ConfigFormat, Database, Framework, GoVersion, Logger, ProjectConfig, ProjectStructure},
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::{AppConfig, Defaults},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `goscaff new` command.
///
/// Dispatch sequence:
/// 1. Merge flags over config defaults and validate into a `ProjectConfig`
/// 2. Print the configuration summary
/// 3. Dry run: list the planned tree and stop
/// 4. Refuse (or confirm) an existing target, confirm generation
/// 5. Generate via `GeneratorService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Build and validate the project
    let project = build_project(&args, &config.defaults)?;
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.generation.output_dir.clone());
    ensure_output_dir(&output_dir)?;
    let root = GeneratorService::project_root(&project, &output_dir);

    debug!(
        framework = %project.framework(),
        format = %project.config_format(),
        databases = project.databases().len(),
        root = %root.display(),
        "Project resolved"
    );

    let json = output.format() == OutputFormat::Json;
    let interactive = !args.yes && !global.quiet && std::io::stdin().is_terminal();

    // 2. Summary
    if !json {
        show_configuration(&project, &root, &output)?;
    }

    let service = GeneratorService::new(
        Box::new(GoServiceRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let structure = service.plan(&project, &output_dir)?;
        return show_plan(&structure, args.force, &output);
    }

    // 4. Existing directory and confirmation
    let overwrite = resolve_overwrite(&root, args.force, &config, interactive)?;
    if interactive && !prompt::confirm("Generate this project?", true)? {
        return Err(CliError::Cancelled);
    }

    // 5. Generate
    info!(project = %project.project_name(), path = %root.display(), "Generation started");
    let spinner = output.spinner(&format!("Writing {}...", root.display()));
    let result = service.generate(&project, &output_dir, overwrite);
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let report = result?;
    info!(files = report.file_count(), "Generation completed");

    // 6. Report
    if json {
        output.json(&report_json(&report))?;
        return Ok(());
    }

    output.success(&format!(
        "Project '{}' created ({} files)",
        project.project_name(),
        report.file_count()
    ))?;
    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        for step in next_steps(&project, &report.root) {
            output.print(&format!("  {step}"))?;
        }
    }

    Ok(())
}

// ── Project construction ──────────────────────────────────────────────────────

/// Merge CLI flags over config defaults. A flag always wins; an invalid
/// value from either source surfaces as `InvalidConfiguration`.
fn build_project(args: &NewArgs, defaults: &Defaults) -> CliResult<ProjectConfig> {
    let pick = |flag: &Option<String>, fallback: &str| -> String {
        flag.clone().unwrap_or_else(|| fallback.to_string())
    };

    let framework: Framework = pick(&args.framework, &defaults.framework).parse()?;
    let logger: Logger = pick(&args.logger, &defaults.logger).parse()?;
    let format: ConfigFormat = pick(&args.config_format, &defaults.config_format).parse()?;
    let go_version: GoVersion = pick(&args.go_version, &defaults.go_version).parse()?;

    let database_names = if args.databases.is_empty() {
        &defaults.databases
    } else {
        &args.databases
    };
    let databases = database_names
        .iter()
        .map(|name| name.parse::<Database>())
        .collect::<Result<Vec<_>, _>>()?;

    let ci = match args.ci.as_deref().or(defaults.ci.as_deref()) {
        None => None,
        Some(value) if value.trim().eq_ignore_ascii_case("none") || value.trim().is_empty() => None,
        Some(value) => Some(value.parse::<CiProvider>()?),
    };

    let module = args.module.clone().unwrap_or_else(|| {
        format!(
            "{}/{}",
            defaults.module_prefix.trim_end_matches('/'),
            args.name
        )
    });

    let project = ProjectConfig::builder(args.name.clone())
        .module_path(module)
        .go_version(go_version)
        .framework(framework)
        .databases(databases)
        .logger(logger)
        .config_format(format)
        .ci(ci)
        .tracing(args.tracing.unwrap_or(defaults.tracing))
        .metrics(args.metrics.unwrap_or(defaults.metrics))
        .docker(args.docker.unwrap_or(defaults.docker))
        .env_sample(args.env_sample.unwrap_or(defaults.env_sample))
        .build()?;
    Ok(project)
}

fn ensure_output_dir(dir: &Path) -> CliResult<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("output path '{}' is not a directory", dir.display()),
            source: None,
        });
    }
    Ok(())
}

/// Decide whether generation may write into an existing root.
fn resolve_overwrite(
    root: &Path,
    force: bool,
    config: &AppConfig,
    interactive: bool,
) -> CliResult<bool> {
    if force || !root.exists() {
        return Ok(force);
    }
    if !(config.generation.overwrite_prompt && interactive) {
        return Err(CliError::ProjectExists {
            path: root.to_path_buf(),
        });
    }
    if !cfg!(feature = "interactive") {
        return Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        });
    }
    let question = format!("'{}' already exists. Write into it?", root.display());
    if prompt::confirm(&question, false)? {
        Ok(true)
    } else {
        Err(CliError::Cancelled)
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(project: &ProjectConfig, root: &Path, out: &OutputManager) -> CliResult<()> {
    let databases = if project.databases().is_empty() {
        "none".to_string()
    } else {
        project
            .databases()
            .iter()
            .map(|db| db.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let toggle = |on: bool| if on { "yes" } else { "no" };

    out.header("Configuration")?;
    out.print(&format!("  Project:      {}", project.project_name()))?;
    out.print(&format!("  Module:       {}", project.module_path()))?;
    out.print(&format!("  Go version:   {}", project.go_version()))?;
    out.print(&format!("  Framework:    {}", project.framework().display_name()))?;
    out.print(&format!("  Databases:    {databases}"))?;
    out.print(&format!("  Logger:       {}", project.logger().display_name()))?;
    out.print(&format!("  Config:       {}", project.config_format().display_name()))?;
    out.print(&format!("  Tracing:      {}", toggle(project.tracing_enabled())))?;
    out.print(&format!("  Metrics:      {}", toggle(project.metrics_enabled())))?;
    out.print(&format!("  Docker:       {}", toggle(project.docker_included())))?;
    out.print(&format!(
        "  CI:           {}",
        project.ci().map_or("none", |ci| ci.display_name())
    ))?;
    out.print(&format!("  Location:     {}", root.display()))?;
    out.print("")?;
    Ok(())
}

fn show_plan(structure: &ProjectStructure, force: bool, out: &OutputManager) -> CliResult<()> {
    let root = structure.root();
    let directories: Vec<_> = structure.directories().map(|d| d.path.clone()).collect();
    let files: Vec<_> = structure.files().map(|f| f.path.clone()).collect();

    if out.format() == OutputFormat::Json {
        out.json(&json!({
            "dry_run": true,
            "root": root,
            "directories": directories,
            "files": files,
        }))?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create {} directories and {} files at {}",
        directories.len(),
        files.len(),
        root.display()
    ))?;
    for dir in &directories {
        out.print(&format!("  {}/", dir.display()))?;
    }
    for file in &files {
        out.print(&format!("  {}", file.display()))?;
    }
    if root.exists() && !force {
        out.warning(&format!(
            "{} already exists; generating would require --force",
            root.display()
        ))?;
    }
    Ok(())
}

fn report_json(report: &GenerationReport) -> serde_json::Value {
    json!({
        "root": report.root,
        "directories": report.directories,
        "files": report.files,
    })
}

fn next_steps(project: &ProjectConfig, root: &Path) -> Vec<String> {
    let mut steps = vec![format!("cd {}", root.display())];
    steps.push("cp .env.example .env".into());
    if let Some(ext) = project.config_format().extension() {
        steps.push(format!("cp config.{ext}.example config.{ext}"));
    }
    steps.push("go mod tidy".into());
    if project.docker_included() && !project.databases().is_empty() {
        steps.push("make docker-up".into());
    }
    steps.push("make run".into());
    steps
}

mod prompt {
    use crate::error::CliResult;

    /// Yes/no question on the terminal.
    #[cfg(feature = "interactive")]
    pub(super) fn confirm(question: &str, default: bool) -> CliResult<bool> {
        use crate::error::CliError;

        dialoguer::Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(|e| CliError::IoError {
                message: "failed to read confirmation input".into(),
                source: std::io::Error::other(e),
            })
    }

    /// Yes/no question on stdin when built without `dialoguer`.
    #[cfg(not(feature = "interactive"))]
    pub(super) fn confirm(question: &str, default: bool) -> CliResult<bool> {
        use std::io::{self, Write};

        use crate::error::IntoCli;

        let hint = if default { "[Y/n]" } else { "[y/N]" };
        print!("{question} {hint} ");
        io::stdout()
            .flush()
            .with_cli_context(|| "failed to flush stdout")?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .with_cli_context(|| "failed to read confirmation input")?;

        Ok(match input.trim().to_ascii_lowercase().as_str() {
            "" => default,
            answer => answer == "y" || answer == "yes",
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
