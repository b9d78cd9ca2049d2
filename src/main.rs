//! stm32gen CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.
#![deny(unsafe_code)]
mod core;

// Internal imports (std, crate)
use core::templates::{EmbeddedTemplates, EnvTemplateConfigReader, ProjectSetup, TemplateDir};
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stm32gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the project skeleton to generate
    project_name: String,
    /// Custom template directory (overrides STM32GEN_TEMPLATE_DIR and the bundled set)
    #[arg(long)]
    template_dir: Option<PathBuf>,
    /// Output directory for the generated project (defaults to the current directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .init();

    let output_dir = TemplateDir::resolve_output_dir(cli.output_dir.as_deref())
        .context("Failed to resolve output directory")?;

    // Generation against an existing project root is refused before the
    // core pipeline runs.
    let project_root = output_dir.join(&cli.project_name);
    if project_root.exists() {
        anyhow::bail!("project root already exists: {}", project_root.display());
    }

    let resolved =
        TemplateDir::resolve_template_dir(cli.template_dir.as_deref(), &EnvTemplateConfigReader)
            .context("Failed to resolve template directory")?;

    // With no override, the bundled set is materialized into a scratch
    // directory that lives for the duration of the run.
    let mut _scratch_guard = None;
    let template_dir = match resolved {
        Some(dir) => dir,
        None => {
            let scratch =
                tempfile::tempdir().context("Failed to create template scratch directory")?;
            let count = EmbeddedTemplates::export_to(scratch.path())
                .context("Failed to export bundled templates")?;
            info!(count, "using bundled template set");
            let dir = scratch.path().to_path_buf();
            _scratch_guard = Some(scratch);
            dir
        }
    };

    info!(project = %cli.project_name, "Generating STM32 project skeleton");
    let setup = ProjectSetup::with_output_dir(template_dir, output_dir)
        .await
        .context("Failed to initialize project setup")?;

    let status = setup.generate(&cli.project_name).await.map_err(|e| {
        error!("Failed to generate project skeleton: {e}");
        anyhow::anyhow!("Failed to generate project skeleton: {e}")
    })?;

    if !status {
        anyhow::bail!(
            "project generation failed for '{}'",
            cli.project_name
        );
    }

    info!(
        root = %project_root.display(),
        "Successfully generated project skeleton"
    );
    Ok(())
}
