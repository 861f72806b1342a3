//! Command line front-end.
//!
//! `render` turns a project into SVG and/or DXF files, `curves` lists the
//! curve catalogue and `new` writes a starter project.

use anyhow::{bail, Context as _};
use clap::{Parser, Subcommand};
use guillochage_core::{RenderSegment, Resolution};
use guillochage_engine::{CurveInfo, CurveRegistry, EngineOptions, GeometryEngine};
use guillochage_io::{DxfExporter, DxfOptions, ProjectFile, SvgExporter, SvgOptions};
use guillochage_settings::Config;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "guillochage", version, about)]
pub struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a project to SVG and/or DXF.
    Render(RenderArgs),
    /// List the available trajectories and waves.
    Curves,
    /// Write a starter project.
    New(NewArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Project file (.guillo or .json).
    pub project: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Output DXF path.
    #[arg(long)]
    pub dxf: Option<PathBuf>,

    /// Force every line to this resolution (low, medium, high, ultra).
    #[arg(long)]
    pub resolution: Option<Resolution>,

    /// Configuration file; defaults to the platform config location.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Where to write the project.
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.cmd {
        Command::Render(args) => cmd_render(args).map(|_| ()),
        Command::Curves => {
            print!("{}", curve_listing(&CurveRegistry::with_builtins()));
            Ok(())
        }
        Command::New(args) => cmd_new(args),
    }
}

/// Loads the given configuration, or the platform one when it exists.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("load config '{}'", path.display())),
        None => match Config::default_path() {
            Ok(default) => Config::load_or_default(&default)
                .with_context(|| format!("load config '{}'", default.display())),
            Err(e) => {
                debug!(error = %e, "no platform config directory, using defaults");
                Ok(Config::default())
            }
        },
    }
}

pub fn engine_options(config: &Config, resolution: Option<Resolution>) -> EngineOptions {
    EngineOptions {
        generation_padding: config.engine.generation_padding,
        bisection_steps: config.engine.bisection_steps,
        default_resolution: config.engine.default_resolution,
        resolution_override: resolution,
    }
}

pub fn svg_options(config: &Config) -> SvgOptions {
    SvgOptions {
        margin_mm: config.export.svg_margin_mm,
        outline_color: config.export.svg_outline_color.clone(),
    }
}

pub fn dxf_options(config: &Config) -> DxfOptions {
    DxfOptions {
        arc_steps: config.export.dxf_arc_steps,
    }
}

/// Renders a project and returns the files written.
pub fn cmd_render(args: RenderArgs) -> anyhow::Result<Vec<PathBuf>> {
    let config = load_config(args.config.as_deref())?;
    let project = ProjectFile::load(&args.project)
        .with_context(|| format!("load project '{}'", args.project.display()))?;

    let engine = GeometryEngine::new(Arc::new(CurveRegistry::with_builtins()))
        .with_options(engine_options(&config, args.resolution));
    let segments = engine.calculate(&project.calques, &project.forme);
    info!(
        project = %args.project.display(),
        layers = project.calques.len(),
        segments = segments.len(),
        "project rendered"
    );

    let svg = match (&args.svg, &args.dxf) {
        (None, None) => Some(default_output(&config, &args.project, "svg")),
        (svg, _) => svg.clone(),
    };

    let mut written = Vec::new();
    if let Some(path) = svg {
        write_svg(&config, &path, &segments, &project)?;
        written.push(path);
    }
    if let Some(path) = args.dxf {
        write_dxf(&config, &path, &segments, &project)?;
        written.push(path);
    }
    Ok(written)
}

fn default_output(config: &Config, project: &Path, extension: &str) -> PathBuf {
    let stem = project
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "guillochage".to_string());
    config
        .export
        .output_directory
        .join(format!("{stem}.{extension}"))
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_svg(
    config: &Config,
    path: &Path,
    segments: &[RenderSegment],
    project: &ProjectFile,
) -> anyhow::Result<()> {
    ensure_parent(path)?;
    SvgExporter::new(svg_options(config))
        .write_to_file(path, segments, &project.forme)
        .with_context(|| format!("write svg '{}'", path.display()))
}

fn write_dxf(
    config: &Config,
    path: &Path,
    segments: &[RenderSegment],
    project: &ProjectFile,
) -> anyhow::Result<()> {
    ensure_parent(path)?;
    DxfExporter::new(dxf_options(config))
        .write_to_file(path, segments, &project.forme)
        .with_context(|| format!("write dxf '{}'", path.display()))
}

pub fn cmd_new(args: NewArgs) -> anyhow::Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "'{}' already exists (use --force to overwrite)",
            args.path.display()
        );
    }
    ensure_parent(&args.path)?;
    ProjectFile::default()
        .save(&args.path)
        .with_context(|| format!("write project '{}'", args.path.display()))?;
    Ok(())
}

fn describe(info: &CurveInfo) -> String {
    let mut line = format!("  {:<16} {}: {}", info.key, info.name, info.description);
    if !info.default_params.is_empty() {
        let defaults = info
            .default_params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ");
        line.push_str(&format!(" [{defaults}]"));
    }
    line.push('\n');
    line
}

/// Catalogue text printed by `curves`.
pub fn curve_listing(registry: &CurveRegistry) -> String {
    let mut out = String::from("Trajectories:\n");
    for info in registry.trajectories() {
        out.push_str(&describe(&info));
    }
    out.push_str("Waves:\n");
    for info in registry.waves() {
        out.push_str(&describe(&info));
    }
    out
}
