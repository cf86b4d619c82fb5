//! `claw-render`: technique diagrams and photo overlays from the command line.

use std::path::{Path, PathBuf};

use analysis_format::load_analysis_file;
use clap::{Parser, Subcommand};
use claw_canvas::FontSource;
use claw_render::{PhotoCompositor, RenderConfig, SceneComposer};
use claw_types::TechniqueId;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "claw-render", version, about = "Render claw machine guidance images")]
struct Cli {
    /// JSON render configuration; missing keys keep their defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// TrueType font for labels, overriding the configured one.
    #[arg(long, global = true)]
    font: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the techniques that have diagrams.
    Techniques,
    /// Write one PNG per step of a technique diagram.
    Diagrams {
        /// Arcade name or English name, e.g. `tatehame` or `upright tip`.
        technique: String,
        #[arg(long, short, default_value = ".")]
        out_dir: PathBuf,
        /// Render at twice the pixel density.
        #[arg(long)]
        retina: bool,
    },
    /// Composite guidance markers onto a photograph.
    Overlay {
        photo: PathBuf,
        analysis: PathBuf,
        #[arg(long, short, default_value = "overlay.png")]
        out: PathBuf,
        /// Zero-based step to show.
        #[arg(long, default_value_t = 0)]
        step: usize,
        /// Show every step on one image instead of a single move.
        #[arg(long)]
        overview: bool,
        /// Also print the result as a data URL.
        #[arg(long)]
        data_url: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let font = load_font(cli.font.as_deref().or(config.font_path.as_deref()));

    match cli.command {
        Commands::Techniques => {
            for id in TechniqueId::ALL {
                println!("{:<14} {}", id.arcade_name(), id.description());
            }
        }
        Commands::Diagrams {
            technique,
            out_dir,
            retina,
        } => {
            let mut diagram = config.diagram;
            if retina {
                diagram.dpi_scale = 2.0;
            }
            let id = resolve_technique(&technique)?;
            let frames = SceneComposer::new(diagram).with_font(font).compose(id)?;
            std::fs::create_dir_all(&out_dir)?;
            for (i, frame) in frames.iter().enumerate() {
                let path = out_dir.join(format!("step_{}.png", i + 1));
                frame.write_to(&path)?;
                println!("{}", path.display());
            }
        }
        Commands::Overlay {
            photo,
            analysis,
            out,
            step,
            overview,
            data_url,
        } => {
            let analysis = load_analysis_file(&analysis)?;
            let bytes = std::fs::read(&photo)?;
            let compositor = PhotoCompositor::new(config.overlay).with_font(font);
            let snapshot = if overview {
                compositor.try_compose_overview(&bytes, &analysis.steps)?
            } else {
                compositor.try_compose(&bytes, &analysis.steps, step, analysis.camera_hint.as_ref())?
            };
            snapshot.write_to(&out)?;
            info!(path = %out.display(), technique = ?analysis.technique, "overlay written");
            if data_url {
                println!("{}", snapshot.to_data_url());
            } else {
                println!("{}", out.display());
            }
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(RenderConfig::default()),
    }
}

/// Unknown names are an error listing every technique that has diagrams.
fn resolve_technique(name: &str) -> Result<TechniqueId, String> {
    TechniqueId::parse(name).ok_or_else(|| {
        let available: Vec<String> = TechniqueId::ALL.iter().map(ToString::to_string).collect();
        format!("unknown technique: {name} (available: {})", available.join(", "))
    })
}

/// A missing or unreadable font only costs the labels.
fn load_font(path: Option<&Path>) -> Option<FontSource> {
    let path = path?;
    FontSource::from_file(path)
        .map_err(|e| warn!(path = %path.display(), error = %e, "font not loaded; labels skipped"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_technique_is_an_error() {
        let err = resolve_technique("moonwalk").unwrap_err();
        assert!(err.contains("moonwalk"));
        assert!(err.contains("tatehame"));
        assert!(resolve_technique("").is_err());
    }

    #[test]
    fn test_known_techniques_resolve() {
        assert_eq!(resolve_technique("tatehame"), Ok(TechniqueId::UprightTip));
        assert_eq!(resolve_technique("lever-tip flip"), Ok(TechniqueId::LeverFlip));
    }
}
