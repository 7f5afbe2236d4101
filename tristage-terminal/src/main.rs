//! Tristage - render a rotating mesh through the three raster stages.
//!
//! `tristage render` writes a PNG snapshot and an animated GIF;
//! `tristage preview` plays the sequence in the terminal
//! (Space pauses, arrows step, Q/Esc quits).
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tristage_core::{obj, render_sequence, AngleSweep, FilterMode, Frame, Mesh, RenderConfig};
use tristage_terminal::{export, PreviewApp, PreviewFrame};

#[derive(Parser)]
#[command(name = "tristage", version)]
#[command(about = "Three-stage software rasterizer: gradient edges, barycentric fill, radial colour filter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the sweep and save a PNG snapshot plus an animated GIF
    Render {
        #[command(flatten)]
        scene: SceneArgs,

        /// Angle whose triptych is saved as the static snapshot
        #[arg(long, default_value_t = 120.0)]
        snapshot_angle: f64,

        /// Snapshot output path
        #[arg(long, default_value = "pyramid_static.png")]
        snapshot: PathBuf,

        /// Animation output path
        #[arg(long, default_value = "pyramid_dynamic.gif")]
        animation: PathBuf,

        /// Animation frame rate
        #[arg(long, default_value_t = 15)]
        fps: u32,
    },

    /// Play the sweep in the terminal
    Preview {
        #[command(flatten)]
        scene: SceneArgs,

        /// Playback frame rate
        #[arg(long, default_value_t = 15)]
        fps: u32,
    },
}

#[derive(Args)]
struct SceneArgs {
    /// OBJ mesh to render instead of the built-in pyramid
    #[arg(short, long)]
    mesh: Option<PathBuf>,

    /// Side length of each stage canvas in pixels
    #[arg(short, long, default_value_t = 400)]
    size: usize,

    /// First angle of the sweep (degrees)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    start: f64,

    /// End of the sweep, exclusive (degrees)
    #[arg(long, default_value_t = 360.0, allow_negative_numbers = true)]
    end: f64,

    /// Angle increment between frames (degrees)
    #[arg(long, default_value_t = 8.0)]
    step: f64,

    /// Colour filter applied in stage L3
    #[arg(short, long, default_value = "sepia")]
    filter: String,
}

impl SceneArgs {
    fn load_mesh(&self) -> Result<Mesh> {
        match &self.mesh {
            Some(path) => load_mesh(path),
            None => Ok(Mesh::pyramid()),
        }
    }

    fn sweep(&self) -> Result<AngleSweep> {
        Ok(AngleSweep::new(self.start, self.end, self.step)?)
    }

    fn config(&self) -> Result<RenderConfig> {
        if self.size == 0 {
            bail!("canvas size must be positive");
        }
        let filter: FilterMode = self.filter.parse()?;
        Ok(RenderConfig {
            canvas_size: self.size,
            filter,
        })
    }

    fn render(&self) -> Result<(AngleSweep, Vec<Frame>)> {
        let mesh = self.load_mesh()?;
        let sweep = self.sweep()?;
        let config = self.config()?;
        let frames = render_sequence(&mesh, &sweep, &config);
        Ok((sweep, frames))
    }
}

fn load_mesh(path: &Path) -> Result<Mesh> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mesh = obj::parse_obj(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    log::info!(
        "loaded {} ({} vertices, {} faces)",
        path.display(),
        mesh.vertices().len(),
        mesh.faces().len()
    );
    Ok(mesh)
}

fn checked_fps(fps: u32) -> u32 {
    if fps == 0 {
        log::warn!("fps of 0 is not playable, using 1");
        1
    } else {
        fps
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            scene,
            snapshot_angle,
            snapshot,
            animation,
            fps,
        } => {
            let (sweep, frames) = scene.render()?;
            let Some(index) = sweep.position(snapshot_angle) else {
                bail!("snapshot angle {} is not one of the sweep's angles", snapshot_angle);
            };

            export::save_png(&frames[index].triptych(), &snapshot)?;
            let triptychs: Vec<_> = frames.iter().map(Frame::triptych).collect();
            export::save_gif(&triptychs, &animation, checked_fps(fps))?;
        }
        Command::Preview { scene, fps } => {
            let (_, frames) = scene.render()?;
            let frames = frames.iter().map(PreviewFrame::from).collect();

            println!("Starting terminal preview (press Q to quit)...");
            let mut app = PreviewApp::new(frames, checked_fps(fps))?;
            app.run()?;
        }
    }

    Ok(())
}
