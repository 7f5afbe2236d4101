//! Example: load an OBJ mesh and preview it in the terminal.
//!
//! Usage: cargo run --example load_obj -- path/to/mesh.obj

use std::env;
use std::fs;
use std::io;
use tristage_core::{obj, render_sequence, AngleSweep, Mesh, RenderConfig};
use tristage_terminal::{PreviewApp, PreviewFrame};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let mesh = match args.get(1) {
        Some(path) => {
            println!("Loading OBJ file: {}", path);
            let text = fs::read_to_string(path)?;
            obj::parse_obj(&text)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Failed to parse OBJ: {}", e)))?
        }
        None => {
            eprintln!("Usage: {} <obj-file>", args[0]);
            eprintln!("\nNo OBJ file provided, using default pyramid...");
            Mesh::pyramid()
        }
    };

    println!("Loaded {} faces", mesh.faces().len());
    let config = RenderConfig {
        canvas_size: 200,
        ..RenderConfig::default()
    };
    let frames = render_sequence(&mesh, &AngleSweep::full_turn(), &config)
        .iter()
        .map(PreviewFrame::from)
        .collect();

    let mut app = PreviewApp::new(frames, 15)?;
    app.run()
}
