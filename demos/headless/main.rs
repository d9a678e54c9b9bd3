//! Headless Polyclash session on an icosahedral board.
//!
//! Plays a few scripted presses against an in-process board, then has the
//! board capture a stone, logging every scene mutation.
//!
//! Usage:
//! ```text
//! cargo run --example headless
//! RUST_LOG=polyclash=debug cargo run --example headless
//! ```

use polyclash::client::{GameClient, LocalBoard, PickedPrimitive, Player, Scene};
use polyclash::config::ClientConfig;
use polyclash::math::{Point3, Rgba};
use polyclash::operations::coloring::ColorBuffer;
use polyclash::operations::creation::MakeIcosahedron;
use polyclash::topology::VertexId;
use polyclash::Result;

/// Scene that only logs what a renderer would be asked to do.
#[derive(Default)]
struct LogScene {
    frames: usize,
}

impl Scene for LogScene {
    fn set_face_colors(&mut self, colors: &ColorBuffer) {
        tracing::info!(cells = colors.len(), "face colors uploaded");
    }

    fn add_stone_marker(&mut self, vertex: VertexId, center: Point3, radius: f64, _color: Rgba) {
        tracing::debug!(%vertex, ?center, radius, "marker added");
    }

    fn set_stone_color(&mut self, vertex: VertexId, color: Rgba) {
        tracing::info!(%vertex, rgba = ?color.to_rgba8(), "stone recolored");
    }

    fn show_next_player(&mut self, player: Player) {
        tracing::info!(%player, "next to move");
    }

    fn request_redraw(&mut self) {
        self.frames += 1;
    }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the demo and the client core.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("headless=info".parse().unwrap_or_default())
        .add_directive("polyclash=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ClientConfig {
        group_size: 3,
        ..ClientConfig::default()
    };
    let board = MakeIcosahedron::new(1.0, config.group_size).execute()?;

    let mut authority = LocalBoard::new(board.topology.vertices().len());
    let mut scene = LogScene::default();
    let mut client = GameClient::new(config, board.topology.clone(), &mut authority, &mut scene)?;

    // Presses land on render cells; the client snaps each to a vertex.
    let presses = [Some(0), Some(7), None, Some(31), Some(58)];
    for cell in presses {
        let pick = cell
            .and_then(|c| board.mesh.cell_centroid(c))
            .map(PickedPrimitive::at);
        let outcome = client.on_left_press(pick, &mut authority, &mut scene);
        tracing::info!(?cell, ?outcome, "press handled");
    }

    if let Some(&(vertex, _)) = authority.moves().first() {
        authority.remove_stones(&[vertex]);
        client.pump_notifications(&mut scene);
    }

    tracing::info!(
        moves = authority.moves().len(),
        stones = client.context().stones().occupied(),
        frames = scene.frames,
        "session finished"
    );
    Ok(())
}
