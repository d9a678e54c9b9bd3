use crate::math::{Point3, Rgba};
use crate::operations::coloring::ColorBuffer;
use crate::topology::VertexId;

use super::turn::Player;

/// A render primitive the toolkit found under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickedPrimitive {
    /// Center of the picked primitive in world space.
    pub centroid: Point3,
    /// The vertex whose stone marker was hit, when the renderer knows it.
    pub marker: Option<VertexId>,
}

impl PickedPrimitive {
    /// A pick known only by its position.
    #[must_use]
    pub fn at(centroid: Point3) -> Self {
        Self {
            centroid,
            marker: None,
        }
    }

    /// A pick that hit the stone marker of `vertex`.
    #[must_use]
    pub fn marker(vertex: VertexId, centroid: Point3) -> Self {
        Self {
            centroid,
            marker: Some(vertex),
        }
    }
}

/// The rendering layer, as seen by the client core.
///
/// All calls happen on the UI thread.
pub trait Scene {
    /// Uploads the per-cell board colors.
    fn set_face_colors(&mut self, colors: &ColorBuffer);

    /// Creates the stone marker for `vertex`.
    fn add_stone_marker(&mut self, vertex: VertexId, center: Point3, radius: f64, color: Rgba);

    /// Recolors the stone marker for `vertex`.
    fn set_stone_color(&mut self, vertex: VertexId, color: Rgba);

    /// Updates the overlay that shows whose move is next.
    fn show_next_player(&mut self, player: Player);

    /// Schedules a redraw.
    fn request_redraw(&mut self);
}
