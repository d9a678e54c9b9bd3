use crate::config::Palette;
use crate::topology::{BoardTopology, FaceKind};

use super::ColorBuffer;

/// Derives the static per-cell color buffer from vertex-group membership.
///
/// A face whose vertices all lie in one group is painted in that group's
/// color. Mixed triangles are painted as sea; mixed pentagons keep the
/// buffer's prior color.
pub struct DeriveFaceColors<'a> {
    palette: &'a Palette,
}

impl<'a> DeriveFaceColors<'a> {
    /// Creates a new `DeriveFaceColors` operation.
    #[must_use]
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// Executes the operation on a fresh buffer filled with the palette's
    /// default color.
    #[must_use]
    pub fn execute(&self, topology: &BoardTopology) -> ColorBuffer {
        let mut buffer = ColorBuffer::new(topology.cell_count(), self.palette.default_color);
        self.apply(topology, &mut buffer);
        buffer
    }

    /// Paints `buffer` in place.
    ///
    /// `buffer` must have at least `topology.cell_count()` cells. Groups
    /// without a palette color are left unpainted; [`Palette::covers`]
    /// rejects such palettes before a client is built.
    pub fn apply(&self, topology: &BoardTopology, buffer: &mut ColorBuffer) {
        let vertices = topology.vertices();
        let mut painted = 0usize;

        for face in topology.faces() {
            let color = match (face.monochrome_group(vertices), face.kind) {
                (Some(group), _) => self.palette.group_color(group),
                (None, FaceKind::Triangle) => Some(self.palette.sea_color),
                (None, FaceKind::Pentagon) => None,
            };
            if let Some(color) = color {
                buffer.paint(&face.cells, color);
                painted += 1;
            }
        }

        tracing::debug!(
            faces = topology.faces().len(),
            painted,
            "face colors derived"
        );
    }
}
