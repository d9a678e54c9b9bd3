use crate::error::ConfigError;
use crate::math::Rgba;

/// Colors used to paint the board and its stones.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Land color of each vertex group, indexed by group.
    pub group_colors: Vec<Rgba>,
    /// Color of triangles whose vertices span several groups.
    pub sea_color: Rgba,
    /// Initial color of every render cell before faces are painted.
    pub default_color: Rgba,
    /// Color of an unoccupied stone marker.
    pub marker_color: Rgba,
    /// Stone color for the black player.
    pub black_stone: Rgba,
    /// Stone color for the white player.
    pub white_stone: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            group_colors: vec![
                Rgba::opaque(0.85, 0.75, 0.60), // earth
                Rgba::opaque(0.45, 0.85, 0.45), // green
                Rgba::opaque(0.80, 0.75, 0.45), // gold
                Rgba::opaque(0.55, 0.60, 0.85), // purple
            ],
            sea_color: Rgba::opaque(0.3, 0.5, 0.7),
            default_color: Rgba::WHITE,
            marker_color: Rgba::opaque(0.5, 0.5, 0.5),
            black_stone: Rgba::BLACK,
            white_stone: Rgba::WHITE,
        }
    }
}

impl Palette {
    /// Returns the land color of `group`, if configured.
    #[must_use]
    pub fn group_color(&self, group: usize) -> Option<Rgba> {
        self.group_colors.get(group).copied()
    }

    /// Checks that every group in `0..group_count` has a color.
    ///
    /// # Errors
    ///
    /// Returns the first group without a color.
    pub fn covers(&self, group_count: usize) -> Result<(), ConfigError> {
        if group_count > self.group_colors.len() {
            return Err(ConfigError::MissingGroupColor(self.group_colors.len()));
        }
        Ok(())
    }
}

/// Static client settings, fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Window title.
    pub title: String,
    /// Initial window size in pixels, `(width, height)`.
    pub window_size: (u32, u32),
    /// Number of consecutive vertex identifiers per group.
    pub group_size: usize,
    /// Radius of the stone marker spheres.
    pub marker_radius: f64,
    /// Board and stone colors.
    pub palette: Palette,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            title: "Polyclash".into(),
            window_size: (1600, 1200),
            group_size: 15,
            marker_radius: 0.02,
            palette: Palette::default(),
        }
    }
}
