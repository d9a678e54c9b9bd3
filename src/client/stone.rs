use crate::config::Palette;
use crate::math::Rgba;
use crate::topology::VertexId;

use super::turn::Player;

/// Visual state of the stone marker on one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoneState {
    #[default]
    Unoccupied,
    Occupied(Player),
}

impl StoneState {
    /// Marker color for this state.
    #[must_use]
    pub fn color(self, palette: &Palette) -> Rgba {
        match self {
            Self::Unoccupied => palette.marker_color,
            Self::Occupied(Player::Black) => palette.black_stone,
            Self::Occupied(Player::White) => palette.white_stone,
        }
    }
}

/// Stone states for every vertex, as last shown on screen.
#[derive(Debug, Clone)]
pub struct Stones {
    states: Vec<StoneState>,
}

impl Stones {
    /// Creates `count` unoccupied stones.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![StoneState::Unoccupied; count],
        }
    }

    /// Returns the state at `vertex`, or `None` for an unknown vertex.
    #[must_use]
    pub fn get(&self, vertex: VertexId) -> Option<StoneState> {
        self.states.get(vertex.index()).copied()
    }

    /// Marks `vertex` as occupied by `player`.
    ///
    /// Occupancy is not checked; an occupied stone is recolored.
    /// Returns `false` if the vertex is unknown.
    pub fn place(&mut self, vertex: VertexId, player: Player) -> bool {
        self.set(vertex, StoneState::Occupied(player))
    }

    /// Marks `vertex` as unoccupied.
    ///
    /// Returns `true` only if a stone was actually removed.
    pub fn remove(&mut self, vertex: VertexId) -> bool {
        match self.get(vertex) {
            Some(StoneState::Occupied(_)) => self.set(vertex, StoneState::Unoccupied),
            _ => false,
        }
    }

    /// Number of occupied vertices.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.states
            .iter()
            .filter(|s| matches!(s, StoneState::Occupied(_)))
            .count()
    }

    fn set(&mut self, vertex: VertexId, state: StoneState) -> bool {
        match self.states.get_mut(vertex.index()) {
            Some(slot) => {
                *slot = state;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_then_remove() {
        let mut stones = Stones::new(4);
        assert!(stones.place(VertexId(2), Player::White));
        assert_eq!(stones.get(VertexId(2)), Some(StoneState::Occupied(Player::White)));
        assert_eq!(stones.occupied(), 1);
        assert!(stones.remove(VertexId(2)));
        assert_eq!(stones.get(VertexId(2)), Some(StoneState::Unoccupied));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut stones = Stones::new(4);
        stones.place(VertexId(1), Player::Black);
        assert!(stones.remove(VertexId(1)));
        assert!(!stones.remove(VertexId(1)));
        assert_eq!(stones.get(VertexId(1)), Some(StoneState::Unoccupied));
    }

    #[test]
    fn unknown_vertex_is_ignored() {
        let mut stones = Stones::new(4);
        assert!(!stones.place(VertexId(9), Player::Black));
        assert!(!stones.remove(VertexId(9)));
        assert_eq!(stones.get(VertexId(9)), None);
    }

    #[test]
    fn state_colors_follow_palette() {
        let palette = Palette::default();
        assert_eq!(StoneState::Unoccupied.color(&palette), palette.marker_color);
        assert_eq!(StoneState::Occupied(Player::Black).color(&palette), Rgba::BLACK);
        assert_eq!(StoneState::Occupied(Player::White).color(&palette), Rgba::WHITE);
    }
}
