use crate::operations::query::VertexIndex;
use crate::topology::VertexId;

use super::authority::BoardAuthority;
use super::context::ClientContext;
use super::scene::{PickedPrimitive, Scene};
use super::stone::StoneState;
use super::turn::Player;

/// Result of one pointing-device press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing was under the cursor.
    Missed,
    /// A move was submitted to the authority.
    Submitted { vertex: VertexId, player: Player },
}

/// Turns picks into moves.
///
/// No legality check is made before submission, and the turn is passed
/// whether or not the authority accepts the move.
#[derive(Debug, Clone)]
pub struct MoveResolver {
    index: VertexIndex,
}

impl MoveResolver {
    /// Creates a resolver over the playable vertices in `index`.
    #[must_use]
    pub fn new(index: VertexIndex) -> Self {
        Self { index }
    }

    /// Maps a pick to a vertex.
    ///
    /// A pick that reports a known stone marker resolves to that vertex;
    /// anything else falls back to the vertex nearest the centroid.
    #[must_use]
    pub fn resolve(&self, pick: &PickedPrimitive) -> VertexId {
        match pick.marker {
            Some(vertex) if vertex.index() < self.index.len() => vertex,
            _ => self.index.nearest(&pick.centroid),
        }
    }

    /// Handles a press: colors the stone for the mover, shows the next
    /// player, submits the move and passes the turn.
    ///
    /// The mover is the authority's current player; a disagreeing local
    /// turn state is overwritten.
    pub fn submit(
        &self,
        pick: Option<&PickedPrimitive>,
        ctx: &mut ClientContext,
        authority: &mut dyn BoardAuthority,
        scene: &mut dyn Scene,
    ) -> MoveOutcome {
        let Some(pick) = pick else {
            return MoveOutcome::Missed;
        };
        let vertex = self.resolve(pick);

        let player = authority.current_player();
        if ctx.turn().current() != player {
            tracing::warn!(
                local = %ctx.turn().current(),
                authority = %player,
                "turn out of sync, following authority"
            );
            ctx.turn_mut().set(player);
        }

        ctx.stones_mut().place(vertex, player);
        scene.set_stone_color(vertex, StoneState::Occupied(player).color(ctx.palette()));
        scene.show_next_player(player.opponent());

        authority.play(vertex, player);
        let next = ctx.turn_mut().flip();
        authority.set_current_player(next);

        tracing::debug!(%vertex, %player, "move submitted");
        MoveOutcome::Submitted { vertex, player }
    }
}
