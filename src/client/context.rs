use crate::config::Palette;

use super::authority::{BoardAuthority, NotificationQueue, ObserverKey};
use super::stone::Stones;
use super::turn::TurnState;

/// Client-side game state shared by the move resolver and the
/// state-change notifier.
///
/// Owns the optimistic turn state, the displayed stone states and the
/// queue the authority pushes notifications into.
#[derive(Debug)]
pub struct ClientContext {
    palette: Palette,
    turn: TurnState,
    stones: Stones,
    queue: NotificationQueue,
    observer: Option<ObserverKey>,
}

impl ClientContext {
    /// Creates a context for a board of `vertex_count` vertices, black to
    /// move and every stone unoccupied.
    #[must_use]
    pub fn new(palette: Palette, vertex_count: usize) -> Self {
        Self {
            palette,
            turn: TurnState::default(),
            stones: Stones::new(vertex_count),
            queue: NotificationQueue::new(),
            observer: None,
        }
    }

    /// Registers this context's notification queue with `authority` and
    /// adopts the authority's current player.
    pub fn attach(&mut self, authority: &mut dyn BoardAuthority) -> ObserverKey {
        let key = authority.register_observer(Box::new(self.queue.clone()));
        self.observer = Some(key);
        self.turn.set(authority.current_player());
        key
    }

    /// The observer key from the last [`attach`](Self::attach), if any.
    #[must_use]
    pub fn observer(&self) -> Option<ObserverKey> {
        self.observer
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn turn_mut(&mut self) -> &mut TurnState {
        &mut self.turn
    }

    #[must_use]
    pub fn stones(&self) -> &Stones {
        &self.stones
    }

    pub fn stones_mut(&mut self) -> &mut Stones {
        &mut self.stones
    }

    /// The queue notifications are delivered into.
    #[must_use]
    pub fn queue(&self) -> &NotificationQueue {
        &self.queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::authority::LocalBoard;
    use crate::client::turn::Player;

    #[test]
    fn attach_registers_queue_and_adopts_turn() {
        let mut board = LocalBoard::new(4);
        board.set_current_player(Player::White);
        let mut ctx = ClientContext::new(Palette::default(), 4);

        let key = ctx.attach(&mut board);

        assert_eq!(ctx.observer(), Some(key));
        assert_eq!(board.observer_count(), 1);
        assert_eq!(ctx.turn().current(), Player::White);
    }

    #[test]
    fn authority_pushes_land_in_queue() {
        let mut board = LocalBoard::new(4);
        let mut ctx = ClientContext::new(Palette::default(), 4);
        ctx.attach(&mut board);

        board.remove_stones(&[crate::topology::VertexId(3)]);
        assert_eq!(ctx.queue().len(), 1);
    }
}
