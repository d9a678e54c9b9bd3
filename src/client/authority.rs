use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::mpsc::Sender;

use slotmap::SlotMap;

use crate::error::MessageError;
use crate::topology::VertexId;

use super::turn::Player;

slotmap::new_key_type! {
    /// Handle of an observer registered with a board authority.
    pub struct ObserverKey;
}

/// A state change pushed by the board authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The stone at `point` left the board (e.g. it was captured).
    RemoveStones { point: VertexId },
}

/// An untyped `(kind, payload)` message, as older authorities emit them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub kind: String,
    pub point: Option<usize>,
}

impl RawMessage {
    /// Creates a message with a `point` payload.
    #[must_use]
    pub fn with_point(kind: impl Into<String>, point: usize) -> Self {
        Self {
            kind: kind.into(),
            point: Some(point),
        }
    }
}

impl TryFrom<RawMessage> for Notification {
    type Error = MessageError;

    fn try_from(message: RawMessage) -> Result<Self, Self::Error> {
        match message.kind.as_str() {
            "remove_stones" => {
                let point = message.point.ok_or_else(|| MessageError::MissingPayload {
                    kind: message.kind.clone(),
                    key: "point",
                })?;
                Ok(Self::RemoveStones {
                    point: VertexId(point),
                })
            }
            _ => Err(MessageError::UnknownKind(message.kind)),
        }
    }
}

/// Receiver of authority notifications.
pub trait Observer {
    /// Called by the authority for every state change.
    fn handle(&self, notification: &Notification);
}

/// Observer for an authority running on another thread; the UI thread
/// drains the matching receiver.
impl Observer for Sender<Notification> {
    fn handle(&self, notification: &Notification) {
        if self.send(notification.clone()).is_err() {
            tracing::debug!(?notification, "notification receiver dropped");
        }
    }
}

/// FIFO of notifications awaiting application on the UI thread.
///
/// Clones share the same queue: the authority holds one as its observer
/// and the client drains another.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    inner: Rc<RefCell<VecDeque<Notification>>>,
}

impl NotificationQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every queued notification, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Number of queued notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl Observer for NotificationQueue {
    fn handle(&self, notification: &Notification) {
        self.inner.borrow_mut().push_back(notification.clone());
    }
}

/// The component holding the canonical game state and rules.
pub trait BoardAuthority {
    /// Submits a move. Fire-and-forget: acceptance is not reported.
    fn play(&mut self, vertex: VertexId, player: Player);

    /// The player the authority expects to move next.
    fn current_player(&self) -> Player;

    /// Overrides the player to move next.
    fn set_current_player(&mut self, player: Player);

    /// Subscribes `observer` to state-change notifications.
    fn register_observer(&mut self, observer: Box<dyn Observer>) -> ObserverKey;
}

/// In-process board authority that records occupancy and relays
/// notifications. It applies no game rules.
pub struct LocalBoard {
    stones: Vec<Option<Player>>,
    current: Player,
    moves: Vec<(VertexId, Player)>,
    observers: SlotMap<ObserverKey, Box<dyn Observer>>,
}

impl LocalBoard {
    /// Creates an empty board of `vertex_count` points with black to move.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            stones: vec![None; vertex_count],
            current: Player::Black,
            moves: Vec::new(),
            observers: SlotMap::with_key(),
        }
    }

    /// The stone at `vertex`, if any.
    #[must_use]
    pub fn stone(&self, vertex: VertexId) -> Option<Player> {
        self.stones.get(vertex.index()).copied().flatten()
    }

    /// Every move submitted so far, in order.
    #[must_use]
    pub fn moves(&self) -> &[(VertexId, Player)] {
        &self.moves
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Unsubscribes an observer. Returns `false` if it was not registered.
    pub fn unregister_observer(&mut self, key: ObserverKey) -> bool {
        self.observers.remove(key).is_some()
    }

    /// Takes stones off the board and notifies observers once per point.
    ///
    /// Points outside the board are skipped.
    pub fn remove_stones(&mut self, points: &[VertexId]) {
        for &point in points {
            let Some(slot) = self.stones.get_mut(point.index()) else {
                tracing::warn!(%point, "ignoring removal outside the board");
                continue;
            };
            *slot = None;
            self.notify(&Notification::RemoveStones { point });
        }
    }

    fn notify(&self, notification: &Notification) {
        for observer in self.observers.values() {
            observer.handle(notification);
        }
    }
}

impl BoardAuthority for LocalBoard {
    fn play(&mut self, vertex: VertexId, player: Player) {
        let Some(slot) = self.stones.get_mut(vertex.index()) else {
            tracing::warn!(%vertex, %player, "ignoring move outside the board");
            return;
        };
        *slot = Some(player);
        self.moves.push((vertex, player));
    }

    fn current_player(&self) -> Player {
        self.current
    }

    fn set_current_player(&mut self, player: Player) {
        self.current = player;
    }

    fn register_observer(&mut self, observer: Box<dyn Observer>) -> ObserverKey {
        self.observers.insert(observer)
    }
}
