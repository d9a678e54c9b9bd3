use super::authority::{Notification, RawMessage};
use super::context::ClientContext;
use super::scene::Scene;
use super::stone::StoneState;

/// Applies authority notifications to the scene.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateChangeNotifier;

impl StateChangeNotifier {
    /// Creates a new notifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Applies one notification without redrawing.
    ///
    /// Returns `true` if the scene changed. Removing an unoccupied stone,
    /// or one on an unknown vertex, changes nothing.
    pub fn apply(
        &self,
        notification: &Notification,
        ctx: &mut ClientContext,
        scene: &mut dyn Scene,
    ) -> bool {
        match *notification {
            Notification::RemoveStones { point } => {
                if ctx.stones_mut().remove(point) {
                    scene.set_stone_color(point, StoneState::Unoccupied.color(ctx.palette()));
                    tracing::debug!(%point, "stone removed");
                    true
                } else {
                    if ctx.stones().get(point).is_none() {
                        tracing::warn!(%point, "removal for unknown vertex");
                    }
                    false
                }
            }
        }
    }

    /// Applies a batch of notifications and redraws once if the batch was
    /// not empty. Returns the number of notifications handled.
    pub fn apply_all<I>(&self, notifications: I, ctx: &mut ClientContext, scene: &mut dyn Scene) -> usize
    where
        I: IntoIterator<Item = Notification>,
    {
        let mut handled = 0;
        for notification in notifications {
            self.apply(&notification, ctx, scene);
            handled += 1;
        }
        if handled > 0 {
            scene.request_redraw();
        }
        handled
    }

    /// Drains the context's notification queue into the scene.
    pub fn pump(&self, ctx: &mut ClientContext, scene: &mut dyn Scene) -> usize {
        let pending = ctx.queue().drain();
        self.apply_all(pending, ctx, scene)
    }

    /// Handles an untyped message. Unknown kinds are ignored; the scene is
    /// redrawn either way.
    pub fn apply_raw(&self, message: RawMessage, ctx: &mut ClientContext, scene: &mut dyn Scene) -> bool {
        let changed = match Notification::try_from(message) {
            Ok(notification) => self.apply(&notification, ctx, scene),
            Err(err) => {
                tracing::debug!(%err, "ignoring message");
                false
            }
        };
        scene.request_redraw();
        changed
    }
}
