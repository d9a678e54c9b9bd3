pub mod authority;
pub mod context;
pub mod notifier;
pub mod resolver;
pub mod scene;
pub mod stone;
pub mod turn;

pub use authority::{
    BoardAuthority, LocalBoard, Notification, NotificationQueue, Observer, ObserverKey, RawMessage,
};
pub use context::ClientContext;
pub use notifier::StateChangeNotifier;
pub use resolver::{MoveOutcome, MoveResolver};
pub use scene::{PickedPrimitive, Scene};
pub use stone::{StoneState, Stones};
pub use turn::{Player, TurnState};

use crate::config::ClientConfig;
use crate::error::{ConfigError, Result};
use crate::operations::coloring::DeriveFaceColors;
use crate::operations::query::VertexIndex;
use crate::topology::BoardTopology;

/// The interactive client: wires picks to the authority and authority
/// notifications back to the scene.
///
/// Everything runs on the UI thread. An authority living on another
/// thread should observe through an `mpsc::Sender<Notification>` and the
/// UI thread should feed the receiver to [`apply_notifications`].
///
/// [`apply_notifications`]: GameClient::apply_notifications
#[derive(Debug)]
pub struct GameClient {
    config: ClientConfig,
    topology: BoardTopology,
    context: ClientContext,
    resolver: MoveResolver,
    notifier: StateChangeNotifier,
}

impl GameClient {
    /// Builds the client and prepares the scene for its first frame.
    ///
    /// Paints the board faces, creates one unoccupied marker per vertex,
    /// subscribes to `authority` and shows its current player.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured group size differs from the
    /// board's or the palette lacks a color for some group.
    pub fn new(
        config: ClientConfig,
        topology: BoardTopology,
        authority: &mut dyn BoardAuthority,
        scene: &mut dyn Scene,
    ) -> Result<Self> {
        if config.group_size != topology.group_size() {
            return Err(ConfigError::GroupSizeMismatch {
                configured: config.group_size,
                board: topology.group_size(),
            }
            .into());
        }
        config.palette.covers(topology.group_count())?;

        let colors = DeriveFaceColors::new(&config.palette).execute(&topology);
        scene.set_face_colors(&colors);

        let marker = StoneState::Unoccupied.color(&config.palette);
        for vertex in topology.vertices() {
            scene.add_stone_marker(vertex.id, vertex.point, config.marker_radius, marker);
        }

        let mut context = ClientContext::new(config.palette.clone(), topology.vertices().len());
        context.attach(authority);
        scene.show_next_player(context.turn().current());

        tracing::info!(
            title = %config.title,
            vertices = topology.vertices().len(),
            faces = topology.faces().len(),
            "client ready"
        );

        Ok(Self {
            resolver: MoveResolver::new(VertexIndex::new(&topology)),
            notifier: StateChangeNotifier::new(),
            config,
            topology,
            context,
        })
    }

    /// Handles a left-button press that the toolkit resolved to `pick`
    /// (`None` for a miss), then applies any notifications the authority
    /// emitted and redraws once.
    pub fn on_left_press(
        &mut self,
        pick: Option<PickedPrimitive>,
        authority: &mut dyn BoardAuthority,
        scene: &mut dyn Scene,
    ) -> MoveOutcome {
        let outcome = self
            .resolver
            .submit(pick.as_ref(), &mut self.context, authority, scene);
        if self.pump_notifications(scene) == 0 {
            scene.request_redraw();
        }
        outcome
    }

    /// Applies notifications queued by the authority since the last call.
    pub fn pump_notifications(&mut self, scene: &mut dyn Scene) -> usize {
        self.notifier.pump(&mut self.context, scene)
    }

    /// Applies notifications delivered by other means, e.g. drained from a
    /// channel fed by an authority on another thread.
    pub fn apply_notifications<I>(&mut self, notifications: I, scene: &mut dyn Scene) -> usize
    where
        I: IntoIterator<Item = Notification>,
    {
        self.notifier
            .apply_all(notifications, &mut self.context, scene)
    }

    /// Handles an untyped authority message; unknown kinds are ignored.
    pub fn apply_raw(&mut self, message: RawMessage, scene: &mut dyn Scene) -> bool {
        self.notifier.apply_raw(message, &mut self.context, scene)
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn topology(&self) -> &BoardTopology {
        &self.topology
    }

    #[must_use]
    pub fn context(&self) -> &ClientContext {
        &self.context
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::mpsc;

    use super::scene::recording::RecordingScene;
    use super::*;
    use crate::config::Palette;
    use crate::error::PolyclashError;
    use crate::math::Point3;
    use crate::operations::creation::{IcosahedronBoard, MakeIcosahedron};
    use crate::topology::VertexId;

    /// Authority that captures a fixed set of stones after every move.
    struct CapturingBoard {
        inner: LocalBoard,
        captures: Vec<VertexId>,
    }

    impl BoardAuthority for CapturingBoard {
        fn play(&mut self, vertex: VertexId, player: Player) {
            self.inner.play(vertex, player);
            let captures = std::mem::take(&mut self.captures);
            self.inner.remove_stones(&captures);
        }

        fn current_player(&self) -> Player {
            self.inner.current_player()
        }

        fn set_current_player(&mut self, player: Player) {
            self.inner.set_current_player(player);
        }

        fn register_observer(&mut self, observer: Box<dyn Observer>) -> ObserverKey {
            self.inner.register_observer(observer)
        }
    }

    fn config() -> ClientConfig {
        ClientConfig {
            group_size: 3,
            ..ClientConfig::default()
        }
    }

    fn board() -> IcosahedronBoard {
        MakeIcosahedron::new(1.0, 3).execute().unwrap()
    }

    fn start(authority: &mut dyn BoardAuthority) -> (GameClient, RecordingScene, IcosahedronBoard) {
        let board = board();
        let mut scene = RecordingScene::default();
        let client = GameClient::new(config(), board.topology.clone(), authority, &mut scene).unwrap();
        (client, scene, board)
    }

    fn pick_vertex(board: &IcosahedronBoard, vertex: usize) -> Option<PickedPrimitive> {
        let point = board.topology.vertices()[vertex].point;
        Some(PickedPrimitive::at(Point3::from(point.coords * 1.01)))
    }

    #[test]
    fn startup_prepares_scene() {
        let mut authority = LocalBoard::new(12);
        let (_, scene, _) = start(&mut authority);

        assert_eq!(scene.face_colors.as_ref().unwrap().len(), 60);
        assert_eq!(scene.markers.len(), 12);
        assert!(scene
            .markers
            .values()
            .all(|&c| c == Palette::default().marker_color));
        assert_eq!(scene.next_player, Some(Player::Black));
        assert_eq!(authority.observer_count(), 1);
    }

    #[test]
    fn group_size_mismatch_fails_fast() {
        let mut authority = LocalBoard::new(12);
        let mut scene = RecordingScene::default();
        let result = GameClient::new(
            ClientConfig::default(),
            board().topology,
            &mut authority,
            &mut scene,
        );
        assert!(matches!(
            result,
            Err(PolyclashError::Config(ConfigError::GroupSizeMismatch { configured: 15, board: 3 }))
        ));
    }

    #[test]
    fn short_palette_fails_fast() {
        let mut authority = LocalBoard::new(12);
        let mut scene = RecordingScene::default();
        let mut cfg = config();
        cfg.palette.group_colors.truncate(2);
        let result = GameClient::new(cfg, board().topology, &mut authority, &mut scene);
        assert!(matches!(
            result,
            Err(PolyclashError::Config(ConfigError::MissingGroupColor(2)))
        ));
    }

    #[test]
    fn press_places_stone_and_redraws_once() {
        let mut authority = LocalBoard::new(12);
        let (mut client, mut scene, board) = start(&mut authority);

        let outcome = client.on_left_press(pick_vertex(&board, 7), &mut authority, &mut scene);

        assert_eq!(
            outcome,
            MoveOutcome::Submitted { vertex: VertexId(7), player: Player::Black }
        );
        assert_eq!(authority.stone(VertexId(7)), Some(Player::Black));
        assert_eq!(scene.markers[&VertexId(7)], Palette::default().black_stone);
        assert_eq!(scene.next_player, Some(Player::White));
        assert_eq!(scene.redraws, 1);
    }

    #[test]
    fn miss_only_redraws() {
        let mut authority = LocalBoard::new(12);
        let (mut client, mut scene, _) = start(&mut authority);

        let outcome = client.on_left_press(None, &mut authority, &mut scene);

        assert_eq!(outcome, MoveOutcome::Missed);
        assert!(authority.moves().is_empty());
        assert_eq!(client.context().turn().current(), Player::Black);
        assert_eq!(scene.redraws, 1);
    }

    #[test]
    fn alternating_moves() {
        let mut authority = LocalBoard::new(12);
        let (mut client, mut scene, board) = start(&mut authority);

        for (n, vertex) in [0, 4, 8, 11, 2].into_iter().enumerate() {
            client.on_left_press(pick_vertex(&board, vertex), &mut authority, &mut scene);
            let expected = if n % 2 == 0 { Player::White } else { Player::Black };
            assert_eq!(client.context().turn().current(), expected);
        }
        assert_eq!(scene.markers[&VertexId(4)], Palette::default().white_stone);
        assert_eq!(authority.moves().len(), 5);
    }

    #[test]
    fn captures_during_play_are_applied() {
        let mut authority = CapturingBoard {
            inner: LocalBoard::new(12),
            captures: Vec::new(),
        };
        let (mut client, mut scene, board) = start(&mut authority);

        client.on_left_press(pick_vertex(&board, 3), &mut authority, &mut scene);
        authority.captures = vec![VertexId(3)];
        client.on_left_press(pick_vertex(&board, 5), &mut authority, &mut scene);

        assert_eq!(scene.markers[&VertexId(3)], Palette::default().marker_color);
        assert_eq!(scene.markers[&VertexId(5)], Palette::default().white_stone);
        assert_eq!(client.context().stones().occupied(), 1);
        assert_eq!(scene.redraws, 2);
    }

    #[test]
    fn notifications_from_another_thread() {
        let mut authority = LocalBoard::new(12);
        let (mut client, mut scene, board) = start(&mut authority);
        client.on_left_press(pick_vertex(&board, 9), &mut authority, &mut scene);

        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let mut remote = LocalBoard::new(12);
            remote.register_observer(Box::new(tx));
            remote.remove_stones(&[VertexId(9), VertexId(9)]);
        })
        .join()
        .unwrap();

        assert_eq!(client.apply_notifications(rx.try_iter(), &mut scene), 2);
        assert_eq!(client.context().stones().occupied(), 0);
        assert_eq!(scene.markers[&VertexId(9)], Palette::default().marker_color);
    }

    #[test]
    fn raw_messages_are_bridged() {
        let mut authority = LocalBoard::new(12);
        let (mut client, mut scene, board) = start(&mut authority);
        client.on_left_press(pick_vertex(&board, 1), &mut authority, &mut scene);

        assert!(!client.apply_raw(RawMessage::with_point("unknown", 1), &mut scene));
        assert!(client.apply_raw(RawMessage::with_point("remove_stones", 1), &mut scene));
        assert_eq!(client.context().stones().occupied(), 0);
    }
}
