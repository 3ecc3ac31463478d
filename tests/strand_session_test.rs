//! Tests for session management and isolation.

use strand_games::{
    Coord, DEFAULT_GRID_SIZE, GameSession, NodeOutcome, Player, SessionError, SessionManager,
};

#[test]
fn test_session_drives_a_game() {
    let mut session = GameSession::new("game-1".to_string(), DEFAULT_GRID_SIZE);
    assert_eq!(session.current_player(), Some(Player::One));

    let outcome = session.node_activated(Coord::new(0, 0));
    assert_eq!(
        outcome,
        Some(NodeOutcome::SelectionAccepted {
            node: Coord::new(0, 0)
        })
    );

    let outcome = session.node_activated(Coord::new(3, 0));
    assert!(matches!(
        outcome,
        Some(NodeOutcome::ExtensionAccepted { .. })
    ));
    assert_eq!(session.current_player(), Some(Player::Two));
    assert_eq!(session.game().history().len(), 1);
}

#[test]
fn test_manager_rejects_duplicate_ids() {
    let manager = SessionManager::new();
    assert!(manager
        .create_session("dup".to_string(), DEFAULT_GRID_SIZE)
        .is_ok());
    assert_eq!(
        manager.create_session("dup".to_string(), DEFAULT_GRID_SIZE),
        Err(SessionError::AlreadyExists)
    );
}

#[test]
fn test_manager_unknown_session() {
    let manager = SessionManager::new();
    assert_eq!(
        manager.node_activated("missing", Coord::new(0, 0)),
        Err(SessionError::NotFound)
    );
    assert_eq!(
        manager.current_player("missing"),
        Err(SessionError::NotFound)
    );
}

#[test]
fn test_concurrent_games_are_isolated() {
    let manager = SessionManager::new();
    manager
        .create_session("a".to_string(), DEFAULT_GRID_SIZE)
        .expect("fresh id");
    manager
        .create_session("b".to_string(), DEFAULT_GRID_SIZE)
        .expect("fresh id");

    // Play a full move in game a only.
    manager
        .node_activated("a", Coord::new(0, 0))
        .expect("session exists");
    manager
        .node_activated("a", Coord::new(0, 3))
        .expect("session exists");

    assert_eq!(manager.current_player("a"), Ok(Some(Player::Two)));
    assert_eq!(manager.current_player("b"), Ok(Some(Player::One)));

    let a = manager.get_session("a").expect("session exists");
    let b = manager.get_session("b").expect("session exists");
    assert!(!a.game().lattice().is_available(Coord::new(0, 1)));
    assert!(b.game().lattice().is_available(Coord::new(0, 1)));
    assert!(b.game().path_ends().is_empty());

    let mut ids = manager.list_sessions();
    ids.sort();
    assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_serialized_session_round_trips() {
    let mut session = GameSession::new("wire".to_string(), DEFAULT_GRID_SIZE);
    session.node_activated(Coord::new(0, 0));
    session.node_activated(Coord::new(2, 2));

    let json = serde_json::to_string(&session).expect("session serializes");
    let mut restored: GameSession = serde_json::from_str(&json).expect("session deserializes");

    assert_eq!(restored.current_player(), session.current_player());
    // The restored game accepts the same continuation.
    let outcome = restored.node_activated(Coord::new(2, 2));
    assert!(matches!(
        outcome,
        Some(NodeOutcome::SelectionAccepted { .. })
    ));
}
