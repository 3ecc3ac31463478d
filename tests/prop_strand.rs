//! Property-based tests for the strand rules engine.

use proptest::prelude::*;

use strand_games::{
    AnyGame, Coord, DEFAULT_GRID_SIZE, Lattice, MoveError, direction, is_octilinear,
    points_between, validate,
};

fn any_coord() -> impl Strategy<Value = Coord> {
    (0i32..4, 0i32..4).prop_map(|(x, y)| Coord::new(x, y))
}

/// Coordinates a little beyond the lattice, to exercise bounds handling.
fn any_loose_coord() -> impl Strategy<Value = Coord> {
    (-2i32..6, -2i32..6).prop_map(|(x, y)| Coord::new(x, y))
}

proptest! {
    /// A zero-length segment is always rejected.
    #[test]
    fn prop_zero_length_rejected(node in any_loose_coord()) {
        let lattice = Lattice::new(DEFAULT_GRID_SIZE);
        prop_assert_eq!(
            validate(&lattice, node, node),
            Err(MoveError::EndEqualsStart)
        );
    }

    /// Any line with unequal nonzero axis differences is non-octilinear
    /// and always rejected.
    #[test]
    fn prop_non_octilinear_rejected(a in any_coord(), b in any_coord()) {
        let dx = (b.x - a.x).abs();
        let dy = (b.y - a.y).abs();
        prop_assume!(dx != dy && dx != 0 && dy != 0);

        prop_assert!(!is_octilinear(a, b));
        let lattice = Lattice::new(DEFAULT_GRID_SIZE);
        prop_assert_eq!(validate(&lattice, a, b), Err(MoveError::NotOctilinear));
    }

    /// The reversed point walk equals the walk of the reversed pair.
    #[test]
    fn prop_points_between_reversal(a in any_coord(), b in any_coord()) {
        prop_assume!(is_octilinear(a, b));

        let mut forward = points_between(a, b);
        forward.reverse();
        prop_assert_eq!(forward, points_between(b, a));
    }

    /// The walk has one point per unit step, starts at `a` and ends at `b`.
    #[test]
    fn prop_points_between_endpoints(a in any_coord(), b in any_coord()) {
        prop_assume!(is_octilinear(a, b));

        let points = points_between(a, b);
        let steps = (b.x - a.x).abs().max((b.y - a.y).abs()) as usize;
        prop_assert_eq!(points.len(), steps + 1);
        prop_assert_eq!(points[0], a);
        prop_assert_eq!(points[points.len() - 1], b);
    }

    /// Read queries never mutate the lattice.
    #[test]
    fn prop_read_queries_idempotent(
        moves in prop::collection::vec((any_coord(), any_coord()), 0..12),
        probes in prop::collection::vec((any_loose_coord(), any_loose_coord()), 0..32),
    ) {
        let mut game = AnyGame::new(DEFAULT_GRID_SIZE);
        for (start, end) in moves {
            let (next, _) = game.activate(start);
            let (next, _) = next.activate(end);
            game = next;
        }

        let before = game.lattice().clone();
        for (from, to) in probes {
            before.is_available(to);
            before.is_diagonal_blocked(from, direction(from, to));
        }
        prop_assert_eq!(&before, game.lattice());
    }

    /// Occupancy is monotonic across any activation sequence, and a
    /// completed game stays completed.
    #[test]
    fn prop_occupancy_monotonic(
        nodes in prop::collection::vec(any_loose_coord(), 0..48),
    ) {
        let mut game = AnyGame::new(DEFAULT_GRID_SIZE);
        let mut occupied: Vec<Coord> = Vec::new();
        let mut completed = false;

        for node in nodes {
            let (next, _) = game.activate(node);
            game = next;

            for &coord in &occupied {
                prop_assert!(!game.lattice().is_available(coord));
            }
            occupied = all_occupied(game.lattice());

            if completed {
                prop_assert!(game.is_complete());
            }
            completed = game.is_complete();
        }
    }
}

fn all_occupied(lattice: &Lattice) -> Vec<Coord> {
    let size = lattice.size() as i32;
    let mut occupied = Vec::new();
    for x in 0..size {
        for y in 0..size {
            let coord = Coord::new(x, y);
            if !lattice.is_available(coord) {
                occupied.push(coord);
            }
        }
    }
    occupied
}
