use seabattle::{Board, BoardError, CellKind, Coord, Direction, Ship, ShipId, BOARD_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn kind_at(board: &Board, col: usize, row: usize) -> CellKind {
    board.cell(Coord::new(col, row)).unwrap().kind()
}

#[test]
fn test_manual_place_marks_ship_and_ring() {
    let mut board = Board::new(BOARD_SIZE);
    board.place(ShipId(1), 3, Coord::new(2, 2), Direction::Right).unwrap();

    for col in 2..5 {
        assert_eq!(kind_at(&board, col, 2), CellKind::Ship(ShipId(1)));
    }
    assert_eq!(board.ship_cells(ShipId(1)).len(), 3);

    let neighbors: Vec<_> = board
        .cells()
        .filter(|(_, c)| c.kind() == CellKind::Neighbor)
        .map(|(coord, _)| coord)
        .collect();
    assert_eq!(neighbors.len(), 12);
    for coord in neighbors {
        assert!((1..=5).contains(&coord.col));
        assert!((1..=3).contains(&coord.row));
        assert!(board.cell(coord).unwrap().borders(ShipId(1)));
    }
    assert_eq!(kind_at(&board, 0, 0), CellKind::Water);
}

#[test]
fn test_corner_ship_ring_is_clipped() {
    let mut board = Board::new(BOARD_SIZE);
    board.place(ShipId(1), 1, Coord::new(0, 0), Direction::Down).unwrap();
    let count = board
        .cells()
        .filter(|(_, c)| c.kind() == CellKind::Neighbor)
        .count();
    assert_eq!(count, 3);
}

#[test]
fn test_ring_never_overwrites_ship_and_accumulates_ids() {
    let mut board = Board::new(BOARD_SIZE);
    board.place(ShipId(1), 1, Coord::new(0, 0), Direction::Down).unwrap();
    board.place(ShipId(2), 1, Coord::new(2, 0), Direction::Down).unwrap();

    let shared = board.cell(Coord::new(1, 0)).unwrap();
    assert_eq!(shared.kind(), CellKind::Neighbor);
    assert_eq!(shared.neighbor_ids(), [ShipId(1), ShipId(2)]);
    assert_eq!(kind_at(&board, 0, 0), CellKind::Ship(ShipId(1)));
    assert_eq!(kind_at(&board, 2, 0), CellKind::Ship(ShipId(2)));
}

#[test]
fn test_touching_placement_rejected() {
    let mut board = Board::new(BOARD_SIZE);
    board.place(ShipId(1), 3, Coord::new(2, 2), Direction::Right).unwrap();
    assert_eq!(
        board.place(ShipId(2), 2, Coord::new(5, 3), Direction::Down),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(
        board.place(ShipId(2), 4, Coord::new(9, 8), Direction::Down),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place(ShipId(2), 1, Coord::new(10, 0), Direction::Down),
        Err(BoardError::OutOfBounds(Coord::new(10, 0)))
    );
}

#[test]
fn test_available_directions_respects_edges_and_ships() {
    let mut board = Board::new(BOARD_SIZE);
    let dirs = board.available_directions(Coord::new(0, 0), 4);
    assert_eq!(dirs, vec![Direction::Right, Direction::Down]);

    board.place(ShipId(1), 1, Coord::new(2, 0), Direction::Down).unwrap();
    let dirs = board.available_directions(Coord::new(0, 0), 4);
    assert_eq!(dirs, vec![Direction::Down]);
    assert!(board.available_directions(Coord::new(2, 0), 1).is_empty());
}

#[test]
fn test_fire_at_reports_once() {
    let mut board = Board::new(BOARD_SIZE);
    board.place(ShipId(1), 2, Coord::new(4, 4), Direction::Down).unwrap();

    assert_eq!(board.fire_at(Coord::new(4, 5)), Some(CellKind::Ship(ShipId(1))));
    assert_eq!(board.fire_at(Coord::new(4, 5)), None);
    assert_eq!(board.fire_at(Coord::new(4, 3)), Some(CellKind::Neighbor));
    assert_eq!(board.fire_at(Coord::new(0, 0)), Some(CellKind::Water));
    assert_eq!(board.fire_at(Coord::new(0, 10)), None);
    assert_eq!(board.revealed_count(), 3);
}

#[test]
fn test_reveal_ring_skips_already_revealed() {
    let mut board = Board::new(BOARD_SIZE);
    board.place(ShipId(1), 1, Coord::new(5, 5), Direction::Up).unwrap();
    board.fire_at(Coord::new(4, 4));

    let revealed = board.reveal_ring(ShipId(1));
    assert_eq!(revealed.len(), 7);
    assert!(!revealed.contains(&Coord::new(4, 4)));
    assert!(board.reveal_ring(ShipId(1)).is_empty());
    // the ship itself stays hidden
    assert!(!board.cell(Coord::new(5, 5)).unwrap().is_revealed());
}

#[test]
fn test_place_fleet_seeded() {
    let ships: Vec<Ship> = [4, 3, 3, 2]
        .iter()
        .enumerate()
        .map(|(i, &decks)| Ship::new(ShipId(i as u8 + 1), decks))
        .collect();
    let mut board = Board::new(BOARD_SIZE);
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_fleet(&mut rng, &ships, 1_000).unwrap();
    assert_eq!(board.ship_cell_count(), 12);
    for ship in &ships {
        assert_eq!(board.ship_cells(ship.id()).len(), ship.decks());
    }
}

#[test]
fn test_random_placement_exhausts() {
    let mut board = Board::new(3);
    board.place(ShipId(1), 3, Coord::new(0, 1), Direction::Right).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        board.random_placement(&mut rng, ShipId(2), 1, 25),
        Err(BoardError::UnableToPlaceShip { ship: 2, attempts: 25 })
    );
}
