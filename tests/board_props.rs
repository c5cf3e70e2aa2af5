use battleship_engine::{Board, CellState, EngineError, PIECES, BOARD_SIZE, TOTAL_PIECE_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(BOARD_SIZE);
    board.init();
    board.place_random(&mut rng).unwrap();
    board
}

fn count(board: &Board, state: CellState) -> usize {
    board.primary_grid().count(|c| c == state)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_is_well_formed(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.alives(), TOTAL_PIECE_CELLS);
        // every piece has exactly two distinct end caps
        prop_assert_eq!(count(&board, CellState::PieceLeft), count(&board, CellState::PieceRight));
        prop_assert_eq!(count(&board, CellState::PieceTop), count(&board, CellState::PieceBottom));
        prop_assert_eq!(
            count(&board, CellState::PieceLeft) + count(&board, CellState::PieceTop),
            PIECES.len()
        );
    }

    #[test]
    fn fresh_board_accepts_any_in_bounds_anchor(
        piece in 0..PIECES.len(),
        x in 0..BOARD_SIZE,
        y in 0..BOARD_SIZE,
        vertical in any::<bool>(),
    ) {
        let mut board = Board::new(BOARD_SIZE);
        board.init();
        let def = PIECES[piece];
        let orientation = if vertical { "v" } else { "h" };
        prop_assert!(board.place_piece(def.name(), x, y, orientation).unwrap());
        prop_assert_eq!(board.alives(), def.length());
        prop_assert!(!board.pieces_available().contains(&def));
        prop_assert_eq!(board.pieces_available().len(), PIECES.len() - 1);
    }

    #[test]
    fn alives_drop_by_one_per_hit(seed in any::<u64>(), shots in 1..200usize) {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let mut attacker = Board::new(BOARD_SIZE);
        attacker.init();
        let mut target = random_board(seed);
        for _ in 0..shots {
            let x = rng.random_range(0..BOARD_SIZE);
            let y = rng.random_range(0..BOARD_SIZE);
            let before = target.alives();
            match attacker.shoot(&mut target, x, y) {
                Ok(true) => prop_assert_eq!(target.alives(), before - 1),
                Ok(false) => prop_assert_eq!(target.alives(), before),
                Err(e) => {
                    prop_assert_eq!(e, EngineError::AlreadyShoot);
                    prop_assert_eq!(target.alives(), before);
                }
            }
        }
    }

    #[test]
    fn shot_grids_always_agree(seed in any::<u64>(), shots in 1..100usize) {
        let mut rng = SmallRng::seed_from_u64(seed ^ 0xA5A5);
        let mut attacker = Board::new(BOARD_SIZE);
        attacker.init();
        let mut target = random_board(seed);
        for _ in 0..shots {
            let x = rng.random_range(0..BOARD_SIZE);
            let y = rng.random_range(0..BOARD_SIZE);
            let _ = attacker.shoot(&mut target, x, y);
        }
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let fired = attacker.tracking_grid().get(x, y).unwrap();
                let received = target.primary_grid().get(x, y).unwrap();
                if fired.is_shot() || received.is_shot() {
                    prop_assert_eq!(fired, received);
                }
            }
        }
    }

    #[test]
    fn repeated_shot_is_rejected_without_change(
        seed in any::<u64>(),
        x in 0..BOARD_SIZE,
        y in 0..BOARD_SIZE,
    ) {
        let mut attacker = Board::new(BOARD_SIZE);
        attacker.init();
        let mut target = random_board(seed);
        attacker.shoot(&mut target, x, y).unwrap();
        let (a, t) = (attacker.clone(), target.clone());
        prop_assert_eq!(attacker.shoot(&mut target, x, y).unwrap_err(), EngineError::AlreadyShoot);
        prop_assert_eq!(attacker, a);
        prop_assert_eq!(target, t);
    }
}
