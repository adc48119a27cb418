//! Rotation-engine invariants checked along real catalog solutions

use brainstorm::{
    objective::Objective,
    puzzle::{Board, TilePosition},
    solver::Solution,
};

/// Known shortest solutions for a spread of catalog objectives.
const KNOWN_SOLUTIONS: [(usize, &str); 4] = [
    (0, "8547776"),
    (1, "744111222558"),
    (2, "0336743330001122"),
    (57, "000145444100145585411441110007887"),
];

fn replay_boards(initial: &Board, solution: &Solution) -> Vec<Board> {
    let mut boards = vec![initial.clone()];
    for &pos in solution.moves() {
        let next = boards.last().unwrap().rotate(pos).unwrap();
        boards.push(next);
    }
    boards
}

#[test]
fn known_solutions_reach_their_targets() {
    for (number, digits) in KNOWN_SOLUTIONS {
        let objective = Objective::by_problem_number(number).unwrap();
        let solution = Solution::parse(digits).unwrap();
        let finished = solution.replay(&objective.initial_board().unwrap()).unwrap();
        assert!(
            objective.target().unwrap().is_satisfied(&finished),
            "solution {digits} does not satisfy {objective}"
        );
    }
}

#[test]
fn every_intermediate_board_stays_legal() {
    for (number, digits) in KNOWN_SOLUTIONS {
        let objective = Objective::by_problem_number(number).unwrap();
        let solution = Solution::parse(digits).unwrap();
        for board in replay_boards(&objective.initial_board().unwrap(), &solution) {
            assert!(board.is_legal(), "objective {number} left legality");
        }
    }
}

#[test]
fn rotation_changes_exactly_one_tile() {
    for (number, digits) in KNOWN_SOLUTIONS {
        let objective = Objective::by_problem_number(number).unwrap();
        let solution = Solution::parse(digits).unwrap();
        let boards = replay_boards(&objective.initial_board().unwrap(), &solution);
        for (step, window) in boards.windows(2).enumerate() {
            let moved = solution.moves()[step];
            for pos in TilePosition::all() {
                let before = window[0].tile(pos);
                let after = window[1].tile(pos);
                assert_eq!(before.shape, after.shape);
                if pos == moved {
                    assert_eq!(after.rotation, (before.rotation + 1) % 4);
                } else {
                    assert_eq!(before, after);
                }
            }
        }
    }
}

#[test]
fn boats_are_conserved_along_a_replay() {
    for (number, digits) in KNOWN_SOLUTIONS {
        let objective = Objective::by_problem_number(number).unwrap();
        let solution = Solution::parse(digits).unwrap();
        let boards = replay_boards(&objective.initial_board().unwrap(), &solution);
        let colours: Vec<_> = boards[0].boats().iter().map(|b| b.colour).collect();
        for board in &boards {
            let here: Vec<_> = board.boats().iter().map(|b| b.colour).collect();
            assert_eq!(here, colours, "objective {number}");
        }
    }
}

#[test]
fn a_dragged_boat_lands_on_the_rotated_tile() {
    for (number, digits) in KNOWN_SOLUTIONS {
        let objective = Objective::by_problem_number(number).unwrap();
        let solution = Solution::parse(digits).unwrap();
        let boards = replay_boards(&objective.initial_board().unwrap(), &solution);
        for (step, window) in boards.windows(2).enumerate() {
            let moved = solution.moves()[step];
            let borders = moved.border_edges();
            for (before, after) in window[0].boats().iter().zip(window[1].boats()) {
                if before.edge != after.edge {
                    assert!(borders.contains(&before.edge));
                    assert!(borders.contains(&after.edge));
                    assert_eq!(moved.drag_destination(before.edge), Some(after.edge));
                }
            }
        }
    }
}
