//! Sanity checks over the built-in 60-objective catalog

use std::collections::HashMap;

use brainstorm::objective::{Difficulty, Objective};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn catalog_has_sixty_objectives_in_problem_order() {
    let objectives: Vec<Objective> = Objective::catalog().collect();
    assert_eq!(objectives.len(), 60);
    for (i, objective) in objectives.iter().enumerate() {
        assert_eq!(objective.problem_number(), i);
    }
}

#[test]
fn each_tier_holds_fifteen_objectives() {
    let mut counts: HashMap<Difficulty, usize> = HashMap::new();
    for objective in Objective::catalog() {
        *counts.entry(objective.difficulty()).or_default() += 1;
    }
    for difficulty in Difficulty::all() {
        assert_eq!(counts[&difficulty], 15, "tier {difficulty}");
    }
}

#[test]
fn every_initial_state_decodes_to_a_legal_board() {
    for objective in Objective::catalog() {
        let board = objective
            .initial_board()
            .unwrap_or_else(|e| panic!("{objective}: {e}"));
        assert!(board.is_legal(), "{objective} starts from an illegal board");
    }
}

#[test]
fn every_target_names_only_boats_present_on_the_board() {
    for objective in Objective::catalog() {
        let board = objective.initial_board().unwrap();
        let target = objective.target().unwrap();
        for &(colour, _) in target.placements() {
            assert!(
                board.boat(colour).is_some(),
                "{objective} names absent colour {colour:?}"
            );
        }
    }
}

#[test]
fn random_draw_respects_the_requested_tier() {
    let mut rng = StdRng::seed_from_u64(7);
    for difficulty in Difficulty::all() {
        for _ in 0..20 {
            let objective = Objective::random(difficulty, &mut rng);
            assert_eq!(objective.difficulty(), difficulty);
        }
    }
}

#[test]
fn unknown_problem_numbers_are_rejected() {
    assert!(Objective::by_problem_number(60).is_err());
    assert!(Objective::by_problem_number(usize::MAX).is_err());
}
