#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate rs_regret;

use libfuzzer_sys::fuzz_target;
use rs_regret::core::PayoffMatrix;
use rs_regret::dynamics::FictitiousPlayBuilder;
use rs_regret::test_util::assert_valid_history;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub rows: u8,
    pub cols: u8,
    pub rounds: u8,
    pub start_one: u8,
    pub start_two: u8,
    pub payoffs: Vec<i8>,
}

fuzz_target!(|input: Input| {
    let rows = (input.rows as usize % 6) + 1;
    let cols = (input.cols as usize % 6) + 1;
    if input.payoffs.len() < 2 * rows * cols {
        return;
    }

    let a = PayoffMatrix::from_fn(rows, cols, |r, c| input.payoffs[r * cols + c] as f64).unwrap();
    let b = PayoffMatrix::from_fn(rows, cols, |r, c| {
        input.payoffs[rows * cols + r * cols + c] as f64
    })
    .unwrap();

    let play = FictitiousPlayBuilder::new()
        .payoff_one(a)
        .payoff_two(b)
        .rounds(input.rounds as usize + 1)
        .start_actions(input.start_one as usize % rows, input.start_two as usize % cols)
        .build()
        .unwrap();

    let history = play.run();
    assert_eq!(history.rounds(), input.rounds as usize + 1);
    assert_valid_history(&history);
    assert_eq!(history, play.run());
});
