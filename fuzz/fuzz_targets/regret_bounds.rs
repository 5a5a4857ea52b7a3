#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate rs_regret;

use libfuzzer_sys::fuzz_target;
use rs_regret::core::CostSequence;
use rs_regret::regret::RegretReport;
use rs_regret::selection::{SelectionConfig, SelectionPolicy, TieBreak};
use rs_regret::test_util::assert_regret_bounds;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub num_options: u8,
    pub first_choice: u8,
    pub tie_break: TieBreak,
    pub costs: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let num_options = (input.num_options as usize % 8) + 1;
    let rounds = input.costs.len() / num_options;
    if rounds == 0 {
        return;
    }

    // Small integer costs keep every sum exact.
    let costs = CostSequence::from_fn(rounds, num_options, |t, k| {
        input.costs[t * num_options + k] as f64
    })
    .unwrap();

    let config = SelectionConfig {
        num_options,
        tie_break: input.tie_break,
        first_choice: input.first_choice as usize % num_options,
    };
    let policy = SelectionPolicy::from_config(&config).unwrap();

    let selection = policy.select(&costs).unwrap();
    assert_eq!(selection, policy.select(&costs).unwrap());
    assert_eq!(selection.picks.len(), rounds);

    let report = RegretReport::for_selection(&selection, &costs).unwrap();
    assert!(report.is_consistent(0.0));
    assert!(report.swap_regret >= report.external_regret);
    assert_regret_bounds(&report);
});
