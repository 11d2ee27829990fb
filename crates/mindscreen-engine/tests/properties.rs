//! Algebraic properties of CF inference over generated rule bases.

use mindscreen_core::models::answer::AnswerSet;
use mindscreen_core::models::rule::CfRule;
use mindscreen_engine::cf::combine;
use mindscreen_engine::infer;
use proptest::prelude::*;

/// Confidences strictly below full certainty.
fn partial_cf() -> impl Strategy<Value = f64> {
    0.0f64..1.0
}

/// 2–5 (user cf, expert cf) pairs, each on its own symptom, all for P01.
fn single_disease_inputs() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.01f64..=1.0, 0.0f64..=1.0), 2..=5)
}

fn build(inputs: &[(f64, f64)]) -> (Vec<CfRule>, AnswerSet) {
    let rules = inputs
        .iter()
        .enumerate()
        .map(|(i, (_, expert))| CfRule::new(format!("G{:02}", i + 1), "P01", *expert))
        .collect();
    let answers = inputs
        .iter()
        .enumerate()
        .map(|(i, (user, _))| (format!("G{:02}", i + 1), *user))
        .collect();
    (rules, answers)
}

proptest! {
    #[test]
    fn rule_order_does_not_change_scores(
        (inputs, shuffled) in single_disease_inputs().prop_flat_map(|inputs| {
            let len = inputs.len();
            (Just(inputs), Just((0..len).collect::<Vec<_>>()).prop_shuffle())
        })
    ) {
        let (rules, answers) = build(&inputs);
        let permuted: Vec<CfRule> = shuffled.iter().map(|&i| rules[i].clone()).collect();

        let a = infer(&rules, &answers).unwrap();
        let b = infer(&permuted, &answers).unwrap();
        prop_assert!((a.confidence - b.confidence).abs() < 1e-9);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn combination_order_is_irrelevant_within_tolerance(
        values in prop::collection::vec(0.0f64..=1.0, 2..=5).prop_shuffle(),
    ) {
        let forward = values.iter().copied().reduce(combine).unwrap();
        let backward = values.iter().rev().copied().reduce(combine).unwrap();
        prop_assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn scores_stay_in_unit_interval(inputs in single_disease_inputs()) {
        let (rules, answers) = build(&inputs);
        let result = infer(&rules, &answers).unwrap();
        for score in &result.scores {
            prop_assert!((0.0..=1.0).contains(&score.confidence));
        }
    }

    #[test]
    fn partial_contributions_never_reach_one(
        values in prop::collection::vec(partial_cf(), 1..=5),
    ) {
        let combined = values.iter().copied().reduce(combine).unwrap();
        prop_assert!(combined < 1.0);
    }

    #[test]
    fn adding_a_contribution_never_lowers_the_score(
        inputs in single_disease_inputs(),
        extra_user in 0.01f64..=1.0,
        extra_expert in 0.0f64..=1.0,
    ) {
        let (rules, answers) = build(&inputs);
        let before = infer(&rules, &answers).unwrap().score("P01").unwrap();

        let mut more_rules = rules.clone();
        more_rules.push(CfRule::new("G99", "P01", extra_expert));
        let mut more_answers = answers.clone();
        more_answers.insert("G99", extra_user);
        let after = infer(&more_rules, &more_answers).unwrap().score("P01").unwrap();

        prop_assert!(after >= before);
    }

    #[test]
    fn zero_answer_is_same_as_omitted(inputs in single_disease_inputs()) {
        let (mut rules, answers) = build(&inputs);
        rules.push(CfRule::new("G50", "P01", 0.9));
        rules.push(CfRule::new("G50", "P02", 0.9));

        let mut with_zero = answers.clone();
        with_zero.insert("G50", 0.0);

        prop_assert_eq!(infer(&rules, &answers).unwrap(), infer(&rules, &with_zero).unwrap());
    }
}
