use mindscreen_engine::cf::{combine, combine_all};

#[test]
fn combine_matches_formula() {
    assert!((combine(0.36, 0.36) - 0.5904).abs() < 1e-12);
    assert_eq!(combine(0.0, 0.4), 0.4);
    assert_eq!(combine(0.4, 0.0), 0.4);
    assert_eq!(combine(1.0, 0.3), 1.0);
}

#[test]
fn combine_all_of_nothing_is_none() {
    assert_eq!(combine_all(std::iter::empty()), None);
}

#[test]
fn combine_all_seeds_with_first_value() {
    assert_eq!(combine_all([0.48]), Some(0.48));
    let three = combine_all([0.2, 0.5, 0.1]).unwrap();
    assert!((three - 0.64).abs() < 1e-12);
}
