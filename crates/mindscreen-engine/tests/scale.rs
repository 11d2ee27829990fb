use mindscreen_engine::scale::{answer_scale, label_for};

#[test]
fn scale_has_six_ascending_levels_in_range() {
    let scale = answer_scale();
    assert_eq!(scale.len(), 6);
    assert_eq!(scale[0].value, 0.0);
    assert_eq!(scale[5].value, 1.0);
    assert!(scale.windows(2).all(|w| w[0].value < w[1].value));
}

#[test]
fn labels_resolve_for_scale_values_only() {
    assert_eq!(label_for(0.0), Some("Not at all"));
    assert_eq!(label_for(0.6), Some("Quite likely"));
    assert_eq!(label_for(1.0), Some("Certain"));
    assert_eq!(label_for(0.5), None);
}
