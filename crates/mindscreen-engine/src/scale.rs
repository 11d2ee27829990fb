//! The six-level answer scale offered by the questionnaire.
//!
//! Advisory reference data: the engine accepts any confidence in `[0, 1]`,
//! but clients render these options so answers line up with them.

use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ScaleOption {
    pub value: f64,
    pub label: &'static str,
}

const ANSWER_SCALE: [ScaleOption; 6] = [
    ScaleOption { value: 0.0, label: "Not at all" },
    ScaleOption { value: 0.2, label: "Slightly likely" },
    ScaleOption { value: 0.4, label: "Possibly" },
    ScaleOption { value: 0.6, label: "Quite likely" },
    ScaleOption { value: 0.8, label: "Almost certain" },
    ScaleOption { value: 1.0, label: "Certain" },
];

pub fn answer_scale() -> &'static [ScaleOption] {
    &ANSWER_SCALE
}

/// Label of the scale option equal to `value`, if any.
pub fn label_for(value: f64) -> Option<&'static str> {
    ANSWER_SCALE
        .iter()
        .find(|option| (option.value - value).abs() < 1e-9)
        .map(|option| option.label)
}
