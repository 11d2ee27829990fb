use mindscreen_core::models::symptom::Symptom;
use mindscreen_rules::document::parse_document;
use mindscreen_rules::error::RuleStoreError;
use mindscreen_rules::store::{RuleChange, RuleSelector, SymptomChange};
use mindscreen_rules::RuleStore;

fn small_store() -> RuleStore {
    let document = parse_document(
        r#"{
            "document_version": 1,
            "symptoms": [
                { "code": "G01", "name": "Low mood", "description": null },
                { "code": "G02", "name": "Fatigue", "description": "Tired most days" },
                { "code": "G03", "name": "Retired item", "description": null, "is_active": false }
            ],
            "diseases": [
                { "code": "P01", "name": "Mild depression", "description": null },
                { "code": "P02", "name": "Moderate depression", "description": null }
            ],
            "treatments": [
                { "disease_code": "P02", "treatment_name": "Follow-up", "description": null, "priority_order": 2 },
                { "disease_code": "P02", "treatment_name": "Therapy", "description": null, "priority_order": 1 },
                { "disease_code": "P02", "treatment_name": "Old advice", "description": null, "priority_order": 0, "is_active": false }
            ],
            "rules": [
                { "symptom_code": "G02", "disease_code": "P02", "cf_expert": 0.9 },
                { "symptom_code": "G01", "disease_code": "P02", "cf_expert": 0.6 },
                { "symptom_code": "G01", "disease_code": "P01", "cf_expert": 0.8 },
                { "symptom_code": "G02", "disease_code": "P01", "cf_expert": 0.3, "is_active": false }
            ]
        }"#,
    )
    .unwrap();
    RuleStore::from_document(document).unwrap()
}

#[test]
fn snapshot_holds_active_rules_in_canonical_order() {
    let snapshot = small_store().snapshot();
    let pairs: Vec<(&str, &str)> = snapshot
        .iter()
        .map(|r| (r.symptom_code.as_str(), r.disease_code.as_str()))
        .collect();
    assert_eq!(pairs, vec![("G01", "P01"), ("G01", "P02"), ("G02", "P02")]);
}

#[test]
fn listing_joins_catalog_names() {
    let listing = small_store().active_rules();
    let first = &listing[0];
    assert_eq!(first.symptom_name.as_deref(), Some("Low mood"));
    assert_eq!(first.disease_name, "Mild depression");

    let fatigue = listing.iter().find(|r| r.symptom_code == "G02").unwrap();
    assert_eq!(fatigue.symptom_description.as_deref(), Some("Tired most days"));
}

#[test]
fn adding_a_new_pair_creates_a_rule() {
    let mut store = small_store();
    let upsert = store.add_rule("G02", "P03", 0.5).unwrap();
    assert_eq!(upsert.change, RuleChange::Created);
    assert_eq!(upsert.id, 5);
    assert_eq!(store.snapshot().len(), 4);
}

#[test]
fn adding_an_active_pair_updates_in_place() {
    let mut store = small_store();
    let upsert = store.add_rule("G01", "P01", 0.4).unwrap();
    assert_eq!(upsert.change, RuleChange::Updated);
    assert_eq!(store.rule(upsert.id).unwrap().cf_expert, 0.4);
    assert_eq!(store.snapshot().len(), 3);
}

#[test]
fn adding_an_inactive_pair_reactivates_it() {
    let mut store = small_store();
    let upsert = store.add_rule("G02", "P01", 0.7).unwrap();
    assert_eq!(upsert.change, RuleChange::Reactivated);
    assert_eq!(upsert.id, 4);

    let rule = store.rule(4).unwrap();
    assert!(rule.is_active);
    assert_eq!(rule.cf_expert, 0.7);
}

#[test]
fn adding_requires_an_active_symptom() {
    let mut store = small_store();
    assert!(matches!(
        store.add_rule("G03", "P01", 0.5),
        Err(RuleStoreError::SymptomNotFound(code)) if code == "G03"
    ));
    assert!(matches!(
        store.add_rule("G42", "P01", 0.5),
        Err(RuleStoreError::SymptomNotFound(_))
    ));
}

#[test]
fn out_of_range_confidence_is_rejected() {
    let mut store = small_store();
    assert!(matches!(
        store.add_rule("G01", "P01", 1.5),
        Err(RuleStoreError::Core(_))
    ));
    assert!(store.update_rule(&RuleSelector::Id(1), -0.1).is_err());
}

#[test]
fn update_by_pair_touches_only_active_rules() {
    let mut store = small_store();
    let pair = |s: &str, d: &str| RuleSelector::Pair {
        symptom_code: s.to_string(),
        disease_code: d.to_string(),
    };

    let id = store.update_rule(&pair("G01", "P02"), 0.65).unwrap();
    assert_eq!(store.rule(id).unwrap().cf_expert, 0.65);

    assert!(matches!(
        store.update_rule(&pair("G02", "P01"), 0.5),
        Err(RuleStoreError::RuleNotFound(what)) if what == "G02/P01"
    ));
}

#[test]
fn update_by_id_reaches_inactive_rules() {
    let mut store = small_store();
    assert_eq!(store.update_rule(&RuleSelector::Id(4), 0.2).unwrap(), 4);
    assert!(!store.rule(4).unwrap().is_active);
    assert!(store.update_rule(&RuleSelector::Id(99), 0.2).is_err());
}

#[test]
fn deactivate_is_a_soft_delete() {
    let mut store = small_store();
    store.deactivate_rule(1).unwrap();
    assert!(store.rule(1).is_some());
    assert_eq!(store.snapshot().len(), 2);

    assert!(matches!(
        store.deactivate_rule(1),
        Err(RuleStoreError::RuleNotFound(_))
    ));
}

#[test]
fn symptom_catalog_lists_active_by_code() {
    let mut store = small_store();
    store
        .add_symptom(Symptom {
            code: "G00".to_string(),
            name: "Anxiety".to_string(),
            description: None,
        })
        .unwrap();
    store.deactivate_symptom("G02").unwrap();
    store
        .update_symptom("G01", "Persistent low mood".to_string(), Some("Most days".to_string()))
        .unwrap();

    let codes: Vec<String> = store.active_symptoms().into_iter().map(|s| s.code).collect();
    assert_eq!(codes, vec!["G00", "G01"]);
    assert_eq!(store.symptom("G01").unwrap().name, "Persistent low mood");
    assert!(store.deactivate_symptom("G02").is_err());
}

#[test]
fn treatments_are_active_and_by_priority() {
    let store = small_store();
    let names: Vec<String> = store
        .treatments_for("P02")
        .into_iter()
        .map(|t| t.treatment_name)
        .collect();
    assert_eq!(names, vec!["Therapy", "Follow-up"]);
    assert!(store.treatments_for("P01").is_empty());
}

#[test]
fn unknown_disease_name_falls_back_to_code() {
    let store = small_store();
    assert_eq!(store.disease_name("P02"), "Moderate depression");
    assert_eq!(store.disease_name("P09"), "P09");
}

#[test]
fn builtin_rule_base_loads() {
    let store = RuleStore::builtin().unwrap();
    assert_eq!(store.active_symptoms().len(), 15);
    assert_eq!(store.diseases().count(), 3);
    assert!(!store.snapshot().is_empty());
    assert_eq!(store.treatments_for("P03").len(), 3);
}

#[test]
fn deactivating_a_symptom_deactivates_its_rules() {
    let mut store = small_store();
    assert_eq!(store.deactivate_symptom("G02").unwrap(), 1);

    assert!(store.snapshot().iter().all(|r| r.symptom_code != "G02"));
    assert!(store.active_rules().iter().all(|r| r.symptom_code != "G02"));
    assert_eq!(store.snapshot().len(), 2);
    assert!(!store.rule(1).unwrap().is_active);
}

#[test]
fn hidden_symptom_no_longer_drives_inference_input() {
    let mut store = small_store();
    store.deactivate_symptom("G01").unwrap();

    let pairs: Vec<(String, String)> = store
        .snapshot()
        .into_iter()
        .map(|r| (r.symptom_code, r.disease_code))
        .collect();
    assert_eq!(pairs, vec![("G02".to_string(), "P02".to_string())]);
}

#[test]
fn adding_an_active_symptom_code_conflicts() {
    let mut store = small_store();
    let err = store
        .add_symptom(Symptom {
            code: "G01".to_string(),
            name: "Duplicate".to_string(),
            description: None,
        })
        .unwrap_err();
    assert!(matches!(err, RuleStoreError::DuplicateSymptom(code) if code == "G01"));
    assert_eq!(store.symptom("G01").unwrap().name, "Low mood");
}

#[test]
fn adding_an_inactive_symptom_code_reactivates_it() {
    let mut store = small_store();
    let change = store
        .add_symptom(Symptom {
            code: "G03".to_string(),
            name: "Returning item".to_string(),
            description: None,
        })
        .unwrap();
    assert_eq!(change, SymptomChange::Reactivated);
    assert_eq!(store.symptom("G03").unwrap().name, "Returning item");
    assert!(store.active_symptoms().iter().any(|s| s.code == "G03"));
}
