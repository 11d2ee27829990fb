use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use mindscreen_core::confidence::check_confidence;
use mindscreen_core::models::disease::{Disease, Treatment};
use mindscreen_core::models::rule::CfRule;
use mindscreen_core::models::symptom::Symptom;

use crate::document::{builtin_document, RuleBaseDocument, RuleEntry, SymptomEntry};
use crate::error::RuleStoreError;

/// A rule as kept by the store. Deactivated rules are retained so that
/// re-adding the same pair reactivates the original id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredRule {
    pub id: u64,
    pub symptom_code: String,
    pub disease_code: String,
    pub cf_expert: f64,
    pub is_active: bool,
    pub updated_at: jiff::Timestamp,
}

/// An active rule joined with catalog names, for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleListing {
    pub id: u64,
    pub symptom_code: String,
    pub disease_code: String,
    pub cf_expert: f64,
    pub symptom_name: Option<String>,
    pub symptom_description: Option<String>,
    pub disease_name: String,
}

/// What `add_rule` did to reach the requested state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleChange {
    Created,
    Updated,
    Reactivated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleUpsert {
    pub id: u64,
    pub change: RuleChange,
}

/// What `add_symptom` did to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomChange {
    Created,
    Reactivated,
}

/// Identifies the rule an update applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSelector {
    /// Any rule with this id, active or not.
    Id(u64),
    /// The active rule for this (symptom, disease) pair.
    Pair {
        symptom_code: String,
        disease_code: String,
    },
}

/// In-memory rule base. Keeps at most one active rule per
/// (symptom, disease) pair.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    symptoms: BTreeMap<String, SymptomEntry>,
    diseases: BTreeMap<String, Disease>,
    treatments: Vec<Treatment>,
    rules: Vec<StoredRule>,
    last_id: u64,
}

impl RuleStore {
    /// Build a store from a parsed document, rejecting out-of-range expert
    /// confidences and duplicate active pairs.
    pub fn from_document(document: RuleBaseDocument) -> Result<Self, RuleStoreError> {
        let mut store = RuleStore::default();

        for entry in document.symptoms {
            store.symptoms.insert(entry.symptom.code.clone(), entry);
        }
        for disease in document.diseases {
            store.diseases.insert(disease.code.clone(), disease);
        }
        store.treatments = document.treatments;

        let mut active_pairs = BTreeSet::new();
        let now = jiff::Timestamp::now();
        for RuleEntry {
            symptom_code,
            disease_code,
            cf_expert,
            is_active,
        } in document.rules
        {
            check_confidence(&format!("{symptom_code}/{disease_code}"), cf_expert)?;
            if is_active && !active_pairs.insert((symptom_code.clone(), disease_code.clone())) {
                return Err(RuleStoreError::DuplicateRule {
                    symptom_code,
                    disease_code,
                });
            }
            if !store.symptoms.contains_key(&symptom_code) {
                tracing::warn!(symptom = %symptom_code, "rule references a symptom missing from the catalog");
            }
            let id = store.allocate_id();
            store.rules.push(StoredRule {
                id,
                symptom_code,
                disease_code,
                cf_expert,
                is_active,
                updated_at: now,
            });
        }

        Ok(store)
    }

    /// The bundled sample rule base.
    pub fn builtin() -> Result<Self, RuleStoreError> {
        Self::from_document(builtin_document()?)
    }

    fn allocate_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    /// Immutable copy of the active rules, the engine's only input from the
    /// store. Ordered by (symptom code, disease code).
    pub fn snapshot(&self) -> Vec<CfRule> {
        self.active_iter()
            .map(|r| CfRule::new(r.symptom_code.clone(), r.disease_code.clone(), r.cf_expert))
            .collect()
    }

    fn active_iter(&self) -> impl Iterator<Item = &StoredRule> {
        let mut active: Vec<&StoredRule> = self.rules.iter().filter(|r| r.is_active).collect();
        active.sort_by(|a, b| {
            (&a.symptom_code, &a.disease_code).cmp(&(&b.symptom_code, &b.disease_code))
        });
        active.into_iter()
    }

    pub fn active_rules(&self) -> Vec<RuleListing> {
        self.active_iter()
            .map(|r| {
                let symptom = self.symptoms.get(&r.symptom_code).map(|e| &e.symptom);
                RuleListing {
                    id: r.id,
                    symptom_code: r.symptom_code.clone(),
                    disease_code: r.disease_code.clone(),
                    cf_expert: r.cf_expert,
                    symptom_name: symptom.map(|s| s.name.clone()),
                    symptom_description: symptom.and_then(|s| s.description.clone()),
                    disease_name: self.disease_name(&r.disease_code),
                }
            })
            .collect()
    }

    pub fn rule(&self, id: u64) -> Option<&StoredRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Add a rule for a pair, or update/reactivate the existing one.
    ///
    /// The symptom must be active in the catalog.
    pub fn add_rule(
        &mut self,
        symptom_code: &str,
        disease_code: &str,
        cf_expert: f64,
    ) -> Result<RuleUpsert, RuleStoreError> {
        check_confidence("cf_expert", cf_expert)?;
        if !self.is_active_symptom(symptom_code) {
            return Err(RuleStoreError::SymptomNotFound(symptom_code.to_string()));
        }

        let now = jiff::Timestamp::now();
        let existing = self
            .rules
            .iter_mut()
            .filter(|r| r.symptom_code == symptom_code && r.disease_code == disease_code)
            .max_by_key(|r| r.is_active);

        let upsert = match existing {
            Some(rule) => {
                let change = if rule.is_active {
                    RuleChange::Updated
                } else {
                    RuleChange::Reactivated
                };
                rule.cf_expert = cf_expert;
                rule.is_active = true;
                rule.updated_at = now;
                RuleUpsert { id: rule.id, change }
            }
            None => {
                let id = self.allocate_id();
                self.rules.push(StoredRule {
                    id,
                    symptom_code: symptom_code.to_string(),
                    disease_code: disease_code.to_string(),
                    cf_expert,
                    is_active: true,
                    updated_at: now,
                });
                RuleUpsert {
                    id,
                    change: RuleChange::Created,
                }
            }
        };

        tracing::info!(
            id = upsert.id,
            symptom = symptom_code,
            disease = disease_code,
            cf_expert,
            change = ?upsert.change,
            "cf rule saved"
        );
        Ok(upsert)
    }

    /// Change the expert confidence of an existing rule.
    pub fn update_rule(
        &mut self,
        selector: &RuleSelector,
        cf_expert: f64,
    ) -> Result<u64, RuleStoreError> {
        check_confidence("cf_expert", cf_expert)?;

        let rule = match selector {
            RuleSelector::Id(id) => self.rules.iter_mut().find(|r| r.id == *id),
            RuleSelector::Pair {
                symptom_code,
                disease_code,
            } => self.rules.iter_mut().find(|r| {
                r.is_active && &r.symptom_code == symptom_code && &r.disease_code == disease_code
            }),
        }
        .ok_or_else(|| RuleStoreError::RuleNotFound(describe(selector)))?;

        rule.cf_expert = cf_expert;
        rule.updated_at = jiff::Timestamp::now();
        Ok(rule.id)
    }

    /// Soft-delete an active rule.
    pub fn deactivate_rule(&mut self, id: u64) -> Result<(), RuleStoreError> {
        let rule = self
            .rules
            .iter_mut()
            .find(|r| r.id == id && r.is_active)
            .ok_or_else(|| RuleStoreError::RuleNotFound(id.to_string()))?;
        rule.is_active = false;
        rule.updated_at = jiff::Timestamp::now();
        tracing::info!(id, "cf rule deactivated");
        Ok(())
    }

    /// Add a symptom to the catalog. An inactive symptom with the same code
    /// is reactivated with the new name and description; an active one is a
    /// conflict.
    pub fn add_symptom(&mut self, symptom: Symptom) -> Result<SymptomChange, RuleStoreError> {
        let change = match self.symptoms.get(&symptom.code) {
            Some(entry) if entry.is_active => {
                return Err(RuleStoreError::DuplicateSymptom(symptom.code));
            }
            Some(_) => SymptomChange::Reactivated,
            None => SymptomChange::Created,
        };
        tracing::info!(symptom = %symptom.code, change = ?change, "symptom saved");
        self.symptoms.insert(
            symptom.code.clone(),
            SymptomEntry {
                symptom,
                is_active: true,
            },
        );
        Ok(change)
    }

    pub fn update_symptom(
        &mut self,
        code: &str,
        name: String,
        description: Option<String>,
    ) -> Result<(), RuleStoreError> {
        let entry = self
            .symptoms
            .get_mut(code)
            .ok_or_else(|| RuleStoreError::SymptomNotFound(code.to_string()))?;
        entry.symptom.name = name;
        entry.symptom.description = description;
        Ok(())
    }

    /// Hide a symptom from the questionnaire and deactivate every active rule
    /// on it. Returns the number of rules deactivated.
    pub fn deactivate_symptom(&mut self, code: &str) -> Result<usize, RuleStoreError> {
        let entry = self
            .symptoms
            .get_mut(code)
            .filter(|e| e.is_active)
            .ok_or_else(|| RuleStoreError::SymptomNotFound(code.to_string()))?;
        entry.is_active = false;

        let now = jiff::Timestamp::now();
        let mut deactivated = 0;
        for rule in self
            .rules
            .iter_mut()
            .filter(|r| r.is_active && r.symptom_code == code)
        {
            rule.is_active = false;
            rule.updated_at = now;
            deactivated += 1;
        }

        tracing::info!(symptom = code, rules = deactivated, "symptom deactivated");
        Ok(deactivated)
    }

    /// Active symptoms ordered by code.
    pub fn active_symptoms(&self) -> Vec<Symptom> {
        self.symptoms
            .values()
            .filter(|e| e.is_active)
            .map(|e| e.symptom.clone())
            .collect()
    }

    pub fn symptom(&self, code: &str) -> Option<&Symptom> {
        self.symptoms.get(code).map(|e| &e.symptom)
    }

    fn is_active_symptom(&self, code: &str) -> bool {
        self.symptoms.get(code).is_some_and(|e| e.is_active)
    }

    pub fn disease(&self, code: &str) -> Option<&Disease> {
        self.diseases.get(code)
    }

    pub fn diseases(&self) -> impl Iterator<Item = &Disease> {
        self.diseases.values()
    }

    /// Display name of a disease, falling back to its code.
    pub fn disease_name(&self, code: &str) -> String {
        self.disease(code)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| code.to_string())
    }

    /// Active treatments for a disease, by ascending priority.
    pub fn treatments_for(&self, disease_code: &str) -> Vec<Treatment> {
        let mut treatments: Vec<Treatment> = self
            .treatments
            .iter()
            .filter(|t| t.is_active && t.disease_code == disease_code)
            .cloned()
            .collect();
        treatments.sort_by_key(|t| t.priority_order);
        treatments
    }
}

fn describe(selector: &RuleSelector) -> String {
    match selector {
        RuleSelector::Id(id) => id.to_string(),
        RuleSelector::Pair {
            symptom_code,
            disease_code,
        } => format!("{symptom_code}/{disease_code}"),
    }
}
