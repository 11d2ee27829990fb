pub mod cf_rules;
pub mod health;
pub mod screening;
pub mod symptoms;
