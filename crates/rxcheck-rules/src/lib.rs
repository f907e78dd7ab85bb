pub mod db;
pub mod error;
pub mod history;
pub mod model;
pub mod normalize;
pub mod seed;
pub mod service;
pub mod store;

pub use db::{ensure_schema, rule};
pub use error::{Result, RuleError};
pub use history::HistoryLog;
pub use model::{DrugPair, HistoryEntry, InteractionCheck, NewRule, Rule, Severity};
pub use normalize::normalize_pair;
pub use seed::reference_rules;
pub use service::InteractionService;
pub use store::RuleStore;
