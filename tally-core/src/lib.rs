//! tally-core: shared finance types for statement ingestion.

pub mod classifier;
pub mod money;
pub mod transaction;

pub use classifier::{ClassifierPolicy, SignDefault};
pub use transaction::{ParsedStatement, ParsedTransaction, TransactionKind};
