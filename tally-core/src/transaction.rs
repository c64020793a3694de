//! Normalized statement output types (bank-agnostic).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Semantic class of a statement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
    #[serde(rename = "transfer")]
    Transfer,
}

/// One transaction reconstructed from a statement line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    pub date: NaiveDate,
    pub description: String,
    /// Signed: expenses negative, income positive. Transfers keep the
    /// statement's own sign.
    pub amount: f64,
    /// Running balance after the transaction, where the format prints one.
    /// Credit-card formats have no balance column.
    pub balance: Option<f64>,
    pub kind: TransactionKind,
}

impl ParsedTransaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

/// Full parse result for one statement document.
///
/// Transaction order follows statement order; consumers rely on source
/// order for within-day tie-breaking, so it must not be re-sorted here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedStatement {
    pub transactions: Vec<ParsedTransaction>,
    /// `None` when no closing-balance pattern matched. Debt accounts
    /// (credit cards) report a negative value.
    pub ending_balance: Option<f64>,
}
