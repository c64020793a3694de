//! Shared type/sign classification for statement lines.
//!
//! Every statement format decides INCOME vs EXPENSE vs TRANSFER from the
//! same shape of rule: transfer keywords beat income keywords, which beat
//! expense keywords, which beat the raw sign of the amount. The keyword
//! sets and the sign fallback are the only things that differ per format,
//! so they live in a policy record instead of being re-implemented inside
//! each parser.

use crate::transaction::TransactionKind;

/// Fallback used when no keyword matches the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignDefault {
    /// Negative raw amount is an expense, non-negative is income.
    BySign,
    /// Every unmatched line is an expense (charge-only card formats).
    AlwaysExpense,
}

/// Per-format classification policy.
///
/// Keywords are matched case-insensitively as substrings of the raw
/// description, so they must be lowercase here.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierPolicy {
    pub transfer_keywords: &'static [&'static str],
    pub income_keywords: &'static [&'static str],
    /// Cues that mark a row as an expense even when its amount prints
    /// without a sign (Capital One "Withdrawal" rows).
    pub expense_keywords: &'static [&'static str],
    pub sign_default: SignDefault,
}

impl ClassifierPolicy {
    pub const fn new(
        transfer_keywords: &'static [&'static str],
        income_keywords: &'static [&'static str],
        expense_keywords: &'static [&'static str],
        sign_default: SignDefault,
    ) -> Self {
        Self {
            transfer_keywords,
            income_keywords,
            expense_keywords,
            sign_default,
        }
    }

    /// Classify a line and normalize the amount's sign.
    ///
    /// Invariant on the result: EXPENSE amounts are negative, INCOME
    /// amounts positive. TRANSFER keeps the raw sign, since direction is
    /// meaningful there.
    pub fn classify(&self, description: &str, raw_amount: f64) -> (TransactionKind, f64) {
        let desc = description.to_lowercase();

        if self.transfer_keywords.iter().any(|k| desc.contains(k)) {
            return (TransactionKind::Transfer, raw_amount);
        }
        if self.income_keywords.iter().any(|k| desc.contains(k)) {
            return (TransactionKind::Income, raw_amount.abs());
        }
        if self.expense_keywords.iter().any(|k| desc.contains(k)) {
            return (TransactionKind::Expense, -raw_amount.abs());
        }

        match self.sign_default {
            SignDefault::BySign if raw_amount < 0.0 => {
                (TransactionKind::Expense, -raw_amount.abs())
            }
            SignDefault::BySign => (TransactionKind::Income, raw_amount.abs()),
            SignDefault::AlwaysExpense => (TransactionKind::Expense, -raw_amount.abs()),
        }
    }
}
