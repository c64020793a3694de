//! Right-to-left trailing-field matching for columnar statement lines.
//!
//! Statement rows end in a short, format-specific run of numeric columns
//! (running balance, amount, sometimes an instances count), with everything
//! before them being description text. Counting token positions from the
//! line start is fragile because descriptions have arbitrary token counts;
//! matching the expected trailing columns from the right is not.

use tally_core::money::{is_count_token, is_sign_token, parse_money};

/// One expected trailing column, listed rightmost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Running balance; required money token.
    Balance,
    /// Transaction amount; required money token. A detached sign column
    /// immediately to its left (`- 14.05`) is folded into the value.
    Amount,
    /// Optional bare-integer column (Chase business "instances").
    Count,
}

/// Parsed trailing columns plus the description boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Trailing {
    pub amount: f64,
    pub balance: Option<f64>,
    pub count: Option<u32>,
    /// Index one past the last description token.
    pub desc_end: usize,
}

/// Match `fields` against the end of `tokens`.
///
/// Returns `None` when a required money column is missing or non-numeric,
/// which is how non-transaction rows (summary lines, headers) get skipped.
pub fn match_trailing(tokens: &[&str], fields: &[Field]) -> Option<Trailing> {
    let mut idx = tokens.len();
    let mut out = Trailing::default();

    for field in fields {
        match field {
            Field::Balance => {
                if idx == 0 {
                    return None;
                }
                out.balance = Some(parse_money(tokens[idx - 1])?);
                idx -= 1;
            }
            Field::Amount => {
                if idx == 0 {
                    return None;
                }
                let mut value = parse_money(tokens[idx - 1])?;
                idx -= 1;
                if idx > 0 && is_sign_token(tokens[idx - 1]) {
                    if tokens[idx - 1] == "-" {
                        value = -value.abs();
                    }
                    idx -= 1;
                }
                out.amount = value;
            }
            Field::Count => {
                if idx > 0 && is_count_token(tokens[idx - 1]) {
                    out.count = tokens[idx - 1].parse().ok();
                    idx -= 1;
                }
            }
        }
    }

    out.desc_end = idx;
    Some(out)
}
