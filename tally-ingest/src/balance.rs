//! Ending-balance detection over the full document text.
//!
//! Each format prints its closing balance under a different label; patterns
//! are tried in order and the first numeric match wins. Credit-card
//! balances represent debt and come back negated.

use regex::Regex;

use crate::router::StatementFormat;

const AMOUNT: &str = r"\$?\s*(-?[\d,]+\.\d{2})";

/// `None` when no pattern matched; distinct from a legitimately zero
/// balance.
pub fn ending_balance(text: &str, format: StatementFormat) -> Option<f64> {
    let patterns: Vec<String> = match format {
        StatementFormat::ChaseChecking
        | StatementFormat::ChasePersonalSavings
        | StatementFormat::ChaseBusinessSavings => {
            vec![format!(r"(?i)Ending\s+Balance\s+{AMOUNT}")]
        }
        StatementFormat::ChaseCredit => vec![format!(r"(?i)New\s+Balance\s*:?\s+{AMOUNT}")],
        StatementFormat::AppleCard => vec![
            format!(r"(?i)Total\s+Balance\s*:?\s+{AMOUNT}"),
            format!(r"(?i)New\s+Balance\s*:?\s+{AMOUNT}"),
        ],
        StatementFormat::CapitalOneSavings => vec![
            format!(r"(?i)Ending\s+Balance\s*:?\s+{AMOUNT}"),
            format!(r"(?i)Closing\s+Balance\s*:?\s+{AMOUNT}"),
            format!(r"(?i)Balance\s+as\s+of\s+[A-Za-z]{{3,9}}\.?\s+\d{{1,2}}\s*:?\s+{AMOUNT}"),
        ],
    };

    for pattern in &patterns {
        let Some(caps) = Regex::new(pattern).ok()?.captures(text) else {
            continue;
        };
        let value: f64 = caps[1].replace(',', "").parse().ok()?;
        return Some(if format.is_credit() { -value.abs() } else { value });
    }
    None
}
