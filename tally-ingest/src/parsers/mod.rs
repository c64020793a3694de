//! Format-specific statement parsers.
//!
//! Shared contract: `parse(full_document_text)` returns the transactions
//! in statement order. Candidate rows are recognized by a date prefix;
//! rows that fail tokenization or match summary markers are skipped, never
//! an error. Only regex-compilation failures propagate.

pub mod apple_card;
pub mod capital_one;
pub mod chase_checking;
pub mod chase_credit;
pub mod chase_savings;

use tally_core::money::is_sign_token;

/// Date-prefixed rows that are balance summaries, not transactions.
const SUMMARY_MARKERS: &[&str] = &[
    "beginning balance",
    "ending balance",
    "balance as of",
    "total deposits",
    "total withdrawals",
    "total fees",
];

pub(crate) fn is_summary_row(line: &str) -> bool {
    let lower = line.to_lowercase();
    SUMMARY_MARKERS.iter().any(|m| lower.contains(m))
}

/// Description cleanup shared by all formats: tokens re-joined with single
/// spaces, embedded "Debit"/"Credit" category labels removed, trailing
/// sign tokens dropped.
pub(crate) fn clean_description(tokens: &[&str]) -> String {
    let mut kept: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| !t.eq_ignore_ascii_case("debit") && !t.eq_ignore_ascii_case("credit"))
        .collect();
    while kept.last().is_some_and(|t| is_sign_token(t)) {
        kept.pop();
    }
    kept.join(" ")
}
