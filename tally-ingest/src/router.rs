//! Format routing: declared statement format to the matching parser.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use tally_core::ParsedStatement;

use crate::balance;
use crate::layout;
use crate::parsers;
use crate::parsers::chase_savings::SavingsVariant;
use crate::pdf::PdfTextSource;

/// Supported statement formats (institution + account type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementFormat {
    ChaseChecking,
    ChasePersonalSavings,
    ChaseBusinessSavings,
    ChaseCredit,
    AppleCard,
    CapitalOneSavings,
}

impl StatementFormat {
    pub const ALL: [StatementFormat; 6] = [
        StatementFormat::ChaseChecking,
        StatementFormat::ChasePersonalSavings,
        StatementFormat::ChaseBusinessSavings,
        StatementFormat::ChaseCredit,
        StatementFormat::AppleCard,
        StatementFormat::CapitalOneSavings,
    ];

    /// Stable selector string used by callers (CLI, upload API).
    pub fn selector(&self) -> &'static str {
        match self {
            StatementFormat::ChaseChecking => "chase-checking",
            StatementFormat::ChasePersonalSavings => "chase-personal-savings",
            StatementFormat::ChaseBusinessSavings => "chase-business-savings",
            StatementFormat::ChaseCredit => "chase-credit",
            StatementFormat::AppleCard => "apple-card",
            StatementFormat::CapitalOneSavings => "capital-one-savings",
        }
    }

    /// Debt accounts: balances report negative.
    pub fn is_credit(&self) -> bool {
        matches!(
            self,
            StatementFormat::ChaseCredit | StatementFormat::AppleCard
        )
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for StatementFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        for format in StatementFormat::ALL {
            if s.eq_ignore_ascii_case(format.selector()) {
                return Ok(format);
            }
        }
        bail!("unsupported statement format: {s}");
    }
}

/// Parse already-reconstructed document text for the given format.
///
/// Line-level problems never surface here; unrecognized lines are skipped
/// inside the parsers by design.
pub fn parse_statement_text(text: &str, format: StatementFormat) -> Result<ParsedStatement> {
    let transactions = match format {
        StatementFormat::ChaseChecking => parsers::chase_checking::parse(text)?,
        StatementFormat::ChasePersonalSavings => {
            parsers::chase_savings::parse(text, SavingsVariant::Personal)?
        }
        StatementFormat::ChaseBusinessSavings => {
            parsers::chase_savings::parse(text, SavingsVariant::Business)?
        }
        StatementFormat::ChaseCredit => parsers::chase_credit::parse(text)?,
        StatementFormat::AppleCard => parsers::apple_card::parse(text)?,
        StatementFormat::CapitalOneSavings => parsers::capital_one::parse(text)?,
    };

    Ok(ParsedStatement {
        transactions,
        ending_balance: balance::ending_balance(text, format),
    })
}

/// Parse a raw statement PDF buffer.
///
/// Only document-level failures propagate: an unreadable PDF from the
/// text-extraction collaborator, or (upstream of this call) an unsupported
/// format selector.
pub fn parse_statement(
    buffer: &[u8],
    format: StatementFormat,
    source: &dyn PdfTextSource,
) -> Result<ParsedStatement> {
    let pages = source
        .pages(buffer)
        .context("extracting text from statement PDF")?;
    let text = layout::document_text(&pages);
    parse_statement_text(&text, format)
}
