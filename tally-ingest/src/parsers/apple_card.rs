//! Apple Card statement parser.
//!
//! Rows carry full dates plus Daily Cash columns; the transaction amount
//! is the last dollar amount on the line:
//!   01/15/2025 COFFEE SHOP 2% $0.10 $4.50
//!
//! The statement interleaves a "Transactions" section and a "Payments"
//! section. Section tracking is an explicit state machine so a line can
//! never be both; the whole "Payments" section is skipped because card
//! payments duplicate the funding account's record.

use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;
use tally_core::money::parse_money;
use tally_core::{ClassifierPolicy, ParsedTransaction, SignDefault};

use crate::parsers::clean_description;

const POLICY: ClassifierPolicy = ClassifierPolicy::new(&[], &[], &[], SignDefault::BySign);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    Transactions,
    Payments,
}

fn section_transition(line: &str) -> Option<Section> {
    let lower = line.trim().to_lowercase();
    if lower == "transactions" || lower.starts_with("transactions continued") {
        Some(Section::Transactions)
    } else if lower == "payments" || lower.starts_with("payments continued") {
        Some(Section::Payments)
    } else {
        None
    }
}

pub fn parse(text: &str) -> Result<Vec<ParsedTransaction>> {
    let date_re = Regex::new(r"^(?P<month>\d{2})/(?P<day>\d{2})/(?P<year>\d{4})\s")?;
    let money_re = Regex::new(r"-?\$[\d,]+\.\d{2}")?;
    let mut section = Section::Outside;
    let mut out = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if let Some(next) = section_transition(line) {
            section = next;
            continue;
        }
        if section != Section::Transactions {
            continue;
        }
        let Some(caps) = date_re.captures(line) else {
            continue;
        };

        // Last dollar amount is the transaction; the Daily Cash percentage
        // and dollar columns come before it.
        let Some(m) = money_re.find_iter(line).last() else {
            continue;
        };
        let Some(value) = parse_money(m.as_str()) else {
            continue;
        };
        if value == 0.0 {
            continue;
        }

        let (Ok(year), Ok(month), Ok(day)) = (
            caps["year"].parse::<i32>(),
            caps["month"].parse::<u32>(),
            caps["day"].parse::<u32>(),
        ) else {
            continue;
        };
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let desc_tokens: Vec<&str> = tokens[1..]
            .iter()
            .copied()
            .take_while(|t| !t.contains('%') && !t.contains('$') && *t != "(RETURN)")
            .collect();
        let description = clean_description(&desc_tokens);
        if description.is_empty() {
            continue;
        }

        // Charges print positive and become expenses; returns are flagged
        // or print negative and become reimbursement income.
        let is_return = value < 0.0 || line.contains("(RETURN)");
        let oriented = if is_return { value.abs() } else { -value.abs() };
        let (kind, amount) = POLICY.classify(&desc_tokens.join(" "), oriented);

        out.push(ParsedTransaction {
            date,
            description,
            amount,
            balance: None,
            kind,
        });
    }
    Ok(out)
}
