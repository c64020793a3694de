//! Chase credit-card statement parser.
//!
//! Purchase rows carry only an amount, no running balance:
//!   01/13 STARBUCKS STORE 08148 4.50
//!
//! Payments and credits print negative and duplicate the funding account's
//! own record, so negative rows are dropped rather than imported. Every
//! kept row is a charge, stored negated.

use anyhow::Result;
use regex::Regex;
use tally_core::{ClassifierPolicy, ParsedTransaction, SignDefault};

use crate::parsers::{clean_description, is_summary_row};
use crate::period;
use crate::trailing::{Field, match_trailing};

const POLICY: ClassifierPolicy = ClassifierPolicy::new(&[], &[], &[], SignDefault::AlwaysExpense);

pub fn parse(text: &str) -> Result<Vec<ParsedTransaction>> {
    let date_re = Regex::new(r"^(?P<month>\d{2})/(?P<day>\d{2})\s")?;
    let period = period::resolve(text);
    let mut out = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        let Some(caps) = date_re.captures(line) else {
            continue;
        };
        if is_summary_row(line) {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(fields) = match_trailing(&tokens[1..], &[Field::Amount]) else {
            continue;
        };
        // Payments/credits arrive negative; they are tracked on the
        // checking side and must not be imported twice.
        if fields.amount <= 0.0 {
            continue;
        }

        let (Ok(month), Ok(day)) = (caps["month"].parse::<u32>(), caps["day"].parse::<u32>())
        else {
            continue;
        };
        let Some(date) = period.date_for(month, day) else {
            continue;
        };

        let desc_tokens = &tokens[1..1 + fields.desc_end];
        let description = clean_description(desc_tokens);
        if description.is_empty() {
            continue;
        }

        let (kind, amount) = POLICY.classify(&desc_tokens.join(" "), fields.amount);
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
