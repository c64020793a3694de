//! Chase checking statement parser.
//!
//! Transaction detail rows after layout reconstruction:
//!   DATE  DESCRIPTION                              AMOUNT    BALANCE
//!   01/05 Payroll Acme Inc Dir Dep                 1,500.00  2,450.10
//!   01/07 Card Purchase Grocery Store              - 42.00   2,408.10
//!
//! The amount's sign sometimes prints as its own column, handled by the
//! trailing-field matcher.

use anyhow::Result;
use regex::Regex;
use tally_core::{ClassifierPolicy, ParsedTransaction, SignDefault};

use crate::parsers::{clean_description, is_summary_row};
use crate::period;
use crate::trailing::{Field, match_trailing};

const POLICY: ClassifierPolicy = ClassifierPolicy::new(
    &["online transfer", "transfer to", "transfer from", "wire transfer"],
    &[
        "deposit",
        "direct dep",
        "payroll",
        "interest payment",
        "refund",
        "reversal",
    ],
    &[],
    SignDefault::BySign,
);

const TRAILING: &[Field] = &[Field::Balance, Field::Amount];

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
        // Cross-tracked in the credit-card statement; importing both sides
        // would double-count the payment.
        if line.contains("Payment to Chase Card") {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(fields) = match_trailing(&tokens[1..], TRAILING) else {
            continue;
        };
        if fields.amount == 0.0 {
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
            balance: fields.balance,
            kind,
        });
    }
    Ok(out)
}
