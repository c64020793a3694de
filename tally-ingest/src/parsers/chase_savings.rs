//! Chase savings statement parser, personal and business variants.
//!
//! Rows look like checking rows; the business variant adds an optional
//! numeric "instances" column between description and amount:
//!   01/09 Remote Online Deposit 3 1,500.00 4,200.19

use anyhow::Result;
use regex::Regex;
use tally_core::{ClassifierPolicy, ParsedTransaction, SignDefault};

use crate::parsers::{clean_description, is_summary_row};
use crate::period;
use crate::trailing::{Field, match_trailing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsVariant {
    Personal,
    Business,
}

const PERSONAL_POLICY: ClassifierPolicy = ClassifierPolicy::new(
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

const BUSINESS_POLICY: ClassifierPolicy = ClassifierPolicy::new(
    &["online transfer", "transfer to", "transfer from", "wire transfer"],
    &[
        "deposit",
        "direct dep",
        "payroll",
        "interest payment",
        "refund",
        "reversal",
        "remote online deposit",
    ],
    &[],
    SignDefault::BySign,
);

impl SavingsVariant {
    fn policy(&self) -> ClassifierPolicy {
        match self {
            SavingsVariant::Personal => PERSONAL_POLICY,
            SavingsVariant::Business => BUSINESS_POLICY,
        }
    }

    fn trailing(&self) -> &'static [Field] {
        match self {
            SavingsVariant::Personal => &[Field::Balance, Field::Amount],
            SavingsVariant::Business => &[Field::Balance, Field::Amount, Field::Count],
        }
    }
}

pub fn parse(text: &str, variant: SavingsVariant) -> Result<Vec<ParsedTransaction>> {
    let date_re = Regex::new(r"^(?P<month>\d{2})/(?P<day>\d{2})\s")?;
    let period = period::resolve(text);
    let policy = variant.policy();
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
        let Some(fields) = match_trailing(&tokens[1..], variant.trailing()) else {
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

        let (kind, amount) = policy.classify(&desc_tokens.join(" "), fields.amount);
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

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::TransactionKind;

    const HEADER: &str = "January 1, 2025 through January 31, 2025\n";

    #[test]
    fn test_personal_rows_match_checking_shape() {
        let text = format!(
            "{HEADER}\
             01/03 Interest Payment 0.42 1,200.42\n\
             01/09 Online Transfer from Chk ...#456 500.00 1,700.42\n"
        );
        let txns = parse(&text, SavingsVariant::Personal).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].kind, TransactionKind::Income);
        assert_eq!(txns[0].amount, 0.42);
        assert_eq!(txns[1].kind, TransactionKind::Transfer);
        assert_eq!(txns[1].balance, Some(1700.42));
    }

    #[test]
    fn test_business_instances_column() {
        let text = format!("{HEADER}01/09 Remote Online Deposit 3 1,500.00 4,200.19\n");
        let txns = parse(&text, SavingsVariant::Business).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "Remote Online Deposit");
        assert_eq!(txns[0].amount, 1500.00);
        assert_eq!(txns[0].kind, TransactionKind::Income);
        assert_eq!(txns[0].balance, Some(4200.19));
    }

    #[test]
    fn test_business_rows_without_count_still_parse() {
        let text = format!("{HEADER}01/12 Wire Fee - 15.00 4,185.19\n");
        let txns = parse(&text, SavingsVariant::Business).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, -15.00);
        assert_eq!(txns[0].kind, TransactionKind::Expense);
    }
}
