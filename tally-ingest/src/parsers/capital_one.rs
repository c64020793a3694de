//! Capital One savings statement parser.
//!
//! Rows use abbreviated month dates, a detached sign column, and a
//! trailing running balance:
//!   Oct 5 Monthly Interest Paid + $12.34 $5,012.34
//!
//! When the amount cell wraps, the sign and amount land on their own
//! physical line below the row while the balance stays put:
//!   Oct 21 Wire Transfer Debit $9,267.42
//!   - $3,633.74
//! The continuation is detected by its bare sign+$ shape and folded back
//! in ahead of the balance before tokenization.

use anyhow::Result;
use regex::Regex;
use tally_core::{ClassifierPolicy, ParsedTransaction, SignDefault};

use crate::parsers::{clean_description, is_summary_row};
use crate::period;
use crate::trailing::{Field, match_trailing};

// Withdrawal rows can print without a sign token, so the cue word itself
// must force an expense.
const POLICY: ClassifierPolicy = ClassifierPolicy::new(
    &["transfer", "xfer"],
    &["interest"],
    &["withdrawal"],
    SignDefault::BySign,
);

const TRAILING: &[Field] = &[Field::Balance, Field::Amount];

pub fn parse(text: &str) -> Result<Vec<ParsedTransaction>> {
    let date_re = Regex::new(r"^(?P<mon>[A-Za-z]{3})\.?\s+(?P<day>\d{1,2})\s")?;
    let continuation_re = Regex::new(r"^[-+]\s*\$?[\d,]+\.\d{2}$")?;
    let period = period::resolve(text);
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut out = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        i += 1;

        let Some(caps) = date_re.captures(line) else {
            continue;
        };
        let Some(month) = period::month_number(&caps["mon"]) else {
            continue;
        };
        if is_summary_row(line) {
            continue;
        }

        let mut tokens: Vec<&str> = line.split_whitespace().collect();

        // Wrapped amount cell: fold the continuation line's sign+amount
        // back in ahead of the balance column.
        if i < lines.len() && continuation_re.is_match(lines[i]) {
            let insert_at = tokens.len().saturating_sub(1);
            for (offset, tok) in lines[i].split_whitespace().enumerate() {
                tokens.insert(insert_at + offset, tok);
            }
            i += 1;
        }

        let Some(fields) = match_trailing(&tokens[2..], TRAILING) else {
            continue;
        };
        if fields.amount == 0.0 {
            continue;
        }

        let Ok(day) = caps["day"].parse::<u32>() else {
            continue;
        };
        let Some(date) = period.date_for(month, day) else {
            continue;
        };

        let desc_tokens = &tokens[2..2 + fields.desc_end];
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

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::TransactionKind;

    const HEADER: &str = "Oct 1 - Oct 31, 2024\n";

    #[test]
    fn test_single_line_rows() {
        let text = format!(
            "{HEADER}\
             Oct 5 Monthly Interest Paid + $12.34 $5,012.34\n\
             Oct 9 Withdrawal ATM - $200.00 $4,812.34\n"
        );
        let txns = parse(&text).unwrap();
        assert_eq!(txns.len(), 2);

        assert_eq!(txns[0].kind, TransactionKind::Income);
        assert_eq!(txns[0].amount, 12.34);
        assert_eq!(txns[0].balance, Some(5012.34));
        assert_eq!(txns[0].date.to_string(), "2024-10-05");

        assert_eq!(txns[1].kind, TransactionKind::Expense);
        assert_eq!(txns[1].amount, -200.00);
    }

    #[test]
    fn test_two_line_continuation_merges_before_tokenization() {
        let text = format!(
            "{HEADER}\
             Oct 21 Wire Transfer Debit $9,267.42\n\
             - $3,633.74\n"
        );
        let txns = parse(&text).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, -3633.74);
        assert_eq!(txns[0].balance, Some(9267.42));
        assert_eq!(txns[0].kind, TransactionKind::Transfer);
        // "Debit" is a category label, not part of the merchant text.
        assert_eq!(txns[0].description, "Wire Transfer");
    }

    #[test]
    fn test_withdrawal_without_sign_token_is_an_expense() {
        // Some withdrawal rows print the amount bare; the cue word alone
        // must drive the classification and the sign.
        let text = format!("{HEADER}Oct 9 Withdrawal ATM $200.00 $4,812.34\n");
        let txns = parse(&text).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].kind, TransactionKind::Expense);
        assert_eq!(txns[0].amount, -200.00);
        assert_eq!(txns[0].balance, Some(4812.34));
    }

    #[test]
    fn test_transfer_keyword_outranks_interest() {
        let text = format!("{HEADER}Oct 12 Interest Xfer to Chk - $1.00 $4,811.34\n");
        let txns = parse(&text).unwrap();
        assert_eq!(txns[0].kind, TransactionKind::Transfer);
        assert_eq!(txns[0].amount, -1.00);
    }

    #[test]
    fn test_non_row_lines_skipped() {
        let text = format!(
            "{HEADER}\
             Here's your statement for Oct 2024.\n\
             Balance as of Oct 21: $9,267.42\n\
             Oct 9 Withdrawal ATM - $200.00 $4,812.34\n"
        );
        let txns = parse(&text).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "Withdrawal ATM");
    }
}
