//! Cross-format properties of the statement parsing pipeline.

use tally_ingest::layout::{self, TextFragment};
use tally_ingest::{StatementFormat, parse_statement_text};

fn chase_checking_text() -> String {
    "December 26, 2024 through January 24, 2025\n\
     TRANSACTION DETAIL\n\
     12/30 Card Purchase Grocery Store -42.00 958.00\n\
     01/05 Payroll Acme Inc 1,500.00 2,458.00\n\
     01/10 Online Transfer to Sav ...#123 -300.00 2,158.00\n\
     01/24 Ending Balance 2,158.00\n"
        .to_string()
}

#[test]
fn chase_checking_rows_resolve_dates_from_the_period() {
    let stmt = parse_statement_text(&chase_checking_text(), StatementFormat::ChaseChecking).unwrap();
    let dates: Vec<String> = stmt
        .transactions
        .iter()
        .map(|t| t.date.to_string())
        .collect();
    // Cross-year period: December rows take the earlier year.
    assert_eq!(dates, vec!["2024-12-30", "2025-01-05", "2025-01-10"]);
    assert_eq!(stmt.ending_balance, Some(2158.00));
}

#[test]
fn parsing_is_idempotent() {
    let text = chase_checking_text();
    let first = parse_statement_text(&text, StatementFormat::ChaseChecking).unwrap();
    let second = parse_statement_text(&text, StatementFormat::ChaseChecking).unwrap();
    assert_eq!(first, second);
}

#[test]
fn sign_invariant_holds_across_formats() {
    let cases = vec![
        (chase_checking_text(), StatementFormat::ChaseChecking),
        (
            "Oct 1 - Oct 31, 2024\n\
             Oct 5 Monthly Interest Paid + $12.34 $5,012.34\n\
             Oct 9 Withdrawal ATM - $200.00 $4,812.34\n"
                .to_string(),
            StatementFormat::CapitalOneSavings,
        ),
        (
            "Transactions\n\
             01/15/2025 COFFEE SHOP 2% $0.10 $4.50\n\
             01/18/2025 SHOE STORE (RETURN) 2% $0.00 $64.00\n"
                .to_string(),
            StatementFormat::AppleCard,
        ),
        (
            "December 26, 2024 through January 24, 2025\n\
             01/02 WHOLEFDS MKT 10235 87.12\n"
                .to_string(),
            StatementFormat::ChaseCredit,
        ),
    ];

    for (text, format) in cases {
        let stmt = parse_statement_text(&text, format).unwrap();
        assert!(!stmt.transactions.is_empty(), "{format}: no rows parsed");
        for t in &stmt.transactions {
            if t.is_expense() {
                assert!(t.amount < 0.0, "{format}: expense not negative: {t:?}");
            }
            if t.is_income() {
                assert!(t.amount > 0.0, "{format}: income not positive: {t:?}");
            }
        }
    }
}

#[test]
fn credit_formats_never_import_negative_source_rows() {
    let text = "December 26, 2024 through January 24, 2025\n\
                01/05 Payment Thank You - Web -250.00\n\
                01/07 GAS STATION 40.00\n";
    let stmt = parse_statement_text(text, StatementFormat::ChaseCredit).unwrap();
    assert_eq!(stmt.transactions.len(), 1);
    assert_eq!(stmt.transactions[0].description, "GAS STATION");
}

#[test]
fn apple_card_scenario_from_the_statement_layout() {
    let text = "Transactions\n01/15/2025 COFFEE SHOP 2% $0.10 $4.50\n";
    let stmt = parse_statement_text(text, StatementFormat::AppleCard).unwrap();
    assert_eq!(stmt.transactions.len(), 1);
    let t = &stmt.transactions[0];
    assert_eq!(t.description, "COFFEE SHOP");
    assert_eq!(t.amount, -4.50);
    assert!(t.is_expense());
}

#[test]
fn capital_one_wrapped_amount_scenario() {
    let text = "Oct 1 - Oct 31, 2024\n\
                Oct 21 Wire Transfer Debit $9,267.42\n\
                - $3,633.74\n";
    let stmt = parse_statement_text(text, StatementFormat::CapitalOneSavings).unwrap();
    assert_eq!(stmt.transactions.len(), 1);
    assert_eq!(stmt.transactions[0].amount, -3633.74);
    assert_eq!(stmt.transactions[0].balance, Some(9267.42));
}

#[test]
fn credit_new_balance_is_negated_and_absent_is_none() {
    let text = "December 26, 2024 through January 24, 2025\n\
                New Balance $1,234.56\n";
    let stmt = parse_statement_text(text, StatementFormat::ChaseCredit).unwrap();
    assert_eq!(stmt.ending_balance, Some(-1234.56));

    let stmt = parse_statement_text("no balance here", StatementFormat::ChaseCredit).unwrap();
    assert_eq!(stmt.ending_balance, None);
    assert!(stmt.transactions.is_empty());
}

#[test]
fn parsed_statement_serializes_for_the_upload_api() {
    let stmt = parse_statement_text(&chase_checking_text(), StatementFormat::ChaseChecking).unwrap();
    let json = serde_json::to_value(&stmt).unwrap();
    assert_eq!(json["ending_balance"], 2158.00);
    assert_eq!(json["transactions"][0]["kind"], "expense");
    assert_eq!(json["transactions"][0]["date"], "2024-12-30");
}

#[test]
fn unsupported_selector_is_an_error() {
    let err = "monopoly-money".parse::<StatementFormat>().unwrap_err();
    assert!(err.to_string().contains("unsupported statement format"));
}

#[test]
fn fragments_flow_through_layout_into_the_parser() {
    // One checking row scattered out of reading order across a page.
    let page = vec![
        TextFragment::new("958.00", 500.0, 640.0),
        TextFragment::new("December 26, 2024 through January 24, 2025", 50.0, 720.0),
        TextFragment::new("-42.00", 420.0, 640.0),
        TextFragment::new("Card Purchase Grocery Store", 100.0, 640.2),
        TextFragment::new("12/30", 50.0, 639.8),
    ];
    let text = layout::document_text(&[page]);
    let stmt = parse_statement_text(&text, StatementFormat::ChaseChecking).unwrap();
    assert_eq!(stmt.transactions.len(), 1);
    let t = &stmt.transactions[0];
    assert_eq!(t.description, "Card Purchase Grocery Store");
    assert_eq!(t.amount, -42.00);
    assert_eq!(t.balance, Some(958.00));
    assert_eq!(t.date.to_string(), "2024-12-30");
}
