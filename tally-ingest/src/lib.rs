//! tally-ingest: bank-statement PDF text reconstruction and per-format
//! parsers.
//!
//! Pipeline: PDF buffer -> [`pdf::PdfTextSource`] fragments ->
//! [`layout`] line reconstruction -> format parser (with [`period`]
//! year resolution and [`trailing`] column matching) -> transactions plus
//! [`balance`] ending-balance detection, dispatched by [`router`].

pub mod balance;
pub mod layout;
pub mod parsers;
pub mod pdf;
pub mod period;
pub mod router;
pub mod trailing;

pub use layout::TextFragment;
pub use pdf::{LopdfTextSource, PdfTextSource};
pub use router::{StatementFormat, parse_statement, parse_statement_text};
