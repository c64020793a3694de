use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tally_ingest::{LopdfTextSource, StatementFormat, parse_statement};

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Bank statement PDF parser")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a statement PDF and print its transactions
    Parse {
        /// Path to the statement PDF
        pdf: PathBuf,

        /// Statement format selector (see `tally formats`)
        #[arg(long)]
        format: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List supported statement format selectors
    Formats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { pdf, format, json } => {
            let format: StatementFormat = format.parse()?;
            if !pdf.exists() {
                bail!("statement not found: {}", pdf.display());
            }

            let buffer = std::fs::read(&pdf)
                .with_context(|| format!("reading {}", pdf.display()))?;
            let statement = parse_statement(&buffer, format, &LopdfTextSource)
                .with_context(|| format!("parsing {}", pdf.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&statement)?);
                return Ok(());
            }

            println!(
                "Parsed {} transactions from {} ({format})\n",
                statement.transactions.len(),
                pdf.display()
            );
            for t in &statement.transactions {
                let balance = t
                    .balance
                    .map(|b| format!("{b:>12.2}"))
                    .unwrap_or_else(|| format!("{:>12}", "-"));
                println!(
                    "{}  {:>10.2}  {}  {:?}  {}",
                    t.date, t.amount, balance, t.kind, t.description
                );
            }
            match statement.ending_balance {
                Some(b) => println!("\nEnding balance: {b:.2}"),
                None => println!("\nEnding balance: not found"),
            }
        }

        Command::Formats => {
            for format in StatementFormat::ALL {
                println!("{format}");
            }
        }
    }

    Ok(())
}
