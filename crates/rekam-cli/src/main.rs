//! `skor` — offline scorer for the 10-item screening instrument.
//!
//! # Usage
//!
//! ```
//! skor 0 1 2 3 0 1 2 3 0 1
//! skor --json 0 0 0 0 3 0 0 0 3 0
//! ```
//!
//! Input failures (wrong response count, value outside 0-3) exit non-zero
//! with the specific scorer error on stderr. A valid input always classifies
//! and prints, even when the category is the `Error` sentinel.

use anyhow::Result;
use clap::Parser;
use rekam_core::classify::{INSTRUMENT_MAX_SCORE, classify, score_responses};

#[derive(Parser, Debug)]
#[command(name = "skor", about = "Score and classify a 10-item screening")]
struct Args {
  /// The 10 item responses, each 0-3. Items 5 and 9 are reverse-scored.
  #[arg(required = true)]
  responses: Vec<i64>,

  /// Emit the result as a JSON object instead of plain text.
  #[arg(long)]
  json: bool,
}

fn main() -> Result<()> {
  let args = Args::parse();

  let total = score_responses(&args.responses)?;
  let category = classify(total, INSTRUMENT_MAX_SCORE);

  if args.json {
    println!(
      "{}",
      serde_json::json!({ "total": total, "category": category })
    );
  } else {
    println!("Total: {total}/{INSTRUMENT_MAX_SCORE}");
    println!("Kategori: {category}");
  }

  Ok(())
}
