//! Keywords command: print the keyword picker.

use anyhow::Result;
use serde::Serialize;

use super::{CliContext, print_location};
use crate::output::print_json;
use crate::views::Region;

#[derive(Serialize)]
struct KeywordEntry {
  keyword: String,
  selected: bool,
}

pub fn cmd_keywords(ctx: &CliContext) -> Result<()> {
  let session = ctx.open_session();

  if ctx.output.is_json() {
    let entries: Vec<_> = session
      .collection()
      .all_keywords()
      .into_iter()
      .map(|keyword| KeywordEntry {
        selected: session.filters().keywords.contains(&keyword),
        keyword,
      })
      .collect();
    return print_json(&serde_json::json!({
      "matchMode": session.filters().match_mode,
      "keywords": entries,
    }));
  }

  print!("{}", session.views().region(Region::Keywords));
  println!();
  print_location(&session);
  Ok(())
}
