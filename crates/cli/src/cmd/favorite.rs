//! Favorite command: toggle a recipe's favourite flag.

use anyhow::Result;

use super::{CliContext, print_frame};
use crate::output::print_success;

pub fn cmd_favorite(ctx: &CliContext, slug: &str) -> Result<()> {
  let mut session = ctx.open_session();
  let now_favorite = session.toggle_favorite(slug)?;

  if !ctx.output.is_json() {
    if now_favorite {
      print_success(&format!("Added '{}' to favourites", slug));
    } else {
      print_success(&format!("Removed '{}' from favourites", slug));
    }
  }
  print_frame(&mut session, ctx.output)
}
