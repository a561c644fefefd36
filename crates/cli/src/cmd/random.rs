//! Random command: select a random visible recipe.

use anyhow::Result;

use super::{CliContext, print_frame};
use crate::output::{print_info, print_success};

pub fn cmd_random(ctx: &CliContext) -> Result<()> {
  let mut session = ctx.open_session();
  let picked = session.pick_random();

  if !ctx.output.is_json() {
    match picked.and(session.active_recipe()) {
      Some(recipe) => print_success(&format!("Picked '{}'", recipe.title)),
      None => print_info("No recipes match the current filters."),
    }
  }
  print_frame(&mut session, ctx.output)
}
