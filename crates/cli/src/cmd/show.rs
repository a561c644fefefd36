//! Show command: select one recipe.

use anyhow::Result;

use super::{CliContext, print_frame};

pub fn cmd_show(ctx: &CliContext, slug: &str) -> Result<()> {
  let mut session = ctx.open_session();
  session.select_recipe(slug)?;
  print_frame(&mut session, ctx.output)
}
