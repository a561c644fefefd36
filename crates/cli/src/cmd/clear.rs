//! Clear command: reset every filter.

use anyhow::Result;

use super::{CliContext, print_frame};
use crate::output::print_success;

pub fn cmd_clear(ctx: &CliContext) -> Result<()> {
  let mut session = ctx.open_session();
  session.clear_filters();
  if !ctx.output.is_json() {
    print_success("Cleared all filters");
  }
  print_frame(&mut session, ctx.output)
}
