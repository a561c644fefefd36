//! Subcommand implementations.
//!
//! Every command opens a session the same way a page load does: recipes
//! from the data file, filters and favourites from storage, and the
//! current location from `--url`.

mod browse;
mod clear;
mod favorite;
mod keywords;
mod list;
mod random;
mod show;

pub use browse::cmd_browse;
pub use clear::cmd_clear;
pub use favorite::cmd_favorite;
pub use keywords::cmd_keywords;
pub use list::{ListArgs, cmd_list};
pub use random::cmd_random;
pub use show::cmd_show;

use anyhow::Result;
use pantry_lib::Session;
use pantry_lib::config::PantryConfig;
use pantry_lib::persist::{FileStore, History};
use pantry_lib::recipe::JsonFileSource;
use tracing::debug;

use crate::output::{OutputFormat, print_json, print_stat};
use crate::views::TerminalViews;

pub type CliSession = Session<FileStore, History, TerminalViews>;

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct CliContext {
  pub config: PantryConfig,
  /// Query string of the location being opened.
  pub url: String,
  pub output: OutputFormat,
}

impl CliContext {
  pub fn open_session(&self) -> CliSession {
    let source = JsonFileSource::new(&self.config.recipes_path);
    let store = FileStore::new(self.config.storage_dir());
    debug!(
      recipes = %source.path().display(),
      storage = %store.base_path().display(),
      url = %self.url,
      "opening session"
    );
    Session::load(&source, store, History::new(&self.url), TerminalViews::default())
  }
}

/// Print the settled state of a one-shot command.
pub fn print_frame(session: &mut CliSession, output: OutputFormat) -> Result<()> {
  if output.is_json() {
    return print_json(&session.snapshot());
  }
  print!("{}", session.views_mut().frame());
  println!();
  print_location(session);
  Ok(())
}

pub fn print_location(session: &CliSession) {
  print_stat("URL", &format!("?{}", session.query()));
}
