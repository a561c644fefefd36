//! Browse command: an interactive session driven by lines on stdin.
//!
//! Each line is one user action. After every action only the regions the
//! engine refreshed are printed, followed by the current location.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use pantry_lib::Action;
use pantry_lib::filter::{FilterPatch, KeywordMatchMode, active_chips};
use tracing::debug;

use super::{CliContext, CliSession, print_location};
use crate::output::{print_error, print_info, print_json, print_warning};
use crate::views::Region;

const HELP: &str = "\
Commands:
  meal <name|all>        filter by meal
  kw <keyword>           toggle a keyword
  mode <all|any>         keyword match mode
  search [text]          set or clear the search text
  favs <on|off>          favourites only
  unchip <n>             remove the n-th active filter
  show <slug>            select a recipe
  fav <slug>             toggle a favourite
  random                 select a random visible recipe
  clear                  clear all filters
  back / forward         move through history
  keywords               print the keyword picker
  help                   this text
  quit                   leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Act(Action),
  ToggleKeyword(String),
  RemoveChip(usize),
  Back,
  Forward,
  Keywords,
  Help,
  Quit,
}

fn parse_switch(value: &str) -> Option<bool> {
  match value {
    "on" | "yes" | "true" | "1" => Some(true),
    "off" | "no" | "false" | "0" => Some(false),
    _ => None,
  }
}

/// Parse one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
  let line = line.trim();
  if line.is_empty() {
    return Ok(None);
  }
  let (verb, rest) = match line.split_once(char::is_whitespace) {
    Some((verb, rest)) => (verb, rest.trim()),
    None => (line, ""),
  };

  let require = |what: &str| {
    if rest.is_empty() {
      Err(format!("'{}' needs {}", verb, what))
    } else {
      Ok(rest.to_string())
    }
  };

  let command = match verb {
    "meal" => {
      let meal = require("a meal name")?;
      Command::Act(Action::Patch(FilterPatch::new().meal(meal)))
    }
    "kw" | "keyword" => Command::ToggleKeyword(require("a keyword")?),
    "mode" => {
      let mode: KeywordMatchMode = require("all or any")?.parse()?;
      Command::Act(Action::Patch(FilterPatch::new().match_mode(mode)))
    }
    "search" => Command::Act(Action::Patch(FilterPatch::new().search(rest))),
    "favs" => {
      let value = require("on or off")?;
      let on = parse_switch(&value).ok_or_else(|| format!("expected on or off, got '{}'", value))?;
      Command::Act(Action::Patch(FilterPatch::new().favorites_only(on)))
    }
    "unchip" => {
      let n = require("a chip number")?;
      let n: usize = n.parse().map_err(|_| format!("not a chip number: {}", n))?;
      if n == 0 {
        return Err("chips are numbered from 1".to_string());
      }
      Command::RemoveChip(n)
    }
    "show" => Command::Act(Action::Select(require("a recipe slug")?)),
    "fav" => Command::Act(Action::ToggleFavorite(require("a recipe slug")?)),
    "random" => Command::Act(Action::Random),
    "clear" => Command::Act(Action::ClearFilters),
    "back" => Command::Back,
    "forward" => Command::Forward,
    "keywords" => Command::Keywords,
    "help" | "?" => Command::Help,
    "quit" | "exit" | "q" => Command::Quit,
    other => return Err(format!("unknown command: {}", other)),
  };
  Ok(Some(command))
}

/// Resolve commands that depend on the current state into an action.
fn resolve(session: &CliSession, command: Command) -> Result<Option<Action>, String> {
  match command {
    Command::Act(action) => Ok(Some(action)),
    Command::ToggleKeyword(keyword) => {
      let mut keywords = session.filters().keywords.clone();
      if !keywords.remove(&keyword) {
        keywords.insert(keyword);
      }
      Ok(Some(Action::Patch(FilterPatch::new().keywords(keywords))))
    }
    Command::RemoveChip(n) => {
      active_chips(session.filters())
        .into_iter()
        .nth(n - 1)
        .map(|chip| Some(Action::Patch(chip.remove)))
        .ok_or_else(|| format!("no active filter number {}", n))
    }
    _ => Ok(None),
  }
}

pub fn cmd_browse(ctx: &CliContext) -> Result<()> {
  let mut session = ctx.open_session();
  let json = ctx.output.is_json();

  if json {
    print_json(&session.snapshot())?;
  } else {
    print!("{}", session.views_mut().frame());
    println!();
    print_location(&session);
    print_info("Type 'help' for commands.");
  }

  let stdin = io::stdin();
  for line in stdin.lock().lines() {
    let line = line.context("Failed to read from stdin")?;
    let command = match parse_line(&line) {
      Ok(Some(command)) => command,
      Ok(None) => continue,
      Err(e) => {
        print_error(&e);
        continue;
      }
    };
    debug!(?command, "browse command");

    let mut show_keywords = false;
    match command {
      Command::Quit => break,
      Command::Help => {
        println!("{}", HELP);
        continue;
      }
      Command::Back => {
        if !session.back() {
          print_warning("Already at the oldest entry.");
          continue;
        }
      }
      Command::Forward => {
        if !session.forward() {
          print_warning("Already at the newest entry.");
          continue;
        }
      }
      Command::Keywords => show_keywords = true,
      command => match resolve(&session, command) {
        Ok(Some(action)) => {
          let random = matches!(action, Action::Random);
          if let Err(e) = session.dispatch(action) {
            print_error(&e.to_string());
            continue;
          }
          if random && session.filtered_recipes().is_empty() {
            print_info("No recipes match the current filters.");
          }
        }
        Ok(None) => {}
        Err(e) => {
          print_error(&e);
          continue;
        }
      },
    }

    if json {
      print_json(&session.snapshot())?;
      continue;
    }
    let mut out = session.views_mut().take_dirty(false);
    if show_keywords {
      out.push_str(session.views().region(Region::Keywords));
    }
    print!("{}", out);
    println!();
    print_location(&session);
    io::stdout().flush().context("Failed to flush stdout")?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use pantry_lib::consts::MEAL_ALL;

  #[test]
  fn parses_filter_commands() {
    assert_eq!(
      parse_line("meal dinner").unwrap(),
      Some(Command::Act(Action::Patch(FilterPatch::new().meal("dinner"))))
    );
    assert_eq!(
      parse_line("meal all").unwrap(),
      Some(Command::Act(Action::Patch(FilterPatch::new().meal(MEAL_ALL))))
    );
    assert_eq!(
      parse_line("  mode ANY ").unwrap(),
      Some(Command::Act(Action::Patch(FilterPatch::new().match_mode(KeywordMatchMode::Any))))
    );
    assert_eq!(
      parse_line("search green beans").unwrap(),
      Some(Command::Act(Action::Patch(FilterPatch::new().search("green beans"))))
    );
    assert_eq!(
      parse_line("search").unwrap(),
      Some(Command::Act(Action::Patch(FilterPatch::new().search(""))))
    );
    assert_eq!(
      parse_line("favs on").unwrap(),
      Some(Command::Act(Action::Patch(FilterPatch::new().favorites_only(true))))
    );
    assert_eq!(parse_line("kw spicy").unwrap(), Some(Command::ToggleKeyword("spicy".into())));
  }

  #[test]
  fn parses_session_commands() {
    assert_eq!(
      parse_line("show bean-chili").unwrap(),
      Some(Command::Act(Action::Select("bean-chili".into())))
    );
    assert_eq!(parse_line("unchip 2").unwrap(), Some(Command::RemoveChip(2)));
    assert_eq!(parse_line("back").unwrap(), Some(Command::Back));
    assert_eq!(parse_line("q").unwrap(), Some(Command::Quit));
    assert_eq!(parse_line("   ").unwrap(), None);
  }

  #[test]
  fn rejects_bad_input() {
    assert!(parse_line("show").is_err());
    assert!(parse_line("mode sometimes").is_err());
    assert!(parse_line("favs maybe").is_err());
    assert!(parse_line("unchip 0").is_err());
    assert!(parse_line("unchip x").is_err());
    assert!(parse_line("bake cake").is_err());
  }
}
