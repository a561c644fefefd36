use serde::Serialize;

/// Destination for the non-reloading URL updates.
///
/// Queries are passed without the leading `?`.
pub trait UrlSink {
  /// Current query string.
  fn location(&self) -> String;
  /// Add a new history entry.
  fn push(&mut self, query: &str);
  /// Overwrite the current history entry.
  fn replace(&mut self, query: &str);
}

/// In-memory browser-style history with back/forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
  entries: Vec<String>,
  index: usize,
}

impl Default for History {
  fn default() -> Self {
    Self::new("")
  }
}

impl History {
  /// Start with a single entry.
  pub fn new(initial: &str) -> Self {
    Self {
      entries: vec![initial.trim_start_matches('?').to_string()],
      index: 0,
    }
  }

  pub fn entries(&self) -> &[String] {
    &self.entries
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn can_go_back(&self) -> bool {
    self.index > 0
  }

  pub fn can_go_forward(&self) -> bool {
    self.index + 1 < self.entries.len()
  }

  /// Step back one entry. Returns `false` at the start of history.
  pub fn back(&mut self) -> bool {
    if !self.can_go_back() {
      return false;
    }
    self.index -= 1;
    true
  }

  /// Step forward one entry. Returns `false` at the end of history.
  pub fn forward(&mut self) -> bool {
    if !self.can_go_forward() {
      return false;
    }
    self.index += 1;
    true
  }
}

impl UrlSink for History {
  fn location(&self) -> String {
    self.entries[self.index].clone()
  }

  /// Pushing the current entry again is a no-op.
  fn push(&mut self, query: &str) {
    if self.entries[self.index] == query {
      return;
    }
    self.entries.truncate(self.index + 1);
    self.entries.push(query.to_string());
    self.index += 1;
  }

  fn replace(&mut self, query: &str) {
    self.entries[self.index] = query.to_string();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn push_drops_forward_entries() {
    let mut history = History::new("?a=1");
    history.push("a=2");
    history.push("a=3");
    assert!(history.back());
    history.push("a=4");
    assert_eq!(history.entries(), ["a=1", "a=2", "a=4"]);
    assert!(!history.can_go_forward());
  }

  #[test]
  fn duplicate_push_is_ignored() {
    let mut history = History::new("");
    history.push("meal=dinner");
    history.push("meal=dinner");
    assert_eq!(history.entries().len(), 2);
  }

  #[test]
  fn back_and_forward_stop_at_the_ends() {
    let mut history = History::new("");
    assert!(!history.back());
    history.push("q=x");
    assert!(history.back());
    assert_eq!(history.location(), "");
    assert!(history.forward());
    assert!(!history.forward());
    assert_eq!(history.location(), "q=x");
  }

  #[test]
  fn replace_keeps_length() {
    let mut history = History::new("slug=a");
    history.replace("slug=b");
    assert_eq!(history.entries(), ["slug=b"]);
  }
}
