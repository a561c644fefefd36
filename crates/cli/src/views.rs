//! Terminal rendition of the four engine views.
//!
//! Each view renders into its own buffer, replacing the previous content the
//! way a page region is re-rendered. Buffers refreshed since the last flush
//! are marked dirty so interactive sessions only reprint what changed.

use std::fmt::Write;

use owo_colors::{OwoColorize, Stream};
use pantry_lib::render::{ViewContext, Views};

use crate::output::{format_macros, format_weight, symbols};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
  Keywords,
  List,
  Chips,
  Detail,
}

#[derive(Debug, Default)]
struct Buffer {
  content: String,
  dirty: bool,
}

impl Buffer {
  fn set(&mut self, content: String) {
    self.content = content;
    self.dirty = true;
  }
}

#[derive(Debug, Default)]
pub struct TerminalViews {
  keywords: Buffer,
  list: Buffer,
  chips: Buffer,
  detail: Buffer,
}

impl TerminalViews {
  pub fn region(&self, region: Region) -> &str {
    &self.buffer(region).content
  }

  fn buffer(&self, region: Region) -> &Buffer {
    match region {
      Region::Keywords => &self.keywords,
      Region::List => &self.list,
      Region::Chips => &self.chips,
      Region::Detail => &self.detail,
    }
  }

  fn buffers_mut(&mut self) -> [(Region, &mut Buffer); 4] {
    [
      (Region::Chips, &mut self.chips),
      (Region::List, &mut self.list),
      (Region::Detail, &mut self.detail),
      (Region::Keywords, &mut self.keywords),
    ]
  }

  /// Take the regions refreshed since the last call, in display order.
  pub fn take_dirty(&mut self, include_keywords: bool) -> String {
    let mut out = String::new();
    for (region, buffer) in self.buffers_mut() {
      if !buffer.dirty {
        continue;
      }
      buffer.dirty = false;
      if region == Region::Keywords && !include_keywords {
        continue;
      }
      out.push_str(&buffer.content);
    }
    out
  }

  /// Everything except the keyword picker, in display order.
  pub fn frame(&mut self) -> String {
    self.take_dirty(false);
    [&self.chips, &self.list, &self.detail]
      .iter()
      .map(|b| b.content.as_str())
      .collect()
  }
}

fn heading(title: &str) -> String {
  format!("{}\n", title.if_supports_color(Stream::Stdout, |s| s.bold()))
}

fn muted(text: &str) -> String {
  format!("  {}\n", text.if_supports_color(Stream::Stdout, |s| s.dimmed()))
}

impl Views for TerminalViews {
  fn keywords(&mut self, ctx: &ViewContext<'_>) {
    let mut out = heading("Keywords");
    let keywords = ctx.all_keywords();
    if keywords.is_empty() {
      out.push_str(&muted("No keywords defined yet."));
    }
    for kw in keywords {
      let mark = if ctx.is_keyword_selected(&kw) {
        symbols::CHECKED
      } else {
        symbols::UNCHECKED
      };
      let _ = writeln!(out, "  {} {}", mark, kw);
    }
    let _ = writeln!(out, "  mode: {}", ctx.filters.match_mode);
    self.keywords.set(out);
  }

  fn list(&mut self, ctx: &ViewContext<'_>) {
    let mut out = heading(&format!("Recipes ({} of {})", ctx.visible.len(), ctx.collection.len()));
    if ctx.visible.is_empty() {
      out.push_str(&muted("No recipes match these filters."));
    }
    for recipe in ctx.visible {
      let pointer = if ctx.is_active(&recipe.slug) { symbols::ARROW } else { " " };
      let star = if ctx.is_favorite(&recipe.slug) { symbols::STAR } else { " " };
      let title = if ctx.is_active(&recipe.slug) {
        format!("{}", recipe.title.if_supports_color(Stream::Stdout, |s| s.cyan()))
      } else {
        recipe.title.clone()
      };
      let _ = writeln!(
        out,
        "{} {} {} {}",
        pointer,
        star,
        title,
        format!("({})", recipe.slug).if_supports_color(Stream::Stdout, |s| s.dimmed())
      );

      let mut meta = Vec::new();
      if !recipe.meals.is_empty() {
        meta.push(format!("Meals: {}", recipe.meals.join(", ")));
      }
      if let Some(weight) = recipe.total_weight_grams {
        meta.push(format!("Total: {}", format_weight(weight)));
      }
      if !meta.is_empty() {
        out.push_str(&muted(&format!("    {}", meta.join(" · "))));
      }
    }
    self.list.set(out);
  }

  fn chips(&mut self, ctx: &ViewContext<'_>) {
    let chips = ctx.chips();
    let line = if chips.is_empty() {
      "No active filters.".to_string()
    } else {
      chips
        .iter()
        .map(|c| format!("[{}]", c.label))
        .collect::<Vec<_>>()
        .join(" ")
    };
    self.chips.set(format!("{} {}\n", "Filters:".if_supports_color(Stream::Stdout, |s| s.bold()), line));
  }

  fn detail(&mut self, ctx: &ViewContext<'_>) {
    let Some(recipe) = ctx.active() else {
      let message = if ctx.collection.is_empty() {
        "No recipes to show."
      } else {
        "No recipe selected."
      };
      self.detail.set(muted(message));
      return;
    };

    let mut title = recipe.title.clone();
    if ctx.is_favorite(&recipe.slug) {
      title = format!("{} {}", title, symbols::STAR);
    }
    let mut out = String::from("\n");
    out.push_str(&heading(&title));
    if !recipe.description.is_empty() {
      let _ = writeln!(out, "{}", recipe.description);
    }
    if let Some(macros) = &recipe.macros {
      let summary = format_macros(macros);
      if !summary.is_empty() {
        out.push_str(&muted(&summary));
      }
    }
    if !recipe.ingredients.is_empty() {
      out.push_str(&heading("Ingredients"));
      for line in &recipe.ingredients {
        let _ = writeln!(out, "  - {}", line);
      }
    }
    if !recipe.steps.is_empty() {
      out.push_str(&heading("Steps"));
      for (i, line) in recipe.steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, line);
      }
    }
    self.detail.set(out);
  }
}
