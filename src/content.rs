use crate::util::Date;

mod mock;

pub use mock::MockContent;

#[derive(Debug, Clone, PartialEq)]
pub struct Position {
  pub x: f32,
  pub y: f32,
  pub z: f32,
}

/// One entry of the portfolio timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
  pub title: String,
  pub period: String,
  pub description: String,
  /// hex accent colour, e.g. `#3b82f6`
  pub color: String,
  pub position: Position,
  pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
  pub id: i64,
  pub title: String,
  pub excerpt: String,
  pub content: String,
  pub date: Date,
  pub tags: Vec<String>,
}

impl Post {
  /// Stand-in rendered for post ids that do not exist.
  pub fn placeholder(id: i64) -> Self {
    Self {
      id,
      title: "Sample Blog Post".into(),
      excerpt: String::new(),
      content: "This is the content of the blog post...".into(),
      date: Date::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
      tags: vec!["Python".into(), "Web Development".into()],
    }
  }
}

/// Read-only source of everything the site renders.
///
/// Lookups return `None` for unknown ids; deciding what to show instead is
/// up to the handlers.
pub trait Content: Send + Sync {
  /// All stages, in timeline order. A stage's id is its index here.
  fn stages(&self) -> Vec<Stage>;

  fn stage(&self, id: i64) -> Option<Stage>;

  /// Posts for the given 1-based page.
  fn posts(&self, page: i64) -> Vec<Post>;

  fn post(&self, id: i64) -> Option<Post>;
}
