use std::{fmt, str::FromStr};

use axum::{
  extract::{Path, Query},
  Extension,
};
use maud::{html, Markup};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::{
  content::{Post, Stage},
  server::ContentRef,
};

/// A full page shows an "older posts" link.
const POSTS_PER_PAGE: usize = 5;

/// Integer id taken from the path.
///
/// Any integer is accepted, however large. Ids that do not fit an `i64`
/// cannot name anything, so they resolve to no record.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemId {
  // canonical decimal form: no `+`, no leading zeros, no `-0`
  text: String,
  value: Option<i64>,
}

impl ItemId {
  pub fn value(&self) -> Option<i64> {
    self.value
  }
}

impl FromStr for ItemId {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (negative, digits) = match s.as_bytes().first() {
      Some(b'-') => (true, &s[1..]),
      Some(b'+') => (false, &s[1..]),
      _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
      return Err(format!("`{s}` is not an integer"));
    }

    let digits = match digits.trim_start_matches('0') {
      "" => "0",
      digits => digits,
    };
    let text = if negative && digits != "0" {
      format!("-{digits}")
    } else {
      digits.to_string()
    };
    let value = text.parse().ok();

    Ok(Self { text, value })
  }
}

impl<'de> Deserialize<'de> for ItemId {
  fn deserialize<D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
  }
}

impl fmt::Display for ItemId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}

pub async fn stage(
  Path(stage_id): Path<ItemId>,
  Extension(content): Extension<ContentRef>,
) -> Markup {
  match stage_id.value().and_then(|id| content.stage(id)) {
    Some(stage) => render_stage(&stage_id, &stage),
    None => {
      debug!("no stage {}, rendering empty state", stage_id);
      html! {
        div class="stage-detail stage-detail--empty" id="stage-detail" {
          p { "No details available for this stage." }
        }
      }
    }
  }
}

fn render_stage(stage_id: &ItemId, stage: &Stage) -> Markup {
  html! {
    div class="stage-detail" id="stage-detail"
      data-stage-id=(stage_id)
      style={ "--accent: " (stage.color) }
    {
      h3 { (stage.title) }
      span class="period" { (stage.period) }
      p class="description" { (stage.description) }
      ul class="details" {
        @for detail in &stage.details {
          li { (detail) }
        }
      }
    }
  }
}

#[derive(Deserialize)]
pub struct PostsQuery {
  page: Option<i64>,
}

pub async fn posts(
  Query(query): Query<PostsQuery>,
  Extension(content): Extension<ContentRef>,
) -> Markup {
  let page = query.page.unwrap_or(1);
  let posts = content.posts(page);
  debug!("rendering {} posts for page {}", posts.len(), page);

  let newer = page - 1;
  let older = page.saturating_add(1);
  let pagination = html! {
    nav class="pagination" data-page=(page) {
      @if page > 1 {
        a href="#" hx-get={ "/blog/blog/posts?page=" (newer) }
          hx-target="#posts" { "Newer posts" }
      }
      span class="page" { "Page " (page) }
      @if posts.len() >= POSTS_PER_PAGE {
        a href="#" hx-get={ "/blog/blog/posts?page=" (older) }
          hx-target="#posts" { "Older posts" }
      }
    }
  };

  html! {
    @for post in &posts {
      article class="post-summary" data-post-id=(post.id) {
        h2 {
          a href="#" hx-get={ "/blog/blog/" (post.id) } hx-target="#post-view" {
            (post.title)
          }
        }
        time datetime=(post.date) { (post.date) }
        p { (post.excerpt) }
        (tags(&post.tags))
      }
    }
    (pagination)
  }
}

pub async fn post(
  Path(post_id): Path<ItemId>,
  Extension(content): Extension<ContentRef>,
) -> Markup {
  let post = post_id.value().and_then(|id| content.post(id));
  let post = post.unwrap_or_else(|| {
    debug!("no post {}, rendering placeholder", post_id);
    Post::placeholder(post_id.value().unwrap_or_default())
  });

  // the requested id, which also covers ids too large to hold a post
  html! {
    article class="blog-post" data-post-id=(post_id) {
      h2 { (post.title) }
      time datetime=(post.date) { (post.date) }
      div class="content" { p { (post.content) } }
      (tags(&post.tags))
    }
  }
}

fn tags(tags: &[String]) -> Markup {
  html! {
    ul class="tags" {
      @for tag in tags {
        li class="tag" { (tag) }
      }
    }
  }
}
