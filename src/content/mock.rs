use once_cell::sync::Lazy;

use super::{Content, Position, Post, Stage};
use crate::util::Date;

static STAGES: Lazy<Vec<Stage>> = Lazy::new(|| {
  vec![
    stage(
      "Education",
      "2018-2022",
      "Computer Science Degree",
      "#3b82f6",
      (-2.0, 0.0, 0.0),
      &[
        "Bachelor's in Computer Science",
        "Focus on Web Development and AI",
        "Graduated Magna Cum Laude",
        "Relevant coursework: Data Structures, Algorithms, Web Development",
      ],
    ),
    stage(
      "First Job",
      "2022-2023",
      "Junior Developer",
      "#10b981",
      (0.0, 0.0, 0.0),
      &[
        "Developed responsive web applications",
        "Worked with React and Node.js",
        "Collaborated in Agile development teams",
        "Contributed to open source projects",
      ],
    ),
    stage(
      "Current Role",
      "2023-Present",
      "Full Stack Developer",
      "#f59e0b",
      (2.0, 0.0, 0.0),
      &[
        "Lead development of multiple projects",
        "Expertise in Python, FastAPI, and React",
        "Mentoring junior developers",
        "Implementing CI/CD pipelines",
      ],
    ),
  ]
});

static POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
  vec![
    post(
      1,
      "Building a Lightweight Portfolio",
      "How I created this portfolio using FastAPI and Three.js",
      "A portfolio does not need a heavy frontend framework. Server-rendered \
       pages, a sprinkle of htmx for partial updates and a single Three.js \
       scene are enough to make it feel alive.",
      (2024, 1, 15),
      &["Python", "FastAPI", "Three.js"],
    ),
    post(
      2,
      "3D Web Experiences",
      "Creating interactive 3D elements for the web",
      "WebGL is available in every modern browser. Keeping scenes small and \
       loading models lazily keeps 3D elements from hurting page load.",
      (2024, 1, 10),
      &["Three.js", "WebGL", "JavaScript"],
    ),
    post(
      3,
      "HTMX and Modern Web Development",
      "Why HTMX is perfect for lightweight interactive websites",
      "HTMX lets the server stay the source of truth: endpoints return HTML \
       fragments and the browser swaps them into place.",
      (2024, 1, 5),
      &["HTMX", "Web Development", "Performance"],
    ),
  ]
});

fn stage(
  title: &str,
  period: &str,
  description: &str,
  color: &str,
  (x, y, z): (f32, f32, f32),
  details: &[&str],
) -> Stage {
  Stage {
    title: title.into(),
    period: period.into(),
    description: description.into(),
    color: color.into(),
    position: Position { x, y, z },
    details: details.iter().map(|s| s.to_string()).collect(),
  }
}

fn post(
  id: i64,
  title: &str,
  excerpt: &str,
  content: &str,
  (year, month, day): (i32, u32, u32),
  tags: &[&str],
) -> Post {
  Post {
    id,
    title: title.into(),
    excerpt: excerpt.into(),
    content: content.into(),
    date: Date::from_ymd_opt(year, month, day).unwrap_or_default(),
    tags: tags.iter().map(|s| s.to_string()).collect(),
  }
}

/// Hard-coded stages and posts.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockContent;

impl Content for MockContent {
  fn stages(&self) -> Vec<Stage> {
    STAGES.clone()
  }

  fn stage(&self, id: i64) -> Option<Stage> {
    let index = usize::try_from(id).ok()?;
    STAGES.get(index).cloned()
  }

  // there are only a handful of posts, every page gets all of them
  fn posts(&self, _page: i64) -> Vec<Post> {
    POSTS.clone()
  }

  fn post(&self, id: i64) -> Option<Post> {
    POSTS.iter().find(|post| post.id == id).cloned()
  }
}
