mod fragment;

use axum::{routing::get, Extension, Router};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use tracing::debug;

use crate::{content::Stage, server::ContentRef};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.10";
const THREE_SRC: &str = "https://unpkg.com/three@0.160.0/build/three.module.js";

pub fn router() -> Router {
  Router::new()
    .route("/", get(home))
    .route("/portfolio-stage/:stage_id", get(fragment::stage))
}

/// Routes mounted under `/blog`.
pub fn blog_router() -> Router {
  Router::new()
    .route("/blog", get(blog_index))
    .route("/blog/posts", get(fragment::posts))
    .route("/blog/:post_id", get(fragment::post))
}

/// Lets `stage-3d.js` import Three.js by its bare module name.
fn three_import_map() -> Markup {
  let map = format!(r#"{{"imports":{{"three":"{THREE_SRC}"}}}}"#);

  html! {
    script type="importmap" { (PreEscaped(map)) }
  }
}

fn layout(title: &str, scripts: Markup, body: Markup) -> Markup {
  html! {
    (DOCTYPE)
    html lang="en" {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { (title) }
        link rel="stylesheet" href="/static/css/style.css";
        script src=(HTMX_SRC) defer {}
        script src="/static/js/mobile-nav.js" defer {}
        (scripts)
      }
      body {
        nav class="nav" {
          a class="nav-brand" href="/" { "Portfolio" }
          button class="hamburger" type="button" aria-label="Toggle menu" {
            span {} span {} span {}
          }
          ul class="nav-links" id="nav-links" {
            li { a href="/#journey" { "Journey" } }
            li { a href="/blog/blog" { "Blog" } }
          }
        }
        main { (body) }
        footer class="footer" {
          p { "Built with Rust, htmx and a little WebGL." }
        }
      }
    }
  }
}

fn timeline_item(id: usize, stage: &Stage) -> Markup {
  let pos = &stage.position;

  html! {
    li class="timeline-item"
      style={ "--accent: " (stage.color) }
      hx-get={ "/portfolio-stage/" (id) }
      hx-target="#stage-detail"
      hx-swap="outerHTML"
    {
      div class="stage-3d" data-x=(pos.x) data-y=(pos.y) data-z=(pos.z) {}
      div class="timeline-content" {
        h3 { (stage.title) }
        span class="period" { (stage.period) }
        p { (stage.description) }
      }
    }
  }
}

async fn home(Extension(content): Extension<ContentRef>) -> Markup {
  let stages = content.stages();
  debug!("rendering home page with {} stages", stages.len());

  let scripts = html! {
    (three_import_map())
    script type="module" src="/static/js/stage-3d.js" {}
    script src="/static/js/scroll-animations.js" defer {}
    script src="/static/js/portfolio.js" defer {}
  };

  layout(
    "Portfolio",
    scripts,
    html! {
      section class="hero" {
        div id="hero-3d" {}
        div class="hero-content" {
          h1 { "Hi, I build things for the web." }
          p { "Scroll through the journey so far, or read the blog." }
        }
      }
      section class="portfolio-timeline" id="journey" {
        h2 { "Journey" }
        ol class="timeline" {
          @for (id, stage) in stages.iter().enumerate() {
            (timeline_item(id, stage))
          }
        }
        div class="stage-detail" id="stage-detail" {
          p { "Select a stage to see the details." }
        }
      }
    },
  )
}

async fn blog_index() -> Markup {
  let scripts = html! {
    script src="/static/js/terminal-typewriter.js" defer {}
  };

  layout(
    "Blog",
    scripts,
    html! {
      section class="terminal" {
        div class="terminal-line" {
          span class="prompt" { "$ " }
          span id="whoami-command" {}
          span class="cursor" id="cursor1" { "_" }
        }
        div class="terminal-output" id="name-output" { "Portfolio Owner" }
        div class="terminal-line" {
          span class="prompt" { "$ " }
          span id="role-command" {}
          span class="cursor" id="cursor2" { "_" }
        }
        div class="terminal-output" id="role-output" {
          "Full Stack Developer. Notes on the web, 3D and htmx."
        }
      }
      section class="blog" {
        h1 { "Blog" }
        div id="posts"
          hx-get="/blog/blog/posts"
          hx-trigger="load"
          hx-swap="innerHTML"
        {
          p class="loading" { "Loading posts..." }
        }
        div id="post-view" {}
      }
    },
  )
}
