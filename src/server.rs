mod api;
mod assets;
mod front;

use std::{net::SocketAddr, sync::Arc};

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::get,
  Extension, Router,
};
use tracing::{info, warn};

use crate::{
  content::Content,
  util::{Error, Result},
};

#[derive(Clone, derive_more::Deref)]
pub struct ContentRef(Arc<dyn Content>);

pub struct Server {
  bind_addr: SocketAddr,
  content: ContentRef,
}

impl Server {
  pub fn new(bind_addr: SocketAddr, content: impl Content + 'static) -> Self {
    let content = ContentRef(Arc::new(content));

    Self { bind_addr, content }
  }

  pub async fn run(self) -> Result<()> {
    let router = self.router();

    info!("listening on http://{}", self.bind_addr);
    axum::Server::bind(&self.bind_addr)
      .serve(router.into_make_service())
      .with_graceful_shutdown(shutdown_signal())
      .await?;

    info!("server stopped");
    Ok(())
  }

  fn router(&self) -> Router {
    Router::new()
      .merge(front::router())
      .merge(api::router())
      .nest("/blog", front::blog_router())
      .route("/static/*path", get(assets::serve))
      .layer(Extension(self.content.clone()))
  }
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    warn!("failed to listen for shutdown signal: {}", e);
    std::future::pending::<()>().await;
  }
  info!("shutdown signal received");
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    warn!("Error: {:?}", self);
    let status = match self {
      Error::AssetNotFound(_) => StatusCode::NOT_FOUND,
      Error::InvalidAssetPath(_) => StatusCode::BAD_REQUEST,
      Error::Hyper(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    status.into_response()
  }
}
