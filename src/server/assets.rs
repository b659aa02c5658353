use std::path::{Component, Path};

use axum::{extract, response::IntoResponse};
use http::header;
use tracing::debug;

use crate::util::{Error, Result};

#[derive(rust_embed::RustEmbed)]
#[folder = "static/"]
struct StaticAsset;

pub async fn serve(
  extract::Path(path): extract::Path<String>,
) -> Result<impl IntoResponse> {
  let path = path.trim_start_matches('/');
  if !is_confined(path) {
    return Err(Error::InvalidAssetPath(path.to_string()));
  }

  let asset = StaticAsset::get(path)
    .ok_or_else(|| Error::AssetNotFound(path.to_string()))?;
  let mime = mime_guess::from_path(path).first_or_octet_stream();
  debug!("serving asset {} ({})", path, mime);

  Ok(([(header::CONTENT_TYPE, mime.to_string())], asset.data.into_owned()))
}

// only plain relative paths may reach the embedded folder
fn is_confined(path: &str) -> bool {
  !path.is_empty()
    && !path.contains('\\')
    && Path::new(path)
      .components()
      .all(|c| matches!(c, Component::Normal(_)))
}
