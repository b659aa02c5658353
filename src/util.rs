use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("hyper error: {0}")]
  Hyper(#[from] hyper::Error),

  #[error("asset not found: `{0}`")]
  AssetNotFound(String),

  #[error("invalid asset path: `{0}`")]
  InvalidAssetPath(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type Date = chrono::NaiveDate;
