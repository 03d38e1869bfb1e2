use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("missing header {0} / 缺少头字段")]
  MissingHeader(&'static str),

  #[error("bad header {key}={val} / 头字段无效")]
  BadHeader { key: String, val: String },

  #[error("page size must be positive, got {0} / 页大小必须为正")]
  PageSize(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
