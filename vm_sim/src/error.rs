//! Error types for vm_sim
//! vm_sim 错误类型定义

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("IO: {0}")]
  Io(#[from] std::io::Error),

  #[error("Trace: {0}")]
  Trace(#[from] vm_trace::Error),

  #[error("Page: {0}")]
  Page(#[from] vm_page::Error),

  #[error("Frame count must be positive")]
  Frames,

  #[error("Page size {conf} does not match trace page size {trace}")]
  PageSize { conf: u64, trace: u64 },

  #[error("Access worker panicked")]
  WorkerPanic,
}

pub type Result<T> = std::result::Result<T, Error>;
