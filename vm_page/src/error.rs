//! 错误定义 Error definitions

use thiserror::Error;

use crate::PageId;

/// 结果类型 Result type
pub type Result<T> = std::result::Result<T, Error>;

/// 错误类型 Error type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  #[error("page {page} out of range, table has {pages} pages / 页号越界")]
  PageOutOfRange { page: PageId, pages: u32 },

  #[error("frame pool full, capacity {0} / 帧池已满")]
  PoolFull(usize),
}
