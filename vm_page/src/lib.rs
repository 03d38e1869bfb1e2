#![cfg_attr(docsrs, feature(doc_cfg))]

//! Page table and frame pool 页表与物理帧池

mod consts;
mod entry;
mod error;
mod pool;
mod table;

pub use consts::{FrameId, PageId};
pub use entry::Entry;
pub use error::{Error, Result};
pub use pool::FramePool;
pub use table::PageTable;
