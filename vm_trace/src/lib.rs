#![cfg_attr(docsrs, feature(doc_cfg))]

//! # vm_trace - Page reference traces / 页面引用轨迹
//!
//! Reads and writes the text trace format that drives the simulator.
//! 读写驱动模拟器的文本轨迹格式。

pub mod error;
pub mod header;
pub mod line;
mod read;
mod write;

pub use error::{Error, Result};
pub use header::Header;
pub use line::{Access, Ref};
pub use read::Trace;
pub use write::Writer;
