//! Trace header
//! 轨迹文件头
//!
//! ```text
//! TP=<page size>
//! NF=<image rows>
//! NC=<image cols>
//! NR=<reference count>
//! NP=<virtual pages>
//! ```

use std::io::{self, BufRead, Write};

use crate::{Error, Result};

/// Header line count 头部行数
pub const HEADER_LINES: usize = 5;

pub const TP: &str = "TP";
pub const NF: &str = "NF";
pub const NC: &str = "NC";
pub const NR: &str = "NR";
pub const NP: &str = "NP";

/// Trace header, `NF`/`NC` are carried but not interpreted
/// 轨迹头，`NF`/`NC` 仅透传不解释
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
  /// Page size in bytes 页大小（字节）
  pub page_size: u64,
  pub rows: u64,
  pub cols: u64,
  /// Declared reference count 声明的引用数
  pub refs: u64,
  /// Virtual page count 虚拟页数
  pub pages: u32,
}

fn num<T: std::str::FromStr>(key: &str, val: &str) -> Result<T> {
  val.parse().map_err(|_| Error::BadHeader {
    key: key.into(),
    val: val.into(),
  })
}

impl Header {
  /// Read the five `KEY=VALUE` header lines, any order, every key required
  /// 读取五行 `KEY=VALUE` 头部，顺序任意，每个键都必须出现
  pub fn read<R: BufRead>(r: &mut R) -> Result<Self> {
    let mut page_size = None;
    let mut rows = None;
    let mut cols = None;
    let mut refs = None;
    let mut pages = None;

    let mut line = String::new();
    for _ in 0..HEADER_LINES {
      line.clear();
      if r.read_line(&mut line)? == 0 {
        break;
      }
      let line = line.trim();
      let Some((key, val)) = line.split_once('=') else {
        return Err(Error::BadHeader {
          key: line.into(),
          val: String::new(),
        });
      };
      let (key, val) = (key.trim(), val.trim());
      match key {
        TP => page_size = Some(num::<u64>(key, val)?),
        NF => rows = Some(num(key, val)?),
        NC => cols = Some(num(key, val)?),
        NR => refs = Some(num(key, val)?),
        NP => pages = Some(num(key, val)?),
        _ => log::warn!("trace header: unknown key {key}"),
      }
    }

    let page_size = page_size.ok_or(Error::MissingHeader(TP))?;
    if page_size == 0 {
      return Err(Error::PageSize(page_size));
    }

    Ok(Self {
      page_size,
      rows: rows.ok_or(Error::MissingHeader(NF))?,
      cols: cols.ok_or(Error::MissingHeader(NC))?,
      refs: refs.ok_or(Error::MissingHeader(NR))?,
      pages: pages.ok_or(Error::MissingHeader(NP))?,
    })
  }

  /// Write header lines 写入头部行
  pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
    writeln!(w, "{TP}={}", self.page_size)?;
    writeln!(w, "{NF}={}", self.rows)?;
    writeln!(w, "{NC}={}", self.cols)?;
    writeln!(w, "{NR}={}", self.refs)?;
    writeln!(w, "{NP}={}", self.pages)
  }
}
