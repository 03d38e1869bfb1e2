//! Trace writer 轨迹写入器

use std::io::{BufWriter, Write};

use crate::{Header, Ref, Result};

/// Writes header then reference lines
/// 先写头部再写引用行
pub struct Writer<W: Write> {
  w: BufWriter<W>,
  n: u64,
}

impl<W: Write> Writer<W> {
  pub fn new(w: W, header: &Header) -> Result<Self> {
    let mut w = BufWriter::new(w);
    header.write(&mut w)?;
    Ok(Self { w, n: 0 })
  }

  /// Append one reference line 追加一条引用行
  pub fn push(&mut self, r: &Ref<'_>) -> Result<()> {
    writeln!(self.w, "{},{},{},{}", r.label, r.page, r.offset, r.flag())?;
    self.n += 1;
    Ok(())
  }

  /// Lines written 已写入行数
  #[inline]
  pub fn len(&self) -> u64 {
    self.n
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.n == 0
  }

  /// Flush and return inner writer 刷新并返回内部写入器
  pub fn finish(self) -> Result<W> {
    self.w.into_inner().map_err(|e| e.into_error().into())
  }
}
