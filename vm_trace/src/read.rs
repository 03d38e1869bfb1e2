//! Lenient trace reader
//! 宽松的轨迹读取器
//!
//! Malformed lines are skipped with a warning, IO errors end iteration.
//! Lines are decoded lossily, invalid UTF-8 does not end iteration.
//! 格式错误的行记警告后跳过，IO 错误终止迭代。行按有损方式解码，非法 UTF-8 不终止迭代。

use std::{
  fs::File,
  io::{BufRead, BufReader},
  path::Path,
};

use crate::{Access, Header, Result, header::HEADER_LINES};

/// Trace over any buffered reader 基于任意缓冲读取器的轨迹
pub struct Trace<R> {
  header: Header,
  r: R,
  buf: Vec<u8>,
  /// Current line number, 1-based 当前行号，从 1 开始
  line_no: usize,
  parsed: u64,
  skipped: u64,
}

impl Trace<BufReader<File>> {
  /// Open trace file 打开轨迹文件
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    Self::new(BufReader::new(File::open(path)?))
  }
}

impl<R: BufRead> Trace<R> {
  /// Read header, leave reader at the first reference line
  /// 读取头部，读取器停在第一条引用行
  pub fn new(mut r: R) -> Result<Self> {
    let header = Header::read(&mut r)?;
    Ok(Self {
      header,
      r,
      buf: Vec::new(),
      line_no: HEADER_LINES,
      parsed: 0,
      skipped: 0,
    })
  }

  #[inline]
  pub fn header(&self) -> &Header {
    &self.header
  }

  /// Accesses yielded so far 已产出的访问数
  #[inline]
  pub fn parsed(&self) -> u64 {
    self.parsed
  }

  /// Malformed lines skipped so far 已跳过的错误行数
  #[inline]
  pub fn skipped(&self) -> u64 {
    self.skipped
  }
}

impl<R: BufRead> Iterator for Trace<R> {
  type Item = Result<Access>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      self.buf.clear();
      match self.r.read_until(b'\n', &mut self.buf) {
        Ok(0) => return None,
        Ok(_) => {}
        Err(e) => return Some(Err(e.into())),
      }
      self.line_no += 1;
      let line = String::from_utf8_lossy(&self.buf);
      if line.trim().is_empty() {
        continue;
      }
      match Access::parse(line.trim_end()) {
        Some(access) => {
          self.parsed += 1;
          return Some(Ok(access));
        }
        None => {
          self.skipped += 1;
          log::warn!("trace line {}: malformed, skip {:?}", self.line_no, line.trim_end());
        }
      }
    }
  }
}
