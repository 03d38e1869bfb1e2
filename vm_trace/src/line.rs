//! Reference lines `<label>,<page>,<offset>,<R|W>`
//! 引用行 `<标签>,<页号>,<页内偏移>,<R|W>`

use vm_page::PageId;

/// Write flag 写标志
pub const WRITE: &str = "W";
/// Read flag 读标志
pub const READ: &str = "R";

/// Page-level access, label and offset dropped
/// 页级访问，丢弃标签与偏移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
  pub page: PageId,
  pub write: bool,
}

impl Access {
  #[inline]
  pub const fn read(page: PageId) -> Self {
    Self { page, write: false }
  }

  #[inline]
  pub const fn write(page: PageId) -> Self {
    Self { page, write: true }
  }

  /// Parse line, `None` if malformed 解析行，格式错误返回 `None`
  pub fn parse(line: &str) -> Option<Self> {
    let mut it = line.split(',');
    let _label = it.next()?;
    let page = it.next()?.trim().parse().ok()?;
    let _offset = it.next()?;
    let write = it.next()?.trim() == WRITE;
    Some(Self { page, write })
  }
}

/// Full reference line, as emitted by a trace generator
/// 完整引用行，由轨迹生成器输出
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ref<'a> {
  pub label: &'a str,
  pub page: PageId,
  pub offset: u64,
  pub write: bool,
}

impl Ref<'_> {
  #[inline]
  pub fn access(&self) -> Access {
    Access {
      page: self.page,
      write: self.write,
    }
  }

  #[inline]
  pub fn flag(&self) -> &'static str {
    if self.write { WRITE } else { READ }
  }
}
