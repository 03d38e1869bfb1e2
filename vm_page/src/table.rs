//! Page table with global reference vector
//! 页表与全局引用位向量
//!
//! The entry `referenced` flag is a sticky marker; only the vector is cleared by
//! the reference clock and fed to replacement.
//! 页表项的 `referenced` 为粘性标记；只有位向量会被时钟清零并用于置换。

use roaring::RoaringBitmap;

use crate::{Entry, Error, FrameId, PageId, Result};

/// Fixed-size page table 定长页表
pub struct PageTable {
  entries: Box<[Entry]>,
  refs: RoaringBitmap,
}

impl PageTable {
  /// Create table, every page non-resident
  /// 创建页表，所有页均未驻留
  pub fn new(pages: u32) -> Self {
    Self {
      entries: vec![Entry::default(); pages as usize].into_boxed_slice(),
      refs: RoaringBitmap::new(),
    }
  }

  /// Number of virtual pages 虚拟页数
  #[inline]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Validate page number 校验页号
  #[inline]
  pub fn check(&self, page: PageId) -> Result<()> {
    if (page as usize) < self.entries.len() {
      Ok(())
    } else {
      Err(Error::PageOutOfRange {
        page,
        pages: self.entries.len() as u32,
      })
    }
  }

  /// Get entry 获取页表项
  #[inline]
  pub fn get(&self, page: PageId) -> Option<&Entry> {
    self.entries.get(page as usize)
  }

  /// Get entry of a validated page 获取已校验页的页表项
  ///
  /// # Panics
  /// If `page` is out of range, see [`PageTable::check`].
  #[inline]
  pub fn lookup(&self, page: PageId) -> &Entry {
    &self.entries[page as usize]
  }

  #[inline]
  pub fn is_resident(&self, page: PageId) -> bool {
    self.lookup(page).is_resident()
  }

  /// Set reference bit in entry and vector, dirty bit on write
  /// 设置页表项与位向量的引用位，写访问另设脏位
  #[inline]
  pub fn mark_accessed(&mut self, page: PageId, write: bool) {
    self.entries[page as usize].touch(write);
    self.refs.insert(page);
  }

  /// Reference bit from the global vector 全局位向量中的引用位
  #[inline]
  pub fn is_recent(&self, page: PageId) -> bool {
    self.refs.contains(page)
  }

  /// Pages referenced since the last clear 上次清零后被引用的页数
  #[inline]
  pub fn recent_len(&self) -> u64 {
    self.refs.len()
  }

  /// Clear the global reference vector 清零全局引用位向量
  #[inline]
  pub fn clear_refs(&mut self) {
    self.refs.clear();
  }

  /// Mark page resident in frame 标记页驻留于帧
  #[inline]
  pub fn load(&mut self, page: PageId, frame: FrameId) {
    self.entries[page as usize].load(frame);
  }

  /// Mark page non-resident, return its former frame
  /// 标记页未驻留，返回原帧号
  #[inline]
  pub fn unload(&mut self, page: PageId) -> Option<FrameId> {
    self.entries[page as usize].unload()
  }
}
