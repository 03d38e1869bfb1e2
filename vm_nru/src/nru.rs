//! NRU (Not Recently Used) victim selection
//! NRU（最近未使用）淘汰页选择
//!
//! # Complexity
//! 复杂度
//!
//! - victim: O(n) over resident pages, no allocation
//!
//! Lowest non-empty class wins, ties go to the smallest page id, so a run is
//! reproducible.
//! 取最低的非空类别，同类取最小页号，保证结果可复现。

use vm_page::PageId;

use crate::Class;

/// Snapshot of one resident page
/// 单个驻留页的快照
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resident {
  pub page: PageId,
  /// Bit from the global reference vector 全局引用位向量中的位
  pub referenced: bool,
  pub modified: bool,
}

impl Resident {
  #[inline(always)]
  pub const fn class(&self) -> Class {
    Class::of(self.referenced, self.modified)
  }
}

/// Pick victim, `None` only if nothing is resident
/// 选择淘汰页，仅当无驻留页时返回 `None`
pub fn victim(resident: impl IntoIterator<Item = Resident>) -> Option<PageId> {
  resident
    .into_iter()
    .min_by_key(|r| (r.class(), r.page))
    .map(|r| r.page)
}
