//! Replacement policy
//! 置换策略

use vm_page::PageId;

use crate::{Resident, nru};

/// Closed set of replacement policies, dispatched by tag
/// 置换策略的封闭集合，按标签分派
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
  /// Not Recently Used 最近未使用
  #[default]
  Nru,
}

impl Policy {
  /// Choose page to evict from the resident set
  /// 从驻留集合中选择淘汰页
  #[inline]
  pub fn victim(&self, resident: impl IntoIterator<Item = Resident>) -> Option<PageId> {
    match self {
      Self::Nru => nru::victim(resident),
    }
  }

  #[inline]
  pub const fn name(&self) -> &'static str {
    match self {
      Self::Nru => "NRU",
    }
  }
}
