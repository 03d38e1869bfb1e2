//! NRU priority classes
//! NRU 优先级类别
//!
//! | class | referenced | modified |
//! |-------|------------|----------|
//! | 0     | no         | no       |
//! | 1     | no         | yes      |
//! | 2     | yes        | no       |
//! | 3     | yes        | yes      |
//!
//! Lower class is evicted first.
//! 类别越低越先被淘汰。

/// NRU class, ordered by eviction priority
/// NRU 类别，按淘汰优先级排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Class {
  /// Not referenced, clean 未引用，未修改
  Idle = 0,
  /// Not referenced, dirty 未引用，已修改
  IdleDirty = 1,
  /// Referenced, clean 已引用，未修改
  Recent = 2,
  /// Referenced, dirty 已引用，已修改
  RecentDirty = 3,
}

impl Class {
  #[inline(always)]
  pub const fn of(referenced: bool, modified: bool) -> Self {
    match (referenced, modified) {
      (false, false) => Self::Idle,
      (false, true) => Self::IdleDirty,
      (true, false) => Self::Recent,
      (true, true) => Self::RecentDirty,
    }
  }

  /// Class number 0..=3 类别编号
  #[inline(always)]
  pub const fn num(self) -> u8 {
    self as u8
  }
}
