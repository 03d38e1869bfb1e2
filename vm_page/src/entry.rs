//! Page table entry 页表项

use crate::FrameId;

/// Per-page state 每页状态
///
/// Resident iff `frame` is set.
/// 当且仅当 `frame` 有值时驻留内存。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Entry {
  /// Frame holding the page 所在物理帧
  pub frame: Option<FrameId>,
  /// Sticky reference marker, not read by NRU 粘性引用标记，NRU 不读取
  pub referenced: bool,
  /// Dirty bit, never cleared 脏位，永不清除
  pub modified: bool,
}

impl Entry {
  /// Is resident 是否驻留
  #[inline]
  pub fn is_resident(&self) -> bool {
    self.frame.is_some()
  }

  /// Record an access 记录一次访问
  #[inline]
  pub fn touch(&mut self, write: bool) {
    self.referenced = true;
    if write {
      self.modified = true;
    }
  }

  /// Bind to frame 绑定物理帧
  #[inline]
  pub fn load(&mut self, frame: FrameId) {
    self.frame = Some(frame);
    self.referenced = true;
  }

  /// Drop residency, return the frame it held
  /// 解除驻留，返回原物理帧
  #[inline]
  pub fn unload(&mut self) -> Option<FrameId> {
    self.referenced = false;
    self.frame.take()
  }
}
