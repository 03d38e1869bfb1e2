//! Interruption token 中断令牌

use std::sync::{
  Arc,
  atomic::{AtomicBool, Ordering},
};

/// Cloneable stop flag, checked between accesses
/// 可克隆的停止标志，在两次访问之间检查
#[derive(Clone, Default, Debug)]
pub struct Stop(Arc<AtomicBool>);

impl Stop {
  #[inline]
  pub fn stop(&self) {
    self.0.store(true, Ordering::Release);
  }

  #[inline]
  pub fn is_stopped(&self) -> bool {
    self.0.load(Ordering::Acquire)
  }
}
