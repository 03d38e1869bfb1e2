//! Reference clock
//! 引用时钟
//!
//! Background thread clearing the global reference vector once per tick.
//! It goes through [`Mmu::clear_refs`], so a clear never lands inside an access.
//! 后台线程每个周期清零一次全局引用位向量。
//! 经由 [`Mmu::clear_refs`] 执行，清零不会落在一次访问中间。

use std::{
  sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
  },
  thread::{self, JoinHandle},
  time::Duration,
};

use log::{debug, warn};
use parking_lot::{Condvar, Mutex, MutexGuard};

use crate::{Mmu, Result};

/// Stop signal shared with the clock thread
/// 与时钟线程共享的停止信号
#[derive(Default)]
struct Signal {
  stop: Mutex<bool>,
  cv: Condvar,
  ticks: AtomicU64,
}

/// Running reference clock, stopped on drop
/// 运行中的引用时钟，Drop 时停止
pub struct Clock {
  signal: Arc<Signal>,
  handle: Option<JoinHandle<()>>,
}

impl Clock {
  /// Spawn clock thread 启动时钟线程
  pub fn start(mmu: Mmu, tick: Duration) -> Result<Self> {
    let signal = Arc::new(Signal::default());
    let handle = thread::Builder::new().name("vm-clock".into()).spawn({
      let signal = Arc::clone(&signal);
      move || Self::run(&mmu, &signal, tick)
    })?;
    debug!("reference clock started, tick {tick:?}");
    Ok(Self {
      signal,
      handle: Some(handle),
    })
  }

  fn run(mmu: &Mmu, signal: &Signal, tick: Duration) {
    let mut stop = signal.stop.lock();
    while !*stop {
      if signal.cv.wait_for(&mut stop, tick).timed_out() && !*stop {
        // Release the signal lock while waiting on the MMU
        // 等待 MMU 锁期间释放信号锁
        MutexGuard::unlocked(&mut stop, || mmu.clear_refs());
        signal.ticks.fetch_add(1, Ordering::Relaxed);
      }
    }
  }

  /// Clears performed so far 已执行的清零次数
  #[inline]
  pub fn ticks(&self) -> u64 {
    self.signal.ticks.load(Ordering::Relaxed)
  }

  /// Stop and join the clock thread 停止并等待时钟线程
  pub fn stop(&mut self) {
    let Some(handle) = self.handle.take() else {
      return;
    };
    *self.signal.stop.lock() = true;
    self.signal.cv.notify_all();
    if handle.join().is_err() {
      warn!("reference clock thread panicked");
    }
    debug!("reference clock stopped after {} ticks", self.ticks());
  }
}

impl Drop for Clock {
  fn drop(&mut self) {
    self.stop();
  }
}
