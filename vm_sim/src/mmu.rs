//! Access processor
//! 访问处理器
//!
//! Page table, frame pool, reference vector and statistics sit behind one
//! mutex. Each access runs start to finish under it, so the reference clock
//! only ever sees state between two accesses.
//! 页表、帧池、引用位向量与统计共用一把互斥锁。每次访问在锁内完整执行，
//! 引用时钟只会看到两次访问之间的状态。

use std::sync::Arc;

use log::trace;
use parking_lot::Mutex;
use vm_nru::{Policy, Resident};
use vm_page::{Entry, FramePool, PageId, PageTable};

use crate::{Cfg, Cost, Result, Stat};

/// Result of one access 单次访问结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Hit,
  /// Fault, with the page evicted to make room 缺页，附带为腾出空间淘汰的页
  Fault { evicted: Option<PageId> },
}

/// Shared state 共享状态
struct State {
  table: PageTable,
  pool: FramePool,
  stat: Stat,
  cost: Cost,
  policy: Policy,
}

impl State {
  fn resident(&self) -> impl Iterator<Item = Resident> + '_ {
    self.pool.iter().map(|(_, page)| Resident {
      page,
      referenced: self.table.is_recent(page),
      modified: self.table.lookup(page).modified,
    })
  }

  fn access(&mut self, page: PageId, write: bool) -> Result<Outcome> {
    // Reject before touching anything 任何修改前先校验
    self.table.check(page)?;
    self.table.mark_accessed(page, write);

    if self.table.is_resident(page) {
      self.stat.hit(self.cost.ram_ns);
      return Ok(Outcome::Hit);
    }

    let evicted = if self.pool.is_full() {
      let victim = self
        .policy
        .victim(self.resident())
        .expect("full frame pool has resident pages");
      self.evict(victim);
      Some(victim)
    } else {
      None
    };

    let frame = self.pool.assign(page)?;
    self.table.load(page, frame);
    self.stat.fault(self.cost.fault_ns);
    Ok(Outcome::Fault { evicted })
  }

  fn evict(&mut self, page: PageId) {
    // Frame id is taken out of the entry before it is cleared
    // 清除页表项时先取出帧号
    if let Some(frame) = self.table.unload(page) {
      self.pool.release(frame);
      trace!("evict page {page} from frame {frame}");
    }
  }
}

/// Memory management unit, cheap to clone, all clones share state
/// 内存管理单元，克隆开销低，所有克隆共享状态
#[derive(Clone)]
pub struct Mmu(Arc<Mutex<State>>);

impl Mmu {
  /// Create with `pages` virtual pages, none resident
  /// 创建含 `pages` 个虚拟页的 MMU，初始均未驻留
  pub fn new(pages: u32, cfg: &Cfg) -> Self {
    Self(Arc::new(Mutex::new(State {
      table: PageTable::new(pages),
      pool: FramePool::new(cfg.frames),
      stat: Stat::default(),
      cost: cfg.cost,
      policy: cfg.policy,
    })))
  }

  /// Process one access atomically 原子地处理一次访问
  ///
  /// 1. Mark referenced (and modified on write)
  /// 2. Hit if resident
  /// 3. Otherwise fault: evict when full, then load into a frame
  #[inline]
  pub fn access(&self, page: PageId, write: bool) -> Result<Outcome> {
    self.0.lock().access(page, write)
  }

  /// Clear the global reference vector 清零全局引用位向量
  #[inline]
  pub fn clear_refs(&self) {
    self.0.lock().table.clear_refs();
  }

  /// Statistics snapshot 统计快照
  #[inline]
  pub fn stat(&self) -> Stat {
    self.0.lock().stat
  }

  #[inline]
  pub fn pages(&self) -> usize {
    self.0.lock().table.len()
  }

  #[inline]
  pub fn frames(&self) -> usize {
    self.0.lock().pool.cap()
  }

  /// Occupied frames 已占用帧数
  #[inline]
  pub fn frames_used(&self) -> usize {
    self.0.lock().pool.len()
  }

  /// Resident pages in frame order 按帧号顺序的驻留页
  pub fn resident(&self) -> Vec<PageId> {
    self.0.lock().pool.iter().map(|(_, page)| page).collect()
  }

  #[inline]
  pub fn entry(&self, page: PageId) -> Option<Entry> {
    self.0.lock().table.get(page).copied()
  }

  #[inline]
  pub fn is_resident(&self, page: PageId) -> bool {
    self.entry(page).is_some_and(|e| e.is_resident())
  }

  /// Bit in the global reference vector 全局引用位向量中的位
  #[inline]
  pub fn is_referenced(&self, page: PageId) -> bool {
    self.0.lock().table.is_recent(page)
  }

  /// Run `f` on a consistent view of table and pool
  /// 在页表与帧池的一致视图上执行 `f`
  pub fn inspect<T>(&self, f: impl FnOnce(&PageTable, &FramePool) -> T) -> T {
    let state = self.0.lock();
    f(&state.table, &state.pool)
  }
}
