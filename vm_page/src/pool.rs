//! Physical frame pool 物理帧池

use roaring::RoaringBitmap;

use crate::{Error, FrameId, PageId, Result};

/// Bounded set of frame slots, each holding at most one page
/// 有界帧槽集合，每槽至多容纳一页
pub struct FramePool {
  /// frame -> page 帧到页的映射
  slots: Box<[Option<PageId>]>,
  /// Released ids, reused lowest first 已释放帧号，优先复用最小者
  free: RoaringBitmap,
  /// Next never-used id 下一个从未使用的帧号
  next: FrameId,
  len: usize,
}

impl FramePool {
  /// Create empty pool 创建空帧池
  pub fn new(cap: usize) -> Self {
    Self {
      slots: vec![None; cap].into_boxed_slice(),
      free: RoaringBitmap::new(),
      next: 0,
      len: 0,
    }
  }

  #[inline]
  pub fn cap(&self) -> usize {
    self.slots.len()
  }

  /// Occupied frames 已占用帧数
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  #[inline]
  pub fn is_full(&self) -> bool {
    self.len >= self.slots.len()
  }

  /// Page held by frame 帧中的页
  #[inline]
  pub fn page(&self, frame: FrameId) -> Option<PageId> {
    self.slots.get(frame as usize).copied().flatten()
  }

  /// Give page a free frame 为页分配空闲帧
  pub fn assign(&mut self, page: PageId) -> Result<FrameId> {
    if self.is_full() {
      return Err(Error::PoolFull(self.cap()));
    }
    let frame = match self.free.min() {
      Some(id) => {
        self.free.remove(id);
        id
      }
      None => {
        let id = self.next;
        self.next += 1;
        id
      }
    };
    self.slots[frame as usize] = Some(page);
    self.len += 1;
    Ok(frame)
  }

  /// Free frame for reuse, return the page it held
  /// 释放帧以便复用，返回原先的页
  pub fn release(&mut self, frame: FrameId) -> Option<PageId> {
    let page = self.slots.get_mut(frame as usize)?.take()?;
    self.free.insert(frame);
    self.len -= 1;
    Some(page)
  }

  /// Occupied `(frame, page)` pairs in frame order
  /// 按帧号顺序遍历已占用的 `(帧, 页)`
  pub fn iter(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
    self
      .slots
      .iter()
      .enumerate()
      .filter_map(|(frame, page)| page.map(|p| (frame as FrameId, p)))
  }
}
