//! Hit / fault statistics
//! 命中与缺页统计

/// Counters, never decremented, saturate at `u64::MAX`
/// 计数器，只增不减，到 `u64::MAX` 饱和
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stat {
  pub hits: u64,
  pub faults: u64,
  /// Simulated time (ns) 模拟耗时（纳秒）
  pub time_ns: u64,
}

impl Stat {
  #[inline]
  pub(crate) fn hit(&mut self, cost: u64) {
    self.hits = self.hits.saturating_add(1);
    self.time_ns = self.time_ns.saturating_add(cost);
  }

  #[inline]
  pub(crate) fn fault(&mut self, cost: u64) {
    self.faults = self.faults.saturating_add(1);
    self.time_ns = self.time_ns.saturating_add(cost);
  }

  /// Accesses processed 已处理访问数
  #[inline]
  pub fn total(&self) -> u64 {
    self.hits.saturating_add(self.faults)
  }

  /// hits / total, 0.0 before any access 命中率，无访问时为 0.0
  #[inline]
  pub fn hit_rate(&self) -> f64 {
    match self.total() {
      0 => 0.0,
      n => self.hits as f64 / n as f64,
    }
  }

  /// 1 - hit_rate, 0.0 before any access 缺页率，无访问时为 0.0
  #[inline]
  pub fn fault_rate(&self) -> f64 {
    match self.total() {
      0 => 0.0,
      _ => 1.0 - self.hit_rate(),
    }
  }

  #[inline]
  pub fn hit_pct(&self) -> f64 {
    self.hit_rate() * 100.0
  }

  #[inline]
  pub fn miss_pct(&self) -> f64 {
    self.fault_rate() * 100.0
  }
}
