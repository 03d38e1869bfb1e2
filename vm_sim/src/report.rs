//! Simulation report
//! 模拟报告

use std::fmt;

use vm_trace::Header;

use crate::{Cfg, Stat};

const NS_PER_MS: f64 = 1_000_000.0;

/// Final results of one run 单次运行的最终结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
  pub page_size: u64,
  pub frames: usize,
  pub pages: u32,
  /// `NR` from the trace header 轨迹头中的 `NR`
  pub refs: u64,
  /// Accesses actually processed 实际处理的访问数
  pub processed: u64,
  /// Malformed lines skipped 跳过的错误行数
  pub skipped: u64,
  pub hits: u64,
  pub faults: u64,
  pub time_ns: u64,
  pub hit_pct: f64,
  pub miss_pct: f64,
  /// Time if every reference hit RAM 全部命中内存时的耗时
  pub all_ram_ns: u64,
  /// Time if every reference faulted 全部缺页时的耗时
  pub all_fault_ns: u64,
}

impl Report {
  pub fn new(header: &Header, cfg: &Cfg, stat: Stat, skipped: u64) -> Self {
    Self {
      page_size: header.page_size,
      frames: cfg.frames,
      pages: header.pages,
      refs: header.refs,
      processed: stat.total(),
      skipped,
      hits: stat.hits,
      faults: stat.faults,
      time_ns: stat.time_ns,
      hit_pct: stat.hit_pct(),
      miss_pct: stat.miss_pct(),
      all_ram_ns: header.refs.saturating_mul(cfg.cost.ram_ns),
      all_fault_ns: header.refs.saturating_mul(cfg.cost.fault_ns),
    }
  }

  /// Total time over all-RAM time, 0 when undefined
  /// 总耗时相对全内存耗时的倍数，无定义时为 0
  pub fn slowdown(&self) -> f64 {
    match self.all_ram_ns {
      0 => 0.0,
      d => self.time_ns as f64 / d as f64,
    }
  }

  /// Frames over virtual pages in percent, 0 when no pages
  /// 物理帧占虚拟页的百分比，无页时为 0
  pub fn efficiency(&self) -> f64 {
    match self.pages {
      0 => 0.0,
      p => self.frames as f64 / p as f64 * 100.0,
    }
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let ms = |ns: u64| ns as f64 / NS_PER_MS;
    writeln!(f, "=== Simulation results ===")?;
    writeln!(f, "Configuration:")?;
    writeln!(f, "- Page size: {} bytes", self.page_size)?;
    writeln!(f, "- Frames: {}", self.frames)?;
    writeln!(f, "- Virtual pages: {}", self.pages)?;
    writeln!(f, "- Total references: {}", self.refs)?;
    writeln!(f)?;
    writeln!(f, "Paging:")?;
    writeln!(f, "- Hits: {} ({:.2}%)", self.hits, self.hit_pct)?;
    writeln!(f, "- Faults: {} ({:.2}%)", self.faults, self.miss_pct)?;
    writeln!(f)?;
    writeln!(f, "Access time:")?;
    writeln!(f, "- Total with paging: {:.3} ms", ms(self.time_ns))?;
    writeln!(f, "- All in RAM: {:.3} ms", ms(self.all_ram_ns))?;
    writeln!(f, "- All faults: {:.3} ms", ms(self.all_fault_ns))?;
    writeln!(f)?;
    writeln!(f, "Performance:")?;
    writeln!(f, "- Slowdown: {:.2}x", self.slowdown())?;
    write!(f, "- Memory efficiency: {:.2}%", self.efficiency())
  }
}
