//! Simulation configuration
//! 模拟配置

use std::time::Duration;

use vm_nru::Policy;
use vm_trace::Header;

use crate::{Error, Result};

/// Default frame count 默认物理帧数
pub const DEFAULT_FRAMES: usize = 4;

/// RAM access cost (ns) 内存访问耗时（纳秒）
pub const DEFAULT_RAM_NS: u64 = 50;

/// Page fault cost, 10ms in ns 缺页耗时，10 毫秒
pub const DEFAULT_FAULT_NS: u64 = 10_000_000;

/// Reference clock period 引用时钟周期
pub const DEFAULT_TICK: Duration = Duration::from_millis(1);

/// Pause the consumer every N accesses 每 N 次访问暂停消费者
pub const DEFAULT_PACE: u64 = 10_000;

/// Simulation configuration item
/// 模拟配置项
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Physical frame capacity, default 4
  /// 物理帧容量，默认 4
  Frames(usize),
  /// Expected page size, must equal trace `TP`
  /// 期望页大小，须与轨迹 `TP` 一致
  PageSize(u64),
  /// Hit cost (ns), default 50
  /// 命中耗时（纳秒），默认 50
  RamNs(u64),
  /// Fault cost (ns), default 10ms
  /// 缺页耗时（纳秒），默认 10 毫秒
  FaultNs(u64),
  /// Reference clock period, default 1ms
  /// 引用时钟周期，默认 1 毫秒
  Tick(Duration),
  /// Disable the reference clock, for reproducible runs
  /// 关闭引用时钟，用于可复现运行
  NoClock,
  /// Pause 1ms every N accesses, 0 disables
  /// 每 N 次访问暂停 1 毫秒，0 表示关闭
  Pace(u64),
  /// Replacement policy
  /// 置换策略
  Policy(Policy),
}

/// Access costs 访问耗时
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cost {
  pub ram_ns: u64,
  pub fault_ns: u64,
}

impl Default for Cost {
  fn default() -> Self {
    Self {
      ram_ns: DEFAULT_RAM_NS,
      fault_ns: DEFAULT_FAULT_NS,
    }
  }
}

/// Resolved configuration 解析后的配置
#[derive(Debug, Clone, Copy)]
pub struct Cfg {
  pub frames: usize,
  pub page_size: Option<u64>,
  pub cost: Cost,
  /// `None` when the clock is disabled 时钟关闭时为 `None`
  pub tick: Option<Duration>,
  pub pace: u64,
  pub policy: Policy,
}

impl Default for Cfg {
  fn default() -> Self {
    Self {
      frames: DEFAULT_FRAMES,
      page_size: None,
      cost: Cost::default(),
      tick: Some(DEFAULT_TICK),
      pace: DEFAULT_PACE,
      policy: Policy::default(),
    }
  }
}

impl Cfg {
  /// Fold items over defaults in one pass and validate
  /// 单次遍历将配置项叠加到默认值并校验
  pub fn new(conf: &[Conf]) -> Result<Self> {
    let mut cfg = Self::default();
    let mut no_clock = false;
    for c in conf {
      match *c {
        Conf::Frames(v) => cfg.frames = v,
        Conf::PageSize(v) => cfg.page_size = Some(v),
        Conf::RamNs(v) => cfg.cost.ram_ns = v,
        Conf::FaultNs(v) => cfg.cost.fault_ns = v,
        Conf::Tick(v) => cfg.tick = Some(v),
        Conf::NoClock => no_clock = true,
        Conf::Pace(v) => cfg.pace = v,
        Conf::Policy(v) => cfg.policy = v,
      }
    }
    if no_clock {
      cfg.tick = None;
    }

    if cfg.frames == 0 {
      return Err(Error::Frames);
    }
    if cfg.page_size == Some(0) {
      return Err(vm_trace::Error::PageSize(0).into());
    }
    Ok(cfg)
  }

  /// Check against trace header 与轨迹头核对
  pub fn check(&self, header: &Header) -> Result<()> {
    match self.page_size {
      Some(conf) if conf != header.page_size => Err(Error::PageSize {
        conf,
        trace: header.page_size,
      }),
      _ => Ok(()),
    }
  }
}
