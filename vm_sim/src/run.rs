//! Run orchestration
//! 运行编排
//!
//! One thread drains the trace in order, the reference clock runs beside it.
//! The clock is stopped once the trace is exhausted or the run is interrupted.
//! 一个线程按序消费轨迹，引用时钟并行运行。轨迹耗尽或运行被中断后停止时钟。

use std::{io::BufRead, path::Path, thread, time::Duration};

use log::{info, warn};
use vm_trace::{Access, Trace};

use crate::{Cfg, Clock, Conf, Error, Mmu, Report, Result, Stop};

/// Pause length when pacing 节流暂停时长
pub const PACE_PAUSE: Duration = Duration::from_millis(1);

/// Feed accesses to the MMU in order, return how many were processed
/// 按序将访问送入 MMU，返回处理数量
///
/// Stops early when `stop` is set; every processed access is complete.
/// `stop` 被设置时提前结束；已处理的访问都是完整的。
pub fn drive<I>(mmu: &Mmu, accesses: I, pace: u64, stop: &Stop) -> Result<u64>
where
  I: IntoIterator<Item = vm_trace::Result<Access>>,
{
  let mut n = 0u64;
  for access in accesses {
    if stop.is_stopped() {
      info!("interrupted after {n} accesses");
      break;
    }
    let Access { page, write } = access?;
    mmu.access(page, write)?;
    n += 1;
    // Give the clock thread a chance at the lock 让时钟线程有机会获取锁
    if pace != 0 && n % pace == 0 {
      thread::sleep(PACE_PAUSE);
    }
  }
  Ok(n)
}

/// Simulate trace file 模拟轨迹文件
pub fn run(path: impl AsRef<Path>, conf: &[Conf]) -> Result<Report> {
  run_trace(Trace::open(path)?, conf, &Stop::default())
}

/// Simulate an opened trace 模拟已打开的轨迹
pub fn run_trace<R>(trace: Trace<R>, conf: &[Conf], stop: &Stop) -> Result<Report>
where
  R: BufRead + Send + 'static,
{
  let cfg = Cfg::new(conf)?;
  let header = *trace.header();
  cfg.check(&header)?;

  let mmu = Mmu::new(header.pages, &cfg);
  info!(
    "simulate: page size {} B, {} pages, {} frames, {} refs, policy {}",
    header.page_size,
    header.pages,
    cfg.frames,
    header.refs,
    cfg.policy.name()
  );

  let mut clock = match cfg.tick {
    Some(tick) => Some(Clock::start(mmu.clone(), tick)?),
    None => None,
  };

  let worker = thread::Builder::new().name("vm-access".into()).spawn({
    let mmu = mmu.clone();
    let stop = stop.clone();
    let pace = cfg.pace;
    move || -> Result<(u64, u64)> {
      let mut trace = trace;
      let n = drive(&mmu, &mut trace, pace, &stop)?;
      Ok((n, trace.skipped()))
    }
  })?;

  let joined = worker.join();
  if let Some(clock) = clock.as_mut() {
    clock.stop();
  }
  let (n, skipped) = joined.map_err(|_| Error::WorkerPanic)??;

  if n != header.refs && !stop.is_stopped() {
    warn!("trace declares {} refs, processed {n}", header.refs);
  }

  let report = Report::new(&header, &cfg, mmu.stat(), skipped);
  info!(
    "done: {} hits, {} faults, {} ns",
    report.hits, report.faults, report.time_ns
  );
  Ok(report)
}
