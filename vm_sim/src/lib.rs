#![cfg_attr(docsrs, feature(doc_cfg))]

//! vm_sim - Demand-paged virtual memory simulator
//! vm_sim - 请求分页虚拟内存模拟器

mod clock;
mod conf;
mod error;
mod mmu;
mod report;
mod run;
mod stat;
mod stop;

pub use clock::Clock;
pub use conf::{
  Cfg, Conf, Cost, DEFAULT_FAULT_NS, DEFAULT_FRAMES, DEFAULT_PACE, DEFAULT_RAM_NS, DEFAULT_TICK,
};
pub use error::{Error, Result};
pub use mmu::{Mmu, Outcome};
pub use report::Report;
pub use run::{PACE_PAUSE, drive, run, run_trace};
pub use stat::Stat;
pub use stop::Stop;
pub use vm_nru::Policy;
