#![cfg_attr(docsrs, feature(doc_cfg))]

//! Page replacement policies
//! 页面置换策略

mod class;
pub mod nru;
mod policy;

pub use class::Class;
pub use nru::Resident;
pub use policy::Policy;
