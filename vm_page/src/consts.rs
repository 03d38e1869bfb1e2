//! 常量与标识类型 Constants and id types

/// 虚拟页号 Virtual page number
pub type PageId = u32;

/// 物理帧号 Physical frame id
pub type FrameId = u32;
