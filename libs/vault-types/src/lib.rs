#![no_std]

//! Shared types for the liquidity-vault contract suite.

mod pool;
mod receipt;
mod venue;

pub use pool::{PoolInfo, PoolSnapshot, PositionInfo, PositionStatus};
pub use receipt::ShareReceipt;
pub use venue::SwapDebt;
