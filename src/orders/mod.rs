//! 订单生命周期模块
//!
//! [`OrderLifecycle`] 是系统的核心：订单创建、状态流转、追踪链接签发与失效。

mod lifecycle;

#[cfg(test)]
mod tests;

pub use lifecycle::OrderLifecycle;
