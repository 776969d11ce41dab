//! 时间工具函数
//!
//! 所有持久化时间戳统一为 Unix millis，由 gateway 层在写入时生成。

/// Current time as Unix millis
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
