//! JPEG 元数据清理核心库
//!
//! 设计要点：
//! - 单次前向扫描 JPEG 标记结构，删除 APPn / JPGn / COM 段，其余段逐字节保留。
//! - 遇到 SOS 后不再解析，剩余熵编码数据原样拷贝。
//! - 结构错误一律致命，返回带偏移的 `ScrubError`，由调用方决定退出码；不产生部分输出。
//! - 非致命告警（跳过 0x00 填充字节）通过可注入的 `DiagnosticSink` 输出。

mod cursor;
mod diagnostics;
mod error;
pub mod markers;
mod options;
mod scanner;
mod scrub;
mod types;

pub use diagnostics::{Advisory, DiagnosticSink, Quiet, TracingSink};
pub use error::{ErrorKind, Result, ScrubError};
pub use options::{InputSource, ScrubOptions, ScrubStats};
pub use scanner::{scrub_bytes, Scanner};
pub use scrub::{read_input, scrub_and_write, write_report};
pub use types::{ScrubReport, Scrubbed, SegmentAction, SegmentRecord, Step, StopReason};
