//! 诊断输出（非致命告警）
//!
//! 扫描器本身不直接写 stderr，而是把告警交给注入的 `DiagnosticSink`，
//! 便于在测试中收集、在 CLI 中转给 tracing。
use tracing::warn;

/// 非致命告警
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// 在期望标记前缀的位置遇到 0x00，已跳过
    SkippedZeroByte { offset: usize },
}

/// 告警接收端
pub trait DiagnosticSink {
    fn advisory(&mut self, advisory: Advisory);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn advisory(&mut self, advisory: Advisory) {
        (**self).advisory(advisory);
    }
}

/// 转发到 tracing（CLI 默认使用）
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn advisory(&mut self, advisory: Advisory) {
        match advisory {
            Advisory::SkippedZeroByte { offset } => warn!(offset, "skipping zero byte"),
        }
    }
}

/// 丢弃所有告警
#[derive(Debug, Default, Clone, Copy)]
pub struct Quiet;

impl DiagnosticSink for Quiet {
    fn advisory(&mut self, _advisory: Advisory) {}
}

/// 收集到 Vec（测试与库调用方使用）
impl DiagnosticSink for Vec<Advisory> {
    fn advisory(&mut self, advisory: Advisory) {
        self.push(advisory);
    }
}
