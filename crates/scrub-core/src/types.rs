//! 公共类型（对外暴露）
use serde::Serialize;

/// 单个结构单元的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentAction {
    Kept,
    Removed,
}

/// 扫描结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// 读到 EOI
    EndOfImage,
    /// 读到 SOS，剩余字节原样拷贝
    ScanData,
}

/// `process_next_segment` 的返回值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// 已处理一个段（附标记码），调用方继续循环
    Continue(u8),
    /// 扫描结束
    Stop(StopReason),
}

/// 报告中的单条段记录（对应 --report 输出的单个元素）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentRecord {
    /// 单元在输入中的起始偏移（含同步阶段跳过的填充字节）
    pub offset: usize,
    pub marker: u8,
    pub name: String,
    /// 段长度字段；SOI/EOI 无此字段
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u16>,
    /// 单元在输入中占用的总字节数
    pub size: usize,
    pub action: SegmentAction,
}

/// 一次扫描的完整报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrubReport {
    pub segments: Vec<SegmentRecord>,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub removed_bytes: usize,
    /// SOS 之后原样拷贝的字节数
    pub scan_data_bytes: usize,
    /// EOI 之后未读取、被丢弃的字节数
    pub trailing_bytes: usize,
    pub stop: StopReason,
}

impl ScrubReport {
    pub fn removed(&self) -> impl Iterator<Item = &SegmentRecord> {
        self.segments.iter().filter(|s| s.action == SegmentAction::Removed)
    }

    pub fn kept(&self) -> impl Iterator<Item = &SegmentRecord> {
        self.segments.iter().filter(|s| s.action == SegmentAction::Kept)
    }
}

/// 扫描产物：输出字节 + 报告
#[derive(Debug, Clone)]
pub struct Scrubbed {
    pub data: Vec<u8>,
    pub report: ScrubReport,
}
