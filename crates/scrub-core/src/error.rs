//! 解析错误类型（全部为致命错误，不存在“跳过后继续”的路径）
use thiserror::Error;

/// 错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 期望标记但缺失或格式错误
    Sync,
    /// 输入提前结束
    Truncated,
    /// 段长度字段小于 2
    Length,
}

/// 扫描错误；`offset` 均为输入中的字节偏移
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScrubError {
    #[error("expected SOI; saw 0x{found:02x} at offset 0x{offset:x}")]
    MissingStartOfImage { offset: usize, found: u8 },

    #[error("expecting marker at 0x{offset:x}, found 0x{found:02x}")]
    ExpectedMarker { offset: usize, found: u8 },

    #[error("expecting marker; saw 0x00 at offset 0x{offset:x}")]
    ZeroMarker { offset: usize },

    #[error("premature end of input at offset 0x{offset:x}: need {needed} bytes, {available} available")]
    UnexpectedEof { offset: usize, needed: usize, available: usize },

    #[error("early end of stream: segment length {length} at offset 0x{offset:x} is shorter than its length field")]
    ShortLength { offset: usize, length: u16 },
}

impl ScrubError {
    /// 出错位置（输入偏移）
    pub fn offset(&self) -> usize {
        match *self {
            ScrubError::MissingStartOfImage { offset, .. }
            | ScrubError::ExpectedMarker { offset, .. }
            | ScrubError::ZeroMarker { offset }
            | ScrubError::UnexpectedEof { offset, .. }
            | ScrubError::ShortLength { offset, .. } => offset,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrubError::MissingStartOfImage { .. }
            | ScrubError::ExpectedMarker { .. }
            | ScrubError::ZeroMarker { .. } => ErrorKind::Sync,
            ScrubError::UnexpectedEof { .. } => ErrorKind::Truncated,
            ScrubError::ShortLength { .. } => ErrorKind::Length,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrubError>;
