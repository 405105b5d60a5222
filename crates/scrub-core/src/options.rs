//! 运行选项与统计信息（模块）
use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::types::ScrubReport;

/// 输入来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// 标准输入（不可原地覆盖）
    Stdin,
    /// 单个文件
    File(PathBuf),
}

/// 运行选项
#[derive(Debug, Clone)]
pub struct ScrubOptions {
    pub input: InputSource,
    /// 原地覆盖输入文件，而不是写到输出流
    pub in_place: bool,
}

impl Default for ScrubOptions {
    fn default() -> Self {
        Self { input: InputSource::Stdin, in_place: false }
    }
}

impl ScrubOptions {
    /// 检查选项组合是否合法
    pub fn validate(&self) -> Result<()> {
        if self.in_place && self.input == InputSource::Stdin {
            bail!("cannot overwrite standard input");
        }
        Ok(())
    }
}

/// 运行统计（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrubStats {
    pub segments_kept: usize,
    pub segments_removed: usize,
    pub bytes_in: usize,
    pub bytes_out: usize,
    /// EOI 之后被丢弃的字节数
    pub bytes_trailing: usize,
}

impl From<&ScrubReport> for ScrubStats {
    fn from(r: &ScrubReport) -> Self {
        Self {
            segments_kept: r.kept().count(),
            segments_removed: r.removed().count(),
            bytes_in: r.input_bytes,
            bytes_out: r.output_bytes,
            bytes_trailing: r.trailing_bytes,
        }
    }
}
