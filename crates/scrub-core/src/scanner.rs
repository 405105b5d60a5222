//! 段扫描器：单次前向遍历，按段决定保留或丢弃
//!
//! 要点：
//! - 每个段的字节在读取时即追加到输出（投机接受），确认可移除后再截断回段起点。
//! - SOS 段本身保留，其后的熵编码数据不做任何解析，原样拷贝后结束。
//! - 任何结构错误都是致命的，不产生部分输出。
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::diagnostics::{Advisory, DiagnosticSink};
use crate::error::{Result, ScrubError};
use crate::markers::{self, marker_name, EOI, FILL, PREFIX, SOI, SOS};
use crate::types::{ScrubReport, Scrubbed, SegmentAction, SegmentRecord, Step, StopReason};

/// 段扫描器
///
/// 调用顺序：`new` → `validate_header` → 循环 `process_next_segment` 直到 `Step::Stop` → `finalize`。
/// 扫描未结束时 `finalize` 返回 `None`。
/// 完整流程见 [`scrub_bytes`](crate::scrub_bytes)。
pub struct Scanner<'a, D: DiagnosticSink> {
    cursor: Cursor<'a>,
    input_len: usize,
    out: Vec<u8>,
    sink: D,
    segments: Vec<SegmentRecord>,
    scan_data_bytes: usize,
    stop: Option<StopReason>,
}

impl<'a, D: DiagnosticSink> Scanner<'a, D> {
    /// 包装输入；输出缓冲按输入长度预分配，此时不做任何解析
    pub fn new(data: &'a [u8], sink: D) -> Self {
        Self {
            cursor: Cursor::new(data),
            input_len: data.len(),
            out: Vec::with_capacity(data.len()),
            sink,
            segments: Vec::new(),
            scan_data_bytes: 0,
            stop: None,
        }
    }

    /// 消费首个标记，必须是 SOI
    pub fn validate_header(&mut self) -> Result<()> {
        debug_assert!(self.segments.is_empty(), "validate_header must run first");
        let unit_offset = self.cursor.offset();
        let code = self.marker()?;
        if code != SOI {
            return Err(ScrubError::MissingStartOfImage { offset: self.cursor.offset() - 1, found: code });
        }
        self.record(unit_offset, code, None, SegmentAction::Kept);
        Ok(())
    }

    /// 处理一个结构单元
    pub fn process_next_segment(&mut self) -> Result<Step> {
        debug_assert!(self.stop.is_none(), "scan already finished");
        let start = self.out.len();
        let unit_offset = self.cursor.offset();

        let code = self.marker()?;
        match code {
            EOI => {
                self.record(unit_offset, code, None, SegmentAction::Kept);
                return Ok(self.finish(StopReason::EndOfImage));
            }
            FILL => return Err(ScrubError::ZeroMarker { offset: self.cursor.offset() - 1 }),
            _ => {}
        }

        let length_offset = self.cursor.offset();
        let length = self.take_u16_be()?;
        if length < 2 {
            return Err(ScrubError::ShortLength { offset: length_offset, length });
        }
        self.take(usize::from(length) - 2)?;

        // APPn / JPGn / COM：回滚本段已追加的字节
        let action = if markers::is_removable(code) {
            self.out.truncate(start);
            SegmentAction::Removed
        } else {
            SegmentAction::Kept
        };
        self.record(unit_offset, code, Some(length), action);

        if code == SOS {
            // 熵编码数据，原样拷贝至结束
            let rest = self.cursor.drain();
            self.out.extend_from_slice(rest);
            self.scan_data_bytes = rest.len();
            trace!(bytes = rest.len(), "scan data passed through");
            return Ok(self.finish(StopReason::ScanData));
        }

        Ok(Step::Continue(code))
    }

    /// 交出输出缓冲与报告；扫描尚未结束（未读到 EOI 或 SOS）时返回 `None`
    pub fn finalize(self) -> Option<Scrubbed> {
        let stop = self.stop?;
        Some(self.into_scrubbed(stop))
    }

    fn into_scrubbed(self, stop: StopReason) -> Scrubbed {
        let removed_bytes = self
            .segments
            .iter()
            .filter(|s| s.action == SegmentAction::Removed)
            .map(|s| s.size)
            .sum();
        let report = ScrubReport {
            segments: self.segments,
            input_bytes: self.input_len,
            output_bytes: self.out.len(),
            removed_bytes,
            scan_data_bytes: self.scan_data_bytes,
            // EOI 之后的字节不被读取，也不进入输出
            trailing_bytes: self.cursor.remaining(),
            stop,
        };
        Scrubbed { data: self.out, report }
    }

    /// 标记同步：跳过 0x00（告警），要求 0xFF 前缀，吞掉连续的 0xFF 填充，返回标记码
    fn marker(&mut self) -> Result<u8> {
        let mut c = self.take_byte()?;
        while c == FILL {
            self.sink.advisory(Advisory::SkippedZeroByte { offset: self.cursor.offset() - 1 });
            c = self.take_byte()?;
        }
        if c != PREFIX {
            return Err(ScrubError::ExpectedMarker { offset: self.cursor.offset() - 1, found: c });
        }
        while c == PREFIX {
            c = self.take_byte()?;
        }
        Ok(c)
    }

    fn take_byte(&mut self) -> Result<u8> {
        let b = self.cursor.read_byte()?;
        self.out.push(b);
        Ok(b)
    }

    fn take_u16_be(&mut self) -> Result<u16> {
        let v = self.cursor.read_u16_be()?;
        self.out.extend_from_slice(&v.to_be_bytes());
        Ok(v)
    }

    fn take(&mut self, n: usize) -> Result<()> {
        let data = self.cursor.read(n)?;
        self.out.extend_from_slice(data);
        Ok(())
    }

    fn record(&mut self, offset: usize, marker: u8, length: Option<u16>, action: SegmentAction) {
        let size = self.cursor.offset() - offset;
        debug!(offset, marker = %marker_name(marker), size, ?action, "segment");
        self.segments.push(SegmentRecord { offset, marker, name: marker_name(marker), length, size, action });
    }

    fn finish(&mut self, reason: StopReason) -> Step {
        self.stop = Some(reason);
        Step::Stop(reason)
    }
}

/// 完整驱动流程：校验 SOI → 逐段处理直到结束 → 交出结果
pub fn scrub_bytes<D: DiagnosticSink>(data: &[u8], sink: D) -> Result<Scrubbed> {
    let mut scanner = Scanner::new(data, sink);
    scanner.validate_header()?;
    loop {
        if let Step::Stop(reason) = scanner.process_next_segment()? {
            return Ok(scanner.into_scrubbed(reason));
        }
    }
}
