//! 宿主侧流程：整读输入 → 扫描 → 写出（标准输出或原地覆盖）
use anyhow::{Context, Result};
use std::io::{Read, Write};
use tracing::info;

use crate::diagnostics::DiagnosticSink;
use crate::options::{InputSource, ScrubOptions, ScrubStats};
use crate::scanner::scrub_bytes;
use crate::types::ScrubReport;

/// 读取整个输入
pub fn read_input(source: &InputSource) -> Result<Vec<u8>> {
    match source {
        InputSource::Stdin => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf).context("read standard input")?;
            Ok(buf)
        }
        InputSource::File(path) => {
            std::fs::read(path).with_context(|| format!("read {}", path.display()))
        }
    }
}

/// 扫描输入并写出结果
/// - `in_place` 为真时覆盖输入文件，`out` 不被写入；否则整体写入 `out`
/// - 扫描失败时不写出任何字节
pub fn scrub_and_write<D: DiagnosticSink>(opts: &ScrubOptions, out: &mut dyn Write, sink: D) -> Result<ScrubReport> {
    opts.validate()?;
    let data = read_input(&opts.input)?;
    let scrubbed = scrub_bytes(&data, sink)?;

    match (&opts.input, opts.in_place) {
        (InputSource::File(path), true) => {
            std::fs::write(path, &scrubbed.data).with_context(|| format!("overwrite {}", path.display()))?;
        }
        _ => {
            out.write_all(&scrubbed.data).context("write output")?;
            out.flush().context("flush output")?;
        }
    }

    let stats = ScrubStats::from(&scrubbed.report);
    info!(
        kept = stats.segments_kept,
        removed = stats.segments_removed,
        bytes_in = stats.bytes_in,
        bytes_out = stats.bytes_out,
        bytes_trailing = stats.bytes_trailing,
        "scrub finished"
    );
    Ok(scrubbed.report)
}

/// 将报告以 JSON 写出
pub fn write_report(out: &mut dyn Write, report: &ScrubReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
