//! 只进不退的输入游标
use crate::error::{Result, ScrubError};

/// 输入字节序列 + 读偏移；任何越界读取都是致命错误
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// 当前读偏移（已消费的字节数）
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub(crate) fn read_byte(&mut self) -> Result<u8> {
        let b = *self.data.get(self.offset).ok_or(ScrubError::UnexpectedEof {
            offset: self.offset,
            needed: 1,
            available: 0,
        })?;
        self.offset += 1;
        Ok(b)
    }

    /// 读取恰好 n 个字节；不足时不推进偏移
    pub(crate) fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(ScrubError::UnexpectedEof {
                offset: self.offset,
                needed: n,
                available: self.remaining(),
            });
        }
        let data: &'a [u8] = self.data;
        let out = &data[self.offset..self.offset + n];
        self.offset += n;
        Ok(out)
    }

    /// 读取 2 字节大端整数
    pub(crate) fn read_u16_be(&mut self) -> Result<u16> {
        let b = self.read(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// 取走剩余全部字节
    pub(crate) fn drain(&mut self) -> &'a [u8] {
        let data: &'a [u8] = self.data;
        let rest = &data[self.offset..];
        self.offset = data.len();
        rest
    }
}
