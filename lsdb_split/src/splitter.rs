//! Growable-buffer delimiter splitter
//! 基于可增长缓冲区的分隔符切分器

use std::io::{ErrorKind, Read};

use memchr::memmem::Finder;

use crate::{Conf, ParsedConf, Result};

/// Splits a [`Read`] source on a fixed delimiter
/// 按固定分隔符切分 [`Read`] 数据源
///
/// Ranges are raw split pieces: bytes before the first delimiter come first
/// (empty if the stream starts with one), and a trailing delimiter yields a
/// final empty range. An empty delimiter matches in place forever, giving
/// zero-length ranges.
/// 范围是原始切分片段：首个分隔符之前的字节最先返回（流以分隔符开头时为空），
/// 末尾的分隔符会产生一个空的最终范围。空分隔符原地永远匹配，产生零长度范围。
pub struct Splitter<R> {
  src: R,
  finder: Finder<'static>,
  step: usize,
  buf: Vec<u8>,
  /// Current range / 当前范围
  start: usize,
  end: usize,
  /// Start of the next range, bytes before it are handed off
  /// 下一个范围的起点，之前的字节已交出
  pos: usize,
  /// Where the next delimiter search resumes
  /// 下一次分隔符搜索的起点
  scan: usize,
  /// End of buffered bytes / 已缓冲字节的末尾
  filled: usize,
  eof: bool,
  done: bool,
}

impl<R: Read> Splitter<R> {
  pub fn new(src: R, delim: &[u8]) -> Self {
    Self::with_conf(src, delim, &[])
  }

  pub fn with_conf(src: R, delim: &[u8], conf: &[Conf]) -> Self {
    let conf = ParsedConf::new(conf);
    Self {
      src,
      finder: Finder::new(delim).into_owned(),
      step: conf.buf_step,
      buf: Vec::new(),
      start: 0,
      end: 0,
      pos: 0,
      scan: 0,
      filled: 0,
      eof: false,
      done: false,
    }
  }

  /// Advance to the next range, `false` once the stream is drained
  /// 前进到下一个范围，流耗尽后返回 `false`
  ///
  /// Offsets from the previous call are invalidated: the buffer may be
  /// shifted or enlarged.
  /// 上一次调用得到的偏移失效：缓冲区可能被移动或扩大。
  pub fn read_next(&mut self) -> Result<bool> {
    if self.done {
      return Ok(false);
    }
    self.start = self.pos;

    loop {
      if let Some(i) = self.finder.find(&self.buf[self.scan..self.filled]) {
        self.end = self.scan + i;
        self.pos = self.end + self.finder.needle().len();
        self.scan = self.pos;
        return Ok(true);
      }

      if self.eof {
        self.end = self.filled;
        self.pos = self.filled;
        self.done = true;
        return Ok(true);
      }

      // A match can only start where the whole delimiter still fits;
      // the tail may hold a partial delimiter and is searched again
      // 匹配只能从还容得下整个分隔符的位置开始；尾部可能含部分分隔符，需再次搜索
      let tail = (self.filled + 1).saturating_sub(self.finder.needle().len());
      self.scan = self.scan.max(tail.min(self.filled));

      if self.filled == self.buf.len() {
        self.grow();
      }
      self.fill()?;
    }
  }

  /// Make room behind `filled`: shift unconsumed bytes to 0, or enlarge
  /// 在 `filled` 之后腾出空间：将未消费字节移到 0，或扩大缓冲区
  fn grow(&mut self) {
    let off = self.start;
    if off > 0 {
      self.buf.copy_within(off..self.filled, 0);
      self.filled -= off;
      self.scan -= off;
      self.pos -= off;
      self.start = 0;
      log::debug!("split buf shift {off}, keep {}", self.filled);
    } else {
      let len = self.buf.len() + self.step;
      self.buf.resize(len, 0);
      log::debug!("split buf enlarge to {len}");
    }
  }

  /// Read once into the free tail of the buffer
  /// 向缓冲区空闲尾部读取一次
  fn fill(&mut self) -> Result<()> {
    loop {
      match self.src.read(&mut self.buf[self.filled..]) {
        Ok(0) => {
          self.eof = true;
          return Ok(());
        }
        Ok(n) => {
          self.filled += n;
          return Ok(());
        }
        Err(e) if e.kind() == ErrorKind::Interrupted => {}
        Err(e) => return Err(e.into()),
      }
    }
  }

  /// Start offset of the current range in [`Self::buf`]
  /// 当前范围在 [`Self::buf`] 中的起始偏移
  #[inline]
  pub fn start(&self) -> usize {
    self.start
  }

  #[inline]
  pub fn end(&self) -> usize {
    self.end
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.end - self.start
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.end == self.start
  }

  /// Buffered bytes, valid until the next [`Self::read_next`]
  /// 已缓冲的字节，在下一次 [`Self::read_next`] 之前有效
  #[inline]
  pub fn buf(&self) -> &[u8] {
    &self.buf[..self.filled]
  }

  /// Bytes of the current range
  /// 当前范围的字节
  #[inline]
  pub fn range(&self) -> &[u8] {
    &self.buf[self.start..self.end]
  }

  #[inline]
  pub fn delim(&self) -> &[u8] {
    self.finder.needle()
  }

  pub fn into_inner(self) -> R {
    self.src
  }
}
