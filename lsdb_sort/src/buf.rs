//! Random-access i64 storage
//! 随机访问的 i64 存储

use crate::{Error, Result};

/// Addressable sequence of `i64`
/// 可寻址的 `i64` 序列
///
/// `get` / `set` follow slice indexing: they panic outside `0..len()`.
/// Use `try_get` / `try_set` for checked access.
/// `get` / `set` 与切片索引一致：超出 `0..len()` 时 panic。
/// 需要检查时使用 `try_get` / `try_set`。
pub trait LongBuf {
  fn len(&self) -> usize;

  fn get(&self, i: usize) -> i64;

  fn set(&mut self, i: usize, v: i64);

  #[inline(always)]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Contiguous view, if the backing store has one
  /// 若底层存储连续，返回其视图
  #[inline(always)]
  fn as_slice(&self) -> Option<&[i64]> {
    None
  }

  #[inline(always)]
  fn as_mut_slice(&mut self) -> Option<&mut [i64]> {
    None
  }

  #[inline(always)]
  fn swap(&mut self, i: usize, j: usize) {
    let t = self.get(i);
    self.set(i, self.get(j));
    self.set(j, t);
  }

  #[inline]
  fn try_get(&self, i: usize) -> Result<i64> {
    check(i, 1, self.len())?;
    Ok(self.get(i))
  }

  #[inline]
  fn try_set(&mut self, i: usize, v: i64) -> Result<()> {
    check(i, 1, self.len())?;
    self.set(i, v);
    Ok(())
  }

  /// Copy `count` values starting at `src_start` into `dst` at `dst_start`
  /// 将从 `src_start` 开始的 `count` 个值复制到 `dst` 的 `dst_start` 处
  fn copy_to<D: LongBuf + ?Sized>(
    &self,
    src_start: usize,
    dst: &mut D,
    dst_start: usize,
    count: usize,
  ) -> Result<()> {
    check(src_start, count, self.len())?;
    check(dst_start, count, dst.len())?;
    copy(self, src_start, dst, dst_start, count);
    Ok(())
  }
}

/// Fail unless `start..start + count` lies within `0..len`
/// 除非 `start..start + count` 位于 `0..len` 内，否则失败
#[inline]
pub(crate) fn check(start: usize, count: usize, len: usize) -> Result<()> {
  match start.checked_add(count) {
    Some(end) if end <= len => Ok(()),
    _ => Err(Error::IndexOutOfRange {
      index: start.saturating_add(count.max(1) - 1),
      len,
    }),
  }
}

/// Unchecked bulk copy, memcpy when both sides are contiguous
/// 不检查边界的批量复制，两侧都连续时使用 memcpy
pub(crate) fn copy<S: LongBuf + ?Sized, D: LongBuf + ?Sized>(
  src: &S,
  src_start: usize,
  dst: &mut D,
  dst_start: usize,
  count: usize,
) {
  if let (Some(s), Some(d)) = (src.as_slice(), dst.as_mut_slice()) {
    d[dst_start..dst_start + count].copy_from_slice(&s[src_start..src_start + count]);
    return;
  }
  for i in 0..count {
    dst.set(dst_start + i, src.get(src_start + i));
  }
}

impl LongBuf for [i64] {
  #[inline(always)]
  fn len(&self) -> usize {
    <[i64]>::len(self)
  }

  #[inline(always)]
  fn get(&self, i: usize) -> i64 {
    self[i]
  }

  #[inline(always)]
  fn set(&mut self, i: usize, v: i64) {
    self[i] = v;
  }

  #[inline(always)]
  fn as_slice(&self) -> Option<&[i64]> {
    Some(self)
  }

  #[inline(always)]
  fn as_mut_slice(&mut self) -> Option<&mut [i64]> {
    Some(self)
  }

  #[inline(always)]
  fn swap(&mut self, i: usize, j: usize) {
    <[i64]>::swap(self, i, j);
  }
}

impl LongBuf for Vec<i64> {
  #[inline(always)]
  fn len(&self) -> usize {
    Vec::len(self)
  }

  #[inline(always)]
  fn get(&self, i: usize) -> i64 {
    self[i]
  }

  #[inline(always)]
  fn set(&mut self, i: usize, v: i64) {
    self[i] = v;
  }

  #[inline(always)]
  fn as_slice(&self) -> Option<&[i64]> {
    Some(&self[..])
  }

  #[inline(always)]
  fn as_mut_slice(&mut self) -> Option<&mut [i64]> {
    Some(&mut self[..])
  }

  #[inline(always)]
  fn swap(&mut self, i: usize, j: usize) {
    <[i64]>::swap(self, i, j);
  }
}
