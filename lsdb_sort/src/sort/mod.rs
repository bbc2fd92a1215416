//! Hybrid sort entry points
//! 混合排序入口
//!
//! Ranges with `right - left < QUICKSORT_THRESHOLD` go to dual-pivot quicksort.
//! Longer ranges are scanned for ascending / descending runs; if the data is
//! structured enough they are merged pairwise (natural merge sort), otherwise
//! quicksort takes the whole range.
//!
//! `right - left < QUICKSORT_THRESHOLD` 的范围使用双轴快速排序。
//! 更长的范围先扫描升序/降序游程；数据足够有序时两两归并（自然归并排序），
//! 否则整个范围交给快速排序。

mod merge;
mod quick;

use std::ops::Range;

use crate::{Error, LongBuf, Result, buf::check};

/// Sort the whole buffer ascending
/// 将整个缓冲区升序排序
pub fn sort<A: LongBuf + ?Sized>(a: &mut A) {
  let end = a.len();
  merge::sort_or_merge::<A, [i64]>(a, 0, end, None);
}

/// Sort `range` of the buffer, allocating merge space if needed
/// 对缓冲区的 `range` 排序，需要时分配归并空间
pub fn sort_range<A: LongBuf + ?Sized>(a: &mut A, range: Range<usize>) -> Result<()> {
  check_range(&range, a.len())?;
  merge::sort_or_merge::<A, [i64]>(a, range.start, range.end, None);
  Ok(())
}

/// Sort `range` of the buffer, merging through `work[work_range]`
/// 对缓冲区的 `range` 排序，通过 `work[work_range]` 归并
///
/// A workspace shorter than `range` is ignored and a temporary one is
/// allocated for the call.
/// 工作区短于 `range` 时被忽略，本次调用分配临时工作区。
pub fn sort_range_with<A: LongBuf + ?Sized, W: LongBuf + ?Sized>(
  a: &mut A,
  range: Range<usize>,
  work: &mut W,
  work_range: Range<usize>,
) -> Result<()> {
  check_range(&range, a.len())?;
  check_range(&work_range, work.len())?;
  let base = work_range.start;
  let len = work_range.len();
  merge::sort_or_merge(a, range.start, range.end, Some((work, base, len)));
  Ok(())
}

#[inline]
fn check_range(range: &Range<usize>, len: usize) -> Result<()> {
  if range.start > range.end {
    return Err(Error::IndexOutOfRange {
      index: range.start,
      len,
    });
  }
  check(range.start, range.end - range.start, len)
}
