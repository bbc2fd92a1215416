//! Run detection and natural merge sort
//! 游程检测与自然归并排序

use super::quick;
use crate::{
  LongBuf,
  buf::copy,
  consts::{MAX_RUN_COUNT, MAX_RUN_LENGTH, QUICKSORT_THRESHOLD},
};

/// Sort `a[left..end]`, `work` is (buffer, base, usable length)
/// 排序 `a[left..end]`，`work` 为（缓冲区、起点、可用长度）
pub(crate) fn sort_or_merge<A: LongBuf + ?Sized, W: LongBuf + ?Sized>(
  a: &mut A,
  left: usize,
  end: usize,
  work: Option<(&mut W, usize, usize)>,
) {
  if end - left < 2 {
    return;
  }
  let right = end - 1;

  if right - left < QUICKSORT_THRESHOLD {
    quick::sort(a, left as isize, right as isize, true);
    return;
  }

  // run[i] is the start of the i-th run
  // run[i] 是第 i 个游程的起点
  let mut run = [0usize; MAX_RUN_COUNT + 1];
  let mut count = 0;
  run[0] = left;

  let mut k = left;
  while k < right {
    if a.get(k) < a.get(k + 1) {
      // ascending / 升序
      loop {
        k += 1;
        if k > right || a.get(k - 1) > a.get(k) {
          break;
        }
      }
    } else if a.get(k) > a.get(k + 1) {
      // descending, reversed in place / 降序，原地反转
      loop {
        k += 1;
        if k > right || a.get(k - 1) < a.get(k) {
          break;
        }
      }
      let (mut lo, mut hi) = (run[count], k - 1);
      while lo < hi {
        a.swap(lo, hi);
        lo += 1;
        hi -= 1;
      }
    } else {
      // equal / 相等
      let mut m = MAX_RUN_LENGTH;
      loop {
        k += 1;
        if k > right || a.get(k - 1) != a.get(k) {
          break;
        }
        m -= 1;
        if m == 0 {
          log::trace!("equal run over {MAX_RUN_LENGTH} at {k}, quicksort {left}..{end}");
          quick::sort(a, left as isize, right as isize, true);
          return;
        }
      }
    }

    count += 1;
    if count == MAX_RUN_COUNT {
      // Not structured enough for merging
      // 结构不够有序，不适合归并
      log::trace!("{MAX_RUN_COUNT} runs, quicksort {left}..{end}");
      quick::sort(a, left as isize, right as isize, true);
      return;
    }
    run[count] = k;
  }

  if run[count] == right {
    // Last run holds a single element
    // 最后一个游程只有一个元素
    count += 1;
    run[count] = end;
  } else if count == 1 {
    return;
  }

  // Parity of the pass count decides which buffer the first pass reads,
  // so that the last pass writes into `a`
  // 归并轮数的奇偶决定第一轮从哪个缓冲区读取，使最后一轮写入 `a`
  let mut odd = false;
  let mut n = 1usize;
  loop {
    n <<= 1;
    if n >= count {
      break;
    }
    odd = !odd;
  }

  let len = end - left;
  for r in &mut run[..=count] {
    *r -= left;
  }
  let run = &mut run[..=count];

  match work {
    Some((w, base, wlen)) if wlen >= len => merge(a, left, w, base, run, len, odd),
    _ => {
      log::trace!("alloc merge workspace of {len}");
      let mut tmp = vec![0i64; len];
      merge(a, left, tmp.as_mut_slice(), 0, run, len, odd);
    }
  }
}

/// Merge runs back and forth between `a` and `w` until one is left in `a`
/// 在 `a` 与 `w` 之间来回归并游程，直到 `a` 中只剩一个
///
/// `run` holds run starts relative to the range, with `len` as last entry.
/// `run` 存放相对于范围起点的游程起点，最后一项为 `len`。
fn merge<A: LongBuf + ?Sized, W: LongBuf + ?Sized>(
  a: &mut A,
  a_base: usize,
  w: &mut W,
  w_base: usize,
  run: &mut [usize],
  len: usize,
  odd: bool,
) {
  // true while `a` is the source of the next pass
  // 下一轮以 `a` 为源时为 true
  let mut from_a = odd;
  if !from_a {
    copy(&*a, a_base, w, w_base, len);
  }

  let mut count = run.len() - 1;
  while count > 1 {
    count = if from_a {
      merge_pass(&*a, a_base, w, w_base, run, count, len)
    } else {
      merge_pass(&*w, w_base, a, a_base, run, count, len)
    };
    from_a = !from_a;
  }
  debug_assert!(from_a);
}

/// Merge neighbouring runs pairwise from `src` into `dst`, returns new run count
/// 将相邻游程两两从 `src` 归并到 `dst`，返回新的游程数
fn merge_pass<S: LongBuf + ?Sized, D: LongBuf + ?Sized>(
  src: &S,
  so: usize,
  dst: &mut D,
  d_o: usize,
  run: &mut [usize],
  count: usize,
  len: usize,
) -> usize {
  let mut last = 0;
  let mut k = 2;
  while k <= count {
    let (lo, mi, hi) = (run[k - 2], run[k - 1], run[k]);
    let (mut p, mut q) = (lo, mi);
    for i in lo..hi {
      let v = if q >= hi || (p < mi && src.get(p + so) <= src.get(q + so)) {
        p += 1;
        src.get(p - 1 + so)
      } else {
        q += 1;
        src.get(q - 1 + so)
      };
      dst.set(i + d_o, v);
    }
    last += 1;
    run[last] = hi;
    k += 2;
  }

  if count & 1 != 0 {
    // Unpaired tail is carried over
    // 未配对的尾部直接复制
    let lo = run[count - 1];
    copy(src, lo + so, dst, lo + d_o, len - lo);
    last += 1;
    run[last] = len;
  }
  last
}
