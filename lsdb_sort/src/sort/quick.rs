//! Dual-pivot quicksort with insertion sort for short ranges
//! 双轴快速排序，短范围使用插入排序
//!
//! Indexes are `isize`: empty sub-ranges such as `left..=left - 1` occur
//! naturally during recursion.
//! 索引使用 `isize`：递归中自然会出现 `left..=left - 1` 这样的空子范围。

use crate::{LongBuf, consts::INSERTION_SORT_THRESHOLD};

#[inline(always)]
fn at<A: LongBuf + ?Sized>(a: &A, i: isize) -> i64 {
  a.get(i as usize)
}

#[inline(always)]
fn put<A: LongBuf + ?Sized>(a: &mut A, i: isize, v: i64) {
  a.set(i as usize, v)
}

/// Sort `a[left..=right]`
/// 排序 `a[left..=right]`
///
/// `leftmost` is false when `a[left - 1]` belongs to the caller's range and
/// is no greater than anything in `left..=right`.
/// 当 `a[left - 1]` 属于调用者范围且不大于 `left..=right` 中任何元素时，`leftmost` 为 false。
pub(crate) fn sort<A: LongBuf + ?Sized>(a: &mut A, left: isize, right: isize, leftmost: bool) {
  let length = right - left + 1;

  if length < INSERTION_SORT_THRESHOLD as isize {
    if leftmost {
      insertion(a, left, right);
    } else {
      pair_insertion(a, left, right);
    }
    return;
  }

  // Cheap approximation of length / 7
  // length / 7 的廉价近似
  let seventh = (length >> 3) + (length >> 6) + 1;

  // Five evenly spaced samples around the midpoint
  // 围绕中点等距取五个样本
  let e3 = (left + right) >> 1;
  let e2 = e3 - seventh;
  let e1 = e2 - seventh;
  let e4 = e3 + seventh;
  let e5 = e4 + seventh;

  sort5(a, [e1, e2, e3, e4, e5]);

  let mut less = left;
  let mut great = right;

  if at(a, e1) != at(a, e2)
    && at(a, e2) != at(a, e3)
    && at(a, e3) != at(a, e4)
    && at(a, e4) != at(a, e5)
  {
    // 2nd and 4th samples approximate the terciles, pivot1 <= pivot2
    // 第 2、4 个样本近似三分位点，pivot1 <= pivot2
    let pivot1 = at(a, e2);
    let pivot2 = at(a, e4);

    // Ends go to the pivot slots; pivots are swapped back after partitioning
    // 两端元素移到枢轴原位置；分区后枢轴换回最终位置
    put(a, e2, at(a, left));
    put(a, e4, at(a, right));

    loop {
      less += 1;
      if at(a, less) >= pivot1 {
        break;
      }
    }
    loop {
      great -= 1;
      if at(a, great) <= pivot2 {
        break;
      }
    }

    //   left part        center part                  right part
    // +---------------------------------------------------------+
    // | < pivot1 | pivot1 <= && <= pivot2 |    ?    | > pivot2 |
    // +---------------------------------------------------------+
    //             ^                        ^       ^
    //            less                      k     great
    let mut k = less - 1;
    'outer: loop {
      k += 1;
      if k > great {
        break;
      }
      let ak = at(a, k);
      if ak < pivot1 {
        put(a, k, at(a, less));
        put(a, less, ak);
        less += 1;
      } else if ak > pivot2 {
        while at(a, great) > pivot2 {
          if great == k {
            great -= 1;
            break 'outer;
          }
          great -= 1;
        }
        if at(a, great) < pivot1 {
          put(a, k, at(a, less));
          put(a, less, at(a, great));
          less += 1;
        } else {
          put(a, k, at(a, great));
        }
        put(a, great, ak);
        great -= 1;
      }
    }

    put(a, left, at(a, less - 1));
    put(a, less - 1, pivot1);
    put(a, right, at(a, great + 1));
    put(a, great + 1, pivot2);

    sort(a, left, less - 2, leftmost);
    sort(a, great + 2, right, false);

    // Center over 4/7 of the range: move pivot-equal values to its ends
    // 中间部分超过范围的 4/7：把等于枢轴的值移到两端
    if less < e1 && e5 < great {
      while at(a, less) == pivot1 {
        less += 1;
      }
      while at(a, great) == pivot2 {
        great -= 1;
      }

      // | == pivot1 | pivot1 < && < pivot2 |    ?    | == pivot2 |
      let mut k = less - 1;
      'outer: loop {
        k += 1;
        if k > great {
          break;
        }
        let ak = at(a, k);
        if ak == pivot1 {
          put(a, k, at(a, less));
          put(a, less, ak);
          less += 1;
        } else if ak == pivot2 {
          while at(a, great) == pivot2 {
            if great == k {
              great -= 1;
              break 'outer;
            }
            great -= 1;
          }
          if at(a, great) == pivot1 {
            put(a, k, at(a, less));
            put(a, less, pivot1);
            less += 1;
          } else {
            put(a, k, at(a, great));
          }
          put(a, great, ak);
          great -= 1;
        }
      }
    }

    sort(a, less, great, false);
  } else {
    // Samples repeat: single pivot, three-way partition
    // 样本有重复：单枢轴三路分区
    let pivot = at(a, e3);

    // | < pivot | == pivot |    ?    | > pivot |
    let mut k = less;
    while k <= great {
      let ak = at(a, k);
      if ak != pivot {
        if ak < pivot {
          put(a, k, at(a, less));
          put(a, less, ak);
          less += 1;
        } else {
          while at(a, great) > pivot {
            great -= 1;
          }
          if at(a, great) < pivot {
            put(a, k, at(a, less));
            put(a, less, at(a, great));
            less += 1;
          } else {
            put(a, k, pivot);
          }
          put(a, great, ak);
          great -= 1;
        }
      }
      k += 1;
    }

    // Center is all == pivot
    // 中间部分全部等于枢轴
    sort(a, left, less - 1, leftmost);
    sort(a, great + 1, right, false);
  }
}

/// Insertion sort of the five sample slots
/// 对五个样本位置做插入排序
#[inline]
fn sort5<A: LongBuf + ?Sized>(a: &mut A, e: [isize; 5]) {
  for i in 1..5 {
    let t = at(a, e[i]);
    let mut j = i;
    while j > 0 && t < at(a, e[j - 1]) {
      put(a, e[j], at(a, e[j - 1]));
      j -= 1;
    }
    put(a, e[j], t);
  }
}

/// Plain insertion sort, no sentinel on the left
/// 普通插入排序，左侧无哨兵
fn insertion<A: LongBuf + ?Sized>(a: &mut A, left: isize, right: isize) {
  let mut i = left;
  while i < right {
    let ai = at(a, i + 1);
    let mut j = i;
    while ai < at(a, j) {
      put(a, j + 1, at(a, j));
      if j == left {
        j -= 1;
        break;
      }
      j -= 1;
    }
    put(a, j + 1, ai);
    i += 1;
  }
}

/// Pair insertion sort, `a[left - 1]` acts as sentinel
/// 成对插入排序，`a[left - 1]` 作为哨兵
fn pair_insertion<A: LongBuf + ?Sized>(a: &mut A, mut left: isize, mut right: isize) {
  // Skip the ascending prefix
  // 跳过升序前缀
  loop {
    if left >= right {
      return;
    }
    left += 1;
    if at(a, left) < at(a, left - 1) {
      break;
    }
  }

  // Insert two at a time, larger first
  // 每次插入两个，先插较大者
  let mut k = left;
  loop {
    left += 1;
    if left > right {
      break;
    }
    let mut a1 = at(a, k);
    let mut a2 = at(a, left);
    if a1 < a2 {
      a2 = a1;
      a1 = at(a, left);
    }

    loop {
      k -= 1;
      let v = at(a, k);
      if a1 >= v {
        break;
      }
      put(a, k + 2, v);
    }
    k += 1;
    put(a, k + 1, a1);

    loop {
      k -= 1;
      let v = at(a, k);
      if a2 >= v {
        break;
      }
      put(a, k + 1, v);
    }
    put(a, k + 1, a2);

    left += 1;
    k = left;
  }

  let last = at(a, right);
  loop {
    right -= 1;
    let v = at(a, right);
    if last >= v {
      break;
    }
    put(a, right + 1, v);
  }
  put(a, right + 1, last);
}
