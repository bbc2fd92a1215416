#![cfg_attr(docsrs, feature(doc_cfg))]

//! # lsdb_sort - Sortable i64 buffers / 可排序的 i64 缓冲区
//!
//! [`LongBuf`] abstracts random-access `i64` storage (heap, file mapping, ...).
//! [`sort`] is a hybrid of natural merge sort, dual-pivot quicksort and
//! insertion sort that works through that contract alone.
//!
//! [`LongBuf`] 抽象随机访问的 `i64` 存储（堆内存、文件映射等）。
//! [`sort`] 结合自然归并排序、双轴快速排序与插入排序，仅通过该接口工作。
//!
//! ```rust
//! use lsdb_sort::{ByteLongBuf, LongBuf, sort, sort_range};
//!
//! let mut ts = vec![30i64, 10, 20];
//! sort(&mut ts);
//! assert_eq!(ts, [10, 20, 30]);
//!
//! let mut buf = ByteLongBuf::zeroed(4);
//! for (i, v) in [4i64, 3, 2, 1].into_iter().enumerate() {
//!   buf.set(i, v);
//! }
//! sort_range(&mut buf, 1..4).unwrap();
//! assert_eq!((0..4).map(|i| buf.get(i)).collect::<Vec<_>>(), [4, 1, 2, 3]);
//! ```

mod buf;
mod byte_buf;
pub mod consts;
pub mod error;
mod sort;

pub use buf::LongBuf;
pub use byte_buf::ByteLongBuf;
pub use error::{Error, Result};
pub use sort::{sort, sort_range, sort_range_with};
