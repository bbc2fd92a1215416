#![cfg_attr(docsrs, feature(doc_cfg))]

//! # lsdb_codec - Compact binary codec for log records / 日志记录紧凑二进制编解码
//!
//! Variable-length `i32` with a unary length tag in the leading byte, and
//! length-prefixed UTF-8 strings.
//! 首字节带一元长度标记的变长 `i32`，以及长度前缀的 UTF-8 字符串。
//!
//! | Range / 范围 | Bytes / 字节 | Leading bits / 首字节高位 |
//! |--------------|------|---------|
//! | `[0, 0x80)` | 1 | `0` |
//! | `[0x80, 0x4000)` | 2 | `10` |
//! | `[0x4000, 0x200000)` | 3 | `110` |
//! | `[0x200000, 0x10000000)` | 4 | `1110` |
//! | other (negative included) / 其他（含负数） | 5 | `0xFF` + big-endian i32 |
//!
//! ```rust
//! use lsdb_codec::{decode_int, decode_str, encode_int, encode_str};
//!
//! let mut out = Vec::new();
//! encode_int(&mut out, 300);
//! encode_str(&mut out, "hello");
//!
//! let mut cur = out.as_slice();
//! assert_eq!(decode_int(&mut cur).unwrap(), 300);
//! assert_eq!(decode_str(&mut cur).unwrap(), "hello");
//! assert!(cur.is_empty());
//! ```

pub mod error;
mod int;
mod string;

pub use error::{Error, Result};
pub use int::{ESCAPE, decode_int, encode_int, encoded_len};
pub use string::{decode_str, decode_string, encode_str};
