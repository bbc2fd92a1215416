#![cfg_attr(docsrs, feature(doc_cfg))]

//! # lsdb_split - Delimiter stream splitter / 分隔符流切分器
//!
//! Cuts a byte stream of unknown length into the pieces between delimiter
//! occurrences, buffering only what is not yet surfaced.
//! 将未知长度的字节流切分为分隔符之间的片段，只缓冲尚未交出的字节。
//!
//! ```rust
//! use lsdb_split::Splitter;
//!
//! let mut s = Splitter::new(&b"aXXbXXc"[..], b"XX");
//! let mut out = Vec::new();
//! while s.read_next().unwrap() {
//!   out.push(s.range().to_vec());
//! }
//! assert_eq!(out, [b"a", b"b", b"c"]);
//! ```

pub mod conf;
pub mod error;
mod splitter;

pub use conf::{Conf, ParsedConf};
pub use error::{Error, Result};
pub use splitter::Splitter;
