//! Variable-length i32
//! 变长 i32

use crate::{Error, Result};

/// Leading byte of the 5-byte form
/// 5 字节形式的首字节
pub const ESCAPE: u8 = 0xff;

/// Encoded size of `v` in bytes (1..=5)
/// `v` 编码后的字节数 (1..=5)
#[inline]
pub const fn encoded_len(v: i32) -> usize {
  match v {
    0..0x80 => 1,
    0x80..0x4000 => 2,
    0x4000..0x20_0000 => 3,
    0x20_0000..0x1000_0000 => 4,
    _ => 5,
  }
}

/// Append encoded `v` to `out`
/// 将 `v` 编码追加到 `out`
pub fn encode_int(out: &mut Vec<u8>, v: i32) {
  let u = v as u32;
  match encoded_len(v) {
    1 => out.push(u as u8),
    2 => out.extend_from_slice(&[(u >> 8) as u8 | 0x80, u as u8]),
    3 => out.extend_from_slice(&[(u >> 16) as u8 | 0xc0, (u >> 8) as u8, u as u8]),
    4 => out.extend_from_slice(&[
      (u >> 24) as u8 | 0xe0,
      (u >> 16) as u8,
      (u >> 8) as u8,
      u as u8,
    ]),
    _ => {
      out.push(ESCAPE);
      out.extend_from_slice(&u.to_be_bytes());
    }
  }
}

/// Total size announced by a leading byte, `None` for an unknown prefix
/// 首字节声明的总长度，未知前缀返回 `None`
#[inline]
const fn tagged_len(b: u8) -> Option<usize> {
  if b & 0x80 == 0 {
    Some(1)
  } else if b & 0xc0 == 0x80 {
    Some(2)
  } else if b & 0xe0 == 0xc0 {
    Some(3)
  } else if b & 0xf0 == 0xe0 {
    Some(4)
  } else if b == ESCAPE {
    Some(5)
  } else {
    None
  }
}

/// Decode one i32 and advance the cursor past it
/// 解码一个 i32 并将游标移过它
///
/// The cursor is untouched on error.
/// 出错时游标不变。
pub fn decode_int(cur: &mut &[u8]) -> Result<i32> {
  let bin = *cur;
  let Some(&b) = bin.first() else {
    return Err(Error::TruncatedInput { need: 1, remain: 0 });
  };
  let Some(n) = tagged_len(b) else {
    log::warn!("invalid int prefix {b:#04x}");
    return Err(Error::MalformedEncoding { prefix: b });
  };
  if bin.len() < n {
    return Err(Error::TruncatedInput {
      need: n,
      remain: bin.len(),
    });
  }

  let v = if n == 5 {
    u32::from_be_bytes([bin[1], bin[2], bin[3], bin[4]])
  } else {
    // Strip the n-bit tag, then fold in the following bytes
    // 去掉 n 位标记，再拼接后续字节
    let head = (b & (0xff >> n)) as u32;
    bin[1..n].iter().fold(head, |acc, &x| (acc << 8) | x as u32)
  };

  *cur = &bin[n..];
  Ok(v as i32)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tag_table() {
    assert_eq!(tagged_len(0x00), Some(1));
    assert_eq!(tagged_len(0x7f), Some(1));
    assert_eq!(tagged_len(0x80), Some(2));
    assert_eq!(tagged_len(0xbf), Some(2));
    assert_eq!(tagged_len(0xc0), Some(3));
    assert_eq!(tagged_len(0xdf), Some(3));
    assert_eq!(tagged_len(0xe0), Some(4));
    assert_eq!(tagged_len(0xef), Some(4));
    assert_eq!(tagged_len(0xff), Some(5));
    for b in 0xf0..0xff {
      assert_eq!(tagged_len(b), None, "{b:#x}");
    }
  }
}
