//! Length-prefixed UTF-8 string
//! 长度前缀的 UTF-8 字符串

use crate::{Error, Result, decode_int, encode_int};

/// Append UTF-8 byte length then the bytes
/// 追加 UTF-8 字节长度，然后是字节本身
pub fn encode_str(out: &mut Vec<u8>, s: &str) {
  // Lengths past i32::MAX cannot be represented by the wire format
  // 超过 i32::MAX 的长度无法在线格式中表示
  debug_assert!(s.len() <= i32::MAX as usize);
  encode_int(out, s.len() as i32);
  out.extend_from_slice(s.as_bytes());
}

/// Decode a string borrowed from the input
/// 解码借用输入的字符串
///
/// The cursor is untouched on error.
/// 出错时游标不变。
pub fn decode_str<'a>(cur: &mut &'a [u8]) -> Result<&'a str> {
  let mut body: &'a [u8] = cur;
  let len = decode_int(&mut body)?;
  // A negative length can only come from corrupt data
  // 负长度只可能来自损坏数据
  let len = usize::try_from(len).map_err(|_| Error::InvalidLen(len))?;
  if body.len() < len {
    return Err(Error::TruncatedInput {
      need: len,
      remain: body.len(),
    });
  }
  let (s, rest) = body.split_at(len);
  let s = std::str::from_utf8(s)?;
  *cur = rest;
  Ok(s)
}

/// Decode an owned string
/// 解码为拥有所有权的字符串
#[inline]
pub fn decode_string(cur: &mut &[u8]) -> Result<String> {
  decode_str(cur).map(str::to_owned)
}
