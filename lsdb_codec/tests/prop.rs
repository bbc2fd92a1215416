//! Codec property tests / 编解码属性测试

use lsdb_codec::{decode_int, decode_str, encode_int, encode_str, encoded_len};
use proptest::prelude::*;

proptest! {
  #![proptest_config(ProptestConfig::with_cases(2000))]

  /// Any i32 survives encode then decode, with the announced size
  /// 任意 i32 编码后解码不变，且大小与预期一致
  #[test]
  fn prop_int(v in any::<i32>()) {
    let mut out = Vec::new();
    encode_int(&mut out, v);
    prop_assert_eq!(out.len(), encoded_len(v));
    let mut cur = out.as_slice();
    prop_assert_eq!(decode_int(&mut cur).unwrap(), v);
    prop_assert!(cur.is_empty());
  }

  /// Any string survives encode then decode
  /// 任意字符串编码后解码不变
  #[test]
  fn prop_str(s in any::<String>()) {
    let mut out = Vec::new();
    encode_str(&mut out, &s);
    let mut cur = out.as_slice();
    prop_assert_eq!(decode_str(&mut cur).unwrap(), s.as_str());
    prop_assert!(cur.is_empty());
  }

  /// Decoding never panics on arbitrary bytes
  /// 任意字节解码不会 panic
  #[test]
  fn prop_garbage(bin in prop::collection::vec(any::<u8>(), 0..16)) {
    let mut cur = bin.as_slice();
    let _ = decode_int(&mut cur);
    let mut cur = bin.as_slice();
    let _ = decode_str(&mut cur);
  }
}
