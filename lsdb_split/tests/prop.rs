//! Splitter property tests / 切分器属性测试

use std::io::{self, Read};

use lsdb_split::{Conf, Splitter};
use proptest::prelude::*;

/// Left-to-right non-overlapping split, the behaviour of `str::split`
/// 从左到右不重叠切分，与 `str::split` 行为一致
fn naive(data: &[u8], delim: &[u8]) -> Vec<Vec<u8>> {
  let mut out = Vec::new();
  let (mut s, mut i) = (0, 0);
  while i + delim.len() <= data.len() {
    if &data[i..i + delim.len()] == delim {
      out.push(data[s..i].to_vec());
      i += delim.len();
      s = i;
    } else {
      i += 1;
    }
  }
  out.push(data[s..].to_vec());
  out
}

struct Chunks {
  data: Vec<u8>,
  pos: usize,
  sizes: Vec<usize>,
  n: usize,
}

impl Read for Chunks {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let size = self.sizes[self.n % self.sizes.len()];
    self.n += 1;
    let n = size.min(buf.len()).min(self.data.len() - self.pos);
    buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
    self.pos += n;
    Ok(n)
  }
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(500))]

  /// Any chunking and buffer step gives the naive split
  /// 任意分块与缓冲区步长都得到朴素切分的结果
  #[test]
  fn prop_split(
    data in prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'X']), 0..200),
    delim in prop::collection::vec(prop::sample::select(vec![b'a', b'X']), 1..4),
    sizes in prop::collection::vec(1usize..9, 1..5),
    step in 1usize..10,
  ) {
    let want = naive(&data, &delim);
    let src = Chunks { data, pos: 0, sizes, n: 0 };
    let mut s = Splitter::with_conf(src, &delim, &[Conf::BufStep(step)]);
    let mut got = Vec::new();
    while s.read_next().unwrap() {
      got.push(s.range().to_vec());
    }
    prop_assert_eq!(got, want);
  }
}
