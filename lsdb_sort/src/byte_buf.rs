//! i64 view over raw bytes
//! 基于原始字节的 i64 视图

use std::ops::DerefMut;

use crate::LongBuf;

const WIDTH: usize = size_of::<i64>();

/// Big-endian `i64` values laid over byte storage
/// 铺设在字节存储上的大端 `i64` 值
///
/// Works over anything that derefs to `[u8]`: `Vec<u8>`, `&mut [u8]`,
/// `memmap2::MmapMut`. Trailing bytes short of a full value are ignored.
/// 适用于任何可解引用为 `[u8]` 的类型：`Vec<u8>`、`&mut [u8]`、
/// `memmap2::MmapMut`。不足一个值的尾部字节被忽略。
#[derive(Debug, Clone, Default)]
pub struct ByteLongBuf<B>(B);

impl ByteLongBuf<Vec<u8>> {
  /// Heap buffer holding `len` zeros
  /// 持有 `len` 个零的堆缓冲区
  pub fn zeroed(len: usize) -> Self {
    Self(vec![0; len * WIDTH])
  }
}

impl<B: DerefMut<Target = [u8]>> ByteLongBuf<B> {
  #[inline]
  pub fn new(bin: B) -> Self {
    Self(bin)
  }

  #[inline]
  pub fn bin(&self) -> &[u8] {
    &self.0
  }

  #[inline]
  pub fn into_inner(self) -> B {
    self.0
  }
}

impl<B: DerefMut<Target = [u8]>> LongBuf for ByteLongBuf<B> {
  #[inline(always)]
  fn len(&self) -> usize {
    self.0.len() / WIDTH
  }

  #[inline(always)]
  fn get(&self, i: usize) -> i64 {
    let o = i * WIDTH;
    let mut b = [0u8; WIDTH];
    b.copy_from_slice(&self.0[o..o + WIDTH]);
    i64::from_be_bytes(b)
  }

  #[inline(always)]
  fn set(&mut self, i: usize, v: i64) {
    let o = i * WIDTH;
    self.0[o..o + WIDTH].copy_from_slice(&v.to_be_bytes());
  }
}
