use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid int prefix {prefix:#04x} / 无效的整数前缀 {prefix:#04x}")]
  MalformedEncoding { prefix: u8 },

  #[error("truncated input: need {need} bytes, remain {remain} / 输入截断：需要 {need} 字节，剩余 {remain}")]
  TruncatedInput { need: usize, remain: usize },

  #[error("negative string length {0} / 字符串长度为负 {0}")]
  InvalidLen(i32),

  #[error("invalid utf8: {0}")]
  InvalidUtf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
