//! Splitter configuration
//! 切分器配置

/// Default configuration values
/// 默认配置值
pub mod default {
  /// Buffer growth step in bytes
  /// 缓冲区增长步长（字节）
  pub const BUF_STEP: usize = 4096;
}

/// Splitter option
/// 切分器选项
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Bytes added each time the buffer is enlarged
  /// 每次扩大缓冲区时增加的字节数
  BufStep(usize),
}

/// Parsed configuration
/// 解析后的配置
#[derive(Debug, Clone, Copy)]
pub struct ParsedConf {
  pub buf_step: usize,
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self {
      buf_step: default::BUF_STEP,
    }
  }
}

impl ParsedConf {
  pub fn new(conf: &[Conf]) -> Self {
    let mut c = Self::default();
    for item in conf {
      match *item {
        Conf::BufStep(v) => c.buf_step = v.max(1),
      }
    }
    c
  }
}
