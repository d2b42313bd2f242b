//! Error types / 错误类型

use thiserror::Error;

use crate::NodeId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// A token sub-range or the slot counter is exhausted
  /// 令牌子区间或槽位计数器耗尽
  #[error("{what} overflow")]
  Overflow { what: &'static str },

  /// Namespace or attribute added while no element is open
  /// 没有打开的元素时添加命名空间或属性
  #[error("no open element")]
  NoOpenElement,

  /// `end` called on the root
  /// 在根节点上调用 `end`
  #[error("unbalanced end")]
  Unbalanced,

  /// `finish` called with open elements
  /// 仍有未关闭的元素时调用 `finish`
  #[error("{0} element(s) still open")]
  Unclosed(usize),

  #[error("node {0:?} detached")]
  Detached(NodeId),

  #[error("root can not be detached")]
  Root,
}
