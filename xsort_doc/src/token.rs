//! Document-order token / 文档顺序令牌
//!
//! Layout of the 64-bit token:
//! 64 位令牌布局：
//!
//! ```text
//! structural  slot << 32
//! namespace   owner + i              1 <= i < MAX_NS
//! attribute   owner + ATTR_BASE + i  0 <= i < MAX_ATTR
//! text/c/pi   prev + CHILD_BASE + n  n >= 1, steps since `prev`
//! ```

use crate::{Error, Result};

/// First offset used by attributes of an element
/// 元素属性使用的起始偏移
pub const ATTR_BASE: u64 = 0x8000;

/// First offset used by text, comment and processing-instruction nodes
/// 文本、注释、处理指令节点使用的起始偏移
pub const CHILD_BASE: u64 = 0x10000;

/// Namespace nodes per element (indices are 1-based)
/// 每个元素的命名空间节点数（索引从 1 开始）
pub const MAX_NS: u32 = 0x8000;

/// Attribute nodes per element
/// 每个元素的属性节点数
pub const MAX_ATTR: u32 = 0x8000;

const LOW: u64 = 0xFFFF_FFFF;

/// Comparable document-order token
/// 可比较的文档顺序令牌
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Token(u64);

impl Token {
  /// Token of a structural node
  /// 结构节点的令牌
  #[inline]
  pub const fn slot(slot: u32) -> Self {
    Self((slot as u64) << 32)
  }

  /// Token of the `i`-th namespace node (1-based) of `owner`
  /// `owner` 的第 `i` 个命名空间节点（从 1 开始）
  #[inline]
  pub fn ns(owner: Token, i: u32) -> Result<Self> {
    debug_assert!(owner.is_structural());
    if i == 0 || i >= MAX_NS {
      return Err(Error::Overflow { what: "namespace" });
    }
    Ok(Self(owner.0 + i as u64))
  }

  /// Token of the `i`-th attribute (0-based) of `owner`
  /// `owner` 的第 `i` 个属性（从 0 开始）
  #[inline]
  pub fn attr(owner: Token, i: u32) -> Result<Self> {
    debug_assert!(owner.is_structural());
    if i >= MAX_ATTR {
      return Err(Error::Overflow { what: "attribute" });
    }
    Ok(Self(owner.0 + ATTR_BASE + i as u64))
  }

  /// Token of a non-structural child `steps` positions after `prev`
  /// 位于 `prev` 之后第 `steps` 个非结构子节点的令牌
  #[inline]
  pub fn child(prev: Token, steps: u32) -> Result<Self> {
    debug_assert!(prev.is_structural());
    let off = CHILD_BASE + steps as u64;
    if steps == 0 || off > LOW {
      return Err(Error::Overflow { what: "child" });
    }
    Ok(Self(prev.0 + off))
  }

  #[inline]
  pub const fn get(self) -> u64 {
    self.0
  }

  /// Slot of the structural node this token hangs off
  /// 令牌所属结构节点的槽位
  #[inline]
  pub const fn owner_slot(self) -> u32 {
    (self.0 >> 32) as u32
  }

  #[inline]
  pub const fn is_structural(self) -> bool {
    self.0 & LOW == 0
  }
}

impl From<Token> for u64 {
  #[inline]
  fn from(t: Token) -> u64 {
    t.0
  }
}
