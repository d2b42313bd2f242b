//! Slot allocator for structural nodes
//! 结构节点槽位分配器

use std::sync::atomic::{AtomicU32, Ordering};

use crate::{Error, Result, Token};

/// Monotonic slot counter shared by every builder that uses it
/// 单调递增的槽位计数器，可被多个构建器共享
///
/// Slots of different documents carry no ordering relationship.
/// 不同文档的槽位之间没有顺序关系。
#[derive(Debug, Default)]
pub struct SlotAlloc(AtomicU32);

impl SlotAlloc {
  pub const fn new() -> Self {
    Self(AtomicU32::new(0))
  }

  /// Start counting from `base`
  /// 从 `base` 开始计数
  pub const fn with_base(base: u32) -> Self {
    Self(AtomicU32::new(base))
  }

  /// Take the next slot
  /// 获取下一个槽位
  #[inline]
  pub fn next(&self) -> Result<u32> {
    self
      .0
      .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
      .map_err(|_| Error::Overflow { what: "slot" })
  }

  /// Take the next slot as a structural token
  /// 获取下一个槽位并转为结构令牌
  #[inline]
  pub fn token(&self) -> Result<Token> {
    self.next().map(Token::slot)
  }

  /// Slot the next call to [`SlotAlloc::next`] returns
  /// 下一次 [`SlotAlloc::next`] 将返回的槽位
  #[inline]
  pub fn peek(&self) -> u32 {
    self.0.load(Ordering::Relaxed)
  }

  /// Restart numbering; only safe once no live document relies on old slots
  /// 重新编号；仅在没有文档依赖旧槽位时使用
  pub fn reset(&self) {
    self.0.store(0, Ordering::Relaxed);
  }
}
