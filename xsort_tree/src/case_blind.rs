//! Case-blind ASCII membership set
//! 忽略大小写的 ASCII 成员集合

use hipstr::HipStr;

use crate::{Error, Result};

/// Bytes that take part in the hash
/// 参与哈希的字节数
const HASH_LEN: usize = 24;

/// Fixed-capacity open-addressing set of ASCII strings
/// 固定容量、开放寻址的 ASCII 字符串集合
///
/// Matching ignores ASCII case. The capacity never grows; inserting into a
/// full set fails with [`Error::Full`].
/// 匹配忽略 ASCII 大小写。容量不会增长；向已满集合插入返回 [`Error::Full`]。
#[derive(Debug, Clone)]
pub struct CaseBlindSet {
  slots: Box<[Option<HipStr<'static>>]>,
  len: usize,
}

impl CaseBlindSet {
  pub fn new(cap: usize) -> Self {
    Self {
      slots: vec![None; cap.max(1)].into_boxed_slice(),
      len: 0,
    }
  }

  /// `b & 0xDF` folds ASCII letters to upper case
  /// `b & 0xDF` 将 ASCII 字母折叠为大写
  #[inline]
  fn hash(s: &str) -> usize {
    s.bytes()
      .take(HASH_LEN)
      .fold(0usize, |h, b| (h << 1).wrapping_add((b & 0xDF) as usize))
  }

  /// Probe from the home slot; `Ok` is the matching slot, `Err` the first free one
  /// 从起始槽位探测；`Ok` 为匹配槽位，`Err` 为第一个空槽位
  fn probe(&self, s: &str) -> Option<std::result::Result<usize, usize>> {
    let cap = self.slots.len();
    let home = Self::hash(s) % cap;
    (0..cap).map(|i| (home + i) % cap).find_map(|at| match &self.slots[at] {
      None => Some(Err(at)),
      Some(x) if x.eq_ignore_ascii_case(s) => Some(Ok(at)),
      Some(_) => None,
    })
  }

  /// Add `s`; `false` if an equal string is already present
  /// 添加 `s`；若已存在相等字符串则返回 `false`
  pub fn insert(&mut self, s: &str) -> Result<bool> {
    match self.probe(s) {
      Some(Ok(_)) => Ok(false),
      Some(Err(at)) => {
        self.slots[at] = Some(s.to_owned().into());
        self.len += 1;
        Ok(true)
      }
      None => {
        log::warn!("case-blind set full, {s:?} rejected");
        Err(Error::Full(self.slots.len()))
      }
    }
  }

  pub fn contains(&self, s: &str) -> bool {
    matches!(self.probe(s), Some(Ok(_)))
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  #[inline]
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }
}
