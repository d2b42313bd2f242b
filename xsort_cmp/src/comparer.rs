//! Comparator contract / 比较器契约

use std::{cmp::Ordering, fmt::Debug, sync::Arc};

use xsort_doc::{Node, Token};

use crate::{Error, Result, Val};

/// Total order over the values a comparator accepts
/// 比较器所接受值域上的全序
///
/// A value outside the domain is an [`Error::Mismatch`], never `Equal`.
/// 值域外的值返回 [`Error::Mismatch`]，而不是 `Equal`。
pub trait Comparer: Debug + Send + Sync {
  fn cmp(&self, a: Val<'_>, b: Val<'_>) -> Result<Ordering>;

  /// Descending comparison used by [`Rev`]; the negation of [`Comparer::cmp`]
  /// unless the comparator pins some values to one end
  /// [`Rev`] 使用的降序比较；默认为 [`Comparer::cmp`] 取反，除非比较器将某些值固定在一端
  #[inline]
  fn cmp_rev(&self, a: Val<'_>, b: Val<'_>) -> Result<Ordering> {
    self.cmp(a, b).map(Ordering::reverse)
  }

  /// Name used in diagnostics
  /// 诊断信息中使用的名称
  fn name(&self) -> &'static str;
}

impl<T: Comparer + ?Sized> Comparer for Arc<T> {
  #[inline]
  fn cmp(&self, a: Val<'_>, b: Val<'_>) -> Result<Ordering> {
    (**self).cmp(a, b)
  }

  #[inline]
  fn cmp_rev(&self, a: Val<'_>, b: Val<'_>) -> Result<Ordering> {
    (**self).cmp_rev(a, b)
  }

  #[inline]
  fn name(&self) -> &'static str {
    (**self).name()
  }
}

#[inline]
pub(crate) fn mismatch(cmp: &'static str, expect: &'static str, got: Val<'_>) -> Error {
  Error::Mismatch {
    cmp,
    expect,
    got: got.kind(),
  }
}

/// Descending order of an inner comparator; errors pass through
/// 内部比较器的降序；错误原样传递
#[derive(Debug, Clone)]
pub struct Rev(pub Arc<dyn Comparer>);

impl Rev {
  pub fn new(inner: Arc<dyn Comparer>) -> Self {
    Self(inner)
  }

  #[inline]
  pub fn inner(&self) -> &Arc<dyn Comparer> {
    &self.0
  }
}

impl Comparer for Rev {
  #[inline]
  fn cmp(&self, a: Val<'_>, b: Val<'_>) -> Result<Ordering> {
    self.0.cmp_rev(a, b)
  }

  #[inline]
  fn cmp_rev(&self, a: Val<'_>, b: Val<'_>) -> Result<Ordering> {
    self.0.cmp(a, b)
  }

  fn name(&self) -> &'static str {
    "reverse"
  }
}

/// Document order of node tokens
/// 节点令牌的文档顺序
///
/// Equal tokens mean the same node.
/// 令牌相等即为同一节点。
#[derive(Debug, Clone, Copy, Default)]
pub struct DocOrder;

impl DocOrder {
  #[inline]
  fn token(v: Val<'_>) -> Result<Token> {
    match v {
      Val::Node(t) => Ok(t),
      other => Err(mismatch("document-order", "node", other)),
    }
  }

  /// Compare two node handles directly
  /// 直接比较两个节点句柄
  #[inline]
  pub fn cmp_nodes<N: Node + ?Sized>(a: &N, b: &N) -> Ordering {
    a.token().cmp(&b.token())
  }
}

impl Comparer for DocOrder {
  #[inline]
  fn cmp(&self, a: Val<'_>, b: Val<'_>) -> Result<Ordering> {
    Ok(Self::token(a)?.cmp(&Self::token(b)?))
  }

  fn name(&self) -> &'static str {
    "document-order"
  }
}
