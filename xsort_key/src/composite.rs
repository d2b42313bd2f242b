//! Composite keys and the multi-key comparer
//! 组合键与多键比较器

use std::{cmp::Ordering, sync::Arc};

use xsort_cmp::{Comparer, DocOrder, Registry, Val};
use xsort_doc::Node;

use crate::{Ctx, Error, Result, SortKey};

/// A node with the value of every sort key, in key order
/// 节点及其每个排序键的值（按键顺序）
#[derive(Debug, Clone)]
pub struct CompositeKey<N> {
  node: N,
  vals: Box<[String]>,
}

impl<N> CompositeKey<N> {
  /// Evaluate each key's select expression against `node` exactly once
  /// 对 `node` 上每个键的选择表达式只求值一次
  pub fn new<C: Ctx<Node = N>>(keys: &[SortKey<C::Expr>], node: N, ctx: &C) -> Result<Self> {
    let vals = keys
      .iter()
      .map(|k| ctx.key(k.select(), &node))
      .collect::<Result<_>>()?;
    Ok(Self { node, vals })
  }

  #[inline]
  pub fn node(&self) -> &N {
    &self.node
  }

  #[inline]
  pub fn vals(&self) -> &[String] {
    &self.vals
  }

  #[inline]
  pub fn into_node(self) -> N {
    self.node
  }
}

/// Compares composite keys key by key, then by document order
/// 逐键比较组合键，全部相同时按文档顺序
#[derive(Debug, Clone)]
pub struct MultiKeyCmp {
  cmps: Box<[Arc<dyn Comparer>]>,
}

impl MultiKeyCmp {
  /// Take each key's comparer once for this sort
  /// 为本次排序获取每个键的比较器
  pub fn new<C: Ctx>(keys: &[SortKey<C::Expr>], ctx: &C, reg: &Registry) -> Result<Self> {
    let cmps = keys
      .iter()
      .map(|k| k.comparer(ctx, reg))
      .collect::<Result<_>>()?;
    Ok(Self { cmps })
  }

  pub fn from_cmps(cmps: impl IntoIterator<Item = Arc<dyn Comparer>>) -> Self {
    Self {
      cmps: cmps.into_iter().collect(),
    }
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.cmps.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.cmps.is_empty()
  }

  /// Distinct nodes never compare equal
  /// 不同节点永不相等
  pub fn cmp<N: Node>(&self, a: &CompositeKey<N>, b: &CompositeKey<N>) -> Result<Ordering> {
    for k in [a, b] {
      if k.vals.len() != self.cmps.len() {
        return Err(Error::KeyCount {
          expect: self.cmps.len(),
          got: k.vals.len(),
        });
      }
    }
    for ((c, x), y) in self.cmps.iter().zip(a.vals.iter()).zip(b.vals.iter()) {
      let o = c.cmp(Val::Str(x), Val::Str(y))?;
      if o != Ordering::Equal {
        return Ok(o);
      }
    }
    Ok(DocOrder::cmp_nodes(&a.node, &b.node))
  }
}
