//! Multi-key node sort / 多键节点排序

use std::cmp::Ordering;

use xsort_cmp::Registry;
use xsort_doc::Node;

use crate::{CompositeKey, Ctx, MultiKeyCmp, Result, SortKey};

/// Stable bottom-up merge sort of indices; stops at the first error
/// 自底向上的稳定归并排序（对下标）；遇到第一个错误即停止
fn sort_idx(
  n: usize,
  mut cmp: impl FnMut(usize, usize) -> Result<Ordering>,
) -> Result<Vec<usize>> {
  let mut src: Vec<usize> = (0..n).collect();
  let mut dst = vec![0; n];
  let mut width = 1;
  while width < n {
    let mut lo = 0;
    while lo < n {
      let mid = (lo + width).min(n);
      let hi = (lo + 2 * width).min(n);
      let (mut i, mut j, mut k) = (lo, mid, lo);
      while i < mid && j < hi {
        // left wins ties
        if cmp(src[j], src[i])? == Ordering::Less {
          dst[k] = src[j];
          j += 1;
        } else {
          dst[k] = src[i];
          i += 1;
        }
        k += 1;
      }
      let rest = mid - i;
      dst[k..k + rest].copy_from_slice(&src[i..mid]);
      dst[k + rest..hi].copy_from_slice(&src[j..hi]);
      lo = hi;
    }
    std::mem::swap(&mut src, &mut dst);
    width *= 2;
  }
  Ok(src)
}

/// Sort `nodes` by `keys`
/// 按 `keys` 对 `nodes` 排序
///
/// Each key is evaluated once per node; the first comparer error aborts the
/// sort and is returned.
/// 每个节点的每个键只求值一次；第一个比较错误会中止排序并返回。
pub fn sort<C>(
  keys: &[SortKey<C::Expr>],
  nodes: impl IntoIterator<Item = C::Node>,
  ctx: &C,
  reg: &Registry,
) -> Result<Vec<C::Node>>
where
  C: Ctx,
  C::Node: Node,
{
  let cmp = MultiKeyCmp::new(keys, ctx, reg)?;
  let li = nodes
    .into_iter()
    .map(|n| CompositeKey::new(keys, n, ctx))
    .collect::<Result<Vec<_>>>()?;
  let order = sort_idx(li.len(), |a, b| cmp.cmp(&li[a], &li[b]))?;

  let mut slot: Vec<Option<CompositeKey<C::Node>>> = li.into_iter().map(Some).collect();
  Ok(
    order
      .into_iter()
      .filter_map(|i| slot[i].take().map(CompositeKey::into_node))
      .collect(),
  )
}
