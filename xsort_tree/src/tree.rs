//! Unbalanced binary search tree with tombstones
//! 带墓碑标记的非平衡二叉搜索树

use std::{cmp::Ordering, sync::Arc};

use xsort_cmp::{AsVal, Comparer, Order};

use crate::{Conf, Error, ParsedConf, Result};

/// Arena index / 内存池索引
type Idx = usize;

#[derive(Debug, Clone)]
struct Entry<K, V> {
  key: K,
  /// `None` is a tombstone
  /// `None` 为墓碑
  val: Option<V>,
  left: Option<Idx>,
  right: Option<Idx>,
}

impl<K, V> Entry<K, V> {
  #[inline]
  fn new(key: K, val: V) -> Self {
    Self {
      key,
      val: Some(val),
      left: None,
      right: None,
    }
  }
}

/// Ordered key/value container over a [`Comparer`]
/// 基于 [`Comparer`] 的有序键值容器
///
/// Entries are only removed logically; the structure never shrinks or
/// rebalances. Index 0 is the root once anything was inserted.
/// 条目只做逻辑删除；结构不会收缩或再平衡。插入后下标 0 即为根。
#[derive(Debug, Clone)]
pub struct BinaryTree<K, V> {
  nodes: Vec<Entry<K, V>>,
  order: Order,
  dup: bool,
  cmp: Arc<dyn Comparer>,
}

impl<K: AsVal, V> Default for BinaryTree<K, V> {
  fn default() -> Self {
    Self::new([])
  }
}

impl<K: AsVal, V> BinaryTree<K, V> {
  pub fn new(conf: impl IntoIterator<Item = Conf>) -> Self {
    let ParsedConf { order, dup, cmp } = ParsedConf::new(conf);
    Self {
      nodes: Vec::new(),
      order,
      dup,
      cmp,
    }
  }

  #[inline]
  pub fn order(&self) -> Order {
    self.order
  }

  #[inline]
  pub fn is_dup(&self) -> bool {
    self.dup
  }

  #[inline]
  pub fn comparer(&self) -> &Arc<dyn Comparer> {
    &self.cmp
  }

  /// Replace the comparer; tombstones of an otherwise empty tree are dropped
  /// 更换比较器；若树中只剩墓碑则一并清除
  pub fn set_cmp(&mut self, cmp: Arc<dyn Comparer>) -> Result<()> {
    if !self.is_empty() {
      return Err(Error::NotEmpty);
    }
    self.nodes.clear();
    self.cmp = cmp;
    Ok(())
  }

  /// Position of `key` relative to the entry at `at`, direction applied
  /// `key` 相对 `at` 处条目的位置（已应用方向）
  #[inline]
  fn dir(&self, at: Idx, key: &K) -> Result<Ordering> {
    let o = self.cmp.cmp(self.nodes[at].key.as_val(), key.as_val())?;
    Ok(self.order.apply(o))
  }

  /// First structural match of `key`
  /// `key` 的第一个结构匹配
  fn find(&self, key: &K) -> Result<Option<Idx>> {
    let mut cur = if self.nodes.is_empty() { None } else { Some(0) };
    while let Some(at) = cur {
      let e = &self.nodes[at];
      cur = match self.dir(at, key)? {
        Ordering::Equal => return Ok(Some(at)),
        Ordering::Less => e.right,
        Ordering::Greater => e.left,
      };
    }
    Ok(None)
  }

  /// Insert; returns the value replaced, if any
  /// 插入；返回被替换的值（若有）
  ///
  /// With duplicates allowed an equal key goes right, after its equals.
  /// 允许重复时，相等的键放在右侧，位于已有相等键之后。
  pub fn put(&mut self, key: K, val: V) -> Result<Option<V>> {
    if self.nodes.is_empty() {
      self.nodes.push(Entry::new(key, val));
      return Ok(None);
    }
    let mut at = 0;
    loop {
      let o = match self.dir(at, &key)? {
        Ordering::Equal if self.dup => Ordering::Less,
        o => o,
      };
      let id = self.nodes.len();
      let e = &mut self.nodes[at];
      let next = match o {
        Ordering::Equal => return Ok(e.val.replace(val)),
        Ordering::Less => &mut e.right,
        Ordering::Greater => &mut e.left,
      };
      match *next {
        Some(n) => at = n,
        None => {
          *next = Some(id);
          self.nodes.push(Entry::new(key, val));
          return Ok(None);
        }
      }
    }
  }

  /// Value of the first structural match; absent if tombstoned
  /// 第一个结构匹配的值；若为墓碑则不存在
  pub fn get(&self, key: &K) -> Result<Option<&V>> {
    Ok(self.find(key)?.and_then(|at| self.nodes[at].val.as_ref()))
  }

  #[inline]
  pub fn contains(&self, key: &K) -> Result<bool> {
    Ok(self.get(key)?.is_some())
  }

  /// Tombstone the first structural match and return its value
  /// 将第一个结构匹配标为墓碑并返回其值
  pub fn rm(&mut self, key: &K) -> Result<Option<V>> {
    Ok(match self.find(key)? {
      Some(at) => self.nodes[at].val.take(),
      None => None,
    })
  }

  /// Live entries, counted by a full traversal
  /// 存活条目数（完整遍历计数）
  pub fn len(&self) -> usize {
    self.iter().count()
  }

  pub fn is_empty(&self) -> bool {
    self.iter().next().is_none()
  }

  /// In-order live entries
  /// 中序遍历存活条目
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter {
      nodes: &self.nodes,
      stack: Vec::new(),
      cur: if self.nodes.is_empty() { None } else { Some(0) },
    }
  }

  pub fn keys(&self) -> impl Iterator<Item = &K> {
    self.iter().map(|(k, _)| k)
  }

  pub fn vals(&self) -> impl Iterator<Item = &V> {
    self.iter().map(|(_, v)| v)
  }
}

/// Iterative in-order walk; long duplicate chains do not grow the call stack
/// 迭代式中序遍历；长重复链不会增加调用栈
#[derive(Debug)]
pub struct Iter<'a, K, V> {
  nodes: &'a [Entry<K, V>],
  stack: Vec<Idx>,
  cur: Option<Idx>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a V);

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      while let Some(at) = self.cur {
        self.stack.push(at);
        self.cur = self.nodes[at].left;
      }
      let at = self.stack.pop()?;
      let e = &self.nodes[at];
      self.cur = e.right;
      if let Some(v) = &e.val {
        return Some((&e.key, v));
      }
    }
  }
}
