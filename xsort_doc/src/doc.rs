//! Document arena / 文档内存池

use crate::{
  Error, Kind, NodeId, NodeRef, Result,
  node::Data,
};

/// Tree of nodes built once by a [`crate::Builder`]
/// 由 [`crate::Builder`] 一次性构建的节点树
///
/// Detached entries are reclaimed in place; tokens of the remaining nodes never
/// change, so they stay mutually consistent.
/// 被分离的节点就地回收；剩余节点的令牌保持不变，因此相互一致。
#[derive(Debug)]
pub struct Doc {
  pub(crate) nodes: Vec<Option<Data>>,
}

impl Doc {
  pub(crate) fn push(&mut self, data: Data) -> Result<NodeId> {
    let id = u32::try_from(self.nodes.len()).map_err(|_| Error::Overflow { what: "node" })?;
    self.nodes.push(Some(data));
    Ok(NodeId(id))
  }

  pub(crate) fn data(&self, id: NodeId) -> Result<&Data> {
    self
      .nodes
      .get(id.idx())
      .and_then(Option::as_ref)
      .ok_or(Error::Detached(id))
  }

  pub(crate) fn data_mut(&mut self, id: NodeId) -> Result<&mut Data> {
    self
      .nodes
      .get_mut(id.idx())
      .and_then(Option::as_mut)
      .ok_or(Error::Detached(id))
  }

  pub(crate) fn refs<'a>(&'a self, ids: &'a [NodeId]) -> impl Iterator<Item = NodeRef<'a>> + 'a {
    ids.iter().filter_map(move |&id| self.node(id).ok())
  }

  #[inline]
  pub fn root_id(&self) -> NodeId {
    NodeId(0)
  }

  pub fn root(&self) -> NodeRef<'_> {
    match self.node(self.root_id()) {
      Ok(r) => r,
      // root is pushed first by the builder and can not be detached
      // 根节点由构建器最先写入且不可分离
      Err(_) => unreachable!("document without root"),
    }
  }

  pub fn node(&self, id: NodeId) -> Result<NodeRef<'_>> {
    let data = self.data(id)?;
    Ok(NodeRef {
      doc: self,
      id,
      data,
    })
  }

  /// Number of live nodes
  /// 存活节点数
  pub fn len(&self) -> usize {
    self.nodes.iter().filter(|n| n.is_some()).count()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Depth-first walk: node, its namespaces, its attributes, then children
  /// 深度优先遍历：节点、命名空间、属性，然后是子节点
  pub fn iter(&self) -> DocIter<'_> {
    DocIter {
      doc: self,
      stack: vec![self.root_id()],
    }
  }

  /// Unlink a subtree and reclaim its entries
  /// 分离子树并回收其条目
  pub fn detach(&mut self, id: NodeId) -> Result<()> {
    let (kind, parent) = {
      let d = self.data(id)?;
      (d.kind, d.parent)
    };
    let Some(parent) = parent else {
      return Err(Error::Root);
    };
    let p = self.data_mut(parent)?;
    match kind {
      Kind::Ns => p.ns.retain(|&c| c != id),
      Kind::Attr => p.attrs.retain(|&c| c != id),
      _ => p.children.retain(|&c| c != id),
    }

    let mut stack = vec![id];
    let mut freed = 0usize;
    while let Some(cur) = stack.pop() {
      if let Some(data) = self.nodes.get_mut(cur.idx()).and_then(Option::take) {
        freed += 1;
        stack.extend(data.ns);
        stack.extend(data.attrs);
        stack.extend(data.children);
      }
    }
    log::debug!("detach {id:?}: {freed} node(s) reclaimed");
    Ok(())
  }
}

/// Iterator returned by [`Doc::iter`]
/// [`Doc::iter`] 返回的迭代器
#[derive(Debug)]
pub struct DocIter<'a> {
  doc: &'a Doc,
  stack: Vec<NodeId>,
}

impl<'a> Iterator for DocIter<'a> {
  type Item = NodeRef<'a>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      let id = self.stack.pop()?;
      let Ok(node) = self.doc.node(id) else {
        continue;
      };
      let d = node.data;
      self.stack.extend(d.children.iter().rev());
      self.stack.extend(d.attrs.iter().rev());
      self.stack.extend(d.ns.iter().rev());
      return Some(node);
    }
  }
}
