//! Node kinds, names and handles
//! 节点类型、名称与句柄

use crate::{Doc, Token};

/// Node kind / 节点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
  Root,
  Elem,
  Ns,
  Attr,
  Text,
  Comment,
  Pi,
}

impl Kind {
  /// Root and elements own a slot of their own
  /// 根与元素拥有独立的槽位
  #[inline]
  pub const fn is_structural(self) -> bool {
    matches!(self, Kind::Root | Kind::Elem)
  }
}

/// Expanded name: namespace uri plus local part
/// 扩展名：命名空间 URI 加本地名
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QName {
  pub uri: Box<str>,
  pub local: Box<str>,
}

impl QName {
  pub fn new(uri: impl Into<Box<str>>, local: impl Into<Box<str>>) -> Self {
    Self {
      uri: uri.into(),
      local: local.into(),
    }
  }

  /// Name without namespace
  /// 无命名空间的名称
  pub fn local(local: impl Into<Box<str>>) -> Self {
    Self::new("", local)
  }
}

/// Index of a node inside its [`Doc`] arena
/// 节点在 [`Doc`] 内存池中的索引
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
  #[inline]
  pub const fn idx(self) -> usize {
    self.0 as usize
  }
}

/// What the ordering core needs from a node
/// 排序核心对节点的需求
pub trait Node {
  /// Document-order token
  /// 文档顺序令牌
  fn token(&self) -> Token;

  /// Expanded name, if the node kind has one
  /// 扩展名（若节点类型有名称）
  fn name(&self) -> Option<&QName>;

  /// Identity: equal tokens mean the same node
  /// 同一性：令牌相等即为同一节点
  #[inline]
  fn same(&self, other: &Self) -> bool {
    self.token() == other.token()
  }
}

impl<T: Node + ?Sized> Node for &T {
  #[inline]
  fn token(&self) -> Token {
    (**self).token()
  }

  #[inline]
  fn name(&self) -> Option<&QName> {
    (**self).name()
  }
}

#[derive(Debug)]
pub(crate) struct Data {
  pub kind: Kind,
  pub token: Token,
  pub name: Option<QName>,
  pub val: String,
  pub parent: Option<NodeId>,
  pub ns: Vec<NodeId>,
  pub attrs: Vec<NodeId>,
  pub children: Vec<NodeId>,
}

impl Data {
  pub fn new(kind: Kind, token: Token, parent: Option<NodeId>) -> Self {
    Self {
      kind,
      token,
      name: None,
      val: String::new(),
      parent,
      ns: Vec::new(),
      attrs: Vec::new(),
      children: Vec::new(),
    }
  }
}

/// Borrowed handle to a live node
/// 指向存活节点的借用句柄
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
  pub(crate) doc: &'a Doc,
  pub(crate) id: NodeId,
  pub(crate) data: &'a Data,
}

impl<'a> NodeRef<'a> {
  #[inline]
  pub fn id(&self) -> NodeId {
    self.id
  }

  #[inline]
  pub fn kind(&self) -> Kind {
    self.data.kind
  }

  /// String value held directly by the node (text, attribute value, ...)
  /// 节点直接持有的字符串值（文本、属性值等）
  #[inline]
  pub fn val(&self) -> &'a str {
    &self.data.val
  }

  #[inline]
  pub fn qname(&self) -> Option<&'a QName> {
    self.data.name.as_ref()
  }

  pub fn parent(&self) -> Option<NodeRef<'a>> {
    self.data.parent.and_then(|p| self.doc.node(p).ok())
  }

  pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
    self.doc.refs(&self.data.children)
  }

  pub fn attrs(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
    self.doc.refs(&self.data.attrs)
  }

  pub fn ns(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
    self.doc.refs(&self.data.ns)
  }
}

impl Node for NodeRef<'_> {
  #[inline]
  fn token(&self) -> Token {
    self.data.token
  }

  #[inline]
  fn name(&self) -> Option<&QName> {
    self.data.name.as_ref()
  }
}

impl std::fmt::Debug for NodeRef<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("NodeRef")
      .field("id", &self.id)
      .field("kind", &self.data.kind)
      .field("token", &self.data.token)
      .finish()
  }
}

impl PartialEq for NodeRef<'_> {
  fn eq(&self, other: &Self) -> bool {
    self.same(other)
  }
}

impl Eq for NodeRef<'_> {}
