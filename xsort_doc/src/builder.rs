//! Incremental tree builder / 增量树构建器

use crate::{
  Doc, Error, Kind, NodeId, QName, Result, SlotAlloc, Token,
  node::Data,
};

/// Builds a [`Doc`] from construction events in document order
/// 按文档顺序接收构建事件并生成 [`Doc`]
///
/// Tokens are assigned as each node is created and never recomputed.
/// 令牌在节点创建时分配，之后不再重新计算。
#[derive(Debug)]
pub struct Builder<'a> {
  alloc: &'a SlotAlloc,
  doc: Doc,
  /// Open structural nodes, root at the bottom
  /// 打开的结构节点栈，栈底为根
  stack: Vec<NodeId>,
  /// Nearest preceding structural token in document order
  /// 文档顺序中最近的前驱结构令牌
  prev: Token,
  steps: u32,
  last_text: Option<NodeId>,
}

impl<'a> Builder<'a> {
  /// Start a document; the root takes the next slot
  /// 开始一个文档；根节点占用下一个槽位
  pub fn new(alloc: &'a SlotAlloc) -> Result<Self> {
    let token = alloc.token()?;
    let mut doc = Doc { nodes: Vec::new() };
    let root = doc.push(Data::new(Kind::Root, token, None))?;
    Ok(Self {
      alloc,
      doc,
      stack: vec![root],
      prev: token,
      steps: 0,
      last_text: None,
    })
  }

  #[inline]
  fn top(&self) -> NodeId {
    // stack never drops below the root
    // 栈中始终保留根节点
    self.stack[self.stack.len() - 1]
  }

  /// Currently open element (not the root)
  /// 当前打开的元素（不含根）
  fn open_elem(&self) -> Result<NodeId> {
    if self.stack.len() < 2 {
      return Err(Error::NoOpenElement);
    }
    Ok(self.top())
  }

  /// Open an element
  /// 打开一个元素
  pub fn start(&mut self, name: QName) -> Result<NodeId> {
    let parent = self.top();
    let token = self.alloc.token()?;
    let mut data = Data::new(Kind::Elem, token, Some(parent));
    data.name = Some(name);
    let id = self.doc.push(data)?;
    self.doc.data_mut(parent)?.children.push(id);
    self.stack.push(id);
    self.prev = token;
    self.steps = 0;
    self.last_text = None;
    Ok(id)
  }

  /// Declare a namespace on the open element
  /// 在当前元素上声明命名空间
  pub fn ns(&mut self, prefix: &str, uri: &str) -> Result<NodeId> {
    let owner = self.open_elem()?;
    let o = self.doc.data(owner)?;
    let i = u32::try_from(o.ns.len() + 1).map_err(|_| Error::Overflow { what: "namespace" })?;
    let token = Token::ns(o.token, i)?;
    let mut data = Data::new(Kind::Ns, token, Some(owner));
    data.name = Some(QName::local(prefix));
    data.val = uri.to_owned();
    let id = self.doc.push(data)?;
    self.doc.data_mut(owner)?.ns.push(id);
    Ok(id)
  }

  /// Add an attribute to the open element
  /// 为当前元素添加属性
  pub fn attr(&mut self, name: QName, val: &str) -> Result<NodeId> {
    let owner = self.open_elem()?;
    let o = self.doc.data(owner)?;
    let i = u32::try_from(o.attrs.len()).map_err(|_| Error::Overflow { what: "attribute" })?;
    let token = Token::attr(o.token, i)?;
    let mut data = Data::new(Kind::Attr, token, Some(owner));
    data.name = Some(name);
    data.val = val.to_owned();
    let id = self.doc.push(data)?;
    self.doc.data_mut(owner)?.attrs.push(id);
    Ok(id)
  }

  fn leaf(&mut self, kind: Kind, name: Option<QName>, val: &str) -> Result<NodeId> {
    let parent = self.top();
    let steps = self.steps.checked_add(1).ok_or(Error::Overflow { what: "child" })?;
    let token = Token::child(self.prev, steps)?;
    let mut data = Data::new(kind, token, Some(parent));
    data.name = name;
    data.val = val.to_owned();
    let id = self.doc.push(data)?;
    self.doc.data_mut(parent)?.children.push(id);
    self.steps = steps;
    Ok(id)
  }

  /// Append character data; adjacent text merges into one node
  /// 追加字符数据；相邻文本合并为一个节点
  pub fn text(&mut self, s: &str) -> Result<NodeId> {
    if let Some(id) = self.last_text {
      self.doc.data_mut(id)?.val.push_str(s);
      return Ok(id);
    }
    let id = self.leaf(Kind::Text, None, s)?;
    self.last_text = Some(id);
    Ok(id)
  }

  pub fn comment(&mut self, s: &str) -> Result<NodeId> {
    self.last_text = None;
    self.leaf(Kind::Comment, None, s)
  }

  /// Processing instruction: `target` becomes the node name
  /// 处理指令：`target` 作为节点名
  pub fn pi(&mut self, target: &str, data: &str) -> Result<NodeId> {
    self.last_text = None;
    self.leaf(Kind::Pi, Some(QName::local(target)), data)
  }

  /// Close the open element
  /// 关闭当前元素
  pub fn end(&mut self) -> Result<()> {
    if self.stack.len() < 2 {
      return Err(Error::Unbalanced);
    }
    self.stack.pop();
    self.last_text = None;
    Ok(())
  }

  /// Depth of open elements
  /// 打开的元素层数
  #[inline]
  pub fn depth(&self) -> usize {
    self.stack.len() - 1
  }

  pub fn finish(self) -> Result<Doc> {
    let open = self.depth();
    if open != 0 {
      return Err(Error::Unclosed(open));
    }
    log::debug!(
      "doc built: {} node(s), next slot {}",
      self.doc.nodes.len(),
      self.alloc.peek()
    );
    Ok(self.doc)
  }
}
