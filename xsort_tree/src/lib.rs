#![cfg_attr(docsrs, feature(doc_cfg))]

//! xsort_tree - Ordered containers over a pluggable comparer
//! 基于可插拔比较器的有序容器

mod case_blind;
mod conf;
mod error;
mod tree;

pub use case_blind::CaseBlindSet;
pub use conf::{Conf, ParsedConf};
pub use error::{Error, Result};
pub use tree::{BinaryTree, Iter};
