//! 名称查找模块
//!
//! 这个模块提供了目录树的递归遍历和按名称过滤的功能，
//! 匹配结果在发现时立即写入输出端。

pub mod filter;
pub mod options;
pub mod sink;
pub mod walker;

use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::FindResult;
pub use self::filter::{EntryKind, FileFilter, SearchFilter};
pub use self::options::SearchOptions;
pub use self::sink::{MatchSink, PathLines};
pub use self::walker::SearchWalker;

/// 名称查找器
///
/// 持有一份不可变的查找选项，可以对多个根目录重复使用。
#[derive(Debug, Clone, Default)]
pub struct Finder {
    options: SearchOptions,
}

impl Finder {
    /// 创建新的查找器实例
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    /// 在 `root` 下查找名称包含 `term` 的条目，并逐个写入 `sink`
    pub fn search<P, S>(&self, root: P, term: &str, sink: &mut S) -> FindResult<()>
    where
        P: AsRef<Path>,
        S: MatchSink + ?Sized,
    {
        debug!("Searching in {} for '{}'", root.as_ref().display(), term);
        SearchWalker::new(term, &self.options).walk(root, sink)
    }

    /// 在 `root` 下查找并收集所有匹配路径
    pub fn find<P: AsRef<Path>>(&self, root: P, term: &str) -> FindResult<Vec<PathBuf>> {
        let mut results = Vec::new();
        self.search(root, term, &mut results)?;
        Ok(results)
    }
}
