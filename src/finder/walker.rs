//! 文件系统遍历功能
//!
//! 本模块以深度优先的方式递归遍历目录树，并把名称匹配的条目立即交给输出端。
//!
//! 深度限制的语义：进入某一层目录后，只要 `depth` 等于 `max_depth`，
//! 这一层剩余的全部条目都会被放弃，而不是只跳过当前条目。
//! 遍历不记录已访问的目录；条目类型不跟随符号链接，所以符号链接不会被递归。

use std::fs;
use std::path::Path;

use log::{debug, error, trace, warn};

use super::filter::{EntryKind, FileFilter, SearchFilter};
use super::options::SearchOptions;
use super::sink::MatchSink;
use crate::errors::{FindError, FindResult};

/// 使用给定选项和搜索词遍历目录树
#[derive(Debug, Clone, Copy)]
pub struct SearchWalker<'a> {
    options: &'a SearchOptions,
    filter: SearchFilter<'a>,
}

impl<'a> SearchWalker<'a> {
    /// 使用给定搜索词和选项创建新的 SearchWalker
    pub fn new(term: &'a str, options: &'a SearchOptions) -> Self {
        Self {
            options,
            filter: SearchFilter::new(term, options),
        }
    }

    /// 从根目录（深度 0）开始遍历
    ///
    /// 根目录无法打开时返回错误；更深层的子树打开失败只会被记录，不影响返回值。
    pub fn walk<P, S>(&self, root: P, sink: &mut S) -> FindResult<()>
    where
        P: AsRef<Path>,
        S: MatchSink + ?Sized,
    {
        let root = root.as_ref();
        debug!("Walking {} ({})", root.display(), self.filter.description());
        self.traverse(root, 0, sink)
    }

    /// 遍历 `dir` 这一层及其子树
    pub fn traverse<S>(&self, dir: &Path, depth: usize, sink: &mut S) -> FindResult<()>
    where
        S: MatchSink + ?Sized,
    {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                error!("Error reading directory {}: {}", dir.display(), e);
                return Err(FindError::from_io(e, dir));
            }
        };
        trace!("Entering {} at depth {}", dir.display(), depth);

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    error!("Error reading directory entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            let file_name = entry.file_name();
            // read_dir 已经过滤掉了 "." 和 ".."，这里与列目录的约定保持一致
            if file_name.as_os_str() == "." || file_name.as_os_str() == ".." {
                continue;
            }

            if self.options.max_depth == Some(depth) {
                trace!("Depth limit reached in {}", dir.display());
                return Ok(());
            }

            let kind = match entry.file_type() {
                Ok(file_type) => EntryKind::from(file_type),
                Err(e) => {
                    warn!("Cannot determine type of {}: {}", entry.path().display(), e);
                    EntryKind::Other
                }
            };

            let path = dir.join(&file_name);
            if self.filter.matches(&file_name, kind) {
                sink.emit(&path).map_err(FindError::Output)?;
            }

            if kind == EntryKind::Directory {
                // 子树的打开失败已在子调用中记录，继续处理兄弟条目
                if let Err(e) = self.traverse(&path, depth + 1, sink) {
                    if !e.is_subtree_local() {
                        return Err(e);
                    }
                }
            }
        }

        Ok(())
    }
}
