//! 按名称查找文件和目录的库
//!
//! 本库提供了一个小巧的递归名称查找功能，支持：
//! - 深度优先的目录遍历，可选深度限制
//! - 部分匹配或精确匹配
//! - 只显示目录、只显示文件、显示隐藏文件
//! - 详细的错误报告
//!
//! 匹配结果在发现时立即写入输出端，不会在内存中累积。
//!
//! # 示例
//!
//! 基本用法：
//! ```no_run
//! use rust_search::finder::{Finder, PathLines, SearchOptions};
//!
//! // 创建查找器并设置选项
//! let options = SearchOptions::new()
//!     .with_max_depth(Some(3))  // 最多进入三层目录
//!     .with_show_dirs(false);   // 只显示文件
//!
//! let finder = Finder::new(options);
//!
//! // 把匹配路径逐行写到标准输出
//! let mut sink = PathLines::new(std::io::stdout().lock());
//! finder.search(".", "main", &mut sink).unwrap();
//!
//! // 或者收集结果
//! for path in finder.find(".", ".rs").unwrap() {
//!     println!("找到文件: {}", path.display());
//! }
//! ```
//!
//! 更多用法请参考各模块文档。

pub mod cli;
pub mod errors;
pub mod finder;

// Re-export main types for convenience
pub use errors::{FindError, FindResult};
pub use finder::{Finder, SearchOptions};
