use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for operations that can produce FindError
pub type FindResult<T> = Result<T, FindError>;

/// rust-search 的自定义错误类型
#[derive(Debug, Error)]
pub enum FindError {
    /// 文件未找到
    #[error("文件未找到: {}", .0.display())]
    FileNotFound(PathBuf),

    /// 权限不足
    #[error("权限不足: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// 文件系统错误（其他IO错误，例如不是目录）
    #[error("文件系统错误 {}: {source}", path.display())]
    FilesystemError {
        #[source]
        source: io::Error,
        path: PathBuf,
    },

    /// 无法写出匹配结果
    #[error("输出错误: {0}")]
    Output(#[source] io::Error),

    /// 深度限制不是正整数
    #[error("无效的深度限制: {0}")]
    InvalidDepthLimit(String),
}

impl FindError {
    /// 根据 IO 错误的类型构造对应的错误
    pub fn from_io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => FindError::FileNotFound(path),
            io::ErrorKind::PermissionDenied => FindError::PermissionDenied(path),
            _ => FindError::FilesystemError { source: err, path },
        }
    }

    /// 该错误是否只影响单个子树（父级遍历可以继续处理兄弟条目）
    pub fn is_subtree_local(&self) -> bool {
        matches!(
            self,
            FindError::FileNotFound(_)
                | FindError::PermissionDenied(_)
                | FindError::FilesystemError { .. }
        )
    }
}
