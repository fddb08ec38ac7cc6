//! 匹配结果输出
//!
//! 遍历器每发现一个匹配项就立即交给 `MatchSink`，不在内存中累积。

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// 接收匹配路径的输出端
pub trait MatchSink {
    /// 输出一个匹配路径
    fn emit(&mut self, path: &Path) -> io::Result<()>;
}

/// 收集到内存中（供库调用方和测试使用）
impl MatchSink for Vec<PathBuf> {
    fn emit(&mut self, path: &Path) -> io::Result<()> {
        self.push(path.to_path_buf());
        Ok(())
    }
}

/// 每行输出一个路径
#[derive(Debug)]
pub struct PathLines<W: Write> {
    inner: W,
}

impl<W: Write> PathLines<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> MatchSink for PathLines<W> {
    #[cfg(unix)]
    fn emit(&mut self, path: &Path) -> io::Result<()> {
        use std::os::unix::ffi::OsStrExt;

        // 原样输出字节，非 UTF-8 文件名不做有损转换
        self.inner.write_all(path.as_os_str().as_bytes())?;
        self.inner.write_all(b"\n")
    }

    #[cfg(not(unix))]
    fn emit(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.inner, "{}", path.display())
    }
}
