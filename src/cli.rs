//! search 工具的命令行接口
//!
//! 本模块提供了search工具的命令行接口，
//! 包括参数解析和验证功能。

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::errors::FindError;
use crate::finder::options::SearchOptions;

/// 按名称递归查找目录和文件
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    override_usage = "rust-search [-defhH] [-l depth-limit] [directory] [search-pattern]"
)]
pub struct Cli {
    /// 只显示目录（不显示文件）
    #[arg(short = 'd')]
    pub dirs_only: bool,

    /// 精确匹配搜索词，不报告部分匹配
    #[arg(short = 'e')]
    pub exact: bool,

    /// 只显示文件（不显示目录）
    #[arg(short = 'f')]
    pub files_only: bool,

    /// 显示隐藏文件
    #[arg(short = 'h')]
    pub hidden: bool,

    /// 深度限制，例如 2 表示最多进入两层目录
    #[arg(
        short = 'l',
        value_name = "depth-limit",
        value_parser = parse_depth_limit,
        allow_hyphen_values = true
    )]
    pub depth_limit: Option<usize>,

    /// 启用调试日志
    #[arg(long)]
    pub debug: bool,

    /// 显示帮助信息
    #[arg(short = 'H', long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    /// 搜索目录（默认：当前目录）
    #[arg(value_name = "directory", default_value = ".")]
    pub directory: PathBuf,

    /// 搜索词（默认：空，匹配所有名称）
    #[arg(value_name = "search-pattern")]
    pub pattern: Option<String>,
}

impl Cli {
    /// 构建查找选项
    pub fn build_options(&self) -> SearchOptions {
        SearchOptions::from_cli(self)
    }

    /// 获取搜索词
    pub fn term(&self) -> &str {
        self.pattern.as_deref().unwrap_or("")
    }
}

/// 深度限制必须是正整数
fn parse_depth_limit(value: &str) -> Result<usize, FindError> {
    match value.trim().parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(FindError::InvalidDepthLimit(value.to_string())),
    }
}
