use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::debug;

use rust_search::cli::Cli;
use rust_search::finder::{Finder, PathLines};

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

fn main() -> Result<ExitCode> {
    // 解析命令行参数；用法错误在遍历之前报告
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // 与用法错误一样，显示帮助（-H）也以失败状态退出
            let code = if e.use_stderr() || e.kind() == ErrorKind::DisplayHelp {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            e.print().context("写出用法信息失败")?;
            // 取值校验错误不附带用法，这里补上
            if e.kind() == ErrorKind::ValueValidation {
                eprintln!("\n{}", Cli::command().render_usage());
            }
            return Ok(code);
        }
    };

    // 初始化日志
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let options = cli.build_options();
    debug!(
        "Starting search. Directory: {}; Search pattern: {}",
        cli.directory.display(),
        cli.term()
    );
    debug!(
        "Depth limit: {}; Exact match {}; Show files {}; Show dirs {}; Show hidden {}",
        options
            .max_depth
            .map_or_else(|| "none".to_string(), |d| d.to_string()),
        on_off(options.exact_match),
        on_off(options.show_files),
        on_off(options.show_dirs),
        on_off(options.show_hidden),
    );

    let finder = Finder::new(options);
    let stdout = io::stdout();
    let mut sink = PathLines::new(stdout.lock());

    match finder.search(&cli.directory, cli.term(), &mut sink) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // 根目录无法打开，错误已由遍历器记录
        Err(e) if e.is_subtree_local() => Ok(ExitCode::FAILURE),
        Err(e) => Err(e).with_context(|| format!("搜索 {} 失败", cli.directory.display())),
    }
}
