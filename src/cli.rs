//! CLI 定义模块：仅负责命令行参数结构体与解析

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::templates::CiProvider;

/// 顶层 CLI 入口
#[derive(Parser, Debug)]
#[command(name = "scaffold", about = "Generate starter files for WordPress projects", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// 子命令定义
#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Generate files needed for running tests for a theme
    ThemeTests {
        /// 主题 slug，目录为 <PATH>/wp-content/themes/<SLUG>
        #[arg(value_name = "SLUG")]
        slug: Option<String>,
        /// 非标准主题目录；未给 slug 时取目录名
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        /// CI 配置模板（默认 travis）
        #[arg(long, value_enum, value_name = "PROVIDER")]
        ci: Option<CiProvider>,
        /// 覆盖已存在文件，不再询问
        #[arg(long)]
        force: bool,
        /// WordPress 根目录，默认当前目录
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
    },
}
