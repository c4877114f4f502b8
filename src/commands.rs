//! 命令调度模块：
//! - 接收解析好的 CLI 参数，结合环境变量计算“有效参数”
//! - 注入真实文件系统与终端，调用脚手架流程

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

use crate::{
    cli::{Cli, Command},
    fs::OsFileSystem,
    prompt::Terminal,
    scaffold::{theme_tests, ScaffoldRequest},
    utils::{env_bool_truthy, env_opt_path, env_opt_string, parse_ci_provider},
};

/// 运行指定的子命令
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::ThemeTests { slug, dir, ci, force, path } => {
            // 环境变量覆盖（若 CLI 未指定）
            let env_path = env_opt_path("SCAFFOLD_WP_PATH");
            let env_ci = env_opt_string("SCAFFOLD_CI");
            let env_force = env_bool_truthy("SCAFFOLD_FORCE").unwrap_or(false);

            // 未知 provider 须在写任何文件之前失败
            let effective_ci = match (ci, env_ci) {
                (Some(c), _) => c,
                (None, Some(name)) => parse_ci_provider(&name)
                    .ok_or_else(|| anyhow!("unknown CI provider in SCAFFOLD_CI: {name}"))?,
                (None, None) => Default::default(),
            };
            let wp_root = path.or(env_path).unwrap_or_else(|| PathBuf::from("."));
            let themes_root = std::path::absolute(wp_root.join("wp-content").join("themes"))
                .with_context(|| format!("cannot resolve themes root: {}", wp_root.display()))?;
            let dir = dir
                .map(|d| std::path::absolute(&d).with_context(|| format!("cannot resolve directory: {}", d.display())))
                .transpose()?;

            let req = ScaffoldRequest {
                slug,
                dir,
                force: force || env_force,
                ci: effective_ci,
            };
            tracing::debug!(?req, themes_root = %themes_root.display(), "theme-tests");
            theme_tests(&OsFileSystem, &mut Terminal, &themes_root, &req)?;
            Ok(())
        }
    }
}
