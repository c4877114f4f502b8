//! 通用辅助函数：
//! - 环境变量读取与解析
//! - 文本到枚举的解析工具

use clap::ValueEnum;
use std::{env, path::PathBuf};

use crate::templates::CiProvider;

/// 可选读取 PATH 环境变量为 PathBuf。
pub(crate) fn env_opt_path(key: &str) -> Option<PathBuf> {
    env_opt_string(key).map(PathBuf::from)
}

/// 可选读取 String 环境变量。
pub(crate) fn env_opt_string(key: &str) -> Option<String> {
    env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// 读取布尔环境变量的真值（1/true/on/yes/y）。
pub(crate) fn env_bool_truthy(key: &str) -> Option<bool> {
    env::var(key).ok().map(|v| parse_truthy(&v))
}

fn parse_truthy(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "on" | "yes" | "y")
}

/// 将字符串解析为 CiProvider（忽略大小写）。
pub(crate) fn parse_ci_provider(s: &str) -> Option<CiProvider> {
    CiProvider::from_str(s.trim(), true).ok()
}
