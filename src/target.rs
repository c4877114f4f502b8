//! 目标解析：由 slug 与 `--dir` 推导主题目录

use std::path::{Component, Path, PathBuf};

use crate::{
    error::{Result, ScaffoldError},
    fs::FileSystem,
};

/// 解析后的目标主题
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedTarget {
    pub(crate) slug: String,
    pub(crate) directory: PathBuf,
}

/// 解析目标目录；只做存在性检查，不产生副作用
pub(crate) fn resolve(
    fs: &dyn FileSystem,
    themes_root: &Path,
    raw_slug: Option<&str>,
    explicit_dir: Option<&Path>,
) -> Result<ResolvedTarget> {
    let mut slug = raw_slug.map(str::trim).filter(|s| !s.is_empty()).map(String::from);
    let mut directory = None;

    if explicit_dir.is_none() {
        if let Some(s) = slug.as_deref() {
            let d = themes_root.join(s);
            if !is_single_segment(s) || !fs.exists(&d) {
                return Err(ScaffoldError::InvalidTarget(format!("invalid slug: {s}")));
            }
            directory = Some(d);
        }
    }

    if let Some(dir) = explicit_dir {
        if !fs.exists(dir) {
            return Err(ScaffoldError::InvalidTarget(format!(
                "invalid directory: {}",
                dir.display()
            )));
        }
        if slug.is_none() {
            slug = base_name(dir);
        }
        directory = Some(dir.to_path_buf());
    }

    match (slug, directory) {
        (Some(slug), Some(directory)) => {
            tracing::debug!(%slug, directory = %directory.display(), "resolved target");
            Ok(ResolvedTarget { slug, directory })
        }
        _ => Err(ScaffoldError::InvalidTarget("invalid target specified".to_string())),
    }
}

/// slug 必须是单个普通路径段，不能是绝对路径或含 `..`
fn is_single_segment(slug: &str) -> bool {
    let mut parts = Path::new(slug).components();
    matches!((parts.next(), parts.next()), (Some(Component::Normal(_)), None))
}

/// 目录名；先按字面消解 `.` 与 `..`，`foo/..` 取 `foo` 的上级目录名
fn base_name(dir: &Path) -> Option<String> {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for c in dir.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir if matches!(parts.last(), Some(Component::Normal(_))) => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    match parts.last() {
        Some(Component::Normal(n)) => Some(n.to_string_lossy().into_owned()).filter(|n| !n.is_empty()),
        _ => None,
    }
}
