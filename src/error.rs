//! 错误类型：目标解析、文件写出、模板渲染与交互输入失败

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ScaffoldError {
    /// slug / 目录无法解析或不存在
    #[error("{0}")]
    InvalidTarget(String),

    #[error("error creating file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 内置模板损坏，属于内部错误
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("failed to read answer: {0}")]
    Prompt(#[source] io::Error),
}

pub(crate) type Result<T> = std::result::Result<T, ScaffoldError>;
