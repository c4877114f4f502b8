//! 内置模板与文件计划
//! - 模板随二进制一起打包（include_dir）
//! - 使用 tera 渲染，替换上下文显式传入

use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use serde::Serialize;
use std::path::PathBuf;
use tera::{Context as TContext, Tera};

use crate::{error::Result, target::ResolvedTarget};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// CI 服务商，决定 CI 配置文件的模板与输出位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum CiProvider {
    #[default]
    Travis,
    Circle,
    Gitlab,
}

impl CiProvider {
    fn template(self) -> &'static str {
        match self {
            CiProvider::Travis => "travis.yml",
            CiProvider::Circle => "circle.yml",
            CiProvider::Gitlab => "gitlab.yml",
        }
    }

    fn output(self) -> &'static str {
        match self {
            CiProvider::Travis => ".travis.yml",
            CiProvider::Circle => ".circleci/config.yml",
            CiProvider::Gitlab => ".gitlab-ci.yml",
        }
    }
}

/// 模板替换上下文
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TemplateContext {
    pub(crate) slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlannedFile {
    pub(crate) path: PathBuf,
    pub(crate) content: String,
}

/// 有序的 (输出路径, 内容) 列表
pub(crate) type FilePlan = Vec<PlannedFile>;

fn engine() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    for f in TEMPLATES_DIR.files() {
        let name = f.path().to_string_lossy();
        let body = f
            .contents_utf8()
            .ok_or_else(|| tera::Error::msg(format!("template is not UTF-8: {name}")))?;
        tera.add_raw_template(&name, body)?;
    }
    Ok(tera)
}

/// 生成写出计划：.gitignore、CI 配置、composer.json、composer.lock
pub(crate) fn plan(target: &ResolvedTarget, ci: CiProvider) -> Result<FilePlan> {
    let tera = engine()?;
    let ctx = TContext::from_serialize(TemplateContext { slug: target.slug.clone() })?;
    let set = [
        ("gitignore", ".gitignore"),
        (ci.template(), ci.output()),
        ("composer.json", "composer.json"),
        ("composer.lock", "composer.lock"),
    ];
    let mut files = Vec::with_capacity(set.len());
    for (template, rel) in set {
        let content = tera.render(template, &ctx)?;
        files.push(PlannedFile { path: target.directory.join(rel), content });
    }
    tracing::debug!(count = files.len(), ?ci, "planned files");
    Ok(files)
}
