//! 主题测试文件脚手架
//! - 解析目标 → 生成计划 → 逐个写出（冲突时询问）→ 输出结果

use std::path::{Path, PathBuf};

use crate::{
    error::{Result, ScaffoldError},
    fs::FileSystem,
    prompt::{prompt_choice, Interaction, Level},
    target::resolve,
    templates::{plan, CiProvider, FilePlan},
};

/// 一次命令调用的输入
#[derive(Debug, Clone, Default)]
pub(crate) struct ScaffoldRequest {
    pub(crate) slug: Option<String>,
    pub(crate) dir: Option<PathBuf>,
    pub(crate) force: bool,
    pub(crate) ci: CiProvider,
}

/// 实际写出的文件（按写出顺序）
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct WriteOutcome {
    pub(crate) written: Vec<PathBuf>,
}

impl WriteOutcome {
    pub(crate) fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}

/// 完整流程：解析 → 计划 → 写出 → 报告
pub(crate) fn theme_tests(
    fs: &dyn FileSystem,
    ui: &mut dyn Interaction,
    themes_root: &Path,
    req: &ScaffoldRequest,
) -> Result<WriteOutcome> {
    let target = resolve(fs, themes_root, req.slug.as_deref(), req.dir.as_deref())?;
    let files = plan(&target, req.ci)?;
    let outcome = execute(fs, ui, &files, req.force)?;
    report(ui, &outcome);
    Ok(outcome)
}

/// 按计划顺序写出；首个写入失败即中止，已写文件保留
pub(crate) fn execute(
    fs: &dyn FileSystem,
    ui: &mut dyn Interaction,
    files: &FilePlan,
    force: bool,
) -> Result<WriteOutcome> {
    let mut outcome = WriteOutcome::default();
    for f in files {
        let path = &f.path;
        if fs.exists(path) {
            ui.notify(Level::Warning, &format!("File already exists: {}", path.display()));
            let replace = force
                || prompt_choice(
                    ui,
                    &format!("{} already exists. Skip or replace? [s/r]: ", path.display()),
                    &["s", "r"],
                )? == "r";
            ui.notify(Level::Info, if replace { "Replacing" } else { "Skipping" });
            if !replace {
                tracing::debug!(path = %path.display(), "skipped");
                continue;
            }
        }

        let write_err = |source| ScaffoldError::Write { path: path.clone(), source };
        if let Some(parent) = path.parent() {
            if !fs.exists(parent) {
                fs.create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs.write(path, f.content.as_bytes()).map_err(write_err)?;
        tracing::debug!(path = %path.display(), bytes = f.content.len(), "written");
        outcome.written.push(path.clone());
    }
    Ok(outcome)
}

/// 输出唯一的结束消息，不逐个列出文件
pub(crate) fn report(ui: &mut dyn Interaction, outcome: &WriteOutcome) {
    if outcome.is_empty() {
        ui.notify(Level::Info, "All theme-tests files were skipped.");
    } else {
        ui.notify(Level::Success, "Created test files.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fs::MemFileSystem, prompt::Scripted, templates::PlannedFile};

    const ROOT: &str = "/wp/wp-content/themes";
    const THEME: &str = "/wp/wp-content/themes/sample-theme";

    fn request(slug: &str) -> ScaffoldRequest {
        ScaffoldRequest { slug: Some(slug.to_string()), ..ScaffoldRequest::default() }
    }

    fn theme_file(rel: &str) -> PathBuf {
        Path::new(THEME).join(rel)
    }

    #[test]
    fn fresh_theme_gets_all_four_files() {
        let fs = MemFileSystem::new().with_dir(THEME);
        let mut ui = Scripted::new(&[]);
        let out = theme_tests(&fs, &mut ui, Path::new(ROOT), &request("sample-theme")).unwrap();

        assert_eq!(out.written.len(), 4);
        assert_eq!(fs.writes(), out.written);
        assert!(ui.questions.is_empty());
        assert!(ui.messages(Level::Warning).is_empty());
        assert_eq!(ui.messages(Level::Success), ["Created test files."]);
        assert!(fs.read(theme_file(".travis.yml")).is_some());
    }

    #[test]
    fn skip_keeps_existing_bytes() {
        let fs = MemFileSystem::new().with_file(theme_file(".gitignore"), "mine\n");
        let mut ui = Scripted::new(&["s"]);
        let out = theme_tests(&fs, &mut ui, Path::new(ROOT), &request("sample-theme")).unwrap();

        assert_eq!(fs.read(theme_file(".gitignore")).as_deref(), Some("mine\n"));
        assert!(!out.written.contains(&theme_file(".gitignore")));
        assert_eq!(out.written.len(), 3);
        assert_eq!(ui.messages(Level::Info), ["Skipping"]);
        assert_eq!(
            ui.messages(Level::Warning),
            [format!("File already exists: {}", theme_file(".gitignore").display())]
        );
        assert_eq!(ui.messages(Level::Success), ["Created test files."]);
    }

    #[test]
    fn replace_overwrites() {
        let fs = MemFileSystem::new().with_file(theme_file("composer.json"), "{}");
        let mut ui = Scripted::new(&["r"]);
        let out = theme_tests(&fs, &mut ui, Path::new(ROOT), &request("sample-theme")).unwrap();

        assert!(out.written.contains(&theme_file("composer.json")));
        assert_ne!(fs.read(theme_file("composer.json")).as_deref(), Some("{}"));
        assert_eq!(ui.messages(Level::Info), ["Replacing"]);
    }

    #[test]
    fn invalid_answers_reprompt_without_side_effects() {
        let fs = MemFileSystem::new().with_file(theme_file(".gitignore"), "mine\n");
        let mut ui = Scripted::new(&["y", "replace", "s"]);
        let files = vec![PlannedFile { path: theme_file(".gitignore"), content: "new\n".into() }];
        let out = execute(&fs, &mut ui, &files, false).unwrap();

        assert_eq!(ui.questions.len(), 3);
        assert!(out.is_empty());
        assert!(fs.writes().is_empty());
        assert_eq!(fs.read(theme_file(".gitignore")).as_deref(), Some("mine\n"));
    }

    #[test]
    fn force_replaces_without_prompt() {
        let fs = MemFileSystem::new().with_file(theme_file(".travis.yml"), "old");
        let mut ui = Scripted::new(&[]);
        let req = ScaffoldRequest { force: true, ..request("sample-theme") };
        let out = theme_tests(&fs, &mut ui, Path::new(ROOT), &req).unwrap();

        assert!(ui.questions.is_empty());
        assert!(out.written.contains(&theme_file(".travis.yml")));
        assert_eq!(ui.messages(Level::Info), ["Replacing"]);
        assert_ne!(fs.read(theme_file(".travis.yml")).as_deref(), Some("old"));
    }

    #[test]
    fn forced_runs_are_idempotent() {
        let fs = MemFileSystem::new().with_dir(THEME);
        let req = ScaffoldRequest { force: true, ..request("sample-theme") };

        let mut first_ui = Scripted::new(&[]);
        theme_tests(&fs, &mut first_ui, Path::new(ROOT), &req).unwrap();
        let first: Vec<_> = fs.writes().iter().map(|p| fs.read(p)).collect();

        let mut second_ui = Scripted::new(&[]);
        let out = theme_tests(&fs, &mut second_ui, Path::new(ROOT), &req).unwrap();
        let second: Vec<_> = out.written.iter().map(|p| fs.read(p)).collect();

        assert_eq!(out.written.len(), 4);
        assert_eq!(first, second);
        assert_eq!(second_ui.messages(Level::Success), ["Created test files."]);
    }

    #[test]
    fn all_skipped_reports_skip_summary() {
        let mut fs = MemFileSystem::new();
        for rel in [".gitignore", ".travis.yml", "composer.json", "composer.lock"] {
            fs = fs.with_file(theme_file(rel), "x");
        }
        let mut ui = Scripted::new(&["s", "s", "s", "s"]);
        let out = theme_tests(&fs, &mut ui, Path::new(ROOT), &request("sample-theme")).unwrap();

        assert!(out.is_empty());
        assert!(ui.messages(Level::Success).is_empty());
        assert_eq!(ui.messages(Level::Info).last(), Some(&"All theme-tests files were skipped."));
    }

    #[test]
    fn report_branches() {
        let mut ui = Scripted::new(&[]);
        report(&mut ui, &WriteOutcome::default());
        assert_eq!(ui.messages(Level::Info), ["All theme-tests files were skipped."]);

        let mut ui = Scripted::new(&[]);
        report(&mut ui, &WriteOutcome { written: vec![theme_file(".gitignore")] });
        assert_eq!(ui.messages(Level::Success), ["Created test files."]);
        assert!(ui.messages(Level::Info).is_empty());
    }

    #[test]
    fn write_failure_aborts_and_keeps_earlier_files() {
        let fs = MemFileSystem::new().with_dir(THEME);
        fs.fail_writes_to(theme_file(".travis.yml"));
        let mut ui = Scripted::new(&[]);
        let err = theme_tests(&fs, &mut ui, Path::new(ROOT), &request("sample-theme")).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("error creating file: {}", theme_file(".travis.yml").display())
        );
        assert_eq!(fs.writes(), [theme_file(".gitignore")]);
        assert!(fs.read(theme_file("composer.json")).is_none());
        assert!(ui.notices.is_empty());
    }

    #[test]
    fn invalid_target_touches_nothing() {
        let fs = MemFileSystem::new().with_dir(ROOT);
        let mut ui = Scripted::new(&[]);
        let err = theme_tests(&fs, &mut ui, Path::new(ROOT), &ScaffoldRequest::default()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidTarget(_)));
        assert!(fs.writes().is_empty());
    }

    #[test]
    fn circle_config_creates_parent_dir() {
        let fs = MemFileSystem::new().with_dir(THEME);
        let mut ui = Scripted::new(&[]);
        let req = ScaffoldRequest { ci: CiProvider::Circle, ..request("sample-theme") };
        let out = theme_tests(&fs, &mut ui, Path::new(ROOT), &req).unwrap();

        assert!(out.written.contains(&theme_file(".circleci/config.yml")));
        assert!(fs.exists(&theme_file(".circleci")));
    }
}
