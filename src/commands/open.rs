//! # Open Command
//!
//! Opens paths in the editor, elevating the whole batch when any path
//! needs it.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{bail, Context as _, Result};

use super::Context;
use crate::{
    command::ResolvedCommand,
    constants::APP_NAME,
    editor::{self, LineStyle, Selection, Source},
    permissions::Credentials,
    runner::{self, LaunchMode},
    target::Target,
    ui,
};

/// Arguments for the open command
#[derive(Debug, Clone, Default)]
pub struct OpenArgs {
    pub paths: Vec<String>,
    pub editor_args: Vec<String>,
    pub wait: bool,
}

/// Everything decided before launching.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub targets: Vec<Target>,
    pub editor: Selection,
    pub elevation: Option<Selection>,
    pub command: ResolvedCommand,
}

/// Resolves targets, tools, and the final argv without launching.
///
/// Missing paths are confirmed with the user; declining cancels.
pub fn plan<C: Credentials>(args: &OpenArgs, ctx: &mut Context<'_, C>) -> Result<LaunchPlan> {
    if args.paths.is_empty() {
        bail!("No file name to open! See '{APP_NAME} --help'.");
    }

    let search_dirs = ctx.config.search_paths();
    let mut targets = Vec::with_capacity(args.paths.len());
    for raw in &args.paths {
        let target = Target::from_arg(raw, &search_dirs);
        if !target.exists() {
            ui::confirm_or_cancel(
                &mut *ctx.prompt,
                &format!(
                    "File does not exist: {}\nSome editors will create it. Continue anyway?",
                    target.path.display()
                ),
            )?;
        }
        targets.push(target);
    }

    let elevate = targets
        .iter()
        .any(|t| ctx.classifier.needs_elevation(&t.path));

    let root_editor = if elevate {
        editor::root_editor(&ctx.config, &ctx.resolver)?
    } else {
        None
    };
    let editor = match root_editor {
        Some(root) => root,
        None => editor::editor(&ctx.config, &ctx.resolver)?,
    };
    let elevation = elevate
        .then(|| editor::elevation_command(&ctx.config, &ctx.resolver))
        .transpose()?;

    let mut extra_args = targets
        .first()
        .and_then(|t| t.line.map(|line| (line, t.column)))
        .map(|(line, column)| LineStyle::for_editor(&editor.program.path).args(line, column))
        .unwrap_or_default();
    extra_args.extend(args.editor_args.iter().cloned());

    let paths: Vec<_> = targets.iter().map(|t| t.path.clone()).collect();
    let command = ResolvedCommand::build(
        &editor.program,
        elevation.as_ref().map(|s| &s.program),
        &extra_args,
        &paths,
    );

    Ok(LaunchPlan {
        targets,
        editor,
        elevation,
        command,
    })
}

/// Executes the open command.
pub fn execute<C: Credentials>(args: &OpenArgs, ctx: &mut Context<'_, C>) -> Result<u8> {
    let plan = plan(args, ctx)?;

    report(&plan.editor, "editor", "--editor");
    if let Some(elevation) = &plan.elevation {
        report(elevation, "elevation command", "--elevcmd");
    }

    let mode = if args.wait {
        LaunchMode::Wait
    } else {
        LaunchMode::Detach
    };
    let outcome = runner::run(&plan.command, mode).context("Failed to launch editor")?;
    tracing::debug!(?outcome, "launched");

    Ok(outcome.exit_code())
}

fn report(selection: &Selection, what: &str, flag: &str) {
    let path = selection.program.path.display();
    match selection.source {
        Source::Default => {
            ui::print_hint(&format!(
                "Be sure to set your favorite {what} with: {APP_NAME} {flag} PATH"
            ));
            ui::print_info(&format!("Found common {what}: {path}"));
        }
        Source::Configured => {
            ui::print_info(&format!("Using {what}: {path}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashSet,
        fs,
        path::{Path, PathBuf},
    };

    use tempfile::TempDir;

    use super::*;
    use crate::{
        config::Config,
        constants::CONFIG_FILE_NAME,
        environment::Environment,
        error::Error,
        permissions::Classifier,
        resolver::{tests::make_executable, Resolver},
        ui::tests::ScriptedPrompt,
    };

    #[derive(Default)]
    struct FakeCredentials {
        writable: HashSet<PathBuf>,
    }

    impl Credentials for FakeCredentials {
        fn is_superuser(&self) -> bool {
            false
        }

        fn can_write(&self, path: &Path) -> bool {
            self.writable.contains(path)
        }
    }

    struct Fixture {
        bin: TempDir,
        work: TempDir,
        config: Config,
    }

    impl Fixture {
        fn new() -> Self {
            let work = TempDir::new().expect("temp dir");
            let config = Config::load_from(work.path().join(CONFIG_FILE_NAME)).expect("load");
            Self {
                bin: TempDir::new().expect("temp dir"),
                work,
                config,
            }
        }

        fn file(&self, name: &str) -> PathBuf {
            let path = self.work.path().join(name);
            fs::write(&path, "").expect("write");
            path
        }

        fn context<'a>(
            &self,
            writable: &[&Path],
            prompt: &'a mut ScriptedPrompt,
        ) -> Context<'a, FakeCredentials> {
            Context {
                config: self.config.clone(),
                env: Environment::default(),
                resolver: Resolver::new(vec![self.bin.path().to_path_buf()], vec![]),
                classifier: Classifier::new(FakeCredentials {
                    writable: writable.iter().map(|p| p.to_path_buf()).collect(),
                }),
                prompt,
            }
        }
    }

    fn argv(plan: &LaunchPlan) -> Vec<String> {
        plan.command
            .argv()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    fn open_args(paths: &[&Path]) -> OpenArgs {
        OpenArgs {
            paths: paths.iter().map(|p| p.display().to_string()).collect(),
            ..OpenArgs::default()
        }
    }

    #[test]
    fn test_default_editor_for_writable_file() {
        let fx = Fixture::new();
        let kate = make_executable(fx.bin.path(), "kate");
        make_executable(fx.bin.path(), "vim");
        let file = fx.file("notes.txt");
        let mut prompt = ScriptedPrompt::default();
        let mut ctx = fx.context(&[&file], &mut prompt);

        let plan = plan(&open_args(&[&file]), &mut ctx).expect("plan");
        assert_eq!(
            argv(&plan),
            vec![kate.display().to_string(), file.display().to_string()]
        );
        assert!(plan.elevation.is_none());
        assert_eq!(plan.editor.source, Source::Default);
    }

    #[test]
    fn test_root_owned_file_is_elevated() {
        let mut fx = Fixture::new();
        let editor = make_executable(fx.bin.path(), "nano");
        let sudo = make_executable(fx.bin.path(), "sudo");
        fx.config
            .set_and_save("elevcmd", &sudo.display().to_string())
            .expect("set");
        let mut prompt = ScriptedPrompt::default();
        let mut ctx = fx.context(&[], &mut prompt);

        let plan = plan(&open_args(&[Path::new("/etc/passwd")]), &mut ctx).expect("plan");
        assert_eq!(
            argv(&plan),
            vec![
                sudo.display().to_string(),
                editor.display().to_string(),
                "/etc/passwd".to_string()
            ]
        );
        assert!(plan.command.is_elevated());
    }

    #[test]
    fn test_mixed_batch_elevates_once() {
        let fx = Fixture::new();
        make_executable(fx.bin.path(), "vim");
        make_executable(fx.bin.path(), "sudo");
        let mine = fx.file("mine.txt");
        let mut prompt = ScriptedPrompt::default();
        let mut ctx = fx.context(&[&mine], &mut prompt);

        let plan = plan(&open_args(&[&mine, Path::new("/etc/passwd")]), &mut ctx).expect("plan");
        let args = argv(&plan);
        assert_eq!(args.len(), 4);
        assert!(args[0].ends_with("/sudo"));
        assert!(args[1].ends_with("/vim"));
        assert_eq!(args[2], mine.display().to_string());
        assert_eq!(args[3], "/etc/passwd");
    }

    #[test]
    fn test_root_editor_replaces_editor_when_elevated() {
        let mut fx = Fixture::new();
        make_executable(fx.bin.path(), "kate");
        let nano = make_executable(fx.bin.path(), "nano");
        make_executable(fx.bin.path(), "sudo");
        fx.config.set_and_save("rooteditor", "nano").expect("set");
        let mine = fx.file("mine.txt");
        let mut prompt = ScriptedPrompt::default();

        let mut ctx = fx.context(&[&mine], &mut prompt);
        let plain = plan(&open_args(&[&mine]), &mut ctx).expect("plan");
        assert!(argv(&plain)[0].ends_with("/kate"));

        let elevated = plan(&open_args(&[Path::new("/etc/passwd")]), &mut ctx).expect("plan");
        assert_eq!(argv(&elevated)[1], nano.display().to_string());
    }

    #[test]
    fn test_missing_file_confirmed() {
        let fx = Fixture::new();
        make_executable(fx.bin.path(), "kate");
        let missing = fx.work.path().join("new.txt");
        let mut prompt = ScriptedPrompt::answering(&[true]);
        let mut ctx = fx.context(&[fx.work.path()], &mut prompt);

        let plan = plan(&open_args(&[&missing]), &mut ctx).expect("plan");
        assert!(plan.elevation.is_none(), "Writable parent means no elevation");
        assert_eq!(prompt.asked.len(), 1);
        assert!(prompt.asked[0].contains("new.txt"));
    }

    #[test]
    fn test_missing_file_declined_cancels() {
        let fx = Fixture::new();
        make_executable(fx.bin.path(), "kate");
        let missing = fx.work.path().join("new.txt");
        let mut prompt = ScriptedPrompt::answering(&[false]);
        let mut ctx = fx.context(&[fx.work.path()], &mut prompt);

        let err = plan(&open_args(&[&missing]), &mut ctx).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Cancelled)));
    }

    #[test]
    fn test_no_paths_is_error() {
        let fx = Fixture::new();
        let mut prompt = ScriptedPrompt::default();
        let mut ctx = fx.context(&[], &mut prompt);
        let err = plan(&OpenArgs::default(), &mut ctx).unwrap_err();
        assert!(err.to_string().contains("No file name to open"));
    }

    #[test]
    fn test_missing_elevation_command() {
        let fx = Fixture::new();
        make_executable(fx.bin.path(), "kate");
        let mut prompt = ScriptedPrompt::default();
        let mut ctx = fx.context(&[], &mut prompt);

        let err = plan(&open_args(&[Path::new("/etc/passwd")]), &mut ctx).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NoDefaultTool { .. })
        ));
    }

    #[test]
    fn test_line_and_editor_args_precede_paths() {
        let mut fx = Fixture::new();
        let vim = make_executable(fx.bin.path(), "vim");
        fx.config.set_and_save("editor", "vim -p").expect("set");
        let file = fx.file("main.rs");
        let mut prompt = ScriptedPrompt::default();
        let mut ctx = fx.context(&[&file], &mut prompt);

        let args = OpenArgs {
            paths: vec![format!("{}:42", file.display())],
            editor_args: vec!["-R".to_string()],
            wait: false,
        };
        let plan = plan(&args, &mut ctx).expect("plan");
        assert_eq!(
            argv(&plan),
            vec![
                vim.display().to_string(),
                "-p".to_string(),
                "+42".to_string(),
                "-R".to_string(),
                file.display().to_string()
            ]
        );
    }
}
