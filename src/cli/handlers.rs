use crate::cli::commands::CliArgs;
use crate::cli::output::OutputFormatter;
use crate::config::ScaffoldConfig;
use crate::fs::{FileSystem, RealFileSystem};
use crate::manifest::ManifestBuilder;
use crate::pipeline::{PipelineConfig, PipelineReport, ScaffoldContext, ScaffoldError, ScaffoldPipeline};
use crate::process::{CommandRunner, OutputSink, TokioCommandRunner};
use crate::progress::LoggingHandler;
use crate::prompt::{project_questions, PromptError, PromptSequencer, Session};

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

/// Exit status when the run is interrupted with Ctrl-C
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Everything resolved before the first prompt is shown
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub work_dir: PathBuf,
    pub folder_name: String,
    pub pipeline: PipelineConfig,
    pub styled: bool,
}

impl ScaffoldRequest {
    pub fn new(work_dir: PathBuf, pipeline: PipelineConfig) -> Self {
        let folder_name = folder_name_of(&work_dir);
        Self {
            work_dir,
            folder_name,
            pipeline,
            styled: false,
        }
    }

    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }
}

/// Base name of the working directory, empty for `/`
pub fn folder_name_of(work_dir: &Path) -> String {
    work_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Prompt, build the manifest, print it, then run the scaffold pipeline.
///
/// Everything the user sees goes to `writer`: prompts, the descriptor, step
/// status lines, installer output and the closing message.
pub async fn run_scaffold<R, W>(
    request: &ScaffoldRequest,
    reader: R,
    writer: &mut W,
    file_system: Arc<dyn FileSystem>,
    runner: Arc<dyn CommandRunner>,
) -> Result<PipelineReport, ScaffoldError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let output = OutputFormatter::new(request.styled);
    write_text(writer, &output.banner()).await?;

    let session = Session::new(project_questions(&request.folder_name)).map_err(PromptError::from)?;
    let answers = PromptSequencer::new(reader, &mut *writer)
        .with_styling(request.styled)
        .run(session)
        .await?;
    debug!(answers = ?answers.as_slice(), "Prompt session complete");

    let manifest = ManifestBuilder::new().prepare(
        &answers,
        &request.work_dir,
        &request.folder_name,
        file_system.as_ref(),
    );
    write_text(writer, &output.descriptor(&manifest.descriptor)?).await?;

    let (sink, mut lines) = OutputSink::channel();
    let context = ScaffoldContext::new(
        file_system,
        runner,
        request.pipeline.clone(),
        request.work_dir.clone(),
        manifest,
    )
    .with_output(sink);
    let pipeline = ScaffoldPipeline::new(Some(Arc::new(LoggingHandler)));

    // The context owns the only sender, so the receiver drains once it drops
    let run = async move { pipeline.execute(&context).await };
    let forward = async {
        while let Some(line) = lines.recv().await {
            write_text(writer, &output.step_output(&line)).await?;
        }
        Ok::<(), ScaffoldError>(())
    };
    let (result, forwarded) = tokio::join!(run, forward);
    let report = result?;
    forwarded?;

    write_text(writer, &format!("{}\n", output.finished())).await?;
    Ok(report)
}

async fn write_text<W>(writer: &mut W, text: &str) -> Result<(), ScaffoldError>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(text.as_bytes())
        .await
        .map_err(PromptError::from)?;
    writer.flush().await.map_err(PromptError::from)?;
    Ok(())
}

fn resolve_work_dir(dir: Option<&Path>, fs: &dyn FileSystem) -> anyhow::Result<PathBuf> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir()?,
    };

    if !fs.is_dir(&dir) {
        anyhow::bail!("Not a directory: {}", dir.display());
    }

    fs.canonicalize(&dir)
}

/// Build the effective configuration: environment first, flags on top.
/// `--log-level` wins over `-v`/`-q`, which win over `VLADMAKE_LOG_LEVEL`.
pub fn config_from_args(args: &CliArgs) -> ScaffoldConfig {
    let mut config = ScaffoldConfig::default().with_skip_install(args.skip_install);
    if let Some(templates) = &args.templates {
        config = config.with_templates_dir(templates);
    }
    if let Some(installer) = &args.installer {
        config = config.with_installer(installer.clone());
    }
    if let Some(level) = &args.log_level {
        config = config.with_log_level(level.clone());
    } else if args.verbose {
        config = config.with_log_level("debug");
    } else if args.quiet {
        config = config.with_log_level("error");
    }
    config
}

/// The effective configuration, validated. Runs before logging is set up, so
/// a bad setting is reported once and nothing else is printed.
pub fn load_config(args: &CliArgs) -> Result<ScaffoldConfig, ScaffoldError> {
    let config = config_from_args(args);
    config.validate()?;
    Ok(config)
}

/// Print a configuration failure to stderr and return the exit code
pub fn report_config_error(error: &ScaffoldError) -> i32 {
    let output = OutputFormatter::for_stdout();
    eprintln!("{}", output.failure(&error.help_message()));
    eprintln!("\nPlease check your environment variables and command-line arguments.");
    error.exit_code()
}

pub async fn handle_scaffold(args: &CliArgs, config: &ScaffoldConfig) -> i32 {
    let output = OutputFormatter::for_stdout();
    let file_system: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    let work_dir = match resolve_work_dir(args.dir.as_deref(), file_system.as_ref()) {
        Ok(dir) => dir,
        Err(e) => {
            error!("Invalid working directory: {:#}", e);
            eprintln!("{}", output.failure(&format!("Error: {:#}", e)));
            return 1;
        }
    };
    debug!("Working directory: {}", work_dir.display());

    let pipeline = match config.pipeline_config() {
        Ok(pipeline) => pipeline,
        Err(e) => {
            let e = ScaffoldError::from(e);
            error!("Configuration error: {}", e);
            return report_config_error(&e);
        }
    };
    debug!("{}", config);

    let request = ScaffoldRequest::new(work_dir, pipeline).with_styling(output.is_styled());
    let mut stdout = tokio::io::stdout();
    let stdin = BufReader::new(tokio::io::stdin());

    match run_scaffold(
        &request,
        stdin,
        &mut stdout,
        file_system,
        Arc::new(TokioCommandRunner::new()),
    )
    .await
    {
        Ok(report) => {
            info!(
                completed = report.completed.len(),
                skipped = report.skipped.len(),
                "Scaffold finished"
            );
            0
        }
        Err(e) => {
            error!("Scaffold failed: {}", e);
            eprintln!("{}", output.failure(&e.help_message()));
            e.exit_code()
        }
    }
}

/// Resolves when the user presses Ctrl-C. Never resolves if the handler
/// cannot be installed.
pub async fn interrupt_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl-C, exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::process::MockCommandRunner;

    const WORK_DIR: &str = "/work/foo";

    fn request() -> ScaffoldRequest {
        ScaffoldRequest::new(
            PathBuf::from(WORK_DIR),
            PipelineConfig::new().with_templates_dir("/opt/templates"),
        )
    }

    async fn run(
        request: &ScaffoldRequest,
        input: &str,
        fs: Arc<MockFileSystem>,
        runner: Arc<MockCommandRunner>,
    ) -> (Result<PipelineReport, ScaffoldError>, String) {
        let mut out: Vec<u8> = Vec::new();
        let result = run_scaffold(request, input.as_bytes(), &mut out, fs, runner).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_folder_name_of() {
        assert_eq!(folder_name_of(Path::new("/work/foo")), "foo");
        assert_eq!(folder_name_of(Path::new("/")), "");
    }

    #[tokio::test]
    async fn test_full_scaffold() {
        let fs = Arc::new(MockFileSystem::with_root(PathBuf::from(WORK_DIR)));
        let runner = Arc::new(MockCommandRunner::new());

        let (result, out) = run(&request(), "\nbar\nx,y\nme\n\n", fs.clone(), runner.clone()).await;

        let report = result.unwrap();
        assert_eq!(report.completed.len(), 4);
        assert!(out.starts_with("Specify project details\n"));
        assert!(out.contains("Package Name (foo): "));
        assert!(out.contains("\"name\": \"foo\""));
        assert!(out.ends_with("All done!!!  Have fun.\n"));
        assert_eq!(runner.programs(), vec!["npm", "cp"]);

        let manifest = fs.content_of(PathBuf::from(WORK_DIR).join("package.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(value["license"], "MIT");
        assert_eq!(value["keywords"], serde_json::json!(["x", "y"]));
    }

    #[tokio::test]
    async fn test_rejected_answer_reprompts() {
        let fs = Arc::new(MockFileSystem::with_root(PathBuf::from(WORK_DIR)));
        let runner = Arc::new(MockCommandRunner::new());

        let (result, out) = run(
            &request(),
            ".hidden\nfoo\n\nbar\nx\nme\nMIT\n",
            fs,
            runner,
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(out.matches("Doesn't match").count(), 2);
    }

    #[tokio::test]
    async fn test_input_closed_writes_nothing() {
        let fs = Arc::new(MockFileSystem::with_root(PathBuf::from(WORK_DIR)));
        let runner = Arc::new(MockCommandRunner::new());

        let (result, _) = run(&request(), "foo\nbar\n", fs.clone(), runner.clone()).await;

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Prompt(PromptError::InputClosed { .. })
        ));
        assert_eq!(err.exit_code(), 1);
        assert!(fs.written_paths().is_empty());
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn test_origin_url_from_git_config() {
        let fs = Arc::new(MockFileSystem::with_root(PathBuf::from(WORK_DIR)));
        fs.add_file(
            PathBuf::from(WORK_DIR).join(".git/config"),
            "[remote \"origin\"]\n\turl = https://example.com/me/foo.git\n",
        );
        let runner = Arc::new(MockCommandRunner::new());

        let (result, out) = run(&request(), "\nbar\nx\nme\n\n", fs.clone(), runner).await;

        assert!(result.is_ok());
        assert!(out.contains("https://example.com/me/foo.git"));
    }

    #[tokio::test]
    async fn test_reserved_folder_skips_manifest_but_continues() {
        let fs = Arc::new(MockFileSystem::with_root(PathBuf::from("/src/vladmake")));
        let runner = Arc::new(MockCommandRunner::new());
        let request = ScaffoldRequest::new(PathBuf::from("/src/vladmake"), PipelineConfig::new());

        let (result, out) = run(&request, "\nbar\nx\nme\n\n", fs.clone(), runner.clone()).await;

        let report = result.unwrap();
        assert_eq!(report.skipped[0].0, "WriteManifest");
        assert!(out.contains("\"name\": \"vladmake\""));
        assert_eq!(
            fs.written_paths(),
            vec![PathBuf::from("/src/vladmake/readme.md")]
        );
        assert_eq!(runner.programs(), vec!["npm", "cp"]);
    }

    #[test]
    #[serial_test::serial]
    fn test_config_from_args_overrides() {
        use clap::Parser;

        let args = CliArgs::parse_from([
            "vladmake",
            "--templates",
            "/t",
            "--installer",
            "pnpm",
            "--skip-install",
        ]);
        let config = config_from_args(&args);

        assert_eq!(config.templates_dir, Some(PathBuf::from("/t")));
        assert_eq!(config.installer, "pnpm");
        assert!(config.skip_install);
    }

    #[tokio::test]
    async fn test_install_output_reaches_writer() {
        let fs = Arc::new(MockFileSystem::with_root(PathBuf::from(WORK_DIR)));
        let runner = Arc::new(MockCommandRunner::new().with_output("npm", "added 15 packages"));

        let (result, out) = run(&request(), "\nbar\nx\nme\n\n", fs, runner).await;

        assert!(result.is_ok());
        let banner = out.find("Installing dependencies... may take a while!\n").unwrap();
        let installer = out.find("added 15 packages\n").unwrap();
        let done = out.find("All done!!!").unwrap();
        assert!(out.find("\"license\": \"MIT\"").unwrap() < banner);
        assert!(banner < installer);
        assert!(installer < done);
    }

    #[test]
    #[serial_test::serial]
    fn test_log_level_flags() {
        use clap::Parser;

        let verbose = config_from_args(&CliArgs::parse_from(["vladmake", "-v"]));
        assert_eq!(verbose.log_level, "debug");

        let quiet = config_from_args(&CliArgs::parse_from(["vladmake", "-q"]));
        assert_eq!(quiet.log_level, "error");

        let explicit =
            config_from_args(&CliArgs::parse_from(["vladmake", "-v", "--log-level", "TRACE"]));
        assert_eq!(explicit.log_level, "trace");
    }

    #[test]
    #[serial_test::serial]
    fn test_load_config_rejects_bad_log_level() {
        use clap::Parser;

        let args = CliArgs::parse_from(["vladmake", "--log-level", "loud"]);
        let err = load_config(&args).unwrap_err();

        assert!(matches!(err, ScaffoldError::Config(_)));
        assert!(err.to_string().contains("Invalid log level: loud"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_resolve_work_dir_rejects_missing_dir() {
        let fs = MockFileSystem::new();
        assert!(resolve_work_dir(Some(Path::new("/nope")), &fs).is_err());
    }
}
