//! core/bridge.rs
//! Launch metaflac and classify what came back.
//!
//! - [`ToolOp`] describes one metaflac call (argv is derived from it).
//! - [`ToolRunner`] is the seam between "what to run" and "actually spawning".
//! - [`invoke`] / [`invoke_checked`] map launch + exit status onto [`TagError`].

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use super::error::{Result, TagError};

pub const DEFAULT_PROGRAM: &str = "metaflac";

/// One metaflac operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOp<'a> {
    /// `--version`, used as the availability probe.
    Version,
    /// `--export-tags-to=-`: `KEY=VALUE` lines on stdout.
    ExportTags(&'a Path),
    RemoveAllTags(&'a Path),
    /// `--set-tag=KEY=VALUE`; metaflac appends, it never replaces.
    SetTag { path: &'a Path, assignment: &'a str },
    /// Human-readable dump of the VORBIS_COMMENT block.
    ListVorbisComment(&'a Path),
}

impl ToolOp<'_> {
    pub fn args(&self) -> Vec<OsString> {
        match *self {
            ToolOp::Version => vec!["--version".into()],
            ToolOp::ExportTags(path) => vec!["--export-tags-to=-".into(), path.into()],
            ToolOp::RemoveAllTags(path) => vec!["--remove-all-tags".into(), path.into()],
            ToolOp::SetTag { path, assignment } => {
                vec![format!("--set-tag={assignment}").into(), path.into()]
            }
            ToolOp::ListVorbisComment(path) => vec![
                "--list".into(),
                "--block-type=VORBIS_COMMENT".into(),
                path.into(),
            ],
        }
    }

    /// Verb phrase for error messages ("metaflac failed to ...").
    pub fn action(&self) -> &'static str {
        match self {
            ToolOp::Version => "report its version",
            ToolOp::ExportTags(_) => "export tags",
            ToolOp::RemoveAllTags(_) => "remove tags",
            ToolOp::SetTag { .. } => "set tag",
            ToolOp::ListVorbisComment(_) => "list the comment block",
        }
    }
}

/// Captured result of one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for ToolOutput {
    fn from(out: std::process::Output) -> Self {
        Self {
            success: out.status.success(),
            code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        }
    }
}

/// Something that can run metaflac with an argument vector and wait for it.
pub trait ToolRunner: Send + Sync {
    /// Program name, for messages.
    fn program(&self) -> &str;

    /// Blocks until the child exits. `Err` only when it could not be launched.
    fn run(&self, args: &[OsString]) -> io::Result<ToolOutput>;
}

/// The real thing: spawns the executable found at `program` (or on PATH).
#[derive(Debug, Clone)]
pub struct Metaflac {
    program: PathBuf,
    name: String,
}

impl Metaflac {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let name = program.display().to_string();
        Self { program, name }
    }
}

impl ToolRunner for Metaflac {
    fn program(&self) -> &str {
        &self.name
    }

    fn run(&self, args: &[OsString]) -> io::Result<ToolOutput> {
        Command::new(&self.program)
            .args(args)
            .output()
            .map(ToolOutput::from)
    }
}

/// Launch `op` and wait. Only a failed launch is an error here;
/// the exit status is left for the caller to judge.
pub fn invoke<R: ToolRunner + ?Sized>(runner: &R, op: ToolOp<'_>) -> Result<ToolOutput> {
    let args = op.args();
    debug!(program = runner.program(), ?args, "invoking metaflac");

    runner.run(&args).map_err(|e| {
        warn!(program = runner.program(), error = %e, "failed to launch metaflac");
        TagError::ToolUnavailable {
            program: runner.program().to_string(),
            reason: launch_reason(&e),
        }
    })
}

/// Like [`invoke`], but a non-zero exit becomes [`TagError::ToolExecution`].
pub fn invoke_checked<R: ToolRunner + ?Sized>(runner: &R, op: ToolOp<'_>) -> Result<ToolOutput> {
    let out = invoke(runner, op)?;
    if out.success {
        return Ok(out);
    }

    warn!(
        action = op.action(),
        code = ?out.code,
        stderr = %out.stderr.trim(),
        "metaflac exited with failure"
    );
    Err(TagError::ToolExecution {
        action: op.action(),
        code: out.code,
        stderr: out.stderr.trim().to_string(),
    })
}

/// True if `metaflac --version` launches and exits zero. Never cached.
pub fn check_available<R: ToolRunner + ?Sized>(runner: &R) -> bool {
    ensure_available(runner).is_ok()
}

/// [`check_available`] as a `Result`, so store operations can `?` it
/// before launching anything that mutates the file.
pub fn ensure_available<R: ToolRunner + ?Sized>(runner: &R) -> Result<()> {
    let out = invoke(runner, ToolOp::Version)?;
    if out.success {
        return Ok(());
    }

    Err(TagError::ToolUnavailable {
        program: runner.program().to_string(),
        reason: format!(
            "version probe exited with code {}",
            out.code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "none".to_string())
        ),
    })
}

fn launch_reason(e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound => "not found".to_string(),
        io::ErrorKind::PermissionDenied => "permission denied".to_string(),
        _ => e.to_string(),
    }
}
