//! In-memory stand-in for metaflac, so store logic runs headless.
//!
//! Keeps one file's comments as raw lines and behaves like the real tool:
//! export prints them, remove-all clears them, set-tag appends (no dedupe).

use std::ffi::OsString;
use std::io;
use std::sync::Mutex;

use super::bridge::{ToolOutput, ToolRunner};

#[derive(Debug, Default)]
struct FakeState {
    missing: bool,
    version_broken: bool,
    /// Fail the set-tag call that comes after this many successful ones.
    fail_set_tag_after: Option<usize>,
    set_tag_ok: usize,
    comments: Vec<String>,
    calls: Vec<Vec<String>>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeMetaflac {
    state: Mutex<FakeState>,
}

impl FakeMetaflac {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Behaves like an executable that is not on PATH.
    pub(crate) fn missing() -> Self {
        let fake = Self::default();
        fake.lock().missing = true;
        fake
    }

    /// Pre-load the file's comment block.
    pub(crate) fn with_comments(lines: &[&str]) -> Self {
        let fake = Self::default();
        fake.lock().comments = lines.iter().map(|s| s.to_string()).collect();
        fake
    }

    pub(crate) fn break_version_probe(&self) {
        self.lock().version_broken = true;
    }

    pub(crate) fn fail_set_tag_after(&self, successes: usize) {
        self.lock().fail_set_tag_after = Some(successes);
    }

    pub(crate) fn comments(&self) -> Vec<String> {
        self.lock().comments.clone()
    }

    /// Every argv seen, in launch order.
    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.lock().calls.clone()
    }

    /// First argument of every call ("--version", "--set-tag=TITLE=x", ...).
    pub(crate) fn ops(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| c.into_iter().next())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn ok(stdout: String) -> io::Result<ToolOutput> {
    Ok(ToolOutput {
        success: true,
        code: Some(0),
        stdout,
        stderr: String::new(),
    })
}

fn fail(stderr: String) -> io::Result<ToolOutput> {
    Ok(ToolOutput {
        success: false,
        code: Some(1),
        stdout: String::new(),
        stderr,
    })
}

impl ToolRunner for FakeMetaflac {
    fn program(&self) -> &str {
        "metaflac"
    }

    fn run(&self, args: &[OsString]) -> io::Result<ToolOutput> {
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        let mut st = self.lock();
        if st.missing {
            return Err(io::Error::new(io::ErrorKind::NotFound, "No such file"));
        }
        st.calls.push(args.clone());

        let first = args.first().map(String::as_str).unwrap_or("");
        let file = args.last().cloned().unwrap_or_default();

        match first {
            "--version" if st.version_broken => fail("broken install".to_string()),
            "--version" => ok("metaflac 1.4.3\n".to_string()),
            "--export-tags-to=-" => {
                let mut out = st.comments.join("\n");
                if !out.is_empty() {
                    out.push('\n');
                }
                ok(out)
            }
            "--remove-all-tags" => {
                st.comments.clear();
                ok(String::new())
            }
            "--list" => {
                let mut out = format!(
                    "METADATA block #1\n  type: 4 (VORBIS_COMMENT)\n  comments: {}\n",
                    st.comments.len()
                );
                for (i, c) in st.comments.iter().enumerate() {
                    out.push_str(&format!("    comment[{i}]: {c}\n"));
                }
                ok(out)
            }
            other => match other.strip_prefix("--set-tag=") {
                Some(_) if st.fail_set_tag_after == Some(st.set_tag_ok) => {
                    fail(format!("{file}: ERROR: simulated write failure"))
                }
                Some(assignment) if assignment.contains('=') => {
                    st.comments.push(assignment.to_string());
                    st.set_tag_ok += 1;
                    ok(String::new())
                }
                Some(_) => fail(format!("{file}: ERROR: malformed vorbis comment")),
                None => fail(format!("unsupported fake operation: {other}")),
            },
        }
    }
}
