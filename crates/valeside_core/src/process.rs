//! Runs the Vale executable.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::ValeError;

/// Hides the console window Windows would otherwise open for the child.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// One execution of an external program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub cwd: Option<PathBuf>,
    /// Text written to the program's standard input.
    pub stdin: Option<String>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn stdin(mut self, text: impl Into<String>) -> Self {
        self.stdin = Some(text.into());
        self
    }
}

/// Captured output of a finished program.
///
/// The exit status is not kept: Vale exits non-zero whenever it reports
/// alerts, so only standard error signals failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Executes programs on behalf of the lint engine.
pub trait Invoker: Send + Sync {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, ValeError>;
}

/// [`Invoker`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl SystemInvoker {
    fn command(invocation: &Invocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = invocation.cwd.as_deref().filter(|d| is_dir(d)) {
            command.current_dir(dir);
        }

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        command
    }
}

impl Invoker for SystemInvoker {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, ValeError> {
        debug!(
            "Running {} {:?}",
            invocation.program.display(),
            invocation.args
        );

        let mut child = Self::command(invocation).spawn().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ValeError::BinaryNotFound(invocation.program.clone())
            } else {
                ValeError::invocation(format!(
                    "Failed to start {}: {}",
                    invocation.program.display(),
                    e
                ))
            }
        })?;

        // stdin is written while the output pipes are drained.
        let stdin = child.stdin.take();
        let text = invocation.stdin.as_deref().unwrap_or_default();
        let output = std::thread::scope(|scope| {
            let writer = scope.spawn(move || -> io::Result<()> {
                if let Some(mut pipe) = stdin {
                    pipe.write_all(text.as_bytes())?;
                }
                Ok(())
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (output, written)
        });

        let (output, written) = output;
        let output = output?;
        if let Err(e) = written
            && e.kind() != io::ErrorKind::BrokenPipe
        {
            return Err(e.into());
        }

        trace!("Exit status: {}", output.status);
        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn is_dir(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_dir()
}
