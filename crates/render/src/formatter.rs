//! External formatter pass
//!
//! The generated header is piped through a formatter such as clang-format.
//! Every failure is reported as a [`FormatError`] so the caller can keep the
//! unformatted text.

use std::io::{self, Read, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use wait_timeout::ChildExt;

/// Upper bound on a single formatter run
pub const DEFAULT_FORMAT_TIMEOUT: Duration = Duration::from_secs(30);

/// Formatter program used when none is configured
pub const DEFAULT_FORMATTER: &str = "clang-format";

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("failed to launch {program}: {source}")]
    Launch { program: String, source: io::Error },

    #[error("{program} timed out after {}s", .timeout.as_secs_f32())]
    Timeout { program: String, timeout: Duration },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("I/O error while running {program}: {source}")]
    Io { program: String, source: io::Error },
}

fn spawn_reader<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<io::Result<String>> {
    thread::spawn(move || {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Ok(buf)
    })
}

/// Feed stdin from its own thread; the pipe closes when the thread ends
fn spawn_writer<W: Write + Send + 'static>(
    mut writer: W,
    code: String,
) -> JoinHandle<io::Result<()>> {
    thread::spawn(move || writer.write_all(code.as_bytes()))
}

fn join_io<T: Default>(handle: Option<JoinHandle<io::Result<T>>>) -> io::Result<T> {
    match handle {
        Some(handle) => handle
            .join()
            .map_err(|_| io::Error::other("formatter pipe thread panicked"))?,
        None => Ok(T::default()),
    }
}

/// Feed `code` to `program` on stdin and return its stdout
///
/// All pipe traffic happens on helper threads so `timeout` bounds the run
/// even when the program never reads its input.
pub fn run_formatter(
    code: &str,
    program: &str,
    timeout: Duration,
) -> Result<String, FormatError> {
    let io_error = |source: io::Error| FormatError::Io {
        program: program.to_string(),
        source,
    };

    debug!("Running formatter {program}");
    let mut child = Command::new(program)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| FormatError::Launch {
            program: program.to_string(),
            source,
        })?;

    let writer = child
        .stdin
        .take()
        .map(|stdin| spawn_writer(stdin, code.to_string()));
    let stdout = child.stdout.take().map(spawn_reader);
    let stderr = child.stderr.take().map(spawn_reader);

    let status = match child.wait_timeout(timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(FormatError::Timeout {
                program: program.to_string(),
                timeout,
            });
        }
        Err(e) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(io_error(e));
        }
    };

    if !status.success() {
        let stderr = join_io(stderr).unwrap_or_default();
        return Err(FormatError::Failed {
            program: program.to_string(),
            status,
            stderr: stderr.trim().to_string(),
        });
    }

    join_io(writer).map_err(io_error)?;
    let formatted = join_io(stdout).map_err(io_error)?;
    Ok(formatted)
}
