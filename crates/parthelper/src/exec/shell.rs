//! Shell-backed executor using real child processes.

use super::{CmdOutput, CommandExecutor};
use crate::{ExecError, ExecResult};
use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid;
use std::io::Read;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use std::time::Duration;
use wait_timeout::ChildExt;

pub const DEFAULT_SHELL: &str = "/bin/sh";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Executes command lines with `<shell> -c`, bounded by a timeout.
///
/// Each line runs in its own process group, so a timeout takes down the shell
/// together with everything it started.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: PathBuf,
    timeout: Duration,
}

/// Exit status and raw pipe contents of one finished command line.
struct Finished {
    status: ExitStatus,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self {
            shell: PathBuf::from(DEFAULT_SHELL),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn shell(&self) -> &Path {
        &self.shell
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn spawn(&self, cmd_line: &str) -> ExecResult<Child> {
        Command::new(&self.shell)
            .arg("-c")
            .arg(cmd_line)
            .process_group(0)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => ExecError::NotFound {
                    program: self.shell.display().to_string(),
                },
                _ => ExecError::Io(err),
            })
    }

    fn run_bounded(&self, cmd_line: &str) -> ExecResult<Finished> {
        let mut child = self.spawn(cmd_line)?;
        let stdout = collect(child.stdout.take());
        let stderr = collect(child.stderr.take());

        let status = match child.wait_timeout(self.timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                kill_group(&mut child);
                // The whole group is gone, so the pipes are closed and the readers finish.
                let _ = stdout.join();
                let _ = stderr.join();
                return Err(ExecError::Timeout {
                    command: cmd_line.to_string(),
                    timeout: self.timeout,
                });
            }
            Err(err) => {
                kill_group(&mut child);
                return Err(ExecError::Io(err));
            }
        };

        Ok(Finished {
            status,
            stdout: stdout.join().unwrap_or_default(),
            stderr: stderr.join().unwrap_or_default(),
        })
    }
}

fn collect<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

fn kill_group(child: &mut Child) {
    // The child leads its own group (process_group(0)), so its pid is the pgid.
    let pgid = Pid::from_raw(child.id() as i32);
    if let Err(errno) = killpg(pgid, Signal::SIGKILL) {
        log::warn!("killpg({}) failed: {}", pgid, errno);
        let _ = child.kill();
    }
    let _ = child.wait();
}

impl CommandExecutor for ShellExecutor {
    fn run_cmd(&self, cmd: &str) -> ExecResult<CmdOutput> {
        log::debug!("exec: {}", cmd);

        let finished = match self.run_bounded(cmd) {
            Ok(finished) => finished,
            Err(err) => {
                log::warn!("exec failed: {}: {}", cmd, err);
                return Err(err);
            }
        };

        let stderr = String::from_utf8_lossy(&finished.stderr).into_owned();
        if !finished.status.success() {
            let code = finished.status.code();
            log::warn!("command exited with {:?}: {}: {}", code, cmd, stderr.trim());
            return Err(ExecError::Failed {
                command: cmd.to_string(),
                code,
                stderr: stderr.trim().to_string(),
            });
        }

        // Partition names and labels may hold arbitrary bytes.
        let stdout = String::from_utf8_lossy(&finished.stdout).into_owned();
        Ok(CmdOutput { stdout, stderr })
    }
}
