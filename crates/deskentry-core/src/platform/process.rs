//! Blocking subprocess execution.
//!
//! The privilege escalation helper is the only external process deskentry
//! runs. It may sit on an authentication prompt indefinitely, so the wait is
//! bounded and the child is terminated once the deadline passes.

use crate::config::InstallConfig;
use crate::error::{DeskEntryError, Result};
use std::process::{Child, Command, ExitStatus};
use std::thread::sleep;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Spawn `command` and block until it exits or `timeout` elapses.
///
/// `None` waits without a deadline. The child's exit status is returned as
/// is; interpreting a non-zero code is up to the caller.
///
/// # Errors
/// Returns [`DeskEntryError::ElevationFailed`] if the process cannot be
/// started, cannot be waited on, or does not finish in time.
pub fn run_with_timeout(
    command: &mut Command,
    timeout: Option<Duration>,
    poll_interval: Duration,
) -> Result<ExitStatus> {
    let program = command.get_program().to_string_lossy().into_owned();

    let mut child = command.spawn().map_err(|e| DeskEntryError::ElevationFailed {
        reason: format!("could not start {}: {}", program, e),
    })?;
    debug!("Started {} (PID: {})", program, child.id());

    let Some(timeout) = timeout else {
        return child.wait().map_err(|e| DeskEntryError::ElevationFailed {
            reason: format!("waiting for {} failed: {}", program, e),
        });
    };

    let started = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                debug!("{} exited with {}", program, status);
                return Ok(status);
            }
            Ok(None) => {}
            Err(e) => {
                return Err(DeskEntryError::ElevationFailed {
                    reason: format!("waiting for {} failed: {}", program, e),
                });
            }
        }

        let elapsed = started.elapsed();
        if elapsed >= timeout {
            warn!("{} did not finish within {:?}, terminating", program, timeout);
            terminate_child(&mut child);
            return Err(DeskEntryError::ElevationFailed {
                reason: format!("{} did not finish within {:?}", program, timeout),
            });
        }

        sleep(poll_interval.min(timeout - elapsed));
    }
}

/// Stop a child that overran its deadline: SIGTERM, a short grace period,
/// then SIGKILL. The child is reaped only when a signal was delivered.
fn terminate_child(child: &mut Child) {
    #[cfg(unix)]
    {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        let pid = Pid::from_raw(child.id() as i32);
        match kill(pid, Signal::SIGTERM) {
            Ok(()) => {
                let deadline = Instant::now() + InstallConfig::PROCESS_TERM_GRACE;
                while Instant::now() < deadline {
                    if let Ok(Some(status)) = child.try_wait() {
                        debug!("Process {} terminated gracefully: {}", pid, status);
                        return;
                    }
                    sleep(InstallConfig::PROCESS_POLL_INTERVAL);
                }
            }
            Err(nix::errno::Errno::ESRCH) => {
                let _ = child.try_wait();
                return;
            }
            Err(e) => warn!("Failed to send SIGTERM to {}: {}", pid, e),
        }
    }

    match child.kill() {
        Ok(()) => {
            // Reap so the helper doesn't linger as a zombie.
            if let Err(e) = child.wait() {
                debug!("wait after kill failed: {}", e);
            }
        }
        // A setuid helper can't be signalled by us; leave it to init.
        Err(e) => warn!("Failed to kill process {}: {}", child.id(), e),
    }
}
