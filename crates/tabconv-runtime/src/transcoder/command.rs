//! Command construction for the transcoder process.

use std::process::Stdio;

use tabconv_core::TranscodeJob;
use tokio::process::Command;

/// Build the transcoder command for `job`.
///
/// stdin is closed so ffmpeg never waits on a prompt; both output streams
/// are piped for the log.
pub fn build_command(job: &TranscodeJob) -> Command {
    let mut cmd = Command::new(&job.program);
    cmd.args(&job.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    crate::hide_console_window(&mut cmd);
    cmd
}
