//! Output capture for the transcoder process (non-UTF8-safe).
//!
//! ffmpeg can emit non-UTF8 bytes (file names, metadata tags) on stderr.
//! `BufReader::lines()` stops at the first invalid sequence, so lines are
//! read as bytes and decoded lossily.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinHandle;
use tracing::debug;

/// Read `stream` to EOF on a background task, collecting its lines.
pub fn spawn_line_capture(
    stream: impl AsyncRead + Unpin + Send + 'static,
    stream_type: &'static str,
) -> JoinHandle<Vec<String>> {
    tokio::spawn(async move {
        let mut reader = BufReader::new(stream);
        let mut buf: Vec<u8> = Vec::with_capacity(1024);
        let mut lines = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    if buf.last() == Some(&b'\n') {
                        buf.pop();
                        if buf.last() == Some(&b'\r') {
                            buf.pop();
                        }
                    }

                    let line = String::from_utf8_lossy(&buf).into_owned();
                    debug!(%stream_type, "{}", line);
                    lines.push(line);
                }
                Err(e) => {
                    debug!(%stream_type, error = %e, "capture exiting due to read error");
                    break;
                }
            }
        }

        lines
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_captures_lines_and_strips_crlf() {
        let data: &[u8] = b"frame=  1\r\nframe=  2\nlast";
        let lines = spawn_line_capture(data, "stderr").await.unwrap();
        assert_eq!(lines, vec!["frame=  1", "frame=  2", "last"]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        let data: &[u8] = b"title: caf\xe9\nok\n";
        let lines = spawn_line_capture(data, "stderr").await.unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("title: caf"));
        assert_eq!(lines[1], "ok");
    }
}
