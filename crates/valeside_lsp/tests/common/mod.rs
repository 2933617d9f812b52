#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Vale output for one error on the first four characters of line 1.
pub const ALERT_JSON: &str = r#"{"stdin.md":[{"Line":1,"Span":[1,4],"Severity":"error","Message":"Bad word.","Description":"","Check":"Test.Bad","Link":"https://vale.sh"}]}"#;

/// Writes an executable stand-in for Vale into `dir`.
///
/// Every lint call appends a line to `dir/calls`. `ls-config` reports
/// `dir/styles` as the styles path and `new <point>` echoes the point.
#[cfg(unix)]
pub fn stub_vale(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let styles = dir.join("styles");
    std::fs::create_dir_all(styles.join("Test")).unwrap();
    std::fs::write(styles.join("Test/Bad.yml"), "extends: existence\n").unwrap();

    let script = format!(
        r#"#!/bin/sh
case "$1" in
  ls-config) printf '{{"StylesPath": "{styles}"}}' ;;
  new) printf 'extends: %s\n' "$2" ;;
  *)
    cat > /dev/null
    echo call >> "{calls}"
    printf '%s' '{alerts}'
    ;;
esac
"#,
        styles = styles.display(),
        calls = dir.join("calls").display(),
        alerts = ALERT_JSON,
    );

    let path = dir.join("vale");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Number of lint calls the stub has answered.
pub fn call_count(dir: &Path) -> usize {
    std::fs::read_to_string(dir.join("calls"))
        .map(|s| s.lines().count())
        .unwrap_or(0)
}

pub async fn send_msg<W: AsyncWriteExt + Unpin>(writer: &mut W, msg: &str) {
    let content = format!("Content-Length: {}\r\n\r\n{}", msg.len(), msg);
    writer.write_all(content.as_bytes()).await.unwrap();
    writer.flush().await.unwrap();
}

pub async fn recv_msg<R: AsyncReadExt + Unpin>(reader: &mut R) -> Option<String> {
    let mut buffer = Vec::new();
    let mut content_length = 0;

    loop {
        let byte = reader.read_u8().await.ok()?;
        buffer.push(byte);
        if buffer.ends_with(b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buffer);
            for line in headers.lines() {
                if line.to_lowercase().starts_with("content-length:") {
                    let parts: Vec<&str> = line.split(':').collect();
                    if parts.len() == 2 {
                        content_length = parts[1].trim().parse().unwrap_or_else(|e| {
                            panic!("Failed to parse Content-Length: {e}, header: {line}")
                        });
                    }
                }
            }
            break;
        }
    }

    if content_length == 0 {
        return None;
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).await.ok()?;

    Some(String::from_utf8(body).unwrap())
}
