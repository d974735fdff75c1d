// src/core/net.rs
// HTTP/1.0 GET over TCP. The catalog is served over plain HTTP, and HTTP/1.0
// makes the server close the connection at the end (no chunked transfer).

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::NET_TIMEOUT_SECS;
use crate::error::NetError;

pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, NetError> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: course_finder/{}\r\nAccept-Charset: utf-8\r\nConnection: close\r\n\r\n",
        path, host, env!("CARGO_PKG_VERSION")
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    split_response(&String::from_utf8_lossy(&buf), host, path)
}

/// Check the status line and return the body.
fn split_response(resp: &str, host: &str, path: &str) -> Result<String, NetError> {
    let status = resp.split("\r\n").next().unwrap_or("");
    if status.split_whitespace().nth(1) != Some("200") {
        return Err(NetError::Status { status: status.to_string(), host: host.to_string(), path: path.to_string() });
    }
    let body_idx = resp.find("\r\n\r\n").ok_or(NetError::Malformed)? + 4;
    Ok(resp[body_idx..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_after_headers() {
        let resp = "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n<table></table>";
        assert_eq!(split_response(resp, "h", "/p").unwrap(), "<table></table>");
    }

    #[test]
    fn non_200_is_an_error() {
        let resp = "HTTP/1.1 404 Not Found\r\n\r\n";
        let err = split_response(resp, "h", "/p").unwrap_err();
        assert!(matches!(err, NetError::Status { .. }));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn missing_header_terminator_is_malformed() {
        let resp = "HTTP/1.0 200 OK\r\nServer: x";
        assert!(matches!(split_response(resp, "h", "/p"), Err(NetError::Malformed)));
    }
}
