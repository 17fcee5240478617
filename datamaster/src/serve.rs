//! Minimal blocking HTTP server for previewing the rendered page.
//!
//! The page is rendered once up front; requests are answered from memory.

use std::io::{self, BufRead, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use datamaster_site::RenderedLanding;

const HTML: &str = "text/html; charset=utf-8";
const JSON: &str = "application/json";
const TEXT: &str = "text/plain";

/// How long a connection may sit idle before its request line arrives.
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Pre-rendered responses.
#[derive(Clone, Debug)]
pub struct Pages {
    pub document: String,
    pub shell: String,
    pub metadata_json: String,
}

impl Pages {
    pub fn from_rendered(page: &RenderedLanding) -> Result<Self> {
        Ok(Self {
            document: page.document.clone(),
            shell: page.shell.clone(),
            metadata_json: serde_json::to_string_pretty(&page.metadata)
                .context("failed to serialize metadata")?,
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Response<'a> {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: &'a [u8],
    pub include_body: bool,
}

pub fn bind(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port)).with_context(|| format!("failed to bind {}:{}", host, port))
}

/// Answer requests until the listener fails. Each connection gets its own
/// thread, so an idle client cannot hold up the others.
pub fn run(listener: TcpListener, pages: Pages) -> Result<()> {
    let pages = Arc::new(pages);
    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                let pages = Arc::clone(&pages);
                thread::spawn(move || {
                    if let Err(e) = handle_connection(&mut stream, &pages) {
                        debug!("connection dropped: {}", e);
                    }
                });
            }
            Err(e) => warn!("accept failed: {}", e),
        }
    }
    Ok(())
}

fn handle_connection(stream: &mut TcpStream, pages: &Pages) -> io::Result<()> {
    stream.set_read_timeout(Some(READ_TIMEOUT))?;

    let mut reader = io::BufReader::new(&*stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;

    // drain headers so the client sees a clean close
    let mut header = String::new();
    while reader.read_line(&mut header)? > 2 {
        header.clear();
    }

    let response = route(pages, request_line.trim_end());
    debug!(request = request_line.trim_end(), status = response.status);
    write_response(stream, &response)
}

/// Map a request line to a response.
pub fn route<'a>(pages: &'a Pages, request_line: &str) -> Response<'a> {
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");
    let is_head = method.eq_ignore_ascii_case("head");

    if !(method.eq_ignore_ascii_case("get") || is_head) {
        return Response {
            status: "HTTP/1.1 405 Method Not Allowed",
            content_type: TEXT,
            body: b"method not allowed",
            include_body: true,
        };
    }

    let path = target.split(['?', '#']).next().unwrap_or("/");
    let (status, content_type, body) = match path {
        "/" | "/index.html" => ("HTTP/1.1 200 OK", HTML, pages.document.as_bytes()),
        "/shell" | "/shell.html" => ("HTTP/1.1 200 OK", HTML, pages.shell.as_bytes()),
        "/metadata.json" => ("HTTP/1.1 200 OK", JSON, pages.metadata_json.as_bytes()),
        _ => ("HTTP/1.1 404 Not Found", TEXT, b"not found".as_slice()),
    };

    Response {
        status,
        content_type,
        body,
        include_body: !is_head,
    }
}

fn write_response(stream: &mut TcpStream, response: &Response<'_>) -> io::Result<()> {
    let header = format!(
        "{}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.content_type,
        response.body.len()
    );
    stream.write_all(header.as_bytes())?;
    if response.include_body {
        stream.write_all(response.body)?;
    }
    stream.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn pages() -> Pages {
        Pages {
            document: "<!DOCTYPE html><p>ready</p>".into(),
            shell: "<!DOCTYPE html><p>Loading logos...</p>".into(),
            metadata_json: r#"{"title":"x"}"#.into(),
        }
    }

    #[test]
    fn routes_known_paths() {
        let pages = pages();

        let root = route(&pages, "GET / HTTP/1.1");
        assert_eq!(root.status, "HTTP/1.1 200 OK");
        assert_eq!(root.content_type, HTML);
        assert_eq!(root.body, pages.document.as_bytes());

        let shell = route(&pages, "GET /shell?debug=1 HTTP/1.1");
        assert_eq!(shell.body, pages.shell.as_bytes());

        let meta = route(&pages, "GET /metadata.json HTTP/1.1");
        assert_eq!(meta.content_type, JSON);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let pages = pages();
        let resp = route(&pages, "GET /api/og HTTP/1.1");
        assert_eq!(resp.status, "HTTP/1.1 404 Not Found");
    }

    #[test]
    fn head_omits_body_and_post_is_rejected() {
        let pages = pages();
        let head = route(&pages, "HEAD / HTTP/1.1");
        assert_eq!(head.status, "HTTP/1.1 200 OK");
        assert!(!head.include_body);

        let post = route(&pages, "POST / HTTP/1.1");
        assert_eq!(post.status, "HTTP/1.1 405 Method Not Allowed");
    }

    #[test]
    fn serves_over_tcp() {
        let listener = bind("127.0.0.1", 0).unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || run(listener, pages()));

        let mut client = TcpStream::connect(addr).unwrap();
        client
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .unwrap();
        let mut reply = String::new();
        client.read_to_string(&mut reply).unwrap();

        assert!(reply.starts_with("HTTP/1.1 200 OK"));
        assert!(reply.contains("Content-Type: text/html"));
        assert!(reply.ends_with("<p>ready</p>"));
    }

    #[test]
    fn idle_connection_does_not_block_others() {
        let listener = bind("127.0.0.1", 0).unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || run(listener, pages()));

        // connects but never sends a request line
        let _idle = TcpStream::connect(addr).unwrap();

        let mut client = TcpStream::connect(addr).unwrap();
        client
            .set_read_timeout(Some(Duration::from_secs(3)))
            .unwrap();
        client
            .write_all(b"GET /shell HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .unwrap();
        let mut reply = String::new();
        client.read_to_string(&mut reply).unwrap();

        assert!(reply.starts_with("HTTP/1.1 200 OK"));
        assert!(reply.ends_with("<p>Loading logos...</p>"));
    }
}
