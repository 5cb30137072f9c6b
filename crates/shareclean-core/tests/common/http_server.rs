//! Minimal HTTP/1.1 server for integration tests.
//!
//! Routes are matched on the request path (query ignored). Each connection
//! gets one response and is closed.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Route {
    /// 302 with `Location: <target>` (relative or absolute).
    Redirect(String),
    /// 200 text/html with the given body.
    Html(String),
    /// Waits before answering 200 with an empty body.
    Slow(Duration),
    /// 200 text/plain echoing the request's User-Agent header.
    EchoUserAgent,
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Unknown paths get 404.
pub fn start(routes: Vec<(&str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<Vec<(String, Route)>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, r)| (p.to_string(), r))
            .collect(),
    );
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, routes: &[(String, Route)]) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let Ok(request) = std::str::from_utf8(&buf[..n]) else {
        return;
    };
    let (path, user_agent) = parse_request(request);

    let Some((_, route)) = routes.iter().find(|(p, _)| p == path) else {
        respond(&mut stream, "404 Not Found", &[], "");
        return;
    };
    match route {
        Route::Redirect(target) => {
            respond(&mut stream, "302 Found", &[("Location", target)], "");
        }
        Route::Html(body) => {
            respond(
                &mut stream,
                "200 OK",
                &[("Content-Type", "text/html; charset=utf-8")],
                body,
            );
        }
        Route::Slow(delay) => {
            thread::sleep(*delay);
            respond(&mut stream, "200 OK", &[], "");
        }
        Route::EchoUserAgent => {
            respond(
                &mut stream,
                "200 OK",
                &[("Content-Type", "text/plain")],
                user_agent,
            );
        }
    }
}

fn respond(stream: &mut TcpStream, status: &str, headers: &[(&str, &str)], body: &str) {
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        status,
        body.len()
    );
    for (name, value) in headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("\r\n");
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}

/// Returns (path without query, User-Agent value or "").
fn parse_request(request: &str) -> (&str, &str) {
    let mut lines = request.lines();
    let target = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/");
    let path = target.split('?').next().unwrap_or(target);
    let user_agent = lines
        .take_while(|l| !l.trim().is_empty())
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("user-agent"))
        .map(|(_, v)| v.trim())
        .unwrap_or("");
    (path, user_agent)
}
