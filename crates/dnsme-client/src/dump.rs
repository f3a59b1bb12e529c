//! Verbatim request/response dumps for `--debug`.

use reqwest::header::HeaderMap;
use reqwest::{Request, StatusCode};
use std::io::Write;
use std::sync::Mutex;

/// Destination for raw HTTP dumps
pub(crate) struct DumpSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl DumpSink {
    pub(crate) fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub(crate) fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Dump an outgoing request
    pub(crate) fn request(&self, request: &Request) {
        let mut text = format!("{} {} {:?}\r\n", request.method(), request.url(), request.version());
        push_headers(&mut text, request.headers());
        text.push_str("\r\n");
        if let Some(body) = request.body().and_then(reqwest::Body::as_bytes) {
            text.push_str(&String::from_utf8_lossy(body));
        }
        self.write(&text);
    }

    /// Dump an incoming response
    pub(crate) fn response(&self, status: StatusCode, headers: &HeaderMap, body: &str) {
        let mut text = format!("HTTP {status}\r\n");
        push_headers(&mut text, headers);
        text.push_str("\r\n");
        text.push_str(body);
        self.write(&text);
    }

    fn write(&self, text: &str) {
        // Dump failures must never change the outcome of a request.
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{text}");
            let _ = out.flush();
        }
    }
}

fn push_headers(text: &mut String, headers: &HeaderMap) {
    for (name, value) in headers {
        text.push_str(name.as_str());
        text.push_str(": ");
        text.push_str(&String::from_utf8_lossy(value.as_bytes()));
        text.push_str("\r\n");
    }
}
