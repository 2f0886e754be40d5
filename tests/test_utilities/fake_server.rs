use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Canned answer for requests whose `METHOD /path` starts with `prefix`
pub struct Route {
    pub prefix: &'static str,
    pub status: u16,
    pub body: &'static str,
}

pub fn route(prefix: &'static str, status: u16, body: &'static str) -> Route {
    Route {
        prefix,
        status,
        body,
    }
}

/// Minimal HTTP/1.1 server standing in for Dependency-Track
///
/// Runs on a detached thread until the test process exits. Unrouted
/// requests get a 404.
pub struct FakeServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                handle(stream, &routes, &seen);
            }
        });

        Self { base_url, requests }
    }

    /// Received requests as `METHOD /path`
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(stream: TcpStream, routes: &[Route], seen: &Mutex<Vec<String>>) -> Option<()> {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    let mut content_length = 0;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }
    let mut payload = vec![0; content_length];
    reader.read_exact(&mut payload).ok()?;

    let mut parts = request_line.split_whitespace();
    let request = format!(
        "{} {}",
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default()
    );

    let (status, body) = routes
        .iter()
        .find(|r| request.starts_with(r.prefix))
        .map(|r| (r.status, r.body))
        .unwrap_or((404, ""));
    seen.lock().unwrap().push(request);

    let response = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let mut stream = reader.into_inner();
    stream.write_all(response.as_bytes()).ok()?;
    stream.flush().ok()
}
