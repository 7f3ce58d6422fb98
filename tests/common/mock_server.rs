//! One-shot HTTP server for client tests.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// A local server handling exactly one connection
pub struct MockServer {
    /// Base URL (e.g., "http://127.0.0.1:54321")
    pub url: String,
    handle: JoinHandle<Option<String>>,
}

impl MockServer {
    /// Answer with `status` and a JSON body
    pub async fn json(status: u16, body: &str) -> Self {
        let reason = match status {
            200 => "OK",
            403 => "Forbidden",
            404 => "Not Found",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            _ => "Status",
        };
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\n\
             Content-Type: application/json; charset=utf-8\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\
             \r\n\
             {body}",
            body.len()
        );
        Self::start(Some(response)).await
    }

    /// Accept the connection, read the request, never answer
    pub async fn silent() -> Self {
        Self::start(None).await
    }

    /// A URL nothing is listening on
    pub async fn closed_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    async fn start(response: Option<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.ok()?;
            let request = read_request_head(&mut socket).await;

            match response {
                Some(response) => {
                    socket.write_all(response.as_bytes()).await.ok()?;
                    let _ = socket.shutdown().await;
                }
                None => tokio::time::sleep(Duration::from_secs(30)).await,
            }
            Some(request)
        });

        Self { url, handle }
    }

    /// The request head the server received (request line + headers)
    pub async fn received_request(self) -> String {
        self.handle.await.ok().flatten().unwrap_or_default()
    }
}

async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let Ok(n) = socket.read(&mut chunk).await else {
            break;
        };
        if n == 0 {
            break;
        }
        head.extend_from_slice(&chunk[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    String::from_utf8_lossy(&head).into_owned()
}
