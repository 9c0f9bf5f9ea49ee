// Shared test helpers: a minimal fake web host on a local port.
//
// The host answers plain HTTP requests with a canned response and drops TLS
// handshakes, so `https://127.0.0.1:<port>/` fails fast like a host without HTTPS.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// First byte of a TLS record carrying a handshake message.
const TLS_HANDSHAKE_RECORD: u8 = 0x16;

/// Canned response: permanent redirect to HTTPS.
#[allow(dead_code)] // Used by other test files
pub const REDIRECT_TO_HTTPS: &str = "HTTP/1.1 301 Moved Permanently\r\n\
Location: https://example.com/\r\n\
Content-Length: 0\r\n\
Connection: close\r\n\r\n";

/// Canned response: plain page, no redirect.
#[allow(dead_code)] // Used by other test files
pub const PLAIN_OK: &str = "HTTP/1.1 200 OK\r\n\
Content-Type: text/html\r\n\
Content-Length: 5\r\n\
Connection: close\r\n\r\nhello";

/// Starts a fake host that answers every plain HTTP request with `response`.
pub async fn spawn_http_only_host(response: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake host");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                loop {
                    match socket.read(&mut buf[read..]).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => read += n,
                    }
                    if buf[0] == TLS_HANDSHAKE_RECORD {
                        return;
                    }
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                    if read == buf.len() {
                        return;
                    }
                }
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}
