//! In-process HTTP server standing in for the 42Nexus backend.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread::JoinHandle;

use nexus_auth::{MemoryTokenStore, TokenStore};
use nexus_client::ApiClient;
use nexus_config::ApiConfig;

/// What the server saw for one request.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
}

/// A canned reply.
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(&'static str, String)>,
}

impl Reply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            headers: Vec::new(),
        }
    }
}

pub struct MockServer {
    pub base_url: String,
    seen: mpsc::Receiver<Seen>,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Serve `replies` in order, one per request, then stop.
    pub fn start(replies: Vec<Reply>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind");
        let port = server.server_addr().to_ip().expect("ip addr").port();
        let (tx, rx) = mpsc::channel();

        let handle = std::thread::spawn(move || {
            for reply in replies {
                let Ok(request) = server.recv() else { return };
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());
                let _ = tx.send(Seen {
                    method: request.method().as_str().to_string(),
                    url: request.url().to_string(),
                    authorization,
                });
                let mut response =
                    tiny_http::Response::from_string(reply.body).with_status_code(reply.status);
                for (name, value) in reply.headers {
                    response = response.with_header(
                        tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes())
                            .expect("header"),
                    );
                }
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/api"),
            seen: rx,
            handle,
        }
    }

    pub fn client(&self, token: Option<&str>) -> ApiClient {
        let tokens: Arc<dyn TokenStore> = match token {
            Some(token) => Arc::new(MemoryTokenStore::with_token(token)),
            None => Arc::new(MemoryTokenStore::default()),
        };
        let config = ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
            ..ApiConfig::default()
        };
        ApiClient::new(&config, tokens).expect("client")
    }

    /// Every request seen, after the server thread has finished.
    pub fn finish(self) -> Vec<Seen> {
        self.handle.join().expect("server thread");
        self.seen.try_iter().collect()
    }
}
