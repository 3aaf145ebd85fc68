//! Browser login through a loopback callback server.
//!
//! 1. Bind `tiny_http` on `127.0.0.1` (random port unless configured)
//! 2. Open the browser on the backend's login URL, passing the loopback
//!    address as `redirect_uri` together with a random `state`
//! 3. Wait for `/callback?token=...` (blocking, so in `spawn_blocking`)
//! 4. Hand the token back; persisting it is the caller's job

use std::io::Cursor;
use std::time::{Duration, Instant};

use tiny_http::{Header, Response, Server};

use crate::callback;
use crate::error::AuthError;

/// Inputs of [`login`].
#[derive(Debug, Clone)]
pub struct LoginOptions {
    pub login_url: String,
    pub timeout: Duration,
    pub open_browser: bool,
    /// Loopback port; `0` picks a free one.
    pub callback_port: u16,
}

/// A bound loopback server waiting for one OAuth redirect.
pub struct CallbackListener {
    server: Server,
    port: u16,
    state: String,
}

impl CallbackListener {
    /// Bind on `127.0.0.1:{port}` and generate a fresh CSRF state.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::BrowserFlowFailed`] if the port cannot be bound or
    /// no randomness is available.
    pub fn bind(port: u16) -> Result<Self, AuthError> {
        let server = Server::http(("127.0.0.1", port))
            .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to bind: {e}")))?;
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .ok_or_else(|| AuthError::BrowserFlowFailed("no port".into()))?;

        let mut nonce = [0u8; 16];
        getrandom::fill(&mut nonce).map_err(|e| {
            AuthError::BrowserFlowFailed(format!("failed to generate CSRF nonce: {e}"))
        })?;
        let state = nonce.iter().map(|b| format!("{b:02x}")).collect();

        Ok(Self {
            server,
            port,
            state,
        })
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn redirect_url(&self) -> String {
        format!("http://127.0.0.1:{}/callback", self.port)
    }

    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Block until a request to `.../callback` carries a token.
    ///
    /// Other paths (favicon, refreshes) get an empty `204` and are skipped. A
    /// callback without a token is answered with a waiting page so an
    /// intermediate redirect does not end the flow.
    ///
    /// # Errors
    ///
    /// [`AuthError::BrowserFlowFailed`] on timeout or a receive error,
    /// [`AuthError::StateMismatch`] when the echoed state is wrong.
    pub fn wait(self, timeout: Duration) -> Result<String, AuthError> {
        let deadline = Instant::now() + timeout;
        let timed_out = || {
            AuthError::BrowserFlowFailed(format!(
                "browser callback timed out after {}s",
                timeout.as_secs()
            ))
        };

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(timed_out());
            }

            let request = match self.server.recv_timeout(remaining) {
                Ok(Some(request)) => request,
                Ok(None) => return Err(timed_out()),
                Err(e) => return Err(AuthError::BrowserFlowFailed(format!("recv error: {e}"))),
            };

            let url = request.url().to_string();
            let path = url.split('?').next().unwrap_or_default();
            if !path.ends_with("/callback") {
                let _ = request.respond(Response::from_string("").with_status_code(204));
                continue;
            }

            match callback::exchange(&url, Some(&self.state)) {
                Ok(token) => {
                    let _ = request.respond(html(
                        "<h1>Signed in to 42Nexus</h1><p>You can close this tab.</p>",
                    ));
                    return Ok(token);
                }
                Err(AuthError::MissingToken) => {
                    let _ = request.respond(html(
                        "<h1>Waiting for authentication…</h1><p>Redirecting, please wait.</p>",
                    ));
                }
                Err(error) => {
                    let _ = request.respond(
                        html("<h1>Authentication failed</h1><p>Check the terminal.</p>")
                            .with_status_code(400),
                    );
                    return Err(error);
                }
            }
        }
    }
}

fn html(body: &str) -> Response<Cursor<Vec<u8>>> {
    let response = Response::from_string(format!("<html><body>{body}</body></html>"));
    match Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..]) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

/// Login URL with the loopback redirect and state appended.
#[must_use]
pub fn authorize_url(login_url: &str, redirect_url: &str, state: &str) -> String {
    let separator = if login_url.contains('?') { '&' } else { '?' };
    format!(
        "{login_url}{separator}redirect_uri={}&state={}",
        urlencoding::encode(redirect_url),
        urlencoding::encode(state)
    )
}

/// Run the whole browser login and return the issued session token.
///
/// # Errors
///
/// Returns [`AuthError::BrowserFlowFailed`] if the server cannot bind or the
/// callback times out, and any error of [`CallbackListener::wait`].
pub async fn login(options: &LoginOptions) -> Result<String, AuthError> {
    let listener = CallbackListener::bind(options.callback_port)?;
    let url = authorize_url(&options.login_url, &listener.redirect_url(), listener.state());

    if options.open_browser {
        eprintln!("Opening browser to: {url}");
        if let Err(error) = open::that(&url) {
            tracing::warn!(%error, "failed to open browser");
            eprintln!("Open the URL above manually, then return here.");
        }
    } else {
        eprintln!("Open this URL to sign in: {url}");
    }
    eprintln!(
        "Waiting for the redirect on {} (or run `nexus auth callback <url>`)",
        listener.redirect_url()
    );

    let timeout = options.timeout;
    tokio::task::spawn_blocking(move || listener.wait(timeout))
        .await
        .map_err(|e| AuthError::BrowserFlowFailed(format!("spawn_blocking join: {e}")))?
}
