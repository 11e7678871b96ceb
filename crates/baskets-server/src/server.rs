use core::convert::Infallible;
use std::{
    net::SocketAddr,
    sync::Arc,
};

use anyhow::Result;
use http_body_util::Full;
use hyper::{
    Method,
    Request,
    Response,
    StatusCode,
    body::Bytes,
};
use hyper_util::rt::TokioIo;
use serde::Serialize;
use tokio::net::{
    TcpListener,
    TcpStream,
};
use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;

/// Service name reported by the version endpoint.
pub const SERVICE_NAME: &str = "request-baskets";

macro_rules! plain_response {
    (
        $status:expr,
        $body:expr
    ) => {
        Ok(hyper::Response::builder()
            .status($status)
            .body($body)
            .unwrap())
    };
}

/// Version information served at `GET {prefix}/api/version`.
#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
}

impl VersionInfo {
    fn current() -> Self {
        Self {
            name: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// HTTP front of the service, bound to the configured listen address.
pub struct BasketsServer {
    pub listener: TcpListener,
    pub config: ServerConfig,
}

impl BasketsServer {
    /// Bind the configured listen address.
    pub async fn bind(config: ServerConfig) -> Result<Self> {
        let listener = TcpListener::bind(config.listen_addr()).await?;
        let listen_addr = listener.local_addr()?;
        tracing::info!(%listen_addr, path_prefix = %config.path_prefix, "Listening on address");

        Ok(Self { listener, config })
    }

    /// Run the accept loop until the cancellation token is cancelled.
    pub async fn run(self, cancel_token: CancellationToken) -> Result<()> {
        let config = Arc::new(self.config);

        loop {
            tokio::select! {
                () = cancel_token.cancelled() => {
                    tracing::info!("Server received cancellation signal, shutting down...");
                    break;
                }
                res = self.listener.accept() => {
                    match res {
                        Ok((stream, client_addr)) => {
                            serve_connection(stream, client_addr, config.clone());
                        }
                        Err(err) => {
                            tracing::error!(?err, "Error accepting connection");
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

fn serve_connection(stream: TcpStream, client_addr: SocketAddr, config: Arc<ServerConfig>) {
    tracing::debug!("Connection from: {}", client_addr);

    // Use an adapter to access something implementing `tokio::io` traits as if they implement
    // `hyper::rt` IO traits.
    let io = TokioIo::new(stream);

    // Spawn a tokio task to serve multiple connections concurrently
    tokio::task::spawn(async move {
        if let Err(err) = hyper::server::conn::http1::Builder::new()
            .serve_connection(
                io,
                hyper::service::service_fn(move |req| {
                    let config = config.clone();
                    async move { handle_request(req, &config).await }
                }),
            )
            .await
        {
            tracing::error!(?err, "Error serving connection");
        }
    });
}

/// Route a request to the operational endpoints under the configured
/// path prefix.
async fn handle_request<B>(
    req: Request<B>,
    config: &ServerConfig,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let Some(path) = req.uri().path().strip_prefix(config.path_prefix.as_str()) else {
        return plain_response!(StatusCode::NOT_FOUND, Full::new(Bytes::from("not found")));
    };

    match (req.method(), path) {
        (&Method::GET, "/health") => {
            plain_response!(StatusCode::OK, Full::new(Bytes::from("ok")))
        }
        (&Method::GET, "/api/version") => {
            let body = serde_json::to_string(&VersionInfo::current()).unwrap();
            plain_response!(StatusCode::OK, Full::new(Bytes::from(body)))
        }
        _ => plain_response!(StatusCode::NOT_FOUND, Full::new(Bytes::from("not found"))),
    }
}
