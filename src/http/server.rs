use crate::core::service::ActivityService;
use crate::core::ActivityStore;
use crate::http::router::{self, ApiResponse};
use crate::utils::error::{Result, SignupError};
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Header, Request, Response, Server};

pub struct ActivityServer<S: ActivityStore> {
    server: Arc<Server>,
    service: ActivityService<S>,
}

/// 讓其他執行緒可以停止 `ActivityServer::run` 的迴圈
#[derive(Clone)]
pub struct ShutdownHandle {
    server: Arc<Server>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        tracing::info!("🛑 Shutting down activity server");
        self.server.unblock();
    }
}

impl<S: ActivityStore + 'static> ActivityServer<S> {
    pub fn bind(addr: &str, service: ActivityService<S>) -> Result<Self> {
        let server = Server::http(addr).map_err(|e| SignupError::ServerError {
            message: format!("Failed to bind {}: {}", addr, e),
        })?;

        Ok(Self {
            server: Arc::new(server),
            service,
        })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            server: Arc::clone(&self.server),
        }
    }

    /// 阻塞直到 `ShutdownHandle::shutdown` 被呼叫
    pub fn run(&self) {
        if let Some(addr) = self.local_addr() {
            tracing::info!("🚀 Activity server listening on http://{}", addr);
        }

        for request in self.server.incoming_requests() {
            self.respond(request);
        }

        tracing::info!("Activity server stopped");
    }

    /// 在 tokio 的 blocking 執行緒上跑伺服器
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::task::spawn_blocking(move || self.run())
    }

    fn respond(&self, request: Request) {
        let method = request.method().clone();
        let url = request.url().to_string();

        let api_response = router::handle(&self.service, &method, &url);
        tracing::debug!("{} {} -> {}", method, url, api_response.status);

        if let Err(e) = request.respond(into_http_response(api_response)) {
            tracing::warn!("Failed to write response for {} {}: {}", method, url, e);
        }
    }
}

fn into_http_response(api_response: ApiResponse) -> Response<std::io::Cursor<Vec<u8>>> {
    let response = Response::from_data(api_response.body.to_string().into_bytes())
        .with_status_code(api_response.status);

    match Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
