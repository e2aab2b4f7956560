//! HTTP-backed asset operations. Each service borrows the shared
//! [`ApiClient`](mecanaut_client::ApiClient), so the session and the 401
//! handling are the client's.

mod machine;
mod plant;
mod production_line;

pub use machine::MachineService;
pub use plant::PlantService;
pub use production_line::ProductionLineService;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use mecanaut_client::{ApiClient, ApiConfig, MemorySession, NoopNavigator};

    /// Client aimed at a port nothing listens on. Any request fails with a
    /// network error, so a validation error proves no request was sent.
    pub fn offline_client() -> Arc<ApiClient> {
        client("http://127.0.0.1:9")
    }

    pub fn client(base: &str) -> Arc<ApiClient> {
        Arc::new(
            ApiClient::new(
                ApiConfig::new(base),
                Arc::new(MemorySession::with_token("t0k")),
                Arc::new(NoopNavigator),
            )
            .unwrap(),
        )
    }

    pub async fn serve(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }
}
