//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use notes_server::config::ServerConfig;
use notes_server::http::HttpServer;
use notes_server::lifecycle::Shutdown;
use tempfile::TempDir;

/// A server running on an ephemeral port over a scratch cache directory.
pub struct TestServer {
    pub addr: SocketAddr,
    pub cache: TempDir,
    pub shutdown: Shutdown,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start() -> Self {
        let cache = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::default();
        config.listener.port = 0;
        config.storage.cache_dir = cache.path().to_path_buf();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = Shutdown::new();
        let server = HttpServer::new(config);
        let server_shutdown = shutdown.subscribe();
        tokio::spawn(async move {
            let _ = server.run(listener, server_shutdown).await;
        });

        // Listener is already bound; give the accept loop a moment.
        tokio::time::sleep(Duration::from_millis(50)).await;

        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .no_proxy()
            .build()
            .unwrap();

        Self {
            addr,
            cache,
            shutdown,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    #[allow(dead_code)]
    pub async fn create(&self, name: &str, note: &str) -> reqwest::Response {
        self.client
            .post(self.url("/write"))
            .form(&[("note_name", name), ("note", note)])
            .send()
            .await
            .expect("server unreachable")
    }

    #[allow(dead_code)]
    pub async fn update(&self, name: &str, content: &str) -> reqwest::Response {
        self.client
            .put(self.url(&format!("/notes/{name}")))
            .form(&[("noteContent", content)])
            .send()
            .await
            .expect("server unreachable")
    }

    #[allow(dead_code)]
    pub async fn get(&self, name: &str) -> reqwest::Response {
        self.client
            .get(self.url(&format!("/notes/{name}")))
            .send()
            .await
            .expect("server unreachable")
    }

    #[allow(dead_code)]
    pub async fn delete(&self, name: &str) -> reqwest::Response {
        self.client
            .delete(self.url(&format!("/notes/{name}")))
            .send()
            .await
            .expect("server unreachable")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}
