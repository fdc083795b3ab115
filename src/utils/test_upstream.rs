//! Local upstream servers for handler tests.

use actix_web::{dev::ServerHandle, http::StatusCode, web, App, HttpResponse, HttpServer};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};
use url::Url;

pub struct TestUpstream {
    pub url: Url,
    handle: ServerHandle,
}

impl TestUpstream {
    /// Serve `body` with `status` on every path.
    pub fn start(status: StatusCode, body: &'static [u8]) -> Self {
        let server = HttpServer::new(move || {
            App::new().default_service(web::to(move || async move {
                HttpResponse::build(status).body(body)
            }))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("failed to bind test upstream");
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            url: Url::parse(&format!("http://{addr}/sub")).unwrap(),
            handle,
        }
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// Upstream that promises a longer body than it sends.
pub async fn truncated_upstream() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    actix_web::rt::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let _ = stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 4096\r\n\r\nproxies: []\n")
                .await;
        }
    });
    Url::parse(&format!("http://{addr}/sub")).unwrap()
}

/// Upstream that accepts connections and never answers.
pub async fn stalled_upstream() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    actix_web::rt::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    Url::parse(&format!("http://{addr}/sub")).unwrap()
}

/// URL of a local port nothing listens on.
pub fn refused_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/sub")).unwrap()
}
