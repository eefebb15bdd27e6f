use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub const LAUT_BIRU_JSON: &str = r#"{
  "data": {
    "id": 1,
    "slug": "laut-biru",
    "title": "Laut Biru",
    "description": "<p>Bagus</p><script>alert(1)</script>",
    "price": "75000.00",
    "cover": "covers/laut-biru.jpg",
    "isbn": "978-602-0000-00-1",
    "created_at": "2024-08-17T03:00:00.000000Z",
    "categories": [{"id": 1, "category": "Fiksi"}],
    "book_authors": [{"book_writter": {"name": "Andi"}}]
  }
}"#;

pub const RECOMMENDED_JSON: &str = r#"{
  "data": [
    {"id": 1, "slug": "laut-biru", "title": "Laut Biru", "price": 75000, "cover": "covers/laut-biru.jpg"},
    {"id": 2, "slug": "gunung-hijau", "title": "Gunung Hijau", "price": 50000, "cover": null},
    {"id": 3, "slug": "langit-senja", "title": "Langit Senja", "price": 0}
  ]
}"#;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubMode {
    Healthy,
    /// Every request answers 500.
    Broken,
}

pub struct CatalogStub {
    pub base_url: String,
    pub book_requests: Arc<AtomicUsize>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl CatalogStub {
    pub fn spawn(mode: StubMode) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start catalog stub server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}/api");

        let book_requests = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&book_requests);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let url = request.url().to_string();
                let path = url.split('?').next().unwrap_or(&url).to_string();

                let (status, body) = if mode == StubMode::Broken {
                    (500, r#"{"message": "Server Error"}"#.to_string())
                } else if path == "/api/books/recommended" {
                    (200, RECOMMENDED_JSON.to_string())
                } else if let Some(slug) = path.strip_prefix("/api/books/") {
                    counter.fetch_add(1, Ordering::SeqCst);
                    if slug == "laut-biru" {
                        (200, LAUT_BIRU_JSON.to_string())
                    } else {
                        (404, r#"{"message": "Not Found"}"#.to_string())
                    }
                } else {
                    (404, "not found".to_string())
                };

                let mut resp = tiny_http::Response::from_string(body).with_status_code(status);
                let header =
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .expect("content-type header");
                resp.add_header(header);
                let _ = request.respond(resp);
            }
        });

        Self {
            base_url,
            book_requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    #[allow(dead_code)]
    pub fn book_requests(&self) -> usize {
        self.book_requests.load(Ordering::SeqCst)
    }
}

impl Drop for CatalogStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
