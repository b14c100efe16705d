use bytes::Bytes;
use http_body_util::Full;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper::{body::Incoming as IncomingBody, Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Wire-shaped gallery listing: 3 pages of 2 photos each, photo `n` titled
/// `Photo n`.
fn gallery_body(page: u32) -> String {
    let per_page = 2u32;
    let first = (page - 1) * per_page + 1;
    let photo: Vec<serde_json::Value> = (first..first + per_page)
        .map(|n| {
            serde_json::json!({
                "id": n.to_string(),
                "secret": format!("s{}", n),
                "server": "7",
                "farm": 8,
                "title": format!("Photo {}", n),
            })
        })
        .collect();
    serde_json::json!({
        "photos": {
            "page": page.to_string(),
            "pages": 3,
            "perpage": per_page.to_string(),
            "total": 6,
            "photo": photo,
        }
    })
    .to_string()
}

fn page_param(query: Option<&str>) -> u32 {
    query
        .unwrap_or("")
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|value| value.parse().ok())
        .unwrap_or(1)
}

pub struct PagedGalleryService {
    hits: Arc<AtomicUsize>,
}

impl Service<Request<IncomingBody>> for PagedGalleryService {
    type Response = Response<Full<Bytes>>;
    type Error = hyper::Error;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<IncomingBody>) -> Self::Future {
        fn ok_response(s: String) -> Result<Response<Full<Bytes>>, hyper::Error> {
            Ok(Response::builder().body(Full::new(Bytes::from(s))).unwrap())
        }

        fn error_response(
            status: hyper::StatusCode,
            s: String,
        ) -> Result<Response<Full<Bytes>>, hyper::Error> {
            Ok(Response::builder()
                .status(status)
                .body(Full::new(Bytes::from(s)))
                .unwrap())
        }

        self.hits.fetch_add(1, Ordering::SeqCst);
        let page = page_param(req.uri().query());
        match req.uri().path() {
            "/rest/" => Box::pin(async move { ok_response(gallery_body(page)) }),
            "/slowrest/" => Box::pin(async move {
                tokio::time::sleep(std::time::Duration::from_millis(300)).await;
                ok_response(gallery_body(page))
            }),
            "/broken/" => Box::pin(async {
                error_response(
                    hyper::StatusCode::INTERNAL_SERVER_ERROR,
                    "gallery backend down".into(),
                )
            }),
            _ => Box::pin(async {
                error_response(hyper::StatusCode::NOT_FOUND, "not found".into())
            }),
        }
    }
}

async fn run_service(
    listener: TcpListener,
    hits: Arc<AtomicUsize>,
) -> anyhow::Result<()> {
    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let service = PagedGalleryService {
            hits: Arc::clone(&hits),
        };
        tokio::task::spawn(async move {
            if let Err(err) =
                http1::Builder::new().serve_connection(io, service).await
            {
                println!("Failed to serve connection: {:?}", err);
            }
        });
    }
}

/// Starts a paged gallery test server on an ephemeral port. Returns its
/// address and a counter incremented once per received request.
pub async fn spawn_gallery_server() -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let hits = Arc::new(AtomicUsize::new(0));
    tokio::task::spawn(run_service(listener, Arc::clone(&hits)));
    (addr, hits)
}
