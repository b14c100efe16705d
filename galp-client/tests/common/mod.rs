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

/// Wire-shaped gallery listing served on the happy path.
pub const GALLERY_BODY: &str = r#"{"photos":{"page":"1","pages":5,"perpage":"3","total":15,"photo":[{"id":"1","secret":"abc","server":"2","farm":3,"title":"Color"},{"id":"4","secret":"def","server":"5","farm":6,"title":"Owens River and Sea Grass"}]}}"#;

pub struct GalleryService {
    hits: Arc<AtomicUsize>,
}

impl Service<Request<IncomingBody>> for GalleryService {
    type Response = Response<Full<Bytes>>;
    type Error = hyper::Error;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<IncomingBody>) -> Self::Future {
        fn ok_response(s: String) -> Result<Response<Full<Bytes>>, hyper::Error> {
            Ok(Response::builder().body(Full::new(Bytes::from(s))).unwrap())
        }

        fn fail_response(s: String) -> Result<Response<Full<Bytes>>, hyper::Error> {
            Ok(Response::builder()
                .status(hyper::StatusCode::NOT_FOUND)
                .body(Full::new(Bytes::from(s)))
                .unwrap())
        }

        self.hits.fetch_add(1, Ordering::SeqCst);
        match req.uri().path() {
            "/rest/" => Box::pin(async { ok_response(GALLERY_BODY.into()) }),
            "/badjson" => Box::pin(async { ok_response("{not valid json".into()) }),
            "/empty" => Box::pin(async { ok_response(String::new()) }),
            "/slow" => Box::pin(async {
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                ok_response(GALLERY_BODY.into())
            }),
            // Return the 404 Not Found for other routes.
            _ => Box::pin(async { fail_response("not found".into()) }),
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
        let service = GalleryService {
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

/// Starts a gallery test server on an ephemeral port. Returns its address
/// and a counter incremented once per received request.
pub async fn spawn_gallery_server() -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let hits = Arc::new(AtomicUsize::new(0));
    tokio::task::spawn(run_service(listener, Arc::clone(&hits)));
    (addr, hits)
}

/// An address nothing is listening on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    addr
}
