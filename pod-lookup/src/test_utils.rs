//! Mock api server helpers shared by the unit tests.
use http::{Method, Request, Response, StatusCode};
use kube::{client::Body, Client};
use serde_json::json;
use tower_test::mock::{self, Handle, SendResponse};

pub(crate) type MockHandle = Handle<Request<Body>, Response<Body>>;

/// How the mock server answers one request.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reply {
    /// The pod that was asked for
    Pod,
    /// A 404 `Status`
    NotFound,
    /// A transport failure before any response
    ConnectionRefused,
}

pub(crate) fn mock_client() -> (Client, MockHandle) {
    let (mock_service, handle) = mock::pair::<Request<Body>, Response<Body>>();
    (Client::new(mock_service, "default"), handle)
}

pub(crate) fn pod_json(namespace: &str, name: &str) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
        },
        "spec": {
            "containers": [{
                "name": "dnsutils",
                "image": "registry.k8s.io/e2e-test-images/agnhost:2.39",
            }],
        }
    }))
    .unwrap()
}

pub(crate) fn not_found(name: &str) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": format!("pods \"{name}\" not found"),
        "reason": "NotFound",
        "details": { "name": name, "kind": "pods" },
        "code": 404
    }))
    .unwrap()
}

fn answer(request: &Request<Body>, send: SendResponse<Response<Body>>, reply: Reply) {
    // .../namespaces/{namespace}/pods/{name}
    let mut segments = request.uri().path().rsplit('/');
    let name = segments.next().unwrap();
    let namespace = segments.nth(1).unwrap();
    match reply {
        Reply::Pod => {
            let body = Body::from(pod_json(namespace, name));
            send.send_response(Response::builder().body(body).unwrap());
        }
        Reply::NotFound => {
            let body = Body::from(not_found(name));
            let resp = Response::builder().status(StatusCode::NOT_FOUND).body(body).unwrap();
            send.send_response(resp);
        }
        Reply::ConnectionRefused => {
            send.send_error(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ));
        }
    }
}

/// Answer one GET per entry in `replies` and return the paths requested.
pub(crate) fn serve(mut handle: MockHandle, replies: Vec<Reply>) -> tokio::task::JoinHandle<Vec<String>> {
    tokio::spawn(async move {
        let mut paths = Vec::new();
        for reply in replies {
            let (request, send) = handle.next_request().await.expect("service not called");
            assert_eq!(request.method(), Method::GET);
            paths.push(request.uri().path().to_string());
            answer(&request, send, reply);
        }
        paths
    })
}
