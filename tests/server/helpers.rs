use roverpic::application::routes::app_router;
use roverpic::application::state::{AppState, AppStateConfig};
use tokio::net::TcpListener;
use tokio::task::AbortHandle;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestApp {
    pub address: String,
    pub mock_server: MockServer,
    server_handle: AbortHandle,
}

impl TestApp {
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }

    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn upstream_request_count(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

/// Spawn the app on an ephemeral port, pointed at a fresh wiremock server
/// standing in for the Mars Photos API.
pub async fn spawn_app() -> TestApp {
    let mock_server = MockServer::start().await;

    let state = AppState::from_config(AppStateConfig {
        mars_api_url: mock_server.uri(),
        api_key: "TEST_KEY".to_string(),
    });

    let app = app_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");

    let local_addr = listener.local_addr().expect("Failed to get local address");
    let address = format!("http://{}", local_addr);

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    })
    .abort_handle();

    TestApp {
        address,
        mock_server,
        server_handle,
    }
}

pub fn photo_json(rover: &str, camera: &str, earth_date: &str, img_src: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 102693,
        "sol": 1000,
        "camera": { "id": 20, "name": camera, "rover_id": 5 },
        "img_src": img_src,
        "earth_date": earth_date,
        "rover": { "id": 5, "name": rover, "status": "complete" }
    })
}

pub fn photos_response(photos: &[serde_json::Value]) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "photos": photos }))
}

/// Mock builder matching any `GET /{rover}/photos` request.
pub fn photos_endpoint() -> wiremock::MockBuilder {
    Mock::given(method("GET")).and(path_regex("^/[a-z]+/photos$"))
}

/// Mount a catch-all mock serving one unbanned Spirit photo.
pub async fn mount_default_photo(app: &TestApp) {
    photos_endpoint()
        .respond_with(photos_response(&[photo_json(
            "Spirit",
            "NAVCAM",
            "2007-02-15",
            "https://mars.test/spirit.jpg",
        )]))
        .mount(&app.mock_server)
        .await;
}

/// POST a JSON ban and return the resulting snapshot.
pub async fn add_ban(app: &TestApp, attribute: &str, value: &str) -> serde_json::Value {
    let client = reqwest::Client::new();
    let response = client
        .post(app.api_url("/bans"))
        .json(&serde_json::json!({ "attribute": attribute, "value": value }))
        .send()
        .await
        .expect("failed to POST ban");

    assert_eq!(response.status(), 200);
    response.json().await.expect("failed to parse snapshot")
}

/// Trigger a fetch and return the resulting snapshot.
pub async fn fetch(app: &TestApp) -> serde_json::Value {
    let client = reqwest::Client::new();
    let response = client
        .post(app.api_url("/fetch"))
        .send()
        .await
        .expect("failed to POST fetch");

    assert_eq!(response.status(), 200);
    response.json().await.expect("failed to parse snapshot")
}

/// Client that does not follow redirects, so tests can assert the 303 itself.
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("failed to build client")
}
