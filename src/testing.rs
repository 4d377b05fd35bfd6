// =============================================================================
// Connect-U Web - Test Doubles
// =============================================================================

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::{ApiClient, ApiError, HttpRequest, HttpResponse, HttpTransport};
use crate::session::{Navigator, Session, TokenStorage};

/// In-memory stand-in for `localStorage`.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    fn delete(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}

/// Records every redirect instead of leaving the page.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.visited.lock().push(path.to_string());
    }
}

/// Replays queued responses in order and records the requests it saw.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses.lock().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses
            .lock()
            .push_back(Err(ApiError::Network(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}

/// Everything a test needs to drive the client and inspect its effects.
pub struct Harness {
    pub client: ApiClient<ScriptedTransport>,
    pub transport: ScriptedTransport,
    pub storage: MemoryStorage,
    pub navigator: RecordingNavigator,
}

impl Harness {
    pub fn new() -> Self {
        let transport = ScriptedTransport::default();
        let storage = MemoryStorage::default();
        let navigator = RecordingNavigator::default();
        let session = Session::new(storage.clone(), navigator.clone());
        let client = ApiClient::with_transport("", transport.clone(), session);

        Self {
            client,
            transport,
            storage,
            navigator,
        }
    }

    /// Same as `new`, with a token pair already stored.
    pub fn signed_in() -> Self {
        let harness = Self::new();
        harness.storage.set("access", "access-token");
        harness.storage.set("refresh", "refresh-token");
        harness
    }
}
