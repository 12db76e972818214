//! In-process fakes for the browser ports, shared by the service tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::services::http::{HttpClient, HttpRequest, HttpResponse, Method};
use crate::utils::browser::{Dialogs, Navigator};

pub const BASE_URL: &str = "http://api.test";

#[derive(Default)]
struct BackendState {
    collections: HashMap<String, Vec<Value>>,
    next_id: u64,
    requests: Vec<HttpRequest>,
    overrides: HashMap<(Method, String), AppResult<HttpResponse>>,
}

/// json-server lookalike: `/{collection}` and `/{collection}/{id}`
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<BackendState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().next_id = 100;
        backend
    }

    pub fn with_collection(self, name: &str, items: Value) -> Self {
        let items = match items {
            Value::Array(items) => items,
            other => vec![other],
        };
        self.state.borrow_mut().collections.insert(name.to_string(), items);
        self
    }

    /// Fixed answer for one route, bypassing the collections
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        let response = HttpResponse {
            status,
            status_text: status_text(status).to_string(),
            body: body.to_string(),
        };
        self.state
            .borrow_mut()
            .overrides
            .insert((method, path.to_string()), Ok(response));
    }

    /// Simulate the request never reaching the server
    pub fn fail(&self, method: Method, path: &str) {
        self.state.borrow_mut().overrides.insert(
            (method, path.to_string()),
            Err(AppError::Transport("Failed to fetch".to_string())),
        );
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        let url = format!("{}{}", BASE_URL, path);
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }

    pub fn collection(&self, name: &str) -> Vec<Value> {
        self.state.borrow().collections.get(name).cloned().unwrap_or_default()
    }

    fn handle(&self, method: Method, path: &str, body: Option<&str>) -> HttpResponse {
        let mut state = self.state.borrow_mut();
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

        match (method, segments.as_slice()) {
            (Method::Get, [name]) => match state.collections.get(*name) {
                Some(items) => reply(200, Value::Array(items.clone())),
                None => reply(404, Value::Object(Default::default())),
            },
            (Method::Post, [name]) => {
                let mut item: Value = body.and_then(|b| serde_json::from_str(b).ok()).unwrap_or(Value::Null);
                if item.get("id").is_none() {
                    let id = state.next_id;
                    state.next_id += 1;
                    if let Value::Object(map) = &mut item {
                        map.insert("id".to_string(), Value::String(id.to_string()));
                    }
                }
                state.collections.entry(name.to_string()).or_default().push(item.clone());
                reply(201, item)
            }
            (Method::Put, [name, id]) => {
                let mut item: Value = body.and_then(|b| serde_json::from_str(b).ok()).unwrap_or(Value::Null);
                let items = state.collections.entry(name.to_string()).or_default();
                match items.iter().position(|v| id_of(v).as_deref() == Some(*id)) {
                    Some(pos) => {
                        if let Value::Object(map) = &mut item {
                            map.insert("id".to_string(), items[pos]["id"].clone());
                        }
                        items[pos] = item.clone();
                        reply(200, item)
                    }
                    None => reply(404, Value::Object(Default::default())),
                }
            }
            (Method::Delete, [name, id]) => {
                let items = state.collections.entry(name.to_string()).or_default();
                let before = items.len();
                items.retain(|v| id_of(v).as_deref() != Some(*id));
                if items.len() == before {
                    reply(404, Value::Object(Default::default()))
                } else {
                    reply(200, Value::Object(Default::default()))
                }
            }
            _ => reply(404, Value::Object(Default::default())),
        }
    }
}

#[async_trait(?Send)]
impl HttpClient for FakeBackend {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        self.state.borrow_mut().requests.push(request.clone());

        let path = request.url.strip_prefix(BASE_URL).unwrap_or(request.url.as_str()).to_string();
        let overridden = self
            .state
            .borrow()
            .overrides
            .get(&(request.method, path.clone()))
            .cloned();
        match overridden {
            Some(result) => result,
            None => Ok(self.handle(request.method, &path, request.body.as_deref())),
        }
    }
}

fn id_of(value: &Value) -> Option<String> {
    match value.get("id")? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn reply(status: u16, body: Value) -> HttpResponse {
    HttpResponse {
        status,
        status_text: status_text(status).to_string(),
        body: body.to_string(),
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    }
}

/// Dialogs that answer `confirm` with a preset value and record alerts
#[derive(Clone, Default)]
pub struct RecordingDialogs {
    answer: Rc<Cell<bool>>,
    pub confirms: Rc<RefCell<Vec<String>>>,
    pub alerts: Rc<RefCell<Vec<String>>>,
}

impl RecordingDialogs {
    pub fn answering(answer: bool) -> Self {
        let dialogs = Self::default();
        dialogs.answer.set(answer);
        dialogs
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for RecordingDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Navigator that records targets and tracks the current path
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub visited: Rc<RefCell<Vec<String>>>,
    current: Rc<RefCell<Option<String>>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        let navigator = Self::default();
        *navigator.current.borrow_mut() = Some(path.to_string());
        navigator
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
        *self.current.borrow_mut() = Some(path.to_string());
    }
}
