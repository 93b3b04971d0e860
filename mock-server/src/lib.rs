//! In-memory mock of the data-generation task service.
//!
//! Mirrors the real backend's response conventions so the client can be
//! exercised end-to-end: successes arrive as `{"data": …}` or
//! `{"message": …}`, failures as an HTTP error status with an `{"error":
//! "…"}` body. State lives in one `RwLock`-guarded store with sequential
//! IDs; nothing persists across restarts.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataSource {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default = "default_task_kind")]
    pub kind: String,
    #[serde(default = "default_count")]
    pub count: i64,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub progress: f64,
}

fn default_task_kind() -> String {
    "database".to_string()
}

fn default_count() -> i64 {
    10
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Default)]
pub struct Stores {
    next_id: u64,
    datasources: HashMap<u64, DataSource>,
    tasks: HashMap<u64, Task>,
    templates: HashMap<u64, Template>,
}

impl Stores {
    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Stores>>;

type Reply = (StatusCode, Json<Value>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Stores::default()));
    Router::new().nest("/api", api_routes()).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn api_routes() -> Router<Db> {
    Router::new()
        .route("/datasource", get(list_datasources).post(create_datasource))
        .route("/datasource/test", post(test_connection))
        .route("/datasource/tables/{id}", get(list_tables))
        .route("/datasource/table/{id}/{table}", get(table_structure))
        .route(
            "/datasource/{id}",
            get(get_datasource).put(update_datasource).delete(delete_datasource),
        )
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/preview", post(preview_task))
        .route("/tasks/{id}", get(get_task).put(update_task).delete(delete_task))
        .route("/tasks/{id}/execute", post(execute_task))
        .route("/tasks/{id}/status", get(task_status))
        .route("/tasks/{id}/export-template", post(export_template))
        .route("/templates", get(list_templates))
        .route("/templates/import", post(import_template))
        .route("/templates/{id}", delete(delete_template))
}

fn ok_data(data: Value) -> Reply {
    (StatusCode::OK, Json(json!({ "data": data })))
}

fn ok_message(message: &str) -> Reply {
    (StatusCode::OK, Json(json!({ "message": message })))
}

fn error_reply(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "error": message })))
}

fn bad_request(message: &str) -> Reply {
    error_reply(StatusCode::BAD_REQUEST, message)
}

fn not_found(message: &str) -> Reply {
    error_reply(StatusCode::NOT_FOUND, message)
}

/// Stand-in for a real connectivity probe: the type must be supported and
/// networked types need a host.
fn check_connection(ds: &DataSource) -> Result<(), String> {
    match ds.kind.as_str() {
        "sqlite" => Ok(()),
        "mysql" | "postgresql" => {
            if ds.host.is_empty() {
                Err("connection failed: host is required".to_string())
            } else {
                Ok(())
            }
        }
        other => Err(format!("connection failed: unsupported datasource type {other}")),
    }
}

// --- datasources ---

async fn list_datasources(State(db): State<Db>) -> Reply {
    let stores = db.read().await;
    let mut sources: Vec<&DataSource> = stores.datasources.values().collect();
    sources.sort_by_key(|ds| ds.id);
    ok_data(json!(sources))
}

async fn create_datasource(State(db): State<Db>, Json(input): Json<Value>) -> Reply {
    let mut ds: DataSource = match serde_json::from_value(input) {
        Ok(ds) => ds,
        Err(err) => return bad_request(&err.to_string()),
    };
    if ds.name.is_empty() {
        return bad_request("name is required");
    }
    if let Err(message) = check_connection(&ds) {
        return bad_request(&message);
    }
    let mut stores = db.write().await;
    ds.id = stores.alloc_id();
    stores.datasources.insert(ds.id, ds.clone());
    ok_data(json!(ds))
}

async fn get_datasource(State(db): State<Db>, Path(id): Path<u64>) -> Reply {
    match db.read().await.datasources.get(&id) {
        Some(ds) => ok_data(json!(ds)),
        None => not_found("datasource not found"),
    }
}

async fn update_datasource(State(db): State<Db>, Path(id): Path<u64>, Json(input): Json<Value>) -> Reply {
    let mut ds: DataSource = match serde_json::from_value(input) {
        Ok(ds) => ds,
        Err(err) => return bad_request(&err.to_string()),
    };
    if let Err(message) = check_connection(&ds) {
        return bad_request(&message);
    }
    let mut stores = db.write().await;
    if !stores.datasources.contains_key(&id) {
        return not_found("datasource not found");
    }
    ds.id = id;
    stores.datasources.insert(id, ds.clone());
    ok_data(json!(ds))
}

async fn delete_datasource(State(db): State<Db>, Path(id): Path<u64>) -> Reply {
    match db.write().await.datasources.remove(&id) {
        Some(_) => ok_message("deleted"),
        None => not_found("datasource not found"),
    }
}

async fn test_connection(Json(input): Json<Value>) -> Reply {
    let ds: DataSource = match serde_json::from_value(input) {
        Ok(ds) => ds,
        Err(err) => return bad_request(&err.to_string()),
    };
    match check_connection(&ds) {
        Ok(()) => ok_message("connection successful"),
        Err(message) => bad_request(&message),
    }
}

async fn list_tables(State(db): State<Db>, Path(id): Path<u64>) -> Reply {
    if !db.read().await.datasources.contains_key(&id) {
        return not_found("datasource not found");
    }
    ok_data(json!(["customers", "orders", "products"]))
}

async fn table_structure(State(db): State<Db>, Path((id, table)): Path<(u64, String)>) -> Reply {
    if !db.read().await.datasources.contains_key(&id) {
        return not_found("datasource not found");
    }
    ok_data(json!([
        { "name": "id", "type": "INTEGER", "nullable": false },
        { "name": format!("{table}_name"), "type": "TEXT", "nullable": true },
        { "name": "created_at", "type": "DATETIME", "nullable": true },
    ]))
}

// --- tasks ---

#[derive(Deserialize)]
struct Pagination {
    #[serde(default = "default_page")]
    page: usize,
    #[serde(rename = "pageSize", default = "default_page_size")]
    page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

async fn list_tasks(State(db): State<Db>, Query(page): Query<Pagination>) -> Reply {
    let stores = db.read().await;
    let mut tasks: Vec<&Task> = stores.tasks.values().collect();
    tasks.sort_by_key(|task| task.id);
    let total = tasks.len();
    let start = (page.page.max(1) - 1) * page.page_size;
    let list: Vec<&Task> = tasks.into_iter().skip(start).take(page.page_size).collect();
    ok_data(json!({
        "list": list,
        "total": total,
        "page": page.page,
        "pageSize": page.page_size,
    }))
}

async fn create_task(State(db): State<Db>, Json(input): Json<Value>) -> Reply {
    let mut task: Task = match serde_json::from_value(input) {
        Ok(task) => task,
        Err(err) => return bad_request(&err.to_string()),
    };
    if task.name.is_empty() {
        return bad_request("name is required");
    }
    task.status = TaskStatus::Pending;
    task.progress = 0.0;
    let mut stores = db.write().await;
    task.id = stores.alloc_id();
    stores.tasks.insert(task.id, task.clone());
    ok_data(json!(task))
}

async fn get_task(State(db): State<Db>, Path(id): Path<u64>) -> Reply {
    match db.read().await.tasks.get(&id) {
        Some(task) => ok_data(json!(task)),
        None => not_found("task not found"),
    }
}

async fn update_task(State(db): State<Db>, Path(id): Path<u64>, Json(input): Json<Value>) -> Reply {
    let mut task: Task = match serde_json::from_value(input) {
        Ok(task) => task,
        Err(err) => return bad_request(&err.to_string()),
    };
    if task.name.is_empty() {
        return bad_request("name is required");
    }
    let mut stores = db.write().await;
    if !stores.tasks.contains_key(&id) {
        return not_found("task not found");
    }
    task.id = id;
    stores.tasks.insert(id, task.clone());
    ok_data(json!(task))
}

async fn delete_task(State(db): State<Db>, Path(id): Path<u64>) -> Reply {
    match db.write().await.tasks.remove(&id) {
        Some(_) => ok_message("deleted"),
        None => not_found("task not found"),
    }
}

async fn execute_task(State(db): State<Db>, Path(id): Path<u64>) -> Reply {
    let mut stores = db.write().await;
    match stores.tasks.get_mut(&id) {
        Some(task) => {
            task.status = TaskStatus::Running;
            task.progress = 0.0;
            ok_message("task started")
        }
        None => not_found("task not found"),
    }
}

async fn task_status(State(db): State<Db>, Path(id): Path<u64>) -> Reply {
    match db.read().await.tasks.get(&id) {
        Some(task) => ok_data(json!(task)),
        None => not_found("task not found"),
    }
}

async fn preview_task(Json(input): Json<Value>) -> Reply {
    let task: Task = match serde_json::from_value(input) {
        Ok(task) => task,
        Err(err) => return bad_request(&err.to_string()),
    };
    if task.name.is_empty() {
        return bad_request("name is required");
    }
    // A handful of rows is enough for a preview.
    let rows: Vec<Value> = (1..=task.count.clamp(1, 5))
        .map(|row| json!({ "row": row, "name": format!("{} {row}", task.name) }))
        .collect();
    ok_data(json!(rows))
}

async fn export_template(State(db): State<Db>, Path(id): Path<u64>, Json(input): Json<Value>) -> Reply {
    let mut stores = db.write().await;
    let task = match stores.tasks.get(&id) {
        Some(task) => task.clone(),
        None => return not_found("task not found"),
    };
    let name = input
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} template", task.name));
    let description = input
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let template = Template { id: stores.alloc_id(), name, description };
    stores.templates.insert(template.id, template.clone());
    (
        StatusCode::OK,
        Json(json!({ "data": template, "message": "template exported" })),
    )
}

// --- templates ---

async fn list_templates(State(db): State<Db>) -> Reply {
    let stores = db.read().await;
    let mut templates: Vec<&Template> = stores.templates.values().collect();
    templates.sort_by_key(|template| template.id);
    ok_data(json!(templates))
}

async fn import_template(State(db): State<Db>, Json(input): Json<Value>) -> Reply {
    let mut template: Template = match serde_json::from_value(input) {
        Ok(template) => template,
        Err(err) => return bad_request(&err.to_string()),
    };
    if template.name.is_empty() {
        return bad_request("name is required");
    }
    let mut stores = db.write().await;
    template.id = stores.alloc_id();
    stores.templates.insert(template.id, template.clone());
    ok_data(json!(template))
}

async fn delete_template(State(db): State<Db>, Path(id): Path<u64>) -> Reply {
    match db.write().await.templates.remove(&id) {
        Some(_) => ok_message("deleted"),
        None => not_found("template not found"),
    }
}
