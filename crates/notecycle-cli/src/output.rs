use notecycle_domain::{Item, Note, Snapshot};
use serde::Serialize;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub index: usize,
    pub id: String,
    pub title: String,
    pub note_count: usize,
    pub active: bool,
}

#[derive(Serialize)]
pub struct NoteView<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub note: &'a Note,
}

/// What a front end needs to redraw after any command
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateView<'a> {
    pub active_index: i64,
    pub active_item: Option<&'a Item>,
    pub items: Vec<ItemSummary>,
}

pub fn summarize(snapshot: &Snapshot) -> Vec<ItemSummary> {
    let active = snapshot.active_position();
    snapshot
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| ItemSummary {
            index,
            id: item.id.clone(),
            title: item.title.clone(),
            note_count: item.notes.len(),
            active: active == Some(index),
        })
        .collect()
}

pub fn state_view(snapshot: &Snapshot) -> StateView<'_> {
    StateView {
        active_index: snapshot.active_index,
        active_item: snapshot.active_item(),
        items: summarize(snapshot),
    }
}

pub fn output_success<T: Serialize>(data: T) {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    match serde_json::to_string(&response) {
        Ok(json) => println!("{}", json),
        Err(e) => output_error(&format!("Failed to encode response: {}", e)),
    }
}

pub fn output_list<T: Serialize>(items: Vec<T>) {
    let count = items.len();
    let list = ListResponse { items, count };
    output_success(list);
}

pub fn output_state(snapshot: &Snapshot) {
    output_success(state_view(snapshot));
}

/// Outputs an error response to stderr and terminates the process with code 1.
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    let json = serde_json::to_string(&response)
        .unwrap_or_else(|_| format!("{{\"success\":false,\"error\":{:?}}}", message));
    eprintln!("{}", json);
    std::process::exit(1);
}
