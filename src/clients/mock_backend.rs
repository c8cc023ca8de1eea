use async_trait::async_trait;
use std::sync::Mutex;

use super::{BackendError, ItemsBackend, Reply};
use crate::models::{Item, NewItem};

/// Scripted backend that records every call it receives
#[derive(Default)]
pub struct MockBackend {
    pub list: Option<Result<Reply<Vec<Item>>, BackendError>>,
    pub get: Option<Result<Reply<Item>, BackendError>>,
    pub create: Option<Result<Reply<Item>, BackendError>>,
    pub update: Option<Result<Reply<()>, BackendError>>,
    pub delete: Option<Result<Reply<()>, BackendError>>,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn scripted<T: Clone>(slot: &Option<Result<T, BackendError>>) -> Result<T, BackendError> {
    slot.clone()
        .unwrap_or_else(|| Err(BackendError::Transport("no scripted reply".to_string())))
}

#[async_trait]
impl ItemsBackend for MockBackend {
    async fn list_items(&self) -> Result<Reply<Vec<Item>>, BackendError> {
        self.record("GET /items".to_string());
        scripted(&self.list)
    }

    async fn get_item(&self, id: i64) -> Result<Reply<Item>, BackendError> {
        self.record(format!("GET /items/{}", id));
        scripted(&self.get)
    }

    async fn create_item(&self, item: &NewItem) -> Result<Reply<Item>, BackendError> {
        self.record(format!("POST /items {} {}", item.name, item.quantity));
        scripted(&self.create)
    }

    async fn update_item(&self, id: i64, item: &NewItem) -> Result<Reply<()>, BackendError> {
        self.record(format!("PUT /items/{} {} {}", id, item.name, item.quantity));
        scripted(&self.update)
    }

    async fn delete_item(&self, id: i64) -> Result<Reply<()>, BackendError> {
        self.record(format!("DELETE /items/{}", id));
        scripted(&self.delete)
    }
}
