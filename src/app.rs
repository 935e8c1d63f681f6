//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::assistant::{AssistantClient, AssistantConfig};
use crate::content::ContentStore;
use crate::storage;
use crate::ui::Layout;
use dioxus::prelude::*;
use std::sync::Arc;

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    /// Single source of truth for all editable portfolio content.
    pub content: Signal<ContentStore>,
    pub assistant: Arc<AssistantClient>,
    pub admin_open: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        let store = match storage::content_dir() {
            Ok(dir) => ContentStore::open(dir),
            Err(e) => {
                tracing::warn!("data directory unavailable, edits will not persist: {e}");
                ContentStore::in_memory()
            }
        };
        tracing::info!("AppState initialized");

        Self {
            content: Signal::new(store),
            assistant: Arc::new(AssistantClient::new(AssistantConfig::default())),
            admin_open: Signal::new(false),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App() -> Element {
    let app_state = AppState::new();
    use_context_provider(|| app_state);

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Layout {}
    }
}
