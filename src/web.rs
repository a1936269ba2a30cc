//! Browser host: renders the menus straight into the DOM.
//!
//! Built only for `wasm32`. Loading the module schedules initialization
//! against `document.readyState`, and the resulting manager is kept in a
//! thread-local slot so page scripts can query it through the exports below.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::nav::{
    initialize, schedule_init, Host, NavigationConfig, NavigationManager, PathTable, ReadyState,
};

thread_local! {
    static NAVIGATION: RefCell<Option<NavigationManager>> = const { RefCell::new(None) };
}

/// `Host` over the live document
pub struct DomHost {
    document: web_sys::Document,
    location: String,
}

impl DomHost {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let location = window.location().pathname().unwrap_or_else(|_| "/".into());
        Some(Self { document, location })
    }
}

impl Host for DomHost {
    fn location_path(&self) -> String {
        self.location.clone()
    }

    fn has_container(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn replace_container(&mut self, id: &str, markup: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                element.set_inner_html(markup);
                true
            }
            None => false,
        }
    }
}

fn init_navigation() {
    let Some(mut host) = DomHost::current() else {
        return;
    };
    let manager = initialize(NavigationConfig::default(), PathTable::canonical(), &mut host);
    NAVIGATION.with(|slot| *slot.borrow_mut() = Some(manager));
}

#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let ready = ReadyState::from_document_state(&document.ready_state());

    schedule_init(
        ready,
        |callback| {
            let listener = Closure::once_into_js(callback);
            if let Err(e) = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                listener.unchecked_ref::<js_sys::Function>(),
            ) {
                tracing::warn!("Failed to register navigation load listener: {:?}", e);
            }
        },
        init_navigation,
    );
}

/// Page identity the menus were rendered for, if initialized
#[wasm_bindgen]
pub fn navigation_page() -> Option<String> {
    NAVIGATION.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|manager| manager.current_page().to_string())
    })
}

/// Re-render every group present on the page
#[wasm_bindgen]
pub fn render_navigation() {
    let Some(mut host) = DomHost::current() else {
        return;
    };
    NAVIGATION.with(|slot| {
        if let Some(manager) = slot.borrow().as_ref() {
            manager.render_all(&mut host);
        }
    });
}
