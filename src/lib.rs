//! Gallery management for the store edit form: removing persisted images before
//! submit and previewing newly chosen uploads.

mod dom;
mod file_read;
mod page_config;
mod preview;
mod removal;

use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::preview::UploadPreview;
use crate::removal::GalleryRemoval;

pub use store_gallery_core::{GalleryConfig, GalleryFilename, SelectionSummary};

/// Installed handlers. Dropping this detaches every listener.
pub struct GalleryHandles {
    removal: Option<Rc<GalleryRemoval>>,
    preview: Option<Rc<UploadPreview>>,
    listeners: Vec<EventListener>,
}

impl GalleryHandles {
    pub fn removal_installed(&self) -> bool {
        self.removal.is_some()
    }

    pub fn preview_installed(&self) -> bool {
        self.preview.is_some()
    }

    /// Filenames marked for removal since install, in click order.
    pub fn removed_filenames(&self) -> Vec<GalleryFilename> {
        self.removal
            .as_ref()
            .map(|removal| removal.removed())
            .unwrap_or_default()
    }

    pub fn last_selection(&self) -> Option<SelectionSummary> {
        self.preview.as_ref().map(|preview| preview.last_selection())
    }

    /// Keeps the listeners attached for the lifetime of the page.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = page_config::load();
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_event| {
            install_on(&document, config).forget();
        })
        .forget();
    } else {
        install_on(&document, config).forget();
    }
}

/// Installs both handlers against the whole document.
pub fn install_on(document: &Document, config: GalleryConfig) -> GalleryHandles {
    match document.document_element() {
        Some(root) => install_in(&root, config),
        None => GalleryHandles {
            removal: None,
            preview: None,
            listeners: Vec::new(),
        },
    }
}

/// Installs both handlers, resolving the gallery container, form and file input
/// under `scope`. Each handler is skipped when its markup is missing.
pub fn install_in(scope: &Element, config: GalleryConfig) -> GalleryHandles {
    let config = Rc::new(config);
    let mut listeners = Vec::new();

    let removal = dom::query(scope, &config.gallery_selector).and_then(|container| {
        let Some(form) = dom::owning_form(&container, scope) else {
            gloo::console::warn!("gallery removal: no form, not installed");
            return None;
        };
        Some(Rc::new(GalleryRemoval::new(Rc::clone(&config), container, form)))
    });
    if let Some(removal) = &removal {
        listeners.push(removal.listen());
    }

    let preview = dom::element_by_id(scope, &config.file_input_id)
        .and_then(|input| input.dyn_into::<HtmlInputElement>().ok())
        .map(|input| Rc::new(UploadPreview::new(Rc::clone(&config), input)));
    if let Some(preview) = &preview {
        listeners.push(preview.listen());
    }

    gloo::console::log!(
        "gallery: installed",
        if removal.is_some() { "removal" } else { "-" },
        if preview.is_some() { "preview" } else { "-" }
    );
    GalleryHandles {
        removal,
        preview,
        listeners,
    }
}
