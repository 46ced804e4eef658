use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, File, HtmlImageElement, HtmlInputElement};

use crate::dom;
use crate::file_read::read_as_data_url;
use store_gallery_core::{GalleryConfig, SelectionSummary};

/// Thumbnails for files chosen in the upload input. Each selection replaces the
/// previous one; reads that finish after a newer selection are dropped.
pub(crate) struct UploadPreview {
    config: Rc<GalleryConfig>,
    input: HtmlInputElement,
    container: RefCell<Option<Element>>,
    generation: Cell<u64>,
    last: RefCell<SelectionSummary>,
}

impl UploadPreview {
    pub(crate) fn new(config: Rc<GalleryConfig>, input: HtmlInputElement) -> Self {
        Self {
            config,
            input,
            container: RefCell::new(None),
            generation: Cell::new(0),
            last: RefCell::new(SelectionSummary::default()),
        }
    }

    pub(crate) fn listen(self: &Rc<Self>) -> EventListener {
        let preview = Rc::clone(self);
        EventListener::new(&self.input, "change", move |_event: &Event| {
            if let Err(err) = preview.handle_change() {
                gloo::console::warn!("upload preview: render failed", dom::js_err(err));
            }
        })
    }

    pub(crate) fn last_selection(&self) -> SelectionSummary {
        self.last.borrow().clone()
    }

    pub(crate) fn handle_change(self: &Rc<Self>) -> Result<SelectionSummary, JsValue> {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        let document = self
            .input
            .owner_document()
            .ok_or_else(|| JsValue::from_str("input is detached"))?;
        let container = self.reset_container(&document)?;

        let files = selected_files(&self.input);
        let mimes: Vec<String> = files.iter().map(|file| file.type_()).collect();
        let summary = SelectionSummary::from_mimes(mimes.iter().map(String::as_str));
        for &index in &summary.previewable {
            let file = files[index].clone();
            let preview = Rc::clone(self);
            let document = document.clone();
            let container = container.clone();
            spawn_local(async move {
                let url = match read_as_data_url(&file).await {
                    Ok(url) => url,
                    Err(err) => {
                        gloo::console::warn!("upload preview: read failed", file.name(), dom::js_err(err));
                        return;
                    }
                };
                if preview.generation.get() != generation {
                    return;
                }
                if let Err(err) = preview.append_item(&document, &container, &url) {
                    gloo::console::warn!("upload preview: append failed", dom::js_err(err));
                }
            });
        }

        if let Some(text) = summary.label() {
            let label: Element = dom::create_element(&document, "p")?;
            label.class_list().add_1(&self.config.count_class)?;
            label.set_text_content(Some(&text));
            container.before_with_node_1(&label)?;
        }
        gloo::console::log!(
            "upload preview: selection",
            summary.total as u32,
            summary.previewable.len() as u32,
            summary.skipped() as u32
        );
        *self.last.borrow_mut() = summary.clone();
        Ok(summary)
    }

    /// Returns an empty preview container right after the input, creating it on first
    /// use, and drops the count label left by the previous selection.
    fn reset_container(&self, document: &Document) -> Result<Element, JsValue> {
        let existing = self
            .container
            .borrow()
            .clone()
            .filter(|container| container.is_connected())
            .or_else(|| {
                self.input
                    .parent_element()
                    .and_then(|parent| dom::query(&parent, &self.config.preview_selector()))
            });
        let container = match existing {
            Some(container) => {
                container.set_inner_html("");
                container
            }
            None => {
                let container: Element = dom::create_element(document, "div")?;
                dom::add_classes(&container, &self.config.preview_classes)?;
                self.input.after_with_node_1(&container)?;
                container
            }
        };
        let count_selector = self.config.count_selector();
        while let Some(label) = container.previous_element_sibling() {
            if !label.matches(&count_selector).unwrap_or(false) {
                break;
            }
            label.remove();
        }
        *self.container.borrow_mut() = Some(container.clone());
        Ok(container)
    }

    fn append_item(&self, document: &Document, container: &Element, url: &str) -> Result<(), JsValue> {
        let item: Element = dom::create_element(document, "div")?;
        item.class_list().add_1(&self.config.item_class)?;
        let img: HtmlImageElement = dom::create_element(document, "img")?;
        img.set_src(url);
        img.set_alt(&self.config.preview_alt);
        item.append_child(&img)?;
        container.append_child(&item)?;
        Ok(())
    }
}

fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length()).filter_map(|index| files.get(index)).collect()
}
