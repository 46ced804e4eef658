use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, HtmlFormElement};

use crate::dom;
use store_gallery_core::{GalleryConfig, GalleryFilename};

/// Delegated click handling for the persisted gallery. One listener sits on the
/// container and reacts only when the click target itself is a remove control.
pub(crate) struct GalleryRemoval {
    config: Rc<GalleryConfig>,
    container: Element,
    form: HtmlFormElement,
    removed: RefCell<Vec<GalleryFilename>>,
}

impl GalleryRemoval {
    pub(crate) fn new(config: Rc<GalleryConfig>, container: Element, form: HtmlFormElement) -> Self {
        Self {
            config,
            container,
            form,
            removed: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn listen(self: &Rc<Self>) -> EventListener {
        let removal = Rc::clone(self);
        EventListener::new(&self.container, "click", move |event: &Event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            removal.handle_click(&target);
        })
    }

    pub(crate) fn removed(&self) -> Vec<GalleryFilename> {
        self.removed.borrow().clone()
    }

    /// Applies a removal for `target` and returns the recorded filename. Any missing
    /// piece of the expected markup turns the click into a no-op.
    pub(crate) fn handle_click(&self, target: &Element) -> Option<GalleryFilename> {
        if !dom::has_class(target, &self.config.remove_class) {
            return None;
        }
        let raw = target.get_attribute(&self.config.filename_attr)?;
        let filename = match GalleryFilename::parse(&raw) {
            Ok(filename) => filename,
            Err(err) => {
                gloo::console::warn!("gallery removal: ignoring control", err.to_string());
                return None;
            }
        };
        let item = dom::closest(target, &dom::class_selector(&self.config.item_class))?;
        let item = item.dyn_into::<HtmlElement>().ok()?;
        if let Err(err) = self.record(&item, &filename) {
            gloo::console::warn!("gallery removal: form update failed", dom::js_err(err));
            return None;
        }
        self.fade_out(item);
        gloo::console::log!("gallery removal: marked", filename.to_string());
        self.removed.borrow_mut().push(filename.clone());
        Some(filename)
    }

    fn record(&self, item: &HtmlElement, filename: &GalleryFilename) -> Result<(), JsValue> {
        let document = self
            .form
            .owner_document()
            .ok_or_else(|| JsValue::from_str("form is detached"))?;
        let marker =
            dom::create_hidden_input(&document, &self.config.removed_field, filename.as_str())?;
        if let Some(kept) = dom::query(item, "input[type=\"hidden\"]") {
            kept.remove();
        }
        self.form.append_child(&marker)?;
        Ok(())
    }

    fn fade_out(&self, item: HtmlElement) {
        if let Err(err) = dom::set_opacity(&item, "0") {
            gloo::console::warn!("gallery removal: fade failed", dom::js_err(err));
        }
        Timeout::new(self.config.fade_ms, move || {
            item.remove();
        })
        .forget();
    }
}
