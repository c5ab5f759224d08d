use leptos::{
    create_node_ref, create_rw_signal, html::Img, store_value, NodeRef, RwSignal, SignalGet,
    SignalSet, StoredValue,
};
use shared::dom::FileInput;
use shared::{CropError, CropSession, SessionSlot};
use web_sys::HtmlImageElement;

use crate::cropper::JsCropper;

pub type ActiveSession = CropSession<FileInput, JsCropper>;

#[derive(Copy, Clone)]
pub struct CropState {
    slot: StoredValue<SessionSlot<FileInput, JsCropper>>,
    title: RwSignal<String>,
    open: RwSignal<bool>,
    image: NodeRef<Img>,
}

impl CropState {
    pub fn new() -> Self {
        Self {
            slot: store_value(SessionSlot::default()),
            title: create_rw_signal(String::new()),
            open: create_rw_signal(false),
            image: create_node_ref::<Img>(),
        }
    }

    pub fn title(&self) -> RwSignal<String> {
        self.title
    }
    pub fn image_ref(&self) -> NodeRef<Img> {
        self.image
    }
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn show(&self, title: &str) {
        self.title.set(title.to_string());
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn image(&self) -> Result<HtmlImageElement, CropError> {
        let image = self
            .image
            .get_untracked()
            .ok_or(CropError::MissingElement("crop image"))?;
        let image: &HtmlImageElement = &image;
        Ok(image.clone())
    }

    pub fn begin(&self, session: ActiveSession) {
        self.slot.update_value(|slot| slot.begin(session));
    }

    pub fn attach_overlay(&self, overlay: JsCropper) -> Result<(), CropError> {
        self.slot
            .try_update_value(|slot| slot.attach_overlay(overlay))
            .unwrap_or(Err(CropError::NoActiveSession))
    }

    pub fn take_session(&self) -> Option<ActiveSession> {
        self.slot.try_update_value(|slot| slot.take()).flatten()
    }
}
