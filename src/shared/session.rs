//! Lifecycle of a single crop dialog.
//!
//! A [`CropSession`] owns everything one open dialog needs: the file input
//! that triggered it, the field's [`CropConfig`], what the user originally
//! picked and, once the image has been read, the crop overlay. The session is
//! consumed by [`CropSession::cancel`] or [`CropSession::save`], so the
//! overlay is torn down exactly once on either path.

use log::{debug, info};

use crate::{CropConfig, CropError};

/// Interactive crop selection over an image.
pub trait CropOverlay {
    type Raster;

    /// Renders the current selection scaled to `width` x `height`.
    fn render(&self, width: u32, height: u32) -> Result<Self::Raster, CropError>;

    fn destroy(&mut self);
}

/// The file list of an input element, as far as cropping is concerned.
pub trait FileSelection {
    type Contents;

    /// Drops the current selection so picking the same file fires again.
    fn clear(&self);

    /// Makes `file` the one and only selected file.
    fn install(&self, file: CroppedFile<Self::Contents>) -> Result<(), CropError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub media_type: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// Replacement for the user's selection: same name and media type, new
/// bytes and a fresh modification time.
#[derive(Debug, Clone, PartialEq)]
pub struct CroppedFile<B> {
    pub name: String,
    pub media_type: String,
    /// Milliseconds since the unix epoch.
    pub last_modified: f64,
    pub contents: B,
}

pub struct CropSession<F, O> {
    input: F,
    config: CropConfig,
    source: SourceFile,
    overlay: Option<O>,
}

impl<F, O> CropSession<F, O>
where
    F: FileSelection,
    O: CropOverlay,
{
    /// Starts a session for `source`, or returns `None` when the selected
    /// file is not an image.
    pub fn start(input: F, config: CropConfig, source: SourceFile) -> Option<Self> {
        if !source.is_image() {
            debug!("ignoring non-image selection {:?}", source.media_type);
            return None;
        }
        Some(Self {
            input,
            config,
            source,
            overlay: None,
        })
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }
    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    /// Installs the overlay for this session, tearing down any earlier one.
    pub fn attach_overlay(&mut self, overlay: O) {
        self.destroy_overlay();
        self.overlay = Some(overlay);
    }

    /// Renders the selection at the field's configured output size.
    pub fn render(&self) -> Result<O::Raster, CropError> {
        let overlay = self.overlay.as_ref().ok_or(CropError::NoActiveSession)?;
        overlay.render(self.config.output_width(), self.config.output_height())
    }

    pub fn cancel(mut self) -> F {
        info!("crop of {} cancelled", self.source.name);
        self.destroy_overlay();
        self.input.clear();
        self.input
    }

    /// Installs `contents` on the originating input as the only file, then
    /// tears the overlay down.
    pub fn save(mut self, contents: F::Contents, now: f64) -> Result<F, CropError> {
        let file = CroppedFile {
            name: self.source.name.clone(),
            media_type: self.source.media_type.clone(),
            last_modified: now,
            contents,
        };
        let installed = self.input.install(file);
        self.destroy_overlay();
        installed?;
        info!(
            "cropped {} to {}x{}",
            self.source.name,
            self.config.output_width(),
            self.config.output_height()
        );
        Ok(self.input)
    }

    fn destroy_overlay(&mut self) {
        if let Some(mut overlay) = self.overlay.take() {
            overlay.destroy();
        }
    }
}

/// Holds the one active session of the page.
pub struct SessionSlot<F, O> {
    current: Option<CropSession<F, O>>,
}

impl<F, O> Default for SessionSlot<F, O> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<F, O> SessionSlot<F, O>
where
    F: FileSelection,
    O: CropOverlay,
{
    /// Makes `session` the active one. A session that was still open loses
    /// its overlay; nothing is queued.
    pub fn begin(&mut self, session: CropSession<F, O>) {
        if let Some(mut previous) = self.current.take() {
            debug!("replacing open crop session for {}", previous.source.name);
            previous.destroy_overlay();
        }
        self.current = Some(session);
    }

    pub fn attach_overlay(&mut self, overlay: O) -> Result<(), CropError> {
        let session = self.current.as_mut().ok_or(CropError::NoActiveSession)?;
        session.attach_overlay(overlay);
        Ok(())
    }

    pub fn take(&mut self) -> Option<CropSession<F, O>> {
        self.current.take()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeInput {
        files: RefCell<Vec<CroppedFile<Vec<u8>>>>,
        cleared: Cell<bool>,
    }

    impl FileSelection for Rc<FakeInput> {
        type Contents = Vec<u8>;

        fn clear(&self) {
            self.files.borrow_mut().clear();
            self.cleared.set(true);
        }

        fn install(&self, file: CroppedFile<Vec<u8>>) -> Result<(), CropError> {
            *self.files.borrow_mut() = vec![file];
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct Counters {
        renders: Rc<Cell<u32>>,
        destroys: Rc<Cell<u32>>,
    }

    struct FakeOverlay(Counters);

    impl CropOverlay for FakeOverlay {
        type Raster = (u32, u32);

        fn render(&self, width: u32, height: u32) -> Result<(u32, u32), CropError> {
            self.0.renders.set(self.0.renders.get() + 1);
            Ok((width, height))
        }

        fn destroy(&mut self) {
            self.0.destroys.set(self.0.destroys.get() + 1);
        }
    }

    fn jpeg_session(input: Rc<FakeInput>) -> CropSession<Rc<FakeInput>, FakeOverlay> {
        let config = CropConfig::from_attributes(Some("4/3"), Some("800"), None, None);
        CropSession::start(input, config, SourceFile::new("cover.jpg", "image/jpeg"))
            .expect("jpeg is an image")
    }

    #[test]
    fn non_image_never_starts() {
        let session = CropSession::<Rc<FakeInput>, FakeOverlay>::start(
            Rc::default(),
            CropConfig::default(),
            SourceFile::new("notes.pdf", "application/pdf"),
        );
        assert!(session.is_none());
    }

    #[test]
    fn render_uses_configured_size() {
        let counters = Counters::default();
        let mut session = jpeg_session(Rc::default());
        assert!(matches!(session.render(), Err(CropError::NoActiveSession)));

        session.attach_overlay(FakeOverlay(counters.clone()));
        assert_eq!(session.render().unwrap(), (800, 600));
    }

    #[test]
    fn save_installs_single_file_with_original_metadata() {
        let counters = Counters::default();
        let input = Rc::new(FakeInput::default());
        let mut session = jpeg_session(input.clone());
        session.attach_overlay(FakeOverlay(counters.clone()));

        session.save(vec![1, 2, 3], 1_700_000_000_000.).unwrap();

        let files = input.files.borrow();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "cover.jpg");
        assert_eq!(files[0].media_type, "image/jpeg");
        assert_eq!(files[0].last_modified, 1_700_000_000_000.);
        assert_eq!(files[0].contents, vec![1, 2, 3]);
        assert_eq!(counters.destroys.get(), 1);
    }

    #[test]
    fn cancel_clears_and_destroys_without_rendering() {
        let counters = Counters::default();
        let input = Rc::new(FakeInput::default());
        let mut session = jpeg_session(input.clone());
        session.attach_overlay(FakeOverlay(counters.clone()));

        session.cancel();

        assert!(input.cleared.get());
        assert!(input.files.borrow().is_empty());
        assert_eq!(counters.destroys.get(), 1);
        assert_eq!(counters.renders.get(), 0);
    }

    #[test]
    fn new_session_destroys_previous_overlay_once() {
        let first = Counters::default();
        let second = Counters::default();
        let mut slot = SessionSlot::default();

        slot.begin(jpeg_session(Rc::default()));
        slot.attach_overlay(FakeOverlay(first.clone())).unwrap();
        slot.begin(jpeg_session(Rc::default()));
        slot.attach_overlay(FakeOverlay(second.clone())).unwrap();

        assert_eq!(first.destroys.get(), 1);
        assert_eq!(second.destroys.get(), 0);

        slot.take().unwrap().cancel();
        assert_eq!(first.destroys.get(), 1);
        assert_eq!(second.destroys.get(), 1);
        assert!(!slot.is_active());
    }

    #[test]
    fn reattaching_overlay_replaces_it() {
        let first = Counters::default();
        let mut session = jpeg_session(Rc::default());
        session.attach_overlay(FakeOverlay(first.clone()));
        session.attach_overlay(FakeOverlay(Counters::default()));
        assert_eq!(first.destroys.get(), 1);
    }

    #[test]
    fn attach_without_session_fails() {
        let mut slot: SessionSlot<Rc<FakeInput>, FakeOverlay> = SessionSlot::default();
        assert!(matches!(
            slot.attach_overlay(FakeOverlay(Counters::default())),
            Err(CropError::NoActiveSession)
        ));
    }
}
