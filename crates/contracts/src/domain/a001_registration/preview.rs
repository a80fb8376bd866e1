//! Image slots and their preview handles.
//!
//! Each slot stores the picked file together with the handle created from it,
//! so a slot can never hold a file without its preview or the other way round.
//! Handles are released by value, which makes a second release of the same
//! handle impossible.

use super::error::{PreviewError, RegistrationError};

/// Number of image slots in the upload grid
pub const IMAGE_SLOT_COUNT: usize = 4;

/// Creates and releases displayable handles for picked files
/// (object URLs in the browser).
pub trait PreviewProvider<F> {
    type Handle;

    fn create(&mut self, file: &F) -> Result<Self::Handle, PreviewError>;

    fn release(&mut self, handle: Self::Handle);
}

/// A picked file and the preview handle derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSlot<F, H> {
    pub file: F,
    pub handle: H,
}

/// Owns the four image slots and the provider that backs their handles.
///
/// Dropping the manager releases every live handle.
pub struct PreviewSlots<F, P: PreviewProvider<F>> {
    provider: P,
    slots: [Option<ImageSlot<F, P::Handle>>; IMAGE_SLOT_COUNT],
}

impl<F, P: PreviewProvider<F>> PreviewSlots<F, P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            slots: [None, None, None, None],
        }
    }

    /// Install `file` at `index`, replacing whatever the slot held.
    ///
    /// `None` (picker cancelled) leaves the slot untouched. The previous handle
    /// is released before the new one is created; if creation fails the slot
    /// ends up empty.
    pub fn set_image(&mut self, index: usize, file: Option<F>) -> Result<(), RegistrationError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(RegistrationError::SlotOutOfRange(index))?;
        let Some(file) = file else {
            log::trace!("image slot {}: no file picked, keeping current state", index);
            return Ok(());
        };

        if let Some(previous) = slot.take() {
            self.provider.release(previous.handle);
            log::debug!("image slot {}: released previous preview", index);
        }

        let handle = self.provider.create(&file)?;
        *slot = Some(ImageSlot { file, handle });
        log::debug!("image slot {}: preview created", index);
        Ok(())
    }

    /// Empty the slot at `index`, releasing its handle. No-op on an empty slot.
    pub fn clear_image(&mut self, index: usize) -> Result<(), RegistrationError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(RegistrationError::SlotOutOfRange(index))?;
        if let Some(previous) = slot.take() {
            self.provider.release(previous.handle);
            log::debug!("image slot {}: cleared", index);
        }
        Ok(())
    }

    /// Release every live handle and empty all slots.
    pub fn release_all(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(previous) = slot.take() {
                self.provider.release(previous.handle);
                log::debug!("image slot {}: released", index);
            }
        }
    }

    pub fn slot(&self, index: usize) -> Option<&ImageSlot<F, P::Handle>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn file(&self, index: usize) -> Option<&F> {
        self.slot(index).map(|s| &s.file)
    }

    pub fn preview(&self, index: usize) -> Option<&P::Handle> {
        self.slot(index).map(|s| &s.handle)
    }

    /// Picked files, positionally aligned with [`Self::preview_urls`]
    pub fn images(&self) -> [Option<&F>; IMAGE_SLOT_COUNT] {
        std::array::from_fn(|i| self.file(i))
    }

    pub fn preview_urls(&self) -> [Option<&P::Handle>; IMAGE_SLOT_COUNT] {
        std::array::from_fn(|i| self.preview(i))
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<F, P: PreviewProvider<F>> Drop for PreviewSlots<F, P> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<F, P> std::fmt::Debug for PreviewSlots<F, P>
where
    F: std::fmt::Debug,
    P: PreviewProvider<F>,
    P::Handle: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewSlots")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Provider events in call order
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        Create(&'static str, u32),
        Release(u32),
    }

    /// Counting provider; handles are sequence numbers, files are names.
    /// The log is shared so tests can inspect it after the manager is dropped.
    #[derive(Debug, Clone, Default)]
    pub struct FakeProvider {
        pub log: Rc<RefCell<Vec<Event>>>,
        next: u32,
        /// File name whose preview creation should fail
        pub fail_for: Option<&'static str>,
    }

    impl FakeProvider {
        pub fn failing_for(file: &'static str) -> Self {
            Self {
                fail_for: Some(file),
                ..Self::default()
            }
        }

        pub fn releases(&self) -> Vec<u32> {
            self.log
                .borrow()
                .iter()
                .filter_map(|e| match e {
                    Event::Release(h) => Some(*h),
                    _ => None,
                })
                .collect()
        }

        pub fn creates(&self) -> usize {
            self.log
                .borrow()
                .iter()
                .filter(|e| matches!(e, Event::Create(..)))
                .count()
        }
    }

    impl PreviewProvider<&'static str> for FakeProvider {
        type Handle = u32;

        fn create(&mut self, file: &&'static str) -> Result<u32, PreviewError> {
            if self.fail_for == Some(*file) {
                return Err(PreviewError(format!("cannot preview {}", file)));
            }
            self.next += 1;
            self.log.borrow_mut().push(Event::Create(*file, self.next));
            Ok(self.next)
        }

        fn release(&mut self, handle: u32) {
            self.log.borrow_mut().push(Event::Release(handle));
        }
    }
}
