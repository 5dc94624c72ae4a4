//! Avatar selection, local preview and URL resolution.
//!
//! The preview is a `data:` URL produced by `FileReader`; it gives immediate
//! feedback and is never treated as uploaded unless the preview fallback is
//! configured.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use super::validation::{ValidationError, validate_avatar_size};

/// A chosen avatar file plus its preview once the read completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarSelection<F> {
    pub file: F,
    pub preview_url: Option<String>,
}

impl<F> AvatarSelection<F> {
    pub fn new(file: F) -> Self {
        Self { file, preview_url: None }
    }
}

/// Current avatar pick plus a generation counter. Each accepted pick bumps
/// the generation so preview reads started for an older pick are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarPicker<F> {
    selection: Option<AvatarSelection<F>>,
    generation: u64,
}

impl<F> Default for AvatarPicker<F> {
    fn default() -> Self {
        Self { selection: None, generation: 0 }
    }
}

impl<F> AvatarPicker<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&AvatarSelection<F>> {
        self.selection.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.selection.as_ref()?.preview_url.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the pick with `file` and clear any preview. Returns the
    /// generation the preview read must report back with.
    ///
    /// # Errors
    ///
    /// `AvatarTooLarge` when `size` exceeds the limit; the previous pick and
    /// its preview are kept.
    pub fn accept(&mut self, file: F, size: f64) -> Result<u64, ValidationError> {
        validate_avatar_size(size)?;
        self.generation += 1;
        self.selection = Some(AvatarSelection::new(file));
        Ok(self.generation)
    }

    /// Attach a finished preview. Returns false when `generation` belongs to
    /// a superseded pick.
    pub fn complete_preview(&mut self, generation: u64, url: String) -> bool {
        if generation != self.generation {
            return false;
        }
        match &mut self.selection {
            Some(selection) => {
                selection.preview_url = Some(url);
                true
            }
            None => false,
        }
    }
}

/// URL sent with the profile update: uploaded, else preview, else the
/// previously stored avatar, else empty.
pub fn resolve_avatar_url(uploaded: Option<&str>, preview: Option<&str>, previous: Option<&str>) -> String {
    [uploaded, preview, previous]
        .into_iter()
        .flatten()
        .find(|url| !url.is_empty())
        .unwrap_or_default()
        .to_owned()
}

/// First file of a file input, if any.
#[cfg(feature = "hydrate")]
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files()?.get(0)
}

/// Clears the reader's callback and aborts it if the read is dropped early.
#[cfg(feature = "hydrate")]
struct ReaderGuard {
    reader: web_sys::FileReader,
}

#[cfg(feature = "hydrate")]
impl Drop for ReaderGuard {
    fn drop(&mut self) {
        self.reader.set_onloadend(None);
        self.reader.abort();
    }
}

/// Read `file` into a `data:` URL.
///
/// # Errors
///
/// Returns a description of the reader failure.
#[cfg(feature = "hydrate")]
pub async fn read_data_url(file: &web_sys::File) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader = web_sys::FileReader::new().map_err(|e| format!("{e:?}"))?;
    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    let on_load_end: Closure<dyn FnMut()> = Closure::once(move || {
        let _ = tx.send(());
    });
    reader.set_onloadend(Some(on_load_end.as_ref().unchecked_ref()));
    let guard = ReaderGuard { reader };
    guard.reader.read_as_data_url(file).map_err(|e| format!("{e:?}"))?;

    rx.await.map_err(|_| "file read interrupted".to_owned())?;
    let result = guard.reader.result().map_err(|e| format!("{e:?}"))?;
    drop(guard);
    drop(on_load_end);
    result.as_string().ok_or_else(|| "file reader produced no data".to_owned())
}
