//! WebAssembly bindings for Haru core functionality.
//!
//! This crate wires the entry repository to the web frontend: the views
//! read the entry list and the derived calendar/gallery projections, and
//! issue add/delete/upload intents that return native JavaScript
//! Promises.
//!
//! ## Usage from JavaScript
//!
//! ```javascript
//! import init, * as haru from './wasm/haru_wasm.js';
//!
//! await init();
//! haru.configure('https://example.supabase.co', ANON_KEY, true);
//! await haru.refresh();
//!
//! const entries = haru.entries();
//! const grid = haru.monthPresence(2023, 11);
//! const urls = await haru.uploadPhotos([{ fileName: 'a.jpg', bytes }]);
//! await haru.addEntry({ title, date, time, content, location, photos: urls });
//! ```

mod error;

use std::cell::RefCell;
use std::rc::Rc;

use haru_core::calendar::CalendarMonth;
use haru_core::entry::EntryDraft;
use haru_core::gallery::gallery_photos;
use haru_core::photos::PhotoUpload;
use haru_core::repository::EntryRepository;
use haru_core::store::HttpStore;
use js_sys::Promise;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::error::IntoJsResult;

// ============================================================================
// Initialization
// ============================================================================

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the WASM module. Called automatically on module load.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();
    let _ = console_log::init_with_level(log::Level::Info);
}

// ============================================================================
// Global State
// ============================================================================

thread_local! {
    static REPOSITORY: RefCell<Option<Rc<EntryRepository<HttpStore>>>> = RefCell::new(None);
}

fn repository() -> Result<Rc<EntryRepository<HttpStore>>, JsValue> {
    REPOSITORY
        .with(|repo| repo.borrow().clone())
        .ok_or_else(|| JsValue::from_str("Repository not configured. Call configure() first."))
}

/// Point the diary at its hosted backend. Must be called once before any
/// other operation; calling it again replaces the repository (and drops
/// any in-flight operation's result with the old instance).
#[wasm_bindgen]
pub fn configure(store_url: String, api_key: String, seed_demo_data: bool) {
    let store = HttpStore::new(store_url, api_key);
    let repo = EntryRepository::new(store).with_seed_on_empty(seed_demo_data);
    REPOSITORY.with(|r| *r.borrow_mut() = Some(Rc::new(repo)));
}

// ============================================================================
// Entry List
// ============================================================================

/// Current snapshot of the entry list, newest first.
#[wasm_bindgen]
pub fn entries() -> Result<JsValue, JsValue> {
    let repo = repository()?;
    serde_wasm_bindgen::to_value(&repo.entries()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Reload the entry list from the store.
///
/// Returns a Promise; on failure the previous snapshot stays visible and
/// the Promise rejects with a `{ kind: "Fetch", ... }` object.
#[wasm_bindgen]
pub fn refresh() -> Promise {
    future_to_promise(async move {
        let repo = repository()?;
        repo.refresh().await.into_js()?;
        Ok(JsValue::UNDEFINED)
    })
}

/// Create an entry from a draft object (an Entry without `id`; photo
/// URLs must already be uploaded, see [`uploadPhotos`](upload_photos)).
///
/// Resolves to the confirmed entry with its store-assigned id. The list
/// is only extended after the store confirms; a rejection leaves it
/// untouched, so the form can simply re-enable its submit control.
#[wasm_bindgen(js_name = "addEntry")]
pub fn add_entry(draft: JsValue) -> Promise {
    future_to_promise(async move {
        let draft: EntryDraft =
            serde_wasm_bindgen::from_value(draft).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let repo = repository()?;
        let entry = repo.add_entry(draft).await.into_js()?;
        serde_wasm_bindgen::to_value(&entry).map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// Delete an entry by id, after user confirmation (irreversible).
///
/// Resolves once the store has confirmed and the entry left the list; an
/// id that is not in the list resolves immediately.
#[wasm_bindgen(js_name = "deleteEntry")]
pub fn delete_entry(id: String) -> Promise {
    future_to_promise(async move {
        let repo = repository()?;
        repo.delete_entry(&id).await.into_js()?;
        Ok(JsValue::UNDEFINED)
    })
}

// ============================================================================
// Photo Upload
// ============================================================================

/// A selected file handed over from JavaScript.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsPhotoFile {
    file_name: String,
    bytes: Vec<u8>,
}

/// Upload photos and resolve to the public URLs of the ones that
/// succeeded, in selection order. Failed files are skipped (and logged
/// to the console), so the batch never rejects.
///
/// Takes an array of `{ fileName, bytes }` objects.
#[wasm_bindgen(js_name = "uploadPhotos")]
pub fn upload_photos(files: JsValue) -> Promise {
    future_to_promise(async move {
        let files: Vec<JsPhotoFile> =
            serde_wasm_bindgen::from_value(files).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let uploads: Vec<PhotoUpload> = files
            .into_iter()
            .map(|f| PhotoUpload {
                file_name: f.file_name,
                bytes: f.bytes,
            })
            .collect();

        let repo = repository()?;
        let urls = haru_core::photos::upload_photos(repo.store(), &uploads).await;
        serde_wasm_bindgen::to_value(&urls).map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// Clock label for the current local time, e.g. "10:30 AM", for capture
/// at submission.
#[wasm_bindgen(js_name = "currentClockLabel")]
pub fn current_clock_label() -> String {
    haru_core::entry::current_clock_label()
}

// ============================================================================
// Derived Views
// ============================================================================

/// Month grid data returned to JavaScript.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MonthGrid {
    year: i32,
    month: u32,
    days_in_month: u32,
    leading_blanks: u32,
    has_entry: Vec<bool>,
}

/// Calendar data for a displayed month: day count, leading blank cells
/// of a Sunday-first grid, and a per-day entry presence flag.
#[wasm_bindgen(js_name = "monthPresence")]
pub fn month_presence(year: i32, month: u32) -> Result<JsValue, JsValue> {
    let grid =
        CalendarMonth::new(year, month).ok_or_else(|| JsValue::from_str("month must be 1-12"))?;
    let repo = repository()?;
    let entries = repo.entries();

    let payload = MonthGrid {
        year: grid.year(),
        month: grid.month(),
        days_in_month: grid.days_in_month(),
        leading_blanks: grid.leading_blanks(),
        has_entry: grid.presence(&entries),
    };
    serde_wasm_bindgen::to_value(&payload).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The flattened photo wall: `{ url, entry }` pairs preserving entry
/// order, then within-entry photo order.
#[wasm_bindgen(js_name = "galleryPhotos")]
pub fn gallery_photos_js() -> Result<JsValue, JsValue> {
    let repo = repository()?;
    let entries = repo.entries();
    serde_wasm_bindgen::to_value(&gallery_photos(&entries))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
