//! Browser file exchange
//!
//! The browser build has no file dialogs. Saving hands PNG bytes to the
//! `skin_io` plugin in `docs/index.html`, which offers them as a download.
//! Loading asks the plugin to open a file picker; the picked file arrives
//! asynchronously and is polled once per frame with `take_import`.

use std::fmt;

/// Largest image accepted from the browser (10 MB)
pub const MAX_IMPORT_SIZE: usize = 10 * 1024 * 1024;
/// Longest file name accepted from the browser
pub const MAX_FILENAME_LEN: usize = 256;

/// A picked file the editor refuses to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportRejected {
    TooLarge(usize),
    NameTooLong(usize),
}

impl fmt::Display for ImportRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportRejected::TooLarge(len) => {
                write!(f, "file too large ({} bytes, max {})", len, MAX_IMPORT_SIZE)
            }
            ImportRejected::NameTooLong(len) => {
                write!(f, "file name too long ({} bytes, max {})", len, MAX_FILENAME_LEN)
            }
        }
    }
}

/// Size limits checked before anything is copied out of JS
pub fn check_import(data_len: usize, name_len: usize) -> Result<(), ImportRejected> {
    if data_len > MAX_IMPORT_SIZE {
        return Err(ImportRejected::TooLarge(data_len));
    }
    if name_len > MAX_FILENAME_LEN {
        return Err(ImportRejected::NameTooLong(name_len));
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
extern "C" {
    fn skin_set_export_data(ptr: *const u8, len: usize);
    fn skin_set_export_filename(ptr: *const u8, len: usize);
    fn skin_trigger_download();
    fn skin_import_file();
    fn skin_check_import() -> i32;
    fn skin_get_import_data_len() -> usize;
    fn skin_get_import_filename_len() -> usize;
    fn skin_copy_import_data(ptr: *mut u8, max_len: usize) -> usize;
    fn skin_copy_import_filename(ptr: *mut u8, max_len: usize) -> usize;
    fn skin_clear_import();
}

/// Offer `bytes` to the user as a download named `filename`
#[cfg(target_arch = "wasm32")]
pub fn offer_download(filename: &str, bytes: &[u8]) {
    unsafe {
        skin_set_export_data(bytes.as_ptr(), bytes.len());
        skin_set_export_filename(filename.as_ptr(), filename.len());
        skin_trigger_download();
    }
}

/// Open the browser's file picker; the result shows up in `take_import`
#[cfg(target_arch = "wasm32")]
pub fn request_import() {
    unsafe { skin_import_file() }
}

/// File picked since the last call, as (name, bytes)
#[cfg(target_arch = "wasm32")]
pub fn take_import() -> Option<Result<(String, Vec<u8>), ImportRejected>> {
    if unsafe { skin_check_import() } == 0 {
        return None;
    }

    let data_len = unsafe { skin_get_import_data_len() };
    let name_len = unsafe { skin_get_import_filename_len() };
    if let Err(e) = check_import(data_len, name_len) {
        unsafe { skin_clear_import() };
        return Some(Err(e));
    }

    let mut data = vec![0u8; data_len];
    let mut name = vec![0u8; name_len];
    unsafe {
        let copied = skin_copy_import_data(data.as_mut_ptr(), data_len);
        data.truncate(copied);
        let copied = skin_copy_import_filename(name.as_mut_ptr(), name_len);
        name.truncate(copied);
        skin_clear_import();
    }
    Some(Ok((String::from_utf8_lossy(&name).into_owned(), data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{EditorSession, SessionEvent};
    use crate::texture::{Color24, ResizeMode, SkinTexture};

    #[test]
    fn test_import_limits() {
        assert_eq!(check_import(4096, 8), Ok(()));
        assert_eq!(check_import(MAX_IMPORT_SIZE, MAX_FILENAME_LEN), Ok(()));
        assert_eq!(
            check_import(MAX_IMPORT_SIZE + 1, 8),
            Err(ImportRejected::TooLarge(MAX_IMPORT_SIZE + 1))
        );
        assert_eq!(
            check_import(10, MAX_FILENAME_LEN + 1),
            Err(ImportRejected::NameTooLong(MAX_FILENAME_LEN + 1))
        );
        assert!(ImportRejected::TooLarge(1).to_string().contains("too large"));
    }

    #[test]
    fn test_download_bytes_load_back() {
        // What the download hands out is exactly what an upload reads back
        let mut painted = EditorSession::new(
            SkinTexture::new_filled(64, 64, Color24::CANVAS_GRAY),
            Color24::new(9, 80, 200),
        );
        painted.apply_tool(5, 6);
        let bytes = painted.export_png().unwrap();
        assert!(check_import(bytes.len(), "skin.png".len()).is_ok());

        let mut other = EditorSession::new(
            SkinTexture::new_filled(64, 64, Color24::WHITE),
            Color24::BLACK,
        );
        other.import_image(&bytes, ResizeMode::Stretch).unwrap();
        assert_eq!(other.snapshot(), painted.snapshot());
        assert_eq!(other.drain_events(), vec![SessionEvent::TextureChanged]);
    }

    #[test]
    fn test_bad_upload_leaves_canvas() {
        let mut s = EditorSession::new(SkinTexture::new_filled(64, 64, Color24::WHITE), Color24::BLACK);
        let before = s.snapshot();
        assert!(s.import_image(b"not a png", ResizeMode::Stretch).is_err());
        assert_eq!(s.snapshot(), before);
        assert!(s.drain_events().is_empty());
    }
}
