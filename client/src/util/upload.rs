//! Accepted-file rules for bill uploads.
//!
//! The backend only parses JPEG and PNG photos. Files are checked by MIME
//! type first and by extension when the browser reports no useful type.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpeg", "jpg", "png"];
/// Value for the file input's `accept` attribute.
pub const ACCEPT_ATTR: &str = "image/jpeg,image/png,.jpeg,.jpg,.png";

pub const UNSUPPORTED_FILE_MESSAGE: &str = "Only JPG, JPEG and PNG images are supported";

/// Name and MIME type of a file picked or dropped by the user.
pub trait UploadMeta {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;
}

#[cfg(feature = "hydrate")]
impl UploadMeta for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Whether a file with this name and MIME type can be uploaded.
pub fn is_accepted_image(file_name: &str, mime_type: &str) -> bool {
    let mime = mime_type.trim().to_ascii_lowercase();
    if ACCEPTED_MIME_TYPES.contains(&mime.as_str()) {
        return true;
    }
    if !mime.is_empty() && mime != "application/octet-stream" {
        return false;
    }
    extension(file_name).is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Check an upload, returning the message to show when it is rejected.
///
/// # Errors
///
/// Returns [`UNSUPPORTED_FILE_MESSAGE`] for anything but JPEG/PNG.
pub fn check_upload(file: &impl UploadMeta) -> Result<(), String> {
    if is_accepted_image(&file.file_name(), &file.mime_type()) {
        Ok(())
    } else {
        Err(UNSUPPORTED_FILE_MESSAGE.to_owned())
    }
}

fn extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
