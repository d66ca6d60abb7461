use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tokio::fs;

use crate::errors::AdminError;

/// Reads a locally selected image and encodes it as a
/// `data:<mime>;base64,...` URL, the shape the project form stores in its
/// `image` field. The MIME type is sniffed from the file content; files
/// that are not images are rejected.
pub async fn read_image_data_url(path: &Path) -> Result<String, AdminError> {
    let bytes = fs::read(path).await?;

    let mime = infer::get(&bytes)
        .map(|kind| kind.mime_type())
        .ok_or_else(|| AdminError::File(format!("unrecognized file type: {}", path.display())))?;
    if !mime.starts_with("image/") {
        return Err(AdminError::File(format!("not an image: {mime}")));
    }

    Ok(format!("data:{mime};base64,{}", STANDARD.encode(&bytes)))
}
