// Cover picture helpers — content-type mapping and stored file names.

use rand::RngCore;

/// Map an image content type to the file extension it is stored under.
///
/// Parameters such as `; charset=...` are ignored. Returns `None` for
/// anything that isn't an accepted image type.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    match mime.as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// A random, collision-resistant file name: 32 hex chars plus the extension.
pub fn random_file_name(extension: &str) -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    format!("{}.{extension}", hex::encode(bytes))
}
