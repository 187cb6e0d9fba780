use crate::tree::ConfigDocument;

/// Serialize a [`ConfigDocument`] to text with a trailing newline.
pub fn write(doc: &ConfigDocument) -> String {
    let mut out = doc.to_string();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
