//! Code-fence stripping for generated text.

const FENCE: &str = "```";

/// Strips one surrounding code fence pair from generated text.
///
/// The model is instructed to return bare code, but often wraps it in a
/// markdown fence, optionally tagged with a language (` ```html `). This
/// inspects only the extremities of the string: one leading marker (plus
/// an immediately-following alphanumeric tag), one trailing marker, and
/// surrounding whitespace. Fences appearing mid-content are left alone.
pub fn strip_code_fence(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        // Language tags sit flush against the marker, e.g. "```html".
        let tag_len = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .count();
        text = &rest[tag_len..];
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim().to_string()
}
