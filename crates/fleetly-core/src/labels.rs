// ── Localization label key helpers ──
//
// The engine produces label keys; resolving them to display strings is
// the localization collaborator's job.

/// Build a label key from a prefix and a raw value:
/// `("event", "deviceOnline")` → `"eventDeviceOnline"`.
pub fn prefixed_label_key(prefix: &str, value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => format!("{prefix}{}{}", first.to_uppercase(), chars.as_str()),
        None => prefix.to_owned(),
    }
}
