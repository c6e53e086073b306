//! Pulls single fields out of the `/query/device-info` document.
//!
//! The body is XML, but only one element is ever needed, so this is a
//! delimiter scan rather than a parser.

const NAME_TAG: &str = "friendly-device-name";

/// The device's human-readable name, if the body carries a non-empty one.
pub fn friendly_name(body: &str) -> Option<String> {
    extract_tag(body, NAME_TAG)
        .map(unescape)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Raw text between the first `<tag>` and the `</tag>` that follows it.
pub fn extract_tag<'a>(body: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let start = body.find(&open)? + open.len();
    let len = body[start..].find(&close)?;
    Some(&body[start..start + len])
}

fn unescape(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
