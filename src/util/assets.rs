use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Everything under `assets/` ships inside the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// The SVG favicon as a `data:` URI.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| svg_data_uri(&load_text("favicon.svg")))
        .as_str()
}

/// Missing or non-UTF-8 assets come back empty and are logged; the page
/// still renders, just unstyled.
fn load_text(name: &str) -> String {
    let Some(bytes) = load_asset(name) else {
        tracing::error!(asset = name, "embedded asset missing");
        return String::new();
    };
    String::from_utf8(bytes.into_owned()).unwrap_or_else(|_| {
        tracing::error!(asset = name, "embedded asset is not valid UTF-8");
        String::new()
    })
}

fn load_asset(name: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(name.trim_start_matches('/')).map(|file| file.data)
}

/// Percent-encodes the handful of characters that break an SVG data URI.
fn svg_data_uri(svg: &str) -> String {
    let mut encoded = String::with_capacity(svg.len() + 32);
    for ch in svg.chars() {
        match ch {
            '"' => encoded.push('\''),
            '%' => encoded.push_str("%25"),
            '#' => encoded.push_str("%23"),
            '<' => encoded.push_str("%3C"),
            '>' => encoded.push_str("%3E"),
            '\n' | '\r' => encoded.push(' '),
            other => encoded.push(other),
        }
    }
    format!("data:image/svg+xml;charset=utf-8,{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_embedded() {
        assert!(main_css().contains(".card"));
    }

    #[test]
    fn svg_uri_escapes_markup() {
        let uri = svg_data_uri("<svg fill=\"#fff\"/>");
        assert_eq!(uri, "data:image/svg+xml;charset=utf-8,%3Csvg fill='%23fff'/%3E");
        assert!(favicon_data_uri().starts_with("data:image/svg+xml"));
    }
}
