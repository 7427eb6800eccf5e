pub const APP_NAME: &str = "Home Value Oracle";
pub const APP_TAGLINE: &str = "Hyderabad property prices, estimated in seconds";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Release tag when built from a tagged checkout, else the crate version.
pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) if tag.starts_with('v') || tag.starts_with('V') => tag.to_string(),
        Some(tag) => format!("v{tag}"),
        None => format!("v{APP_VERSION}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_prefixed() {
        assert!(version_label().starts_with(['v', 'V']));
    }
}
