use contracts::shared::config::{load_config, SiteConfig};

/// Id of the optional inline `<script type="application/toml">` element
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Configuration from the page shell, falling back to built-in defaults
pub fn load_site_config() -> SiteConfig {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    load_config(inline.as_deref())
}
