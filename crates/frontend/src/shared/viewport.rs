use contracts::shared::view_state::PagePresets;

/// Ширина окна браузера в CSS-пикселях
pub fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Page size for this page load. Evaluated once; resizing does not re-paginate.
pub fn session_page_size(presets: &PagePresets) -> usize {
    let width = window_width().unwrap_or(f64::from(presets.breakpoint));
    let size = presets.page_size_for_width(width);
    log::debug!("Viewport {}px, page size {}", width, size);
    size
}
