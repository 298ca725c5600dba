//! Copy-and-follow section links.

/// Copy the absolute `#section` URL to the clipboard, then navigate to
/// it. The clipboard write is asynchronous; both steps run on a spawned
/// local task. A no-op outside a browser.
pub fn copy_section_link(section_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let (Ok(protocol), Ok(host)) = (location.protocol(), location.host()) else {
            return;
        };
        let url = format!("{protocol}//{host}/#{section_id}");
        let clipboard = window.navigator().clipboard();

        leptos::task::spawn_local(async move {
            let _ = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&url)).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = section_id;
    }
}
