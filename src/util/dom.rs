//! DOM lookup helpers. Requires a browser environment.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, UnwrapThrowExt};

/// Look up a single element by id and cast it to the requested type.
///
/// The caller guarantees the element exists in the current document and
/// has the requested type at call time; the cast is unchecked and a
/// missing id throws. Must not be called before the element is mounted.
#[cfg(target_arch = "wasm32")]
pub fn get_by_id<T: JsCast>(id: &str) -> T {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .unwrap_throw()
        .unchecked_into()
}

/// All elements matching `selector`, in document order.
///
/// The returned vec is a snapshot taken at call time; later DOM
/// mutations do not appear in it. An empty vec is a normal result, never
/// an error.
#[cfg(target_arch = "wasm32")]
pub fn query_all(selector: &str) -> Vec<web_sys::Element> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}
