//! Dark-mode flag, carried as a `dark` class on the document element.
//!
//! The flag lives on the document rather than in component state so that
//! sibling views (the masthead toggle and the detail chart) agree on it
//! without prop-drilling. Views that need to react to it subscribe through
//! [`ThemeWatch`] / [`use_dark_mode`] and must disconnect on teardown.

use std::rc::Rc;

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
mod imp {
    use dioxus::logger::tracing::warn;
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, MutationObserver, MutationObserverInit};

    const DARK_CLASS: &str = "dark";

    fn document_element() -> Option<Element> {
        web_sys::window()?.document()?.document_element()
    }

    pub fn is_dark() -> bool {
        document_element()
            .map(|el| el.class_list().contains(DARK_CLASS))
            .unwrap_or(false)
    }

    pub fn set_dark(enabled: bool) {
        let Some(el) = document_element() else {
            return;
        };
        let class_list = el.class_list();
        let result = if enabled {
            class_list.add_1(DARK_CLASS)
        } else {
            class_list.remove_1(DARK_CLASS)
        };
        if result.is_err() {
            warn!("failed to update the dark class on the document element");
        }
    }

    /// Passive subscription to the dark class via a `MutationObserver`
    /// filtered to `class` attribute changes.
    pub struct ThemeWatch {
        observer: MutationObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
    }

    impl ThemeWatch {
        pub fn observe(mut on_change: impl FnMut(bool) + 'static) -> Option<Self> {
            let target = document_element()?;

            let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
                move |_mutations: js_sys::Array, _observer: MutationObserver| {
                    on_change(is_dark());
                },
            );
            let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).ok()?;

            let init = MutationObserverInit::new();
            init.set_attributes(true);
            init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
            if observer.observe_with_options(&target, &init).is_err() {
                warn!("failed to observe the document element for theme changes");
                return None;
            }

            Some(Self {
                observer,
                _callback: callback,
            })
        }

        pub fn disconnect(&self) {
            self.observer.disconnect();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    // Inert fallbacks so the crate compiles and tests off-wasm.
    pub fn is_dark() -> bool {
        false
    }

    pub fn set_dark(_enabled: bool) {}

    pub struct ThemeWatch;

    impl ThemeWatch {
        pub fn observe(_on_change: impl FnMut(bool) + 'static) -> Option<Self> {
            None
        }

        pub fn disconnect(&self) {}
    }
}

pub use imp::{is_dark, set_dark, ThemeWatch};

/// Track the dark-mode flag for the lifetime of the calling component.
/// Registers a [`ThemeWatch`] on first render and disconnects it when the
/// component is dropped.
pub fn use_dark_mode() -> Signal<bool> {
    let mut dark = use_signal(is_dark);
    let watch = use_hook(|| Rc::new(ThemeWatch::observe(move |enabled| dark.set(enabled))));

    use_drop({
        let watch = watch.clone();
        move || {
            if let Some(watch) = watch.as_ref() {
                watch.disconnect();
            }
        }
    });

    dark
}
