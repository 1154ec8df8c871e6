//! Scroll helpers for the message log.
//!
//! Browser-only; non-hydrate builds no-op so SSR rendering stays
//! deterministic.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::html::Div;
use leptos::prelude::NodeRef;

/// Scroll `container` so its newest (bottom-most) entry is visible.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn scroll_to_bottom(container: NodeRef<Div>) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::GetUntracked;

        if let Some(el) = container.get_untracked() {
            let scroll_height = el.scroll_height();
            el.set_scroll_top(scroll_height);
        }
    }
}
