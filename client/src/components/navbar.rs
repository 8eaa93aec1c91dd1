//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

use super::theme_toggle::ThemeToggle;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Bill Parser"</A>
            <div class="navbar__links">
                <A href="/" attr:class="navbar__link">"Home"</A>
                <A href="/about" attr:class="navbar__link">"About"</A>
                <ThemeToggle/>
            </div>
        </nav>
    }
}
