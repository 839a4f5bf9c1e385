use yew::prelude::*;

use crate::content::OWNER_NAME;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-copy">{format!("© {} {}. All rights reserved.", year, OWNER_NAME)}</div>
                <div class="footer-built-with">{"Built with Rust, Yew and Axum"}</div>
            </div>
        </footer>
    }
}
