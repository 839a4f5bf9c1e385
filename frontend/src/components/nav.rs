use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::content::OWNER_NAME;
use crate::pages::{about, contact, projects, skills};

const SCROLLED_OFFSET_PX: f64 = 50.0;

const NAV_LINKS: &[(&str, &str)] = &[
    (about::SECTION_ID, "About"),
    (skills::SECTION_ID, "Skills"),
    (projects::SECTION_ID, "Projects"),
    (contact::SECTION_ID, "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = window().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > SCROLLED_OFFSET_PX);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // No prevent_default here: the anchor's own navigation must still happen.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{OWNER_NAME}</a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(id, label)| html! {
                        <a href={format!("#{}", id)} class="nav-link" onclick={close_menu.clone()}>
                            {*label}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}
