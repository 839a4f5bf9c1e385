use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::content::{
    HERO_PITCH, OWNER_NAME, OWNER_TITLE, PROFILE_IMAGE_PATH, RESUME_DOWNLOAD_NAME, RESUME_PATH,
    SOCIAL_LINKS,
};
use crate::hooks::use_reveal::{revealed, use_mount_reveal};
use crate::pages::projects;

fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        log::warn!("No section with id #{} to scroll to", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let visible = use_mount_reveal();

    let view_work = Callback::from(|_: MouseEvent| scroll_to_section(projects::SECTION_ID));

    html! {
        <section class="hero">
            <div class="hero-grid">
                <div class={classes!("hero-text", "reveal", "reveal-left", revealed(visible))}>
                    <h1>
                        {"Hi, I'm "}
                        <span class="hero-name">{OWNER_NAME}</span>
                    </h1>
                    <h2 class={classes!("hero-title", "reveal", "reveal-up", "delay-300", revealed(visible))}>
                        {OWNER_TITLE}
                    </h2>
                    <p class={classes!("hero-pitch", "reveal", "reveal-up", "delay-500", revealed(visible))}>
                        {HERO_PITCH}
                    </p>

                    <div class={classes!("hero-actions", "reveal", "reveal-up", "delay-700", revealed(visible))}>
                        <button class="btn btn-primary" onclick={view_work}>
                            {"View My Work"}
                            <i class="icon-arrow-down"></i>
                        </button>
                        <a class="btn btn-outline" href={RESUME_PATH} download={RESUME_DOWNLOAD_NAME}>
                            {"Download CV"}
                        </a>
                    </div>

                    <div class={classes!("hero-socials", "reveal", "reveal-up", "delay-900", revealed(visible))}>
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a href={link.href} target="_blank" rel="noopener noreferrer" aria-label={link.name}>
                                <i class={link.icon_class}></i>
                            </a>
                        }) }
                    </div>
                </div>

                <div class={classes!("hero-image", "reveal", "reveal-right", "delay-200", revealed(visible))}>
                    <img src={PROFILE_IMAGE_PATH} alt={format!("{} - {}", OWNER_NAME, OWNER_TITLE)} />
                </div>
            </div>
        </section>
    }
}
