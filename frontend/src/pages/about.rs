use yew::prelude::*;

use crate::content::{SkillBar, ABOUT_PARAGRAPHS, ABOUT_SKILL_COLUMNS, EXPERIENCE_HIGHLIGHTS};
use crate::hooks::use_reveal::{revealed, transition_delay, use_page_reveal, use_reveal};
use crate::reveal::{RevealConfig, RevealState, SINGLE_COLUMN_BREAKPOINT_PX};

pub const SECTION_ID: &str = "about";

const REVEAL: RevealConfig = RevealConfig::new(0.1)
    .hold_on_small_viewport()
    .breakpoint(SINGLE_COLUMN_BREAKPOINT_PX);

fn skill_bar(bar: &SkillBar, filled: bool) -> Html {
    let width = if filled { bar.percent } else { 0 };
    html! {
        <div class="skill-bar" key={bar.name}>
            <div class="skill-bar-label">
                <span class="skill-name">{bar.name}</span>
                <span class="skill-level">{bar.level_label}</span>
            </div>
            <div class="skill-bar-track">
                <div
                    class="skill-bar-fill"
                    style={format!("width: {}%; {}", width, transition_delay(bar.delay_ms))}
                ></div>
            </div>
        </div>
    }
}

fn about_grid(reveal: RevealState) -> Html {
    let visible = reveal.section_visible;

    html! {
        <div class="section-grid">
            <div class={classes!("about-text", "reveal", "reveal-left", revealed(visible))}>
                <h1>{"About Me"}</h1>
                <div class={classes!("section-rule", revealed(visible))}></div>
                { for ABOUT_PARAGRAPHS.iter().enumerate().map(|(i, paragraph)| html! {
                    <p
                        class={classes!("reveal", "reveal-up", revealed(visible))}
                        style={transition_delay(500 + i as u32 * 200)}
                    >
                        {*paragraph}
                    </p>
                }) }
            </div>

            <div class={classes!("about-skills", "reveal", "reveal-right", "delay-300", revealed(visible))}>
                <h2>{"Core Technologies"}</h2>
                <div class="skill-columns">
                    { for ABOUT_SKILL_COLUMNS.iter().map(|column| html! {
                        <div class="skill-column">
                            { for column.iter().map(|bar| skill_bar(bar, reveal.child_visible)) }
                        </div>
                    }) }
                </div>

                <div class={classes!("experience", "reveal", "reveal-up", "delay-1000", revealed(visible))}>
                    <h3>{"Experience Highlights"}</h3>
                    { for EXPERIENCE_HIGHLIGHTS.iter().enumerate().map(|(i, item)| html! {
                        <div
                            class={classes!("experience-item", "reveal", "reveal-left", revealed(visible))}
                            style={transition_delay(1200 + i as u32 * 200)}
                        >
                            <span class="bullet"></span>
                            <span>{*item}</span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let reveal = use_reveal(SECTION_ID, section.clone(), REVEAL);

    html! {
        <section ref={section} id={SECTION_ID} class="about-section">
            { about_grid(reveal) }
        </section>
    }
}

/// `/about`: the same content, revealed once on load.
#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let reveal = use_page_reveal(REVEAL);

    html! {
        <section class="about-section page">
            { about_grid(reveal) }
        </section>
    }
}
