use yew::prelude::*;

use crate::content::{Project, PROJECTS};
use crate::hooks::use_reveal::{revealed, use_reveal, use_stagger};
use crate::reveal::{RevealConfig, PROJECT_CARD_BASE_DELAY_MS, PROJECT_CARD_STEP_MS};

pub const SECTION_ID: &str = "projects";

const REVEAL: RevealConfig = RevealConfig::new(0.3).hold_on_small_viewport();

fn project_card(project: &Project, shown: bool) -> Html {
    html! {
        <article class={classes!("project-card", "reveal", "reveal-up", project.featured.then_some("featured"), revealed(shown))}>
            if let Some(image) = project.image {
                <img class="project-image" src={image} alt={project.title} loading="lazy" />
            }
            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="project-tech">
                    { for project.tech.iter().map(|tech| html! { <span class="badge">{*tech}</span> }) }
                </div>
                <div class="project-links">
                    <a class="btn btn-primary" href={project.live_url} target="_blank" rel="noopener noreferrer">
                        <i class="icon-external-link"></i>
                        {"Live Demo"}
                    </a>
                    <a class="btn btn-outline" href={project.github_url} target="_blank" rel="noopener noreferrer">
                        <i class="icon-github"></i>
                        {"Code"}
                    </a>
                </div>
            </div>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let section = use_node_ref();
    let reveal = use_reveal(SECTION_ID, section.clone(), REVEAL);
    let cards = use_stagger(
        reveal.section_visible,
        PROJECTS.len(),
        PROJECT_CARD_BASE_DELAY_MS,
        PROJECT_CARD_STEP_MS,
    );

    html! {
        <section ref={section} id={SECTION_ID} class="projects-section">
            <div class={classes!("section-header", "reveal", "reveal-up", revealed(reveal.section_visible))}>
                <h1>{"Featured Projects"}</h1>
                <div class={classes!("section-rule", revealed(reveal.section_visible))}></div>
                <p>{"A selection of things I've built recently."}</p>
            </div>
            <div class="project-grid">
                { for PROJECTS.iter().zip(cards.iter()).map(|(project, shown)| project_card(project, *shown)) }
            </div>
        </section>
    }
}
