use yew::prelude::*;

use crate::content::{SkillCategory, ADDITIONAL_SKILLS, SKILL_CATEGORIES, SUMMARY_STATS};
use crate::hooks::use_reveal::{revealed, transition_delay, use_page_reveal, use_reveal};
use crate::reveal::{RevealConfig, RevealState};

pub const SECTION_ID: &str = "skills";

const REVEAL: RevealConfig = RevealConfig::new(0.3)
    .hold_on_small_viewport()
    .eager_on_small_viewport();

fn category_card(index: usize, category: &SkillCategory, visible: bool, bars_filled: bool) -> Html {
    let card_delay = index as u32 * 200 + 700;

    html! {
        <div
            class={classes!("skill-card", "reveal", "reveal-up", revealed(visible))}
            style={transition_delay(card_delay)}
        >
            <h3 class="skill-card-title">{category.title}</h3>
            { for category.skills.iter().enumerate().map(|(skill_index, skill)| {
                let width = if bars_filled { skill.level } else { 0 };
                let delay = index as u32 * 200 + skill_index as u32 * 100 + 1000;
                html! {
                    <div class="skill-bar">
                        <div class="skill-bar-label">
                            <span class="skill-name">{skill.name}</span>
                            <span class="skill-level">{format!("{}%", skill.level)}</span>
                        </div>
                        <div class="skill-bar-track">
                            <div
                                class="skill-bar-fill"
                                style={format!("width: {}%; {}", width, transition_delay(delay))}
                            ></div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

fn skills_body(reveal: RevealState) -> Html {
    let visible = reveal.section_visible;

    html! {
        <>
            <div class={classes!("section-header", "reveal", "reveal-up", revealed(visible))}>
                <h1>{"Skills & Expertise"}</h1>
                <div class={classes!("section-rule", revealed(visible))}></div>
                <p class={classes!("reveal", "reveal-up", "delay-500", revealed(visible))}>
                    {"An overview of my technical skills and proficiency across front-end, back-end and tooling."}
                </p>
            </div>

            <div class="skill-cards">
                { for SKILL_CATEGORIES.iter().enumerate().map(|(index, category)| {
                    category_card(index, category, visible, reveal.child_visible)
                }) }
            </div>

            <div class="additional-skills">
                <h2 class={classes!("reveal", "reveal-up", "delay-1000", revealed(visible))}>
                    {"Additional Competencies"}
                </h2>
                <div class={classes!("badges", "reveal", "reveal-up", "delay-1200", revealed(reveal.child_visible))}>
                    { for ADDITIONAL_SKILLS.iter().map(|skill| html! {
                        <span class="badge">{*skill}</span>
                    }) }
                </div>
            </div>

            <div class={classes!("summary-stats", "reveal", "reveal-up", "delay-1600", revealed(visible))}>
                { for SUMMARY_STATS.iter().map(|(value, label)| html! {
                    <div class="stat">
                        <div class="stat-value">{*value}</div>
                        <div class="stat-label">{*label}</div>
                    </div>
                }) }
            </div>
        </>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let section = use_node_ref();
    let reveal = use_reveal(SECTION_ID, section.clone(), REVEAL);

    html! {
        <section ref={section} id={SECTION_ID} class="skills-section">
            { skills_body(reveal) }
        </section>
    }
}

/// `/skills`: the same content, revealed once on load.
#[function_component(SkillsPage)]
pub fn skills_page() -> Html {
    let reveal = use_page_reveal(REVEAL);

    html! {
        <section class="skills-section page">
            { skills_body(reveal) }
        </section>
    }
}
