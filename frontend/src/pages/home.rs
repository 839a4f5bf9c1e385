use yew::prelude::*;

use crate::pages::{
    about::About, contact::Contact, hero::Hero, projects::Projects, skills::Skills,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="portfolio">
            <Hero />
            <Projects />
            <Skills />
            <About />
            <Contact />
        </main>
    }
}
