use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod reveal;
mod hooks {
    pub mod use_reveal;
}
mod contact {
    pub mod api;
    pub mod form;
}
mod components {
    pub mod footer;
    pub mod nav;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod home;
    pub mod projects;
    pub mod skills;
}

use components::{footer::Footer, nav::Nav};
use pages::{about::AboutPage, home::Home, skills::SkillsPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/skills")]
    Skills,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        },
        Route::Skills => {
            info!("Rendering Skills page");
            html! { <SkillsPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"Back to the portfolio"}
                    </Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_section_pages_are_routed() {
        assert!(matches!(Route::recognize("/"), Some(Route::Home)));
        assert!(matches!(Route::recognize("/about"), Some(Route::About)));
        assert!(matches!(Route::recognize("/skills"), Some(Route::Skills)));
        assert!(matches!(Route::recognize("/projects"), Some(Route::NotFound)));
    }
}
