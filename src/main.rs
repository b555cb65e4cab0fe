use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod motion {
    pub mod counter;
    pub mod menu;
    pub mod scroll;
    pub mod scroll_lock;
    pub mod viewport;
}
mod hooks {
    pub mod anchor;
    pub mod frame;
    pub mod listener;
    pub mod use_breakpoint;
    pub mod use_count_up;
    pub mod use_in_view;
    pub mod use_mobile_menu;
    pub mod use_scroll_position;
}
mod components {
    pub mod accent;
    pub mod button;
    pub mod cards;
    pub mod footer;
    pub mod icon;
    pub mod layout;
    pub mod nav;
    pub mod reveal;
    pub mod stat_card;
}
mod pages {
    pub mod home;
    pub mod persona;
}

use components::{footer::Footer, nav::Navigation};
use content::Persona;
use hooks::anchor::scroll_to_top;
use pages::{home::HomePage, persona::PersonaPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/student")]
    Student,
    #[at("/brand")]
    Brand,
    #[at("/organizer")]
    Organizer,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn for_persona(persona: Persona) -> Self {
        match persona {
            Persona::Student => Route::Student,
            Persona::Brand => Route::Brand,
            Persona::Organizer => Route::Organizer,
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <HomePage /> }
        }
        Route::Student => {
            info!("Rendering Student page");
            html! { <PersonaPage persona={Persona::Student} /> }
        }
        Route::Brand => {
            info!("Rendering Brand page");
            html! { <PersonaPage persona={Persona::Brand} /> }
        }
        Route::Organizer => {
            info!("Rendering Organizer page");
            html! { <PersonaPage persona={Persona::Organizer} /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

/// Resets the window to the top whenever the path changes.
#[function_component(ScrollToTop)]
fn scroll_to_top_on_navigate() -> Html {
    let path = use_location().map(|location| location.path().to_string());

    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        path,
    );

    html! {}
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ScrollToTop />
            <a
                href="#main-content"
                class="sr-only focus:not-sr-only focus:fixed focus:top-4 focus:left-4 focus:z-[100] focus:px-4 focus:py-2 focus:bg-inglu-blue focus:text-white focus:rounded-lg"
            >
                {"Skip to main content"}
            </a>
            <div class="min-h-screen flex flex-col bg-inglu-dark">
                <Navigation />
                <main id="main-content" class="flex-1">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        warn!("Logger already initialised: {}", err);
    }

    info!("Starting INGLU site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_routes_use_their_own_paths() {
        assert_eq!(Route::for_persona(Persona::Student).to_path(), "/student");
        assert_eq!(Route::for_persona(Persona::Brand).to_path(), "/brand");
        assert_eq!(Route::for_persona(Persona::Organizer).to_path(), "/organizer");
    }

    #[test]
    fn known_paths_are_recognised() {
        assert!(Route::recognize("/brand") == Some(Route::Brand));
        assert!(Route::recognize("/") == Some(Route::Home));
    }
}
