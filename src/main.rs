use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod reveal;
mod chat {
    pub mod conversation;
    pub mod script;
    pub mod session;
    pub mod window;
}
mod components {
    pub mod accordion;
    pub mod book_call_button;
    pub mod card_stack;
    pub mod highlighted_text;
    pub mod team_section;
    pub mod testimonial_card;
    pub mod video_background;
    pub mod wake_ai;
}
mod sections {
    pub mod about_wake;
    pub mod blog_section;
    pub mod call_to_action;
    pub mod case_studies;
    pub mod core_principles;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod problem;
    pub mod services;
    pub mod strategy_session;
    pub mod team;
    pub mod testimonials;
    pub mod who_we_work_with;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
