use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};

mod config;
mod contact_form;
mod video_loop;
mod components {
    pub mod about;
    pub mod contact;
    pub mod gallery;
    pub mod hero;
    pub mod services;
}

use components::{
    about::About,
    contact::Contact,
    gallery::Gallery,
    hero::Hero,
    services::Services,
};

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
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(Home)]
fn home() -> Html {
    html! {
        <div class="home-page">
            <Hero />
            <Services />
            <Gallery />
            <About />
            <Contact />
        </div>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    if config::cloudinary_cloud_name().is_none() {
        warn!("CLOUDINARY_CLOUD_NAME is not set; hero video and remote images are disabled");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
