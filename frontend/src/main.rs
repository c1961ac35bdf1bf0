use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod theme;
mod pages {
    pub mod faq;
    pub mod landing;
}
mod utils {
    pub mod validation;
}

use pages::faq::Faq;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faq")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::Faq => html! { <Faq /> },
        Route::NotFound => html! { <main class="not-found">{"Page not found."}</main> },
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
    yew::Renderer::<App>::new().render();
}
