use std::rc::Rc;

use log::{debug, error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod errors;
mod components {
    pub mod frame_loop;
    pub mod image;
    pub mod marquee;
    pub mod navbar;
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod work;
}

use content::{SiteContent, SiteContext};
use pages::{
    home::Home,
    work::{NotFound, WorkDetail},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/variant/:key")]
    Variant { key: String },
    #[at("/work/:slug")]
    Work { slug: String },
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
        Route::Variant { key } => {
            info!("Rendering Home page variant {}", key);
            html! { <Home key={key.clone()} variant={key.clone()} /> }
        }
        Route::Work { slug } => {
            info!("Rendering Work page {}", slug);
            html! { <WorkDetail key={slug.clone()} slug={slug.clone()} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: SiteContext,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<SiteContext> context={props.content.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SiteContext>>
    }
}

#[function_component]
fn ContentUnavailable() -> Html {
    html! {
        <div class="content-unavailable">
            <p>{"This site is temporarily unavailable. Please try again later."}</p>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::load() {
        Ok(content) => {
            info!(
                "Loaded {} works across {} page variants",
                content.works.len(),
                content.variants.len()
            );
            debug!("work routes: {:?}", content.work_slugs());
            yew::Renderer::<App>::with_props(AppProps {
                content: SiteContext(Rc::new(content)),
            })
            .render();
        }
        Err(err) => {
            error!("site content failed to load: {}", err);
            yew::Renderer::<ContentUnavailable>::new().render();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterized_routes_render_keyed_pages() {
        let variant = switch(Route::Variant {
            key: "studio".to_string(),
        });
        assert!(matches!(&variant, Html::VComp(_)));
        assert_eq!(variant.key().map(|k| k.to_string()), Some("studio".to_string()));

        let work = switch(Route::Work {
            slug: "flow-water".to_string(),
        });
        assert!(matches!(&work, Html::VComp(_)));
        assert_eq!(work.key().map(|k| k.to_string()), Some("flow-water".to_string()));
    }
}
