use log::warn;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::image::ResponsiveImage;
use crate::content::SiteContext;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct WorkDetailProps {
    pub slug: AttrValue,
}

/// Detail view for one work item. Unknown slugs fall through to the
/// not-found view instead of rendering an empty page.
#[function_component(WorkDetail)]
pub fn work_detail(props: &WorkDetailProps) -> Html {
    let site = use_context::<SiteContext>();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let Some(SiteContext(content)) = site else {
        return html! { <NotFound /> };
    };
    let Some(work) = content.find_work(&props.slug) else {
        warn!("no work matches slug {}", props.slug);
        return html! { <NotFound /> };
    };

    html! {
        <div class="work-detail">
            <div class="work-detail-content">
                <Link<Route> to={Route::Home} classes="back-link">{"← Back"}</Link<Route>>
                <h1>{&work.title}</h1>
                <p class="work-detail-year">{&work.year}</p>
                <div class="work-detail-image">
                    <ResponsiveImage
                        src={work.image.clone()}
                        alt={work.title.clone()}
                        sizes={content.image_sizes.work.clone()}
                        eager={true}
                    />
                </div>
            </div>
            <style>
                {r#"
                .work-detail {
                    min-height: 100vh;
                    background: #fff;
                }
                .work-detail-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .work-detail h1 {
                    font-size: 3rem;
                    font-weight: 700;
                }
                .work-detail-year {
                    margin-top: 1rem;
                    font-size: 1.25rem;
                    color: #525252;
                }
                .work-detail-image img {
                    width: 100%;
                    border-radius: 1rem;
                }
                .back-link {
                    font-size: 0.875rem;
                    color: #525252;
                    text-decoration: none;
                }
                @media (min-width: 1024px) {
                    .work-detail-content { padding: 5rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page could not be found."}</p>
            <Link<Route> to={Route::Home} classes="back-link">{"Go home"}</Link<Route>>
            <style>
                {r#"
                .not-found {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    min-height: 100vh;
                    text-align: center;
                }
                .not-found h1 {
                    margin: 0;
                    font-size: 3rem;
                }
                "#}
            </style>
        </div>
    }
}
