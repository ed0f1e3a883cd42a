use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::image::ResponsiveImage;
use crate::components::marquee::Marquee;
use crate::components::navbar::Navbar;
use crate::components::reveal::{RevealContext, RevealController, RevealSection};
use crate::config;
use crate::content::{SectionKind, SiteContent, SiteContext, Variant};
use crate::pages::work::NotFound;
use crate::Route;

fn hero_section(variant: &Variant) -> Html {
    let hero = &variant.hero;
    html! {
        <RevealSection key={SectionKind::Hero.key()} tag="header" class="hero">
            <h1>{&hero.title}</h1>
            <h2>{&hero.subtitle}</h2>
            <a href={hero.cta_href.clone()} class="arrow-link hero-cta">
                {&hero.cta_label}
                <span class="arrow">{"→"}</span>
            </a>
        </RevealSection>
    }
}

fn marquee_section(content: &SiteContent) -> Html {
    html! {
        <RevealSection key={SectionKind::Marquee.key()} class="marquee-section">
            <Marquee items={content.marquee.clone()} sizes={content.image_sizes.marquee.clone()} />
        </RevealSection>
    }
}

fn brands_section(content: &SiteContent) -> Html {
    html! {
        <RevealSection key={SectionKind::Brands.key()} class="brands">
            <h3>{&content.brand_caption}</h3>
            <div class="brand-logos">
                { for content.brand_logos.iter().map(|logo| html! {
                    <div class="brand-logo" key={logo.src.clone()}>
                        <ResponsiveImage
                            src={logo.src.clone()}
                            alt={logo.alt.clone()}
                            sizes={content.image_sizes.logo.clone()}
                        />
                    </div>
                }) }
            </div>
        </RevealSection>
    }
}

fn work_section(content: &SiteContent, variant: &Variant) -> Html {
    html! {
        <RevealSection key={SectionKind::Work.key()} id="work" class="work">
            <div class="section-intro">
                <p class="eyebrow">{"• Work"}</p>
                <h3>{"Latest work"}</h3>
                <p class="lede">{&variant.work_intro}</p>
                <a href="#contact" class="arrow-link">
                    {"See all latest work"}
                    <span class="arrow">{"→"}</span>
                </a>
            </div>
            <div class="work-grid">
                { for content.works.iter().map(|work| html! {
                    <Link<Route>
                        key={work.slug.clone()}
                        to={Route::Work { slug: work.slug.clone() }}
                        classes="work-card"
                    >
                        <div class="work-image">
                            <ResponsiveImage
                                src={work.image.clone()}
                                alt={work.title.clone()}
                                sizes={content.image_sizes.work.clone()}
                            />
                        </div>
                        <div class="work-meta">
                            <span>{&work.title}</span>
                            <span class="muted">{&work.year}</span>
                        </div>
                    </Link<Route>>
                }) }
            </div>
        </RevealSection>
    }
}

fn services_section(content: &SiteContent, variant: &Variant) -> Html {
    html! {
        <RevealSection key={SectionKind::Services.key()} id="services" class="services">
            <div>
                <p class="eyebrow">{"• Services"}</p>
                <h3>{&variant.services_heading}</h3>
            </div>
            <div class="service-list">
                { for content.services.iter().enumerate().map(|(index, service)| html! {
                    <div key={service.title.clone()} class={classes!("service-row", (index % 2 == 1).then(|| "flipped"))}>
                        <div class="service-image">
                            <ResponsiveImage
                                src={service.image.clone()}
                                alt={service.title.clone()}
                                sizes={content.image_sizes.service.clone()}
                            />
                        </div>
                        <div class="service-body">
                            <div class="service-label">
                                <span>{&service.number}</span>
                                <span class="rule" />
                                <span>{&service.title}</span>
                            </div>
                            <p class="service-description">{&service.description}</p>
                            <div class="service-tags">
                                { for service.tags.iter().map(|tag| html! {
                                    <span key={tag.clone()} class="tag">{tag}</span>
                                }) }
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </RevealSection>
    }
}

fn about_section(content: &SiteContent, variant: &Variant) -> Html {
    let about = &variant.about;
    html! {
        <RevealSection key={SectionKind::About.key()} class="about">
            <div class="about-intro">
                <p class="eyebrow">{"• About Me"}</p>
                <h3>{&about.heading}</h3>
                <p class="lede">{&about.bio}</p>
            </div>
            <div class="about-portrait">
                <ResponsiveImage
                    src={about.portrait.src.clone()}
                    alt={about.portrait.alt.clone()}
                    sizes={content.image_sizes.portrait.clone()}
                />
            </div>
            <div class="stats">
                { for content.stats.iter().map(|stat| html! {
                    <div key={stat.number.clone()} class="stat">
                        <div class="stat-number">{&stat.number}</div>
                        <p>{&stat.label}</p>
                    </div>
                }) }
            </div>
        </RevealSection>
    }
}

fn contact_section(content: &SiteContent) -> Html {
    let contact = &content.contact;
    html! {
        <RevealSection key={SectionKind::Contact.key()} tag="footer" id="contact" class="contact">
            <div class="contact-details">
                <h4>{&contact.tagline}</h4>
                <p>{&contact.location}</p>
                <a href={format!("mailto:{}", contact.email)} class="contact-email">{&contact.email}</a>
            </div>
            <div class="contact-links">
                <div class="link-row">
                    { for contact.links.iter().map(|link| html! {
                        <a key={link.label.clone()} href={link.href.clone()}>{&link.label}</a>
                    }) }
                </div>
                <div class="link-row">
                    { for contact.socials.iter().map(|link| html! {
                        <a key={link.label.clone()} href={link.href.clone()} target="_blank" rel="noreferrer">
                            {&link.label}
                        </a>
                    }) }
                </div>
            </div>
        </RevealSection>
    }
}

fn render_section(kind: SectionKind, content: &SiteContent, variant: &Variant) -> Html {
    match kind {
        SectionKind::Hero => hero_section(variant),
        SectionKind::Marquee => marquee_section(content),
        SectionKind::Brands => brands_section(content),
        SectionKind::Work => work_section(content, variant),
        SectionKind::Services => services_section(content, variant),
        SectionKind::About => about_section(content, variant),
        SectionKind::Contact => contact_section(content),
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// `None` renders the default variant.
    #[prop_or_default]
    pub variant: Option<AttrValue>,
}

/// The one-page portfolio, assembled from the variant's section order.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let site = use_context::<SiteContext>();
    let reveal = use_state(|| RevealContext(Rc::new(RevealController::new(config::REVEAL_THRESHOLD))));

    {
        let reveal = (*reveal).clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                move || reveal.0.disconnect()
            },
            (),
        );
    }

    let Some(SiteContext(content)) = site else {
        warn!("home rendered without site content");
        return html! { <NotFound /> };
    };

    let variant = match &props.variant {
        Some(key) => content.variant(key),
        None => Some(content.default_variant()),
    };
    let Some(variant) = variant else {
        info!("unknown page variant {:?}", props.variant);
        return html! { <NotFound /> };
    };

    html! {
        <ContextProvider<RevealContext> context={(*reveal).clone()}>
            <div class="home-page">
                <Navbar brand={content.brand.clone()} services={content.nav_services.clone()} />
                <main class="home-main">
                    { for variant.sections.iter().map(|kind| render_section(*kind, &content, variant)) }
                </main>
                <style>
                    {r#"
                    .home-page {
                        min-height: 100vh;
                        background: #fff;
                        color: #000;
                    }
                    .home-main {
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                        width: 100%;
                        padding: 5rem 1rem;
                        box-sizing: border-box;
                    }
                    .reveal-base {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                    }
                    .reveal-base.reveal-visible {
                        opacity: 1;
                        transform: none;
                    }
                    .hero {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        min-height: 60vh;
                        text-align: center;
                    }
                    .hero h1 {
                        margin: 0;
                        font-size: 2.25rem;
                        line-height: 1.1;
                        letter-spacing: -0.025em;
                    }
                    .hero h2 {
                        margin: 0;
                        font-size: 1.25rem;
                        font-weight: 400;
                    }
                    .arrow-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-weight: 500;
                        color: inherit;
                        text-decoration: underline;
                        text-underline-offset: 4px;
                    }
                    .arrow-link .arrow {
                        transition: transform 0.2s;
                    }
                    .arrow-link:hover .arrow {
                        transform: translateX(4px);
                    }
                    .eyebrow {
                        margin: 0;
                        font-size: 0.75rem;
                        font-weight: 500;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #737373;
                    }
                    .lede {
                        color: #404040;
                        line-height: 1.6;
                    }
                    .muted {
                        color: #737373;
                    }
                    .brands h3 {
                        text-align: center;
                        font-weight: 400;
                        color: #404040;
                    }
                    .brand-logos {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        opacity: 0.6;
                        filter: grayscale(1);
                    }
                    .brand-logo img {
                        width: 4rem;
                        height: 1.5rem;
                        object-fit: contain;
                    }
                    .work-grid {
                        display: grid;
                        gap: 0.75rem;
                    }
                    .work-card {
                        display: block;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        color: inherit;
                        text-decoration: none;
                        transition: transform 0.2s;
                    }
                    .work-card:hover {
                        transform: translateY(-4px);
                    }
                    .work-image {
                        aspect-ratio: 16 / 10;
                        overflow: hidden;
                        background: #f5f5f5;
                    }
                    .work-image img,
                    .service-image img,
                    .about-portrait img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .work-meta {
                        display: flex;
                        justify-content: space-between;
                        padding: 0.75rem;
                        font-size: 0.75rem;
                        font-weight: 600;
                    }
                    .service-list {
                        display: grid;
                        gap: 2rem;
                    }
                    .service-row {
                        display: grid;
                        gap: 1.25rem;
                    }
                    .service-image {
                        aspect-ratio: 4 / 5;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        background: #f5f5f5;
                    }
                    .service-body {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .service-label {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.75rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        color: #525252;
                    }
                    .service-label .rule {
                        display: inline-block;
                        width: 1.5rem;
                        height: 1px;
                        background: #d4d4d4;
                    }
                    .service-description {
                        font-size: 1rem;
                        line-height: 1.6;
                        color: #262626;
                    }
                    .service-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.375rem;
                    }
                    .tag {
                        padding: 0.25rem 0.625rem;
                        border: 1px solid #d4d4d4;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        color: #525252;
                    }
                    .about-intro {
                        text-align: center;
                    }
                    .about-portrait {
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        background: #000;
                    }
                    .stats {
                        display: grid;
                        gap: 1rem;
                    }
                    .stat {
                        text-align: center;
                    }
                    .stat-number {
                        font-size: 1.875rem;
                        font-weight: 700;
                    }
                    .contact {
                        display: grid;
                        gap: 1.25rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid #e5e5e5;
                        font-size: 0.75rem;
                        color: #525252;
                    }
                    .contact h4 {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #404040;
                    }
                    .contact a {
                        font-weight: 500;
                        color: #000;
                        text-decoration: none;
                    }
                    .contact a:hover {
                        text-decoration: underline;
                    }
                    .link-row {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    @media (min-width: 640px) {
                        .home-main { gap: 4rem; padding: 5rem 1.5rem; }
                        .hero h1 { font-size: 3rem; }
                        .hero h2 { font-size: 1.5rem; }
                        .stats { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 768px) {
                        .home-main { gap: 5rem; padding: 5rem 2rem; }
                        .hero h1 { font-size: 3.75rem; }
                        .work-grid { grid-template-columns: repeat(2, 1fr); gap: 1.25rem; }
                    }
                    @media (min-width: 1024px) {
                        .home-main { gap: 6rem; padding: 5rem 3rem; }
                        .hero h1 { font-size: 4.5rem; }
                        .service-row { grid-template-columns: repeat(2, 1fr); gap: 2.5rem; }
                        .service-row.flipped { grid-auto-flow: dense; }
                        .service-row.flipped .service-image { grid-column-start: 2; }
                        .stats { grid-template-columns: repeat(4, 1fr); }
                        .contact { grid-template-columns: repeat(2, 1fr); }
                        .contact-links { display: flex; flex-direction: column; align-items: flex-end; gap: 1rem; }
                    }
                    "#}
                </style>
            </div>
        </ContextProvider<RevealContext>>
    }
}
