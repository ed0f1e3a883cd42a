use yew::prelude::*;

use crate::content::{sizes_attr, SizeHint};

#[derive(Properties, PartialEq)]
pub struct ResponsiveImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub sizes: Vec<SizeHint>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub eager: bool,
    #[prop_or(true)]
    pub draggable: bool,
}

/// An `<img>` carrying the hints an image host needs to pick a rendition:
/// source, alt text and the breakpoint to width map.
#[function_component(ResponsiveImage)]
pub fn responsive_image(props: &ResponsiveImageProps) -> Html {
    let sizes = sizes_attr(&props.sizes);
    let loading = if props.eager { "eager" } else { "lazy" };
    let draggable = if props.draggable { "true" } else { "false" };

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            sizes={sizes}
            loading={loading}
            draggable={draggable}
            class={props.class.clone()}
        />
    }
}
