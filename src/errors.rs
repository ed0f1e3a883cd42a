use thiserror::Error;

/// Failures while loading the bundled site content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("work slug `{slug}` is used more than once")]
    DuplicateSlug { slug: String },
    #[error("work `{title}` has an empty slug")]
    EmptySlug { title: String },
    #[error("marquee needs at least one image")]
    EmptyMarquee,
    #[error("no page variants configured")]
    NoVariants,
    #[error("page variant `{key}` is defined more than once")]
    DuplicateVariant { key: String },
}
