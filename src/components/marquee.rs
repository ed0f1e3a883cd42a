//! Infinitely looping image strip.
//!
//! The strip renders its items twice in a row. Auto-scroll advances the
//! container's horizontal offset every frame and snaps it back to zero once
//! the first copy has fully scrolled past, which is invisible because the
//! second copy looks identical. Hovering (on hover-capable devices) or
//! dragging pauses the motion; dragging scrolls by hand under pointer capture.

use gloo_events::EventListener;
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::components::frame_loop::FrameLoop;
use crate::components::image::ResponsiveImage;
use crate::config;
use crate::content::{MarqueeItem, SizeHint};

/// Concatenates the items with themselves once, preserving order.
pub fn doubled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut strip = Vec::with_capacity(items.len() * 2);
    strip.extend_from_slice(items);
    strip.extend_from_slice(items);
    strip
}

/// Snapshot taken when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOrigin {
    pub start_x: f64,
    pub scroll_offset_at_start: f64,
    pub pointer_id: i32,
}

#[derive(Debug)]
pub struct MarqueeState {
    speed: f64,
    offset: f64,
    hovered: bool,
    supports_hover: bool,
    drag: Option<DragOrigin>,
}

impl MarqueeState {
    /// Starts unpaused at offset zero. Hover capability is assumed until the
    /// device reports otherwise.
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            offset: 0.0,
            hovered: false,
            supports_hover: true,
            drag: None,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_paused(&self) -> bool {
        self.drag.is_some() || (self.supports_hover && self.hovered)
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_supports_hover(&mut self, supports_hover: bool) {
        self.supports_hover = supports_hover;
    }

    /// One animation frame. `observed` is the offset the container currently
    /// reports and `scroll_width` its full scrollable width.
    ///
    /// While paused the observed offset is adopted (the user may have wheeled
    /// or dragged the strip) and nothing moves. Otherwise the offset advances
    /// by one step, wrapping to exactly zero once it reaches half the width,
    /// and the new offset is returned for the caller to apply.
    pub fn tick(&mut self, observed: f64, scroll_width: f64) -> Option<f64> {
        if self.is_paused() {
            self.offset = observed;
            return None;
        }
        let mut next = self.offset + self.speed;
        if scroll_width > 0.0 && next >= scroll_width / 2.0 {
            debug!("marquee wrapped at {next:.1} of {scroll_width}");
            next = 0.0;
        }
        self.offset = next;
        Some(next)
    }

    pub fn begin_drag(&mut self, x: f64, pointer_id: i32, observed: f64) {
        self.offset = observed;
        self.drag = Some(DragOrigin {
            start_x: x,
            scroll_offset_at_start: observed,
            pointer_id,
        });
    }

    /// Dragging right scrolls backwards. Returns `None` when no drag is active.
    pub fn drag_to(&mut self, x: f64) -> Option<f64> {
        let origin = self.drag?;
        let delta = x - origin.start_x;
        self.offset = origin.scroll_offset_at_start - delta;
        Some(self.offset)
    }

    /// Adopts the offset the container actually holds. The browser clamps
    /// `scrollLeft`, so a drag past either end leaves the computed offset out
    /// of range until this is called.
    pub fn sync(&mut self, observed: f64) {
        self.offset = observed;
    }

    /// Ends the drag and hands back the pointer to release. Auto-scroll
    /// resumes from `observed`. Repeated terminating events get `None`.
    pub fn end_drag(&mut self, observed: f64) -> Option<i32> {
        let origin = self.drag.take()?;
        self.offset = observed;
        Some(origin.pointer_id)
    }
}

/// Routes a pointer to `element` until dropped.
struct PointerCapture {
    element: Element,
    pointer_id: i32,
}

impl PointerCapture {
    fn acquire(element: &Element, pointer_id: i32) -> Option<Self> {
        match element.set_pointer_capture(pointer_id) {
            Ok(()) => Some(Self {
                element: element.clone(),
                pointer_id,
            }),
            Err(err) => {
                warn!("pointer capture unavailable, dragging without it: {:?}", err);
                None
            }
        }
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        let _ = self.element.release_pointer_capture(self.pointer_id);
    }
}

/// Live subscription to a media query's `change` event. The listener is
/// removed when the guard drops.
struct MediaWatch {
    _listener: EventListener,
}

impl MediaWatch {
    /// Reports the current match immediately, then on every change. Returns
    /// `None` when the environment has no `matchMedia`.
    fn new(query: &str, mut on_change: impl FnMut(bool) + 'static) -> Option<Self> {
        let list = web_sys::window()?.match_media(query).ok().flatten()?;
        on_change(list.matches());

        let target = list.clone();
        let listener = EventListener::new(&target, "change", move |_| {
            on_change(list.matches());
        });

        Some(Self {
            _listener: listener,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: Vec<MarqueeItem>,
    pub sizes: Vec<SizeHint>,
    #[prop_or(config::MARQUEE_SPEED)]
    pub speed: f64,
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let container = use_node_ref();
    let speed = props.speed;
    let state = use_mut_ref(move || MarqueeState::new(speed));
    let capture = use_mut_ref(|| None::<PointerCapture>);
    let dragging = use_state(|| false);
    let strip = use_memo(|items| doubled(items), props.items.clone());

    // Hover capability, tracked live
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let watch = MediaWatch::new(config::HOVER_MEDIA_QUERY, move |supports| {
                    debug!("hover capability: {supports}");
                    state.borrow_mut().set_supports_hover(supports);
                });
                if watch.is_none() {
                    warn!("matchMedia unavailable, assuming a hover-capable pointer");
                }
                move || drop(watch)
            },
            (),
        );
    }

    // Auto-scroll loop
    {
        let container = container.clone();
        let state = state.clone();
        let capture = capture.clone();
        use_effect_with_deps(
            move |_| {
                let frame_loop = FrameLoop::start(move || {
                    let Some(el) = container.cast::<Element>() else {
                        return;
                    };
                    let next = state
                        .borrow_mut()
                        .tick(el.scroll_left() as f64, el.scroll_width() as f64);
                    if let Some(offset) = next {
                        el.set_scroll_left(offset.round() as i32);
                    }
                });
                move || {
                    drop(frame_loop);
                    // unmounting mid-drag must not leave the pointer captured
                    capture.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_mouse_enter = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.borrow_mut().set_hovered(true))
    };

    let on_mouse_leave = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.borrow_mut().set_hovered(false))
    };

    let on_pointer_down = {
        let container = container.clone();
        let state = state.clone();
        let capture = capture.clone();
        let dragging = dragging.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(el) = container.cast::<Element>() else {
                return;
            };
            debug!("marquee drag started by pointer {}", e.pointer_id());
            state
                .borrow_mut()
                .begin_drag(e.client_x() as f64, e.pointer_id(), el.scroll_left() as f64);
            *capture.borrow_mut() = PointerCapture::acquire(&el, e.pointer_id());
            dragging.set(true);
        })
    };

    let on_pointer_move = {
        let container = container.clone();
        let state = state.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(offset) = state.borrow_mut().drag_to(e.client_x() as f64) else {
                return;
            };
            if let Some(el) = container.cast::<Element>() {
                el.set_scroll_left(offset.round() as i32);
                state.borrow_mut().sync(el.scroll_left() as f64);
            }
        })
    };

    let end_drag = {
        let container = container.clone();
        let state = state.clone();
        let capture = capture.clone();
        let dragging = dragging.clone();
        Callback::from(move |_: PointerEvent| {
            let observed = match container.cast::<Element>() {
                Some(el) => el.scroll_left() as f64,
                None => state.borrow().offset(),
            };
            let released = state.borrow_mut().end_drag(observed);
            if let Some(pointer_id) = released {
                debug!(
                    "marquee drag ended for pointer {pointer_id} at offset {:.1}",
                    state.borrow().offset()
                );
                capture.borrow_mut().take();
                dragging.set(false);
            }
        })
    };

    html! {
        <div class="marquee" onmouseenter={on_mouse_enter} onmouseleave={on_mouse_leave}>
            <div
                ref={container}
                class={classes!("marquee-track", (*dragging).then(|| "dragging"))}
                onpointerdown={on_pointer_down}
                onpointermove={on_pointer_move}
                onpointerup={end_drag.clone()}
                onpointercancel={end_drag.clone()}
                onpointerleave={end_drag}
            >
                { for strip.iter().enumerate().map(|(index, item)| html! {
                    <div class="marquee-card" key={format!("{}-{}", item.src, index)}>
                        <ResponsiveImage
                            src={item.src.clone()}
                            alt={item.alt.clone()}
                            sizes={props.sizes.clone()}
                            eager={index < config::EAGER_IMAGE_COUNT}
                            draggable={false}
                            class="marquee-image"
                        />
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .marquee {
                    overflow: hidden;
                    border-radius: 1rem;
                }
                .marquee-track {
                    display: flex;
                    gap: 1rem;
                    overflow-x: scroll;
                    scrollbar-width: none;
                    cursor: grab;
                    touch-action: pan-y;
                    user-select: none;
                }
                .marquee-track::-webkit-scrollbar {
                    display: none;
                }
                .marquee-track.dragging {
                    cursor: grabbing;
                }
                .marquee-card {
                    position: relative;
                    flex-shrink: 0;
                    width: 16rem;
                    height: 12rem;
                    overflow: hidden;
                    border-radius: 0.5rem;
                    background: #f5f5f5;
                }
                .marquee-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                @media (min-width: 640px) {
                    .marquee-card { width: 18rem; height: 14rem; }
                }
                @media (min-width: 768px) {
                    .marquee-card { width: 20rem; height: 16rem; border-radius: 0.75rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubled_strip_repeats_items_in_order() {
        let items = vec!["a", "b", "c"];
        let strip = doubled(&items);
        assert_eq!(strip.len(), 6);
        for i in 0..items.len() {
            assert_eq!(strip[i], strip[i + items.len()]);
            assert_eq!(strip[i], items[i]);
        }
        assert!(doubled::<u8>(&[]).is_empty());
    }

    #[test]
    fn auto_scroll_advances_then_wraps_to_zero() {
        let mut state = MarqueeState::new(0.5);
        let scroll_width = 4.0;
        let mut offsets = Vec::new();
        for _ in 0..6 {
            let observed = state.offset();
            offsets.push(state.tick(observed, scroll_width).unwrap());
        }
        // 0.5, 1.0, 1.5 then 2.0 reaches half the width
        assert_eq!(offsets, vec![0.5, 1.0, 1.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn zero_width_never_wraps() {
        let mut state = MarqueeState::new(1.0);
        for _ in 0..3 {
            state.tick(state.offset(), 0.0);
        }
        assert_eq!(state.offset(), 3.0);
        state.tick(state.offset(), -10.0);
        assert_eq!(state.offset(), 4.0);
    }

    #[test]
    fn hover_pauses_only_on_hover_capable_devices() {
        let mut state = MarqueeState::new(0.6);
        state.set_hovered(true);
        assert!(state.is_paused());
        assert_eq!(state.tick(5.0, 100.0), None);
        assert_eq!(state.offset(), 5.0);

        state.set_supports_hover(false);
        assert!(!state.is_paused());
        assert!(state.tick(5.0, 100.0).is_some());

        state.begin_drag(10.0, 1, 5.0);
        assert!(state.is_paused());
    }

    #[test]
    fn drag_moves_against_pointer_delta() {
        let mut state = MarqueeState::new(0.6);
        assert_eq!(state.drag_to(50.0), None);

        state.begin_drag(100.0, 7, 40.0);
        assert!(state.is_paused());
        assert_eq!(state.drag_to(130.0), Some(10.0));
        assert_eq!(state.drag_to(80.0), Some(60.0));
        assert_eq!(state.tick(60.0, 400.0), None);
    }

    #[test]
    fn ending_a_drag_releases_pointer_once() {
        let mut state = MarqueeState::new(0.6);
        state.begin_drag(0.0, 3, 0.0);
        assert!(state.is_paused());
        assert_eq!(state.end_drag(0.0), Some(3));
        assert!(!state.is_paused());
        assert_eq!(state.end_drag(0.0), None);
        assert_eq!(state.end_drag(0.0), None);
    }

    #[test]
    fn auto_scroll_resumes_from_clamped_offset_after_drag() {
        let mut state = MarqueeState::new(0.5);

        // dragging right past the start: the container clamps to zero
        state.begin_drag(100.0, 1, 0.0);
        assert_eq!(state.drag_to(400.0), Some(-300.0));
        state.sync(0.0);
        assert_eq!(state.end_drag(0.0), Some(1));
        assert_eq!(state.tick(0.0, 4000.0), Some(0.5));

        // dragging left past the end: the container clamps to its maximum
        state.begin_drag(500.0, 2, 100.0);
        assert_eq!(state.drag_to(0.0), Some(600.0));
        assert_eq!(state.end_drag(300.0), Some(2));
        assert_eq!(state.offset(), 300.0);
        assert_eq!(state.tick(300.0, 4000.0), Some(300.5));
    }

    #[test]
    fn stray_release_keeps_running_offset() {
        let mut state = MarqueeState::new(0.5);
        state.tick(0.0, 100.0);
        assert_eq!(state.end_drag(42.0), None);
        assert_eq!(state.offset(), 0.5);
    }
}
