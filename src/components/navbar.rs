use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

use crate::config;
use crate::content::{Brand, Link};

/// Navbar state: `{scrolled, not scrolled} x {menu open, menu closed}`.
///
/// Desktop hover and explicit clicks write the same open flag. A click is
/// authoritative: once a click closes the menu, hovering cannot reopen it
/// until the pointer has left the trigger. The mobile burger has no hover
/// to fight with, so it toggles without suppressing anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
    hover_suppressed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    PointerEnter,
    PointerLeave,
    ToggleMenu,
    ToggleMobileMenu,
    CloseMenu,
}

impl NavState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled(offset) => Self {
                scrolled: offset > config::SCROLL_THRESHOLD_PX,
                ..self
            },
            NavAction::PointerEnter if self.hover_suppressed => self,
            NavAction::PointerEnter => Self {
                menu_open: true,
                ..self
            },
            NavAction::PointerLeave => Self {
                menu_open: false,
                hover_suppressed: false,
                ..self
            },
            NavAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                hover_suppressed: self.menu_open,
                ..self
            },
            NavAction::ToggleMobileMenu => Self {
                menu_open: !self.menu_open,
                hover_suppressed: false,
                ..self
            },
            NavAction::CloseMenu => Self {
                menu_open: false,
                ..self
            },
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub brand: Brand,
    pub services: Vec<Link>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let state = use_reducer_eq(NavState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        dispatcher.dispatch(NavAction::Scrolled(offset));
                    }
                }) as Box<dyn Fn()>);

                if let Some(window) = &window {
                    let options = AddEventListenerOptions::new();
                    options.set_passive(true);
                    if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        warn!("failed to watch page scroll: {:?}", err);
                    }
                    // Initial check
                    let _ = scroll_callback
                        .as_ref()
                        .unchecked_ref::<web_sys::js_sys::Function>()
                        .call0(&wasm_bindgen::JsValue::NULL);
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let dispatch = |action: NavAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };

    let on_enter = dispatch(NavAction::PointerEnter);
    let on_leave = dispatch(NavAction::PointerLeave);
    let toggle_menu = dispatch(NavAction::ToggleMenu);
    let toggle_mobile_menu = dispatch(NavAction::ToggleMobileMenu);
    let close_menu = dispatch(NavAction::CloseMenu);

    let open = state.menu_open();
    let last = props.services.len().saturating_sub(1);

    html! {
        <nav class={classes!("navbar", state.scrolled().then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="/" class="nav-logo">
                    <div class="nav-mark">{&props.brand.mark}</div>
                    <span class="nav-name">{&props.brand.name}</span>
                </a>

                <div class="nav-links">
                    <a href="#" class="nav-link">{"Home"}</a>
                    <div class="nav-dropdown" onmouseenter={on_enter} onmouseleave={on_leave}>
                        <button class="nav-link nav-dropdown-trigger" onclick={toggle_menu.clone()}>
                            {"Services"}
                            <svg
                                class={classes!("nav-chevron", open.then(|| "open"))}
                                fill="none"
                                stroke="currentColor"
                                viewBox="0 0 24 24"
                            >
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                            </svg>
                        </button>
                        if open {
                            <div class="nav-dropdown-menu">
                                { for props.services.iter().enumerate().map(|(index, service)| html! {
                                    <a
                                        key={service.label.clone()}
                                        href={service.href.clone()}
                                        class={classes!("nav-dropdown-item", (index != last).then(|| "divided"))}
                                    >
                                        {&service.label}
                                    </a>
                                }) }
                            </div>
                        }
                    </div>
                    <a href="#contact" class="nav-link">{"Contact"}</a>
                </div>

                <a href="#contact" class="nav-cta">{"Get In Touch"}</a>

                <button class="nav-burger" onclick={toggle_mobile_menu}>
                    <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d={if open { "M6 18L18 6M6 6l12 12" } else { "M4 6h16M4 12h16M4 18h16" }}
                        />
                    </svg>
                </button>
            </div>

            if open {
                <div class="nav-mobile-panel">
                    <a href="#" class="nav-link" onclick={close_menu.clone()}>{"Home"}</a>
                    <div class="nav-mobile-services">
                        <span class="nav-mobile-heading">{"Services"}</span>
                        { for props.services.iter().map(|service| html! {
                            <a
                                key={service.label.clone()}
                                href={service.href.clone()}
                                class="nav-mobile-service"
                                onclick={close_menu.clone()}
                            >
                                {&service.label}
                            </a>
                        }) }
                    </div>
                    <a href="#contact" class="nav-link" onclick={close_menu.clone()}>{"Contact"}</a>
                    <a href="#contact" class="nav-cta mobile" onclick={close_menu}>{"Get In Touch"}</a>
                </div>
            }

            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 92%;
                    z-index: 50;
                    border: 1px solid #e5e7eb;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(4px);
                    transition: all 0.3s;
                }
                .navbar.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 1rem;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    color: inherit;
                    text-decoration: none;
                }
                .nav-mark {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.5rem;
                    background: #000;
                    color: #fff;
                    font-size: 0.875rem;
                }
                .nav-links {
                    display: none;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: inherit;
                    text-decoration: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .nav-dropdown {
                    position: relative;
                }
                .nav-dropdown-trigger {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                }
                .nav-chevron {
                    width: 1rem;
                    height: 1rem;
                    transition: transform 0.2s;
                }
                .nav-chevron.open {
                    transform: rotate(180deg);
                }
                .nav-dropdown-menu {
                    position: absolute;
                    top: 100%;
                    left: 50%;
                    transform: translateX(-50%);
                    margin-top: 0.75rem;
                    width: 16rem;
                    padding: 0.5rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 1rem;
                    background: #fff;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    animation: fadeIn 0.2s ease-out;
                }
                .nav-dropdown-item {
                    display: block;
                    padding: 0.75rem 1rem;
                    border-radius: 0.75rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: inherit;
                    text-decoration: none;
                }
                .nav-dropdown-item.divided {
                    border-bottom: 1px solid #f3f4f6;
                }
                .nav-dropdown-item:hover {
                    background: #f3f4f6;
                }
                .nav-cta {
                    display: none;
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    background: #000;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                }
                .nav-burger {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.25rem;
                    height: 2.25rem;
                    border: none;
                    border-radius: 9999px;
                    background: none;
                }
                .nav-burger svg {
                    width: 1.5rem;
                    height: 1.5rem;
                }
                .nav-mobile-panel {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 1rem 1.25rem;
                    border-top: 1px solid #e5e7eb;
                }
                .nav-mobile-services {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .nav-mobile-heading {
                    font-size: 0.75rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #6b7280;
                }
                .nav-mobile-service {
                    padding-left: 0.75rem;
                    font-size: 0.875rem;
                    color: #374151;
                    text-decoration: none;
                }
                .nav-cta.mobile {
                    display: block;
                    text-align: center;
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @media (min-width: 768px) {
                    .navbar { top: 1.5rem; width: 88%; }
                    .nav-content { padding: 1rem 1.5rem; }
                    .nav-links { display: flex; }
                    .nav-burger, .nav-mobile-panel { display: none; }
                }
                @media (min-width: 1024px) {
                    .navbar { width: 85%; }
                    .nav-cta { display: block; }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flag_follows_threshold() {
        let mut state = NavState::default();
        let observed: Vec<bool> = [0.0, 15.0, 25.0, 18.0, 5.0]
            .into_iter()
            .map(|offset| {
                state = state.apply(NavAction::Scrolled(offset));
                state.scrolled()
            })
            .collect();
        assert_eq!(observed, vec![false, false, true, false, false]);
        assert!(!state.apply(NavAction::Scrolled(20.0)).scrolled());
    }

    #[test]
    fn hover_opens_and_leave_closes() {
        let state = NavState::default().apply(NavAction::PointerEnter);
        assert!(state.menu_open());
        assert!(!state.apply(NavAction::PointerLeave).menu_open());
    }

    #[test]
    fn click_opens_a_closed_menu_regardless_of_hover() {
        let state = NavState::default().apply(NavAction::ToggleMenu);
        assert!(state.menu_open());

        let hovered_then_left = NavState::default()
            .apply(NavAction::PointerEnter)
            .apply(NavAction::PointerLeave)
            .apply(NavAction::ToggleMenu);
        assert!(hovered_then_left.menu_open());
    }

    #[test]
    fn click_close_wins_over_hover_until_pointer_leaves() {
        let state = NavState::default()
            .apply(NavAction::PointerEnter)
            .apply(NavAction::ToggleMenu);
        assert!(!state.menu_open());
        assert!(!state.apply(NavAction::PointerEnter).menu_open());

        let state = state.apply(NavAction::PointerLeave).apply(NavAction::PointerEnter);
        assert!(state.menu_open());
    }

    #[test]
    fn link_tap_closes_mobile_menu() {
        let state = NavState::default()
            .apply(NavAction::ToggleMobileMenu)
            .apply(NavAction::CloseMenu);
        assert!(!state.menu_open());
        assert!(!state.apply(NavAction::CloseMenu).menu_open());
    }

    #[test]
    fn burger_close_leaves_desktop_hover_working() {
        let state = NavState::default()
            .apply(NavAction::ToggleMobileMenu)
            .apply(NavAction::ToggleMobileMenu);
        assert!(!state.menu_open());
        assert!(state.apply(NavAction::PointerEnter).menu_open());

        // the burger also lifts a suppression left by the desktop trigger
        let state = NavState::default()
            .apply(NavAction::PointerEnter)
            .apply(NavAction::ToggleMenu)
            .apply(NavAction::ToggleMobileMenu)
            .apply(NavAction::ToggleMobileMenu);
        assert!(state.apply(NavAction::PointerEnter).menu_open());
    }

    #[test]
    fn menu_and_scroll_are_independent() {
        let state = NavState::default()
            .apply(NavAction::ToggleMenu)
            .apply(NavAction::Scrolled(400.0));
        assert!(state.menu_open());
        assert!(state.scrolled());
    }
}
