//! One-shot reveal of page sections as they scroll into view.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Registered elements and whether each has been revealed.
///
/// Registration is deduplicated and revealing is monotonic: nothing here can
/// turn a revealed entry back off.
#[derive(Debug)]
pub struct RevealSet<K> {
    entries: Vec<(K, bool)>,
}

impl<K: PartialEq> RevealSet<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns `false` if the key was already registered.
    pub fn register(&mut self, key: K) -> bool {
        if self.entries.iter().any(|(existing, _)| *existing == key) {
            return false;
        }
        self.entries.push((key, false));
        true
    }

    /// Returns `true` only the first time a registered key is revealed.
    pub fn mark(&mut self, key: &K) -> bool {
        match self.entries.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, revealed)) if !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: PartialEq> Default for RevealSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an observer entry counts as the section entering view.
///
/// The observer's threshold only decides when entries are delivered. A
/// section taller than the viewport may never reach that ratio, so any
/// intersecting entry reveals. The ratio check covers engines that report
/// `isIntersecting` as false.
pub fn entered_view(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting || ratio >= threshold
}

fn show(element: &Element) {
    if let Err(err) = element.class_list().add_1(config::REVEAL_VISIBLE_CLASS) {
        warn!("failed to mark section visible: {:?}", err);
    }
}

fn reveal(set: &RefCell<RevealSet<Element>>, element: &Element) -> bool {
    if !set.borrow_mut().mark(element) {
        return false;
    }
    show(element);
    true
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn new(threshold: f64, set: Rc<RefCell<RevealSet<Element>>>) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entered_view(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                    continue;
                }
                let target = entry.target();
                if reveal(&set, &target) {
                    debug!("revealed section {}", target.id());
                }
                observer.unobserve(&target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches registered sections with a single IntersectionObserver.
///
/// Without IntersectionObserver every section is revealed as soon as it
/// registers, so content is never left hidden.
pub struct RevealController {
    set: Rc<RefCell<RevealSet<Element>>>,
    observer: RefCell<Option<RevealObserver>>,
}

impl RevealController {
    pub fn new(threshold: f64) -> Self {
        let set = Rc::new(RefCell::new(RevealSet::new()));
        let observer = match RevealObserver::new(threshold, set.clone()) {
            Ok(observer) => Some(observer),
            Err(err) => {
                warn!("IntersectionObserver unavailable, revealing everything: {:?}", err);
                None
            }
        };
        Self {
            set,
            observer: RefCell::new(observer),
        }
    }

    pub fn register(&self, element: Element) {
        if !self.set.borrow_mut().register(element.clone()) {
            return;
        }
        debug!("watching section {} ({} registered)", element.id(), self.set.borrow().len());
        match self.observer.borrow().as_ref() {
            Some(watch) => watch.observer.observe(&element),
            None => {
                reveal(&self.set, &element);
            }
        }
    }

    /// Stops observing. Sections already revealed stay revealed.
    pub fn disconnect(&self) {
        self.observer.borrow_mut().take();
    }
}

/// Shared handle passed down to sections through context.
#[derive(Clone)]
pub struct RevealContext(pub Rc<RevealController>);

impl PartialEq for RevealContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    #[prop_or("section")]
    pub tag: &'static str,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A page section that fades in the first time it scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let context = use_context::<RevealContext>();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = node.cast::<Element>() {
                    match context {
                        Some(RevealContext(controller)) => controller.register(element),
                        None => show(&element),
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <@{props.tag} ref={node} id={props.id.clone()} class={classes!("reveal-base", props.class.clone())}>
            { for props.children.iter() }
        </@>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registering_twice_is_a_no_op() {
        let mut set = RevealSet::new();
        assert!(set.register(1));
        assert!(!set.register(1));
        assert!(set.register(2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn reveal_is_monotonic_and_idempotent() {
        let mut set = RevealSet::new();
        set.register("hero");
        set.register("work");

        assert!(set.mark(&"hero"));
        assert!(!set.mark(&"hero"));

        // re-registering a revealed key keeps it revealed
        assert!(!set.register("hero"));
        assert!(!set.mark(&"hero"));
        assert!(set.mark(&"work"));
    }

    #[test]
    fn unregistered_keys_are_ignored() {
        let mut set = RevealSet::new();
        set.register(1);
        assert!(!set.mark(&9));
        assert!(set.mark(&1));
    }

    #[test]
    fn any_intersection_enters_view() {
        assert!(entered_view(true, 0.2, 0.2));
        assert!(entered_view(true, 0.75, 0.2));
        // a 3900px section in a 375px viewport never gets past ~0.096
        assert!(entered_view(true, 0.096, 0.2));
        assert!(entered_view(false, 0.5, 0.2));
        assert!(!entered_view(false, 0.0, 0.2));
        assert!(!entered_view(false, 0.1, 0.2));
    }
}
