//! Scroll-triggered reveal: an IntersectionObserver wrapper plus hooks that
//! flip a write-once "has been seen" flag per element.

use std::collections::BTreeSet;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Indices that have entered the viewport at least once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    seen: BTreeSet<usize>,
}

pub enum RevealAction {
    Enter(usize),
}

impl RevealSet {
    pub fn is_visible(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl Reducible for RevealSet {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Enter(index) => {
                if self.seen.contains(&index) {
                    return self;
                }
                let mut next = (*self).clone();
                next.seen.insert(index);
                Rc::new(next)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

impl ObserveOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self { threshold, root_margin: None }
    }

    pub fn with_root_margin(mut self, margin: &'static str) -> Self {
        self.root_margin = Some(margin);
        self
    }
}

/// Live observer. Dropping it disconnects the observer and frees the callback.
pub struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_enter` with the target each time one of `targets` starts intersecting.
pub fn observe<F>(targets: &[Element], options: ObserveOptions, on_enter: F) -> Result<Observation, JsValue>
where
    F: Fn(&Element) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        on_enter(&entry.target());
                    }
                }
            }
        },
    );

    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = options.root_margin {
        init.root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(target);
    }
    Ok(Observation { observer, _callback: callback })
}

/// Reveal flag for a single element. Attach the returned ref to the element.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_reducer_eq(RevealSet::default);

    {
        let node = node.clone();
        let dispatcher = revealed.dispatcher();
        use_effect_with_deps(
            move |_| {
                let on_enter = dispatcher.clone();
                let observation = node.cast::<Element>().and_then(|element| {
                    observe(&[element], ObserveOptions::threshold(threshold), move |_| {
                        on_enter.dispatch(RevealAction::Enter(0));
                    })
                    .map_err(|e| warn!("Scroll reveal unavailable: {:?}", e))
                    .ok()
                });
                if observation.is_none() {
                    debug!("Reveal target not observable, showing immediately");
                    dispatcher.dispatch(RevealAction::Enter(0));
                }
                move || drop(observation)
            },
            (),
        );
    }

    (node, revealed.is_visible(0))
}

/// Reveal flags for `count` items. Each element must carry a `data-index`
/// attribute matching its position.
#[hook]
pub fn use_reveal_list(count: usize, threshold: f64) -> (Rc<Vec<NodeRef>>, UseReducerHandle<RevealSet>) {
    let nodes = use_memo(|count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(), count);
    let revealed = use_reducer_eq(RevealSet::default);

    {
        let nodes = nodes.clone();
        let dispatcher = revealed.dispatcher();
        use_effect_with_deps(
            move |_| {
                let elements: Vec<Option<Element>> = nodes.iter().map(|n| n.cast::<Element>()).collect();
                let targets: Vec<Element> = elements.iter().flatten().cloned().collect();
                let on_enter = dispatcher.clone();
                let observation = observe(&targets, ObserveOptions::threshold(threshold), move |target| {
                    if let Some(index) = data_index(target) {
                        on_enter.dispatch(RevealAction::Enter(index));
                    }
                })
                .map_err(|e| warn!("Scroll reveal unavailable: {:?}", e))
                .ok();

                let attached: Vec<bool> = elements.iter().map(Option::is_some).collect();
                let fallback = shown_without_observer(&attached, observation.is_some());
                if !fallback.is_empty() {
                    debug!("Showing {} reveal items immediately", fallback.len());
                }
                for index in fallback {
                    dispatcher.dispatch(RevealAction::Enter(index));
                }
                move || drop(observation)
            },
            count,
        );
    }

    (nodes, revealed)
}

/// Items shown without waiting for an intersection: all of them when no
/// observer exists, otherwise those with no element to watch.
fn shown_without_observer(attached: &[bool], observing: bool) -> Vec<usize> {
    attached
        .iter()
        .enumerate()
        .filter(|(_, attached)| !observing || !**attached)
        .map(|(index, _)| index)
        .collect()
}

fn data_index(element: &Element) -> Option<usize> {
    element.get_attribute("data-index")?.parse().ok()
}

/// Class pair toggled by every revealed block.
pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal is-visible"
    } else {
        "reveal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(state: Rc<RevealSet>, index: usize) -> Rc<RevealSet> {
        state.reduce(RevealAction::Enter(index))
    }

    #[test]
    fn reveal_is_write_once() {
        let state = enter(Rc::new(RevealSet::default()), 2);
        assert!(state.is_visible(2));
        assert!(!state.is_visible(0));

        let state = enter(state, 0);
        let state = enter(state, 2);
        assert!(state.is_visible(0));
        assert!(state.is_visible(2));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn repeated_enter_returns_same_state() {
        let first = enter(Rc::new(RevealSet::default()), 1);
        let again = enter(first.clone(), 1);
        assert!(Rc::ptr_eq(&first, &again));
    }

    #[test]
    fn visible_flags_stay_set_across_many_events() {
        let mut state = Rc::new(RevealSet::default());
        let mut ever_seen = BTreeSet::new();
        for index in [3, 1, 3, 0, 1, 2, 0, 3] {
            state = enter(state, index);
            ever_seen.insert(index);
            assert!(ever_seen.iter().all(|i| state.is_visible(*i)));
        }
    }

    #[test]
    fn class_follows_flag() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal is-visible");
    }

    #[test]
    fn missing_observer_shows_every_item() {
        assert_eq!(shown_without_observer(&[true, true, true, true], false), vec![0, 1, 2, 3]);
    }

    #[test]
    fn unattached_items_shown_while_others_wait() {
        assert_eq!(shown_without_observer(&[true, false, true, false], true), vec![1, 3]);
        assert!(shown_without_observer(&[true, true], true).is_empty());
    }

    #[test]
    fn fallback_entries_mark_items_visible() {
        let state = shown_without_observer(&[true; 4], false)
            .into_iter()
            .fold(Rc::new(RevealSet::default()), enter);
        assert!((0..4).all(|i| state.is_visible(i)));
    }
}
