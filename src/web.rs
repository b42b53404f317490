use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent, Node,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::config::{RevealOptions, NAVBAR_ID, PALETTE_ID, REVEAL_SELECTOR};
use crate::environment::{
    AnchorHandler, Environment, KeyHandler, PointerHandler, PointerInput, ScrollHandler,
    Subscription, VisibilityHandler,
};
use crate::shortcuts::KeyInput;

const REVEALED_CLASS: &str = "animate-in";
const ELEVATED_CLASS: &str = "elevated";

/// [`Environment`] backed by the browser window and document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WebEnvironment;

fn document() -> Option<Document> {
    window()?.document()
}

fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

fn listen<E>(
    target: EventTarget,
    event_type: &'static str,
    mut handler: impl FnMut(E) + 'static,
) -> Subscription
where
    E: JsCast + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });

    if let Err(error) =
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
    {
        tracing::warn!(event_type, ?error, "could not register listener");
        return Subscription::inert();
    }

    Subscription::new(move || {
        let _ = target
            .remove_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref());
    })
}

fn listen_on_window<E>(event_type: &'static str, handler: impl FnMut(E) + 'static) -> Subscription
where
    E: JsCast + 'static,
{
    match window() {
        Some(win) => listen(win.into(), event_type, handler),
        None => Subscription::inert(),
    }
}

fn is_inside_palette(target: Option<EventTarget>) -> bool {
    let Some(palette) = element_by_id(PALETTE_ID) else {
        return false;
    };

    target
        .and_then(|target| target.dyn_into::<Node>().ok())
        .map(|node| palette.contains(Some(&node)))
        .unwrap_or(false)
}

fn anchor_target(event: &MouseEvent) -> Option<String> {
    let anchor = event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest("a[href^='#']")
        .ok()
        .flatten()?;
    let href = anchor.get_attribute("href")?;

    href.strip_prefix('#')
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
}

impl Environment for WebEnvironment {
    type Region = Element;

    fn register_key_listener(&self, mut handler: KeyHandler) -> Subscription {
        listen_on_window("keydown", move |event: KeyboardEvent| {
            let input = KeyInput {
                key: event.key(),
                ctrl: event.ctrl_key(),
                meta: event.meta_key(),
            };

            if handler(&input) {
                event.prevent_default();
            }
        })
    }

    fn register_pointer_listener(&self, mut handler: PointerHandler) -> Subscription {
        listen_on_window("mousedown", move |event: MouseEvent| {
            handler(PointerInput {
                inside_palette: is_inside_palette(event.target()),
            });
        })
    }

    fn register_scroll_listener(&self, mut handler: ScrollHandler) -> Subscription {
        let environment = *self;
        listen_on_window("scroll", move |_event: Event| {
            handler(environment.scroll_offset());
        })
    }

    fn register_visibility_listener(
        &self,
        options: RevealOptions,
        mut handler: VisibilityHandler<Element>,
    ) -> Subscription {
        let Some(document) = document() else {
            return Subscription::inert();
        };

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    handler(&entry.target(), entry.is_intersecting());
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(error) => {
                    tracing::warn!(?error, "intersection observer unavailable");
                    return Subscription::inert();
                }
            };

        let mut observed = 0;
        if let Ok(regions) = document.query_selector_all(REVEAL_SELECTOR) {
            for index in 0..regions.length() {
                if let Some(element) = regions
                    .item(index)
                    .and_then(|node| node.dyn_into::<Element>().ok())
                {
                    observer.observe(&element);
                    observed += 1;
                }
            }
        }
        tracing::debug!(observed, "reveal regions observed");

        Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        })
    }

    fn register_anchor_listener(&self, mut handler: AnchorHandler) -> Subscription {
        let Some(document) = document() else {
            return Subscription::inert();
        };

        listen(document.into(), "click", move |event: MouseEvent| {
            if let Some(target_id) = anchor_target(&event) {
                event.prevent_default();
                handler(&target_id);
            }
        })
    }

    fn scroll_to_region(&self, region_id: &str) {
        let Some(region) = element_by_id(region_id) else {
            tracing::warn!(region_id, "scroll target not found");
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        region.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn focus_element(&self, element_id: &str) {
        if let Some(element) = element_by_id(element_id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        {
            let _ = element.focus();
        }
    }

    fn scroll_offset(&self) -> f64 {
        window()
            .and_then(|win| win.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn set_nav_elevated(&self, elevated: bool) {
        if let Some(navbar) = element_by_id(NAVBAR_ID) {
            let _ = navbar
                .class_list()
                .toggle_with_force(ELEVATED_CLASS, elevated);
        }
    }

    fn reveal(&self, region: &Element) {
        let _ = region.class_list().add_1(REVEALED_CLASS);
    }

    fn notify(&self, message: &str) {
        if let Some(win) = window() {
            let _ = win.alert_with_message(message);
        }
    }
}
