use std::rc::Rc;

use crate::command::{interpret, PaletteEffect, RESUME_NOTICE};
use crate::config::{ListenerConfig, PROJECTS_REGION_ID, SEARCH_FIELD_ID};
use crate::environment::{Environment, PointerInput, Subscription};
use crate::shortcuts::{shortcut_for, KeyInput, Shortcut};
use crate::state::ViewAction;

/// Where listeners send their state changes.
pub type ActionSink = Rc<dyn Fn(ViewAction)>;

/// Owns the page-level listeners for as long as the page is mounted.
///
/// Listeners never talk to each other; they only dispatch [`ViewAction`]s or
/// call back into the environment. Dropping the controller, or calling
/// [`Controller::unmount`], removes every listener it registered.
pub struct Controller {
    subscriptions: Vec<Subscription>,
}

impl Controller {
    pub fn mount<E>(env: Rc<E>, sink: ActionSink, config: ListenerConfig) -> Self
    where
        E: Environment + 'static,
    {
        let subscriptions = vec![
            register_shortcuts(&env, sink.clone()),
            register_outside_click(&env, sink.clone()),
            register_scroll_tracking(&env, config),
            register_reveal(&env, config),
            register_anchor_scroll(&env, sink.clone()),
        ];

        sink(ViewAction::MarkLoaded);
        tracing::debug!(listeners = subscriptions.len(), "page listeners mounted");

        Self { subscriptions }
    }

    pub fn unmount(self) {
        let count = self.subscriptions.len();
        for subscription in self.subscriptions {
            subscription.dispose();
        }
        tracing::debug!(listeners = count, "page listeners removed");
    }
}

fn register_shortcuts<E>(env: &Rc<E>, sink: ActionSink) -> Subscription
where
    E: Environment + 'static,
{
    let handle = Rc::clone(env);

    env.register_key_listener(Box::new(move |input: &KeyInput| {
        let Some(shortcut) = shortcut_for(input) else {
            return false;
        };

        match shortcut {
            Shortcut::TogglePalette => sink(ViewAction::TogglePalette),
            Shortcut::ToggleTheme => sink(ViewAction::ToggleTheme),
            Shortcut::FocusSearch => handle.focus_element(SEARCH_FIELD_ID),
            Shortcut::DismissOverlays => sink(ViewAction::DismissOverlays),
        }

        shortcut.prevents_default()
    }))
}

fn register_outside_click<E>(env: &Rc<E>, sink: ActionSink) -> Subscription
where
    E: Environment + 'static,
{
    // Closing an already closed palette is a no-op, so the open flag need not be read here.
    env.register_pointer_listener(Box::new(move |pointer: PointerInput| {
        if !pointer.inside_palette {
            sink(ViewAction::ClosePalette);
        }
    }))
}

fn register_scroll_tracking<E>(env: &Rc<E>, config: ListenerConfig) -> Subscription
where
    E: Environment + 'static,
{
    env.set_nav_elevated(config.nav_elevated(env.scroll_offset()));

    let handle = Rc::clone(env);
    env.register_scroll_listener(Box::new(move |offset| {
        handle.set_nav_elevated(config.nav_elevated(offset));
    }))
}

fn register_reveal<E>(env: &Rc<E>, config: ListenerConfig) -> Subscription
where
    E: Environment + 'static,
{
    let handle = Rc::clone(env);

    env.register_visibility_listener(
        config.reveal,
        Box::new(move |region: &E::Region, intersecting: bool| {
            if intersecting {
                handle.reveal(region);
            }
        }),
    )
}

fn register_anchor_scroll<E>(env: &Rc<E>, sink: ActionSink) -> Subscription
where
    E: Environment + 'static,
{
    let handle = Rc::clone(env);

    env.register_anchor_listener(Box::new(move |target_id: &str| {
        handle.scroll_to_region(target_id);
        sink(ViewAction::CloseMobileMenu);
    }))
}

/// Key-down inside the palette input. `Enter` runs the typed command,
/// `Escape` just closes.
pub fn handle_palette_key<E: Environment>(env: &E, sink: &ActionSink, key: &str, text: &str) {
    match key {
        "Enter" => {
            let effects = interpret(text);
            tracing::debug!(command = text, effects = effects.len(), "palette command");

            for effect in effects {
                match effect {
                    PaletteEffect::ScrollToProjects => env.scroll_to_region(PROJECTS_REGION_ID),
                    PaletteEffect::ToggleTheme => sink(ViewAction::ToggleTheme),
                    PaletteEffect::ResumeNotice => env.notify(RESUME_NOTICE),
                }
            }

            sink(ViewAction::ClosePalette);
        }
        "Escape" => sink(ViewAction::ClosePalette),
        _ => {}
    }
}
