// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM listener wiring for a [`GestureSession`].

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use js_sys::{Function, Object, Reflect};
use kurbo::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, EventTarget, HtmlCanvasElement,
    HtmlTextAreaElement, KeyboardEvent, WheelEvent, Window,
};

use understory_wheel_gesture::camera::CanvasCamera;
use understory_wheel_gesture::handler::WheelGestureHandler;
use understory_wheel_gesture::input::{KeyInput, WheelInput, WheelTarget, suppresses_swipe_navigation};
use understory_wheel_gesture::panning::PointerWatch;
use understory_wheel_gesture::session::{GestureMessage, GestureSession, Response};

use crate::convert::{WheelFields, key_input, wheel_input};

struct State<C, F> {
    session: GestureSession,
    camera: C,
    fallback: F,
}

/// Everything the callbacks share.
struct Host<C, F> {
    state: RefCell<State<C, F>>,
    document: Document,
    canvas: JsValue,
    pointer_watch: RefCell<Option<Function>>,
}

impl<C, F> Host<C, F>
where
    C: CanvasCamera,
    F: WheelGestureHandler<C>,
{
    fn deliver(&self, message: GestureMessage) -> Response {
        let response = {
            let Ok(mut state) = self.state.try_borrow_mut() else {
                // A fallback handler dispatched an event synchronously.
                tracing::warn!(?message, "re-entrant gesture message dropped");
                return Response::default();
            };
            let State {
                session,
                camera,
                fallback,
            } = &mut *state;
            session.deliver(message, camera, fallback)
        };
        self.update_pointer_watch(response.pointer_watch);
        response
    }

    fn update_pointer_watch(&self, watch: Option<PointerWatch>) {
        let Some(watch) = watch else {
            return;
        };
        let Some(callback) = self.pointer_watch.borrow().clone() else {
            return;
        };
        let result = match watch {
            PointerWatch::Install => self
                .document
                .add_event_listener_with_callback("pointermove", &callback),
            PointerWatch::Remove => self
                .document
                .remove_event_listener_with_callback("pointermove", &callback),
        };
        if let Err(err) = result {
            tracing::warn!(?err, ?watch, "failed to update pointermove listener");
        }
    }

    fn read_wheel(&self, event: &WheelEvent) -> WheelInput {
        let wheel_delta_y = Reflect::get(event.as_ref(), &JsValue::from_str("wheelDeltaY"))
            .ok()
            .and_then(|v| v.as_f64());
        let fields = WheelFields {
            delta_x: event.delta_x(),
            delta_y: event.delta_y(),
            delta_mode: event.delta_mode(),
            client_x: f64::from(event.client_x()),
            client_y: f64::from(event.client_y()),
            ctrl: event.ctrl_key(),
            shift: event.shift_key(),
            alt: event.alt_key(),
            meta: event.meta_key(),
            wheel_delta_y,
        };
        let target = event
            .target()
            .map(|t| self.read_target(&t))
            .unwrap_or_default();
        wheel_input(&fields, target)
    }

    fn read_target(&self, target: &EventTarget) -> WheelTarget {
        if Object::is(target.as_ref(), &self.canvas) {
            return WheelTarget::canvas();
        }
        match target.dyn_ref::<HtmlTextAreaElement>() {
            Some(area) => WheelTarget::text_area(
                f64::from(area.client_height()),
                f64::from(area.scroll_height()),
            ),
            None => WheelTarget::default(),
        }
    }
}

fn key_message(event: &KeyboardEvent) -> KeyInput {
    key_input(
        &event.key(),
        event.ctrl_key(),
        event.shift_key(),
        event.alt_key(),
        event.meta_key(),
    )
}

/// Installed DOM listeners. Dropping this removes them all.
///
/// Call [`GestureListeners::forget`] to keep them for the page lifetime.
pub struct GestureListeners {
    window: Window,
    document: Document,
    container: Element,
    key_down: Closure<dyn FnMut(KeyboardEvent)>,
    key_up: Closure<dyn FnMut(KeyboardEvent)>,
    blur: Closure<dyn FnMut()>,
    swipe_guard: Closure<dyn FnMut(WheelEvent)>,
    wheel: Closure<dyn FnMut(WheelEvent)>,
    pointer_move: Closure<dyn FnMut()>,
}

impl fmt::Debug for GestureListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureListeners")
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}

impl GestureListeners {
    /// Leaks the listeners so they stay registered for the rest of the page session.
    pub fn forget(self) {
        core::mem::forget(self);
    }

    fn register(&self) -> Result<(), JsValue> {
        let non_passive = AddEventListenerOptions::new();
        non_passive.set_passive(false);

        let window: &EventTarget = &self.window;
        window.add_event_listener_with_callback("keydown", self.key_down.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("keyup", self.key_up.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("blur", self.blur.as_ref().unchecked_ref())?;
        self.document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                self.swipe_guard.as_ref().unchecked_ref(),
                &non_passive,
            )?;
        self.container
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                self.wheel.as_ref().unchecked_ref(),
                &non_passive,
            )?;
        Ok(())
    }
}

impl Drop for GestureListeners {
    fn drop(&mut self) {
        let window: &EventTarget = &self.window;
        let document: &EventTarget = &self.document;
        let container: &EventTarget = &self.container;
        let removals: [(&EventTarget, &str, &JsValue); 6] = [
            (window, "keydown", self.key_down.as_ref()),
            (window, "keyup", self.key_up.as_ref()),
            (window, "blur", self.blur.as_ref()),
            (document, "wheel", self.swipe_guard.as_ref()),
            (container, "wheel", self.wheel.as_ref()),
            // Harmless when the watch is not installed.
            (document, "pointermove", self.pointer_move.as_ref()),
        ];
        for (target, kind, callback) in removals {
            if let Err(err) =
                target.remove_event_listener_with_callback(kind, callback.unchecked_ref())
            {
                tracing::warn!(?err, kind, "failed to remove listener");
            }
        }
    }
}

/// Wires `session` to the page around `canvas`.
///
/// Registers window keydown/keyup/blur, a document wheel listener that blocks
/// horizontal swipe navigation, a wheel listener on the canvas's parent
/// element, and (on demand) a one-shot document pointermove listener. Wheel
/// events the session defers go to `fallback`.
pub fn install<C, F>(
    canvas: &HtmlCanvasElement,
    session: GestureSession,
    camera: C,
    fallback: F,
) -> Result<GestureListeners, JsValue>
where
    C: CanvasCamera + 'static,
    F: WheelGestureHandler<C> + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let container = canvas
        .parent_element()
        .ok_or_else(|| JsValue::from_str("canvas is not attached to a parent element"))?;

    let host = Rc::new(Host {
        state: RefCell::new(State {
            session,
            camera,
            fallback,
        }),
        document: document.clone(),
        canvas: canvas.clone().into(),
        pointer_watch: RefCell::new(None),
    });

    let key_down = {
        let host = host.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            host.deliver(GestureMessage::KeyDown(key_message(&e)));
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    let key_up = {
        let host = host.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            host.deliver(GestureMessage::KeyUp(key_message(&e)));
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    let blur = {
        let host = host.clone();
        Closure::wrap(Box::new(move || {
            host.deliver(GestureMessage::Blur);
        }) as Box<dyn FnMut()>)
    };
    let swipe_guard = Closure::wrap(Box::new(move |e: WheelEvent| {
        if suppresses_swipe_navigation(Vec2::new(e.delta_x(), e.delta_y())) {
            e.prevent_default();
        }
    }) as Box<dyn FnMut(WheelEvent)>);
    let wheel = {
        let host = host.clone();
        Closure::wrap(Box::new(move |e: WheelEvent| {
            let input = host.read_wheel(&e);
            let response = host.deliver(GestureMessage::Wheel(input));
            if response.prevent_default {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(WheelEvent)>)
    };
    let pointer_move = {
        let host = host.clone();
        Closure::wrap(Box::new(move || {
            host.deliver(GestureMessage::PointerMove);
        }) as Box<dyn FnMut()>)
    };
    *host.pointer_watch.borrow_mut() = Some(pointer_move.as_ref().unchecked_ref::<Function>().clone());

    let listeners = GestureListeners {
        window,
        document,
        container,
        key_down,
        key_up,
        blur,
        swipe_guard,
        wheel,
        pointer_move,
    };
    // On failure `listeners` drops here and unregisters whatever was added.
    listeners.register()?;
    tracing::debug!("wheel gesture listeners installed");
    Ok(listeners)
}
