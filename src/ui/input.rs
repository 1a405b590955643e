//! Input wiring: buttons, text fields, slider, dial drags, resize
//!
//! Page-lifetime listeners are installed once and leaked. Drag tracking is
//! scoped: window listeners are created on press and dropped on release or
//! cancel.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent, TouchEvent};

use super::{App, dispatch, dom, redraw};
use crate::game::Action;
use crate::geometry::pointer_to_value;
use crate::scene::DialLayout;

/// Window listeners for one drag gesture; dropping it unsubscribes all of them
pub(crate) struct DragSession {
    _listeners: Vec<EventListener>,
}

/// Maps client coordinates into dial space for one gesture
#[derive(Clone, Copy)]
struct DialFrame {
    origin: DVec2,
    /// viewBox units per CSS pixel (the SVG may be scaled down)
    scale: f64,
    center: DVec2,
}

impl DialFrame {
    fn new(svg: &Element, layout: &DialLayout) -> Self {
        let rect = svg.get_bounding_client_rect();
        let scale = if rect.width() > 0.0 {
            layout.width / rect.width()
        } else {
            1.0
        };
        Self {
            origin: DVec2::new(rect.left(), rect.top()),
            scale,
            center: layout.center,
        }
    }

    fn value_at(&self, client: DVec2) -> f64 {
        pointer_to_value((client - self.origin) * self.scale, self.center)
    }
}

fn mouse_point(event: &MouseEvent) -> DVec2 {
    DVec2::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn touch_point(event: &TouchEvent) -> Option<DVec2> {
    event
        .touches()
        .get(0)
        .map(|t| DVec2::new(f64::from(t.client_x()), f64::from(t.client_y())))
}

/// Install every page-lifetime listener
pub(crate) fn setup(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let doc = dom::document()?;

    setup_buttons(&doc, app)?;
    setup_editor(&doc, app)?;
    setup_text_inputs(&doc, app)?;
    setup_dial(&doc, app)?;
    setup_resize(app)?;
    Ok(())
}

fn on_click(
    doc: &web_sys::Document,
    id: &str,
    app: &Rc<RefCell<App>>,
    action: Action,
) -> Result<(), JsValue> {
    let el = dom::by_id(doc, id)?;
    let app = app.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        dispatch(&app, action.clone());
    });
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn setup_buttons(doc: &web_sys::Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    on_click(doc, "btn-start", app, Action::StartGame)?;
    on_click(doc, "btn-reveal", app, Action::RevealTarget)?;
    on_click(doc, "btn-hide", app, Action::HideAndClue)?;
    on_click(doc, "btn-score", app, Action::RevealAndScore)?;
    on_click(doc, "btn-summary", app, Action::GoToSummary)?;
    on_click(doc, "btn-next", app, Action::NextRound)?;
    on_click(doc, "btn-restart", app, Action::Restart)?;
    on_click(doc, "theme-toggle", app, Action::ToggleTheme)?;
    Ok(())
}

fn setup_editor(doc: &web_sys::Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    on_click(doc, "cat-reset", app, Action::ResetCategories)?;
    on_click(doc, "cat-shuffle", app, Action::ShuffleCategories)?;

    // Add pair from the two text fields; fields clear only on success
    {
        let app = app.clone();
        let left = dom::input_by_id(doc, "cat-new-left")?;
        let right = dom::input_by_id(doc, "cat-new-right")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let action = Action::AddCategory {
                left: left.value(),
                right: right.value(),
            };
            if dispatch(&app, action) {
                left.set_value("");
                right.set_value("");
            }
        });
        dom::by_id(doc, "cat-add")?
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Remove buttons are rebuilt every render, so delegate from the list
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let index = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("data-index"))
                .and_then(|s| s.parse::<usize>().ok());
            if let Some(index) = index {
                dispatch(&app, Action::RemoveCategory(index));
            }
        });
        dom::by_id(doc, "cat-list")?
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn setup_text_inputs(doc: &web_sys::Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    // Clue text
    {
        let app = app.clone();
        let clue = dom::input_by_id(doc, "clue-input")?;
        let field = clue.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            dispatch(&app, Action::EditClue(field.value()));
        });
        clue.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Linear slider (0..=1000)
    {
        let app = app.clone();
        let slider = dom::input_by_id(doc, "slider")?;
        let field = slider.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            if let Ok(position) = field.value().parse::<u32>() {
                dispatch(&app, Action::SlideGuess(position));
            }
        });
        slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn setup_dial(doc: &web_sys::Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let svg = dom::by_id(doc, "dial")?;

    // Mouse press
    {
        let app = app.clone();
        let svg_clone = svg.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            begin_drag(&app, &svg_clone, mouse_point(&event));
        });
        svg.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch press
    {
        let app = app.clone();
        let svg_clone = svg.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            if let Some(point) = touch_point(&event) {
                begin_drag(&app, &svg_clone, point);
            }
        });
        svg.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Start tracking a drag if the dial is interactive
fn begin_drag(app: &Rc<RefCell<App>>, svg: &Element, client: DVec2) {
    if !app.borrow().view().interactive {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };

    let frame = DialFrame::new(svg, &app.borrow().layout);
    dispatch(app, Action::MoveGuess(frame.value_at(client)));

    let mut listeners = Vec::with_capacity(5);

    {
        let app = app.clone();
        listeners.push(EventListener::new(&window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                dispatch(&app, Action::MoveGuess(frame.value_at(mouse_point(event))));
            }
        }));
    }
    {
        let app = app.clone();
        let options = EventListenerOptions::enable_prevent_default();
        listeners.push(EventListener::new_with_options(
            &window,
            "touchmove",
            options,
            move |event| {
                if let Some(touch) = event.dyn_ref::<TouchEvent>() {
                    event.prevent_default();
                    if let Some(point) = touch_point(touch) {
                        dispatch(&app, Action::MoveGuess(frame.value_at(point)));
                    }
                }
            },
        ));
    }
    for end in ["mouseup", "touchend", "touchcancel"] {
        let app = app.clone();
        listeners.push(EventListener::new(&window, end, move |_event| {
            end_drag(&app);
        }));
    }

    app.borrow_mut().drag = Some(DragSession {
        _listeners: listeners,
    });
}

fn end_drag(app: &Rc<RefCell<App>>) {
    let session = app.borrow_mut().drag.take();
    drop(session);
}

fn setup_resize(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let app = app.clone();
    let win = window.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
        let Some(width) = win.inner_width().ok().and_then(|w| w.as_f64()) else {
            return;
        };
        app.borrow_mut().layout = DialLayout::from_viewport_width(width);
        redraw(&app);
    });
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
