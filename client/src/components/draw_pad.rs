//! Bridge component between Leptos state and the imperative `canvas::engine::Pad`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns the pixels and the stroke session. This host turns
//! browser mouse/touch events into `PointerSample`s, forwards them to the pad,
//! and drives the prediction round trip through the shared `PredictionState`.

use leptos::prelude::*;

use crate::state::prediction::PredictionState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::engine::Pad;
#[cfg(feature = "hydrate")]
use leptos::task::spawn_local;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsValue;

#[cfg(feature = "hydrate")]
use crate::net::api::predict_digit;
#[cfg(feature = "hydrate")]
use crate::net::types::PredictError;
#[cfg(feature = "hydrate")]
use crate::state::prediction::Completion;
#[cfg(feature = "hydrate")]
use crate::util::notify::alert;
#[cfg(feature = "hydrate")]
use crate::util::pad_input::{mouse_sample, touch_sample};

#[cfg(feature = "hydrate")]
const EXPORT_FAILED_MESSAGE: &str = "Could not export the drawing";

/// Run `f` against the mounted pad, logging any canvas failure.
#[cfg(feature = "hydrate")]
fn with_pad(pad: &Rc<RefCell<Option<Pad>>>, f: impl FnOnce(&mut Pad) -> Result<(), JsValue>) {
    if let Some(pad) = pad.borrow_mut().as_mut() {
        if let Err(err) = f(pad) {
            log::warn!("canvas update failed: {err:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn report_completion(completion: Option<Completion>) {
    match completion {
        Some(Completion::Applied(prediction)) => {
            log::info!("predicted {} ({}%)", prediction.label, prediction.confidence);
        }
        Some(Completion::Failed(err)) => {
            match &err {
                PredictError::Connectivity(detail) => log::error!("prediction request failed: {detail}"),
                PredictError::Service(message) => log::warn!("prediction service error: {message}"),
            }
            alert(&err.user_message());
        }
        Some(Completion::Stale) => log::debug!("discarded prediction for a cleared drawing"),
        None => {}
    }
}

/// Drawing surface plus the Clear / Predict controls.
///
/// On hydration this mounts `canvas::engine::Pad` on the `<canvas>` element.
/// During SSR only the markup is rendered.
#[component]
pub fn DrawPad() -> impl IntoView {
    let prediction = expect_context::<RwSignal<PredictionState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let pad = Rc::new(RefCell::new(None::<Pad>));

    #[cfg(feature = "hydrate")]
    {
        let pad = Rc::clone(&pad);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if pad.borrow().is_some() {
                return;
            }
            match Pad::new(canvas) {
                Ok(instance) => *pad.borrow_mut() = Some(instance),
                Err(err) => log::error!("failed to mount drawing pad: {err:?}"),
            }
        });
    }

    let on_mouse_down = {
        #[cfg(feature = "hydrate")]
        {
            let pad = Rc::clone(&pad);
            move |ev: leptos::ev::MouseEvent| {
                with_pad(&pad, |p| p.on_pointer_down(&mouse_sample(&ev)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_move = {
        #[cfg(feature = "hydrate")]
        {
            let pad = Rc::clone(&pad);
            move |ev: leptos::ev::MouseEvent| {
                with_pad(&pad, |p| p.on_pointer_move(&mouse_sample(&ev)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_up = {
        #[cfg(feature = "hydrate")]
        {
            let pad = Rc::clone(&pad);
            move |_ev: leptos::ev::MouseEvent| {
                with_pad(&pad, |p| {
                    p.on_pointer_up();
                    Ok(())
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_leave = {
        #[cfg(feature = "hydrate")]
        {
            let pad = Rc::clone(&pad);
            move |_ev: leptos::ev::MouseEvent| {
                with_pad(&pad, |p| {
                    p.on_pointer_leave();
                    Ok(())
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_touch_start = {
        #[cfg(feature = "hydrate")]
        {
            let pad = Rc::clone(&pad);
            move |ev: leptos::ev::TouchEvent| {
                ev.prevent_default();
                with_pad(&pad, |p| p.on_pointer_down(&touch_sample(&ev)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "hydrate")]
        {
            let pad = Rc::clone(&pad);
            move |ev: leptos::ev::TouchEvent| {
                with_pad(&pad, |p| {
                    // Keep the page from scrolling under an active stroke.
                    if p.is_drawing() {
                        ev.prevent_default();
                    }
                    p.on_pointer_move(&touch_sample(&ev))
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_end = {
        #[cfg(feature = "hydrate")]
        {
            let pad = Rc::clone(&pad);
            move |_ev: leptos::ev::TouchEvent| {
                with_pad(&pad, |p| {
                    p.on_pointer_up();
                    Ok(())
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_clear = {
        #[cfg(feature = "hydrate")]
        let pad = Rc::clone(&pad);
        move |_ev: leptos::ev::MouseEvent| {
            #[cfg(feature = "hydrate")]
            with_pad(&pad, Pad::reset);
            prediction.update(PredictionState::clear);
        }
    };

    let on_predict = {
        #[cfg(feature = "hydrate")]
        {
            let pad = Rc::clone(&pad);
            move |_ev: leptos::ev::MouseEvent| {
                let Some(Ok(ticket)) = prediction.try_update(PredictionState::begin_request) else {
                    log::debug!("prediction already in flight");
                    return;
                };
                let exported = pad.borrow().as_ref().map(Pad::export_image);
                let image = match exported {
                    Some(Ok(image)) => image,
                    Some(Err(err)) => {
                        log::error!("failed to export drawing: {err}");
                        prediction.update(|s| s.abandon(ticket));
                        alert(EXPORT_FAILED_MESSAGE);
                        return;
                    }
                    None => {
                        log::warn!("predict pressed before the drawing pad mounted");
                        prediction.update(|s| s.abandon(ticket));
                        return;
                    }
                };
                spawn_local(async move {
                    let outcome = predict_digit(image).await;
                    report_completion(prediction.try_update(|s| s.finish(ticket, outcome)));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let awaiting = move || prediction.with(PredictionState::is_awaiting);

    view! {
        <div class="draw-pad">
            <canvas
                class="draw-pad__canvas"
                node_ref=canvas_ref
                width="280"
                height="280"
                on:mousedown=on_mouse_down
                on:mousemove=on_mouse_move
                on:mouseup=on_mouse_up
                on:mouseleave=on_mouse_leave
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end.clone()
                on:touchcancel=on_touch_end
            >
                "Your browser does not support canvas."
            </canvas>
            <div class="draw-pad__controls">
                <button class="btn" type="button" on:click=on_clear>
                    "Clear"
                </button>
                <button class="btn btn--primary" type="button" disabled=awaiting on:click=on_predict>
                    "Predict"
                </button>
            </div>
        </div>
    }
}
