//! Object-URL audio playback for synthesized speech.
//!
//! ARCHITECTURE
//! ============
//! At most one playback session is live at a time. The session owns the
//! `<audio>` element, the object URL backing it, and the ended/paused
//! closures; it lives in an `Rc<RefCell<Option<...>>>` slot owned by the
//! page. Handlers are detached before a session is dropped so a stale
//! event can never reach a freed closure.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// One live audio session: element, backing URL, lifecycle handlers.
pub struct AudioPlayback {
    element: web_sys::HtmlAudioElement,
    object_url: String,
    _on_ended: Closure<dyn FnMut()>,
    _on_pause: Closure<dyn FnMut()>,
}

/// Stop and tear down the current session, if any. Also rewinds the
/// element and revokes the object URL.
pub fn stop(slot: &Rc<RefCell<Option<AudioPlayback>>>) {
    let Some(session) = slot.borrow_mut().take() else {
        return;
    };
    session.element.set_onended(None);
    session.element.set_onpause(None);
    let _ = session.element.pause();
    session.element.set_current_time(0.0);
    let _ = web_sys::Url::revoke_object_url(&session.object_url);
}

/// Clear the slot from inside a lifecycle handler. Detaches both
/// handlers first; the currently running closure is freed only after it
/// returns.
fn settle(slot: &Rc<RefCell<Option<AudioPlayback>>>, revoke_url: bool) {
    let Some(session) = slot.borrow_mut().take() else {
        return;
    };
    session.element.set_onended(None);
    session.element.set_onpause(None);
    if revoke_url {
        let _ = web_sys::Url::revoke_object_url(&session.object_url);
    }
}

/// Build an `<audio>` element for MPEG `bytes`, store the session in
/// `slot`, and start playback.
///
/// Both lifecycle handlers clear the slot and then run `on_settled`; the
/// ended handler additionally revokes the object URL.
///
/// # Errors
///
/// Returns an error string when the blob, the element, or the playback
/// request fails (autoplay rejection included). The caller tears the
/// slot down on error.
pub async fn play_bytes(
    bytes: &[u8],
    slot: &Rc<RefCell<Option<AudioPlayback>>>,
    on_settled: impl Fn() + Clone + 'static,
) -> Result<(), String> {
    stop(slot);

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes).into());
    let props = web_sys::BlobPropertyBag::new();
    props.set_type("audio/mpeg");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &props)
        .map_err(|_| "could not assemble the audio clip".to_owned())?;
    let object_url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "could not create an audio URL".to_owned())?;
    let element = match web_sys::HtmlAudioElement::new_with_src(&object_url) {
        Ok(element) => element,
        Err(_) => {
            let _ = web_sys::Url::revoke_object_url(&object_url);
            return Err("could not create an audio element".to_owned());
        }
    };

    let on_ended = {
        let slot = Rc::clone(slot);
        let on_settled = on_settled.clone();
        Closure::wrap(Box::new(move || {
            settle(&slot, true);
            on_settled();
        }) as Box<dyn FnMut()>)
    };
    let on_pause = {
        let slot = Rc::clone(slot);
        let on_settled = on_settled.clone();
        Closure::wrap(Box::new(move || {
            settle(&slot, false);
            on_settled();
        }) as Box<dyn FnMut()>)
    };
    element.set_onended(Some(on_ended.as_ref().unchecked_ref()));
    element.set_onpause(Some(on_pause.as_ref().unchecked_ref()));

    *slot.borrow_mut() = Some(AudioPlayback {
        element: element.clone(),
        object_url,
        _on_ended: on_ended,
        _on_pause: on_pause,
    });

    let promise = element
        .play()
        .map_err(|_| "audio playback was rejected".to_owned())?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| "audio playback was rejected".to_owned())?;
    Ok(())
}
