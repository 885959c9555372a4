//! Device Geolocation
//!
//! One-shot position lookup through the browser Geolocation API.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api::GeoPoint;

/// Request the device position once; `on_result` fires with either the
/// coordinates or a human-readable reason.
pub fn request_current_position(on_result: impl Fn(Result<GeoPoint, String>) + 'static) {
    let on_result: Rc<dyn Fn(Result<GeoPoint, String>)> = Rc::new(on_result);

    let geolocation = match web_sys::window().map(|w| w.navigator().geolocation()) {
        Some(Ok(geolocation)) => geolocation,
        _ => {
            on_result(Err("geolocation is not available in this browser".to_string()));
            return;
        }
    };

    let on_success = {
        let on_result = Rc::clone(&on_result);
        Closure::wrap(Box::new(move |position: web_sys::Position| {
            let coords = position.coords();
            on_result(Ok(GeoPoint {
                lat: coords.latitude(),
                lng: coords.longitude(),
            }));
        }) as Box<dyn FnMut(web_sys::Position)>)
    };

    let on_error = {
        let on_result = Rc::clone(&on_result);
        Closure::wrap(Box::new(move |error: web_sys::PositionError| {
            on_result(Err(error.message()));
        }) as Box<dyn FnMut(web_sys::PositionError)>)
    };

    if geolocation
        .get_current_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .is_err()
    {
        on_result(Err("geolocation request was rejected".to_string()));
        return;
    }

    // The browser owns the callbacks from here on
    on_success.forget();
    on_error.forget();
}
