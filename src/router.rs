//! Hash Router
//!
//! Routes have the shape `#/:filter`. On start the current hash is reported,
//! or the default route is activated when it does not match; afterwards every
//! `hashchange` is reported the same way.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::domain::Filter;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("no global window")]
    NoWindow,
    #[error("location access failed: {0}")]
    Location(String),
    #[error("could not listen for hashchange: {0}")]
    Listener(String),
}

/// Filter named by `hash`, `None` when it is not a single-segment route
pub fn parse_route(hash: &str) -> Option<Filter> {
    let path = hash.strip_prefix('#').unwrap_or(hash);
    let segment = path.strip_prefix('/')?;
    if segment.is_empty() || segment.contains('/') {
        return None;
    }
    Some(Filter::from_segment(segment))
}

pub fn route_href(filter: Filter) -> String {
    format!("#/{}", filter.as_str())
}

/// Point `location.hash` at `filter`'s route
pub fn navigate(filter: Filter) -> Result<(), RouterError> {
    let window = web_sys::window().ok_or(RouterError::NoWindow)?;
    window
        .location()
        .set_hash(&route_href(filter))
        .map_err(|e| RouterError::Location(format!("{:?}", e)))
}

fn current_route() -> Result<Option<Filter>, RouterError> {
    let window = web_sys::window().ok_or(RouterError::NoWindow)?;
    let hash = window
        .location()
        .hash()
        .map_err(|e| RouterError::Location(format!("{:?}", e)))?;
    Ok(parse_route(&hash))
}

/// Report the current route now and on every hash change.
///
/// The listener lives for the rest of the page.
pub fn start(default: Filter, on_change: impl Fn(Filter) + 'static) -> Result<(), RouterError> {
    let window = web_sys::window().ok_or(RouterError::NoWindow)?;
    let on_change: Rc<dyn Fn(Filter)> = Rc::new(on_change);

    let dispatch = move |on_change: &dyn Fn(Filter)| -> Result<(), RouterError> {
        match current_route()? {
            Some(filter) => {
                tracing::debug!(%filter, "route changed");
                on_change(filter);
                Ok(())
            }
            // Setting the hash fires hashchange, which lands in the arm above
            None => navigate(default),
        }
    };

    let listener = {
        let on_change = Rc::clone(&on_change);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            if let Err(e) = dispatch(on_change.as_ref()) {
                tracing::warn!(error = %e, "route dispatch failed");
            }
        })
    };
    window
        .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
        .map_err(|e| RouterError::Listener(format!("{:?}", e)))?;
    listener.forget();

    dispatch(on_change.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(parse_route("#/all"), Some(Filter::All));
        assert_eq!(parse_route("#/active"), Some(Filter::Active));
        assert_eq!(parse_route("#/completed"), Some(Filter::Completed));
        assert_eq!(parse_route("/active"), Some(Filter::Active));
    }

    #[test]
    fn test_unknown_segment_matches_as_all() {
        assert_eq!(parse_route("#/someday"), Some(Filter::All));
    }

    #[test]
    fn test_non_matching_routes() {
        for hash in ["", "#", "#/", "#active", "#/active/extra", "#//"] {
            assert_eq!(parse_route(hash), None, "{hash}");
        }
    }

    #[test]
    fn test_route_href_roundtrips() {
        for filter in Filter::ALL {
            assert_eq!(parse_route(&route_href(filter)), Some(filter));
        }
    }
}
