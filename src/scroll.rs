//! Navigation auto-hide, section reveal and eased in-page navigation.

use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame::AnimationLoop;
use folio_core::scroll::{nav_visible, should_reveal, ScrollTracker, SmoothScroll};
use folio_core::ScrollConfig;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct ScrollEffects {
    // dropped before the listeners that could restart it
    smooth: Rc<RefCell<Option<AnimationLoop>>>,
    _listeners: Vec<Listener>,
}

fn current_scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn update_reveals(window: &web::Window, sections: &[web::Element], start_fraction: f64) {
    let (_, viewport_h) = dom::viewport_size(window);
    for el in sections {
        let top = el.get_bounding_client_rect().top();
        dom::set_class(el, REVEALED_CLASS, should_reveal(top, viewport_h, start_fraction));
    }
}

fn start_smooth_scroll(
    window: &web::Window,
    document: &web::Document,
    selector: &str,
    duration_sec: f64,
) -> anyhow::Result<Option<AnimationLoop>> {
    let target = match document.query_selector(selector) {
        Ok(Some(el)) => el,
        _ => {
            log::warn!("[scroll] no element matches {}", selector);
            return Ok(None);
        }
    };
    let from = current_scroll_y(window);
    let to = from + target.get_bounding_client_rect().top();
    let mut anim = SmoothScroll::new(from, to, duration_sec);
    let window_frame = window.clone();
    let mut last = Instant::now();
    let frame_loop = AnimationLoop::start(move |_timestamp| {
        let now = Instant::now();
        let y = anim.step((now - last).as_secs_f64());
        last = now;
        window_frame.scroll_to_with_x_and_y(0.0, y);
        !anim.is_finished()
    })?;
    log::debug!("[scroll] smooth scroll {} -> {:.0}px", selector, to);
    Ok(Some(frame_loop))
}

pub fn mount(
    window: &web::Window,
    document: &web::Document,
    config: &ScrollConfig,
) -> anyhow::Result<ScrollEffects> {
    let nav = document.get_element_by_id(NAV_ID);
    if nav.is_none() {
        log::warn!("[scroll] missing #{}; navigation auto-hide disabled", NAV_ID);
    }
    let sections = dom::query_all(document, REVEAL_SELECTOR);
    let reveal_count = sections.len();
    let start_fraction = config.reveal_start_fraction;
    update_reveals(window, &sections, start_fraction);

    let mut listeners = Vec::new();
    {
        let mut tracker = ScrollTracker::new();
        tracker.update(current_scroll_y(window));
        let window_scroll = window.clone();
        listeners.push(Listener::new(window, "scroll", move |_| {
            let direction = tracker.update(current_scroll_y(&window_scroll));
            if let Some(nav) = &nav {
                dom::set_class(nav, NAV_HIDDEN_CLASS, !nav_visible(direction));
            }
            update_reveals(&window_scroll, &sections, start_fraction);
        })?);
    }

    let smooth: Rc<RefCell<Option<AnimationLoop>>> = Rc::new(RefCell::new(None));
    for button in dom::query_all(document, SCROLL_TO_SELECTOR) {
        let Some(selector) = button.get_attribute(SCROLL_TO_ATTR) else {
            continue;
        };
        let smooth_click = smooth.clone();
        let window_click = window.clone();
        let document_click = document.clone();
        let duration_sec = config.smooth_duration_sec;
        listeners.push(dom::add_click_listener(&button, move |ev| {
            ev.prevent_default();
            // replacing the slot cancels any scroll still in flight
            let started =
                start_smooth_scroll(&window_click, &document_click, &selector, duration_sec);
            let next = match started {
                Ok(next) => next,
                Err(e) => {
                    log::error!("[scroll] {:?}", e);
                    None
                }
            };
            *smooth_click.borrow_mut() = next;
        })?);
    }
    log::info!(
        "[scroll] mounted: {} reveal sections, {} listeners",
        reveal_count,
        listeners.len()
    );

    Ok(ScrollEffects {
        smooth,
        _listeners: listeners,
    })
}

impl Drop for ScrollEffects {
    fn drop(&mut self) {
        self.smooth.borrow_mut().take();
    }
}
