//! Skills orbit: one marker per item, repositioned on every rotation tick.

use crate::constants::*;
use crate::dom;
use crate::interval::{IntervalHandle, IntervalScheduler};
use crate::style;
use folio_core::{MountedRotation, Orbit, RotationDriver};
use std::rc::Rc;
use web_sys as web;

pub struct OrbitView {
    rotation: Option<MountedRotation<IntervalHandle>>,
    markers: Rc<Vec<web::HtmlElement>>,
}

fn place_markers(orbit: &Orbit, markers: &[web::HtmlElement], offset_degrees: f64) {
    for (marker, pos) in markers.iter().zip(orbit.layout(offset_degrees)) {
        _ = marker
            .style()
            .set_property("transform", &style::marker_transform(pos.x, pos.y));
    }
}

fn build_marker(
    document: &web::Document,
    label: &str,
    glyph: &str,
) -> anyhow::Result<web::HtmlElement> {
    let marker = dom::create_element(document, "div", ORBIT_MARKER_CLASS)?;
    let style = marker.style();
    // anchor at the container center; the transform does the rest
    _ = style.set_property("position", "absolute");
    _ = style.set_property("left", "50%");
    _ = style.set_property("top", "50%");
    _ = marker.set_attribute("title", label);
    _ = marker.set_attribute("aria-label", label);

    let glyph_el = dom::create_element(document, "span", ORBIT_GLYPH_CLASS)?;
    glyph_el.set_text_content(Some(glyph));
    let label_el = dom::create_element(document, "span", ORBIT_LABEL_CLASS)?;
    label_el.set_text_content(Some(label));
    _ = marker.append_child(&glyph_el);
    _ = marker.append_child(&label_el);
    Ok(marker)
}

pub fn mount(
    document: &web::Document,
    container: &web::Element,
    orbit: Orbit,
    scheduler: &IntervalScheduler,
) -> anyhow::Result<OrbitView> {
    let mut markers = Vec::with_capacity(orbit.len());
    for item in orbit.items() {
        let marker = build_marker(document, &item.label, &item.glyph)?;
        container
            .append_child(&marker)
            .map_err(|e| anyhow::anyhow!("append orbit marker: {:?}", e))?;
        markers.push(marker);
    }
    let markers = Rc::new(markers);
    place_markers(&orbit, &markers, 0.0);

    let driver = RotationDriver::new(*orbit.config());
    let markers_tick = markers.clone();
    let rotation = driver.mount(scheduler, move |offset| {
        place_markers(&orbit, &markers_tick, offset);
    });
    log::info!("[orbit] mounted {} markers", markers.len());

    Ok(OrbitView {
        rotation: Some(rotation),
        markers,
    })
}

impl OrbitView {
    pub fn offset_degrees(&self) -> f64 {
        self.rotation
            .as_ref()
            .map(|r| r.offset_degrees())
            .unwrap_or(0.0)
    }
}

impl Drop for OrbitView {
    fn drop(&mut self) {
        // Cancel the timer before touching the markers it repositions.
        if let Some(rotation) = self.rotation.take() {
            rotation.unmount();
        }
        for marker in self.markers.iter() {
            marker.remove();
        }
        log::info!("[orbit] unmounted");
    }
}
