#![cfg(target_arch = "wasm32")]
use folio_core::content::orbit_items;
use folio_core::lifecycle::{LifecycleAction, PageLifecycle, PageTransition};
use folio_core::{AppConfig, Orbit};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod dom;
mod frame;
mod interval;
mod orbit;
mod projects;
mod render;
mod scene;
mod scroll;
mod skills;
mod style;

use constants::*;

/// Everything mounted on the page. Fields drop in order, orbit timer first.
struct Page {
    orbit: Option<orbit::OrbitView>,
    scene: Option<scene::FloatingScene>,
    projects: Option<projects::ProjectsView>,
    scroll: Option<scroll::ScrollEffects>,
    contact: Option<contact::ContactView>,
}

impl Drop for Page {
    fn drop(&mut self) {
        if let Some(orbit) = &self.orbit {
            log::info!("[orbit] stopping at {:.0}deg", orbit.offset_degrees());
        }
        if let Some(scene) = &self.scene {
            log::info!("[scene] stopping (running={})", scene.is_running());
        }
        drop(self.orbit.take());
        drop(self.scene.take());
        drop(self.projects.take());
        drop(self.scroll.take());
        drop(self.contact.take());
        log::info!("page torn down");
    }
}

/// Log and discard a failed optional feature so the rest of the page still mounts.
fn optional<T>(area: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[{}] disabled: {:?}", area, e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let config = AppConfig::default();
    log::info!(
        "[config] orbit radii={}/{} tick={:?} step={}deg",
        config.orbit.outer_radius,
        config.orbit.inner_radius,
        config.orbit.tick_period,
        config.orbit.step_degrees
    );

    let app = Rc::new(App {
        config,
        lifecycle: RefCell::new(PageLifecycle::new()),
        page: RefCell::new(None),
    });
    watch_page_transitions(&app);
    spawn_mount(app);
    Ok(())
}

/// Long-lived owner of the mounted page, shared with the lifecycle listeners.
struct App {
    config: AppConfig,
    lifecycle: RefCell<PageLifecycle>,
    page: RefCell<Option<Page>>,
}

fn spawn_mount(app: Rc<App>) {
    spawn_local(async move {
        let mounted = init(app.config).await;
        let keep = app.lifecycle.borrow_mut().finish_mount();
        match mounted {
            Ok(page) if keep => *app.page.borrow_mut() = Some(page),
            Ok(page) => {
                log::info!("page hidden while mounting; discarding");
                drop(page);
            }
            Err(e) => log::error!("init error: {:?}", e),
        }
    });
}

fn on_transition(app: &Rc<App>, transition: PageTransition) {
    let action = app.lifecycle.borrow_mut().transition(transition);
    log::debug!("[page] {:?} -> {:?}", transition, action);
    match action {
        LifecycleAction::Keep => {}
        LifecycleAction::Teardown => {
            let page = app.page.borrow_mut().take();
            drop(page);
        }
        LifecycleAction::Remount => spawn_mount(app.clone()),
    }
}

fn persisted(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::PageTransitionEvent>()
        .map(|e| e.persisted())
        .unwrap_or(false)
}

/// Tear down on a final `pagehide`; a back/forward cache entry stays mounted.
fn watch_page_transitions(app: &Rc<App>) {
    let Some(window) = web::window() else {
        return;
    };
    let app_hide = app.clone();
    let on_hide = Closure::wrap(Box::new(move |ev: web::Event| {
        on_transition(&app_hide, PageTransition::Hide { persisted: persisted(&ev) });
    }) as Box<dyn FnMut(web::Event)>);
    let app_show = app.clone();
    let on_show = Closure::wrap(Box::new(move |ev: web::Event| {
        on_transition(&app_show, PageTransition::Show { persisted: persisted(&ev) });
    }) as Box<dyn FnMut(web::Event)>);
    _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_hide.forget();
    on_show.forget();
}

async fn init(config: AppConfig) -> anyhow::Result<Page> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    optional("skills", skills::render(&document));

    let orbit_view = {
        let scheduler = interval::IntervalScheduler::new(window.clone());
        let mounted = dom::element_by_id(&document, ORBIT_CONTAINER_ID).and_then(|container| {
            let orbit = Orbit::new(orbit_items(), config.orbit)?;
            orbit::mount(&document, &container, orbit, &scheduler)
        });
        optional("orbit", mounted)
    };

    let projects = optional("projects", projects::mount(&document));
    let scroll = optional("scroll", scroll::mount(&window, &document, &config.scroll));
    let contact = optional("contact", contact::mount(&window, &document, &config.contact));

    // WebGPU is optional; without it the page simply has no background object.
    let canvas = dom::element_by_id(&document, BACKGROUND_CANVAS_ID).and_then(|el| {
        el.dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
    });
    let scene = match canvas {
        Ok(canvas) => optional("scene", scene::mount(&window, canvas, &config.scene).await),
        Err(e) => optional::<scene::FloatingScene>("scene", Err(e)),
    };

    Ok(Page {
        orbit: orbit_view,
        scene,
        projects,
        scroll,
        contact,
    })
}
