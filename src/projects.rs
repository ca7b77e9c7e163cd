//! Project cards and the detail dialog they open.

use crate::constants::*;
use crate::dom::{self, Listener};
use crate::style;
use anyhow::anyhow;
use folio_core::projects::{find_project, Project, ProjectSelection, PROJECTS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ProjectsView {
    // removed before the elements they point at
    listeners: Vec<Listener>,
    cards: Vec<web::HtmlElement>,
    backdrop: web::HtmlElement,
}

/// The dialog shell; `content` is rebuilt for every selection.
#[derive(Clone)]
struct Dialog {
    backdrop: web::HtmlElement,
    title: web::HtmlElement,
    content: web::HtmlElement,
}

fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("appendChild failed: {:?}", e))
}

fn text_element(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = dom::create_element(document, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

fn build_card(document: &web::Document, project: &Project) -> anyhow::Result<web::HtmlElement> {
    let card = dom::create_element(document, "div", PROJECT_CARD_CLASS)?;
    _ = card.set_attribute("role", "button");
    _ = card.set_attribute("tabindex", "0");
    let glyph = project.category.glyph();
    append(&card, &text_element(document, "div", PROJECT_GLYPH_CLASS, glyph)?)?;
    append(&card, &text_element(document, "span", BADGE_CLASS, project.category.label())?)?;
    append(&card, &text_element(document, "h3", "", project.title)?)?;
    append(&card, &text_element(document, "p", "", project.description)?)?;

    let techs = dom::create_element(document, "div", "")?;
    let (shown, hidden) = project.tech_preview();
    for tech in shown {
        append(&techs, &text_element(document, "span", BADGE_CLASS, tech)?)?;
    }
    if let Some(more) = style::overflow_badge(hidden) {
        append(&techs, &text_element(document, "span", BADGE_CLASS, &more)?)?;
    }
    append(&card, &techs)?;
    Ok(card)
}

fn build_dialog(document: &web::Document) -> anyhow::Result<(Dialog, web::HtmlElement)> {
    let backdrop = dom::create_element(document, "div", PROJECT_BACKDROP_CLASS)?;
    backdrop.set_hidden(true);
    let panel = dom::create_element(document, "div", PROJECT_DIALOG_CLASS)?;
    _ = panel.set_attribute("role", "dialog");
    _ = panel.set_attribute("aria-modal", "true");

    let header = dom::create_element(document, "div", "")?;
    let title = dom::create_element(document, "h2", "")?;
    let close = text_element(document, "button", PROJECT_CLOSE_CLASS, "×")?;
    _ = close.set_attribute("type", "button");
    _ = close.set_attribute("aria-label", "Close");
    append(&header, &title)?;
    append(&header, &close)?;

    let content = dom::create_element(document, "div", "")?;
    append(&panel, &header)?;
    append(&panel, &content)?;
    append(&backdrop, &panel)?;

    let dialog = Dialog {
        backdrop,
        title,
        content,
    };
    Ok((dialog, close))
}

fn fill_dialog(document: &web::Document, dialog: &Dialog, project: &Project) -> anyhow::Result<()> {
    dialog.title.set_text_content(Some(project.title));
    let content = &dialog.content;
    content.set_inner_html("");

    let glyph = project.category.glyph();
    append(content, &text_element(document, "div", PROJECT_GLYPH_CLASS, glyph)?)?;
    append(content, &text_element(document, "h3", "", "Overview")?)?;
    append(content, &text_element(document, "p", "", project.long_description)?)?;

    append(content, &text_element(document, "h3", "", "Key Features")?)?;
    let features = dom::create_element(document, "ul", "")?;
    for feature in project.features {
        append(&features, &text_element(document, "li", "", feature)?)?;
    }
    append(content, &features)?;

    append(content, &text_element(document, "h3", "", "Technologies Used")?)?;
    let techs = dom::create_element(document, "div", "")?;
    for tech in project.technologies {
        append(&techs, &text_element(document, "span", BADGE_CLASS, tech)?)?;
    }
    append(content, &techs)?;

    let links = dom::create_element(document, "div", "")?;
    for (url, label) in [(project.live_url, "View Live"), (project.github_url, "View Code")] {
        if let Some(url) = url {
            let a = text_element(document, "a", "", label)?;
            _ = a.set_attribute("href", url);
            _ = a.set_attribute("target", "_blank");
            _ = a.set_attribute("rel", "noopener noreferrer");
            append(&links, &a)?;
        }
    }
    append(content, &links)?;
    Ok(())
}

/// Bring the dialog in line with `selection`.
fn sync(document: &web::Document, dialog: &Dialog, selection: &ProjectSelection) {
    let project = selection
        .selected()
        .and_then(|id| find_project(&PROJECTS, id).ok());
    match project {
        Some(project) => {
            if let Err(e) = fill_dialog(document, dialog, project) {
                log::error!("[projects] {:?}", e);
            }
            dialog.backdrop.set_hidden(false);
        }
        None => dialog.backdrop.set_hidden(true),
    }
}

pub fn mount(document: &web::Document) -> anyhow::Result<ProjectsView> {
    let grid = dom::element_by_id(document, PROJECT_GRID_ID)?;
    let body = document.body().ok_or_else(|| anyhow!("document has no body"))?;
    let (dialog, close) = build_dialog(document)?;
    append(&body, &dialog.backdrop)?;

    let selection = Rc::new(RefCell::new(ProjectSelection::new()));
    let mut listeners = Vec::new();
    let mut cards = Vec::with_capacity(PROJECTS.len());

    for project in &PROJECTS {
        let card = build_card(document, project)?;
        append(&grid, &card)?;
        let id = project.id;
        let (selection, dialog, document) = (selection.clone(), dialog.clone(), document.clone());
        listeners.push(dom::add_click_listener(&card, move |_| {
            let mut sel = selection.borrow_mut();
            match sel.select(&PROJECTS, id) {
                Ok(()) => sync(&document, &dialog, &sel),
                Err(e) => log::warn!("[projects] {}", e),
            }
        })?);
        cards.push(card);
    }

    {
        let (selection, dialog, document) = (selection.clone(), dialog.clone(), document.clone());
        listeners.push(dom::add_click_listener(&close, move |_| {
            let mut sel = selection.borrow_mut();
            if sel.close() {
                sync(&document, &dialog, &sel);
            }
        })?);
    }
    {
        // clicks on the backdrop itself, not on the panel inside it
        let (selection, dialog, document) = (selection.clone(), dialog.clone(), document.clone());
        let backdrop = dialog.backdrop.clone();
        listeners.push(dom::add_click_listener(&backdrop, move |ev| {
            let on_backdrop = ev
                .target()
                .map(|t| js_sys::Object::is(&t, &dialog.backdrop))
                .unwrap_or(false);
            let mut sel = selection.borrow_mut();
            if on_backdrop && sel.close() {
                sync(&document, &dialog, &sel);
            }
        })?);
    }
    {
        let (selection, dialog, document_key) =
            (selection.clone(), dialog.clone(), document.clone());
        listeners.push(Listener::new(document, "keydown", move |ev| {
            let Some(key) = ev.dyn_ref::<web::KeyboardEvent>().map(|k| k.key()) else {
                return;
            };
            let mut sel = selection.borrow_mut();
            if sel.handle_key(&key) {
                sync(&document_key, &dialog, &sel);
            }
        })?);
    }
    log::info!("[projects] mounted {} cards", cards.len());

    Ok(ProjectsView {
        listeners,
        cards,
        backdrop: dialog.backdrop,
    })
}

impl Drop for ProjectsView {
    fn drop(&mut self) {
        self.listeners.clear();
        for card in &self.cards {
            card.remove();
        }
        self.backdrop.remove();
    }
}
