//! Contact form wiring with a simulated, network-free submission.

use crate::constants::*;
use crate::dom::{self, Listener};
use anyhow::anyhow;
use folio_core::contact::{ContactForm, ContactSubmission};
use folio_core::ContactConfig;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct ContactView {
    _submit: Listener,
}

#[derive(Clone)]
struct Fields {
    name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    message: web::HtmlTextAreaElement,
    submit: Option<web::HtmlButtonElement>,
    status: Option<web::Element>,
}

impl Fields {
    fn find(form: &web::HtmlFormElement) -> anyhow::Result<Self> {
        let field = |name: &str| {
            form.query_selector(&format!("[name=\"{}\"]", name))
                .ok()
                .flatten()
                .ok_or_else(|| anyhow!("contact form has no '{}' field", name))
        };
        let name = field("name")?
            .dyn_into::<web::HtmlInputElement>()
            .map_err(|_| anyhow!("'name' is not an input"))?;
        let email = field("email")?
            .dyn_into::<web::HtmlInputElement>()
            .map_err(|_| anyhow!("'email' is not an input"))?;
        let message = field("message")?
            .dyn_into::<web::HtmlTextAreaElement>()
            .map_err(|_| anyhow!("'message' is not a textarea"))?;
        let submit = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok());
        let status = form
            .owner_document()
            .and_then(|d| d.get_element_by_id(CONTACT_STATUS_ID));
        Ok(Self {
            name,
            email,
            message,
            submit,
            status,
        })
    }

    fn read(&self) -> ContactForm {
        ContactForm {
            name: self.name.value(),
            email: self.email.value(),
            message: self.message.value(),
        }
    }

    fn write(&self, form: &ContactForm) {
        self.name.set_value(&form.name);
        self.email.set_value(&form.email);
        self.message.set_value(&form.message);
    }

    fn set_busy(&self, busy: bool) {
        if let Some(b) = &self.submit {
            b.set_disabled(busy);
        }
    }

    fn show_status(&self, text: &str, is_error: bool) {
        if let Some(s) = &self.status {
            s.set_text_content(Some(text));
            dom::set_class(s, STATUS_ERROR_CLASS, is_error);
        }
    }
}

async fn sleep(window: &web::Window, d: Duration) -> anyhow::Result<()> {
    let ms = d.as_millis().min(i32::MAX as u128) as i32;
    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    scheduled.map_err(|e| anyhow!("setTimeout error: {:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("timer rejected: {:?}", e))?;
    Ok(())
}

pub fn mount(
    window: &web::Window,
    document: &web::Document,
    config: &ContactConfig,
) -> anyhow::Result<ContactView> {
    let form = dom::element_by_id(document, CONTACT_FORM_ID)?
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|_| anyhow!("#{} is not a form", CONTACT_FORM_ID))?;
    let fields = Fields::find(&form)?;
    let submission = Rc::new(RefCell::new(ContactSubmission::new()));
    let delay = config.simulated_delay;
    let window = window.clone();

    let submit = Listener::new(&form, "submit", move |ev| {
        ev.prevent_default();
        let mut form_data = fields.read();
        if let Err(e) = submission.borrow_mut().begin(&form_data) {
            log::warn!("[contact] {}", e);
            fields.show_status(&e.to_string(), true);
            return;
        }
        fields.set_busy(true);
        fields.show_status("Sending...", false);

        let fields = fields.clone();
        let submission = submission.clone();
        let window = window.clone();
        spawn_local(async move {
            if let Err(e) = sleep(&window, delay).await {
                log::error!("[contact] {:?}", e);
            }
            let done = submission.borrow_mut().complete(&mut form_data);
            fields.write(&form_data);
            fields.set_busy(false);
            if let Some(msg) = done {
                fields.show_status(msg, false);
                log::info!("[contact] message sent");
            }
        });
    })?;
    log::info!("[contact] form wired");

    Ok(ContactView { _submit: submit })
}
