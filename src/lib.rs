#![cfg(target_arch = "wasm32")]
use crate::core::{parse_entries, SceneConfig, TimelineEntry};
use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
pub mod events;
mod frame;
pub mod hero;
mod input;
pub mod page;
mod render;
pub mod timeline;

use hero::ParticleHero;
use page::PageGate;
use timeline::Timeline;

/// Components mounted by [`start`], kept alive for the page lifetime.
struct AutoMounted {
    _hero: Option<ParticleHero>,
    _gate: Option<Rc<PageGate>>,
    _timeline: Option<Timeline>,
}

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<AutoMounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("beschi-web starting");

    match auto_mount() {
        Ok(mounted) => AUTO_MOUNTED.with(|m| *m.borrow_mut() = Some(mounted)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Mount whatever parts of the landing page are present in the document.
fn auto_mount() -> anyhow::Result<AutoMounted> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let gate = match (
        dom::element_by_id::<web::HtmlElement>(&document, constants::HERO_ID),
        dom::element_by_id::<web::HtmlElement>(&document, constants::CONTENT_ID),
    ) {
        (Ok(hero), Ok(content)) => Some(PageGate::bind(&hero, &content)?),
        _ => None,
    };

    if let (Some(gate), Ok(button)) = (
        gate.as_ref(),
        dom::element_by_id::<web::HtmlElement>(&document, constants::ENTER_BUTTON_ID),
    ) {
        gate.bind_enter(&button)?;
    }

    let host = dom::element_by_id::<web::HtmlElement>(&document, constants::HERO_CANVAS_HOST_ID);
    let hero = match host {
        Ok(host) => Some(ParticleHero::mount(&host, SceneConfig::default())?),
        Err(e) => {
            log::debug!("no hero on this page: {:?}", e);
            None
        }
    };

    let timeline = match dom::element_by_id::<web::HtmlElement>(&document, constants::TIMELINE_ID) {
        Ok(container) => {
            let entries = embedded_entries(&document)?;
            Some(Timeline::mount(&container, &entries)?)
        }
        Err(e) => {
            log::debug!("no timeline on this page: {:?}", e);
            None
        }
    };

    Ok(AutoMounted {
        _hero: hero,
        _gate: gate,
        _timeline: timeline,
    })
}

/// Entries embedded in the page as `<script type="application/json" id="story-entries">`.
fn embedded_entries(document: &web::Document) -> anyhow::Result<Vec<TimelineEntry>> {
    let Some(el) = document.get_element_by_id(constants::TIMELINE_DATA_ID) else {
        return Ok(Vec::new());
    };
    let text = el.text_content().unwrap_or_default();
    parse_entries(&text).with_context(|| format!("#{}", constants::TIMELINE_DATA_ID))
}

fn entries_from_js(value: &JsValue) -> anyhow::Result<Vec<TimelineEntry>> {
    let json: String = js_sys::JSON::stringify(value)
        .map_err(|e| anyhow::anyhow!("timeline entries are not serializable: {:?}", e))?
        .into();
    parse_entries(&json).context("timeline entries")
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

// ---------------- Host-facing mount API ----------------

#[wasm_bindgen]
pub struct HeroHandle {
    inner: ParticleHero,
}

#[wasm_bindgen]
impl HeroHandle {
    pub fn unmount(&self) {
        self.inner.unmount();
    }

    #[wasm_bindgen(getter)]
    pub fn animating(&self) -> bool {
        self.inner.is_animating()
    }

    /// Invoke `callback` when `target` is clicked.
    #[wasm_bindgen(js_name = onEnter)]
    pub fn on_enter(
        &self,
        target: &web::EventTarget,
        callback: js_sys::Function,
    ) -> Result<(), JsValue> {
        self.inner
            .on_enter(target, move || {
                if let Err(e) = callback.call0(&JsValue::NULL) {
                    log::error!("[hero] enter callback threw: {:?}", e);
                }
            })
            .map_err(to_js)
    }
}

#[wasm_bindgen]
pub fn mount_particle_hero(container: &web::HtmlElement) -> Result<HeroHandle, JsValue> {
    ParticleHero::mount(container, SceneConfig::default())
        .map(|inner| HeroHandle { inner })
        .map_err(to_js)
}

#[wasm_bindgen]
pub struct TimelineHandle {
    inner: Timeline,
}

#[wasm_bindgen]
impl TimelineHandle {
    pub fn unmount(&self) {
        self.inner.unmount();
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f32 {
        self.inner.progress()
    }
}

/// `entries` is an array of `{icon, heading, paragraph, color}` objects.
#[wasm_bindgen]
pub fn mount_timeline(
    container: &web::HtmlElement,
    entries: JsValue,
) -> Result<TimelineHandle, JsValue> {
    let entries = entries_from_js(&entries).map_err(to_js)?;
    Timeline::mount(container, &entries)
        .map(|inner| TimelineHandle { inner })
        .map_err(to_js)
}
