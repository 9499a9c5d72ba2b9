//! DOM binding for the hero gate: applies the styles for each [`GatePhase`]
//! and drives the phase changes from the enter button and page scroll.

use crate::constants::{CONTENT_DROP_PX, HERO_LIFT_OPACITY, HERO_LIFT_SCALE, HERO_TRANSITION_SEC};
use crate::core::ease::POWER3_IN_OUT_CSS;
use crate::core::{GatePhase, HeroGate, HERO_LEAVE_MS, HERO_RETURN_MS};
use crate::dom;
use crate::events::Subscriptions;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A scheduled phase change. Owns its callback so cancelling frees it.
struct PendingTimeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

pub struct PageGate {
    hero: web::HtmlElement,
    content: web::HtmlElement,
    gate: RefCell<HeroGate>,
    subs: RefCell<Subscriptions>,
    pending: RefCell<Option<PendingTimeout>>,
}

impl PageGate {
    pub fn bind(hero: &web::HtmlElement, content: &web::HtmlElement) -> anyhow::Result<Rc<Self>> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let page = Rc::new(Self {
            hero: hero.clone(),
            content: content.clone(),
            gate: RefCell::new(HeroGate::new()),
            subs: RefCell::new(Subscriptions::new()),
            pending: RefCell::new(None),
        });

        let transition = format!(
            "transform {s}s {e}, opacity {s}s {e}",
            s = HERO_TRANSITION_SEC,
            e = POWER3_IN_OUT_CSS
        );
        dom::set_style(hero, "transition", &transition);
        dom::set_style(content, "transition", &transition);
        page.apply(GatePhase::Shown);

        let weak = Rc::downgrade(&page);
        page.subs
            .borrow_mut()
            .listen(&window, "scroll", move |_: web::Event| {
                if let Some(p) = weak.upgrade() {
                    p.on_scroll(dom::scroll_y());
                }
            })?;
        Ok(page)
    }

    pub fn phase(&self) -> GatePhase {
        self.gate.borrow().phase()
    }

    /// Route clicks on `target` to [`PageGate::enter`] until unbound.
    pub fn bind_enter(self: &Rc<Self>, target: &web::EventTarget) -> anyhow::Result<()> {
        let weak = Rc::downgrade(self);
        self.subs
            .borrow_mut()
            .listen(target, "click", move |_: web::Event| {
                if let Some(p) = weak.upgrade() {
                    p.enter();
                }
            })
    }

    /// A leave/return transition is running and its completion is scheduled.
    pub fn has_pending_transition(&self) -> bool {
        self.gate.borrow().is_animating() && self.pending.borrow().is_some()
    }

    /// Enter button handler. Ignored unless the hero is fully shown.
    pub fn enter(self: &Rc<Self>) {
        if !self.gate.borrow_mut().request_enter() {
            return;
        }
        log::info!("[page] entering content");
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
        self.apply(GatePhase::Leaving);
        self.finish_after(HERO_LEAVE_MS);
    }

    fn on_scroll(self: &Rc<Self>, scroll_y: f64) {
        if self.gate.borrow_mut().observe_scroll(scroll_y) {
            log::info!("[page] returning to hero");
            self.apply(GatePhase::Returning);
            self.finish_after(HERO_RETURN_MS);
        }
    }

    fn finish_after(self: &Rc<Self>, ms: i32) {
        let Some(window) = web::window() else {
            return;
        };
        self.cancel_pending(&window);
        let weak: Weak<Self> = Rc::downgrade(self);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(p) = weak.upgrade() {
                p.gate.borrow_mut().finish_transition();
                let phase = p.phase();
                p.apply(phase);
            }
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            ms,
        ) {
            Ok(id) => {
                *self.pending.borrow_mut() = Some(PendingTimeout {
                    id,
                    _callback: callback,
                });
            }
            Err(e) => {
                log::error!("[page] set_timeout: {:?}", e);
                self.gate.borrow_mut().finish_transition();
                self.apply(self.phase());
            }
        }
    }

    fn cancel_pending(&self, window: &web::Window) {
        if let Some(pending) = self.pending.borrow_mut().take() {
            window.clear_timeout_with_handle(pending.id);
        }
    }

    fn apply(&self, phase: GatePhase) {
        let body = dom::window_document().and_then(|d| d.body());
        let lifted = format!("translateY(-100%) scale({})", HERO_LIFT_SCALE);
        let dropped = format!("translateY({}px)", CONTENT_DROP_PX);
        match phase {
            GatePhase::Shown => {
                self.set_hero("translateY(0) scale(1)", 1.0, true);
                self.set_content(&dropped, 0.0, false);
            }
            GatePhase::Leaving => {
                self.set_hero(&lifted, HERO_LIFT_OPACITY, true);
                self.set_content("translateY(0)", 1.0, true);
            }
            GatePhase::Hidden => {
                self.set_hero(&lifted, HERO_LIFT_OPACITY, false);
                self.set_content("translateY(0)", 1.0, true);
            }
            GatePhase::Returning => {
                self.set_hero("translateY(0) scale(1)", 1.0, true);
                self.set_content(&dropped, 0.0, true);
            }
        }
        if let Some(body) = body {
            let locked = self.gate.borrow().scroll_locked();
            dom::set_style(&body, "overflow", if locked { "hidden" } else { "auto" });
        }
    }

    fn set_hero(&self, transform: &str, opacity: f32, interactive: bool) {
        dom::set_style(&self.hero, "transform", transform);
        dom::set_style(&self.hero, "opacity", &opacity.to_string());
        dom::set_style(
            &self.hero,
            "pointer-events",
            if interactive { "auto" } else { "none" },
        );
    }

    fn set_content(&self, transform: &str, opacity: f32, visible: bool) {
        dom::set_style(&self.content, "transform", transform);
        dom::set_style(&self.content, "opacity", &opacity.to_string());
        dom::set_style(
            &self.content,
            "visibility",
            if visible { "visible" } else { "hidden" },
        );
    }

    /// Detach every listener and cancel any pending phase change.
    pub fn unbind(&self) {
        self.subs.borrow_mut().clear();
        match web::window() {
            Some(w) => self.cancel_pending(&w),
            None => {
                self.pending.borrow_mut().take();
            }
        }
    }
}

impl Drop for PageGate {
    fn drop(&mut self) {
        self.unbind();
    }
}
