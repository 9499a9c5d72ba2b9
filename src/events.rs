//! Owned DOM event subscriptions.
//!
//! Every listener a mounted component registers is held as a [`Subscription`];
//! dropping it unregisters the callback, so clearing a component's
//! [`Subscriptions`] is its whole listener teardown.

use smallvec::SmallVec;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Subscription {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::error!("[events] remove {} listener: {:?}", self.kind, e);
        }
    }
}

#[derive(Default)]
pub struct Subscriptions {
    active: SmallVec<[Subscription; 4]>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind` events on `target`. Events that are not
    /// of type `E` are ignored.
    pub fn listen<E>(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<()>
    where
        E: JsCast + 'static,
    {
        let callback = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        self.active.push(Subscription {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Unregister everything. Safe to call repeatedly.
    pub fn clear(&mut self) {
        let n = self.active.len();
        self.active.clear();
        if n > 0 {
            log::debug!("[events] released {} listeners", n);
        }
    }
}
