//! Scroll-synchronized story timeline.
//!
//! Renders the entries into the host container, then keeps the fill line and
//! every card in step with the scroll position. Card transforms are written
//! from [`RevealStyle`] and [`Tilt`] together so the two never fight over the
//! `transform` property.

use crate::constants::{
    TILT_TRANSITION_SEC, TIMELINE_CONTENT_CLASS, TIMELINE_FILL_CLASS, TIMELINE_ICON_CLASS,
    TIMELINE_ITEM_CLASS, TIMELINE_LINE_CLASS,
};
use crate::core::ease::POWER2_OUT_CSS;
use crate::core::{
    compose_transform, scroll_progress, Placement, RevealPhase, RevealStyle, Tilt, TimelineEntry,
    TriggerBand,
};
use crate::dom;
use crate::events::Subscriptions;
use crate::input;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use web_sys as web;

struct EntryView {
    item: web::HtmlElement,
    card: web::HtmlElement,
    placement: Placement,
    progress: f32,
    reveal: RevealStyle,
    tilt: Tilt,
    /// Hover tilt is wired (non-touch devices only).
    hover: bool,
}

impl EntryView {
    fn apply(&self) {
        dom::set_style(&self.card, "transform", &compose_transform(&self.reveal, &self.tilt));
        dom::set_style(&self.card, "opacity", &format!("{:.4}", self.reveal.opacity));
        dom::set_style(
            &self.card,
            "visibility",
            if self.reveal.visible() { "visible" } else { "hidden" },
        );
        if self.hover {
            dom::set_style(&self.card, "box-shadow", self.tilt.box_shadow());
        }
    }

    fn revert(&self) {
        for prop in [
            "transform",
            "opacity",
            "visibility",
            "transition",
            "transform-style",
            "box-shadow",
        ] {
            dom::clear_style(&self.card, prop);
        }
    }
}

struct TimelineShared {
    container: web::HtmlElement,
    fill: web::HtmlElement,
    entries: RefCell<Vec<EntryView>>,
    band: TriggerBand,
    progress: Cell<f32>,
    hover: bool,
    mounted: Cell<bool>,
    subs: RefCell<Subscriptions>,
}

impl TimelineShared {
    fn refresh(&self) {
        if !self.mounted.get() {
            return;
        }
        let vh = dom::viewport_height();
        let p = scroll_progress(dom::scroll_y(), dom::document_span(&self.container), vh);
        self.progress.set(p);
        dom::set_style(&self.fill, "transform", &format!("scaleY({:.4})", p));

        for view in self.entries.borrow_mut().iter_mut() {
            let top = view.item.get_bounding_client_rect().top();
            view.progress = self.band.progress(top, vh);
            view.reveal = RevealStyle::at(view.placement, view.progress);
            view.apply();
        }
    }

    fn set_tilt(&self, index: usize, tilt: Tilt) {
        if !self.mounted.get() {
            return;
        }
        if let Some(view) = self.entries.borrow_mut().get_mut(index) {
            view.tilt = tilt;
            view.apply();
        }
    }

    fn teardown(&self) {
        if !self.mounted.replace(false) {
            return;
        }
        self.subs.borrow_mut().clear();
        dom::clear_style(&self.fill, "transform");
        for view in self.entries.borrow().iter() {
            view.revert();
        }
        log::info!("[timeline] unmounted");
    }
}

impl Drop for TimelineShared {
    fn drop(&mut self) {
        self.teardown();
    }
}

pub struct Timeline {
    shared: Rc<TimelineShared>,
}

impl Timeline {
    /// Render `entries` into `container` and start tracking scroll.
    pub fn mount(container: &web::HtmlElement, entries: &[TimelineEntry]) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        container.set_text_content(None);
        dom::set_style(container, "position", "relative");

        let line: web::HtmlElement = dom::create(&document, "div")?;
        line.set_class_name(TIMELINE_LINE_CLASS);
        _ = line.set_attribute("aria-hidden", "true");
        let fill: web::HtmlElement = dom::create(&document, "div")?;
        fill.set_class_name(TIMELINE_FILL_CLASS);
        dom::set_style(&fill, "transform-origin", "top");
        dom::set_style(&fill, "transform", "scaleY(0)");
        append(&line, &fill)?;
        append(container, &line)?;

        // Evaluated once per mount
        let touch = dom::is_touch_device();
        let mut views = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let placement = Placement::for_index(index);
            let (item, card) = render_entry(&document, entry, placement)?;
            append(container, &item)?;
            let view = EntryView {
                item,
                card,
                placement,
                progress: 0.0,
                reveal: RevealStyle::hidden(placement),
                tilt: Tilt::NEUTRAL,
                hover: !touch,
            };
            view.apply();
            views.push(view);
        }

        let shared = Rc::new(TimelineShared {
            container: container.clone(),
            fill,
            entries: RefCell::new(views),
            band: TriggerBand::default(),
            progress: Cell::new(0.0),
            hover: !touch,
            mounted: Cell::new(true),
            subs: RefCell::new(Subscriptions::new()),
        });

        {
            let mut subs = shared.subs.borrow_mut();
            for kind in ["scroll", "resize"] {
                let weak = Rc::downgrade(&shared);
                subs.listen(&window, kind, move |_: web::Event| {
                    if let Some(t) = weak.upgrade() {
                        t.refresh();
                    }
                })?;
            }

            if !touch {
                let cards: Vec<web::HtmlElement> =
                    shared.entries.borrow().iter().map(|v| v.card.clone()).collect();
                for (index, card) in cards.iter().enumerate() {
                    wire_tilt(&mut subs, &shared, index, card)?;
                }
            }
            log::info!(
                "[timeline] mounted entries={} tilt={}",
                entries.len(),
                !touch
            );
        }

        shared.refresh();
        Ok(Self { shared })
    }

    /// Fill-line progress from the last scroll/resize tick.
    pub fn progress(&self) -> f32 {
        self.shared.progress.get()
    }

    pub fn phases(&self) -> Vec<RevealPhase> {
        self.shared
            .entries
            .borrow()
            .iter()
            .map(|v| RevealPhase::from_progress(v.progress))
            .collect()
    }

    /// Recompute from the current scroll position.
    pub fn refresh(&self) {
        self.shared.refresh();
    }

    /// Whether cards follow the pointer; false on touch devices.
    pub fn tilt_enabled(&self) -> bool {
        self.shared.hover
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.mounted.get()
    }

    pub fn listener_count(&self) -> usize {
        self.shared.subs.borrow().len()
    }

    /// Detach every listener and revert inline animation styles. Safe to call
    /// more than once.
    pub fn unmount(&self) {
        self.shared.teardown();
    }
}

fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

fn render_entry(
    document: &web::Document,
    entry: &TimelineEntry,
    placement: Placement,
) -> anyhow::Result<(web::HtmlElement, web::HtmlElement)> {
    let item: web::HtmlElement = dom::create(document, "div")?;
    item.set_class_name(&format!("{} {}", TIMELINE_ITEM_CLASS, placement.class_name()));

    let icon: web::HtmlElement = dom::create(document, "span")?;
    icon.set_class_name(TIMELINE_ICON_CLASS);
    _ = icon.set_attribute("data-icon", &entry.icon);
    dom::set_style(&icon, "background-color", &entry.color);
    append(&item, &icon)?;

    let card: web::HtmlElement = dom::create(document, "div")?;
    card.set_class_name(TIMELINE_CONTENT_CLASS);
    let heading: web::HtmlElement = dom::create(document, "h3")?;
    heading.set_text_content(Some(&entry.heading));
    let paragraph: web::HtmlElement = dom::create(document, "p")?;
    paragraph.set_text_content(Some(&entry.paragraph));
    append(&card, &heading)?;
    append(&card, &paragraph)?;
    append(&item, &card)?;

    Ok((item, card))
}

fn wire_tilt(
    subs: &mut Subscriptions,
    shared: &Rc<TimelineShared>,
    index: usize,
    card: &web::HtmlElement,
) -> anyhow::Result<()> {
    dom::set_style(card, "transform-style", "preserve-3d");
    dom::set_style(
        card,
        "transition",
        &format!(
            "transform {s}s {e}, box-shadow {s}s {e}",
            s = TILT_TRANSITION_SEC,
            e = POWER2_OUT_CSS
        ),
    );

    let weak: Weak<TimelineShared> = Rc::downgrade(shared);
    let card_move = card.clone();
    subs.listen(card, "mousemove", move |ev: web::MouseEvent| {
        let rect = card_move.get_bounding_client_rect();
        let Some([u, v]) = input::rect_uv(
            ev.client_x() as f64,
            ev.client_y() as f64,
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        ) else {
            return;
        };
        if let Some(t) = weak.upgrade() {
            t.set_tilt(index, Tilt::from_pointer(u, v));
        }
    })?;

    let weak = Rc::downgrade(shared);
    subs.listen(card, "mouseleave", move |_: web::Event| {
        if let Some(t) = weak.upgrade() {
            t.set_tilt(index, Tilt::NEUTRAL);
        }
    })
}
