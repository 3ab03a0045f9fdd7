//! Page Interaction Controller for the landing page.
//!
//! ARCHITECTURE
//! ============
//! `PageElements` queries the document once. `PageController` owns those
//! elements plus the preference store and scheduler, installs each behavior
//! independently and keeps every listener and observer handle for
//! `teardown`. A behavior whose elements are missing is skipped with a
//! warning; the rest of the page keeps working.
//!
//! The system-theme and resize handlers evaluate their conditions when they
//! fire (stored preference, menu state, viewport width), never at
//! registration time.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::{WindowListenerHandle, window_event_listener};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, KeyboardEvent, MediaQueryList, MediaQueryListEvent, MouseEvent, Node, ScrollBehavior,
    ScrollToOptions, TouchEvent, Window,
};

use crate::config::SiteConfig;
use crate::error::InteractionError;
use crate::pages::banner;
use crate::state::counter::{self, STAT_SELECTOR};
use crate::state::header::ScrollHeader;
use crate::state::nav::{NavClick, NavMenu, Propagation};
use crate::state::reveal::{REVEAL_SELECTOR, RevealItem};
use crate::state::theme::{ThemeController, system_query};
use crate::util::browser_timers::GlooScheduler;
use crate::util::debounce::Debouncer;
use crate::util::element::{ButtonHost, query_all};
use crate::util::listener::{ListenerHandle, listen, listen_active};
use crate::util::observer::{ObserverHandle, ObserverOptions, observe};
use crate::util::ripple::{self, BUTTON_SELECTOR};
use crate::util::scroll::{ANCHOR_SELECTOR, AnchorClick, resolve_anchor_click};
use crate::util::storage::LocalStorage;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const NAV_LINK_SELECTOR: &str = ".nav-link";

thread_local! {
    static PAGE: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

/// Every element the behaviors bind to, looked up once at startup.
pub struct PageElements {
    pub root: Option<Element>,
    pub body: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub mobile_toggle: Option<Element>,
    pub nav_menu: Option<Element>,
    pub header: Option<Element>,
    pub nav_links: Vec<Element>,
    pub anchors: Vec<Element>,
    pub reveal: Vec<Element>,
    pub buttons: Vec<Element>,
    pub stats: Vec<Element>,
}

impl PageElements {
    pub fn query(document: &Document) -> Self {
        Self {
            root: document.document_element(),
            body: document.body().map(Into::into),
            theme_toggle: document.get_element_by_id("themeToggle"),
            mobile_toggle: document.get_element_by_id("mobileToggle"),
            nav_menu: document.get_element_by_id("navMenu"),
            header: document.get_element_by_id("header"),
            nav_links: query_all(document, NAV_LINK_SELECTOR),
            anchors: query_all(document, ANCHOR_SELECTOR),
            reveal: query_all(document, REVEAL_SELECTOR),
            buttons: query_all(document, BUTTON_SELECTOR),
            stats: query_all(document, STAT_SELECTOR),
        }
    }
}

pub struct PageController {
    config: Rc<SiteConfig>,
    window: Window,
    document: Document,
    elements: PageElements,
    store: Rc<LocalStorage>,
    scheduler: Rc<GlooScheduler>,
    listeners: Vec<ListenerHandle>,
    window_listeners: Vec<WindowListenerHandle>,
    observers: Vec<ObserverHandle>,
    resize_debounce: Option<Rc<Debouncer<GlooScheduler>>>,
}

impl PageController {
    pub fn new(
        config: SiteConfig,
        window: Window,
        document: Document,
        elements: PageElements,
        store: Rc<LocalStorage>,
        scheduler: Rc<GlooScheduler>,
    ) -> Self {
        Self {
            config: Rc::new(config),
            window,
            document,
            elements,
            store,
            scheduler,
            listeners: Vec::new(),
            window_listeners: Vec::new(),
            observers: Vec::new(),
            resize_debounce: None,
        }
    }

    /// Build a controller for the current browser document.
    pub fn from_window() -> Result<Self, InteractionError> {
        let window = web_sys::window().ok_or_else(|| InteractionError::missing("window"))?;
        let document = window.document().ok_or_else(|| InteractionError::missing("document"))?;
        let elements = PageElements::query(&document);
        let store = Rc::new(LocalStorage::from_window(&window));
        Ok(Self::new(SiteConfig::default(), window, document, elements, store, Rc::new(GlooScheduler)))
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Wire every behavior. Failures are logged per behavior.
    pub fn install(&mut self) {
        let results = [
            ("theme", self.install_theme()),
            ("mobile nav", self.install_nav()),
            ("scroll header", self.install_header()),
            ("smooth scroll", self.install_smooth_scroll()),
            ("reveal", self.install_reveal()),
            ("ripple", self.install_ripple()),
            ("stat counters", self.install_counters()),
        ];
        for (name, result) in results {
            if let Err(err) = result {
                leptos::logging::warn!("{name} controller skipped: {err}");
            }
        }
    }

    /// Remove every listener, disconnect observers and drop pending timers.
    pub fn teardown(self) {
        if let Some(debounce) = &self.resize_debounce {
            debounce.cancel();
        }
        for handle in self.listeners {
            handle.remove();
        }
        for handle in self.window_listeners {
            handle.remove();
        }
        for observer in self.observers {
            observer.disconnect();
        }
    }

    fn install_theme(&mut self) -> Result<(), InteractionError> {
        let root = self.elements.root.clone().ok_or_else(|| InteractionError::missing("html"))?;
        let theme = Rc::new(ThemeController::new(
            &self.config,
            Rc::clone(&self.store),
            Rc::new(root),
            self.elements.theme_toggle.clone().map(Rc::new),
            Rc::clone(&self.scheduler),
        ));

        let query = system_query(self.window.match_media(DARK_SCHEME_QUERY));
        theme.initialize(query.as_ref().is_some_and(MediaQueryList::matches));

        if let Some(toggle) = &self.elements.theme_toggle {
            let theme = Rc::clone(&theme);
            self.listeners.push(listen(toggle, "click", move |_| {
                theme.toggle();
            })?);
        }
        if let Some(query) = query {
            self.listeners.push(listen(&query, "change", move |event: Event| {
                if let Some(change) = event.dyn_ref::<MediaQueryListEvent>() {
                    theme.on_system_change(change.matches());
                }
            })?);
        }
        Ok(())
    }

    fn install_nav(&mut self) -> Result<(), InteractionError> {
        let toggle = self.elements.mobile_toggle.clone().ok_or_else(|| InteractionError::missing("#mobileToggle"))?;
        let menu = self.elements.nav_menu.clone().ok_or_else(|| InteractionError::missing("#navMenu"))?;
        let body = self.elements.body.clone().ok_or_else(|| InteractionError::missing("body"))?;
        let nav = Rc::new(NavMenu::new(&self.config, Rc::new(menu.clone()), Rc::new(toggle.clone()), Rc::new(body)));

        {
            let nav = Rc::clone(&nav);
            self.listeners.push(listen(&toggle, "click", move |event: Event| {
                if nav.on_click(NavClick::Toggle) == Propagation::Stop {
                    event.stop_propagation();
                }
            })?);
        }

        for link in &self.elements.nav_links {
            let nav = Rc::clone(&nav);
            self.listeners.push(listen(link, "click", move |_| {
                nav.on_click(NavClick::Link);
            })?);
        }

        {
            let nav = Rc::clone(&nav);
            self.window_listeners.push(window_event_listener(ev::click, move |event: MouseEvent| {
                if !nav.is_open() {
                    return;
                }
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let contains = |el: &Element| target.as_ref().is_some_and(|node| el.contains(Some(node)));
                nav.on_click(NavClick::Document { inside_menu: contains(&menu), on_toggle: contains(&toggle) });
            }));
        }

        {
            let nav = Rc::clone(&nav);
            self.window_listeners.push(window_event_listener(ev::keydown, move |event: KeyboardEvent| {
                nav.on_key(&event.key());
            }));
        }

        let debounce = Rc::new(Debouncer::new(Rc::clone(&self.scheduler), self.config.resize_debounce_ms));
        {
            let debounce = Rc::clone(&debounce);
            let window = self.window.clone();
            self.window_listeners.push(window_event_listener(ev::resize, move |_| {
                let nav = Rc::clone(&nav);
                let window = window.clone();
                debounce.trigger(Box::new(move || {
                    nav.on_resize_settled(viewport_width(&window));
                }));
            }));
        }
        self.resize_debounce = Some(debounce);
        Ok(())
    }

    fn install_header(&mut self) -> Result<(), InteractionError> {
        let header = self.elements.header.clone().ok_or_else(|| InteractionError::missing("#header"))?;
        let header = ScrollHeader::new(&self.config, Rc::new(header));
        let window = self.window.clone();
        self.window_listeners.push(window_event_listener(ev::scroll, move |_| {
            header.on_scroll(scroll_y(&window));
        }));
        Ok(())
    }

    fn install_smooth_scroll(&mut self) -> Result<(), InteractionError> {
        for anchor in &self.elements.anchors {
            let link = anchor.clone();
            let document = self.document.clone();
            let window = self.window.clone();
            let header_offset = self.config.header_offset_px;
            self.listeners.push(listen(anchor, "click", move |event: Event| {
                let href = link.get_attribute("href").unwrap_or_default();
                let lookup = |selector: &str| match document.query_selector(selector) {
                    Ok(Some(target)) => Some(target.get_bounding_client_rect().top()),
                    _ => None,
                };
                let click = resolve_anchor_click(&href, lookup, scroll_y(&window), header_offset);
                if click.prevents_default() {
                    event.prevent_default();
                }
                if let AnchorClick::SmoothScroll { top } = click {
                    let options = ScrollToOptions::new();
                    options.set_top(top);
                    options.set_behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&options);
                }
            })?);
        }
        Ok(())
    }

    fn install_reveal(&mut self) -> Result<(), InteractionError> {
        if self.elements.reveal.is_empty() {
            return Ok(());
        }
        let items: Vec<RevealItem<Element>> = self
            .elements
            .reveal
            .iter()
            .map(|el| RevealItem::arm(&self.config.reveal, Rc::new(el.clone())))
            .collect();
        let options = ObserverOptions {
            threshold: self.config.reveal.threshold,
            root_margin: Some(self.config.reveal.root_margin.clone()),
        };
        let handle = observe(&options, &self.elements.reveal, move |entry, _| {
            let target = entry.target();
            if let Some(item) = items.iter().find(|item| **item.element() == target) {
                item.on_intersection(entry.is_intersecting());
            }
        })?;
        self.observers.push(handle);
        Ok(())
    }

    fn install_ripple(&mut self) -> Result<(), InteractionError> {
        for button in &self.elements.buttons {
            let host = ButtonHost { element: button.clone(), document: self.document.clone() };
            let config = Rc::clone(&self.config);
            let scheduler = Rc::clone(&self.scheduler);
            let handler: Rc<dyn Fn(Event)> = Rc::new(move |event: Event| {
                let point = if event.type_() == "touchstart" {
                    event.prevent_default();
                    event
                        .unchecked_ref::<TouchEvent>()
                        .touches()
                        .item(0)
                        .map(|touch| (f64::from(touch.client_x()), f64::from(touch.client_y())))
                } else {
                    event
                        .dyn_ref::<MouseEvent>()
                        .map(|mouse| (f64::from(mouse.client_x()), f64::from(mouse.client_y())))
                };
                if let Some((x, y)) = point {
                    ripple::activate(&config, &host, x, y, scheduler.as_ref());
                }
            });

            let on_click = Rc::clone(&handler);
            self.listeners.push(listen(button, "click", move |event| on_click(event))?);
            self.listeners.push(listen_active(button, "touchstart", move |event| handler(event))?);
        }
        Ok(())
    }

    fn install_counters(&mut self) -> Result<(), InteractionError> {
        if self.elements.stats.is_empty() {
            return Ok(());
        }
        let config = Rc::clone(&self.config);
        let scheduler = Rc::clone(&self.scheduler);
        let options = ObserverOptions { threshold: self.config.stat_threshold, root_margin: None };
        let handle = observe(&options, &self.elements.stats, move |entry, observer| {
            let target = entry.target();
            let outcome =
                counter::on_stat_intersection(&config, Rc::new(target.clone()), entry.is_intersecting(), scheduler.as_ref());
            if outcome.unobserves() {
                observer.unobserve(&target);
            }
        })?;
        self.observers.push(handle);
        Ok(())
    }
}

fn scroll_y(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

fn viewport_width(window: &Window) -> f64 {
    window.inner_width().ok().and_then(|width| width.as_f64()).unwrap_or(0.0)
}

/// Wire the current page and keep the controller alive for its lifetime.
pub fn boot() {
    match PageController::from_window() {
        Ok(mut page) => {
            page.install();
            PAGE.with(|slot| *slot.borrow_mut() = Some(page));
            banner::print();
        }
        Err(err) => leptos::logging::warn!("page interactions disabled: {err}"),
    }
}

/// Undo `boot`: detach every handler installed on the page.
pub fn shutdown() {
    if let Some(page) = PAGE.with(|slot| slot.borrow_mut().take()) {
        page.teardown();
    }
}
