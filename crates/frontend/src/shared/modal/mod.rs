//! Centralized dialog management.
//!
//! One dialog is visible at a time: opening a new one replaces the
//! current one, so a stray edit dialog can never sit behind a confirm
//! dialog. Dialog components own their form state, which is dropped
//! with the view on close.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
    modal_class: Option<String>,
}

/// A handle returned by `ModalService::open`.
///
/// Can be cloned into event handlers so the dialog closes itself.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Context service owning the (at most one) open dialog.
#[derive(Clone, Copy)]
pub struct ModalService {
    current: RwSignal<Option<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Next tick: removing the dialog synchronously during the
            // originating DOM event dispatch drops a live closure.
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.current.with(|c| c.is_some())
    }

    /// Open a dialog, replacing any dialog already on screen.
    /// `builder` receives a `ModalHandle` so the dialog can close itself.
    pub fn open<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.open_with_class(None, builder)
    }

    /// Open with a class override on the dialog surface.
    pub fn open_with_class<F>(&self, modal_class: Option<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let handle = ModalHandle { id, svc: *self };
        self.current.set(Some(ModalEntry {
            id,
            builder: Arc::new(builder),
            modal_class,
        }));
        handle
    }

    pub fn close(&self, id: u64) {
        self.current.update(|c| {
            if c.as_ref().is_some_and(|e| e.id == id) {
                *c = None;
            }
        });
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    /// Close whatever is open (Escape / overlay click).
    pub fn close_any_deferred(&self) {
        self.defer(|svc| svc.current.set(None));
    }
}

/// Renders the open dialog at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalService>()
        .expect("ModalService not provided in context (provide it in app root)");

    // Global Escape handler.
    Effect::new(move |_| {
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            if ev.key() == "Escape" && svc.is_open() {
                svc.close_any_deferred();
            }
        });
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    });

    view! {
        {move || {
            svc.current.get().map(|entry| {
                let handle = ModalHandle { id: entry.id, svc };
                let surface_class = match &entry.modal_class {
                    Some(extra) => format!("modal-content {}", extra),
                    None => "modal-content".to_string(),
                };
                view! {
                    <div
                        class="modal-overlay"
                        on:click=move |_| svc.close_any_deferred()
                    >
                        <div
                            class=surface_class
                            on:click=|e| e.stop_propagation()
                        >
                            {(entry.builder)(handle.clone())}
                        </div>
                    </div>
                }
            })
        }}
    }
}
