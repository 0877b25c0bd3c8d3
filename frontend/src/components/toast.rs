use gloo_timers::future::TimeoutFuture;
use leptos::*;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Single-slot toast channel. A new toast replaces whatever is showing.
#[derive(Clone, Copy)]
pub struct Toasts {
    current: RwSignal<Option<Toast>>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.current.set(Some(Toast {
            kind: ToastKind::Success,
            message: message.into(),
        }));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.current.set(Some(Toast {
            kind: ToastKind::Error,
            message: message.into(),
        }));
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.get()
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    /// Clears the slot only while `toast` is still the one showing, so a
    /// stale timer cannot take down a replacement toast.
    pub fn dismiss_if(&self, toast: &Toast) {
        self.current.update(|current| {
            if current.as_ref() == Some(toast) {
                *current = None;
            }
        });
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts {
        current: create_rw_signal(None),
    };
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(|| Toasts {
        current: create_rw_signal(None),
    })
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    create_effect(move |_| {
        if let Some(shown) = toasts.current() {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                toasts.dismiss_if(&shown);
            });
        }
    });

    view! {
        <Show when=move || toasts.current().is_some()>
            {move || {
                toasts
                    .current()
                    .map(|toast| {
                        let classes = match toast.kind {
                            ToastKind::Success => "bg-green-600",
                            ToastKind::Error => "bg-red-600",
                        };
                        view! {
                            <div class=format!(
                                "fixed bottom-4 right-4 z-50 rounded-md px-4 py-3 text-sm font-medium text-white shadow-lg {}",
                                classes,
                            )>
                                {toast.message}
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
