use yew::prelude::*;
use gloo_timers::callback::Timeout;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Info => "toast-info",
            ToastKind::Error => "toast-error",
        }
    }
}

/// A toast waiting to be rendered. `sequence` is unique per shown toast so
/// repeating the same text still restarts the dismiss timer.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub sequence: u32,
}

/// Holds at most one toast; a new one replaces the old.
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<ToastMessage>,
    issued: u32,
}

impl ToastSlot {
    pub fn show(&mut self, kind: ToastKind, title: &str, message: impl Into<String>) {
        self.issued = self.issued.wrapping_add(1);
        self.current = Some(ToastMessage {
            kind,
            title: title.to_string(),
            message: message.into(),
            sequence: self.issued,
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&ToastMessage> {
        self.current.as_ref()
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub kind: ToastKind,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub sequence: u32,
    pub on_dismiss: Callback<()>,
    #[prop_or(4_000)]
    pub duration_ms: u32,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    // Restart the timer whenever a new toast replaces the old one
    {
        let on_dismiss = props.on_dismiss.clone();
        let duration = props.duration_ms;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(duration, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            props.sequence,
        );
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_dismiss.emit(());
        })
    };

    html! {
        <div class={classes!("toast", props.kind.class())} role="status">
            <div class="toast-body">
                <strong>{&props.title}</strong>
                <p>{&props.message}</p>
            </div>
            <button class="toast-close" onclick={dismiss}>{"✕"}</button>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        max-width: 360px;
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: #fffaf3;
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.15);
                        animation: toastIn 0.3s ease-out;
                        z-index: 1000;
                    }
                    .toast p { margin: 0.25rem 0 0; font-size: 0.9rem; }
                    .toast-success { border-left: 4px solid #2e7d32; }
                    .toast-info { border-left: 4px solid #8d6e63; }
                    .toast-error { border-left: 4px solid #c62828; }
                    .toast-close {
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #666;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
        </div>
    }
}
