//! Toast notices

use leptos::prelude::*;
use otb_helper_common::Notice;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[component]
pub fn ToastStack(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = format!("toast toast-{}", toast.notice.level.as_str());
                    view! { <div class=class>{toast.notice.message}</div> }
                }
            />
        </div>
    }
}
