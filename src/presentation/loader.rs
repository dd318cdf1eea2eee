use leptos::*;

/// Spinner shown while a request is in flight
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" role="progressbar">
            <div class="spinner"></div>
        </div>
    }
}
