use yew::prelude::*;

/// Centered loading spinner for inline placeholders
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex justify-center items-center py-12">
            <span class="loading loading-spinner loading-lg"></span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BusyOverlayProps {
    pub text: String,
}

/// Full-screen indeterminate-progress overlay shown while a server round
/// trip is in flight.
#[function_component(BusyOverlay)]
pub fn busy_overlay(props: &BusyOverlayProps) -> Html {
    html! {
        <div class="fixed inset-0 z-50 bg-base-300 bg-opacity-60 flex flex-col justify-center items-center gap-4">
            <span class="loading loading-spinner loading-lg"></span>
            <p class="text-sm font-semibold">{&props.text}</p>
        </div>
    }
}
