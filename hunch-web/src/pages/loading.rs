use yew::prelude::*;

/// Spinner shown while the version probe is in flight.
#[function_component(LoadingPage)]
pub fn loading_page() -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 dark:from-gray-900 dark:to-gray-800 flex items-center justify-center">
            <div class="text-center">
                <div class="animate-spin rounded-full h-32 w-32 border-b-2 border-blue-600 mx-auto"></div>
                <p class="mt-4 text-lg text-gray-600 dark:text-gray-300">{ "Loading..." }</p>
            </div>
        </div>
    }
}
