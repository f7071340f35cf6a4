//! Application shell: version probe, then hand off to a track screen.

pub mod state;
pub mod view;

use yew::prelude::*;

use crate::app::view::canary::CanaryScreen;
use crate::app::view::stable::StableScreen;
use crate::dom;
use crate::pages::loading::LoadingPage;
use crate::version::{self, VersionInfo};

/// Root component. Probes the serving deployment once on mount and keeps the
/// loading spinner up until an answer (or the stable fallback) arrives.
#[function_component(App)]
pub fn app() -> Html {
    let version_info = use_state(|| None::<VersionInfo>);
    {
        let version_info = version_info.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                let info = match version::fetch_version_info().await {
                    Ok(info) => info,
                    Err(message) => {
                        dom::console_error(&format!("version probe failed: {message}"));
                        VersionInfo::fallback()
                    }
                };
                version_info.set(Some(info));
            });
            || {}
        });
    }

    match version_info.as_ref() {
        None => html! { <LoadingPage /> },
        Some(info) if info.is_canary => html! { <CanaryScreen /> },
        Some(_) => html! { <StableScreen /> },
    }
}
