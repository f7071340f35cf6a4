use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HintPanelProps {
    pub text: AttrValue,
    /// Canary styling: bouncing gradient card.
    #[prop_or_default]
    pub decorated: bool,
}

/// Quarter hint card shown once enough guesses have been played.
#[function_component(HintPanel)]
pub fn hint_panel(props: &HintPanelProps) -> Html {
    let line = format!("Hint: {}", props.text);
    if props.decorated {
        html! {
            <div class="mb-6 p-4 bg-gradient-to-r from-yellow-50 to-orange-50 dark:from-yellow-900/20 dark:to-orange-900/20 border-2 border-yellow-200 dark:border-yellow-800 rounded-xl animate-bounce">
                <div class="flex items-center gap-3">
                    <span class="text-2xl">{ "💡" }</span>
                    <span class="text-yellow-800 dark:text-yellow-200 font-medium">{ line }</span>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="mb-6 p-4 bg-yellow-50 dark:bg-yellow-900/20 border border-yellow-200 dark:border-yellow-800 rounded-lg">
                <div class="flex items-center gap-2">
                    <span class="text-yellow-600 dark:text-yellow-400">{ "💡" }</span>
                    <span class="text-yellow-800 dark:text-yellow-200 font-medium">{ line }</span>
                </div>
            </div>
        }
    }
}
