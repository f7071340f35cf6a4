//! The stable track page. Fixed 1-100 range, plain styling.

use hunch_game::{SessionStatus, StatsRecord};
use yew::prelude::*;

use crate::components::guess_chips::{ChipItem, GuessChips};
use crate::components::hint_panel::HintPanel;
use crate::components::progress_bar::ProgressBar;
use crate::components::stats_panel::StatsPanel;

#[derive(Properties, PartialEq, Clone)]
pub struct StablePageProps {
    pub message: AttrValue,
    pub status: SessionStatus,
    pub entry: AttrValue,
    pub attempts: u8,
    pub max_attempts: u8,
    pub chips: Vec<ChipItem>,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    pub stats: StatsRecord,
    pub on_entry: Callback<String>,
    pub on_guess: Callback<()>,
    pub on_restart: Callback<()>,
}

const fn status_pill_class(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Won => "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
        SessionStatus::Lost => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
        SessionStatus::Playing => "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200",
    }
}

#[function_component(StablePage)]
pub fn stable_page(props: &StablePageProps) -> Html {
    let playing = props.status == SessionStatus::Playing;

    let oninput = {
        let on_entry = props.on_entry.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_entry.emit(input.value());
            }
        })
    };
    let onkeydown = {
        let on_guess = props.on_guess.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_guess.emit(());
            }
        })
    };
    let onguess = {
        let on_guess = props.on_guess.clone();
        Callback::from(move |_| on_guess.emit(()))
    };
    let onrestart = {
        let on_restart = props.on_restart.clone();
        Callback::from(move |_| on_restart.emit(()))
    };
    let hint = if playing { props.hint.clone() } else { None };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 dark:from-gray-900 dark:to-gray-800">
            <div class="container mx-auto px-4 py-8">
                <div class="text-center mb-8">
                    <h1 class="text-4xl font-bold text-gray-800 dark:text-white mb-2">
                        { "🎮 Number Guessing Game" }
                    </h1>
                    <p class="text-lg text-gray-600 dark:text-gray-300">
                        { "Kubernetes Canary Deployment Demo" }
                    </p>
                    <div class="mt-4 inline-block bg-green-100 dark:bg-green-900 px-4 py-2 rounded-full">
                        <span class="text-sm font-medium text-green-800 dark:text-green-200">
                            { "Version: Stable 🚀" }
                        </span>
                    </div>
                </div>

                <div class="max-w-2xl mx-auto">
                    <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-xl p-8">
                        <div class="text-center mb-6">
                            <div class={classes!(
                                "inline-block",
                                "px-4",
                                "py-2",
                                "rounded-full",
                                "text-sm",
                                "font-medium",
                                status_pill_class(props.status),
                            )}>
                                { props.message.clone() }
                            </div>
                        </div>

                        if playing {
                            <div class="flex gap-3 mb-6">
                                <input
                                    type="number"
                                    value={props.entry.clone()}
                                    {oninput}
                                    {onkeydown}
                                    placeholder="Enter your guess (1-100)"
                                    class="flex-1 px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent dark:bg-gray-700 dark:text-white text-center text-lg"
                                    min="1"
                                    max="100"
                                />
                                <button
                                    onclick={onguess}
                                    disabled={props.entry.trim().is_empty()}
                                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white rounded-lg font-medium transition-colors"
                                >
                                    { "Guess!" }
                                </button>
                            </div>
                        }

                        if let Some(hint) = hint {
                            <HintPanel text={hint} />
                        }

                        <ProgressBar attempts={props.attempts} max_attempts={props.max_attempts} />

                        <GuessChips items={props.chips.clone()} />

                        if !playing {
                            <div class="text-center">
                                <button
                                    onclick={onrestart}
                                    class="px-8 py-3 bg-green-600 hover:bg-green-700 text-white rounded-lg font-medium transition-colors text-lg"
                                >
                                    { "🎮 Play Again" }
                                </button>
                            </div>
                        }

                        <StatsPanel stats={props.stats} />
                    </div>
                </div>

                <footer class="mt-12 text-center text-gray-500 dark:text-gray-400">
                    <p class="text-sm">
                        { "Built with Rust, Yew & Tailwind CSS for Kubernetes Canary Deployment" }
                    </p>
                </footer>
            </div>
        </div>
    }
}
