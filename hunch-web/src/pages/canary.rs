//! The canary track page. Difficulty tiers, timer, sound toggle and the
//! enhanced gradient chrome.

use hunch_game::{Difficulty, SessionStatus, StatsRecord};
use yew::prelude::*;

use crate::components::guess_chips::{ChipItem, GuessChips};
use crate::components::hint_panel::HintPanel;
use crate::components::progress_bar::ProgressBar;
use crate::components::stats_panel::StatsPanel;

#[derive(Properties, PartialEq, Clone)]
pub struct CanaryPageProps {
    pub difficulty: Difficulty,
    pub message: AttrValue,
    pub status: SessionStatus,
    pub entry: AttrValue,
    pub attempts: u8,
    pub max_attempts: u8,
    pub range: u16,
    pub elapsed_secs: u32,
    pub sound_enabled: bool,
    pub celebrating: bool,
    pub chips: Vec<ChipItem>,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    pub stats: StatsRecord,
    pub on_entry: Callback<String>,
    pub on_guess: Callback<()>,
    pub on_restart: Callback<()>,
    pub on_difficulty: Callback<Difficulty>,
    pub on_toggle_sound: Callback<()>,
}

const fn difficulty_gradient(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "from-green-500 to-emerald-500",
        Difficulty::Medium => "from-blue-500 to-cyan-500",
        Difficulty::Hard => "from-orange-500 to-red-500",
        Difficulty::Expert => "from-red-500 to-pink-500",
    }
}

const fn status_pill_class(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Won => {
            "bg-gradient-to-r from-green-500 to-emerald-500 text-white shadow-lg animate-pulse"
        }
        SessionStatus::Lost => "bg-gradient-to-r from-red-500 to-pink-500 text-white shadow-lg",
        SessionStatus::Playing => {
            "bg-gradient-to-r from-purple-500 to-pink-500 text-white shadow-lg"
        }
    }
}

fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn difficulty_button(
    tier: Difficulty,
    selected: Difficulty,
    on_difficulty: &Callback<Difficulty>,
) -> Html {
    let onclick = {
        let on_difficulty = on_difficulty.clone();
        Callback::from(move |_| on_difficulty.emit(tier))
    };
    let class = if tier == selected {
        classes!(
            "p-3",
            "rounded-xl",
            "font-medium",
            "transition-all",
            "duration-300",
            "transform",
            "hover:scale-105",
            "bg-gradient-to-r",
            difficulty_gradient(tier),
            "text-white",
            "shadow-lg",
        )
    } else {
        classes!(
            "p-3",
            "rounded-xl",
            "font-medium",
            "transition-all",
            "duration-300",
            "transform",
            "hover:scale-105",
            "bg-gray-100",
            "dark:bg-gray-700",
            "text-gray-700",
            "dark:text-gray-300",
            "hover:bg-gray-200",
            "dark:hover:bg-gray-600",
        )
    };
    html! {
        <button {onclick} {class}>
            <div class="text-sm">{ format!("{} {}", tier.emoji(), tier.label()) }</div>
            <div class="text-xs opacity-75">{ format!("1-{}", tier.profile().range) }</div>
        </button>
    }
}

#[function_component(CanaryPage)]
pub fn canary_page(props: &CanaryPageProps) -> Html {
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
    let ontogglesound = {
        let on_toggle_sound = props.on_toggle_sound.clone();
        Callback::from(move |_| on_toggle_sound.emit(()))
    };
    let hint = if playing { props.hint.clone() } else { None };

    let sound_class = if props.sound_enabled {
        "p-2 rounded-lg transition-colors bg-green-100 text-green-600 dark:bg-green-900 dark:text-green-400"
    } else {
        "p-2 rounded-lg transition-colors bg-gray-100 text-gray-600 dark:bg-gray-700 dark:text-gray-400"
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-purple-50 via-pink-50 to-orange-50 dark:from-gray-900 dark:via-purple-900 dark:to-indigo-900 relative overflow-hidden">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute -top-4 -left-4 w-72 h-72 bg-purple-300 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-blob"></div>
                <div class="absolute -top-4 -right-4 w-72 h-72 bg-yellow-300 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-blob animation-delay-2000"></div>
                <div class="absolute -bottom-8 left-20 w-72 h-72 bg-pink-300 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-blob animation-delay-4000"></div>
            </div>

            <div class="container mx-auto px-4 py-8 relative z-10">
                <div class="text-center mb-8">
                    <div class="animate-bounce mb-4">
                        <h1 class="text-5xl font-bold bg-gradient-to-r from-purple-600 via-pink-600 to-orange-600 bg-clip-text text-transparent mb-2 animate-pulse">
                            { "🎮 Number Guessing Game" }
                        </h1>
                    </div>
                    <p class="text-lg text-gray-700 dark:text-gray-200 font-medium">
                        { "Kubernetes Canary Deployment Demo - Enhanced Edition" }
                    </p>
                    <div class="mt-4 inline-flex items-center gap-3">
                        <div class="bg-gradient-to-r from-orange-100 to-red-100 dark:from-orange-900 dark:to-red-900 px-4 py-2 rounded-full animate-pulse">
                            <span class="text-sm font-bold text-orange-800 dark:text-orange-200">
                                { "Version: Canary 🚧" }
                            </span>
                        </div>
                        <div class="bg-gradient-to-r from-green-100 to-emerald-100 dark:from-green-900 dark:to-emerald-900 px-3 py-1 rounded-full">
                            <span class="text-xs font-medium text-green-800 dark:text-green-200">
                                { "NEW FEATURES ✨" }
                            </span>
                        </div>
                    </div>
                    <div class="mt-3 text-sm text-gray-600 dark:text-gray-300 flex flex-wrap justify-center gap-2">
                        <span class="bg-purple-100 dark:bg-purple-800 px-2 py-1 rounded text-xs">{ "🎨 Enhanced UI" }</span>
                        <span class="bg-pink-100 dark:bg-pink-800 px-2 py-1 rounded text-xs">{ "🎯 Difficulty Levels" }</span>
                        <span class="bg-orange-100 dark:bg-orange-800 px-2 py-1 rounded text-xs">{ "🔥 Streak Tracking" }</span>
                        <span class="bg-yellow-100 dark:bg-yellow-800 px-2 py-1 rounded text-xs">{ "✨ Animations" }</span>
                    </div>
                </div>

                <div class="max-w-4xl mx-auto">
                    if props.celebrating {
                        <div class="fixed inset-0 z-50 pointer-events-none">
                            <div class="absolute inset-0 bg-gradient-to-r from-yellow-400 via-red-500 to-pink-500 opacity-20 animate-pulse"></div>
                            <div class="absolute inset-0 flex items-center justify-center">
                                <div class="text-6xl animate-bounce">{ "🎉" }</div>
                            </div>
                        </div>
                    }

                    <div class="bg-white/80 dark:bg-gray-800/80 backdrop-blur-xl rounded-3xl shadow-2xl p-8 border border-white/20 dark:border-gray-700/30">
                        <div class="mb-6">
                            <h3 class="text-lg font-semibold text-gray-800 dark:text-white mb-3 text-center">
                                { "🎮 Choose Your Challenge" }
                            </h3>
                            <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                                { for Difficulty::ALL
                                    .iter()
                                    .map(|&tier| difficulty_button(tier, props.difficulty, &props.on_difficulty)) }
                            </div>
                        </div>

                        <div class="flex justify-between items-center mb-6">
                            <div class="flex items-center gap-4">
                                <button onclick={ontogglesound} class={sound_class}>
                                    { if props.sound_enabled { "🔊" } else { "🔇" } }
                                </button>
                                <div class="text-sm text-gray-600 dark:text-gray-400">
                                    { format!("⏱️ {}", format_time(props.elapsed_secs)) }
                                </div>
                            </div>
                            <div class={classes!(
                                "px-3",
                                "py-1",
                                "rounded-full",
                                "text-sm",
                                "font-medium",
                                "bg-gradient-to-r",
                                difficulty_gradient(props.difficulty),
                                "text-white",
                            )}>
                                { format!("{} {} Mode", props.difficulty.emoji(), props.difficulty.label()) }
                            </div>
                        </div>

                        <div class="text-center mb-6">
                            <div class={classes!(
                                "inline-block",
                                "px-6",
                                "py-3",
                                "rounded-2xl",
                                "text-sm",
                                "font-medium",
                                "transition-all",
                                "duration-300",
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
                                    placeholder={format!("Enter your guess (1-{})", props.range)}
                                    class="flex-1 px-6 py-4 border-2 border-purple-200 dark:border-purple-700 rounded-xl focus:ring-4 focus:ring-purple-300 focus:border-purple-500 transition-all duration-300 dark:bg-gray-700 dark:text-white text-center text-lg font-medium bg-gradient-to-r from-white to-purple-50 dark:from-gray-700 dark:to-purple-900"
                                    min="1"
                                    max={props.range.to_string()}
                                />
                                <button
                                    onclick={onguess}
                                    disabled={props.entry.trim().is_empty()}
                                    class="px-8 py-4 bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700 disabled:from-gray-400 disabled:to-gray-500 text-white rounded-xl font-bold text-lg transition-all duration-300 transform hover:scale-105 disabled:hover:scale-100 shadow-lg"
                                >
                                    { "🎯 Guess!" }
                                </button>
                            </div>
                        }

                        if let Some(hint) = hint {
                            <HintPanel text={hint} decorated=true />
                        }

                        <ProgressBar
                            attempts={props.attempts}
                            max_attempts={props.max_attempts}
                            decorated=true
                        />

                        <GuessChips items={props.chips.clone()} decorated=true />

                        if !playing {
                            <div class="text-center mb-6">
                                <button
                                    onclick={onrestart}
                                    class="px-10 py-4 bg-gradient-to-r from-green-600 to-emerald-600 hover:from-green-700 hover:to-emerald-700 text-white rounded-xl font-bold text-lg transition-all duration-300 transform hover:scale-105 shadow-lg"
                                >
                                    { "🎮 Play Again" }
                                </button>
                            </div>
                        }

                        <StatsPanel stats={props.stats} decorated=true />
                    </div>
                </div>

                <footer class="mt-12 text-center text-gray-600 dark:text-gray-300">
                    <div class="bg-white/30 dark:bg-gray-800/30 backdrop-blur-sm rounded-2xl p-6 border border-white/20 dark:border-gray-700/30">
                        <p class="text-sm font-medium mb-2">
                            { "Built with Rust, Yew & Tailwind CSS for Kubernetes Canary Deployment" }
                        </p>
                        <div class="flex flex-wrap justify-center gap-2 text-xs">
                            <span class="bg-gradient-to-r from-purple-500 to-pink-500 text-white px-3 py-1 rounded-full font-medium">
                                { "🔥 Canary Version" }
                            </span>
                            <span class="bg-gradient-to-r from-orange-500 to-red-500 text-white px-3 py-1 rounded-full font-medium">
                                { "Enhanced UI & Features" }
                            </span>
                            <span class="bg-gradient-to-r from-green-500 to-emerald-500 text-white px-3 py-1 rounded-full font-medium">
                                { "Performance Optimized" }
                            </span>
                        </div>
                    </div>
                </footer>
            </div>
        </div>
    }
}
