use hunch_game::StatsRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub stats: StatsRecord,
    /// Canary styling: five gradient cards including streaks.
    #[prop_or_default]
    pub decorated: bool,
}

/// Lifetime statistics cards. Hidden until at least one game has finished.
#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let stats = props.stats;
    if stats.games_played == 0 {
        return Html::default();
    }
    let win_rate = format!("{}%", stats.win_rate_percent());
    let average = format!("{:.1}", stats.average_guesses);

    if props.decorated {
        html! {
            <div class="pt-6 border-t-2 border-gradient-to-r from-purple-200 to-pink-200 dark:from-purple-800 dark:to-pink-800">
                <h3 class="text-xl font-bold text-gray-800 dark:text-white mb-4 text-center">
                    { "📊 Your Gaming Stats" }
                </h3>
                <div class="grid grid-cols-2 md:grid-cols-5 gap-4 text-center">
                    <div class="bg-gradient-to-br from-blue-50 to-cyan-50 dark:from-blue-900 dark:to-cyan-900 rounded-xl p-4 border border-blue-200 dark:border-blue-700">
                        <div class="text-3xl font-bold text-blue-600 dark:text-blue-400">
                            { stats.games_played }
                        </div>
                        <div class="text-sm text-blue-700 dark:text-blue-300 font-medium">{ "Games Played" }</div>
                    </div>
                    <div class="bg-gradient-to-br from-green-50 to-emerald-50 dark:from-green-900 dark:to-emerald-900 rounded-xl p-4 border border-green-200 dark:border-green-700">
                        <div class="text-3xl font-bold text-green-600 dark:text-green-400">
                            { win_rate }
                        </div>
                        <div class="text-sm text-green-700 dark:text-green-300 font-medium">{ "Win Rate" }</div>
                    </div>
                    <div class="bg-gradient-to-br from-purple-50 to-pink-50 dark:from-purple-900 dark:to-pink-900 rounded-xl p-4 border border-purple-200 dark:border-purple-700">
                        <div class="text-3xl font-bold text-purple-600 dark:text-purple-400">
                            { average }
                        </div>
                        <div class="text-sm text-purple-700 dark:text-purple-300 font-medium">{ "Avg Guesses" }</div>
                    </div>
                    <div class="bg-gradient-to-br from-orange-50 to-red-50 dark:from-orange-900 dark:to-red-900 rounded-xl p-4 border border-orange-200 dark:border-orange-700">
                        <div class="text-3xl font-bold text-orange-600 dark:text-orange-400">
                            { stats.current_streak }
                        </div>
                        <div class="text-sm text-orange-700 dark:text-orange-300 font-medium">{ "Current Streak" }</div>
                    </div>
                    <div class="bg-gradient-to-br from-yellow-50 to-amber-50 dark:from-yellow-900 dark:to-amber-900 rounded-xl p-4 border border-yellow-200 dark:border-yellow-700">
                        <div class="text-3xl font-bold text-yellow-600 dark:text-yellow-400">
                            { stats.best_streak }
                        </div>
                        <div class="text-sm text-yellow-700 dark:text-yellow-300 font-medium">{ "Best Streak" }</div>
                    </div>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="mt-8 pt-6 border-t border-gray-200 dark:border-gray-700">
                <h3 class="text-lg font-semibold text-gray-800 dark:text-white mb-3 text-center">
                    { "📊 Your Stats" }
                </h3>
                <div class="grid grid-cols-3 gap-4 text-center">
                    <div class="bg-gray-50 dark:bg-gray-700 rounded-lg p-3">
                        <div class="text-2xl font-bold text-blue-600 dark:text-blue-400">
                            { stats.games_played }
                        </div>
                        <div class="text-sm text-gray-600 dark:text-gray-400">{ "Played" }</div>
                    </div>
                    <div class="bg-gray-50 dark:bg-gray-700 rounded-lg p-3">
                        <div class="text-2xl font-bold text-green-600 dark:text-green-400">
                            { win_rate }
                        </div>
                        <div class="text-sm text-gray-600 dark:text-gray-400">{ "Win Rate" }</div>
                    </div>
                    <div class="bg-gray-50 dark:bg-gray-700 rounded-lg p-3">
                        <div class="text-2xl font-bold text-purple-600 dark:text-purple-400">
                            { average }
                        </div>
                        <div class="text-sm text-gray-600 dark:text-gray-400">{ "Avg Guesses" }</div>
                    </div>
                </div>
            </div>
        }
    }
}
