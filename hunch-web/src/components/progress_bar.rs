use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressBarProps {
    pub attempts: u8,
    pub max_attempts: u8,
    /// Canary styling: taller bar that shifts color as the budget runs out.
    #[prop_or_default]
    pub decorated: bool,
}

fn fill_percent(attempts: u8, max_attempts: u8) -> f64 {
    if max_attempts == 0 {
        return 0.0;
    }
    f64::from(attempts) / f64::from(max_attempts) * 100.0
}

const fn decorated_fill_class(attempts: u8, max_attempts: u8) -> &'static str {
    let attempts = attempts as u16;
    let max = max_attempts as u16;
    if attempts * 5 > max * 4 {
        "from-red-500 to-pink-500"
    } else if attempts * 5 > max * 3 {
        "from-orange-500 to-red-500"
    } else {
        "from-purple-500 to-pink-500"
    }
}

/// Attempt budget meter.
#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let width = format!(
        "width: {}%",
        fill_percent(props.attempts, props.max_attempts)
    );
    let counter = format!("{}/{} guesses", props.attempts, props.max_attempts);
    html! {
        <div class="mb-6">
            <div class="flex justify-between text-sm text-gray-600 dark:text-gray-400 mb-2">
                if props.decorated {
                    <span class="font-medium">{ "Progress" }</span>
                    <span class="font-medium">{ counter.clone() }</span>
                } else {
                    <span>{ "Progress" }</span>
                    <span>{ counter }</span>
                }
            </div>
            if props.decorated {
                <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-3 overflow-hidden">
                    <div
                        class={classes!(
                            "h-3",
                            "rounded-full",
                            "transition-all",
                            "duration-500",
                            "bg-gradient-to-r",
                            decorated_fill_class(props.attempts, props.max_attempts),
                        )}
                        style={width.clone()}
                    ></div>
                </div>
            } else {
                <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2">
                    <div
                        class="bg-blue-600 h-2 rounded-full transition-all duration-300"
                        style={width}
                    ></div>
                </div>
            }
        </div>
    }
}
