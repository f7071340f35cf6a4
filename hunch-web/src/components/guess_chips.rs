use hunch_game::Warmth;
use yew::prelude::*;

/// One played guess and how close it landed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ChipItem {
    pub value: u16,
    pub warmth: Warmth,
}

#[derive(Properties, PartialEq, Clone)]
pub struct GuessChipsProps {
    pub items: Vec<ChipItem>,
    /// Canary styling: gradient chips with a warmth emoji and legend.
    #[prop_or_default]
    pub decorated: bool,
}

const fn plain_chip_class(warmth: Warmth) -> &'static str {
    match warmth {
        Warmth::Exact => "bg-green-500 text-white",
        Warmth::VeryHot => "bg-yellow-400 text-gray-800",
        Warmth::Hot => "bg-orange-400 text-white",
        Warmth::Warm | Warmth::Cool | Warmth::Cold => "bg-red-400 text-white",
    }
}

const fn decorated_chip_class(warmth: Warmth) -> &'static str {
    match warmth {
        Warmth::Exact => {
            "bg-gradient-to-r from-green-500 to-emerald-500 text-white shadow-lg animate-pulse"
        }
        Warmth::VeryHot => "bg-gradient-to-r from-red-400 to-pink-400 text-white shadow-md",
        Warmth::Hot => "bg-gradient-to-r from-orange-400 to-yellow-400 text-white shadow-md",
        Warmth::Warm => "bg-gradient-to-r from-blue-400 to-cyan-400 text-white shadow-md",
        Warmth::Cool | Warmth::Cold => {
            "bg-gradient-to-r from-gray-400 to-slate-400 text-white shadow-md"
        }
    }
}

const fn warmth_emoji(warmth: Warmth) -> &'static str {
    match warmth {
        Warmth::Exact => "🎯",
        Warmth::VeryHot => "🔥",
        Warmth::Hot => "♨️",
        Warmth::Warm => "😊",
        Warmth::Cool => "😐",
        Warmth::Cold => "🥶",
    }
}

/// Chips for every guess played so far, colored by warmth.
#[function_component(GuessChips)]
pub fn guess_chips(props: &GuessChipsProps) -> Html {
    if props.items.is_empty() {
        return Html::default();
    }
    let chips = props.items.iter().map(|chip| {
        if props.decorated {
            let class = classes!(
                "px-4",
                "py-2",
                "rounded-xl",
                "text-sm",
                "font-bold",
                "transition-all",
                "duration-300",
                "transform",
                "hover:scale-110",
                decorated_chip_class(chip.warmth),
            );
            html! {
                <span class={class}>
                    { format!("{} {}", warmth_emoji(chip.warmth), chip.value) }
                </span>
            }
        } else {
            let class = classes!(
                "px-3",
                "py-1",
                "rounded-full",
                "text-sm",
                "font-medium",
                plain_chip_class(chip.warmth),
            );
            html! {
                <span class={class}>{ chip.value.to_string() }</span>
            }
        }
    });

    html! {
        <div class="mb-6">
            if props.decorated {
                <h3 class="text-lg font-semibold text-gray-800 dark:text-white mb-3 flex items-center gap-2">
                    { "📋 Your Guesses:" }
                    <span class="text-sm text-gray-600 dark:text-gray-400">
                        { "(🔥 = Very Close, ♨️ = Close, 😊 = Warm, 😐 = Cool, 🥶 = Cold)" }
                    </span>
                </h3>
            } else {
                <h3 class="text-lg font-semibold text-gray-800 dark:text-white mb-3">
                    { "Your Guesses:" }
                </h3>
            }
            <div class="flex flex-wrap gap-2">
                { for chips }
            </div>
        </div>
    }
}
