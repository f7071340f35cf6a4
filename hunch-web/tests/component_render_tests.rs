use futures::executor::block_on;
use hunch_game::{SessionResult, StatsRecord, Warmth};
use hunch_web::components::guess_chips::{ChipItem, GuessChips, GuessChipsProps};
use hunch_web::components::hint_panel::{HintPanel, HintPanelProps};
use hunch_web::components::progress_bar::{ProgressBar, ProgressBarProps};
use hunch_web::components::stats_panel::{StatsPanel, StatsPanelProps};
use yew::{AttrValue, LocalServerRenderer};

fn sample_chips() -> Vec<ChipItem> {
    vec![
        ChipItem {
            value: 42,
            warmth: Warmth::Exact,
        },
        ChipItem {
            value: 44,
            warmth: Warmth::VeryHot,
        },
        ChipItem {
            value: 90,
            warmth: Warmth::Cold,
        },
    ]
}

#[test]
fn plain_chips_render_values_with_tier_colors() {
    let props = GuessChipsProps {
        items: sample_chips(),
        decorated: false,
    };
    let html = block_on(LocalServerRenderer::<GuessChips>::with_props(props).render());
    assert!(html.contains("Your Guesses:"));
    assert!(html.contains("bg-green-500"));
    assert!(html.contains("bg-yellow-400"));
    assert!(html.contains("bg-red-400"));
    assert!(html.contains("42"));
    assert!(!html.contains("📋"));
}

#[test]
fn decorated_chips_carry_emoji_and_legend() {
    let props = GuessChipsProps {
        items: sample_chips(),
        decorated: true,
    };
    let html = block_on(LocalServerRenderer::<GuessChips>::with_props(props).render());
    assert!(html.contains("📋 Your Guesses:"));
    assert!(html.contains("🥶 = Cold"));
    assert!(html.contains("🔥 44"));
    assert!(html.contains("from-red-400 to-pink-400"));
    assert!(html.contains("from-green-500 to-emerald-500"));
}

#[test]
fn chips_stay_hidden_before_the_first_guess() {
    let props = GuessChipsProps {
        items: Vec::new(),
        decorated: true,
    };
    let html = block_on(LocalServerRenderer::<GuessChips>::with_props(props).render());
    assert!(!html.contains("Your Guesses"));
}

#[test]
fn progress_bar_reports_the_budget() {
    let props = ProgressBarProps {
        attempts: 3,
        max_attempts: 10,
        decorated: false,
    };
    let html = block_on(LocalServerRenderer::<ProgressBar>::with_props(props).render());
    assert!(html.contains("3/10 guesses"));
    assert!(html.contains("width: 30%"));
    assert!(html.contains("bg-blue-600"));
}

#[test]
fn decorated_progress_shifts_color_when_the_budget_runs_low() {
    let props = ProgressBarProps {
        attempts: 9,
        max_attempts: 10,
        decorated: true,
    };
    let html = block_on(LocalServerRenderer::<ProgressBar>::with_props(props).render());
    assert!(html.contains("width: 90%"));
    assert!(html.contains("from-red-500 to-pink-500"));
}

#[test]
fn hint_panel_prefixes_the_copy() {
    let props = HintPanelProps {
        text: AttrValue::from("The number is quite small (1-25)"),
        decorated: false,
    };
    let html = block_on(LocalServerRenderer::<HintPanel>::with_props(props).render());
    assert!(html.contains("Hint: The number is quite small (1-25)"));
    assert!(html.contains("💡"));
}

#[test]
fn stats_panel_waits_for_a_finished_game() {
    let props = StatsPanelProps {
        stats: StatsRecord::default(),
        decorated: false,
    };
    let html = block_on(LocalServerRenderer::<StatsPanel>::with_props(props).render());
    assert!(!html.contains("Your Stats"));
}

#[test]
fn stats_panel_formats_rate_and_average() {
    let stats = StatsRecord::default()
        .record(SessionResult {
            won: true,
            attempts: 4,
        })
        .record(SessionResult {
            won: false,
            attempts: 10,
        });
    let props = StatsPanelProps {
        stats,
        decorated: false,
    };
    let html = block_on(LocalServerRenderer::<StatsPanel>::with_props(props).render());
    assert!(html.contains("📊 Your Stats"));
    assert!(html.contains("50%"));
    assert!(html.contains("7.0"));
    assert!(html.contains("Played"));
    assert!(!html.contains("Current Streak"));
}

#[test]
fn decorated_stats_add_streak_cards() {
    let stats = StatsRecord::default().record(SessionResult {
        won: true,
        attempts: 3,
    });
    let props = StatsPanelProps {
        stats,
        decorated: true,
    };
    let html = block_on(LocalServerRenderer::<StatsPanel>::with_props(props).render());
    assert!(html.contains("📊 Your Gaming Stats"));
    assert!(html.contains("Games Played"));
    assert!(html.contains("Current Streak"));
    assert!(html.contains("Best Streak"));
    assert!(html.contains("100%"));
}
