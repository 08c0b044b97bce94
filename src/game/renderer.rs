use std::time::Duration;

use crate::board::Player;
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_player: Player);
    fn frame_delay(&self) -> Option<Duration>;
}

fn format_stats(engine: &Engine) -> String {
    let stats = engine.get_search_stats();
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {})\n* Move took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.depth,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

/// Two humans at one terminal.
pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_player: Player) {
        ui.render_game_state(engine.board(), current_player, None);
        if !engine.board().is_over() {
            println!("Enter your move as x,y (or `quit`):");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

/// The engine playing itself.
pub struct StatsRenderer {
    /// The engine can calculate moves very quickly, so adding a slight delay
    /// between moves makes the game easier to observe.
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_player: Player) {
        let stats_display = format_stats(engine);
        ui.render_game_state(engine.board(), current_player, Some(&stats_display));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

/// A human against the engine.
pub struct ConditionalStatsRenderer {
    pub human_player: Player,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_player: Player) {
        let stats_display = format_stats(engine);
        ui.render_game_state(engine.board(), current_player, Some(&stats_display));
        if current_player == self.human_player && !engine.board().is_over() {
            println!("Enter your move as x,y (or `quit`):");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
