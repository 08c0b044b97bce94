use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::alpha_beta_searcher::{SearchConfig, SearchContext, SearchError};
use crate::board::Board;
use crate::gobang_search::search_best_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPositionsStrategy {
    All,
    AlphaBeta,
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountPositionsStrategy::All),
            "alpha-beta" => Ok(CountPositionsStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: all, alpha-beta"),
        }
    }
}

/// Positions visited by one search at a single depth.
#[derive(Debug, Clone, Copy)]
pub struct DepthCount {
    pub depth: u8,
    pub positions: usize,
    pub duration: Duration,
}

/// Searches `board` at every depth from 1 to `search.max_depth` and reports
/// the positions visited. `All` turns pruning off, `AlphaBeta` on.
pub fn count_positions(
    board: &Board,
    search: SearchConfig,
    strategy: CountPositionsStrategy,
) -> Result<Vec<DepthCount>, SearchError> {
    let pruning = strategy == CountPositionsStrategy::AlphaBeta;

    (1..=search.max_depth)
        .map(|depth| -> Result<DepthCount, SearchError> {
            let mut context = SearchContext::new(SearchConfig {
                max_depth: depth,
                pruning,
                ..search
            })?;

            let start = Instant::now();
            search_best_move(&mut context, board)?;

            Ok(DepthCount {
                depth,
                positions: context.searched_position_count(),
                duration: start.elapsed(),
            })
        })
        .collect()
}

pub fn run_count_positions(
    board: &Board,
    search: SearchConfig,
    strategy: CountPositionsStrategy,
) -> Result<(), SearchError> {
    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for count in count_positions(board, search, strategy)? {
        total_positions += count.positions;
        total_duration += count.duration;

        println!(
            "depth: {}, positions: {}, positions per second: {}",
            count.depth,
            count.positions,
            positions_per_second(count.positions, count.duration)
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        positions_per_second(total_positions, total_duration)
    );
    Ok(())
}

fn positions_per_second(positions: usize, duration: Duration) -> f64 {
    positions as f64 / duration.as_secs_f64().max(f64::EPSILON)
}
