//! Action and card abstractions for multiplayer CFR poker solvers.
//!
//! A CFR solver walks a game tree whose raw branching (arbitrary bet sizes,
//! every possible deal) is far too large to enumerate. This crate presents the
//! solver with a bounded surrogate game:
//!
//! - [`gameplay::ActionAbstraction`]: a finite, ascending menu of abstract
//!   actions at every betting node, never larger than [`MAX_ABSTRACT_ACTIONS`].
//! - [`abstraction::CardAbstraction`]: a dense bucket per (player, round)
//!   information set, plus the bucket count per round for sizing regret tables.
//!
//! Both hierarchies are built once from an immutable [`game::Config`] and are
//! read-only afterwards, so a single instance can be shared by every
//! tree-walking worker.
pub mod abstraction;
pub mod cards;
pub mod game;
pub mod gameplay;
pub mod isomorphism;

pub use abstraction::*;
pub use cards::*;
pub use game::*;
pub use gameplay::*;
pub use isomorphism::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Chips committed by a player, summed over every round of the hand.
pub type Chips = i32;
/// Seat index around the table.
pub type Position = usize;
/// Dense information-set identifier under a card abstraction.
pub type Bucket = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ABSTRACTION LIMITS
// ============================================================================
/// Capacity of an [`gameplay::Actions`] set. Every action abstraction must
/// prove its worst case fits before it is deployed against a game.
pub const MAX_ABSTRACT_ACTIONS: usize = 8;
/// Maximum betting rounds in any supported game.
pub const MAX_ROUNDS: usize = 4;
/// Maximum seats at the table.
pub const MAX_PLAYERS: usize = 10;
/// Suits in the largest supported deck.
pub const MAX_SUITS: usize = 4;
/// Ranks in the largest supported deck.
pub const MAX_RANKS: usize = 13;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
