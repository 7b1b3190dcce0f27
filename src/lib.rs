//! Chain Reaction
//!
//! A daily thematic word-chain game: starting from the day's base word, spell
//! related words from a letter grid to grow a chain before the timer runs out.
//!
//! # Quick Start
//!
//! ```rust
//! use chain_reaction::bank::loader::{embedded_associations, embedded_banks};
//! use chain_reaction::config::GameConfig;
//! use chain_reaction::engine::Engine;
//! use chain_reaction::game::{Event, FixedClock, Game, Outcome};
//! use chrono::NaiveDate;
//!
//! let banks = embedded_banks();
//! let associations = embedded_associations();
//! let config = GameConfig::default();
//! let engine = Engine::new(&banks, &associations, &config);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let mut game = Game::new(engine, Box::new(FixedClock(today)), rand::rng()).unwrap();
//! assert_eq!(game.dispatch(Event::Start), Outcome::Updated);
//! assert_eq!(game.state().letter_grid().len(), 36);
//! ```

// Core domain types
pub mod core;

// Thematic banks and association data
pub mod bank;

// Rules: validity, scoring, grids, daily word
pub mod engine;

// State machine, session and persistence
pub mod game;

// Tunable constants
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
