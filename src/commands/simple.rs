//! Simple interactive CLI mode
//!
//! Text-based game without TUI. The clock only advances between prompts:
//! before each command the seconds spent waiting are replayed as ticks.

use crate::engine::Engine;
use crate::game::{Event, Outcome, Phase, Session, StateStore, SystemClock};
use crate::output::{print_banner, print_game_over, print_game_state, print_outcome};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Quit,
    Reset,
    End,
    Clear,
    Undo,
    Hint,
    Show,
    /// Select cells by 1-based position
    Pick(Vec<usize>),
    /// Submit the picked cells
    Submit,
    /// Spell and submit a word
    Word(String),
    Unknown(String),
}

impl Command {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        let words: Vec<&str> = input.split_whitespace().collect();
        let Some((&head, rest)) = words.split_first() else {
            return Self::Show;
        };

        match head {
            "start" | "s" => Self::Start,
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "reset" | "n" => Self::Reset,
            "end" => Self::End,
            "clear" | "c" => Self::Clear,
            "undo" | "u" => Self::Undo,
            "hint" | "h" => Self::Hint,
            "submit" | "ok" | "!" => Self::Submit,
            "pick" | "p" => {
                let picks: Option<Vec<usize>> = rest
                    .iter()
                    .map(|p| p.parse::<usize>().ok().and_then(|n| n.checked_sub(1)))
                    .collect();
                match picks {
                    Some(picks) if !picks.is_empty() => Self::Pick(picks),
                    _ => Self::Unknown(input.clone()),
                }
            }
            word if rest.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) => {
                Self::Word(word.to_string())
            }
            _ => Self::Unknown(input.clone()),
        }
    }
}

/// Replay `elapsed` whole seconds as ticks, stopping at game over
pub fn catch_up<S: StateStore, R: rand::Rng>(
    session: &mut Session<'_, S, R>,
    elapsed: u64,
) -> Option<Outcome> {
    for _ in 0..elapsed {
        match session.dispatch(Event::Tick) {
            Ok(Outcome::GameOver) => return Some(Outcome::GameOver),
            Ok(Outcome::Ignored) | Err(_) => return None,
            Ok(_) => {}
        }
    }
    None
}

/// Submit the current selection, or `None` when nothing is picked
///
/// # Errors
///
/// Returns an error when the session has no game.
pub fn submit_selection<S: StateStore, R: rand::Rng>(
    session: &mut Session<'_, S, R>,
) -> Result<Option<Outcome>, String> {
    let state = session.state().map_err(|e| e.to_string())?;
    if state.selected_letters().is_empty() {
        return Ok(None);
    }
    dispatch(session, Event::SubmitWord).map(Some)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no daily
/// word can be chosen.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<S: StateStore>(engine: Engine<'_>, store: S) -> Result<(), String> {
    let side = engine.config().grid_size.side();
    let duration = engine.config().game_duration_secs;

    let mut session = Session::new(store);
    session
        .begin(engine, Box::new(SystemClock), rand::rng())
        .map_err(|e| e.to_string())?;

    print_banner("Chain Reaction - Text Mode");
    println!("\nBuild a chain of words related to today's base word.");
    println!("Type a word to spell it from the grid and submit it,");
    println!("or pick cells by number and 'submit' them.\n");
    println!(
        "Commands: 'start', 'pick 3 8 12', 'submit', 'undo', 'clear', 'hint', 'end', 'new', 'quit'\n"
    );

    let mut last_tick = Instant::now();

    loop {
        let state = session.state().map_err(|e| e.to_string())?;
        print_game_state(state, side, duration);
        if state.phase() == Phase::GameOver {
            print_game_over(state);
        }

        let input = get_user_input("Command")?;

        let elapsed = last_tick.elapsed().as_secs();
        last_tick += Duration::from_secs(elapsed);
        if catch_up(&mut session, elapsed) == Some(Outcome::GameOver) {
            print_outcome(&Outcome::GameOver);
            continue;
        }

        let phase = session.state().map_err(|e| e.to_string())?.phase();

        match Command::parse(&input) {
            Command::Quit => {
                session.end();
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Start => {
                if dispatch(&mut session, Event::Start)? == Outcome::Ignored {
                    println!("Already started. Type 'new' for a fresh game.");
                } else {
                    last_tick = Instant::now();
                    println!("🚀 Go!");
                }
            }
            Command::Reset => {
                dispatch(&mut session, Event::Reset)?;
                println!("\n🔄 New game ready. Type 'start' to begin.");
            }
            Command::End => {
                let outcome = dispatch(&mut session, Event::EndGame)?;
                print_outcome(&outcome);
            }
            Command::Clear => {
                dispatch(&mut session, Event::ClearSelection)?;
            }
            Command::Undo => {
                let state = session.state().map_err(|e| e.to_string())?;
                if let Some(&last) = state.selected_letters().last() {
                    dispatch(&mut session, Event::DeselectLetter(last))?;
                } else {
                    println!("Nothing to undo!");
                }
            }
            Command::Hint => {
                let game = session.game().map_err(|e| e.to_string())?;
                let possible = game.possible_associations();
                println!("💡 {} words still playable", possible.len());
                if let Some(word) = possible.first() {
                    let first = word.chars().next().unwrap_or_default().to_ascii_uppercase();
                    println!("   One of them starts with '{first}'");
                }
            }
            Command::Show => {}
            Command::Pick(cells) => {
                if phase != Phase::Playing {
                    println!("Type 'start' first.");
                    continue;
                }
                for cell in cells {
                    if dispatch(&mut session, Event::SelectLetter(cell))? == Outcome::Ignored {
                        println!("Cell {} is not available", cell + 1);
                    }
                }
            }
            Command::Submit => {
                if phase != Phase::Playing {
                    println!("Type 'start' first.");
                    continue;
                }
                match submit_selection(&mut session)? {
                    Some(outcome) => print_outcome(&outcome),
                    None => println!("Pick some cells first, e.g. 'pick 3 8 12'."),
                }
            }
            Command::Word(word) => {
                if phase != Phase::Playing {
                    println!("Type 'start' first.");
                    continue;
                }
                dispatch(&mut session, Event::ClearSelection)?;
                let state = session.state().map_err(|e| e.to_string())?;
                let Some(cells) = state.cells_for(&word) else {
                    println!("❌ '{}' can't be spelled from this grid", word.to_uppercase());
                    continue;
                };
                for cell in cells {
                    dispatch(&mut session, Event::SelectLetter(cell))?;
                }
                let outcome = dispatch(&mut session, Event::SubmitWord)?;
                print_outcome(&outcome);
            }
            Command::Unknown(text) => {
                println!("❌ Unknown command '{text}'");
            }
        }
    }
}

fn dispatch<S: StateStore, R: rand::Rng>(
    session: &mut Session<'_, S, R>,
    event: Event,
) -> Result<Outcome, String> {
    session.dispatch(event).map_err(|e| e.to_string())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::loader::banks_from_slice;
    use crate::config::GameConfig;
    use crate::core::AssociationTable;
    use crate::game::{FixedClock, MemoryStore};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("start"), Command::Start);
        assert_eq!(Command::parse("  Q "), Command::Quit);
        assert_eq!(Command::parse(""), Command::Show);
        assert_eq!(Command::parse("pick 1 4 9"), Command::Pick(vec![0, 3, 8]));
        assert_eq!(Command::parse("Rain"), Command::Word("rain".into()));
        assert_eq!(Command::parse("submit"), Command::Submit);
        assert_eq!(Command::parse("OK"), Command::Submit);
        assert_eq!(Command::parse("!"), Command::Submit);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(Command::parse("pick 0"), Command::Unknown(_)));
        assert!(matches!(Command::parse("pick"), Command::Unknown(_)));
        assert!(matches!(Command::parse("two words"), Command::Unknown(_)));
        assert!(matches!(Command::parse("r4in"), Command::Unknown(_)));
    }

    fn config() -> GameConfig {
        GameConfig {
            daily_min_bank_size: 1,
            game_duration_secs: 3,
            ..GameConfig::default()
        }
    }

    fn begin<'a>(engine: Engine<'a>) -> Session<'a, MemoryStore, StdRng> {
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let mut session = Session::new(MemoryStore::new());
        session
            .begin(engine, Box::new(FixedClock(today)), StdRng::seed_from_u64(1))
            .unwrap();
        session
    }

    #[test]
    fn picked_cells_can_be_submitted() {
        let banks = banks_from_slice(&[("water", "wet", "easy", "state")]);
        let associations = AssociationTable::new();
        let config = config();
        let mut session = begin(Engine::new(&banks, &associations, &config));
        session.dispatch(Event::Start).unwrap();

        assert_eq!(submit_selection(&mut session).unwrap(), None);

        let cells = session.state().unwrap().cells_for("wet").unwrap();
        for cell in cells {
            session.dispatch(Event::SelectLetter(cell)).unwrap();
        }
        assert_eq!(session.state().unwrap().selected_word(), "wet");

        let outcome = submit_selection(&mut session).unwrap();
        assert_eq!(
            outcome,
            Some(Outcome::Accepted {
                word: "wet".into(),
                score: 30
            })
        );
        assert!(session.state().unwrap().selected_letters().is_empty());
    }

    #[test]
    fn catch_up_stops_at_game_over() {
        let banks = banks_from_slice(&[("water", "wet", "easy", "state")]);
        let associations = AssociationTable::new();
        let config = config();
        let mut session = begin(Engine::new(&banks, &associations, &config));

        assert_eq!(catch_up(&mut session, 2), None);
        assert_eq!(session.state().unwrap().timer(), 3);

        session.dispatch(Event::Start).unwrap();
        assert_eq!(catch_up(&mut session, 2), None);
        assert_eq!(session.state().unwrap().timer(), 1);
        assert_eq!(catch_up(&mut session, 10), Some(Outcome::GameOver));
        assert!(session.state().unwrap().is_game_over());
    }
}
