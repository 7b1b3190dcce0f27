//! Display functions for command results and the text-mode game

use super::formatters::{chain_line, format_timer, grid_rows, timer_bar};
use crate::commands::{BankReport, DailyReport, ScoreReport};
use crate::game::{GameState, Outcome, Phase};
use colored::Colorize;

/// Print a boxed title
pub fn print_banner(title: &str) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {}", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the board: status line, grid, chain and current selection
pub fn print_game_state(state: &GameState, side: usize, duration: u32) {
    let status = match state.phase() {
        Phase::NotStarted => "ready".yellow(),
        Phase::Playing => "playing".green(),
        Phase::GameOver => "game over".red(),
    };

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Base word: {}   Score: {}   Streak: {}   [{}]",
        state.base_word().to_uppercase().bright_yellow().bold(),
        state.score().to_string().bright_white().bold(),
        state.streak_count(),
        status
    );
    println!(
        "Time: {} {}",
        timer_bar(state.timer(), duration, 30).green(),
        format_timer(state.timer()).bright_white()
    );
    println!("{}", "─".repeat(60).cyan());

    for row in grid_rows(state.letter_grid(), side, state.selected_letters()) {
        println!("   {row}");
    }

    println!("\nChain: {}", chain_line(state.word_chain()).bright_white());
    if !state.selected_word().is_empty() {
        println!("Selected: {}", state.selected_word().to_uppercase().bright_yellow());
    }
}

/// Report what a dispatched event did
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Accepted { word, score } => println!(
            "{}",
            format!("✅ {} +{score}", word.to_uppercase()).green().bold()
        ),
        Outcome::Rejected(rejection) => println!("{}", format!("❌ {rejection}").red()),
        Outcome::GameOver => println!("{}", "⏰ Time's up!".yellow().bold()),
        Outcome::Updated | Outcome::Ignored => {}
    }
}

/// Final summary once a game has ended
pub fn print_game_over(state: &GameState) {
    print_banner("G A M E   O V E R");
    println!(
        "\n  Final score: {}",
        state.score().to_string().bright_yellow().bold()
    );
    println!("  Words chained: {}", state.word_chain().len().saturating_sub(1));
    println!("  Chain: {}", chain_line(state.word_chain()));
    println!("  Streak: {} day(s)\n", state.streak_count());
}

pub fn print_daily_report(report: &DailyReport) {
    print_banner("DAILY WORD");
    println!("\n  Date:       {}", report.date);
    println!(
        "  Base word:  {}",
        report.base_word.to_uppercase().bright_yellow().bold()
    );
    println!("  Bank size:  {} words", report.bank_size);
    println!("  Chosen from {} eligible base words", report.candidates);
}

pub fn print_bank_report(report: &BankReport) {
    print_banner(&format!("BANK: {}", report.base_word.to_uppercase()));
    println!(
        "\n  At chain length {}: {} playable words",
        report.chain_len,
        report.playable.to_string().bright_yellow()
    );

    for tier in &report.tiers {
        let lock = if tier.unlocked {
            "open".green()
        } else {
            "locked".bright_black()
        };
        println!(
            "\n📚 {} ({} words, {})",
            tier.difficulty.as_str().to_uppercase().bright_cyan().bold(),
            tier.word_count(),
            lock
        );
        for group in &tier.groups {
            println!("   {:<14} {}", group.category.bright_white(), group.words.join(", "));
        }
    }
}

pub fn print_score_report(report: &ScoreReport) {
    print_banner(&format!(
        "SCORE: {} → {}",
        report.base_word.to_uppercase(),
        report.word.to_uppercase()
    ));

    match &report.thematic {
        Some((difficulty, category)) => println!(
            "\n  Thematic:    {} ({difficulty}, {category})",
            "yes".green().bold()
        ),
        None => println!("\n  Thematic:    {}", "no".red().bold()),
    }
    println!(
        "  Score:       {} at chain length {}",
        report.score.to_string().bright_yellow().bold(),
        report.chain_len
    );

    if let Some(association) = &report.association {
        println!(
            "  Association: rarity {:.2}, strength {:.2} (legacy score {})",
            association.rarity, association.strength, report.association_score
        );
    }
}
