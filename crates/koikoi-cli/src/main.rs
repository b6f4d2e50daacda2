mod config;
mod display;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use koikoi_core::game::error::GameError;
use koikoi_core::game::match_state::MatchState;
use koikoi_core::game::round::{GamePhase, HandSelection, KoiKoiRound, TurnOutcome};
use koikoi_core::game::serialization::RoundSnapshot;
use koikoi_core::model::card::CardId;
use koikoi_core::scoring::manager::ScoringManager;

use crate::config::{GameConfig, RulePreset};

/// Hanafuda koi-koi at the terminal.
#[derive(Debug, Parser)]
#[command(name = "koikoi", author, version, about = "Two-player koi-koi rules engine driver")]
struct Cli {
    /// Path to a YAML game configuration.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Rule preset, overriding the config file.
    #[arg(long, value_enum)]
    preset: Option<RulePreset>,

    /// Override the RNG seed for deterministic deals.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of rounds in the match.
    #[arg(long, value_name = "COUNT")]
    rounds: Option<u32>,

    /// Resume the current round from a JSON snapshot.
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// Verbose engine logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_path(path)?,
        None => GameConfig::default(),
    };
    if cli.preset.is_some() {
        config.preset = cli.preset;
        config.rules = None;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(rounds) = cli.rounds {
        config.rounds = Some(rounds);
    }
    config.validate()?;

    let rules = config.rule_config();
    let mut state = match config.seed {
        Some(seed) => MatchState::with_seed(rules, seed),
        None => MatchState::new(rules),
    };
    state.set_weather(config.weather);

    if let Some(path) = &cli.load {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot at {}", path.display()))?;
        let snapshot = RoundSnapshot::from_json(&json)
            .with_context(|| format!("parsing snapshot at {}", path.display()))?;
        let round = snapshot.restore(ScoringManager::new(rules))?;
        state.load_round(round);
    }

    let rounds = config.rounds.unwrap_or(12);
    tracing::info!(seed = state.seed(), rounds, "match configured");
    println!("Koi-Koi — first to finish {rounds} round(s). Enter card numbers to play; 'save FILE' or 'quit' at any prompt.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    play(&mut state, rounds, &mut lines)
}

/// One prompt; `None` means the player quit (or stdin closed).
fn read_command(
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        None => Ok(None),
        Some(line) => {
            let line = line?.trim().to_string();
            if line == "q" || line == "quit" {
                Ok(None)
            } else {
                Ok(Some(line))
            }
        }
    }
}

fn play(
    state: &mut MatchState,
    rounds: u32,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    loop {
        match state.round().phase() {
            GamePhase::RoundEnd => {
                if let Some((player, yaku)) = state.round().initial_yaku() {
                    println!("\n{player} was dealt a hand yaku:");
                    display::print_yaku(std::slice::from_ref(yaku));
                }
                let (winner, points) = state
                    .round()
                    .outcome()
                    .map(|o| (o.winner, o.points))
                    .unwrap_or((None, 0));
                let result = state.finish_round_and_start_next()?;
                display::print_round_result(winner, points, &result.totals);

                if state.history().len() as u32 >= rounds {
                    println!("\nMatch over after {} round(s).", state.history().len());
                    return Ok(());
                }
                println!("\n--- Round {} ---", state.round_number());
            }
            GamePhase::ChoosingKoi => {
                println!("\nAnnounced yaku this round:");
                display::print_yaku(state.round().completed_yaku());
                let Some(answer) =
                    read_command("Koi-koi (k) to continue, shobu (s) to stop: ", lines)?
                else {
                    return Ok(());
                };
                match answer.as_str() {
                    "k" | "koi" | "koi-koi" => {
                        state.round_mut().make_koi_koi_decision(true)?;
                    }
                    "s" | "shobu" => {
                        state.round_mut().make_koi_koi_decision(false)?;
                    }
                    other => println!("unrecognized choice: {other}"),
                }
            }
            GamePhase::MatchingHand => {
                display::print_round(state.round());
                if !hand_turn(state, lines)? {
                    return Ok(());
                }
            }
            phase => anyhow::bail!("unexpected phase at prompt: {phase}"),
        }
    }
}

/// Runs one hand-card turn. Returns false when the player quits.
fn hand_turn(
    state: &mut MatchState,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<bool> {
    loop {
        let Some(answer) = read_command("Play which card? ", lines)? else {
            return Ok(false);
        };

        if let Some(path) = answer.strip_prefix("save ") {
            let snapshot = RoundSnapshot::capture(state.round());
            std::fs::write(path.trim(), snapshot.to_json()?)
                .with_context(|| format!("writing snapshot to {path}"))?;
            println!("saved to {path}");
            continue;
        }

        let card = match parse_card(&answer) {
            Ok(card) => card,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let selection = match state.round_mut().select_hand_card(card) {
            Ok(selection) => selection,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let outcome = match selection {
            HandSelection::NoMatches => {
                println!("no matches; {} goes to the field", display::card_line(card));
                state.round_mut().place_selected_card()?
            }
            HandSelection::Matches {
                matching,
                auto_capture,
            } => {
                let choice = if auto_capture {
                    matching[0]
                } else {
                    match choose_between(&matching, lines)? {
                        Some(choice) => choice,
                        None => return Ok(false),
                    }
                };
                state.round_mut().select_field_card(choice)?;
                state.round_mut().capture_cards()?
            }
        };

        return resolve_outcome(state.round_mut(), outcome, lines);
    }
}

/// Follows the automatic deck draw until the turn settles. Returns false
/// when the player quits.
fn resolve_outcome(
    round: &mut KoiKoiRound,
    mut outcome: TurnOutcome,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<bool> {
    loop {
        match outcome {
            TurnOutcome::DeckMatch { drawn, matching } => {
                println!("drawn from the deck: {}", display::card_line(drawn));
                let choice = if matching.len() == 2 {
                    match choose_between(&matching, lines)? {
                        Some(choice) => choice,
                        None => return Ok(false),
                    }
                } else {
                    matching[0]
                };
                round.select_field_card(choice)?;
                outcome = round.capture_cards()?;
            }
            TurnOutcome::NewYaku { ref yaku } => {
                println!("yaku completed:");
                display::print_yaku(yaku);
                return Ok(true);
            }
            TurnOutcome::TurnEnd | TurnOutcome::RoundEnd(_) => return Ok(true),
        }
    }
}

fn choose_between(
    matching: &[CardId],
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<CardId>> {
    println!("two cards match; choose one:");
    for &card in matching {
        println!("  {}", display::card_line(card));
    }
    loop {
        let Some(answer) = read_command("Capture which? ", lines)? else {
            return Ok(None);
        };
        if let Ok(card) = parse_card(&answer) {
            if matching.contains(&card) {
                return Ok(Some(card));
            }
        }
        println!("pick one of the listed cards");
    }
}

/// Card index from raw user input; malformed or out-of-range input is an
/// `InvalidCardIndex`.
fn parse_card(input: &str) -> Result<CardId, GameError> {
    let index = input
        .parse::<u8>()
        .map_err(|_| GameError::InvalidCardIndex(u8::MAX))?;
    CardId::new(index).ok_or(GameError::InvalidCardIndex(index))
}
