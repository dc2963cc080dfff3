use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use deck_stats::battlelog::write_card_stats_csv_file;
use deck_stats::deck::{deck_cards, deck_usage};
use deck_stats::xlsx;
use deck_stats::{AnalysisResult, CardNameLookup, CardStats, MinGames, NameMap, RawNames, Session};
use std::collections::BTreeSet;

#[derive(Parser)]
#[command(name = "deck-stats")]
#[command(
    about = "Win/loss statistics per deck and opponent card from exported battle logs",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize one or more battle log files
    Info {
        /// Battle log CSV files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// List the decks played, with battle counts
    Decks {
        /// Battle log CSV files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// List every opponent card seen
    Cards {
        /// Battle log CSV files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Use base card names, ignoring evolutions
        #[arg(long)]
        no_evo: bool,
    },

    /// Win rates of one deck against each opponent card
    Analyze {
        /// Battle log CSV files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Deck identity as printed by `decks` (defaults to the first deck)
        #[arg(long, conflicts_with = "deck_index")]
        deck: Option<String>,

        /// Deck number as printed by `decks`
        #[arg(long)]
        deck_index: Option<usize>,

        /// Only count battles where the opponent used all of these cards
        #[arg(short, long, value_delimiter = ',')]
        filter: Vec<String>,

        /// Use base card names for opponent cards, ignoring evolutions
        #[arg(long)]
        no_evo: bool,

        /// Hide cards seen in fewer games (default depends on the number of cards)
        #[arg(long, conflicts_with = "all_cards")]
        min_games: Option<u32>,

        /// Show every card regardless of games played
        #[arg(long)]
        all_cards: bool,

        /// CSV file with `card,display` columns used for display names
        #[arg(long, env = "DECK_STATS_NAMES")]
        names: Option<PathBuf>,

        /// Write every card row to an .xlsx or .csv file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { inputs } => {
            info(&inputs)?;
        }
        Commands::Decks { inputs } => {
            decks(&inputs)?;
        }
        Commands::Cards { inputs, no_evo } => {
            cards(&inputs, no_evo)?;
        }
        Commands::Analyze {
            inputs,
            deck,
            deck_index,
            filter,
            no_evo,
            min_games,
            all_cards,
            names,
            output,
        } => {
            let min_games = match (all_cards, min_games) {
                (true, _) => MinGames::Off,
                (false, Some(n)) => MinGames::Fixed(n),
                (false, None) => MinGames::Auto,
            };
            let selection = Selection {
                deck,
                deck_index,
                filter,
                include_evolution: !no_evo,
                min_games,
            };
            analyze(&inputs, &selection, names.as_deref(), output.as_deref())?;
        }
    }

    Ok(())
}

struct Selection {
    deck: Option<String>,
    deck_index: Option<usize>,
    filter: Vec<String>,
    include_evolution: bool,
    min_games: MinGames,
}

fn load_session(inputs: &[PathBuf]) -> Result<Session> {
    let mut session = Session::new();
    session
        .load_files(inputs)
        .context("Failed to read battle logs")?;
    if session.is_empty() {
        anyhow::bail!("No battles found in {} file(s)", inputs.len());
    }
    Ok(session)
}

fn info(inputs: &[PathBuf]) -> Result<()> {
    let session = load_session(inputs)?;

    let columns: BTreeSet<&str> = session
        .records()
        .iter()
        .flat_map(|r| r.fields().map(|(name, _)| name))
        .collect();

    println!("Files: {}", inputs.len());
    println!("Columns: {}", columns.len());
    println!("Battles: {}", session.records().len());
    println!("Decks: {}", session.decks().len());
    println!("Opponent cards: {}", session.opponent_cards().len());

    Ok(())
}

fn decks(inputs: &[PathBuf]) -> Result<()> {
    let session = load_session(inputs)?;

    for (idx, (deck, battles)) in deck_usage(session.records()).iter().enumerate() {
        println!("{:>3}. [{} battles] {}", idx + 1, battles, deck);
    }

    Ok(())
}

fn cards(inputs: &[PathBuf], no_evo: bool) -> Result<()> {
    let mut session = load_session(inputs)?;
    session.set_include_evolution(!no_evo);

    for card in session.opponent_cards() {
        println!("{}", card);
    }

    Ok(())
}

fn analyze(
    inputs: &[PathBuf],
    selection: &Selection,
    names: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let mut session = load_session(inputs)?;

    if let Some(deck) = &selection.deck {
        session.select_deck(deck)?;
    } else if let Some(index) = selection.deck_index {
        let deck = index
            .checked_sub(1)
            .and_then(|i| session.decks().get(i))
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!("Deck number {} not found ({} decks)", index, session.decks().len())
            })?;
        session.select_deck(&deck)?;
    }

    session.set_include_evolution(selection.include_evolution);
    session.set_min_games(selection.min_games);

    let known_cards = session.opponent_cards();
    for card in &selection.filter {
        if !known_cards.contains(card) {
            log::warn!("Filter card '{}' never appears in the opponent's cards", card);
        }
    }
    session.set_filter_cards(selection.filter.clone());

    let lookup: Box<dyn CardNameLookup> = match names {
        Some(path) => Box::new(NameMap::from_path(path).context("Failed to read name table")?),
        None => Box::new(RawNames),
    };

    let result = session
        .analysis()
        .ok_or_else(|| anyhow::anyhow!("No deck selected"))?
        .with_display_names(lookup.as_ref());

    if let MinGames::Fixed(n) = selection.min_games {
        if n > result.max_card_games() {
            log::warn!(
                "--min-games {} exceeds the most games any card has ({})",
                n,
                result.max_card_games()
            );
        }
    }

    let deck = session.selected_deck().unwrap_or_default();
    print_analysis(&session, &result, deck);

    if let Some(path) = output {
        write_output(&result, deck, session.filter_cards(), path)?;
    }

    Ok(())
}

fn print_analysis(session: &Session, result: &AnalysisResult, deck: &str) {
    println!("Deck: {}", deck_cards(deck).join(" | "));
    if session.filter_cards().is_empty() {
        println!("Battles: all");
    } else {
        println!("Battles with: {}", session.filter_cards().join(", "));
    }

    let overall = &result.overall;
    println!(
        "Win rate {}  ({} games, {} wins, {} losses)",
        overall.win_rate_label(),
        overall.total_games,
        overall.win_count,
        overall.loss_count()
    );

    let rows = session.visible_card_stats(result);
    let hidden = result.card_stats.len() - rows.len();

    println!("\n{:<28} {:>6} {:>6} {:>6}", "Card", "Win%", "Wins", "Games");
    println!("{:-<50}", "");
    for stats in &rows {
        print_row(stats);
    }

    if hidden > 0 {
        let threshold = session.min_games().threshold(result).unwrap_or(0);
        println!("({} cards with fewer than {} games hidden)", hidden, threshold);
    }
}

fn print_row(stats: &CardStats) {
    println!(
        "{:<28} {:>5}% {:>6} {:>6}",
        truncate_name(&stats.display_name, 28),
        stats.win_rate,
        stats.win_count,
        stats.total_games
    );
}

fn write_output(result: &AnalysisResult, deck: &str, filter: &[String], path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let sorted = result.clone().sorted();

    match ext.as_str() {
        "xlsx" => {
            println!("Writing Excel file: {}", path.display());
            xlsx::write_analysis_to_xlsx(&sorted, deck, filter, path)
                .context("Failed to write Excel file")?;
        }
        "csv" => {
            println!("Writing CSV file: {}", path.display());
            write_card_stats_csv_file(&sorted.card_stats, path)
                .context("Failed to write CSV file")?;
        }
        _ => {
            anyhow::bail!("Unsupported output format: {}", ext);
        }
    }

    Ok(())
}

/// Truncate a name to fit in a column
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else {
        let kept: String = name.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
