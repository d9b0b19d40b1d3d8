use clap::Parser;
use poker_hand::core::{BestHandSelector, Deck, PokerError, parse_cards};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::event;
use tracing_subscriber::EnvFilter;

/// Print the best five card poker hand out of a set of cards.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Cards to evaluate in two char notation, e.g. "6cAc2cKc3c4d5d".
    /// When missing, cards are dealt from a fresh deck.
    #[arg(short, long)]
    cards: Option<String>,

    /// How many cards to deal when no cards are given.
    #[arg(short = 'n', long, default_value_t = 7)]
    count: usize,

    /// Seed for the deck shuffle, for repeatable deals.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), PokerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let cards = match args.cards {
        Some(text) => parse_cards(&text)?,
        None => {
            let mut deck = match args.seed {
                Some(seed) => Deck::new_with_rng(&mut StdRng::seed_from_u64(seed)),
                None => Deck::new(),
            };
            event!(tracing::Level::DEBUG, count = args.count, "Dealing from a fresh deck");
            deck.draw_n(args.count)?
        }
    };

    let shown: Vec<String> = cards.iter().map(|c| c.short()).collect();
    println!("cards[{}]: {}", cards.len(), shown.join(" "));

    let (hand, category) = BestHandSelector::best5(&cards)?;
    println!("best: {hand}");
    println!("category: {category}");
    Ok(())
}
