use koikoi_core::game::player::Player;
use koikoi_core::game::round::KoiKoiRound;
use koikoi_core::model::card::CardId;
use koikoi_core::scoring::yaku::YakuResult;

pub fn card_line(card: CardId) -> String {
    format!(
        "[{:>2}] {} ({}, month {})",
        card.value(),
        card,
        card.kind(),
        card.month()
    )
}

fn print_cards(label: &str, cards: &[CardId]) {
    println!("{label}:");
    if cards.is_empty() {
        println!("  (none)");
        return;
    }
    for &card in cards {
        println!("  {}", card_line(card));
    }
}

pub fn print_round(round: &KoiKoiRound) {
    let active = round.active_player();
    println!();
    println!("=== {} to act — {} ===", active, round.phase());
    println!(
        "month {} | deck {} cards | koi-koi count {}",
        round.current_month(),
        round.draw_pile().len(),
        round.koi_koi_count()
    );
    print_cards("Field", round.field().cards());
    print_cards("Your hand", round.hand(active).cards());
    print_cards("Your captured", round.captured(active).cards());
    print_cards(
        "Opponent captured",
        round.captured(active.opponent()).cards(),
    );
}

pub fn print_yaku(yaku: &[YakuResult]) {
    for result in yaku {
        println!("  {} — {} points", result.name, result.points);
    }
}

pub fn print_round_result(winner: Option<Player>, points: u32, totals: &[u32; 2]) {
    match winner {
        Some(player) => println!("\nRound over: {player} wins {points} points"),
        None => println!("\nRound over: drawn, no points"),
    }
    println!(
        "Totals — {}: {}, {}: {}",
        Player::One,
        totals[Player::One.index()],
        Player::Two,
        totals[Player::Two.index()]
    );
}
