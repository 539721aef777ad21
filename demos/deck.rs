//! Walk through the main group operations on a fresh deck.

use std::time::{SystemTime, UNIX_EPOCH};

use cardpile::{DeckOptions, Group, perfect_shuffle, reverse, shuffle_seeded};

fn show(label: &str, group: &Group) {
    let up = group.face_up_flags().iter().filter(|&&up| up).count();
    println!("{label:<12} {group} ({} cards, {up} face-up)", group.len());
}

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut deck = Group::from_options(&DeckOptions::default().with_jokers(2));
    show("deck", &deck);

    shuffle_seeded(&mut deck, seed);
    println!("seed         {seed}");
    show("shuffled", &deck);

    let mut hand = deck.draw(5);
    hand.flip_all();
    show("hand", &hand);
    show("deck", &deck);

    hand.sort();
    show("sorted hand", &hand);

    let middle = deck.draw_at(10, 20);
    deck.insert_bottom(middle);
    show("cut", &deck);

    deck.flip(-3, -1);
    if let Some(card) = deck.card(-2) {
        println!("second card  {card}");
    }

    reverse(&mut hand);
    show("reversed", &hand);

    deck.insert(hand);
    perfect_shuffle(&mut deck);
    show("reshuffled", &deck);
}
