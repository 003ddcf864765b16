//! Game integration tests.

use std::collections::HashSet;

use bjrl::{
    AGENT, ActionError, Card, DEALER, DECK_SIZE, DealError, Deck, Game, GameState, Hand,
    HandStatus, Observation, StatusError, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn dealt_game(draws: &[Card]) -> Game {
    let mut game = Game::new(Deck::from_cards(draws.to_vec()));
    game.deal().unwrap();
    game
}

#[test]
fn new_deck_has_52_unique_cards() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    let total: u32 = deck.cards().map(|c| u32::from(c.value())).sum();
    assert_eq!(total, 340);
}

#[test]
fn card_values_and_symbols() {
    assert_eq!(card(Suit::Clubs, 1).value(), 1);
    assert_eq!(card(Suit::Hearts, 7).value(), 7);
    assert_eq!(card(Suit::Spades, 10).value(), 10);
    assert_eq!(card(Suit::Diamonds, 11).value(), 10);
    assert_eq!(card(Suit::Diamonds, 13).value(), 10);
    assert_eq!(card(Suit::Clubs, 1).to_string(), "A♣");
    assert_eq!(card(Suit::Diamonds, 10).to_string(), "10♦");
    assert_eq!(card(Suit::Spades, 12).to_string(), "Q♠");
}

#[test]
fn dealt_and_remaining_cards_partition_the_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    let mut dealt = Vec::new();
    for expected_len in (DECK_SIZE - 10..DECK_SIZE).rev() {
        dealt.push(deck.deal_card().unwrap());
        assert_eq!(deck.len(), expected_len);
    }

    let remaining: Vec<Card> = deck.cards().copied().collect();
    assert!(dealt.iter().all(|c| !remaining.contains(c)));

    let mut all: Vec<Card> = dealt.into_iter().chain(remaining).collect();
    all.sort_unstable();
    let mut original: Vec<Card> = Deck::new().cards().copied().collect();
    original.sort_unstable();
    assert_eq!(all, original);
}

#[test]
fn empty_deck_refuses_to_deal() {
    let mut deck = Deck::from_cards(vec![card(Suit::Hearts, 2)]);
    assert_eq!(deck.deal_card().unwrap(), card(Suit::Hearts, 2));
    assert!(deck.is_empty());
    assert_eq!(deck.deal_card().unwrap_err(), DealError::EmptyDeck);
}

#[test]
fn initial_deal_gives_two_cards_per_player_in_order() {
    let game = dealt_game(&[
        card(Suit::Clubs, 1),
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 3),
        card(Suit::Clubs, 4),
        card(Suit::Clubs, 5),
    ]);

    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.turn(), AGENT);
    assert_eq!(
        game.agent().hand().cards(),
        &[card(Suit::Clubs, 1), card(Suit::Clubs, 2)]
    );
    assert_eq!(
        game.dealer().hand().cards(),
        &[card(Suit::Clubs, 3), card(Suit::Clubs, 4)]
    );
    assert_eq!(game.deck().len(), 1);
    assert_eq!(Observation::from_game(&game).unwrap(), Observation::new(3, 3));
}

#[test]
fn dealing_with_too_few_cards_fails() {
    let mut game = Game::new(Deck::from_cards(vec![
        card(Suit::Clubs, 9),
        card(Suit::Clubs, 5),
        card(Suit::Hearts, 7),
    ]));
    assert_eq!(game.deal().unwrap_err(), DealError::EmptyDeck);
}

#[test]
fn run_shuffles_and_deals_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut game = Game::new(Deck::new());
    game.run(&mut rng).unwrap();

    assert_eq!(game.deck().len(), DECK_SIZE - 4);
    assert_eq!(game.agent().hand().len(), 2);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.run(&mut rng).unwrap_err(), DealError::InvalidState);
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn actions_require_a_dealt_round_in_progress() {
    let mut game = Game::new(Deck::new());
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn hand_total_tracks_card_values() {
    let mut hand = Hand::new();
    let cards = [
        card(Suit::Hearts, 1),
        card(Suit::Spades, 13),
        card(Suit::Clubs, 4),
        card(Suit::Diamonds, 6),
    ];

    let mut expected = 0;
    for c in cards {
        hand.add_card(c);
        expected += c.value();
        assert_eq!(hand.total_value(), expected);
        assert_eq!(hand.status(), HandStatus::Valid);
    }
    assert_eq!(hand.total_value(), 21);
    assert_eq!(hand.evaluate(), HandStatus::Valid);

    hand.add_card(card(Suit::Clubs, 1));
    assert_eq!(hand.total_value(), 22);
    assert!(hand.is_busted());
    assert_eq!(hand.evaluate(), HandStatus::Busted);
    assert_eq!(hand.status(), HandStatus::Busted);
}

#[test]
fn hand_status_only_moves_forward() {
    let mut hand = Hand::new();
    assert_eq!(
        hand.settle(HandStatus::Valid).unwrap_err(),
        StatusError::Settled {
            from: HandStatus::Valid,
            to: HandStatus::Valid,
        }
    );
    hand.settle(HandStatus::Win).unwrap();
    assert_eq!(
        hand.settle(HandStatus::Draw).unwrap_err(),
        StatusError::Settled {
            from: HandStatus::Win,
            to: HandStatus::Draw,
        }
    );
    assert_eq!(hand.status(), HandStatus::Win);

    let mut busted = Hand::new();
    busted.add_card(card(Suit::Hearts, 10));
    busted.add_card(card(Suit::Spades, 10));
    busted.add_card(card(Suit::Clubs, 2));
    assert_eq!(busted.status(), HandStatus::Busted);
    assert!(busted.settle(HandStatus::Win).is_err());
    busted.settle(HandStatus::Loss).unwrap();
    assert_eq!(busted.status(), HandStatus::Loss);
}

#[test]
fn dealer_stands_immediately_from_17() {
    for dealer_second in 7..=10 {
        let mut game = dealt_game(&[
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Hearts, 10),
            card(Suit::Spades, dealer_second),
            card(Suit::Clubs, 2),
        ]);
        game.stand().unwrap();

        assert_eq!(game.dealer().hand().len(), 2);
        assert_eq!(game.deck().len(), 1);
        assert_eq!(game.state(), GameState::RoundOver);
    }
}

#[test]
fn dealer_hits_until_reaching_17() {
    let mut game = dealt_game(&[
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 9),
        card(Suit::Hearts, 2),
        card(Suit::Spades, 3),
        card(Suit::Clubs, 4),
        card(Suit::Diamonds, 5),
        card(Suit::Hearts, 6),
        card(Suit::Spades, 13),
    ]);
    game.stand().unwrap();

    let dealer = game.dealer().hand();
    assert_eq!(dealer.len(), 5);
    assert_eq!(dealer.total_value(), 20);
    assert_eq!(game.deck().len(), 1);
    assert_eq!(game.scores(), &[19, 20]);
    assert_eq!(game.agent().hand().status(), HandStatus::Loss);
    assert_eq!(dealer.status(), HandStatus::Win);
    assert_eq!(game.winners(), &[DEALER]);
}

#[test]
fn higher_score_wins() {
    let mut game = dealt_game(&[
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 12),
        card(Suit::Hearts, 10),
        card(Suit::Spades, 8),
    ]);
    game.stand().unwrap();

    assert_eq!(game.scores(), &[20, 18]);
    assert_eq!(game.agent().hand().status(), HandStatus::Win);
    assert_eq!(game.dealer().hand().status(), HandStatus::Loss);
    assert_eq!(game.winners(), &[AGENT]);
}

#[test]
fn tie_marks_both_hands_as_draw_but_keeps_winners() {
    let mut game = dealt_game(&[
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 9),
        card(Suit::Hearts, 10),
        card(Suit::Spades, 9),
    ]);
    game.stand().unwrap();

    assert_eq!(game.scores(), &[19, 19]);
    assert_eq!(game.agent().hand().status(), HandStatus::Draw);
    assert_eq!(game.dealer().hand().status(), HandStatus::Draw);
    assert_eq!(game.winners(), &[AGENT, DEALER]);
}

#[test]
fn agent_bust_passes_turn_to_dealer_and_loses() {
    let mut game = dealt_game(&[
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 9),
        card(Suit::Hearts, 10),
        card(Suit::Spades, 8),
        card(Suit::Clubs, 5),
    ]);
    assert_eq!(game.hit().unwrap(), card(Suit::Clubs, 5));

    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.turn(), DEALER);
    assert_eq!(game.scores(), &[0, 18]);
    assert_eq!(game.agent().hand().status(), HandStatus::Loss);
    assert_eq!(game.dealer().hand().status(), HandStatus::Win);
}

#[test]
fn dealer_bust_gives_agent_the_win() {
    let mut game = dealt_game(&[
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 2),
        card(Suit::Hearts, 10),
        card(Suit::Spades, 6),
        card(Suit::Clubs, 13),
    ]);
    game.stand().unwrap();

    assert_eq!(game.dealer().hand().total_value(), 26);
    assert_eq!(game.scores(), &[12, 0]);
    assert_eq!(game.agent().hand().status(), HandStatus::Win);
    assert_eq!(game.dealer().hand().status(), HandStatus::Loss);
}

#[test]
fn both_busting_is_a_draw() {
    let mut game = dealt_game(&[
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 9),
        card(Suit::Hearts, 10),
        card(Suit::Spades, 6),
        card(Suit::Clubs, 5),
        card(Suit::Diamonds, 10),
    ]);
    game.hit().unwrap();

    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.scores(), &[0, 0]);
    assert_eq!(game.agent().hand().status(), HandStatus::Draw);
    assert_eq!(game.dealer().hand().status(), HandStatus::Draw);
    assert_eq!(game.winners(), &[AGENT, DEALER]);
}

#[test]
fn dealer_running_out_of_cards_is_an_error() {
    let mut game = dealt_game(&[
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 9),
        card(Suit::Hearts, 2),
        card(Suit::Spades, 3),
    ]);
    assert_eq!(game.stand().unwrap_err(), ActionError::NoCards);
}
