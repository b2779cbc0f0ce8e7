use hundredone_core::{
    decisions_for, flow_restart, Card, DecisionEffect, Rank, Suit, SPECIAL_TOTAL,
};

macro_rules! default_value_case {
    ($name:ident, $rank:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!($rank.default_value(), $expected);
        }
    };
}

default_value_case!(default_two, Rank::Two, 2);
default_value_case!(default_three, Rank::Three, 3);
default_value_case!(default_four, Rank::Four, 4);
default_value_case!(default_five, Rank::Five, 5);
default_value_case!(default_six, Rank::Six, 6);
default_value_case!(default_seven, Rank::Seven, 7);
default_value_case!(default_eight, Rank::Eight, 0);
default_value_case!(default_nine, Rank::Nine, 0);
default_value_case!(default_ten, Rank::Ten, 10);
default_value_case!(default_jack, Rank::Jack, 10);
default_value_case!(default_queen, Rank::Queen, 20);
default_value_case!(default_king, Rank::King, 30);
default_value_case!(default_ace, Rank::Ace, 11);
default_value_case!(default_joker, Rank::Joker, 50);

macro_rules! single_value_case {
    ($name:ident, $rank:expr, $delta:expr) => {
        #[test]
        fn $name() {
            let decisions = decisions_for(Card::standard($rank, Suit::Clubs), 40);
            assert_eq!(decisions.len(), 1);
            assert_eq!(decisions[0].effect, DecisionEffect::Value($delta));
        }
    };
}

single_value_case!(two_plays_plus_two, Rank::Two, 2);
single_value_case!(three_plays_plus_three, Rank::Three, 3);
single_value_case!(four_plays_plus_four, Rank::Four, 4);
single_value_case!(five_plays_plus_five, Rank::Five, 5);
single_value_case!(six_plays_plus_six, Rank::Six, 6);
single_value_case!(seven_plays_plus_seven, Rank::Seven, 7);
single_value_case!(jack_plays_plus_ten, Rank::Jack, 10);
single_value_case!(queen_plays_plus_twenty, Rank::Queen, 20);
single_value_case!(king_plays_plus_thirty, Rank::King, 30);

#[test]
fn ace_offers_one_or_eleven() {
    let effects: Vec<_> = decisions_for(Card::standard(Rank::Ace, Suit::Hearts), 0)
        .into_iter()
        .map(|decision| decision.effect)
        .collect();
    assert_eq!(
        effects,
        vec![DecisionEffect::Value(1), DecisionEffect::Value(11)]
    );
}

#[test]
fn ten_offers_minus_ten_or_plus_ten() {
    let effects: Vec<_> = decisions_for(Card::standard(Rank::Ten, Suit::Hearts), 0)
        .into_iter()
        .map(|decision| decision.effect)
        .collect();
    assert_eq!(
        effects,
        vec![DecisionEffect::Value(-10), DecisionEffect::Value(10)]
    );
}

#[test]
fn eight_offers_only_the_skip() {
    let decisions = decisions_for(Card::standard(Rank::Eight, Suit::Spades), 0);
    assert_eq!(decisions.len(), 1);
    assert_eq!(decisions[0].effect, DecisionEffect::Skip);
}

#[test]
fn nine_offers_only_the_reverse() {
    let decisions = decisions_for(Card::standard(Rank::Nine, Suit::Spades), 0);
    assert_eq!(decisions.len(), 1);
    assert_eq!(decisions[0].effect, DecisionEffect::Reverse);
}

#[test]
fn joker_off_hundred_adds_fifty() {
    for total in [0, 50, 99, 101, 150] {
        let decisions = decisions_for(Card::joker(), total);
        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].effect, DecisionEffect::Value(50));
    }
}

#[test]
fn joker_at_hundred_wins_outright() {
    let decisions = decisions_for(Card::joker(), SPECIAL_TOTAL);
    assert_eq!(decisions.len(), 1);
    assert_eq!(decisions[0].effect, DecisionEffect::SpecialWin);
}

#[test]
fn special_win_appears_only_at_exactly_hundred() {
    for total in 0..=150 {
        let has_special = decisions_for(Card::joker(), total)
            .iter()
            .any(|decision| decision.effect == DecisionEffect::SpecialWin);
        assert_eq!(has_special, total == SPECIAL_TOTAL);
    }
}

#[test]
fn decision_lists_are_never_empty() {
    let mut cards = Vec::new();
    for suit in Suit::ALL {
        for rank in Rank::STANDARD {
            cards.push(Card::standard(rank, suit));
        }
    }
    cards.push(Card::joker());
    for card in cards {
        for total in [0, 1, 99, 100, 101] {
            assert!(!decisions_for(card, total).is_empty());
        }
    }
}

#[test]
fn value_labels_carry_their_sign() {
    let ten = decisions_for(Card::standard(Rank::Ten, Suit::Hearts), 40);
    assert_eq!(ten[0].label, "-10");
    assert_eq!(ten[1].label, "+10");
    let king = decisions_for(Card::standard(Rank::King, Suit::Spades), 0);
    assert_eq!(king[0].label, "+30");
}

macro_rules! flow_restart_case {
    ($name:ident, $rank:expr, $value:expr, $reverses:expr) => {
        #[test]
        fn $name() {
            let restart = flow_restart(Card::standard($rank, Suit::Diamonds));
            assert_eq!(restart.value, $value);
            assert_eq!(restart.reverses, $reverses);
        }
    };
}

flow_restart_case!(flow_two, Rank::Two, 2, false);
flow_restart_case!(flow_seven, Rank::Seven, 7, false);
flow_restart_case!(flow_eight, Rank::Eight, 0, false);
flow_restart_case!(flow_nine_reverses, Rank::Nine, 0, true);
flow_restart_case!(flow_ten, Rank::Ten, 10, false);
flow_restart_case!(flow_jack, Rank::Jack, 10, false);
flow_restart_case!(flow_queen, Rank::Queen, 20, false);
flow_restart_case!(flow_king, Rank::King, 30, false);
flow_restart_case!(flow_ace, Rank::Ace, 11, false);

#[test]
fn flow_joker_restarts_at_fifty() {
    let restart = flow_restart(Card::joker());
    assert_eq!(restart.value, 50);
    assert!(!restart.reverses);
}

#[test]
fn card_display_forms() {
    assert_eq!(Card::standard(Rank::Ace, Suit::Hearts).to_string(), "A♥");
    assert_eq!(Card::standard(Rank::Ten, Suit::Spades).to_string(), "10♠");
    assert_eq!(Card::joker().to_string(), "JOKER");
}
