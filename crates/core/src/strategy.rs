use crate::{
    decisions_for, Card, CardDecision, Deck, DecisionEffect, DecisionProvider, PlaySource,
    RngState, TurnChoice, TurnView, FLOW_TOTAL,
};

/// Greedy single-ply heuristic for CPU seats. No lookahead into later
/// turns.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuStrategy;

/// Desirability of playing `decision` at the given total. Busting options
/// all score below -1000, penalized further the more they overshoot, so
/// the strategy can tell a bad play from a forced one.
pub fn candidate_score(decision: &CardDecision, total: i32) -> i32 {
    match decision.effect {
        DecisionEffect::SpecialWin => 10_000,
        DecisionEffect::Skip => 500,
        DecisionEffect::Reverse => 400,
        DecisionEffect::Value(delta) => {
            let result = total + delta;
            if result > FLOW_TOTAL {
                -1000 - (result - FLOW_TOTAL)
            } else if result == FLOW_TOTAL {
                150
            } else {
                300 + result
            }
        }
    }
}

/// Best decision the card itself offers, first-found on ties.
fn best_decision(card: Card, total: i32) -> CardDecision {
    let mut decisions = decisions_for(card, total);
    let mut best = 0;
    let mut best_score = i32::MIN;
    for (index, decision) in decisions.iter().enumerate() {
        let score = candidate_score(decision, total);
        if score > best_score {
            best_score = score;
            best = index;
        }
    }
    decisions.remove(best)
}

impl DecisionProvider for CpuStrategy {
    fn choose(&mut self, view: TurnView<'_>, deck: &mut Deck, rng: &mut RngState) -> TurnChoice {
        let mut best_score = i32::MIN;
        let mut best: Option<(usize, CardDecision)> = None;
        for (index, card) in view.hand.iter().enumerate() {
            for decision in decisions_for(*card, view.total) {
                let score = candidate_score(&decision, view.total);
                if score > best_score {
                    best_score = score;
                    best = Some((index, decision));
                }
            }
        }

        if best_score > -1000 {
            if let Some((index, decision)) = best.clone() {
                return TurnChoice {
                    source: PlaySource::Hand(index),
                    decision,
                };
            }
        }

        // Every hand option busts: draw blind and play whatever comes up,
        // with that card's own best decision. The drawn card is never
        // weighed against the hand and cannot go back.
        if let Some(drawn) = deck.draw_card(rng) {
            return TurnChoice {
                source: PlaySource::Drawn(drawn),
                decision: best_decision(drawn, view.total),
            };
        }

        // Nothing drawable: the least-bad hand play, bust or not.
        if let Some((index, decision)) = best {
            return TurnChoice {
                source: PlaySource::Hand(index),
                decision,
            };
        }

        // No candidate was scored at all; first card, first decision.
        let card = view.hand[0];
        TurnChoice {
            source: PlaySource::Hand(0),
            decision: decisions_for(card, view.total).remove(0),
        }
    }
}
