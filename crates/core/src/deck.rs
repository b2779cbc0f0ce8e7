use crate::{Card, Rank, RngState, Suit};

/// Draw and discard piles for one round. The deck is the sole owner of
/// both; collaborators move cards only through the methods here.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    pub fn standard54() -> Self {
        let mut draw = Vec::with_capacity(54);
        for suit in Suit::ALL {
            for rank in Rank::STANDARD {
                draw.push(Card::standard(rank, suit));
            }
        }
        draw.push(Card::joker());
        draw.push(Card::joker());
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    /// Removes and returns the top card, reshuffling the discard pile back
    /// into the draw pile first when the draw pile is empty. `None` means
    /// both piles are exhausted; depletion is a game state, not an error.
    pub fn draw_card(&mut self, rng: &mut RngState) -> Option<Card> {
        if self.draw.is_empty() {
            self.reshuffle_discard(rng);
        }
        self.draw.pop()
    }

    pub fn reshuffle_discard(&mut self, rng: &mut RngState) {
        if self.discard.is_empty() {
            return;
        }
        self.draw.append(&mut self.discard);
        rng.shuffle(&mut self.draw);
    }

    pub fn can_draw(&self) -> bool {
        !self.draw.is_empty() || !self.discard.is_empty()
    }

    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }
}
