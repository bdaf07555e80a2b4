use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

const SQUARES: usize = 40;
const GO: usize = 0;
const JAIL: usize = 10;
const GO_TO_JAIL: usize = 30;
const COMMUNITY_CHEST: [usize; 3] = [2, 17, 33];
const CHANCE: [usize; 3] = [7, 22, 36];

const SEED: u64 = 84;
const TURNS: usize = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Card {
    Stay,
    Goto(usize),
    NextRailway,
    NextUtility,
    BackThree,
}

/// A shuffled pile of sixteen cards, drawn from the top and returned to the
/// bottom.
struct Deck {
    cards: Vec<Card>,
    top: usize,
}

impl Deck {
    fn new(special: &[Card], rng: &mut impl Rng) -> Self {
        let mut cards = special.to_vec();
        cards.resize(16, Card::Stay);
        cards.shuffle(rng);
        Deck { cards, top: 0 }
    }

    fn draw(&mut self) -> Card {
        let card = self.cards[self.top];
        self.top = (self.top + 1) % self.cards.len();
        card
    }
}

fn next_railway(pos: usize) -> usize {
    ((pos + 5) / 10 * 10 + 5) % SQUARES
}

fn next_utility(pos: usize) -> usize {
    if (12..28).contains(&pos) { 28 } else { 12 }
}

struct Game {
    rng: StdRng,
    sides: u32,
    pos: usize,
    doubles: u32,
    chance: Deck,
    chest: Deck,
}

impl Game {
    fn new(sides: u32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let chest = Deck::new(&[Card::Goto(GO), Card::Goto(JAIL)], &mut rng);
        let chance = Deck::new(
            &[
                Card::Goto(GO),
                Card::Goto(JAIL),
                Card::Goto(11),
                Card::Goto(24),
                Card::Goto(39),
                Card::Goto(5),
                Card::NextRailway,
                Card::NextRailway,
                Card::NextUtility,
                Card::BackThree,
            ],
            &mut rng,
        );
        Game {
            rng,
            sides,
            pos: GO,
            doubles: 0,
            chance,
            chest,
        }
    }

    /// Play one turn and return the square it ends on.
    fn turn(&mut self) -> usize {
        let a = self.rng.gen_range(1..=self.sides);
        let b = self.rng.gen_range(1..=self.sides);
        self.doubles = if a == b { self.doubles + 1 } else { 0 };

        if self.doubles == 3 {
            self.doubles = 0;
            self.pos = JAIL;
            return self.pos;
        }

        self.pos = (self.pos + (a + b) as usize) % SQUARES;
        if CHANCE.contains(&self.pos) {
            self.pos = match self.chance.draw() {
                Card::Stay => self.pos,
                Card::Goto(square) => square,
                Card::NextRailway => next_railway(self.pos),
                Card::NextUtility => next_utility(self.pos),
                Card::BackThree => (self.pos + SQUARES - 3) % SQUARES,
            };
        }
        // Going back three from 36 lands on a community chest.
        if COMMUNITY_CHEST.contains(&self.pos) {
            if let Card::Goto(square) = self.chest.draw() {
                self.pos = square;
            }
        }
        if self.pos == GO_TO_JAIL {
            self.pos = JAIL;
        }
        self.pos
    }
}

/// Visits to each square over `turns` simulated turns with two dice of
/// `sides` faces.
fn simulate(sides: u32, turns: usize, seed: u64) -> [u64; SQUARES] {
    let mut game = Game::new(sides, seed);
    let mut visits = [0u64; SQUARES];
    for _ in 0..turns {
        visits[game.turn()] += 1;
    }
    visits
}

/// The three most visited squares as a six-digit string.
fn modal_string(visits: &[u64; SQUARES]) -> String {
    let mut order: Vec<usize> = (0..SQUARES).collect();
    order.sort_by_key(|&sq| std::cmp::Reverse(visits[sq]));
    order.iter().take(3).map(|sq| format!("{:02}", sq)).collect()
}

/// PE84: Monopoly Odds
pub fn solve() -> String {
    let visits = simulate(4, TURNS, SEED);
    for (square, &count) in visits.iter().enumerate() {
        debug!(square, probability = count as f64 / TURNS as f64);
    }
    modal_string(&visits)
}
