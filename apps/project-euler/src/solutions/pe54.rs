use std::path::Path;

use crate::data;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Category {
    HighCard,
    OnePair,
    TwoPairs,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

/// A comparable hand strength: category first, then the card values in
/// tie-break order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct HandRank {
    category: Category,
    tiebreak: Vec<u8>,
}

#[derive(Debug, Clone, Copy)]
struct Card {
    value: u8,
    suit: u8,
}

fn parse_card(s: &str) -> Option<Card> {
    let &[v, suit] = s.as_bytes() else {
        return None;
    };
    let value = b"23456789TJQKA".iter().position(|&c| c == v)? as u8 + 2;
    b"CDHS".contains(&suit).then_some(Card { value, suit })
}

fn rank(hand: &[Card; 5]) -> HandRank {
    let mut counts = [0u8; 15];
    for card in hand {
        counts[card.value as usize] += 1;
    }

    // Values ordered by multiplicity, then value, both descending.
    let mut groups: Vec<(u8, u8)> = (2..15u8)
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (counts[v as usize], v))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    let shape: Vec<u8> = groups.iter().map(|&(c, _)| c).collect();
    let mut tiebreak: Vec<u8> = groups.iter().map(|&(_, v)| v).collect();

    let flush = hand.iter().all(|c| c.suit == hand[0].suit);
    let straight = shape.len() == 5 && {
        if tiebreak == [14, 5, 4, 3, 2] {
            // Ace plays low in the wheel.
            tiebreak = vec![5, 4, 3, 2, 1];
            true
        } else {
            tiebreak[0] - tiebreak[4] == 4
        }
    };

    let category = match (straight, flush, shape.as_slice()) {
        (true, true, _) => Category::StraightFlush,
        (_, _, [4, 1]) => Category::FourOfAKind,
        (_, _, [3, 2]) => Category::FullHouse,
        (_, true, _) => Category::Flush,
        (true, _, _) => Category::Straight,
        (_, _, [3, 1, 1]) => Category::ThreeOfAKind,
        (_, _, [2, 2, 1]) => Category::TwoPairs,
        (_, _, [2, 1, 1, 1]) => Category::OnePair,
        _ => Category::HighCard,
    };

    HandRank { category, tiebreak }
}

fn parse_deal(line: &str, line_no: usize) -> Result<([Card; 5], [Card; 5])> {
    let cards = line
        .split_whitespace()
        .map(|s| {
            parse_card(s)
                .ok_or_else(|| Error::parse("poker.txt", line_no, format!("invalid card {:?}", s)))
        })
        .collect::<Result<Vec<_>>>()?;

    let [a0, a1, a2, a3, a4, b0, b1, b2, b3, b4] = cards[..] else {
        return Err(Error::parse(
            "poker.txt",
            line_no,
            format!("expected 10 cards, found {}", cards.len()),
        ));
    };
    Ok(([a0, a1, a2, a3, a4], [b0, b1, b2, b3, b4]))
}

fn player_one_wins(line: &str, line_no: usize) -> Result<bool> {
    let (p1, p2) = parse_deal(line, line_no)?;
    Ok(rank(&p1) > rank(&p2))
}

/// PE54: Poker Hands
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, "poker.txt")?;
    let mut wins = 0;
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if player_one_wins(line, i + 1)? {
            wins += 1;
        }
    }
    Ok(wins.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wins(line: &str) -> bool {
        player_one_wins(line, 1).unwrap()
    }

    #[test]
    fn test_statement_examples() {
        assert!(!wins("5H 5C 6S 7S KD 2C 3S 8S 8D TD"));
        assert!(wins("5D 8C 9S JS AC 2C 5C 7D 8S QH"));
        assert!(!wins("2D 9C AS AH AC 3D 6D 7D TD QD"));
        assert!(wins("4D 6S 9H QH QC 3D 6D 7H QD QS"));
        assert!(wins("2H 2D 4C 4D 4S 3C 3D 3S 9S 9D"));
    }

    #[test]
    fn test_wheel_is_lowest_straight() {
        assert!(!wins("AH 2D 3C 4S 5H 2C 3D 4H 5S 6C"));
        let (wheel, _) = parse_deal("AH 2D 3C 4S 5H 2C 3D 4H 5S 6C", 1).unwrap();
        assert_eq!(rank(&wheel).category, Category::Straight);
    }

    #[test]
    fn test_malformed_line() {
        assert!(parse_deal("5H 5C 6S", 3).is_err());
        assert!(parse_deal("1H 5C 6S 7S KD 2C 3S 8S 8D TD", 3).is_err());
    }

    #[test]
    #[ignore = "needs data/poker.txt"]
    fn test_solve() {
        let dir = data::default_dir();
        assert_eq!(solve(&dir).unwrap(), "376");
    }
}
