//! Kuhn poker: cards, actions, betting histories, and game rules.
//!
//! Kuhn poker is a two-player zero-sum betting game small enough to solve
//! exactly, which makes it the standard validation target for CFR
//! implementations.
//!
//! ## Rules
//!
//! - 3 cards: Jack (0), Queen (1), King (2)
//! - Both players ante 1 chip and receive one private card
//! - Player 0 acts first; each turn offers the same two actions:
//!   pass (check, or fold facing a bet) and bet (bet, or call facing one)
//! - Higher card wins at showdown; there are no ties
//!
//! Every hand ends within three actions. The five terminal betting
//! sequences and their payoffs to player 0 are:
//!
//! ```text
//! "pp"   check, check       -> showdown for 1
//! "bb"   bet, call          -> showdown for 2
//! "pbb"  check, bet, call   -> showdown for 2
//! "bp"   bet, fold          -> +1 (bettor takes the ante)
//! "pbp"  check, bet, fold   -> -1 (player 0 folded)
//! ```
//!
//! Any other sequence of two or more actions is unreachable under these
//! rules and is treated as a fatal invariant violation, never a zero
//! payoff.

use std::fmt;

use rand::Rng;

/// Number of players in a hand.
pub const NUM_PLAYERS: usize = 2;

/// Number of actions available at every decision point.
pub const NUM_ACTIONS: usize = 2;

/// Maximum number of actions in a single hand.
pub const MAX_HISTORY: usize = 3;

/// The full deck: 0 = Jack, 1 = Queen, 2 = King.
pub const DECK: [u8; 3] = [0, 1, 2];

/// Actions in Kuhn poker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KuhnAction {
    /// Pass (check if no bet is outstanding, fold if facing a bet).
    Pass,
    /// Bet (bet if none is outstanding, call if facing one).
    Bet,
}

impl KuhnAction {
    /// All actions in decision order: pass first, bet second.
    pub const ALL: [KuhnAction; NUM_ACTIONS] = [KuhnAction::Pass, KuhnAction::Bet];

    /// One-character symbol used in history strings and info set keys.
    pub fn symbol(&self) -> char {
        match self {
            KuhnAction::Pass => 'p',
            KuhnAction::Bet => 'b',
        }
    }
}

impl fmt::Display for KuhnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KuhnAction::Pass => write!(f, "Pass"),
            KuhnAction::Bet => write!(f, "Bet"),
        }
    }
}

/// The public betting history of one hand.
///
/// A fixed-capacity sequence of actions that is cheap to copy, so each
/// recursive step of the solver owns its own extended copy instead of
/// mutating a shared string. `Display` renders the compact symbol form
/// (`"pbp"`) used in information set keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct History {
    actions: [KuhnAction; MAX_HISTORY],
    len: u8,
}

impl History {
    /// The empty history at the root of a hand.
    pub const fn new() -> Self {
        Self {
            actions: [KuhnAction::Pass; MAX_HISTORY],
            len: 0,
        }
    }

    /// Return a copy of this history extended by one action.
    pub fn push(mut self, action: KuhnAction) -> Self {
        assert!(
            (self.len as usize) < MAX_HISTORY,
            "betting history exceeded {} actions",
            MAX_HISTORY
        );
        self.actions[self.len as usize] = action;
        self.len += 1;
        self
    }

    /// Number of actions taken so far.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True at the root of a hand.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The actions taken so far, in order.
    pub fn actions(&self) -> &[KuhnAction] {
        &self.actions[..self.len as usize]
    }

    /// Index of the player to act: players alternate, player 0 first.
    pub fn player_to_act(&self) -> usize {
        self.len() % NUM_PLAYERS
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in self.actions() {
            write!(f, "{}", action.symbol())?;
        }
        Ok(())
    }
}

/// Check whether a hand is over.
///
/// The classification is an explicit table over full histories. Sequences
/// that cannot occur in a two-action, two-player game truncated at depth 3
/// indicate a defect in the caller and panic.
pub fn is_terminal(history: &History) -> bool {
    use KuhnAction::{Bet, Pass};

    match history.actions() {
        [] | [_] | [Pass, Bet] => false,
        [Pass, Pass] | [Bet, Pass] | [Bet, Bet] | [Pass, Bet, Pass] | [Pass, Bet, Bet] => true,
        _ => panic!("betting sequence \"{}\" cannot occur", history),
    }
}

/// Payoff of a terminal history, expressed as value to player 0.
///
/// Callers flip the sign when asking from player 1's perspective.
///
/// # Panics
/// Panics when `history` is not one of the five terminal sequences.
pub fn payoff_to_first_player(cards: [u8; NUM_PLAYERS], history: &History) -> f64 {
    use KuhnAction::{Bet, Pass};

    let showdown = |stake: f64| if cards[0] > cards[1] { stake } else { -stake };

    match history.actions() {
        // Check, check: showdown for the antes only.
        [Pass, Pass] => showdown(1.0),
        // Bet met by a call: showdown for the doubled stake.
        [Bet, Bet] | [Pass, Bet, Bet] => showdown(2.0),
        // Bet, fold: the bettor takes the opponent's ante, cards unseen.
        [Bet, Pass] => 1.0,
        // Check, bet, fold: player 0 surrenders the ante.
        [Pass, Bet, Pass] => -1.0,
        _ => panic!("no payoff for non-terminal history \"{}\"", history),
    }
}

/// Information set key: the acting player's private card joined with the
/// public history, e.g. `"0/"` at the root or `"2/pb"` facing a bet after
/// a check.
pub fn info_set_key(card: u8, history: &History) -> String {
    format!("{}/{}", card, history)
}

/// Deal two distinct private cards uniformly at random.
///
/// Partial Fisher-Yates over the 3-card deck; the first two cards go to
/// players 0 and 1.
pub fn deal<R: Rng>(rng: &mut R) -> [u8; NUM_PLAYERS] {
    let mut deck = DECK;
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range(0..=i);
        deck.swap(i, j);
    }
    [deck[0], deck[1]]
}

/// Display name for a card rank.
pub fn card_name(card: u8) -> &'static str {
    match card {
        0 => "Jack",
        1 => "Queen",
        2 => "King",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn history_of(actions: &[KuhnAction]) -> History {
        actions.iter().fold(History::new(), |h, &a| h.push(a))
    }

    #[test]
    fn history_push_copies() {
        let root = History::new();
        let after_bet = root.push(KuhnAction::Bet);

        // The original value is untouched; the extension owns its copy.
        assert!(root.is_empty());
        assert_eq!(after_bet.len(), 1);
        assert_eq!(after_bet.to_string(), "b");
        assert_eq!(after_bet.player_to_act(), 1);
    }

    #[test]
    fn history_display_matches_symbols() {
        use KuhnAction::{Bet, Pass};
        assert_eq!(History::new().to_string(), "");
        assert_eq!(history_of(&[Pass, Bet, Pass]).to_string(), "pbp");
        assert_eq!(history_of(&[Bet, Bet]).to_string(), "bb");
    }

    #[test]
    fn terminal_classification() {
        use KuhnAction::{Bet, Pass};

        for non_terminal in [&[][..], &[Pass], &[Bet], &[Pass, Bet]] {
            assert!(
                !is_terminal(&history_of(non_terminal)),
                "\"{}\" should not be terminal",
                history_of(non_terminal)
            );
        }
        for terminal in [
            &[Pass, Pass][..],
            &[Bet, Pass],
            &[Bet, Bet],
            &[Pass, Bet, Pass],
            &[Pass, Bet, Bet],
        ] {
            assert!(
                is_terminal(&history_of(terminal)),
                "\"{}\" should be terminal",
                history_of(terminal)
            );
        }
    }

    #[test]
    #[should_panic(expected = "cannot occur")]
    fn impossible_history_is_fatal() {
        use KuhnAction::Pass;
        // "ppp" cannot arise: "pp" already ends the hand.
        is_terminal(&history_of(&[Pass, Pass, Pass]));
    }

    #[test]
    fn showdown_payoffs() {
        use KuhnAction::{Bet, Pass};

        // Check, check: single ante changes hands.
        assert_eq!(payoff_to_first_player([2, 0], &history_of(&[Pass, Pass])), 1.0);
        assert_eq!(payoff_to_first_player([0, 1], &history_of(&[Pass, Pass])), -1.0);

        // Bet-call pots pay double, in either opening order.
        assert_eq!(payoff_to_first_player([2, 0], &history_of(&[Bet, Bet])), 2.0);
        assert_eq!(payoff_to_first_player([0, 2], &history_of(&[Bet, Bet])), -2.0);
        assert_eq!(payoff_to_first_player([1, 0], &history_of(&[Pass, Bet, Bet])), 2.0);
    }

    #[test]
    fn fold_payoffs_ignore_cards() {
        use KuhnAction::{Bet, Pass};

        // The folder loses the ante no matter who held the better card.
        assert_eq!(payoff_to_first_player([0, 2], &history_of(&[Bet, Pass])), 1.0);
        assert_eq!(payoff_to_first_player([2, 0], &history_of(&[Pass, Bet, Pass])), -1.0);
    }

    #[test]
    #[should_panic(expected = "no payoff")]
    fn payoff_rejects_non_terminal() {
        use KuhnAction::{Bet, Pass};
        payoff_to_first_player([0, 1], &history_of(&[Pass, Bet]));
    }

    #[test]
    fn info_set_keys() {
        use KuhnAction::{Bet, Pass};
        assert_eq!(info_set_key(0, &History::new()), "0/");
        assert_eq!(info_set_key(2, &history_of(&[Pass, Bet])), "2/pb");
    }

    #[test]
    fn deal_is_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let cards = deal(&mut rng);
            assert_ne!(cards[0], cards[1]);
            assert!(cards[0] < 3 && cards[1] < 3);
        }
    }

    #[test]
    fn deal_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0u32; 3];
        let hands = 30_000;
        for _ in 0..hands {
            counts[deal(&mut rng)[0] as usize] += 1;
        }
        // Each card reaches player 0 about a third of the time.
        for &count in &counts {
            let freq = f64::from(count) / f64::from(hands);
            assert!(
                (freq - 1.0 / 3.0).abs() < 0.02,
                "deal frequency {} too far from uniform",
                freq
            );
        }
    }
}
