//! Turn orchestration.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::cardset::CardSet;
use crate::deck::Deck;
use crate::error::{DealError, TurnError};
use crate::hand::Hand;
use crate::observation::Observation;
use crate::options::GameOptions;
use crate::play::Play;
use crate::strategy::{StrategyKind, TurnContext};

mod player;
pub mod state;

pub use player::Player;
pub use state::{GameState, TurnOutcome};

/// Fewest seats at a table.
pub const MIN_PLAYERS: usize = 2;
/// Most seats at a table.
pub const MAX_PLAYERS: usize = 4;

/// A game of Big Two between 2 to 4 players.
///
/// The game owns every hand and the table: the play to beat, who passed
/// since it was made, and the discard pile. The holder of the 3 of Diamonds
/// acts first and must play it.
///
/// # Example
///
/// ```
/// use bigtwo::{Game, GameOptions, StrategyKind};
///
/// let kinds = [StrategyKind::Aggressive, StrategyKind::Random];
/// let mut game = Game::with_strategies(&kinds, GameOptions::default(), 3).unwrap();
/// let winner = game.run().unwrap();
/// assert!(game.players()[winner].hand.is_empty());
/// ```
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    options: GameOptions,
    rng: ChaCha8Rng,
    reference: Play,
    passes: Vec<bool>,
    current: usize,
    last_player: usize,
    turns: usize,
    discarded: CardSet,
    state: GameState,
    winner: Option<usize>,
}

impl Game {
    /// Seats `players` and deals the first game.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not 2 to 4 players, or if a two-player
    /// deck is too small to give both players a card.
    pub fn new(players: Vec<Player>, options: GameOptions, seed: u64) -> Result<Self, DealError> {
        let seats = players.len();
        if seats < MIN_PLAYERS {
            return Err(DealError::TooFewPlayers(seats));
        }
        if seats > MAX_PLAYERS {
            return Err(DealError::TooManyPlayers(seats));
        }
        if seats == 2 && options.two_player_deck_size < seats {
            return Err(DealError::DeckTooSmall(options.two_player_deck_size));
        }

        let mut game = Self {
            players,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            reference: Play::any(),
            passes: vec![false; seats],
            current: 0,
            last_player: 0,
            turns: 0,
            discarded: CardSet::EMPTY,
            state: GameState::Playing,
            winner: None,
        };
        game.setup();
        Ok(game)
    }

    /// Seats one computer player per kind, named after the kind and seat
    /// (`Random1`, `PlayItSafe2`, ...).
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    pub fn with_strategies(kinds: &[StrategyKind], options: GameOptions, seed: u64) -> Result<Self, DealError> {
        let players = kinds
            .iter()
            .zip(0_u64..)
            .map(|(kind, i)| {
                Player::new(
                    format!("{}{i}", kind.label()),
                    kind.build(seed.wrapping_add(i + 1)),
                )
            })
            .collect();
        Self::new(players, options, seed)
    }

    /// Deals a new game to the same players.
    ///
    /// Two-player games use a reduced deck, reshuffled until it holds the
    /// 3 of Diamonds.
    pub fn setup(&mut self) {
        let seats = self.players.len();
        let hands = self.deal();
        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.hand = hand;
        }

        let first = self
            .players
            .iter()
            .position(|p| p.hand.lowest() == Some(Card::OPENING));
        debug_assert!(first.is_some(), "3 of Diamonds was not dealt");
        self.current = first.unwrap_or(0);

        self.reference = Play::any();
        self.passes = vec![false; seats];
        self.last_player = self.current;
        self.turns = 0;
        self.discarded = CardSet::EMPTY;
        self.state = GameState::Playing;
        self.winner = None;

        log::info!(
            "Starting Big Two with {seats} players; {} leads",
            self.players[self.current].name
        );
    }

    fn deal(&mut self) -> Vec<Hand> {
        let seats = self.players.len();
        loop {
            let mut deck = Deck::shuffled(&mut self.rng);
            if seats == 2 {
                deck.truncate(self.options.two_player_deck_size);
            }
            if deck.contains(Card::OPENING) {
                return deck.deal(seats);
            }
            log::debug!("3 of Diamonds not in the reduced deck; reshuffling");
        }
    }

    /// Seated players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether a player has emptied their hand.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::Finished
    }

    /// The winning seat, once the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Seat to act next.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// The play to beat; [`Play::any`] when the current player leads.
    #[must_use]
    pub const fn reference(&self) -> &Play {
        &self.reference
    }

    /// Seat that made the play on the table.
    #[must_use]
    pub const fn last_player(&self) -> usize {
        self.last_player
    }

    /// Per-seat flags: passed since the last play.
    #[must_use]
    pub fn passes(&self) -> &[bool] {
        &self.passes
    }

    /// Turns taken this game, passes included.
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Every card played this game.
    #[must_use]
    pub const fn discarded(&self) -> CardSet {
        self.discarded
    }

    /// Returns whether the next play is the first of the game.
    #[must_use]
    pub const fn is_opening(&self) -> bool {
        self.turns == 0
    }

    /// Legal plays for the seat to act.
    #[must_use]
    pub fn legal_plays(&self) -> Vec<Play> {
        self.players[self.current]
            .hand
            .find_plays(&self.reference, self.is_opening())
    }

    /// What `seat` can see of the table.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is not a seat at this table.
    #[must_use]
    pub fn observe(&self, seat: usize) -> Observation {
        let seats = self.players.len();
        let opponent_hand_sizes = (1..seats)
            .map(|offset| &self.players[(seat + offset) % seats])
            .map(|p| u8::try_from(p.hand.len()).unwrap_or(u8::MAX))
            .collect();

        Observation {
            reference: self.reference.to_set(),
            hand: self.players[seat].hand.to_set(),
            discarded: self.discarded,
            opponent_hand_sizes,
            last_player: u8::try_from(self.last_player).unwrap_or(u8::MAX),
        }
    }

    /// The context a strategy sees for the seat to act.
    #[must_use]
    pub fn turn_context(&self) -> TurnContext<'_> {
        TurnContext {
            candidates: self.legal_plays(),
            reference: &self.reference,
            opening: self.is_opening(),
            hand: &self.players[self.current].hand,
            observation: self.observe(self.current),
        }
    }

    /// Asks the seat to act for a play through its strategy and applies it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or the strategy chose a play
    /// that cannot be committed. Nothing changes in that case.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }

        let seat = self.current;
        let candidates = self.legal_plays();
        let observation = self.observe(seat);
        let opening = self.is_opening();

        let player = &mut self.players[seat];
        log::info!("{}'s turn", player.name);
        log::debug!("{} hand: {}", player.name, player.hand);
        log::debug!("{} has {} option(s)", player.name, candidates.len());

        let ctx = TurnContext {
            candidates,
            reference: &self.reference,
            opening,
            hand: &player.hand,
            observation,
        };
        let chosen = player.strategy.select(&ctx);
        self.apply(chosen)
    }

    /// Commits `play` (or a pass) for the seat to act, then moves the turn on.
    ///
    /// When every other seat has passed since the last play, the table is
    /// cleared and the last player leads the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or the play is not legal now.
    /// Nothing changes in that case.
    pub fn apply(&mut self, play: Play) -> Result<TurnOutcome, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }

        let seat = self.current;
        let opening = self.is_opening();
        let player = &mut self.players[seat];
        player.hand.check_play(&self.reference, opening, &play)?;

        if play.is_pass() {
            log::info!("{} passes", player.name);
            self.passes[seat] = true;
        } else {
            player.hand.remove_play(&play)?;
            log::info!("{} plays {play}", player.name);
            self.discarded = self.discarded.union(play.to_set());
            self.reference = play.clone();
            self.last_player = seat;
            self.passes[seat] = false;
        }
        self.turns += 1;

        if self.players[seat].hand.is_empty() {
            log::info!("Game over! {} has won the game", self.players[seat].name);
            self.state = GameState::Finished;
            self.winner = Some(seat);
            return Ok(TurnOutcome {
                seat,
                play,
                round_over: false,
                winner: Some(seat),
            });
        }

        self.current = (seat + 1) % self.players.len();
        let round_over = self.others_passed();
        if round_over {
            log::info!("Round over; {} leads", self.players[self.current].name);
            self.reference = Play::any();
            self.passes.fill(false);
        }

        Ok(TurnOutcome {
            seat,
            play,
            round_over,
            winner: None,
        })
    }

    fn others_passed(&self) -> bool {
        self.passes
            .iter()
            .enumerate()
            .all(|(i, &passed)| i == self.current || passed)
    }

    /// Plays turns until the table is cleared or the game ends.
    ///
    /// Returns the winner if the game ended during the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over or a strategy chose a
    /// play that cannot be committed.
    pub fn play_round(&mut self) -> Result<Option<usize>, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }

        log::info!("New round");
        loop {
            let outcome = self.play_turn()?;
            if outcome.winner.is_some() || outcome.round_over {
                return Ok(outcome.winner);
            }
        }
    }

    /// Plays rounds until a player empties their hand, returning their seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over or a strategy chose a
    /// play that cannot be committed.
    pub fn run(&mut self) -> Result<usize, TurnError> {
        loop {
            if let Some(winner) = self.play_round()? {
                return Ok(winner);
            }
        }
    }
}
