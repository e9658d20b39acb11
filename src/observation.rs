//! What a seat can see of the table, and its fixed-width encoding.

use alloc::vec::Vec;

use crate::cardset::CardSet;

/// Most opponents a seat can face.
pub const MAX_OPPONENTS: usize = 3;

/// Length of an [`ObservationKey`] in bytes.
pub const KEY_LEN: usize = 3 * 8 + MAX_OPPONENTS + 1;

/// A seat's view of the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Observation {
    /// Cards of the play currently on the table.
    pub reference: CardSet,
    /// The seat's own hand.
    pub hand: CardSet,
    /// Every card played so far this game.
    pub discarded: CardSet,
    /// Opponents' hand sizes, in seat order starting after this seat.
    pub opponent_hand_sizes: Vec<u8>,
    /// Seat that made the play on the table.
    pub last_player: u8,
}

impl Observation {
    /// Encodes the observation as a deterministic fixed-width key.
    ///
    /// Missing opponents are written as `0xFF`.
    #[must_use]
    pub fn key(&self) -> ObservationKey {
        let mut bytes = [u8::MAX; KEY_LEN];
        bytes[0..8].copy_from_slice(&self.reference.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.hand.to_le_bytes());
        bytes[16..24].copy_from_slice(&self.discarded.to_le_bytes());
        for (slot, &size) in bytes[24..24 + MAX_OPPONENTS]
            .iter_mut()
            .zip(&self.opponent_hand_sizes)
        {
            *slot = size;
        }
        bytes[KEY_LEN - 1] = self.last_player;
        ObservationKey(bytes)
    }
}

/// Hashable, order-preserving encoding of an [`Observation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationKey(pub [u8; KEY_LEN]);
