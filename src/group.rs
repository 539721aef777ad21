//! Ordered groups of cards: decks, hands and piles.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::RangeError;
use crate::options::DeckOptions;

/// A card together with the orientation of the position it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Slot {
    card: Card,
    face_up: bool,
}

impl Slot {
    const fn face_down(card: Card) -> Self {
        Self {
            card,
            face_up: false,
        }
    }
}

/// An ordered group of cards, each with a face-up or face-down orientation.
///
/// Positions run bottom to top: index 0 is the bottom card and `len() - 1`
/// the top. Every indexed operation accepts negative indices, counted from
/// the top (`-1` is the top card).
///
/// Orientation belongs to the card occupying a position and moves with it
/// when cards are swapped, drawn, inserted, flipped or sorted.
///
/// Drawing removes cards as a block and returns them as a new group.
///
/// A group carries no synchronization of its own; share it across threads
/// behind a lock if several of them need to mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Group {
    slots: Vec<Slot>,
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates a group from the given cards, bottom to top, all face-down.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            slots: cards.into_iter().map(Slot::face_down).collect(),
        }
    }

    /// Creates a standard 52-card deck, face-down.
    ///
    /// Cards are ordered Spades Ace to King, then Hearts, Diamonds and Clubs.
    #[must_use]
    pub fn standard_deck() -> Self {
        let mut slots = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                slots.push(Slot::face_down(Card::new(rank, suit)));
            }
        }
        Self { slots }
    }

    /// Creates a group according to `options`.
    ///
    /// Jokers sit at the bottom, followed by each standard deck in turn.
    #[must_use]
    pub fn from_options(options: &DeckOptions) -> Self {
        let mut group = Self {
            slots: Vec::with_capacity(options.card_count()),
        };
        group
            .slots
            .extend((0..options.jokers).map(|_| Slot::face_down(Card::joker())));
        for _ in 0..options.decks {
            group.insert(Self::standard_deck());
        }
        group.set_all_face_up(options.face_up);

        log::debug!(
            "composed group of {} cards ({} decks, {} jokers)",
            group.len(),
            options.decks,
            options.jokers
        );
        group
    }

    /// Returns the number of cards in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resolves a possibly negative index against the current length.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "Vec lengths never exceed isize::MAX"
    )]
    fn resolve(&self, index: isize) -> isize {
        if index < 0 {
            index + self.slots.len() as isize
        } else {
            index
        }
    }

    /// Resolves an index to a position that holds a card.
    fn position(&self, index: isize) -> Result<usize, RangeError> {
        usize::try_from(self.resolve(index))
            .ok()
            .filter(|&pos| pos < self.slots.len())
            .ok_or(RangeError::IndexOutOfRange {
                index,
                len: self.slots.len(),
            })
    }

    /// Resolves a half-open range `[start, end)`.
    fn span(&self, start: isize, end: isize) -> Result<Range<usize>, RangeError> {
        let len = self.slots.len();
        let bound = |index: isize| {
            usize::try_from(self.resolve(index))
                .ok()
                .filter(|&pos| pos <= len)
                .ok_or(RangeError::IndexOutOfRange { index, len })
        };
        let (start, end) = (bound(start)?, bound(end)?);
        if start > end {
            return Err(RangeError::InvertedRange { start, end });
        }
        Ok(start..end)
    }

    fn position_or_panic(&self, index: isize) -> usize {
        match self.position(index) {
            Ok(pos) => pos,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the card at position `index`, or `None` if there is no card there.
    #[must_use]
    pub fn card(&self, index: isize) -> Option<Card> {
        self.position(index).ok().map(|pos| self.slots[pos].card)
    }

    /// Returns the cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.slots.iter().map(|slot| slot.card).collect()
    }

    /// Iterates over `(card, face_up)` pairs, bottom to top.
    #[must_use]
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = (Card, bool)> + ExactSizeIterator + '_ {
        self.slots.iter().map(|slot| (slot.card, slot.face_up))
    }

    /// Returns whether the card at position `index` is face-up.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not resolve to a card.
    #[must_use]
    pub fn is_face_up(&self, index: isize) -> bool {
        self.slots[self.position_or_panic(index)].face_up
    }

    /// Sets the orientation of the card at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not resolve to a card.
    pub fn set_face_up(&mut self, index: isize, face_up: bool) {
        let pos = self.position_or_panic(index);
        self.slots[pos].face_up = face_up;
    }

    /// Returns the orientation of every card, aligned with [`Group::cards`].
    #[must_use]
    pub fn face_up_flags(&self) -> Vec<bool> {
        self.slots.iter().map(|slot| slot.face_up).collect()
    }

    /// Sets every card to the given orientation. Returns the group itself.
    pub fn set_all_face_up(&mut self, face_up: bool) -> &mut Self {
        for slot in &mut self.slots {
            slot.face_up = face_up;
        }
        self
    }

    /// Flips the cards in `[start, end)` over as a block.
    ///
    /// Each card in the range changes orientation and the order of the range
    /// is reversed, the way a stack of cards turns over in the hand. Flipping
    /// the same range twice restores the group.
    ///
    /// # Panics
    ///
    /// Panics if the range does not fit the group; see [`Group::try_flip`].
    pub fn flip(&mut self, start: isize, end: isize) {
        if let Err(err) = self.try_flip(start, end) {
            panic!("{err}");
        }
    }

    /// Flips the cards in `[start, end)`, or reports why the range is invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound resolves outside `0..=len()` or the
    /// start lies after the end. The group is left untouched.
    pub fn try_flip(&mut self, start: isize, end: isize) -> Result<(), RangeError> {
        let range = self.span(start, end)?;
        self.flip_range(range);
        Ok(())
    }

    /// Flips the whole group. Returns the group itself.
    pub fn flip_all(&mut self) -> &mut Self {
        self.flip_range(0..self.slots.len());
        self
    }

    fn flip_range(&mut self, range: Range<usize>) {
        let block = &mut self.slots[range];
        block.reverse();
        for slot in block {
            slot.face_up = !slot.face_up;
        }
    }

    /// Swaps two cards along with their orientations.
    ///
    /// # Panics
    ///
    /// Panics if either index does not resolve to a card.
    pub fn swap(&mut self, a: isize, b: isize) {
        let (a, b) = (self.position_or_panic(a), self.position_or_panic(b));
        self.slots.swap(a, b);
    }

    /// Swaps two unsigned positions, rejecting any that lie past the top.
    pub(crate) fn swap_positions(&mut self, a: usize, b: usize) {
        let len = self.slots.len();
        if let Some(pos) = [a, b].into_iter().find(|&pos| pos >= len) {
            panic!("position {pos} out of range for group of {len} cards");
        }
        self.slots.swap(a, b);
    }

    /// Returns whether the card at `a` sorts before the card at `b`.
    ///
    /// Jokers come first; standard cards order by suit, then rank.
    ///
    /// # Panics
    ///
    /// Panics if either index does not resolve to a card.
    #[must_use]
    pub fn less(&self, a: isize, b: isize) -> bool {
        self.slots[self.position_or_panic(a)].card < self.slots[self.position_or_panic(b)].card
    }

    /// Sorts the group with the same ordering as [`Group::less`].
    ///
    /// The sort is stable, and orientations move with their cards.
    pub fn sort(&mut self) {
        self.slots.sort_by_key(|slot| slot.card);
    }

    /// Removes up to `count` cards from the top and returns them as a new group.
    ///
    /// The drawn cards keep their order and orientation.
    #[must_use = "drawn cards are removed from the group"]
    pub fn draw(&mut self, count: usize) -> Self {
        let count = count.min(self.slots.len());
        let slots = self.slots.split_off(self.slots.len() - count);
        log::trace!("drew {count} cards from the top");
        Self { slots }
    }

    /// Removes up to `count` cards from the bottom and returns them as a new group.
    ///
    /// The drawn cards keep their order and orientation.
    #[must_use = "drawn cards are removed from the group"]
    pub fn draw_bottom(&mut self, count: usize) -> Self {
        let count = count.min(self.slots.len());
        log::trace!("drew {count} cards from the bottom");
        self.drain(0..count)
    }

    /// Removes the cards in `[start, end)` and returns them as a new group.
    ///
    /// # Panics
    ///
    /// Panics if the range does not fit the group; see [`Group::try_draw_at`].
    #[must_use = "drawn cards are removed from the group"]
    pub fn draw_at(&mut self, start: isize, end: isize) -> Self {
        match self.try_draw_at(start, end) {
            Ok(drawn) => drawn,
            Err(err) => panic!("{err}"),
        }
    }

    /// Removes the cards in `[start, end)`, or reports why the range is invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound resolves outside `0..=len()` or the
    /// start lies after the end. The group is left untouched.
    pub fn try_draw_at(&mut self, start: isize, end: isize) -> Result<Self, RangeError> {
        let range = self.span(start, end)?;
        log::trace!("drew cards {range:?}");
        Ok(self.drain(range))
    }

    fn drain(&mut self, range: Range<usize>) -> Self {
        Self {
            slots: self.slots.drain(range).collect(),
        }
    }

    /// Adds the cards of `other` to the top of the group.
    pub fn insert(&mut self, other: Self) {
        self.slots.extend(other.slots);
    }

    /// Adds the cards of `other` to the bottom of the group.
    pub fn insert_bottom(&mut self, other: Self) {
        self.slots.splice(0..0, other.slots);
    }

    /// Adds the cards of `other` starting at position `index`.
    ///
    /// Cards at and above `index` move up. An index below the bottom or past
    /// the top is clamped to the nearest end.
    pub fn insert_at(&mut self, index: isize, other: Self) {
        let pos = usize::try_from(self.resolve(index))
            .unwrap_or(0)
            .min(self.slots.len());
        self.slots.splice(pos..pos, other.slots);
    }
}

impl FromIterator<Card> for Group {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for (n, slot) in self.slots.iter().enumerate() {
            if n > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:#}", slot.card)?;
        }
        f.write_str(" ]")
    }
}

