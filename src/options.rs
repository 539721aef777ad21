//! Options for composing a starting group.

/// Configuration for building a group with [`Group::from_options`].
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardpile::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_decks(2)
///     .with_jokers(2)
///     .with_face_up(true);
/// ```
///
/// [`Group::from_options`]: crate::Group::from_options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of standard 52-card decks, stacked bottom to top.
    pub decks: u8,
    /// Number of jokers, placed at the bottom of the group.
    pub jokers: u8,
    /// Initial orientation of every card.
    pub face_up: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: 0,
            face_up: false,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets whether cards start face-up.
    #[must_use]
    pub const fn with_face_up(mut self, face_up: bool) -> Self {
        self.face_up = face_up;
        self
    }

    /// Total number of cards a group built from these options holds.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.decks as usize * crate::card::DECK_SIZE + self.jokers as usize
    }
}
