use bitflags::bitflags;

bitflags! {
    /// Skills that change how a combatant fights.
    ///
    /// Only player characters carry skills; enemies are built with
    /// [`Skills::empty`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Skills: u16 {
        /// Attack with the off hand too when it holds a weapon.
        const DUAL_WIELD = 1 << 0;
        /// The first hit taken in an encounter is softened.
        const HARD_SKIN = 1 << 1;
        /// Once per encounter, mana refills when it runs low.
        const MANA_SURGE = 1 << 2;
        /// Consecutive hits stack bonus damage; a dodge resets the stacks.
        const FRENZY = 1 << 3;
        /// Bonus damage while fighting a group.
        const SKIRMISHER = 1 << 4;
    }
}
