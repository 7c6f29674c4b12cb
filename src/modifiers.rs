//! Modifier table and bitmask formatting.
//!
//! Bit values follow the Carbon event-modifier layout returned by
//! `GetCurrentKeyModifiers()`. Bits not listed in [`Modifier::ALL`]
//! (right-side variants, mouse button state) are ignored.

use std::fmt;

/// A modifier key reported by this tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    CapsLock,
    Shift,
    Fn,
    Control,
    Option,
    Cmd,
}

impl Modifier {
    /// All reported modifiers, in output order.
    pub const ALL: [Modifier; 6] = [
        Modifier::CapsLock,
        Modifier::Shift,
        Modifier::Fn,
        Modifier::Control,
        Modifier::Option,
        Modifier::Cmd,
    ];

    /// Bit pattern that must be fully present for the key to count as down.
    pub const fn bit(self) -> u32 {
        match self {
            // alphaLock
            Modifier::CapsLock => 0x0400,
            // shiftKey
            Modifier::Shift => 0x0200,
            // Not exported by Carbon; observed value of the fn key.
            Modifier::Fn => 0x0002_0000,
            // controlKey
            Modifier::Control => 0x1000,
            // optionKey
            Modifier::Option => 0x0800,
            // cmdKey
            Modifier::Cmd => 0x0100,
        }
    }

    /// Display name used in the output line.
    pub const fn name(self) -> &'static str {
        match self {
            Modifier::CapsLock => "capslock",
            Modifier::Shift => "shift",
            Modifier::Fn => "fn",
            Modifier::Control => "control",
            Modifier::Option => "option",
            Modifier::Cmd => "cmd",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw modifier state as returned by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierBitmask(pub u32);

impl ModifierBitmask {
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit of `modifier` is set.
    pub const fn is_down(self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() == modifier.bit()
    }

    /// Bitmask with exactly the bits of `modifiers` set.
    pub fn from_modifiers(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        Self(modifiers.into_iter().fold(0, |bits, m| bits | m.bit()))
    }

    /// Modifiers held down, in output order.
    pub fn pressed(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL
            .into_iter()
            .filter(move |modifier| self.is_down(*modifier))
    }
}

impl From<u32> for ModifierBitmask {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl fmt::Display for ModifierBitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(*self))
    }
}

/// Build the comma-separated list of modifiers held down in `bitmask`.
///
/// Returns an empty string when nothing recognized is down.
pub fn format(bitmask: ModifierBitmask) -> String {
    let mut output = String::new();
    for modifier in bitmask.pressed() {
        if !output.is_empty() {
            output.push_str(", ");
        }
        output.push_str(modifier.name());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_bits_are_distinct() {
        for (i, a) in Modifier::ALL.iter().enumerate() {
            for b in &Modifier::ALL[i + 1..] {
                assert_eq!(a.bit() & b.bit(), 0, "{} overlaps {}", a, b);
            }
        }
    }

    #[test]
    fn pressed_yields_in_table_order() {
        let bits = Modifier::Cmd.bit() | Modifier::Shift.bit() | Modifier::Option.bit();
        let pressed: Vec<_> = ModifierBitmask(bits).pressed().collect();
        assert_eq!(pressed, vec![Modifier::Shift, Modifier::Option, Modifier::Cmd]);
    }

    #[test]
    fn from_modifiers_sets_only_listed_bits() {
        let mask = ModifierBitmask::from_modifiers([Modifier::Control, Modifier::CapsLock]);
        assert_eq!(mask.bits(), 0x1000 | 0x0400);
        assert!(ModifierBitmask::from_modifiers(Vec::<Modifier>::new()).pressed().next().is_none());
    }

    #[test]
    fn display_matches_format() {
        let mask = ModifierBitmask(Modifier::Option.bit() | Modifier::Fn.bit());
        assert_eq!(mask.to_string(), format(mask));
        assert_eq!(mask.to_string(), "fn, option");
    }
}
