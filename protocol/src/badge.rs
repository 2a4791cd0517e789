use bitflags::bitflags;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

bitflags! {
    /// Achievements reported by the server, in the order the server lists them.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Badges: u8 {
        const COMBO_MASTER  = 1;
        const ACCURACY_STAR = 1 << 1;
        const FAST_PLAYER   = 1 << 2;
        const STARTER       = 1 << 3;
        const HIGH_SCORE    = 1 << 4;
    }
}

impl Badges {
    pub const SLOTS: usize = 5;

    const DISPLAY: [(Badges, &'static str); Self::SLOTS] = [
        (Badges::COMBO_MASTER, "🚀 Combo Master"),
        (Badges::ACCURACY_STAR, "🎯 Accuracy Star"),
        (Badges::FAST_PLAYER, "🔥 Fast Player"),
        (Badges::STARTER, "⭐ Starter"),
        (Badges::HIGH_SCORE, "👑 High Score"),
    ];

    pub fn from_slots(slots: [bool; Self::SLOTS]) -> Self {
        Self::DISPLAY
            .iter()
            .zip(slots)
            .filter(|&(_, earned)| earned)
            .fold(Badges::empty(), |acc, (&(badge, _), _)| acc | badge)
    }

    pub fn slots(self) -> [bool; Self::SLOTS] {
        Self::DISPLAY.map(|(badge, _)| self.contains(badge))
    }

    /// Display names of the earned badges, in slot order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::DISPLAY
            .into_iter()
            .filter(move |&(badge, _)| self.contains(badge))
            .map(|(_, name)| name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Slot {
    Flag(bool),
    Number(i64),
}

impl Slot {
    fn earned(self) -> bool {
        match self {
            Slot::Flag(flag) => flag,
            Slot::Number(num) => num != 0,
        }
    }
}

/// Serialised as five booleans.
impl Serialize for Badges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(Badges::SLOTS))?;
        for earned in self.slots() {
            seq.serialize_element(&earned)?;
        }
        seq.end()
    }
}

/// Exactly five entries, booleans or integers where anything non-zero is earned.
impl<'de> Deserialize<'de> for Badges {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Vec<Slot> = Vec::deserialize(deserializer)?;
        if raw.len() != Badges::SLOTS {
            return Err(de::Error::invalid_length(raw.len(), &"5 badge slots"));
        }
        let mut slots = [false; Badges::SLOTS];
        for (slot, value) in slots.iter_mut().zip(raw) {
            *slot = value.earned();
        }
        Ok(Badges::from_slots(slots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_slot_order() {
        let badges = Badges::HIGH_SCORE | Badges::COMBO_MASTER;
        let names: Vec<_> = badges.names().collect();
        assert_eq!(names, ["🚀 Combo Master", "👑 High Score"]);
    }

    #[test]
    fn accepts_integer_and_boolean_slots() {
        let from_ints: Badges = serde_json::from_str("[0,0,1,1,0]").unwrap();
        let from_bools: Badges = serde_json::from_str("[false,false,true,true,false]").unwrap();
        assert_eq!(from_ints, Badges::FAST_PLAYER | Badges::STARTER);
        assert_eq!(from_ints, from_bools);
    }

    #[test]
    fn rejects_wrong_slot_count() {
        assert!(serde_json::from_str::<Badges>("[true,false]").is_err());
        assert!(serde_json::from_str::<Badges>("[0,0,0,0,0,0]").is_err());
    }

    #[test]
    fn serializes_as_booleans() {
        let json = serde_json::to_string(&Badges::STARTER).unwrap();
        assert_eq!(json, "[false,false,false,true,false]");
    }
}
