use rand::Rng;
use smallvec::SmallVec;

use crate::protocol::{HOLE_COUNT, HoleIndex};

/// Skin drawn in an active hole, purely cosmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Creature {
    Mole,
    Cat,
    Bunny,
    Butterfly,
}

impl Creature {
    pub const ALL: [Creature; 4] = [
        Creature::Mole,
        Creature::Cat,
        Creature::Bunny,
        Creature::Butterfly,
    ];

    pub const fn asset(self) -> &'static str {
        use Creature::*;
        match self {
            Mole => "mole.png",
            Cat => "cat.svg",
            Bunny => "bunny.svg",
            Butterfly => "butterfly.svg",
        }
    }

    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// What each hole currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    holes: [Option<Creature>; HOLE_COUNT],
}

impl Board {
    pub fn creature_at(&self, hole: HoleIndex) -> Option<Creature> {
        self.holes.get(hole as usize).copied().flatten()
    }

    pub fn is_active(&self, hole: HoleIndex) -> bool {
        self.creature_at(hole).is_some()
    }

    pub fn active(&self) -> impl Iterator<Item = (HoleIndex, Creature)> + '_ {
        self.holes
            .iter()
            .enumerate()
            .filter_map(|(index, creature)| creature.map(|creature| (index as HoleIndex, creature)))
    }

    /// Empty one hole ahead of the next [`Board::sync`].
    pub fn vacate(&mut self, hole: HoleIndex) {
        if let Some(slot) = self.holes.get_mut(hole as usize) {
            *slot = None;
        }
    }

    pub fn clear(&mut self) {
        self.holes = Default::default();
    }

    /// Mirror the server's active holes.
    ///
    /// Holes that stay active keep their creature, newly active holes get a random one and are returned so the
    /// caller can announce them. Indices outside the board are ignored.
    pub fn sync<R, I>(&mut self, active: I, rng: &mut R) -> SmallVec<[HoleIndex; 4]>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = HoleIndex>,
    {
        let mut next: [Option<Creature>; HOLE_COUNT] = Default::default();
        let mut appeared = SmallVec::new();
        for hole in active {
            let Some(slot) = next.get_mut(hole as usize) else {
                log::warn!("ignoring mole outside the board: {}", hole);
                continue;
            };
            if slot.is_some() {
                continue;
            }
            *slot = Some(self.holes[hole as usize].unwrap_or_else(|| {
                appeared.push(hole);
                Creature::pick(rng)
            }));
        }
        self.holes = next;
        appeared
    }
}
