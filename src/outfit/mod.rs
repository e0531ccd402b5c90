//! Wardrobe helpers: grouping clothes by category and drawing a random
//! complete outfit, one item per category.

use rand::Rng;
use std::collections::HashMap;

use crate::models::{Clothe, ClotheKind};

/// A picked outfit. A slot stays empty when the wardrobe has no item of
/// that category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outfit {
    pub top: Option<Clothe>,
    pub bottom: Option<Clothe>,
    pub shoes: Option<Clothe>,
    pub hat_cap: Option<Clothe>,
}

impl Outfit {
    pub fn slot(&self, kind: ClotheKind) -> Option<&Clothe> {
        match kind {
            ClotheKind::Top => self.top.as_ref(),
            ClotheKind::Bottom => self.bottom.as_ref(),
            ClotheKind::Shoes => self.shoes.as_ref(),
            ClotheKind::HatCap => self.hat_cap.as_ref(),
        }
    }

    pub fn is_complete(&self) -> bool {
        ClotheKind::ALL.iter().all(|kind| self.slot(*kind).is_some())
    }
}

/// Group wardrobe items per category, keeping the fetched order within each.
pub fn by_kind(clothes: &[Clothe]) -> HashMap<ClotheKind, Vec<&Clothe>> {
    let mut groups: HashMap<ClotheKind, Vec<&Clothe>> = HashMap::new();
    for clothe in clothes {
        groups.entry(clothe.kind).or_default().push(clothe);
    }
    groups
}

/// Draw one random item per category from the wardrobe.
pub fn random_outfit(clothes: &[Clothe], rng: &mut impl Rng) -> Outfit {
    let groups = by_kind(clothes);
    let mut pick = |kind: ClotheKind| {
        groups
            .get(&kind)
            .filter(|items| !items.is_empty())
            .map(|items| items[rng.random_range(0..items.len())].clone())
    };

    Outfit {
        top: pick(ClotheKind::Top),
        bottom: pick(ClotheKind::Bottom),
        shoes: pick(ClotheKind::Shoes),
        hat_cap: pick(ClotheKind::HatCap),
    }
}
