//! Whole-sign houses.
//!
//! House 1 is the sign holding the Ascendant; houses 2..12 follow in
//! zodiacal order. A body sits in the house whose sign contains it.

use serde::Serialize;

use crate::graha::Graha;
use crate::rashi::Rashi;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct House {
    /// 1..=12.
    pub number: u8,
    pub rashi: Rashi,
    pub lord: Graha,
    pub occupants: Vec<Graha>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousePlacement {
    pub ascendant_rashi: Rashi,
    pub houses: Vec<House>,
}

/// House number (1..=12) of `rashi` counted from the lagna sign.
pub fn house_number(lagna: Rashi, rashi: Rashi) -> u8 {
    lagna.count_to(rashi)
}

impl HousePlacement {
    /// Place `(graha, sidereal longitude)` pairs around `ascendant_rashi`.
    pub fn whole_sign<I>(ascendant_rashi: Rashi, bodies: I) -> Self
    where
        I: IntoIterator<Item = (Graha, f64)>,
    {
        let mut houses: Vec<House> = (1..=12u8)
            .map(|number| {
                let rashi = ascendant_rashi.nth(number as usize);
                House {
                    number,
                    rashi,
                    lord: rashi.lord(),
                    occupants: Vec::new(),
                }
            })
            .collect();
        for (graha, lon) in bodies {
            let h = house_number(ascendant_rashi, Rashi::from_longitude(lon));
            houses[h as usize - 1].occupants.push(graha);
        }
        Self {
            ascendant_rashi,
            houses,
        }
    }

    /// House `n` (1..=12); values outside wrap.
    pub fn house(&self, n: u8) -> &House {
        &self.houses[(n as usize + 11) % 12]
    }

    pub fn rashi_of_house(&self, n: u8) -> Rashi {
        self.house(n).rashi
    }

    pub fn lord_of_house(&self, n: u8) -> Graha {
        self.house(n).lord
    }

    pub fn house_of(&self, graha: Graha) -> Option<u8> {
        self.houses
            .iter()
            .find(|h| h.occupants.contains(&graha))
            .map(|h| h.number)
    }

    pub fn house_of_rashi(&self, rashi: Rashi) -> u8 {
        house_number(self.ascendant_rashi, rashi)
    }

    pub fn occupants(&self, n: u8) -> &[Graha] {
        &self.house(n).occupants
    }
}
