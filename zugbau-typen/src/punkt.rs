//! Ganzzahlige Punkte im Raster.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::{skalar::Skalar, vektor::Vektor};

/// Ein Feld im Raster, gleichzeitig die Knoten des Gleis-Graphen.
///
/// Alle Operationen sind saturierend, es gibt keinen Überlauf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Punkt {
    /// x-Koordinate
    pub x: i32,
    /// y-Koordinate
    pub y: i32,
}

impl Punkt {
    /// Erzeuge einen neuen Punkt.
    #[must_use]
    pub const fn neu(x: i32, y: i32) -> Self {
        Punkt { x, y }
    }

    /// Der Ursprung des Rasters.
    pub const NULL: Punkt = Punkt { x: 0, y: 0 };

    /// Komponentenweises Minimum und Maximum zweier Punkte,
    /// also die Ecken des von ihnen aufgespannten Rechtecks.
    #[must_use]
    pub fn rechteck(&self, other: &Self) -> (Punkt, Punkt) {
        (
            Punkt { x: self.x.min(other.x), y: self.y.min(other.y) },
            Punkt { x: self.x.max(other.x), y: self.y.max(other.y) },
        )
    }

    /// Ist der Punkt im (inklusiven) Rechteck zwischen `ecke_a` und `ecke_b`?
    #[must_use]
    pub fn in_rechteck(&self, ecke_a: &Self, ecke_b: &Self) -> bool {
        let (min, max) = ecke_a.rechteck(ecke_b);
        (min.x..=max.x).contains(&self.x) && (min.y..=max.y).contains(&self.y)
    }

    /// Manhattan-Abstand zwischen zwei Punkten.
    #[must_use]
    pub fn manhattan_abstand(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }
}

impl Display for Punkt {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

impl From<Punkt> for Vektor {
    fn from(Punkt { x, y }: Punkt) -> Self {
        Vektor { x: Skalar::from(x), y: Skalar::from(y) }
    }
}

impl AddAssign<Punkt> for Punkt {
    fn add_assign(&mut self, rhs: Punkt) {
        self.x = self.x.saturating_add(rhs.x);
        self.y = self.y.saturating_add(rhs.y);
    }
}

impl Add<Punkt> for Punkt {
    type Output = Self;

    fn add(mut self, rhs: Punkt) -> Self::Output {
        // Saturierende Addition.
        #[allow(clippy::arithmetic_side_effects)]
        {
            self += rhs;
        }
        self
    }
}

impl SubAssign<Punkt> for Punkt {
    fn sub_assign(&mut self, rhs: Punkt) {
        self.x = self.x.saturating_sub(rhs.x);
        self.y = self.y.saturating_sub(rhs.y);
    }
}

impl Sub<Punkt> for Punkt {
    type Output = Self;

    fn sub(mut self, rhs: Punkt) -> Self::Output {
        // Saturierende Subtraktion.
        #[allow(clippy::arithmetic_side_effects)]
        {
            self -= rhs;
        }
        self
    }
}

impl Neg for Punkt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Punkt { x: self.x.saturating_neg(), y: self.y.saturating_neg() }
    }
}

impl Mul<i32> for Punkt {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Punkt { x: self.x.saturating_mul(rhs), y: self.y.saturating_mul(rhs) }
    }
}
