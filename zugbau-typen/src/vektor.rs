//! Positionen und Richtungen in der Ebene des Rasters.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::skalar::Skalar;

/// Ein Vektor in der Ebene des Rasters.
///
/// Die x-Achse zeigt entlang der x-Achse des Rasters, die y-Achse entlang der y-Achse des Rasters
/// (in der Spielwelt entspricht das der z-Achse).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vektor {
    /// x-Koordinate des Vektors.
    pub x: Skalar,
    /// y-Koordinate des Vektors.
    pub y: Skalar,
}

impl Vektor {
    /// Nullvektor.
    #[must_use]
    pub fn null_vektor() -> Self {
        Vektor { x: Skalar(0.), y: Skalar(0.) }
    }

    /// Länge eines Vektors (euklidische Metrik).
    #[must_use]
    pub fn länge(&self) -> Skalar {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        (self.x * self.x + self.y * self.y).wurzel()
    }

    /// Abstand zu einem anderen Vektor.
    #[must_use]
    pub fn abstand(&self, other: &Self) -> Skalar {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        (*self - *other).länge()
    }
}

impl Add for Vektor {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        Vektor { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vektor {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        Vektor { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Vektor {
    type Output = Self;

    fn neg(self) -> Self {
        Vektor { x: -self.x, y: -self.y }
    }
}

impl Mul<Skalar> for Vektor {
    type Output = Self;

    fn mul(self, faktor: Skalar) -> Self {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        Vektor { x: self.x * faktor, y: self.y * faktor }
    }
}
