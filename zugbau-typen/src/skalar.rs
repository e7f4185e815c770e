//! Längen und Koordinaten in Raster-Einheiten.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Eine Länge oder Koordinate, eine Einheit entspricht der Kantenlänge eines Feldes im Raster.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Skalar(pub f32);

impl Skalar {
    /// Quadratwurzel.
    #[must_use]
    pub fn wurzel(&self) -> Self {
        Skalar(self.0.sqrt())
    }

    /// Kopie des kleineren Elements.
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        if self < other {
            *self
        } else {
            *other
        }
    }

    /// Kopie des größeren Elements.
    #[must_use]
    pub fn max(&self, other: &Self) -> Self {
        if self > other {
            *self
        } else {
            *other
        }
    }
}

impl From<i32> for Skalar {
    fn from(wert: i32) -> Self {
        // Koordinaten im Raster sind klein genug, um exakt dargestellt zu werden.
        #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
        Skalar(wert as f32)
    }
}

macro_rules! skalar_operation {
    ($trait: ident, $methode: ident, $operator: tt) => {
        impl $trait for Skalar {
            type Output = Self;

            fn $methode(self, rhs: Self) -> Self {
                // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen oder NaN-Werten.
                #[allow(clippy::arithmetic_side_effects)]
                Skalar(self.0 $operator rhs.0)
            }
        }
    };
}

skalar_operation! {Add, add, +}
skalar_operation! {Sub, sub, -}
skalar_operation! {Mul, mul, *}
skalar_operation! {Div, div, /}

impl AddAssign for Skalar {
    fn add_assign(&mut self, rhs: Self) {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            self.0 += rhs.0;
        }
    }
}

impl Neg for Skalar {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Skalar(-self.0)
    }
}
