//! Die vier Achsen-Richtungen des Rasters.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Neg};
use std::str::FromStr;

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{punkt::Punkt, skalar::Skalar, vektor::Vektor, winkel::WinkelGradmaß};

/// Eine Richtung entlang einer Achse des Rasters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize,
)]
pub enum Richtung {
    /// In Richtung wachsender x-Koordinaten.
    PlusX,
    /// In Richtung fallender x-Koordinaten.
    MinusX,
    /// In Richtung wachsender y-Koordinaten.
    PlusY,
    /// In Richtung fallender y-Koordinaten.
    MinusY,
}

/// Die Differenz zweier Punkte liegt nicht auf einer Achse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Die Differenz von {von} nach {nach} liegt auf keiner Achse.")]
pub struct KeineAchse {
    /// Start-Punkt.
    pub von: Punkt,
    /// End-Punkt.
    pub nach: Punkt,
}

/// Eine Zeichenkette beschreibt keine [`Richtung`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' ist keine Richtung, erwartet wird eine von +x, -x, +y, -y.")]
pub struct KeineRichtung(pub String);

impl Richtung {
    /// Der Einheits-Schritt im Raster.
    #[must_use]
    pub const fn als_punkt(self) -> Punkt {
        match self {
            Richtung::PlusX => Punkt { x: 1, y: 0 },
            Richtung::MinusX => Punkt { x: -1, y: 0 },
            Richtung::PlusY => Punkt { x: 0, y: 1 },
            Richtung::MinusY => Punkt { x: 0, y: -1 },
        }
    }

    /// Der Einheitsvektor in diese Richtung.
    #[must_use]
    pub fn als_vektor(self) -> Vektor {
        Vektor::from(self.als_punkt())
    }

    /// Skaliere den Einheitsvektor.
    #[must_use]
    pub fn skaliert(self, faktor: Skalar) -> Vektor {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            self.als_vektor() * faktor
        }
    }

    /// Interpretiere ganzzahlige Komponenten als Einheitsvektor.
    ///
    /// Gibt [`None`] zurück, wenn die Komponenten keinen Achsen-Einheitsvektor beschreiben.
    #[must_use]
    pub const fn aus_komponenten(x: i32, y: i32) -> Option<Self> {
        match (x, y) {
            (1, 0) => Some(Richtung::PlusX),
            (-1, 0) => Some(Richtung::MinusX),
            (0, 1) => Some(Richtung::PlusY),
            (0, -1) => Some(Richtung::MinusY),
            _ => None,
        }
    }

    /// Die Richtung von `von` nach `nach`.
    ///
    /// ## Errors
    ///
    /// Wenn beide Punkte gleich sind oder sich in beiden Koordinaten unterscheiden.
    pub fn aus_differenz(von: Punkt, nach: Punkt) -> Result<Self, KeineAchse> {
        let dx = nach.x.saturating_sub(von.x);
        let dy = nach.y.saturating_sub(von.y);
        Self::aus_komponenten(dx.signum(), dy.signum())
            .filter(|_| dx == 0 || dy == 0)
            .ok_or(KeineAchse { von, nach })
    }

    /// Ist `other` gleich oder entgegengesetzt?
    #[must_use]
    pub fn ist_parallel(self, other: Self) -> bool {
        self == other || self == -other
    }

    /// Um 90° von der x-Achse in Richtung der y-Achse gedreht.
    #[must_use]
    pub const fn gedreht_gegen_uhrzeigersinn(self) -> Self {
        match self {
            Richtung::PlusX => Richtung::PlusY,
            Richtung::PlusY => Richtung::MinusX,
            Richtung::MinusX => Richtung::MinusY,
            Richtung::MinusY => Richtung::PlusX,
        }
    }

    /// Um 90° von der y-Achse in Richtung der x-Achse gedreht.
    #[must_use]
    pub const fn gedreht_im_uhrzeigersinn(self) -> Self {
        match self {
            Richtung::PlusX => Richtung::MinusY,
            Richtung::MinusY => Richtung::MinusX,
            Richtung::MinusX => Richtung::PlusY,
            Richtung::PlusY => Richtung::PlusX,
        }
    }

    /// Gier-Winkel eines Objekts, das in diese Richtung blickt.
    #[must_use]
    pub const fn gier(self) -> WinkelGradmaß {
        match self {
            Richtung::PlusX => WinkelGradmaß::neu(0.),
            Richtung::PlusY => WinkelGradmaß::neu(90.),
            Richtung::MinusX => WinkelGradmaß::neu(180.),
            Richtung::MinusY => WinkelGradmaß::neu(270.),
        }
    }

    /// Ist es eine Richtung entlang der x-Achse?
    #[must_use]
    pub const fn ist_x_achse(self) -> bool {
        matches!(self, Richtung::PlusX | Richtung::MinusX)
    }
}

impl Neg for Richtung {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Richtung::PlusX => Richtung::MinusX,
            Richtung::MinusX => Richtung::PlusX,
            Richtung::PlusY => Richtung::MinusY,
            Richtung::MinusY => Richtung::PlusY,
        }
    }
}

impl Add<Richtung> for Punkt {
    type Output = Punkt;

    fn add(self, rhs: Richtung) -> Self::Output {
        // Saturierende Addition.
        #[allow(clippy::arithmetic_side_effects)]
        {
            self + rhs.als_punkt()
        }
    }
}

impl Display for Richtung {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let text = match self {
            Richtung::PlusX => "+x",
            Richtung::MinusX => "-x",
            Richtung::PlusY => "+y",
            Richtung::MinusY => "-y",
        };
        formatter.write_str(text)
    }
}

impl FromStr for Richtung {
    type Err = KeineRichtung;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim() {
            "x" | "+x" => Ok(Richtung::PlusX),
            "-x" => Ok(Richtung::MinusX),
            "y" | "+y" => Ok(Richtung::PlusY),
            "-y" => Ok(Richtung::MinusY),
            _ => Err(KeineRichtung(text.to_owned())),
        }
    }
}

#[cfg(test)]
mod test;
