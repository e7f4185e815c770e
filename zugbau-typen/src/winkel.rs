//! Winkel im Gradmaß.
//!
//! Gleise liegen auf einem Raster, alle Winkel beim Bau sind Vielfache von 90°.
//! Nur Gier-Winkel entlang einer Weichen-Kurve sind beliebig.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::{skalar::Skalar, vektor::Vektor};

// soll direkt importiert werden
#[allow(clippy::module_name_repetitions)]
/// Winkel \[`Gradmaß\`], gemessen von der x-Achse in Richtung der y-Achse.
///
/// Die [`PartialEq`]- und [`PartialOrd`]-Instanzen sind abgeleitet
/// und normalisieren die Winkel NICHT, bevor sie verglichen werden.
#[derive(Debug, PartialEq, Clone, Copy, PartialOrd, Serialize, Deserialize)]
pub struct WinkelGradmaß(f32);

impl WinkelGradmaß {
    /// Konstruktor
    #[must_use]
    pub const fn neu(grad: f32) -> Self {
        WinkelGradmaß(grad)
    }

    /// Der Winkel, in den `vektor` zeigt.
    ///
    /// Für den Nullvektor ist das Ergebnis `0°`.
    #[must_use]
    pub fn richtung_von(vektor: Vektor) -> Self {
        WinkelGradmaß(vektor.y.0.atan2(vektor.x.0).to_degrees())
    }

    /// Der Zahlenwert in Grad.
    #[must_use]
    pub const fn grad(&self) -> f32 {
        self.0
    }

    /// Normalisiert in den äquivalenten Bereich zu [0°, 360°).
    #[must_use]
    pub fn normalisiert(self) -> Self {
        let grad = self.0.rem_euclid(360.);
        // `rem_euclid` kann durch Rundung genau 360 liefern.
        if grad >= 360. {
            WinkelGradmaß(0.)
        } else {
            WinkelGradmaß(grad)
        }
    }

    /// Kosinus
    #[must_use]
    pub fn cos(&self) -> Skalar {
        Skalar(self.0.to_radians().cos())
    }

    /// Sinus
    #[must_use]
    pub fn sin(&self) -> Skalar {
        Skalar(self.0.to_radians().sin())
    }
}

impl Display for WinkelGradmaß {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}°", self.0)
    }
}

impl Add for WinkelGradmaß {
    type Output = Self;

    fn add(self, other: WinkelGradmaß) -> WinkelGradmaß {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        WinkelGradmaß(self.0 + other.0)
    }
}

impl Sub for WinkelGradmaß {
    type Output = Self;

    fn sub(self, other: WinkelGradmaß) -> WinkelGradmaß {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        WinkelGradmaß(self.0 - other.0)
    }
}

impl Neg for WinkelGradmaß {
    type Output = Self;

    fn neg(self) -> Self {
        WinkelGradmaß(-self.0)
    }
}
