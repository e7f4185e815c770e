//! Position und Ausrichtung eines Objekts auf dem Gleis.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{vektor::Vektor, winkel::WinkelGradmaß};

/// Position (in Raster-Koordinaten) und Gier-Winkel eines Objekts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lage {
    /// Die Position in der Ebene des Rasters.
    pub punkt: Vektor,
    /// Gier-Winkel, gemessen von der x-Achse in Richtung der y-Achse, normalisiert auf [0°, 360°).
    pub gier: WinkelGradmaß,
}

impl Lage {
    /// Erzeuge eine neue Lage, der Gier-Winkel wird normalisiert.
    #[must_use]
    pub fn neu(punkt: Vektor, gier: WinkelGradmaß) -> Self {
        Lage { punkt, gier: gier.normalisiert() }
    }

    /// Die Koordinaten in der Spielwelt, die y-Achse zeigt nach oben.
    #[must_use]
    pub fn welt_koordinaten(&self) -> [f32; 3] {
        [self.punkt.x.0, 0., self.punkt.y.0]
    }
}

impl Display for Lage {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.welt_koordinaten();
        write!(formatter, "({x:.3}, {y:.3}, {z:.3}) @ {:.1}°", self.gier.grad())
    }
}
