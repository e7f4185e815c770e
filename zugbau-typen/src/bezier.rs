//! Kubische Bezier-Kurven über dem Intervall [0, 1].

use crate::{skalar::Skalar, vektor::Vektor};

/// Anzahl der Abtastungen bei der Berechnung der Bogenlänge.
const LÄNGE_ABTASTUNGEN: u16 = 256;

/// Eine unveränderliche kubische Bezier-Kurve mit 4 Kontrollpunkten.
///
/// Die Bogenlänge wird bei Konstruktion einmalig durch Abtastung bestimmt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierKurve {
    kontrollpunkte: [Vektor; 4],
    länge: Skalar,
}

impl BezierKurve {
    /// Erzeuge eine neue Kurve aus ihren Kontrollpunkten.
    #[must_use]
    pub fn neu(kontrollpunkte: [Vektor; 4]) -> Self {
        let mut kurve = BezierKurve { kontrollpunkte, länge: Skalar(0.) };
        kurve.länge = kurve.abgetastete_länge(LÄNGE_ABTASTUNGEN);
        kurve
    }

    /// Die Kontrollpunkte der Kurve.
    #[must_use]
    pub fn kontrollpunkte(&self) -> &[Vektor; 4] {
        &self.kontrollpunkte
    }

    /// Die an der x-Achse gespiegelte Kurve (alle y-Koordinaten negiert).
    #[must_use]
    pub fn gespiegelt(&self) -> Self {
        let [p0, p1, p2, p3] = self.kontrollpunkte;
        let spiegeln = |Vektor { x, y }: Vektor| Vektor { x, y: -y };
        BezierKurve {
            kontrollpunkte: [spiegeln(p0), spiegeln(p1), spiegeln(p2), spiegeln(p3)],
            länge: self.länge,
        }
    }

    /// Punkt auf der Kurve beim Parameter `t ∈ [0, 1]`.
    ///
    /// Werte außerhalb des Intervalls werden darauf beschränkt.
    #[must_use]
    pub fn auswerten(&self, t: Skalar) -> Vektor {
        let t = beschränkt(t);
        let [p0, p1, p2, p3] = self.kontrollpunkte;
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            let s = Skalar(1.) - t;
            p0 * (s * s * s)
                + p1 * (Skalar(3.) * s * s * t)
                + p2 * (Skalar(3.) * s * t * t)
                + p3 * (t * t * t)
        }
    }

    /// Ableitung der Kurve nach dem Parameter `t ∈ [0, 1]`.
    ///
    /// Werte außerhalb des Intervalls werden darauf beschränkt.
    #[must_use]
    pub fn ableitung(&self, t: Skalar) -> Vektor {
        let t = beschränkt(t);
        let [p0, p1, p2, p3] = self.kontrollpunkte;
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            let s = Skalar(1.) - t;
            (p1 - p0) * (Skalar(3.) * s * s)
                + (p2 - p1) * (Skalar(6.) * s * t)
                + (p3 - p2) * (Skalar(3.) * t * t)
        }
    }

    /// Bogenlänge der Kurve.
    #[must_use]
    pub fn länge(&self) -> Skalar {
        self.länge
    }

    /// Bogenlänge, angenähert durch einen Polygonzug mit `abtastungen` Teilstücken.
    #[must_use]
    pub fn abgetastete_länge(&self, abtastungen: u16) -> Skalar {
        let abtastungen = abtastungen.max(1);
        let mut länge = Skalar(0.);
        let mut letzter = self.auswerten(Skalar(0.));
        for i in 1..=abtastungen {
            // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
            #[allow(clippy::arithmetic_side_effects)]
            let t = Skalar(f32::from(i)) / Skalar(f32::from(abtastungen));
            let punkt = self.auswerten(t);
            // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
            #[allow(clippy::arithmetic_side_effects)]
            {
                länge += punkt.abstand(&letzter);
            }
            letzter = punkt;
        }
        länge
    }
}

fn beschränkt(t: Skalar) -> Skalar {
    t.max(&Skalar(0.)).min(&Skalar(1.))
}
