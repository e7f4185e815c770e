//! Schnittstelle zum Erzeugen der Gleis-Geometrie.
//!
//! Alle Positionen sind relativ zum Ursprung des jeweiligen Gleises in Raster-Koordinaten.

use zugbau_typen::{BezierKurve, Skalar, Vektor, WinkelGradmaß};

/// Erzeugt die Geometrie (Meshes) aus Schienen und Schwellen.
pub trait MeshErbauer {
    /// Eine gerade Schiene der Länge 1 mit Zentrum `zentrum`, ausgerichtet nach `gier`.
    fn gerade_schiene(&mut self, zentrum: Vektor, gier: WinkelGradmaß);

    /// Eine Schwelle mit Zentrum `zentrum`, quer zur Fahrtrichtung `gier`.
    fn schwelle(&mut self, zentrum: Vektor, gier: WinkelGradmaß);

    /// Eine gebogene Schiene um `zentrum` mit Radius `radius`, von `start` bis `ende`.
    ///
    /// Die Winkel beschreiben die Position `zentrum + radius * (sin θ, cos θ)`.
    fn kurven_schiene(
        &mut self,
        zentrum: Vektor,
        radius: Skalar,
        start: WinkelGradmaß,
        ende: WinkelGradmaß,
    );

    /// Eine Schiene entlang einer [`BezierKurve`], die Kurve wird um `gier` gedreht
    /// und nach `ursprung` verschoben.
    fn bezier_schiene(&mut self, kurve: &BezierKurve, ursprung: Vektor, gier: WinkelGradmaß);
}

/// Ein aufgezeichneter Aufruf eines [`MeshErbauer`].
#[derive(Debug, Clone, PartialEq)]
pub enum MeshBefehl {
    /// [`MeshErbauer::gerade_schiene`]
    GeradeSchiene {
        /// Zentrum der Schiene.
        zentrum: Vektor,
        /// Ausrichtung der Schiene.
        gier: WinkelGradmaß,
    },
    /// [`MeshErbauer::schwelle`]
    Schwelle {
        /// Zentrum der Schwelle.
        zentrum: Vektor,
        /// Fahrtrichtung an der Schwelle.
        gier: WinkelGradmaß,
    },
    /// [`MeshErbauer::kurven_schiene`]
    KurvenSchiene {
        /// Kreis-Zentrum.
        zentrum: Vektor,
        /// Radius der Schiene.
        radius: Skalar,
        /// Start-Winkel.
        start: WinkelGradmaß,
        /// End-Winkel.
        ende: WinkelGradmaß,
    },
    /// [`MeshErbauer::bezier_schiene`]
    BezierSchiene {
        /// Kontrollpunkte der Kurve.
        kontrollpunkte: [Vektor; 4],
        /// Verschiebung der Kurve.
        ursprung: Vektor,
        /// Drehung der Kurve.
        gier: WinkelGradmaß,
    },
}

/// Ein [`MeshErbauer`], der alle Aufrufe aufzeichnet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshProtokoll {
    /// Alle bisherigen Aufrufe in Reihenfolge.
    pub befehle: Vec<MeshBefehl>,
}

impl MeshProtokoll {
    /// Anzahl aufgezeichneter Schwellen.
    #[must_use]
    pub fn anzahl_schwellen(&self) -> usize {
        self.befehle.iter().filter(|befehl| matches!(befehl, MeshBefehl::Schwelle { .. })).count()
    }

    /// Anzahl aufgezeichneter Schienen jeder Art.
    #[must_use]
    pub fn anzahl_schienen(&self) -> usize {
        self.befehle.len().saturating_sub(self.anzahl_schwellen())
    }
}

impl MeshErbauer for MeshProtokoll {
    fn gerade_schiene(&mut self, zentrum: Vektor, gier: WinkelGradmaß) {
        self.befehle.push(MeshBefehl::GeradeSchiene { zentrum, gier });
    }

    fn schwelle(&mut self, zentrum: Vektor, gier: WinkelGradmaß) {
        self.befehle.push(MeshBefehl::Schwelle { zentrum, gier });
    }

    fn kurven_schiene(
        &mut self,
        zentrum: Vektor,
        radius: Skalar,
        start: WinkelGradmaß,
        ende: WinkelGradmaß,
    ) {
        self.befehle.push(MeshBefehl::KurvenSchiene { zentrum, radius, start, ende });
    }

    fn bezier_schiene(&mut self, kurve: &BezierKurve, ursprung: Vektor, gier: WinkelGradmaß) {
        self.befehle.push(MeshBefehl::BezierSchiene {
            kontrollpunkte: *kurve.kontrollpunkte(),
            ursprung,
            gier,
        });
    }
}

/// Zeichne `anzahl` Schwellen im Abstand `0.25` entlang `richtung`, beginnend bei `start`.
pub(crate) fn schwellen(
    erbauer: &mut dyn MeshErbauer,
    start: Vektor,
    richtung: Vektor,
    gier: WinkelGradmaß,
    anzahl: u8,
) {
    for i in 0..anzahl {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let zentrum = start + richtung * Skalar(0.25 * f32::from(i));
        erbauer.schwelle(zentrum, gier);
    }
}
