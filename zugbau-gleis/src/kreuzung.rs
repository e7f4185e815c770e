//! Definition und zeichnen einer [`Kreuzung`].

use zugbau_id::GleisId;
use zugbau_typen::{Lage, Punkt, Richtung, Skalar, Vektor};

use crate::{
    element::{self, Element},
    segment::{
        beschränke, gerade_lage, Fahrmarke, Segment, UngültigeRichtung, Verbindung, Verschmelzung,
    },
    zeichnen::{schwellen, MeshErbauer},
};

/// Zwei sich rechtwinklig kreuzende Geraden auf einem Feld.
///
/// Alle vier Richtungen sind erlaubt, Züge fahren immer geradeaus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kreuzung {
    ursprung: Punkt,
}

impl Kreuzung {
    /// Erstelle eine neue [`Kreuzung`].
    #[must_use]
    pub fn neu() -> Self {
        Kreuzung { ursprung: Punkt::NULL }
    }
}

impl Default for Kreuzung {
    fn default() -> Self {
        Kreuzung::neu()
    }
}

impl Segment for Kreuzung {
    fn art(&self) -> &'static str {
        "Kreuzung"
    }

    fn setze_ursprung(&mut self, ursprung: Punkt) {
        self.ursprung = ursprung;
    }

    fn ursprung(&self) -> Punkt {
        self.ursprung
    }

    fn segment_länge(&self, _fahrmarke: &Fahrmarke) -> Skalar {
        Skalar(1.)
    }

    fn ist_gültige_richtung(&self, _richtung: Richtung) -> bool {
        true
    }

    fn fahrmarke(
        &self,
        gleis: GleisId,
        position: Punkt,
        richtung: Richtung,
    ) -> Result<Fahrmarke, UngültigeRichtung> {
        Ok(Fahrmarke { gleis, richtung, position, ausgänge: 1 })
    }

    fn transformiere(
        &self,
        fahrmarke: &Fahrmarke,
        delta: Skalar,
    ) -> Result<Lage, UngültigeRichtung> {
        let delta = beschränke(delta, self.segment_länge(fahrmarke));
        Ok(gerade_lage(self.ursprung, fahrmarke.richtung, delta))
    }

    fn nächste_position(&self, fahrmarke: &Fahrmarke) -> Result<Verbindung, UngültigeRichtung> {
        Ok(Verbindung { punkt: self.ursprung + fahrmarke.richtung, richtung: fahrmarke.richtung })
    }

    fn endpunkte(&self) -> Vec<Punkt> {
        vec![self.ursprung]
    }

    fn verschmelze_ausgang(&self, punkt: Punkt, _richtung: Richtung) -> Verschmelzung {
        if punkt == self.ursprung {
            Verschmelzung::Unverändert
        } else {
            Verschmelzung::Unmöglich
        }
    }

    fn zeichne(&self, erbauer: &mut dyn MeshErbauer) {
        for achse in [Richtung::PlusX, Richtung::PlusY] {
            let gier = achse.gier();
            erbauer.gerade_schiene(Vektor::null_vektor(), gier);
            let vektor = achse.als_vektor();
            // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
            #[allow(clippy::arithmetic_side_effects)]
            let start = vektor * Skalar(-0.4);
            schwellen(erbauer, start, vektor, gier, 4);
        }
    }

    fn als_element(&self) -> Element {
        Element::neu(element::KREUZUNG)
    }
}
