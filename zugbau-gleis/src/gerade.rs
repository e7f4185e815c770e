//! Definition und zeichnen einer [`Gerade`].

use log::debug;

use zugbau_id::GleisId;
use zugbau_typen::{Lage, Punkt, Richtung, Skalar, Vektor};

use crate::{
    element::{self, Element},
    kreuzung::Kreuzung,
    segment::{
        beschränke, gerade_lage, Fahrmarke, KonstruktionsFehler, Segment, UngültigeRichtung,
        Verbindung, Verschmelzung,
    },
    weiche::Weiche,
    zeichnen::{schwellen, MeshErbauer},
};

/// Ein gerades Gleis über genau ein Feld.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gerade {
    ursprung: Punkt,
    /// Immer [`Richtung::PlusX`] oder [`Richtung::PlusY`].
    achse: Richtung,
}

impl Gerade {
    /// Erstelle eine neue [`Gerade`] entlang der Achse von `richtung`.
    ///
    /// Negative Richtungen werden auf die positive Richtung der selben Achse abgebildet.
    #[must_use]
    pub fn neu(richtung: Richtung) -> Self {
        let achse = match richtung {
            Richtung::PlusX | Richtung::MinusX => Richtung::PlusX,
            Richtung::PlusY | Richtung::MinusY => Richtung::PlusY,
        };
        Gerade { ursprung: Punkt::NULL, achse }
    }

    /// Erstelle eine neue [`Gerade`] aus den Komponenten eines Richtungs-Vektors.
    ///
    /// ## Errors
    ///
    /// Die Komponenten beschreiben keinen Einheitsvektor entlang einer Achse.
    pub fn aus_komponenten(x: i32, y: i32) -> Result<Self, KonstruktionsFehler> {
        Richtung::aus_komponenten(x, y)
            .map(Gerade::neu)
            .ok_or(KonstruktionsFehler::KeineAchse { x, y })
    }

    /// Die (positive) Achse der [`Gerade`].
    #[must_use]
    pub fn achse(&self) -> Richtung {
        self.achse
    }

    fn prüfe_richtung(
        &self,
        richtung: Richtung,
        position: Punkt,
    ) -> Result<(), UngültigeRichtung> {
        if self.ist_gültige_richtung(richtung) {
            Ok(())
        } else {
            Err(UngültigeRichtung {
                art: self.art(),
                richtung,
                position,
                erwartet: (self.achse, -self.achse),
            })
        }
    }
}

impl Segment for Gerade {
    fn art(&self) -> &'static str {
        "Gerade"
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

    fn ist_gültige_richtung(&self, richtung: Richtung) -> bool {
        self.achse.ist_parallel(richtung)
    }

    fn fahrmarke(
        &self,
        gleis: GleisId,
        position: Punkt,
        richtung: Richtung,
    ) -> Result<Fahrmarke, UngültigeRichtung> {
        self.prüfe_richtung(richtung, position)?;
        Ok(Fahrmarke { gleis, richtung, position, ausgänge: 1 })
    }

    fn transformiere(
        &self,
        fahrmarke: &Fahrmarke,
        delta: Skalar,
    ) -> Result<Lage, UngültigeRichtung> {
        self.prüfe_richtung(fahrmarke.richtung, fahrmarke.position)?;
        let delta = beschränke(delta, self.segment_länge(fahrmarke));
        Ok(gerade_lage(self.ursprung, fahrmarke.richtung, delta))
    }

    fn nächste_position(&self, fahrmarke: &Fahrmarke) -> Result<Verbindung, UngültigeRichtung> {
        self.prüfe_richtung(fahrmarke.richtung, fahrmarke.position)?;
        Ok(Verbindung { punkt: self.ursprung + fahrmarke.richtung, richtung: fahrmarke.richtung })
    }

    fn endpunkte(&self) -> Vec<Punkt> {
        vec![self.ursprung]
    }

    fn verschmelze_ausgang(&self, punkt: Punkt, richtung: Richtung) -> Verschmelzung {
        debug!("Verschmelze {punkt} in Richtung {richtung} mit Gerade bei {}", self.ursprung);
        if punkt == self.ursprung {
            return if self.ist_gültige_richtung(richtung) {
                Verschmelzung::Unverändert
            } else {
                let mut kreuzung = Kreuzung::neu();
                kreuzung.setze_ursprung(self.ursprung);
                Verschmelzung::Ersetzt(Box::new(kreuzung))
            };
        }
        if self.ist_gültige_richtung(richtung) {
            // Die Weiche beginnt am Ursprung, ihr abzweigender Endpunkt liegt bei `punkt`.
            for achse in [self.achse, -self.achse] {
                for gespiegelt in [false, true] {
                    let mut weiche = Weiche::neu(achse, gespiegelt);
                    weiche.setze_ursprung(self.ursprung);
                    if weiche.versetzter_endpunkt() == punkt {
                        return Verschmelzung::Ersetzt(Box::new(weiche));
                    }
                }
            }
        }
        Verschmelzung::Unmöglich
    }

    fn zeichne(&self, erbauer: &mut dyn MeshErbauer) {
        let gier = self.achse.gier();
        erbauer.gerade_schiene(Vektor::null_vektor(), gier);
        let achse = self.achse.als_vektor();
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let start = achse * Skalar(-0.4);
        schwellen(erbauer, start, achse, gier, 4);
    }

    fn als_element(&self) -> Element {
        let align = if self.achse.ist_x_achse() { "x" } else { "y" };
        Element::neu(element::GERADE).mit_attribut("align", align)
    }
}

#[cfg(test)]
mod test;
