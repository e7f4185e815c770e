//! Definition und zeichnen einer [`Weiche`].
//!
//! Eine Weiche beginnt an ihrem Ursprung und führt entweder gerade über drei Felder
//! oder entlang einer [`BezierKurve`] auf ein seitlich versetztes Feld.

use enum_iterator::{next_cycle, previous_cycle, Sequence};
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use zugbau_id::GleisId;
use zugbau_typen::{BezierKurve, Lage, Punkt, Richtung, Skalar, Vektor, WinkelGradmaß};

use crate::{
    element::{self, Element},
    segment::{beschränke, Fahrmarke, Segment, UngültigeRichtung, Verbindung, Verschmelzung},
    zeichnen::{schwellen, MeshErbauer},
};

/// Abzweigende Kurve in lokalen Koordinaten (x entlang der Achse, y seitlich).
static KURVE: Lazy<BezierKurve> = Lazy::new(|| {
    BezierKurve::neu([
        Vektor { x: Skalar(0.), y: Skalar(0.) },
        Vektor { x: Skalar(1.5), y: Skalar(0.) },
        Vektor { x: Skalar(1.5), y: Skalar(1.) },
        Vektor { x: Skalar(3.), y: Skalar(1.) },
    ])
});

/// Die gespiegelte Variante von [`KURVE`].
static KURVE_GESPIEGELT: Lazy<BezierKurve> = Lazy::new(|| KURVE.gespiegelt());

/// Länge der geraden Strecke einer [`Weiche`].
const GERADE_LÄNGE: Skalar = Skalar(3.);

/// Aktuelle Stellung einer [`Weiche`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
pub enum Zustand {
    /// Geradeaus.
    NichtGenommen,
    /// Abzweigend.
    Genommen,
}

/// Der befahrene Weg einer Fahrt über die [`Weiche`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Weg {
    Gerade,
    Abzweig,
}

/// Eine Weiche mit Haupt-Achse und fester Abzweig-Seite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weiche {
    ursprung: Punkt,
    achse: Richtung,
    gespiegelt: bool,
    zustand: Zustand,
}

impl Weiche {
    /// Erstelle eine neue [`Weiche`] entlang `achse`.
    ///
    /// Ohne Spiegelung zweigt die Weiche nach links ab (Drehung der Achse um +90°).
    #[must_use]
    pub fn neu(achse: Richtung, gespiegelt: bool) -> Self {
        Weiche { ursprung: Punkt::NULL, achse, gespiegelt, zustand: Zustand::NichtGenommen }
    }

    /// Die Haupt-Achse.
    #[must_use]
    pub fn achse(&self) -> Richtung {
        self.achse
    }

    /// Ist die Abzweig-Seite gespiegelt?
    #[must_use]
    pub fn gespiegelt(&self) -> bool {
        self.gespiegelt
    }

    /// Die aktuelle Stellung.
    #[must_use]
    pub fn zustand(&self) -> Zustand {
        self.zustand
    }

    /// Seitliche Richtung des Abzweigs.
    fn seite(&self) -> Richtung {
        let links = self.achse.gedreht_gegen_uhrzeigersinn();
        if self.gespiegelt {
            -links
        } else {
            links
        }
    }

    /// Endpunkt der geraden Strecke.
    #[must_use]
    pub fn gerader_endpunkt(&self) -> Punkt {
        self.ursprung + self.achse.als_punkt() * 2
    }

    /// Endpunkt des Abzweigs.
    #[must_use]
    pub fn versetzter_endpunkt(&self) -> Punkt {
        self.gerader_endpunkt() + self.seite()
    }

    fn kurve(&self) -> &'static BezierKurve {
        if self.gespiegelt {
            &*KURVE_GESPIEGELT
        } else {
            &*KURVE
        }
    }

    /// Welcher Weg wird mit der Fahrmarke befahren?
    ///
    /// Vom Ursprung aus entscheidet die Stellung, bei der Einfahrt von einem der
    /// entfernten Endpunkte die Position der Fahrmarke.
    fn weg(&self, fahrmarke: &Fahrmarke) -> Weg {
        if fahrmarke.richtung == self.achse {
            match self.zustand {
                Zustand::NichtGenommen => Weg::Gerade,
                Zustand::Genommen => Weg::Abzweig,
            }
        } else if fahrmarke.position == self.versetzter_endpunkt() {
            Weg::Abzweig
        } else {
            Weg::Gerade
        }
    }

    fn weg_länge(&self, weg: Weg) -> Skalar {
        match weg {
            Weg::Gerade => GERADE_LÄNGE,
            Weg::Abzweig => self.kurve().länge(),
        }
    }

    /// Rand des Ursprungs-Feldes, an dem beide Wege beginnen.
    fn basis(&self) -> Vektor {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            Vektor::from(self.ursprung) - self.achse.skaliert(Skalar(0.5))
        }
    }

    /// Auswärts wird die Weiche am Ursprung betreten, einwärts an einem der entfernten Endpunkte.
    fn prüfe_einfahrt(
        &self,
        richtung: Richtung,
        position: Punkt,
    ) -> Result<(), UngültigeRichtung> {
        let gültig = if richtung == self.achse {
            position == self.ursprung
        } else if richtung == -self.achse {
            position == self.gerader_endpunkt() || position == self.versetzter_endpunkt()
        } else {
            false
        };
        if gültig {
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

impl Segment for Weiche {
    fn art(&self) -> &'static str {
        "Weiche"
    }

    fn setze_ursprung(&mut self, ursprung: Punkt) {
        self.ursprung = ursprung;
    }

    fn ursprung(&self) -> Punkt {
        self.ursprung
    }

    fn segment_länge(&self, fahrmarke: &Fahrmarke) -> Skalar {
        self.weg_länge(self.weg(fahrmarke))
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
        self.prüfe_einfahrt(richtung, position)?;
        let ausgänge = if position == self.ursprung { 2 } else { 1 };
        Ok(Fahrmarke { gleis, richtung, position, ausgänge })
    }

    fn transformiere(
        &self,
        fahrmarke: &Fahrmarke,
        delta: Skalar,
    ) -> Result<Lage, UngültigeRichtung> {
        self.prüfe_einfahrt(fahrmarke.richtung, fahrmarke.position)?;
        let weg = self.weg(fahrmarke);
        let länge = self.weg_länge(weg);
        let delta = beschränke(delta, länge);
        let auswärts = fahrmarke.richtung == self.achse;
        let achse = self.achse.als_vektor();
        let basis = self.basis();
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let lage = match weg {
            Weg::Gerade => {
                let strecke = if auswärts { delta } else { länge - delta };
                Lage::neu(basis + achse * strecke, fahrmarke.richtung.gier())
            },
            Weg::Abzweig => {
                let seite = self.achse.gedreht_gegen_uhrzeigersinn().als_vektor();
                let verhältnis = delta / länge;
                let t = if auswärts { verhältnis } else { Skalar(1.) - verhältnis };
                let kurve = self.kurve();
                let lokal = kurve.auswerten(t);
                let ableitung_lokal = kurve.ableitung(t);
                let punkt = basis + achse * lokal.x + seite * lokal.y;
                let ableitung = achse * ableitung_lokal.x + seite * ableitung_lokal.y;
                let mut gier = WinkelGradmaß::richtung_von(ableitung);
                if !auswärts {
                    gier = gier + WinkelGradmaß::neu(180.);
                }
                Lage::neu(punkt, gier)
            },
        };
        Ok(lage)
    }

    fn nächste_position(&self, fahrmarke: &Fahrmarke) -> Result<Verbindung, UngültigeRichtung> {
        self.prüfe_einfahrt(fahrmarke.richtung, fahrmarke.position)?;
        let verbindung = if fahrmarke.richtung == self.achse {
            let punkt = match self.zustand {
                Zustand::NichtGenommen => self.ursprung + self.achse.als_punkt() * 3,
                Zustand::Genommen => self.versetzter_endpunkt() + self.achse,
            };
            Verbindung { punkt, richtung: self.achse }
        } else {
            Verbindung { punkt: self.ursprung + -self.achse, richtung: -self.achse }
        };
        Ok(verbindung)
    }

    fn endpunkte(&self) -> Vec<Punkt> {
        vec![self.ursprung, self.gerader_endpunkt(), self.versetzter_endpunkt()]
    }

    fn belegte_felder(&self) -> Vec<Punkt> {
        vec![
            self.ursprung,
            self.ursprung + self.achse,
            self.gerader_endpunkt(),
            self.versetzter_endpunkt(),
        ]
    }

    fn verschmelze_ausgang(&self, punkt: Punkt, richtung: Richtung) -> Verschmelzung {
        // Eine Weiche wird nie weiter umgebaut.
        if self.ist_gültige_richtung(richtung) && punkt == self.ursprung {
            Verschmelzung::Unverändert
        } else {
            Verschmelzung::Unmöglich
        }
    }

    fn hat_mehrere_zustände(&self) -> bool {
        true
    }

    fn nächster_zustand(&mut self) {
        if let Some(zustand) = next_cycle(&self.zustand) {
            debug!("Weiche bei {}: {:?} -> {:?}", self.ursprung, self.zustand, zustand);
            self.zustand = zustand;
        }
    }

    fn vorheriger_zustand(&mut self) {
        if let Some(zustand) = previous_cycle(&self.zustand) {
            debug!("Weiche bei {}: {:?} -> {:?}", self.ursprung, self.zustand, zustand);
            self.zustand = zustand;
        }
    }

    fn zeichne(&self, erbauer: &mut dyn MeshErbauer) {
        let gier = self.achse.gier();
        let achse = self.achse.als_vektor();
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let basis = achse * Skalar(-0.5);
        erbauer.bezier_schiene(self.kurve(), basis, gier);
        for i in 0..3_u8 {
            // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
            #[allow(clippy::arithmetic_side_effects)]
            let zentrum = basis + achse * Skalar(f32::from(i) + 0.5);
            erbauer.gerade_schiene(zentrum, gier);
        }
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let start = achse * Skalar(-0.4);
        schwellen(erbauer, start, achse, gier, 12);
    }

    fn als_element(&self) -> Element {
        Element::neu(element::WEICHE)
            .mit_attribut("align", self.achse.to_string().trim_start_matches('+'))
            .mit_attribut("reflect", self.gespiegelt)
    }
}
