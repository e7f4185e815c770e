//! Definition und zeichnen einer [`Kurve`].
//!
//! Eine Kurve beschreibt immer einen achsen-parallelen Viertelkreis.
//! Ein Zug, der die Kurve [`gegen den Uhrzeigersinn`](Kurve::einfahrt_gegen_uhrzeigersinn)
//! befährt, betritt sie am Ursprung. Bei einer Fahrt
//! [`im Uhrzeigersinn`](Kurve::einfahrt_im_uhrzeigersinn) wird sie am entfernten Endpunkt betreten.

use std::f32::consts::PI;

use zugbau_id::GleisId;
use zugbau_typen::{Lage, Punkt, Richtung, Skalar, Vektor, WinkelGradmaß};

use crate::{
    element::{self, Element},
    segment::{
        beschränke, Fahrmarke, KonstruktionsFehler, Segment, UngültigeRichtung, Verbindung,
        Verschmelzung,
    },
    zeichnen::MeshErbauer,
};

/// Ein Viertelkreis mit ganzzahligem Radius (in Feldern).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kurve {
    ursprung: Punkt,
    /// Start-Winkel in Vielfachen von 90°.
    start: i32,
    /// End-Winkel in Vielfachen von 90°, immer `start + 1`.
    ende: i32,
    radius: i32,
}

/// `(sin, cos)` eines Vielfachen von 90°.
fn sin_cos(viertel: i32) -> (i32, i32) {
    match viertel.rem_euclid(4) {
        0 => (0, 1),
        1 => (1, 0),
        2 => (0, -1),
        _ => (-1, 0),
    }
}

/// Interpretiere einen Winkel als Vielfaches von 90°.
fn als_viertel(winkel: WinkelGradmaß) -> Option<i32> {
    let viertel = (winkel.grad() / 90.).round();
    // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
    #[allow(clippy::arithmetic_side_effects)]
    let abweichung = (viertel * 90. - winkel.grad()).abs();
    // Der Wert ist gerundet und deutlich kleiner als i32::MAX.
    #[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
    (abweichung < 1e-3 && viertel.abs() < 1e6).then_some(viertel as i32)
}

impl Kurve {
    /// Erstelle eine neue [`Kurve`] von `start` bis `ende` mit Radius `radius`.
    ///
    /// ## Errors
    ///
    /// `ende` ist nicht größer als `start`, die Winkel sind keine Vielfachen von 90°,
    /// die Kurve ist kein Viertelkreis, oder `radius < 1`.
    pub fn neu(
        start: WinkelGradmaß,
        ende: WinkelGradmaß,
        radius: i32,
    ) -> Result<Self, KonstruktionsFehler> {
        if ende <= start {
            return Err(KonstruktionsFehler::UmgekehrteWinkel { start, ende });
        }
        let (start_viertel, ende_viertel) = match (als_viertel(start), als_viertel(ende)) {
            (Some(start_viertel), Some(ende_viertel))
                if ende_viertel.checked_sub(start_viertel) == Some(1) =>
            {
                (start_viertel, ende_viertel)
            },
            _ => return Err(KonstruktionsFehler::KeinViertelkreis { start, ende }),
        };
        if radius < 1 {
            return Err(KonstruktionsFehler::UngültigerRadius(radius));
        }
        Ok(Kurve { ursprung: Punkt::NULL, start: start_viertel, ende: ende_viertel, radius })
    }

    /// Der Start-Winkel.
    #[must_use]
    pub fn start(&self) -> WinkelGradmaß {
        viertel_winkel(self.start)
    }

    /// Der End-Winkel.
    #[must_use]
    pub fn ende(&self) -> WinkelGradmaß {
        viertel_winkel(self.ende)
    }

    /// Der Radius (in Feldern).
    #[must_use]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Fahrtrichtung beim Betreten am entfernten Endpunkt (Fahrt im Uhrzeigersinn).
    #[must_use]
    pub fn einfahrt_im_uhrzeigersinn(&self) -> Richtung {
        let (sin, cos) = sin_cos(self.ende);
        Richtung::aus_komponenten(cos.saturating_neg(), sin).unwrap_or(Richtung::PlusX)
    }

    /// Fahrtrichtung beim Betreten am Ursprung (Fahrt gegen den Uhrzeigersinn).
    #[must_use]
    pub fn einfahrt_gegen_uhrzeigersinn(&self) -> Richtung {
        let (sin, cos) = sin_cos(self.start);
        Richtung::aus_komponenten(cos, sin.saturating_neg()).unwrap_or(Richtung::PlusX)
    }

    /// Verschiebung vom Ursprung zum entfernten Endpunkt.
    fn verschiebung(&self) -> Punkt {
        let (sin_start, cos_start) = sin_cos(self.start);
        let (sin_ende, cos_ende) = sin_cos(self.ende);
        let faktor = self.radius.saturating_sub(1);
        Punkt {
            x: faktor.saturating_mul(sin_ende.saturating_sub(sin_start)),
            y: faktor.saturating_mul(cos_ende.saturating_sub(cos_start)),
        }
    }

    /// Der entfernte Endpunkt.
    #[must_use]
    pub fn entfernter_endpunkt(&self) -> Punkt {
        self.ursprung + self.verschiebung()
    }

    /// Länge der befahrenen Kreisbahn.
    #[must_use]
    pub fn länge(&self) -> Skalar {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            Skalar(PI) * self.schienen_radius() / Skalar(2.)
        }
    }

    /// Radius der Kreisbahn, auf der sich die Züge bewegen.
    fn schienen_radius(&self) -> Skalar {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            Skalar::from(self.radius) - Skalar(0.5)
        }
    }

    /// Zentrum der Kreisbahn relativ zum Ursprung.
    fn zentrum_relativ(&self) -> Vektor {
        let ccw = self.einfahrt_gegen_uhrzeigersinn();
        let cw = self.einfahrt_im_uhrzeigersinn();
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            -ccw.skaliert(Skalar(0.5)) - cw.skaliert(self.schienen_radius())
        }
    }

    /// Gegen den Uhrzeigersinn wird die Kurve am Ursprung betreten,
    /// im Uhrzeigersinn am entfernten Endpunkt.
    fn prüfe_einfahrt(
        &self,
        richtung: Richtung,
        position: Punkt,
    ) -> Result<(), UngültigeRichtung> {
        let gegen_uhrzeigersinn = self.einfahrt_gegen_uhrzeigersinn();
        let im_uhrzeigersinn = self.einfahrt_im_uhrzeigersinn();
        if (richtung == gegen_uhrzeigersinn && position == self.ursprung)
            || (richtung == im_uhrzeigersinn && position == self.entfernter_endpunkt())
        {
            Ok(())
        } else {
            Err(UngültigeRichtung {
                art: self.art(),
                richtung,
                position,
                erwartet: (im_uhrzeigersinn, gegen_uhrzeigersinn),
            })
        }
    }
}

fn viertel_winkel(viertel: i32) -> WinkelGradmaß {
    // Vielfache von 90 mit |viertel| < 1e6 sind exakt als f32 darstellbar.
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    let grad = viertel.saturating_mul(90) as f32;
    WinkelGradmaß::neu(grad)
}

impl Segment for Kurve {
    fn art(&self) -> &'static str {
        "Kurve"
    }

    fn setze_ursprung(&mut self, ursprung: Punkt) {
        self.ursprung = ursprung;
    }

    fn ursprung(&self) -> Punkt {
        self.ursprung
    }

    fn segment_länge(&self, _fahrmarke: &Fahrmarke) -> Skalar {
        self.länge()
    }

    fn ist_gültige_richtung(&self, richtung: Richtung) -> bool {
        richtung == self.einfahrt_im_uhrzeigersinn()
            || richtung == self.einfahrt_gegen_uhrzeigersinn()
    }

    fn fahrmarke(
        &self,
        gleis: GleisId,
        position: Punkt,
        richtung: Richtung,
    ) -> Result<Fahrmarke, UngültigeRichtung> {
        self.prüfe_einfahrt(richtung, position)?;
        Ok(Fahrmarke { gleis, richtung, position, ausgänge: 1 })
    }

    fn transformiere(
        &self,
        fahrmarke: &Fahrmarke,
        delta: Skalar,
    ) -> Result<Lage, UngültigeRichtung> {
        self.prüfe_einfahrt(fahrmarke.richtung, fahrmarke.position)?;
        let länge = self.länge();
        let delta = beschränke(delta, länge);
        let rückwärts = fahrmarke.richtung == self.einfahrt_im_uhrzeigersinn();
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let lage = {
            let verhältnis = if rückwärts {
                Skalar(1.) - delta / länge
            } else {
                delta / länge
            };
            let winkel = self.start() + WinkelGradmaß::neu(90. * verhältnis.0);
            let zentrum = Vektor::from(self.ursprung) + self.zentrum_relativ();
            let radius = self.schienen_radius();
            let punkt = zentrum + Vektor { x: winkel.sin(), y: winkel.cos() } * radius;
            let gier = if rückwärts { WinkelGradmaß::neu(180.) - winkel } else { -winkel };
            Lage::neu(punkt, gier)
        };
        Ok(lage)
    }

    fn nächste_position(&self, fahrmarke: &Fahrmarke) -> Result<Verbindung, UngültigeRichtung> {
        self.prüfe_einfahrt(fahrmarke.richtung, fahrmarke.position)?;
        let verbindung = if fahrmarke.richtung == self.einfahrt_im_uhrzeigersinn() {
            let richtung = -self.einfahrt_gegen_uhrzeigersinn();
            Verbindung { punkt: self.ursprung + richtung, richtung }
        } else {
            let richtung = -self.einfahrt_im_uhrzeigersinn();
            Verbindung { punkt: self.entfernter_endpunkt() + richtung, richtung }
        };
        Ok(verbindung)
    }

    fn endpunkte(&self) -> Vec<Punkt> {
        vec![self.ursprung, self.entfernter_endpunkt()]
    }

    fn belegte_felder(&self) -> Vec<Punkt> {
        let mut felder = self.endpunkte();
        felder.dedup();
        felder
    }

    fn verschmelze_ausgang(&self, punkt: Punkt, richtung: Richtung) -> Verschmelzung {
        if self.ist_gültige_richtung(richtung) && self.endpunkte().contains(&punkt) {
            Verschmelzung::Unverändert
        } else {
            Verschmelzung::Unmöglich
        }
    }

    fn zeichne(&self, erbauer: &mut dyn MeshErbauer) {
        let zentrum = self.zentrum_relativ();
        let radius = self.schienen_radius();
        erbauer.kurven_schiene(zentrum, radius, self.start(), self.ende());
        // Schwellen etwa alle 0.25 Längeneinheiten.
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let anzahl = (self.länge().0 * 4.).round().max(1.);
        // Die Anzahl ist positiv und klein.
        #[allow(
            clippy::as_conversions,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let anzahl = anzahl as u16;
        for i in 0..anzahl {
            // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
            #[allow(clippy::arithmetic_side_effects)]
            {
                let verhältnis = (f32::from(i) + 0.5) / f32::from(anzahl);
                let winkel = self.start() + WinkelGradmaß::neu(90. * verhältnis);
                let punkt = zentrum + Vektor { x: winkel.sin(), y: winkel.cos() } * radius;
                erbauer.schwelle(punkt, -winkel);
            }
        }
    }

    fn als_element(&self) -> Element {
        Element::neu(element::KURVE)
            .mit_attribut("startAngle", self.start().grad())
            .mit_attribut("finishAngle", self.ende().grad())
            .mit_attribut("radius", self.radius)
    }
}
