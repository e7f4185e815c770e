//! Platzieren neuer Gleise, wie sie im Editor gezeichnet werden.
//!
//! Neue Felder werden wenn möglich mit bestehenden Gleisen verschmolzen.
//! Abgelehnte Platzierungen sind kein Fehler, sie werden als Warnung protokolliert
//! und lassen das Raster unverändert.

use log::{debug, warn};

use zugbau_gleis::{Gerade, Kurve, Segment, Verschmelzung};
use zugbau_id::GleisId;
use zugbau_typen::{Punkt, Richtung, WinkelGradmaß};

use crate::{Fehler, Gleisnetz, Karte};

/// Ergebnis einer Platzierung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bauergebnis {
    /// Ein neues Gleis wurde auf freien Feldern platziert.
    Neu(GleisId),
    /// Ein bestehendes Gleis wurde durch ein verschmolzenes Gleis ersetzt.
    Verschmolzen(GleisId),
    /// Das bestehende Gleis erlaubt die Verbindung bereits.
    Unverändert,
    /// Die Platzierung ist nicht möglich.
    Abgelehnt,
}

/// Die andere Achse, jeweils in positiver Richtung.
fn andere_achse(achse: Richtung) -> Richtung {
    if achse.ist_x_achse() {
        Richtung::PlusY
    } else {
        Richtung::PlusX
    }
}

impl Gleisnetz {
    /// Kann das Gleis bei `erster` in Richtung von oder nach `zweiter` befahren werden?
    #[must_use]
    pub fn kann_verbinden(&self, erster: Punkt, zweiter: Punkt) -> bool {
        let Some((_id, segment)) = self.gleis_bei(erster) else {
            return false;
        };
        match Richtung::aus_differenz(zweiter, erster) {
            Ok(richtung) => {
                segment.ist_gültige_richtung(richtung) || segment.ist_gültige_richtung(-richtung)
            },
            Err(_keine_achse) => false,
        }
    }

    /// Füge dem Gleis am Feld `gleis` einen Ausgang bei `ausgang` in Richtung `richtung` hinzu.
    ///
    /// Das Gleis wird dafür eventuell durch eine [`Kreuzung`](zugbau_gleis::Kreuzung)
    /// oder [`Weiche`](zugbau_gleis::Weiche) ersetzt.
    ///
    /// ## Errors
    ///
    /// Am Feld `gleis` liegt kein Gleis, oder es war keine [`GleisId`] verfügbar.
    pub fn füge_ausgang_hinzu(
        &mut self,
        gleis: Punkt,
        ausgang: Punkt,
        richtung: Richtung,
    ) -> Result<Bauergebnis, Fehler> {
        let (art, verschmelzung) = match self.gleis_bei(gleis) {
            Some((_id, segment)) => {
                (segment.art(), segment.verschmelze_ausgang(ausgang, richtung))
            },
            None => return Err(Fehler::KeinGleis(gleis)),
        };
        let ergebnis = match verschmelzung {
            Verschmelzung::Unverändert => Bauergebnis::Unverändert,
            Verschmelzung::Ersetzt(neu) => {
                debug!("{art} bei {gleis} wird durch {} ersetzt.", neu.art());
                let ursprung = neu.ursprung();
                Bauergebnis::Verschmolzen(self.setze_gleis(ursprung, neu)?)
            },
            Verschmelzung::Unmöglich => {
                warn!("Ausgang {ausgang} in Richtung {richtung} passt nicht zu {art} bei {gleis}.");
                Bauergebnis::Abgelehnt
            },
        };
        Ok(ergebnis)
    }

    /// Zeichne ein einzelnes Feld entlang `achse`.
    ///
    /// Ein bestehendes Gleis wird verschmolzen, auf einem freien Feld entsteht eine [`Gerade`].
    ///
    /// ## Errors
    ///
    /// Es war keine [`GleisId`] verfügbar.
    pub fn zeichne_gleis_feld(
        &mut self,
        punkt: Punkt,
        achse: Richtung,
    ) -> Result<Bauergebnis, Fehler> {
        if self.ist_gültiges_gleis(punkt) {
            self.füge_ausgang_hinzu(punkt, punkt, achse)
        } else {
            Ok(Bauergebnis::Neu(self.setze_gleis(punkt, Box::new(Gerade::neu(achse)))?))
        }
    }

    /// Zeichne `länge` Felder ab `start` in Richtung `richtung`.
    ///
    /// ## Errors
    ///
    /// Es war keine [`GleisId`] verfügbar.
    pub fn zeichne_gerade_strecke(
        &mut self,
        start: Punkt,
        richtung: Richtung,
        länge: u32,
    ) -> Result<Vec<Bauergebnis>, Fehler> {
        let mut punkt = start;
        let mut ergebnisse = Vec::new();
        for _ in 0..länge {
            ergebnisse.push(self.zeichne_gleis_feld(punkt, richtung)?);
            punkt = punkt + richtung;
        }
        Ok(ergebnisse)
    }

    /// Vermutete Achse eines neuen Gleises am Feld `punkt`, anhand der Nachbar-Gleise.
    fn vermutete_achse(&self, punkt: Punkt) -> Option<Richtung> {
        let verbindet = |richtung: Richtung| {
            self.kann_verbinden(punkt + richtung, punkt)
                || self.kann_verbinden(punkt + -richtung, punkt)
        };
        if verbindet(Richtung::PlusX) {
            Some(Richtung::PlusX)
        } else if verbindet(Richtung::PlusY) {
            Some(Richtung::PlusY)
        } else {
            None
        }
    }

    /// Verbinde die Felder `anfang` und `ende` auf die einfachste Weise.
    ///
    /// Die Ausrichtung an beiden Enden wird aus den Nachbar-Gleisen geschlossen.
    /// Ist das aufgespannte Rechteck nur ein Feld breit, entsteht eine gerade Strecke.
    /// Andernfalls wird das Rechteck mit geraden Stücken zu einem Quadrat verkleinert und
    /// mit einer [`Kurve`] verbunden. S-Kurven werden nicht unterstützt.
    ///
    /// ## Errors
    ///
    /// Es war keine [`GleisId`] verfügbar.
    pub fn zeichne_gezogenes_gleis(
        &mut self,
        anfang: Punkt,
        ende: Punkt,
    ) -> Result<Vec<Bauergebnis>, Fehler> {
        let (min, max) = anfang.rechteck(&ende);
        let mut x_länge = max.x.abs_diff(min.x).saturating_add(1);
        let mut y_länge = max.y.abs_diff(min.y).saturating_add(1);
        let (mut anfang, mut ende) =
            if anfang.x > ende.x { (ende, anfang) } else { (anfang, ende) };

        let (start_achse, end_achse) =
            match (self.vermutete_achse(anfang), self.vermutete_achse(ende)) {
                (None, None) if x_länge.min(y_länge) <= 2 => {
                    let achse = if x_länge > y_länge { Richtung::PlusX } else { Richtung::PlusY };
                    (achse, achse)
                },
                (None, None) => (Richtung::PlusX, Richtung::PlusY),
                (None, Some(end_achse)) => (andere_achse(end_achse), end_achse),
                (Some(start_achse), None) => (start_achse, andere_achse(start_achse)),
                (Some(start_achse), Some(end_achse)) => (start_achse, end_achse),
            };
        debug!(
            "Gezogenes Gleis von {anfang} ({start_achse}) bis {ende} ({end_achse}), \
            {x_länge}x{y_länge} Felder."
        );

        match (x_länge, y_länge) {
            (1, 1) => return Ok(vec![self.zeichne_gleis_feld(anfang, start_achse)?]),
            (1, _) => {
                let richtung = if anfang.y < ende.y { Richtung::PlusY } else { Richtung::MinusY };
                return self.zeichne_gerade_strecke(anfang, richtung, y_länge);
            },
            (_, 1) => return self.zeichne_gerade_strecke(anfang, Richtung::PlusX, x_länge),
            _ if start_achse == end_achse => {
                warn!("S-Kurven zwischen {anfang} und {ende} werden nicht unterstützt.");
                return Ok(vec![Bauergebnis::Abgelehnt]);
            },
            _ => {},
        }

        // Kurven sind immer Viertelkreise, daher zuerst auf ein Quadrat verkleinern.
        let mut ergebnisse = Vec::new();
        while x_länge != y_länge {
            if x_länge > y_länge {
                if start_achse.ist_x_achse() {
                    ergebnisse.push(self.zeichne_gleis_feld(anfang, Richtung::PlusX)?);
                    anfang = anfang + Richtung::PlusX;
                } else {
                    ergebnisse.push(self.zeichne_gleis_feld(ende, Richtung::PlusX)?);
                    ende = ende + Richtung::MinusX;
                }
                x_länge = x_länge.saturating_sub(1);
            } else {
                let zum_ende = if anfang.y > ende.y { Richtung::MinusY } else { Richtung::PlusY };
                if start_achse.ist_x_achse() {
                    ergebnisse.push(self.zeichne_gleis_feld(ende, Richtung::PlusY)?);
                    ende = ende + -zum_ende;
                } else {
                    ergebnisse.push(self.zeichne_gleis_feld(anfang, Richtung::PlusY)?);
                    anfang = anfang + zum_ende;
                }
                y_länge = y_länge.saturating_sub(1);
            }
        }

        let y_steigend = anfang.y < ende.y;
        let (start_winkel, end_winkel, ursprung) = match (start_achse.ist_x_achse(), y_steigend) {
            (true, true) => (90., 180., ende),
            (true, false) => (0., 90., anfang),
            (false, true) => (270., 360., anfang),
            (false, false) => (180., 270., ende),
        };
        let radius = i32::try_from(x_länge).unwrap_or(i32::MAX);
        let mut kurve =
            Kurve::neu(WinkelGradmaß::neu(start_winkel), WinkelGradmaß::neu(end_winkel), radius)?;
        kurve.setze_ursprung(ursprung);
        let belegt = kurve.endpunkte().into_iter().find(|punkt| self.ist_gültiges_gleis(*punkt));
        if let Some(belegt) = belegt {
            warn!("Kurve bei {ursprung} nicht möglich, {belegt} ist bereits belegt.");
            ergebnisse.push(Bauergebnis::Abgelehnt);
        } else {
            ergebnisse.push(Bauergebnis::Neu(self.setze_gleis(ursprung, Box::new(kurve))?));
        }
        Ok(ergebnisse)
    }
}
