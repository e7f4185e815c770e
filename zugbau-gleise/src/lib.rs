//! Das Raster aller platzierten Gleise.
//!
//! Jedes belegte Feld verweist auf das Gleis, welches es belegt.
//! Fahrmarken speichern nur die [`GleisId`], daher wird vor jeder Verwendung geprüft,
//! ob das Gleis noch existiert.

// Erlaubt gleise::Gleisnetz, gleise::Karte, ...
#![allow(clippy::pub_use)]

use std::collections::{BTreeMap, HashMap};

use log::debug;
use thiserror::Error;

use zugbau_gleis::{Fahrmarke, KonstruktionsFehler, Segment, UngültigeRichtung};
use zugbau_id::{GleisId, KeineIdVerfügbar};
use zugbau_typen::{Lage, Punkt, Richtung, Skalar};

pub mod bauen;
#[path = "hinzufügen_entfernen.rs"]
mod hinzufügen_entfernen;
pub mod iterator;
pub mod karte;
pub mod speichern_laden;

#[cfg(test)]
mod test;

pub use self::{
    bauen::Bauergebnis,
    iterator::{iteriere_gleis, GleisIterator, Status},
    karte::{Bahnhof, Karte},
    speichern_laden::{LadenFehler, SpeichernFehler},
};

/// Fehler bei Operationen auf einem [`Gleisnetz`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Fehler {
    /// An diesem Feld liegt kein Gleis.
    #[error("Kein Gleis bei {0}.")]
    KeinGleis(Punkt),
    /// Das Gleis der Fahrmarke wurde inzwischen ersetzt oder entfernt.
    #[error("Das Gleis {0} der Fahrmarke existiert nicht mehr.")]
    VeralteteFahrmarke(GleisId),
    /// Die Richtung passt nicht zum Gleis.
    #[error(transparent)]
    UngültigeRichtung(#[from] UngültigeRichtung),
    /// Ein neues Gleis konnte nicht erzeugt werden.
    #[error(transparent)]
    Konstruktion(#[from] KonstruktionsFehler),
    /// Alle Ids sind vergeben.
    #[error(transparent)]
    KeineIdVerfügbar(#[from] KeineIdVerfügbar),
}

/// Alle Gleise und Bahnhöfe im Raster.
#[derive(Debug, Default)]
pub struct Gleisnetz {
    /// Alle Gleise, ihr Ursprung ist im Gleis gespeichert.
    gleise: HashMap<GleisId, Box<dyn Segment>>,
    /// Jedes belegte Feld und das dort liegende Gleis.
    felder: HashMap<Punkt, GleisId>,
    bahnhöfe: BTreeMap<Punkt, Bahnhof>,
}

impl Gleisnetz {
    /// Erzeuge ein leeres [`Gleisnetz`].
    #[must_use]
    pub fn neu() -> Self {
        Gleisnetz::default()
    }

    /// Anzahl der Gleise.
    #[must_use]
    pub fn anzahl_gleise(&self) -> usize {
        self.gleise.len()
    }

    /// Alle Gleise, sortiert nach ihrem Ursprung.
    #[must_use]
    pub fn gleise(&self) -> Vec<(&GleisId, &dyn Segment)> {
        let mut gleise: Vec<_> =
            self.gleise.iter().map(|(id, segment)| (id, segment.as_ref())).collect();
        gleise.sort_by_key(|(id, segment)| (segment.ursprung(), *id));
        gleise
    }

    /// Alle Bahnhöfe.
    pub fn bahnhöfe(&self) -> impl Iterator<Item = (&Punkt, &Bahnhof)> {
        self.bahnhöfe.iter()
    }

    /// Erzeuge eine [`Fahrmarke`] für das Gleis bei `punkt`.
    ///
    /// ## Errors
    ///
    /// Bei `punkt` liegt kein Gleis, oder die Richtung ist dort nicht erlaubt.
    pub fn fahrmarke(&self, punkt: Punkt, richtung: Richtung) -> Result<Fahrmarke, Fehler> {
        let (id, segment) = self.gleis_bei(punkt).ok_or(Fehler::KeinGleis(punkt))?;
        Ok(segment.fahrmarke(id.clone(), punkt, richtung)?)
    }

    /// Position und Ausrichtung nach zurücklegen von `delta` entlang der [`Fahrmarke`].
    ///
    /// Eine Änderung des Zustands einer Weiche wird sofort berücksichtigt.
    ///
    /// ## Errors
    ///
    /// Das Gleis der Fahrmarke existiert nicht mehr, oder die Richtung ist ungültig.
    pub fn transformiere(&self, fahrmarke: &Fahrmarke, delta: Skalar) -> Result<Lage, Fehler> {
        let segment = self
            .gleise
            .get(&fahrmarke.gleis)
            .ok_or_else(|| Fehler::VeralteteFahrmarke(fahrmarke.gleis.clone()))?;
        Ok(segment.transformiere(fahrmarke, delta)?)
    }

    /// Wechsle in den nächsten Zustand des Gleises bei `punkt`.
    ///
    /// Rückgabewert ist, ob das Gleis mehrere Zustände hat.
    ///
    /// ## Errors
    ///
    /// Bei `punkt` liegt kein Gleis.
    pub fn nächster_zustand(&mut self, punkt: Punkt) -> Result<bool, Fehler> {
        self.ändere_zustand(punkt, |segment| segment.nächster_zustand())
    }

    /// Wechsle in den vorherigen Zustand des Gleises bei `punkt`.
    ///
    /// Rückgabewert ist, ob das Gleis mehrere Zustände hat.
    ///
    /// ## Errors
    ///
    /// Bei `punkt` liegt kein Gleis.
    pub fn vorheriger_zustand(&mut self, punkt: Punkt) -> Result<bool, Fehler> {
        self.ändere_zustand(punkt, |segment| segment.vorheriger_zustand())
    }

    /// Hilfsfunktion für [`nächster_zustand`](Gleisnetz::nächster_zustand)
    /// und [`vorheriger_zustand`](Gleisnetz::vorheriger_zustand).
    fn ändere_zustand(
        &mut self,
        punkt: Punkt,
        ändern: impl FnOnce(&mut dyn Segment),
    ) -> Result<bool, Fehler> {
        let segment = self
            .felder
            .get(&punkt)
            .and_then(|id| self.gleise.get_mut(id))
            .ok_or(Fehler::KeinGleis(punkt))?;
        let mehrere = segment.hat_mehrere_zustände();
        if mehrere {
            debug!("Zustand von {} bei {punkt} ändern.", segment.art());
            ändern(segment.as_mut());
        }
        Ok(mehrere)
    }
}

impl Karte for Gleisnetz {
    fn ist_gültiges_gleis(&self, punkt: Punkt) -> bool {
        self.felder.contains_key(&punkt)
    }

    fn gleis_bei(&self, punkt: Punkt) -> Option<(&GleisId, &dyn Segment)> {
        let id = self.felder.get(&punkt)?;
        self.gleise.get(id).map(|segment| (id, segment.as_ref()))
    }

    fn gleis(&self, id: &GleisId) -> Option<&dyn Segment> {
        self.gleise.get(id).map(AsRef::as_ref)
    }

    fn setze_gleis(
        &mut self,
        punkt: Punkt,
        segment: Box<dyn Segment>,
    ) -> Result<GleisId, KeineIdVerfügbar> {
        self.hinzufügen(punkt, segment)
    }

    fn bahnhof_bei(&self, punkt: Punkt) -> Option<&Bahnhof> {
        self.bahnhöfe.get(&punkt)
    }
}
