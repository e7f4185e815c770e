//! Schrittweise Fahrt über das Gleisnetz.

use std::fmt::{self, Debug, Formatter};

use log::trace;

use zugbau_gleis::{Fahrmarke, Segment};
use zugbau_typen::{Punkt, Richtung};

use crate::{Bahnhof, Fehler, Karte};

/// Zustand eines [`GleisIterator`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Das aktuelle Gleis kann befahren werden.
    Ok,
    /// Ein Endpunkt des aktuellen Gleises liegt an einem Bahnhof.
    Bahnhof,
    /// Es gibt kein weiteres Gleis.
    KeineWeiteren,
}

/// Position einer Fahrt über das Gleisnetz, jeweils ein Gleis pro Schritt.
///
/// Ob die Fahrt an einem Bahnhof fortgesetzt wird entscheidet der Aufrufer.
pub struct GleisIterator<'k, K: ?Sized> {
    karte: &'k K,
    fahrmarke: Option<Fahrmarke>,
    richtung: Richtung,
    status: Status,
    bahnhof: Option<Bahnhof>,
}

impl<K: ?Sized> Clone for GleisIterator<'_, K> {
    fn clone(&self) -> Self {
        GleisIterator {
            karte: self.karte,
            fahrmarke: self.fahrmarke.clone(),
            richtung: self.richtung,
            status: self.status,
            bahnhof: self.bahnhof.clone(),
        }
    }
}

impl<K: ?Sized> Debug for GleisIterator<'_, K> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GleisIterator")
            .field("fahrmarke", &self.fahrmarke)
            .field("richtung", &self.richtung)
            .field("status", &self.status)
            .field("bahnhof", &self.bahnhof)
            .finish_non_exhaustive()
    }
}

/// Beginne eine Fahrt am Feld `punkt` in Richtung `richtung`.
///
/// Liegt bei `punkt` kein Gleis, hat der Iterator den Status [`Status::KeineWeiteren`].
///
/// ## Errors
///
/// Das Gleis bei `punkt` erlaubt die Richtung nicht.
pub fn iteriere_gleis<K: Karte + ?Sized>(
    karte: &K,
    punkt: Punkt,
    richtung: Richtung,
) -> Result<GleisIterator<'_, K>, Fehler> {
    let Some((gleis_id, segment)) = karte.gleis_bei(punkt) else {
        trace!("Kein Gleis bei {punkt}.");
        return Ok(GleisIterator {
            karte,
            fahrmarke: None,
            richtung,
            status: Status::KeineWeiteren,
            bahnhof: None,
        });
    };
    let fahrmarke = segment.fahrmarke(gleis_id.clone(), punkt, richtung)?;
    let bahnhof =
        segment.endpunkte().into_iter().find_map(|endpunkt| karte.bahnhof_bei(endpunkt)).cloned();
    let status = if bahnhof.is_some() { Status::Bahnhof } else { Status::Ok };
    trace!("{} bei {punkt} in Richtung {richtung}: {status:?}", segment.art());
    Ok(GleisIterator { karte, fahrmarke: Some(fahrmarke), richtung, status, bahnhof })
}

impl<'k, K: Karte + ?Sized> GleisIterator<'k, K> {
    /// Der Iterator für das nächste Gleis.
    ///
    /// Mit Status [`Status::KeineWeiteren`] wird eine Kopie zurückgegeben.
    ///
    /// ## Errors
    ///
    /// Das aktuelle Gleis wurde inzwischen ersetzt,
    /// oder das nächste Gleis erlaubt die Fahrtrichtung nicht.
    pub fn nächstes(&self) -> Result<Self, Fehler> {
        let fahrmarke = match (self.status, &self.fahrmarke) {
            (Status::KeineWeiteren, _) | (_, None) => return Ok(self.clone()),
            (Status::Ok | Status::Bahnhof, Some(fahrmarke)) => fahrmarke,
        };
        let segment = self
            .karte
            .gleis(&fahrmarke.gleis)
            .ok_or_else(|| Fehler::VeralteteFahrmarke(fahrmarke.gleis.clone()))?;
        let verbindung = segment.nächste_position(fahrmarke)?;
        iteriere_gleis(self.karte, verbindung.punkt, verbindung.richtung)
    }

    /// Das aktuelle Gleis, sofern es noch existiert.
    #[must_use]
    pub fn gleis(&self) -> Option<&'k dyn Segment> {
        self.fahrmarke.as_ref().and_then(|fahrmarke| self.karte.gleis(&fahrmarke.gleis))
    }

    /// Die [`Fahrmarke`] für das aktuelle Gleis.
    #[must_use]
    pub fn fahrmarke(&self) -> Option<&Fahrmarke> {
        self.fahrmarke.as_ref()
    }

    /// Die aktuelle Fahrtrichtung.
    #[must_use]
    pub fn richtung(&self) -> Richtung {
        self.richtung
    }

    /// Der aktuelle [`Status`].
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Der Bahnhof an einem Endpunkt des aktuellen Gleises.
    #[must_use]
    pub fn bahnhof(&self) -> Option<&Bahnhof> {
        self.bahnhof.as_ref()
    }
}

#[cfg(test)]
mod test;
