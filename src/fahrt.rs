//! Fahrt über ein [`Gleisnetz`] mit Abtastung der Positionen auf jedem Gleis.

use log::{debug, info};

use zugbau_gleise::{iteriere_gleis, Bahnhof, Gleisnetz, Status};
use zugbau_typen::{Lage, Punkt, Richtung, Skalar};

use crate::Fehler;

/// Einstellungen einer [`Fahrt`](fahre).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Einstellungen {
    /// Das Start-Feld.
    pub start: Punkt,
    /// Die Richtung beim Start.
    pub richtung: Richtung,
    /// Maximale Anzahl befahrener Gleise.
    pub schritte: u32,
    /// Anzahl berechneter [`Lagen`](Lage) pro Gleis, mindestens 1.
    pub abtastung: u8,
    /// Fahre an Bahnhöfen vorbei.
    ///
    /// Ansonsten endet die Fahrt am ersten Gleis mit einem Bahnhof.
    pub ohne_halt: bool,
}

/// Ein befahrenes Gleis.
#[derive(Debug, Clone, PartialEq)]
pub struct Schritt {
    /// Das Feld, auf dem das Gleis befahren wurde.
    pub punkt: Punkt,
    /// Die Fahrtrichtung beim Einfahren.
    pub richtung: Richtung,
    /// Die Art des Gleises.
    pub art: &'static str,
    /// Gleichmäßig verteilte Lagen vom Anfang bis zum Ende des befahrenen Weges.
    pub lagen: Vec<Lage>,
    /// Der Bahnhof an einem Endpunkt des Gleises.
    pub bahnhof: Option<Bahnhof>,
}

/// Fahre vom Start-Feld über das [`Gleisnetz`], bis kein weiteres Gleis folgt,
/// die maximale Anzahl an Schritten erreicht ist oder ein Bahnhof erreicht wird.
///
/// Das Gleis mit dem Bahnhof ist der letzte Schritt,
/// außer [`Einstellungen::ohne_halt`] ist gesetzt.
///
/// ## Errors
///
/// Ein Gleis erlaubt die Fahrtrichtung nicht.
pub fn fahre(gleisnetz: &Gleisnetz, einstellungen: Einstellungen) -> Result<Vec<Schritt>, Fehler> {
    let Einstellungen { start, richtung, schritte, abtastung, ohne_halt } = einstellungen;
    let abtastung = abtastung.max(1);
    let mut iterator = iteriere_gleis(gleisnetz, start, richtung)?;
    let mut ergebnis = Vec::new();
    for _ in 0..schritte {
        let status = iterator.status();
        let (Some(fahrmarke), Some(gleis)) = (iterator.fahrmarke(), iterator.gleis()) else {
            break;
        };
        let länge = gleis.segment_länge(fahrmarke);
        let mut lagen = Vec::new();
        for i in 0..=abtastung {
            // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
            #[allow(clippy::arithmetic_side_effects)]
            let delta = länge * Skalar(f32::from(i)) / Skalar(f32::from(abtastung));
            lagen.push(gleisnetz.transformiere(fahrmarke, delta)?);
        }
        let schritt = Schritt {
            punkt: fahrmarke.position,
            richtung: fahrmarke.richtung,
            art: gleis.art(),
            lagen,
            bahnhof: iterator.bahnhof().cloned(),
        };
        debug!("{} bei {} in Richtung {}", schritt.art, schritt.punkt, schritt.richtung);
        ergebnis.push(schritt);
        if !ohne_halt && status == Status::Bahnhof {
            if let Some(bahnhof) = iterator.bahnhof() {
                info!("Halt an {bahnhof}.");
            }
            break;
        }
        iterator = iterator.nächstes()?;
    }
    Ok(ergebnis)
}
