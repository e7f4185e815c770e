//! Speichern und Laden eines [`Gleisnetzes`](Gleisnetz).
//!
//! Gespeichert werden der Ursprung und die [`Element`]-Darstellung jedes Gleises,
//! sowie alle Bahnhöfe. Der Zustand von Weichen wird nicht gespeichert.

use std::{fs, io, path::Path};

use bincode::config::{
    DefaultOptions, FixintEncoding, Options, RejectTrailing, WithOtherIntEncoding,
    WithOtherTrailing,
};
use log::{debug, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use zugbau_gleis::{segment_aus_element, Element, ElementFehler};
use zugbau_id::KeineIdVerfügbar;
use zugbau_typen::Punkt;

use crate::{Bahnhof, Gleisnetz};

/// [`bincode`]-Optionen, bei denen trailing bytes abgelehnt werden.
///
/// Im Gegensatz zu [`DefaultOptions`] verwendet [die Standard-Funktion](bincode::deserialize)
/// fixint-encoding.
static BINCODE_OPTIONS: Lazy<
    WithOtherTrailing<WithOtherIntEncoding<DefaultOptions, FixintEncoding>, RejectTrailing>,
> = Lazy::new(|| DefaultOptions::new().with_fixint_encoding().reject_trailing_bytes());

/// Gespeicherte Darstellung eines [`Gleisnetzes`](Gleisnetz).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct GleisnetzSerialisiert {
    /// Ursprung und Darstellung jedes Gleises.
    gleise: Vec<(Punkt, Element)>,
    /// Alle Bahnhöfe.
    bahnhöfe: Vec<(Punkt, Bahnhof)>,
}

/// Fehler beim [`Speichern`](Gleisnetz::speichern).
#[derive(Debug, Error)]
pub enum SpeichernFehler {
    /// Ein IO-Fehler.
    #[error("IO-Fehler beim Speichern: {0}")]
    IO(#[from] io::Error),
    /// Fehler beim Serialisieren.
    #[error("Fehler beim Serialisieren: {0}")]
    BincodeSerialisieren(#[source] bincode::Error),
}

/// Fehler beim [`Laden`](Gleisnetz::laden).
#[derive(Debug, Error)]
pub enum LadenFehler {
    /// Ein IO-Fehler.
    #[error("IO-Fehler beim Laden: {0}")]
    IO(#[from] io::Error),
    /// Fehler beim Deserialisieren.
    #[error("Fehler beim Deserialisieren: {0}")]
    BincodeDeserialisieren(#[source] bincode::Error),
    /// Ein gespeichertes Element beschreibt kein gültiges Gleis.
    #[error("Ungültiges Gleis bei {punkt}: {fehler}")]
    Element {
        /// Der gespeicherte Ursprung des Gleises.
        punkt: Punkt,
        /// Der Fehler beim Erzeugen des Gleises.
        #[source]
        fehler: ElementFehler,
    },
    /// Alle Ids sind vergeben.
    #[error(transparent)]
    KeineIdVerfügbar(#[from] KeineIdVerfügbar),
}

impl Gleisnetz {
    /// Gespeicherte Darstellung aller Gleise und Bahnhöfe.
    fn serialisiere(&self) -> GleisnetzSerialisiert {
        GleisnetzSerialisiert {
            gleise: self
                .gleise()
                .into_iter()
                .map(|(_id, segment)| (segment.ursprung(), segment.als_element()))
                .collect(),
            bahnhöfe: self
                .bahnhöfe()
                .map(|(punkt, bahnhof)| (*punkt, bahnhof.clone()))
                .collect(),
        }
    }

    /// Erzeuge ein [`Gleisnetz`] aus der gespeicherten Darstellung.
    fn deserialisiere(serialisiert: GleisnetzSerialisiert) -> Result<Gleisnetz, LadenFehler> {
        let mut gleisnetz = Gleisnetz::neu();
        for (punkt, element) in serialisiert.gleise {
            let segment = segment_aus_element(&element)
                .map_err(|fehler| LadenFehler::Element { punkt, fehler })?;
            let _ = gleisnetz.hinzufügen(punkt, segment)?;
        }
        for (punkt, bahnhof) in serialisiert.bahnhöfe {
            let _ = gleisnetz.setze_bahnhof(punkt, bahnhof);
        }
        Ok(gleisnetz)
    }

    /// Speichere alle Gleise und Bahnhöfe als Bytes.
    ///
    /// ## Errors
    ///
    /// Fehler beim Serialisieren.
    pub fn speichern_als_bytes(&self) -> Result<Vec<u8>, SpeichernFehler> {
        BINCODE_OPTIONS
            .serialize(&self.serialisiere())
            .map_err(SpeichernFehler::BincodeSerialisieren)
    }

    /// Speichere alle Gleise und Bahnhöfe in einer Datei.
    ///
    /// ## Errors
    ///
    /// Fehler beim Schreiben der Datei.
    pub fn speichern(&self, pfad: impl AsRef<Path>) -> Result<(), SpeichernFehler> {
        let pfad = pfad.as_ref();
        let file = fs::File::create(pfad)?;
        BINCODE_OPTIONS
            .serialize_into(file, &self.serialisiere())
            .map_err(SpeichernFehler::BincodeSerialisieren)?;
        info!("{} Gleise nach {} gespeichert.", self.anzahl_gleise(), pfad.display());
        Ok(())
    }

    /// Ersetze alle Gleise und Bahnhöfe durch die gespeicherten Bytes.
    ///
    /// Bei einem Fehler bleibt das [`Gleisnetz`] unverändert.
    ///
    /// ## Errors
    ///
    /// Invalides Speicherformat, oder ein gespeichertes Gleis ist ungültig.
    pub fn laden_aus_bytes(&mut self, bytes: &[u8]) -> Result<(), LadenFehler> {
        let serialisiert: GleisnetzSerialisiert = BINCODE_OPTIONS
            .deserialize(bytes)
            .map_err(LadenFehler::BincodeDeserialisieren)?;
        *self = Gleisnetz::deserialisiere(serialisiert)?;
        debug!("{} Gleise geladen.", self.anzahl_gleise());
        Ok(())
    }

    /// Ersetze alle Gleise und Bahnhöfe durch den Inhalt einer Datei.
    ///
    /// Bei einem Fehler bleibt das [`Gleisnetz`] unverändert.
    ///
    /// ## Errors
    ///
    /// - Fehler beim Lesen der Datei.
    /// - Invalides Speicherformat der Datei.
    /// - Ein gespeichertes Gleis ist ungültig.
    pub fn laden(&mut self, pfad: impl AsRef<Path>) -> Result<(), LadenFehler> {
        let pfad = pfad.as_ref();
        let content = fs::read(pfad)?;
        self.laden_aus_bytes(content.as_slice())?;
        info!("{} Gleise aus {} geladen.", self.anzahl_gleise(), pfad.display());
        Ok(())
    }
}
