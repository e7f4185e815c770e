//! Gemeinsame Schnittstelle aller Gleis-Arten.

use std::fmt::Debug;

use thiserror::Error;

use zugbau_id::GleisId;
use zugbau_typen::{Lage, Punkt, Richtung, Skalar, Vektor, WinkelGradmaß};

use crate::{element::Element, zeichnen::MeshErbauer};

/// Die nächste Position nach dem Verlassen eines Gleises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verbindung {
    /// Das nächste Feld im Raster.
    pub punkt: Punkt,
    /// Die Fahrtrichtung beim Betreten des nächsten Feldes.
    pub richtung: Richtung,
}

/// Eine Fahrmarke beschreibt die Fahrt über ein bestimmtes Gleis.
///
/// Statt einer Referenz auf das Gleis wird eine [`GleisId`] gespeichert.
/// Wurde das Gleis inzwischen ersetzt, kann das Raster die Fahrmarke als veraltet erkennen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fahrmarke {
    /// Das befahrene Gleis.
    pub gleis: GleisId,
    /// Die Fahrtrichtung.
    pub richtung: Richtung,
    /// Das Feld, über welches das Gleis betreten wurde.
    pub position: Punkt,
    /// Anzahl der möglichen Ausgänge von dieser Position aus.
    pub ausgänge: u8,
}

/// Ergebnis von [`Segment::verschmelze_ausgang`].
#[derive(Debug)]
pub enum Verschmelzung {
    /// Das bestehende Gleis erlaubt den Ausgang bereits.
    Unverändert,
    /// Das bestehende Gleis muss durch ein neues Gleis ersetzt werden.
    Ersetzt(Box<dyn Segment>),
    /// Der Ausgang kann nicht hinzugefügt werden.
    Unmöglich,
}

/// Die Richtung ist für das Gleis, oder an der Position auf dem Gleis, nicht erlaubt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "Ungültige Richtung {richtung} bei {position} für {art}, erlaubt sind {} oder {}.",
    .erwartet.0,
    .erwartet.1
)]
pub struct UngültigeRichtung {
    /// Die Art des Gleises.
    pub art: &'static str,
    /// Die angefragte Richtung.
    pub richtung: Richtung,
    /// Das Feld, auf dem das Gleis betreten werden sollte.
    pub position: Punkt,
    /// Die Einfahrt-Richtungen des Gleises.
    pub erwartet: (Richtung, Richtung),
}

/// Fehler beim Erstellen eines Gleises.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KonstruktionsFehler {
    /// Eine Gerade muss entlang einer Achse ausgerichtet sein.
    #[error("Keine Achse für eine Gerade: ({x}, {y})")]
    KeineAchse {
        /// x-Komponente
        x: i32,
        /// y-Komponente
        y: i32,
    },
    /// Der End-Winkel einer Kurve muss größer als ihr Start-Winkel sein.
    #[error("Der End-Winkel {ende} einer Kurve ist nicht größer als ihr Start-Winkel {start}.")]
    UmgekehrteWinkel {
        /// Start-Winkel
        start: WinkelGradmaß,
        /// End-Winkel
        ende: WinkelGradmaß,
    },
    /// Kurven beschreiben genau einen achsen-parallelen Viertelkreis.
    #[error("Die Kurve von {start} bis {ende} ist kein achsen-paralleler Viertelkreis.")]
    KeinViertelkreis {
        /// Start-Winkel
        start: WinkelGradmaß,
        /// End-Winkel
        ende: WinkelGradmaß,
    },
    /// Der Radius einer Kurve muss mindestens 1 sein.
    #[error("Ungültiger Kurven-Radius: {0}")]
    UngültigerRadius(i32),
}

/// Gemeinsame Schnittstelle aller Gleis-Arten.
///
/// Ein Gleis kennt seinen Ursprung im Raster. Die Menge der [`Endpunkte`](Segment::endpunkte)
/// hängt nie von einem internen Zustand ab.
pub trait Segment: Debug {
    /// Name der Gleis-Art, z.B. für Fehlermeldungen.
    fn art(&self) -> &'static str;

    /// Setze den Ursprung des Gleises.
    fn setze_ursprung(&mut self, ursprung: Punkt);

    /// Der Ursprung des Gleises.
    fn ursprung(&self) -> Punkt;

    /// Die Länge des Weges, welcher mit der Fahrmarke zurückgelegt wird.
    fn segment_länge(&self, fahrmarke: &Fahrmarke) -> Skalar;

    /// Darf das Gleis in diese Richtung befahren werden?
    fn ist_gültige_richtung(&self, richtung: Richtung) -> bool;

    /// Erzeuge eine Fahrmarke für eine Fahrt über das Gleis.
    ///
    /// ## Errors
    ///
    /// Die Richtung ist für dieses Gleis nicht erlaubt.
    fn fahrmarke(
        &self,
        gleis: GleisId,
        position: Punkt,
        richtung: Richtung,
    ) -> Result<Fahrmarke, UngültigeRichtung>;

    /// Position und Ausrichtung nach zurücklegen von `delta` (in `[0, segment_länge]`).
    ///
    /// Werte außerhalb des Intervalls werden darauf beschränkt.
    ///
    /// ## Errors
    ///
    /// Die Richtung der Fahrmarke ist für dieses Gleis nicht erlaubt.
    fn transformiere(&self, fahrmarke: &Fahrmarke, delta: Skalar)
        -> Result<Lage, UngültigeRichtung>;

    /// Das nächste Feld und die Fahrtrichtung nach verlassen des Gleises.
    ///
    /// ## Errors
    ///
    /// Die Richtung der Fahrmarke ist für dieses Gleis nicht erlaubt.
    fn nächste_position(&self, fahrmarke: &Fahrmarke) -> Result<Verbindung, UngültigeRichtung>;

    /// Die Endpunkte des Gleises.
    fn endpunkte(&self) -> Vec<Punkt>;

    /// Alle vom Gleis belegten Felder.
    fn belegte_felder(&self) -> Vec<Punkt> {
        self.endpunkte()
    }

    /// Versuche einen zusätzlichen Ausgang am Punkt `punkt` in Richtung `richtung` hinzuzufügen.
    fn verschmelze_ausgang(&self, punkt: Punkt, richtung: Richtung) -> Verschmelzung;

    /// Hat das Gleis mehrere Zustände (z.B. eine Weiche)?
    fn hat_mehrere_zustände(&self) -> bool {
        false
    }

    /// Wechsle in den nächsten Zustand.
    fn nächster_zustand(&mut self) {}

    /// Wechsle in den vorherigen Zustand.
    fn vorheriger_zustand(&mut self) {}

    /// Erzeuge die Geometrie des Gleises, relativ zum Ursprung.
    fn zeichne(&self, erbauer: &mut dyn MeshErbauer);

    /// Serialisierbare Darstellung, ohne Ursprung und Zustand.
    fn als_element(&self) -> Element;
}

/// Lage beim Befahren eines geraden Stücks in Richtung `richtung`,
/// beginnend am Rand des Feldes `start`.
pub(crate) fn gerade_lage(start: Punkt, richtung: Richtung, delta: Skalar) -> Lage {
    // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
    #[allow(clippy::arithmetic_side_effects)]
    let punkt = Vektor::from(start) - richtung.skaliert(Skalar(0.5))
        + richtung.skaliert(delta);
    Lage::neu(punkt, richtung.gier())
}

/// Beschränke `delta` auf `[0, länge]`.
pub(crate) fn beschränke(delta: Skalar, länge: Skalar) -> Skalar {
    delta.max(&Skalar(0.)).min(&länge)
}
