//! Ein kleines Gleisnetz, wenn keine Datei geladen wird.

use log::debug;

use zugbau_gleis::Kurve;
use zugbau_gleise::{Bahnhof, Fehler as GleiseFehler, Gleisnetz, Karte};
use zugbau_typen::{Punkt, WinkelGradmaß};

use crate::Fehler;

/// Radius der Kurven im Beispiel-Kreis.
const RADIUS: i32 = 2;

/// Ein geschlossener Kreis aus vier Kurven mit einem Bahnhof.
///
/// Eine Fahrt ab [`Punkt::NULL`] in Richtung [`PlusX`](zugbau_typen::Richtung::PlusX)
/// kehrt nach vier Gleisen zum Start zurück.
///
/// ## Errors
///
/// Eine Kurve konnte nicht erzeugt werden, oder es ist keine Id mehr verfügbar.
pub fn kreis() -> Result<Gleisnetz, Fehler> {
    let mut gleisnetz = Gleisnetz::neu();
    for (ursprung, start) in [
        (Punkt::NULL, 0.),
        (Punkt::neu(1, -2), 90.),
        (Punkt::neu(-1, -3), 180.),
        (Punkt::neu(-2, -1), 270.),
    ] {
        // Wie f32: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let ende = WinkelGradmaß::neu(start + 90.);
        let kurve =
            Kurve::neu(WinkelGradmaß::neu(start), ende, RADIUS).map_err(GleiseFehler::from)?;
        let gleis_id =
            gleisnetz.setze_gleis(ursprung, Box::new(kurve)).map_err(GleiseFehler::from)?;
        debug!("Beispiel-Kurve {gleis_id} bei {ursprung}");
    }
    let _ = gleisnetz.setze_bahnhof(Punkt::neu(-1, -3), Bahnhof::neu("Südkreuz"));
    Ok(gleisnetz)
}
