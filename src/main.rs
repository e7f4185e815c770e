//! Fahrt über ein Gleisnetz mit Ausgabe der berechneten Positionen.

// Die übrigen Abhängigkeiten werden nur von der Bibliothek verwendet.
#![allow(unused_crate_dependencies)]

use zugbau::{ausführen_aus_env, Fehler};

fn main() -> Result<(), Fehler> {
    ausführen_aus_env()
}
