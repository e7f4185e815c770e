//! Gleis-Arten und ihre gemeinsame Schnittstelle.

// Erlaubt gleis::Segment, gleis::Gerade, ...
#![allow(clippy::pub_use)]

pub mod element;
pub mod gerade;
pub mod kreuzung;
pub mod kurve;
pub mod segment;
pub mod weiche;
pub mod zeichnen;

pub use self::{
    element::{segment_aus_element, Element, ElementFehler},
    gerade::Gerade,
    kreuzung::Kreuzung,
    kurve::Kurve,
    segment::{
        Fahrmarke, KonstruktionsFehler, Segment, UngültigeRichtung, Verbindung, Verschmelzung,
    },
    weiche::{Weiche, Zustand},
    zeichnen::{MeshBefehl, MeshErbauer, MeshProtokoll},
};
