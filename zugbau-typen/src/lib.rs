//! Grundlegende Typen für die Geometrie des Gleis-Rasters.

// Erlaubt typen::Skalar, typen::Punkt, ...
#![allow(clippy::pub_use)]

pub mod bezier;
pub mod lage;
pub mod punkt;
pub mod richtung;
pub mod skalar;
pub mod vektor;
pub mod winkel;

pub use self::{
    bezier::BezierKurve,
    lage::Lage,
    punkt::Punkt,
    richtung::Richtung,
    skalar::Skalar,
    vektor::Vektor,
    winkel::WinkelGradmaß,
};
