//! Serialisierbare Darstellung eines Gleises als Element mit Attributen.

use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use zugbau_typen::{Richtung, WinkelGradmaß};

use crate::{
    gerade::Gerade,
    kreuzung::Kreuzung,
    kurve::Kurve,
    segment::{KonstruktionsFehler, Segment},
    weiche::Weiche,
};

/// Ein benanntes Element mit Text-Attributen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Der Name des Elements.
    pub name: String,
    /// Die Attribute des Elements.
    pub attribute: BTreeMap<String, String>,
}

/// Fehler beim Lesen eines [`Elements`](Element).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElementFehler {
    /// Ein benötigtes Attribut fehlt.
    #[error("Dem Element '{element}' fehlt das Attribut '{attribut}'.")]
    FehlendesAttribut {
        /// Name des Elements.
        element: String,
        /// Name des Attributs.
        attribut: String,
    },
    /// Ein Attribut hat einen ungültigen Wert.
    #[error("Ungültiger Wert '{wert}' für Attribut '{attribut}' von Element '{element}'.")]
    UngültigerWert {
        /// Name des Elements.
        element: String,
        /// Name des Attributs.
        attribut: String,
        /// Der ungültige Wert.
        wert: String,
    },
    /// Der Name beschreibt keine bekannte Gleis-Art.
    #[error("Unbekanntes Element '{0}'.")]
    UnbekanntesElement(String),
    /// Die Attribute beschreiben kein gültiges Gleis.
    #[error(transparent)]
    Konstruktion(#[from] KonstruktionsFehler),
}

impl Element {
    /// Erzeuge ein Element ohne Attribute.
    #[must_use]
    pub fn neu(name: impl Into<String>) -> Self {
        Element { name: name.into(), attribute: BTreeMap::new() }
    }

    /// Füge ein Attribut hinzu. Ein bestehendes Attribut gleichen Namens wird überschrieben.
    #[must_use]
    pub fn mit_attribut(mut self, name: impl Into<String>, wert: impl Display) -> Self {
        let _ = self.attribute.insert(name.into(), wert.to_string());
        self
    }

    /// Der Text-Wert eines Attributs.
    ///
    /// ## Errors
    ///
    /// Das Attribut existiert nicht.
    pub fn attribut(&self, name: &str) -> Result<&str, ElementFehler> {
        self.attribute.get(name).map(String::as_str).ok_or_else(|| {
            ElementFehler::FehlendesAttribut {
                element: self.name.clone(),
                attribut: name.to_owned(),
            }
        })
    }

    /// Der Wert eines Attributs, interpretiert als `T`.
    ///
    /// ## Errors
    ///
    /// Das Attribut existiert nicht, oder kann nicht als `T` interpretiert werden.
    pub fn attribut_als<T: FromStr>(&self, name: &str) -> Result<T, ElementFehler> {
        let wert = self.attribut(name)?;
        wert.trim().parse().map_err(|_fehler| ElementFehler::UngültigerWert {
            element: self.name.clone(),
            attribut: name.to_owned(),
            wert: wert.to_owned(),
        })
    }
}

impl Display for Element {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "<{}", self.name)?;
        for (name, wert) in &self.attribute {
            write!(formatter, " {name}=\"{wert}\"")?;
        }
        formatter.write_str("/>")
    }
}

/// Name des Elements einer [`Gerade`].
pub const GERADE: &str = "straightTrack";
/// Name des Elements einer [`Kurve`].
pub const KURVE: &str = "curvedTrack";
/// Name des Elements einer [`Weiche`].
pub const WEICHE: &str = "points";
/// Name des Elements einer [`Kreuzung`].
pub const KREUZUNG: &str = "crossoverTrack";

/// Erzeuge ein Gleis aus seiner [`Element`]-Darstellung.
///
/// Der Ursprung muss anschließend gesetzt werden, Weichen starten im Zustand
/// [`NichtGenommen`](crate::weiche::Zustand::NichtGenommen).
///
/// ## Errors
///
/// Unbekannter Element-Name, fehlende oder ungültige Attribute.
pub fn segment_aus_element(element: &Element) -> Result<Box<dyn Segment>, ElementFehler> {
    debug!("Erzeuge Gleis aus {element}");
    let segment: Box<dyn Segment> = match element.name.as_str() {
        GERADE => Box::new(Gerade::neu(element.attribut_als::<Richtung>("align")?)),
        KURVE => {
            let start = element.attribut_als::<f32>("startAngle")?;
            let ende = element.attribut_als::<f32>("finishAngle")?;
            let radius = element.attribut_als::<i32>("radius")?;
            Box::new(Kurve::neu(WinkelGradmaß::neu(start), WinkelGradmaß::neu(ende), radius)?)
        },
        WEICHE => Box::new(Weiche::neu(
            element.attribut_als::<Richtung>("align")?,
            element.attribut_als::<bool>("reflect")?,
        )),
        KREUZUNG => Box::new(Kreuzung::neu()),
        name => return Err(ElementFehler::UnbekanntesElement(name.to_owned())),
    };
    Ok(segment)
}
