//! Schnittstelle zum Raster, auf dem die Gleise liegen.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use zugbau_gleis::Segment;
use zugbau_id::{GleisId, KeineIdVerfügbar};
use zugbau_typen::Punkt;

/// Ein Bahnhof auf einem Feld des Rasters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bahnhof {
    /// Der Name des Bahnhofs.
    pub name: String,
}

impl Bahnhof {
    /// Erzeuge einen neuen [`Bahnhof`].
    #[must_use]
    pub fn neu(name: impl Into<String>) -> Self {
        Bahnhof { name: name.into() }
    }
}

impl Display for Bahnhof {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "Bahnhof {}", self.name)
    }
}

/// Das Raster aus Feldern, auf denen Gleise und Bahnhöfe liegen.
pub trait Karte {
    /// Liegt bei `punkt` ein Gleis?
    fn ist_gültiges_gleis(&self, punkt: Punkt) -> bool;

    /// Das Gleis, welches das Feld `punkt` belegt.
    fn gleis_bei(&self, punkt: Punkt) -> Option<(&GleisId, &dyn Segment)>;

    /// Das Gleis mit der [`GleisId`], sofern es noch existiert.
    fn gleis(&self, id: &GleisId) -> Option<&dyn Segment>;

    /// Platziere ein Gleis mit Ursprung `punkt`.
    ///
    /// Alle Gleise, die eines der belegten Felder überlappen, werden entfernt.
    ///
    /// ## Errors
    ///
    /// Es konnte keine neue [`GleisId`] erzeugt werden.
    fn setze_gleis(
        &mut self,
        punkt: Punkt,
        segment: Box<dyn Segment>,
    ) -> Result<GleisId, KeineIdVerfügbar>;

    /// Der Bahnhof bei `punkt`.
    fn bahnhof_bei(&self, punkt: Punkt) -> Option<&Bahnhof>;
}
