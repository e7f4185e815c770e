//! Ids zur Identifikation der Gleise.
//!
//! Eine [`GleisId`] bleibt gültig, solange eine Kopie existiert.
//! Dadurch kann eine gespeicherte Kopie nie versehentlich ein später platziertes Gleis bezeichnen.

// Erlaubt id::Repräsentation
#![allow(clippy::pub_use)]

use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

use crate::eindeutig::Id;

pub mod eindeutig;

#[cfg(test)]
mod test;

pub use eindeutig::{KeineIdVerfügbar, Repräsentation};

// soll direkt importiert werden
#[allow(clippy::module_name_repetitions)]
/// Id für ein Gleis.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GleisId(Arc<Id>);

impl GleisId {
    /// Erzeuge eine neue [`GleisId`].
    ///
    /// ## Errors
    ///
    /// Wenn keine neue [`GleisId`] erzeugt werden kann.
    pub fn neu() -> Result<GleisId, KeineIdVerfügbar> {
        Id::neu().map(|id| GleisId(Arc::new(id)))
    }

    /// Die Zahl, unter der das Gleis angezeigt wird.
    ///
    /// Alle Kopien einer [`GleisId`] liefern die selbe Zahl, gleichzeitig existierende Gleise
    /// unterschiedliche. Erst nach dem Drop der letzten Kopie kann die Zahl neu vergeben werden.
    #[must_use]
    pub fn repräsentation(&self) -> Repräsentation {
        self.0.repräsentation()
    }
}

impl Display for GleisId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "Gleis#{}", self.repräsentation())
    }
}
