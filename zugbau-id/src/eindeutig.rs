//! Erzeuge eindeutige [`Ids`](Id).

use std::collections::BTreeSet;

use log::{error, trace};
use parking_lot::{const_mutex, Mutex};
use thiserror::Error;

/// Zahlen-typ, der über [`Id::repräsentation`] erhalten werden kann.
pub type Repräsentation = u32;

/// Alle aktuell verwendeten Ids.
static VERWENDETE_IDS: Mutex<BTreeSet<Repräsentation>> = const_mutex(BTreeSet::new());

/// Wird die Zahl aktuell von einer [`Id`] verwendet?
#[cfg(test)]
pub(crate) fn ist_verwendet(repräsentation: Repräsentation) -> bool {
    VERWENDETE_IDS.lock().contains(&repräsentation)
}

/// Eine eindeutige [`Id`].
///
/// Die Zahl wird erst wieder frei, wenn die [`Id`] gedroppt wird.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id {
    /// Der Zahlenwert für die Unterscheidung unterschiedlicher [`Ids`](Id).
    id: Repräsentation,
}

impl Drop for Id {
    fn drop(&mut self) {
        if VERWENDETE_IDS.lock().remove(&self.id) {
            trace!("Drop Id '{}'.", self.id);
        } else {
            error!("Gedroppte Id '{}' war nicht als verwendet markiert!", self.id);
        }
    }
}

/// Alle [`Ids`](Id) wurden bereits verwendet. Es ist aktuell keine eindeutige [`Id`] verfügbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Es ist keine Id für ein neues Gleis verfügbar!")]
pub struct KeineIdVerfügbar;

impl Id {
    /// Erhalte eine bisher unbenutzte [`Id`].
    ///
    /// Es wird bevorzugt die Zahl nach der größten verwendeten Zahl gewählt,
    /// so dass frei gewordene Zahlen erst nach einem Überlauf erneut vergeben werden.
    ///
    /// ## Errors
    ///
    /// Alle Ids sind bereits in Verwendung.
    /// Es kann aktuell keine neue [`Id`] erzeugt werden.
    pub fn neu() -> Result<Id, KeineIdVerfügbar> {
        let mut set = VERWENDETE_IDS.lock();
        let initial =
            if let Some(last) = set.last() { last.wrapping_add(1) } else { Repräsentation::MIN };
        let mut id = initial;
        while !set.insert(id) {
            id = id.wrapping_add(1);
            if id == initial {
                return Err(KeineIdVerfügbar);
            }
        }
        trace!("Erzeuge Id '{id}'.");
        Ok(Id { id })
    }

    /// Erhalte eine eindeutige Zahl für die [`Id`].
    ///
    /// Die selbe [`Id`] wird bei jedem Aufruf die selbe Zahl zurückgeben.
    /// Zwei gleichzeitig existierende [`Ids`](Id) werden unterschiedliche Zahlen zurückgeben.
    #[must_use]
    pub fn repräsentation(&self) -> Repräsentation {
        self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::collections::HashSet;

    use zugbau_test_util::{expect_eq, expect_true, init_test_logging, Expectation};

    #[test]
    fn eindeutig() -> Result<(), Expectation> {
        init_test_logging();

        let ids: Vec<_> = (0..32)
            .map(|i| (i, Id::neu().expect("Test verwendet weniger als u32::MAX Ids.")))
            .filter_map(|(i, id)| (i % 2 == 0).then_some(id))
            .collect();
        let num = ids.len();
        let btree_set: BTreeSet<_> = ids.iter().collect();
        let btree_num = btree_set.len();
        let hash_set: HashSet<_> = ids.into_iter().collect();
        let hash_num = hash_set.len();

        // die Anzahl an erzeugten Ids ist identisch zur Anzahl der eindeutigen Ids,
        // unabhängig der verwendeten set-Variante.
        expect_eq(num, btree_num)?;
        expect_eq(num, hash_num)?;
        Ok(())
    }

    #[test]
    fn freigeben() -> Result<(), Expectation> {
        init_test_logging();

        let erste = Id::neu().expect("Test verwendet weniger als u32::MAX Ids!");
        let zweite = Id::neu().expect("Test verwendet weniger als u32::MAX Ids!");
        let repräsentation = erste.repräsentation();
        expect_true(ist_verwendet(repräsentation))?;
        drop(erste);

        // `zweite` ist noch in Verwendung, daher wird die Zahl nicht sofort erneut vergeben.
        expect_true(!ist_verwendet(repräsentation))?;
        expect_true(ist_verwendet(zweite.repräsentation()))?;
        Ok(())
    }
}
