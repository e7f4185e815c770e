//! Tests für [`GleisId`].

use std::collections::BTreeSet;

use zugbau_test_util::{expect_eq, expect_true, init_test_logging, Expectation};

use crate::{eindeutig::ist_verwendet, GleisId};

fn neue_id() -> GleisId {
    GleisId::neu().expect("Test verwendet weniger als u32::MAX Ids.")
}

#[test]
fn gleichzeitige_gleise_unterscheidbar() -> Result<(), Expectation> {
    init_test_logging();

    let ids: Vec<_> = (0..32).map(|_i| neue_id()).collect();
    let repräsentationen: BTreeSet<_> = ids.iter().map(GleisId::repräsentation).collect();
    let texte: BTreeSet<_> = ids.iter().map(GleisId::to_string).collect();
    expect_eq(repräsentationen.len(), ids.len())?;
    expect_eq(texte.len(), ids.len())?;
    let erste = ids.first().expect("32 Ids.");
    expect_eq(erste.to_string(), format!("Gleis#{}", erste.repräsentation()))?;
    Ok(())
}

#[test]
fn gespeicherte_kopie_bezeichnet_kein_neues_gleis() -> Result<(), Expectation> {
    init_test_logging();

    // Das Gleis wird entfernt, eine Fahrmarke hält aber noch eine Kopie der Id.
    let entfernt = neue_id();
    let gespeichert = entfernt.clone();
    drop(entfernt);

    // Neu platzierte Gleise erhalten eine andere Id,
    // die gespeicherte Kopie kann keines von ihnen bezeichnen.
    let neue: Vec<_> = (0..64).map(|_i| neue_id()).collect();
    for id in &neue {
        expect_true(id != &gespeichert)?;
        expect_true(id.repräsentation() != gespeichert.repräsentation())?;
    }
    expect_true(ist_verwendet(gespeichert.repräsentation()))?;
    Ok(())
}

#[test]
fn letzte_kopie_gibt_frei() -> Result<(), Expectation> {
    init_test_logging();

    let id = neue_id();
    let kopie = id.clone();
    let repräsentation = id.repräsentation();
    expect_eq(kopie.clone(), id.clone())?;

    drop(id);
    expect_true(ist_verwendet(repräsentation))?;
    drop(kopie);
    expect_true(!ist_verwendet(repräsentation))?;
    Ok(())
}
