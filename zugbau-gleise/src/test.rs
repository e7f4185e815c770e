//! Tests für [`Gleisnetz`].

use zugbau_gleis::{Gerade, Segment, Weiche};
use zugbau_id::GleisId;
use zugbau_test_util::{expect_eq, expect_nahe, expect_true, init_test_logging, Expectation};
use zugbau_typen::{Punkt, Richtung, Skalar};

use crate::{Bahnhof, Fehler, Gleisnetz, Karte};

fn setze(gleisnetz: &mut Gleisnetz, punkt: Punkt, segment: impl Segment + 'static) -> GleisId {
    gleisnetz.setze_gleis(punkt, Box::new(segment)).expect("Test verwendet wenige Ids.")
}

fn id_bei(gleisnetz: &Gleisnetz, punkt: Punkt) -> Option<GleisId> {
    gleisnetz.gleis_bei(punkt).map(|(id, _segment)| id.clone())
}

#[test]
fn überlappende_gleise_werden_ersetzt() -> Result<(), Expectation> {
    init_test_logging();

    let mut gleisnetz = Gleisnetz::neu();
    for x in 0..3 {
        let _ = setze(&mut gleisnetz, Punkt::neu(x, 0), Gerade::neu(Richtung::PlusX));
    }
    let nachbar = setze(&mut gleisnetz, Punkt::neu(3, 0), Gerade::neu(Richtung::PlusX));
    expect_eq(gleisnetz.anzahl_gleise(), 4)?;

    let weiche = setze(&mut gleisnetz, Punkt::NULL, Weiche::neu(Richtung::PlusX, false));
    expect_eq(gleisnetz.anzahl_gleise(), 2)?;
    for punkt in [Punkt::NULL, Punkt::neu(1, 0), Punkt::neu(2, 0), Punkt::neu(2, 1)] {
        expect_eq(id_bei(&gleisnetz, punkt), Some(weiche.clone()))?;
    }
    expect_eq(id_bei(&gleisnetz, Punkt::neu(3, 0)), Some(nachbar))?;
    expect_true(!gleisnetz.ist_gültiges_gleis(Punkt::neu(1, 1)))?;

    let entfernt = gleisnetz.entfernen_bei(Punkt::neu(2, 1));
    expect_eq(entfernt.map(|segment| segment.art()), Some("Weiche"))?;
    expect_eq(gleisnetz.anzahl_gleise(), 1)?;
    expect_true(!gleisnetz.ist_gültiges_gleis(Punkt::NULL))?;
    Ok(())
}

#[test]
fn veraltete_fahrmarke() -> Result<(), Expectation> {
    init_test_logging();

    let mut gleisnetz = Gleisnetz::neu();
    let alt = setze(&mut gleisnetz, Punkt::neu(4, 4), Gerade::neu(Richtung::PlusX));
    let fahrmarke =
        gleisnetz.fahrmarke(Punkt::neu(4, 4), Richtung::MinusX).expect("Gültige Richtung.");
    let lage = gleisnetz.transformiere(&fahrmarke, Skalar(0.)).expect("Gleis existiert.");
    expect_nahe(lage.punkt.x.0, 4.5)?;
    expect_nahe(lage.gier.grad(), 180.)?;

    let _ = setze(&mut gleisnetz, Punkt::neu(4, 4), Gerade::neu(Richtung::PlusY));
    expect_eq(
        gleisnetz.transformiere(&fahrmarke, Skalar(0.)).err(),
        Some(Fehler::VeralteteFahrmarke(alt)),
    )?;
    expect_true(matches!(
        gleisnetz.fahrmarke(Punkt::neu(4, 4), Richtung::PlusX),
        Err(Fehler::UngültigeRichtung(_))
    ))?;
    expect_eq(
        gleisnetz.fahrmarke(Punkt::neu(5, 4), Richtung::PlusX).err(),
        Some(Fehler::KeinGleis(Punkt::neu(5, 4))),
    )?;
    Ok(())
}

#[test]
fn weiche_umschalten() -> Result<(), Expectation> {
    init_test_logging();

    let mut gleisnetz = Gleisnetz::neu();
    let _ = setze(&mut gleisnetz, Punkt::NULL, Weiche::neu(Richtung::PlusX, false));
    let _ = setze(&mut gleisnetz, Punkt::neu(-1, 0), Gerade::neu(Richtung::PlusX));
    let fahrmarke = gleisnetz.fahrmarke(Punkt::NULL, Richtung::PlusX).expect("Gültige Richtung.");
    expect_eq(fahrmarke.ausgänge, 2)?;

    let ende = gleisnetz.transformiere(&fahrmarke, Skalar(10.)).expect("Gleis existiert.");
    expect_nahe(ende.punkt.x.0, 2.5)?;
    expect_nahe(ende.punkt.y.0, 0.)?;

    // Die Änderung ist für bestehende Fahrmarken sofort sichtbar.
    expect_eq(gleisnetz.nächster_zustand(Punkt::neu(2, 1)), Ok(true))?;
    let ende = gleisnetz.transformiere(&fahrmarke, Skalar(10.)).expect("Gleis existiert.");
    expect_nahe(ende.punkt.x.0, 2.5)?;
    expect_nahe(ende.punkt.y.0, 1.)?;

    expect_eq(gleisnetz.vorheriger_zustand(Punkt::NULL), Ok(true))?;
    let ende = gleisnetz.transformiere(&fahrmarke, Skalar(10.)).expect("Gleis existiert.");
    expect_nahe(ende.punkt.y.0, 0.)?;

    expect_eq(gleisnetz.nächster_zustand(Punkt::neu(-1, 0)), Ok(false))?;
    let leer = Punkt::neu(7, 7);
    expect_eq(gleisnetz.nächster_zustand(leer), Err(Fehler::KeinGleis(leer)))?;
    Ok(())
}

#[test]
fn bereich_löschen() -> Result<(), Expectation> {
    init_test_logging();

    let mut gleisnetz = Gleisnetz::neu();
    let _ = setze(&mut gleisnetz, Punkt::NULL, Gerade::neu(Richtung::PlusX));
    let _ = setze(&mut gleisnetz, Punkt::neu(1, 0), Gerade::neu(Richtung::PlusX));
    let bleibt = setze(&mut gleisnetz, Punkt::neu(5, 5), Gerade::neu(Richtung::PlusY));
    let _ = setze(&mut gleisnetz, Punkt::neu(10, 10), Weiche::neu(Richtung::PlusX, false));
    let _ = gleisnetz.setze_bahnhof(Punkt::neu(1, 1), Bahnhof::neu("Nord"));
    let _ = gleisnetz.setze_bahnhof(Punkt::neu(5, 6), Bahnhof::neu("Süd"));

    expect_eq(gleisnetz.lösche_bereich(Punkt::neu(1, 1), Punkt::NULL), 2)?;
    expect_true(gleisnetz.bahnhof_bei(Punkt::neu(1, 1)).is_none())?;
    // Die Weiche belegt (12, 11) mit ihrem abzweigenden Endpunkt.
    expect_eq(gleisnetz.lösche_bereich(Punkt::neu(12, 11), Punkt::neu(14, 14)), 1)?;
    expect_true(!gleisnetz.ist_gültiges_gleis(Punkt::neu(10, 10)))?;
    expect_eq(gleisnetz.lösche_bereich(Punkt::neu(20, 20), Punkt::neu(30, 30)), 0)?;

    expect_eq(gleisnetz.anzahl_gleise(), 1)?;
    expect_eq(id_bei(&gleisnetz, Punkt::neu(5, 5)), Some(bleibt))?;
    expect_eq(gleisnetz.bahnhof_bei(Punkt::neu(5, 6)).cloned(), Some(Bahnhof::neu("Süd")))?;
    Ok(())
}

#[test]
fn bahnhöfe() -> Result<(), Expectation> {
    init_test_logging();

    let mut gleisnetz = Gleisnetz::neu();
    expect_eq(gleisnetz.setze_bahnhof(Punkt::NULL, Bahnhof::neu("Alt")), None)?;
    expect_eq(
        gleisnetz.setze_bahnhof(Punkt::NULL, Bahnhof::neu("Neu")),
        Some(Bahnhof::neu("Alt")),
    )?;
    expect_eq(gleisnetz.bahnhöfe().count(), 1)?;
    expect_eq(gleisnetz.entferne_bahnhof(Punkt::NULL), Some(Bahnhof::neu("Neu")))?;
    expect_eq(gleisnetz.entferne_bahnhof(Punkt::NULL), None)?;
    Ok(())
}
