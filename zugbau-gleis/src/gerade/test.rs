//! Tests für [`Gerade`].

use enum_iterator::all;

use zugbau_id::GleisId;
use zugbau_test_util::{
    expect_eq, expect_nahe, expect_true, init_test_logging, ExpectTrue, Expectation,
};
use zugbau_typen::{Punkt, Richtung, Skalar};

use crate::{
    gerade::Gerade,
    segment::{
        Fahrmarke, KonstruktionsFehler, Segment, UngültigeRichtung, Verbindung, Verschmelzung,
    },
};

fn id() -> GleisId {
    GleisId::neu().expect("Test verwendet weniger als u32::MAX Ids.")
}

fn fahrmarke(gerade: &Gerade, position: Punkt, richtung: Richtung) -> Fahrmarke {
    gerade.fahrmarke(id(), position, richtung).expect("Gültige Richtung.")
}

#[test]
fn achse_und_negation_gültig() -> Result<(), Expectation> {
    init_test_logging();

    for richtung in all::<Richtung>() {
        let gerade = Gerade::neu(richtung);
        expect_true(gerade.ist_gültige_richtung(richtung))?;
        expect_true(gerade.ist_gültige_richtung(-richtung))?;
        let quer = richtung.gedreht_gegen_uhrzeigersinn();
        expect_true(!gerade.ist_gültige_richtung(quer))?;
        expect_true(!gerade.ist_gültige_richtung(-quer))?;
        let fehler = gerade.fahrmarke(id(), Punkt::NULL, quer).err();
        expect_eq(
            fehler,
            Some(UngültigeRichtung {
                art: "Gerade",
                richtung: quer,
                position: Punkt::NULL,
                erwartet: (gerade.achse(), -gerade.achse()),
            }),
        )?;
    }
    Ok(())
}

#[test]
fn achse_wird_normalisiert() -> Result<(), Expectation> {
    init_test_logging();

    expect_eq(Gerade::neu(Richtung::MinusX).achse(), Richtung::PlusX)?;
    expect_eq(Gerade::neu(Richtung::MinusY).achse(), Richtung::PlusY)?;
    expect_eq(Gerade::aus_komponenten(0, -1).map(|gerade| gerade.achse()), Ok(Richtung::PlusY))?;
    expect_eq(
        Gerade::aus_komponenten(1, 1),
        Err(KonstruktionsFehler::KeineAchse { x: 1, y: 1 }),
    )?;
    Ok(())
}

#[test]
fn transformation_vorwärts_und_rückwärts() -> Result<(), Expectation> {
    init_test_logging();

    let mut gerade = Gerade::neu(Richtung::PlusX);
    gerade.setze_ursprung(Punkt::neu(2, 3));

    let vorwärts = fahrmarke(&gerade, Punkt::neu(2, 3), Richtung::PlusX);
    expect_nahe(gerade.segment_länge(&vorwärts).0, 1.)?;
    let start = gerade.transformiere(&vorwärts, Skalar(0.)).expect("Gültige Richtung.");
    // Start auf dem Feld des Ursprungs
    expect_nahe(start.punkt.x.0, 1.5)?;
    expect_nahe(start.punkt.y.0, 3.)?;
    expect_nahe(start.gier.grad(), 0.)?;
    let ende = gerade.transformiere(&vorwärts, Skalar(1.)).expect("Gültige Richtung.");
    expect_nahe(ende.punkt.x.0, 2.5)?;
    // Beschränkung auf die Länge
    expect_eq(gerade.transformiere(&vorwärts, Skalar(7.)), Ok(ende))?;

    let rückwärts = fahrmarke(&gerade, Punkt::neu(2, 3), Richtung::MinusX);
    let start = gerade.transformiere(&rückwärts, Skalar(0.)).expect("Gültige Richtung.");
    expect_nahe(start.punkt.x.0, 2.5)?;
    expect_nahe(start.gier.grad(), 180.)?;
    let ende = gerade.transformiere(&rückwärts, Skalar(1.)).expect("Gültige Richtung.");
    expect_nahe(ende.punkt.x.0, 1.5)?;
    expect_nahe(ende.punkt.y.0, 3.)?;
    Ok(())
}

#[test]
fn nächste_position() -> Result<(), Expectation> {
    init_test_logging();

    let mut gerade = Gerade::neu(Richtung::PlusY);
    gerade.setze_ursprung(Punkt::neu(-1, 4));
    let vorwärts = fahrmarke(&gerade, Punkt::neu(-1, 4), Richtung::PlusY);
    expect_eq(
        gerade.nächste_position(&vorwärts),
        Ok(Verbindung { punkt: Punkt::neu(-1, 5), richtung: Richtung::PlusY }),
    )?;
    let rückwärts = fahrmarke(&gerade, Punkt::neu(-1, 4), Richtung::MinusY);
    expect_eq(
        gerade.nächste_position(&rückwärts),
        Ok(Verbindung { punkt: Punkt::neu(-1, 3), richtung: Richtung::MinusY }),
    )?;
    Ok(())
}

#[test]
fn verschmelzen() -> Result<(), Expectation> {
    init_test_logging();

    let ursprung = Punkt::neu(5, 5);
    let mut gerade = Gerade::neu(Richtung::PlusX);
    gerade.setze_ursprung(ursprung);

    // bereits gültiger Ausgang
    expect_true(matches!(
        gerade.verschmelze_ausgang(ursprung, Richtung::MinusX),
        Verschmelzung::Unverändert
    ))?;
    // senkrecht wird zur Kreuzung
    let Verschmelzung::Ersetzt(kreuzung) = gerade.verschmelze_ausgang(ursprung, Richtung::PlusY)
    else {
        return Err(ExpectTrue.into());
    };
    expect_eq(kreuzung.art(), "Kreuzung")?;
    expect_eq(kreuzung.ursprung(), ursprung)?;
    // versetzter Punkt wird zur Weiche
    let Verschmelzung::Ersetzt(weiche) =
        gerade.verschmelze_ausgang(Punkt::neu(7, 6), Richtung::PlusX)
    else {
        return Err(ExpectTrue.into());
    };
    expect_eq(weiche.art(), "Weiche")?;
    expect_true(weiche.endpunkte().contains(&Punkt::neu(7, 6)))?;
    // senkrechte Richtung an einem versetzten Punkt ist unmöglich
    expect_true(matches!(
        gerade.verschmelze_ausgang(Punkt::neu(7, 6), Richtung::PlusY),
        Verschmelzung::Unmöglich
    ))?;
    // beliebiger anderer Punkt ist unmöglich
    expect_true(matches!(
        gerade.verschmelze_ausgang(Punkt::neu(6, 5), Richtung::PlusX),
        Verschmelzung::Unmöglich
    ))?;
    Ok(())
}

#[test]
fn element() -> Result<(), Expectation> {
    init_test_logging();

    let element = Gerade::neu(Richtung::MinusY).als_element();
    expect_eq(element.to_string(), "<straightTrack align=\"y\"/>".to_owned())?;
    let gerade = crate::element::segment_aus_element(&element)
        .expect("Element einer Geraden ist gültig.");
    expect_eq(gerade.als_element(), element)?;
    Ok(())
}
