//! Tests für [`Richtung`].

use enum_iterator::all;

use zugbau_test_util::{expect_eq, expect_true, init_test_logging, Expectation};

use crate::{
    punkt::Punkt,
    richtung::{KeineAchse, Richtung},
};

#[test]
fn negation_ist_involution() -> Result<(), Expectation> {
    init_test_logging();

    for richtung in all::<Richtung>() {
        expect_eq(-(-richtung), richtung)?;
        expect_eq(richtung.als_punkt() + (-richtung).als_punkt(), Punkt::NULL)?;
        expect_true(richtung.ist_parallel(-richtung))?;
        expect_true(!richtung.ist_parallel(richtung.gedreht_gegen_uhrzeigersinn()))?;
    }
    Ok(())
}

#[test]
fn drehung() -> Result<(), Expectation> {
    init_test_logging();

    expect_eq(Richtung::PlusX.gedreht_gegen_uhrzeigersinn(), Richtung::PlusY)?;
    expect_eq(Richtung::PlusY.gedreht_gegen_uhrzeigersinn(), Richtung::MinusX)?;
    for richtung in all::<Richtung>() {
        expect_eq(richtung.gedreht_gegen_uhrzeigersinn().gedreht_im_uhrzeigersinn(), richtung)?;
        expect_eq(
            richtung.gedreht_gegen_uhrzeigersinn().gedreht_gegen_uhrzeigersinn(),
            -richtung,
        )?;
    }
    Ok(())
}

#[test]
fn komponenten_und_differenz() -> Result<(), Expectation> {
    init_test_logging();

    for richtung in all::<Richtung>() {
        let Punkt { x, y } = richtung.als_punkt();
        expect_eq(Richtung::aus_komponenten(x, y), Some(richtung))?;
        let start = Punkt::neu(3, -2);
        expect_eq(Richtung::aus_differenz(start, start + richtung.als_punkt() * 5), Ok(richtung))?;
    }
    expect_eq(Richtung::aus_komponenten(1, 1), None)?;
    expect_eq(Richtung::aus_komponenten(2, 0), None)?;
    let von = Punkt::neu(0, 0);
    let nach = Punkt::neu(1, 1);
    expect_eq(Richtung::aus_differenz(von, nach), Err(KeineAchse { von, nach }))?;
    expect_eq(Richtung::aus_differenz(von, von), Err(KeineAchse { von, nach: von }))?;
    Ok(())
}

#[test]
fn text_darstellung() -> Result<(), Expectation> {
    init_test_logging();

    for richtung in all::<Richtung>() {
        expect_eq(richtung.to_string().parse::<Richtung>(), Ok(richtung))?;
    }
    expect_eq("x".parse::<Richtung>(), Ok(Richtung::PlusX))?;
    expect_true("z".parse::<Richtung>().is_err())?;
    Ok(())
}

#[test]
fn gier_passt_zum_einheitsvektor() -> Result<(), Expectation> {
    init_test_logging();

    for richtung in all::<Richtung>() {
        let gier = richtung.gier();
        let vektor = richtung.als_vektor();
        zugbau_test_util::expect_nahe(gier.cos().0, vektor.x.0)?;
        zugbau_test_util::expect_nahe(gier.sin().0, vektor.y.0)?;
    }
    Ok(())
}
