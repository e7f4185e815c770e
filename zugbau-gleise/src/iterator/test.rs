//! Tests für [`GleisIterator`].

use zugbau_gleis::{
    Element, Fahrmarke, Gerade, Kurve, MeshErbauer, Segment, UngültigeRichtung, Verbindung,
    Verschmelzung, Weiche,
};
use zugbau_id::{GleisId, KeineIdVerfügbar};
use zugbau_test_util::{expect_eq, expect_true, init_test_logging, Expectation};
use zugbau_typen::{Lage, Punkt, Richtung, Skalar, Vektor, WinkelGradmaß};

use crate::{iteriere_gleis, Bahnhof, Fehler, Gleisnetz, Karte, Status};

/// Ein Gleis, welches immer zum Feld `nächstes` führt.
#[derive(Debug, Clone)]
struct RingStück {
    ursprung: Punkt,
    nächstes: Punkt,
}

impl Segment for RingStück {
    fn art(&self) -> &'static str {
        "RingStück"
    }

    fn setze_ursprung(&mut self, ursprung: Punkt) {
        self.ursprung = ursprung;
    }

    fn ursprung(&self) -> Punkt {
        self.ursprung
    }

    fn segment_länge(&self, _fahrmarke: &Fahrmarke) -> Skalar {
        Skalar(1.)
    }

    fn ist_gültige_richtung(&self, _richtung: Richtung) -> bool {
        true
    }

    fn fahrmarke(
        &self,
        gleis: GleisId,
        position: Punkt,
        richtung: Richtung,
    ) -> Result<Fahrmarke, UngültigeRichtung> {
        Ok(Fahrmarke { gleis, richtung, position, ausgänge: 1 })
    }

    fn transformiere(
        &self,
        fahrmarke: &Fahrmarke,
        _delta: Skalar,
    ) -> Result<Lage, UngültigeRichtung> {
        Ok(Lage::neu(Vektor::from(self.ursprung), fahrmarke.richtung.gier()))
    }

    fn nächste_position(&self, fahrmarke: &Fahrmarke) -> Result<Verbindung, UngültigeRichtung> {
        Ok(Verbindung { punkt: self.nächstes, richtung: fahrmarke.richtung })
    }

    fn endpunkte(&self) -> Vec<Punkt> {
        vec![self.ursprung]
    }

    fn verschmelze_ausgang(&self, _punkt: Punkt, _richtung: Richtung) -> Verschmelzung {
        Verschmelzung::Unmöglich
    }

    fn zeichne(&self, _erbauer: &mut dyn MeshErbauer) {}

    fn als_element(&self) -> Element {
        Element::neu("ringStück")
    }
}

/// Eine minimale [`Karte`] ohne Überlappungs-Prüfung.
#[derive(Debug, Default)]
struct RingKarte {
    gleise: Vec<(GleisId, Box<dyn Segment>)>,
    bahnhöfe: Vec<(Punkt, Bahnhof)>,
}

impl Karte for RingKarte {
    fn ist_gültiges_gleis(&self, punkt: Punkt) -> bool {
        self.gleis_bei(punkt).is_some()
    }

    fn gleis_bei(&self, punkt: Punkt) -> Option<(&GleisId, &dyn Segment)> {
        self.gleise
            .iter()
            .find(|(_id, segment)| segment.ursprung() == punkt)
            .map(|(id, segment)| (id, segment.as_ref()))
    }

    fn gleis(&self, id: &GleisId) -> Option<&dyn Segment> {
        self.gleise
            .iter()
            .find(|(gleis_id, _segment)| gleis_id == id)
            .map(|(_id, segment)| segment.as_ref())
    }

    fn setze_gleis(
        &mut self,
        punkt: Punkt,
        mut segment: Box<dyn Segment>,
    ) -> Result<GleisId, KeineIdVerfügbar> {
        let id = GleisId::neu()?;
        segment.setze_ursprung(punkt);
        self.gleise.push((id.clone(), segment));
        Ok(id)
    }

    fn bahnhof_bei(&self, punkt: Punkt) -> Option<&Bahnhof> {
        self.bahnhöfe
            .iter()
            .find(|(feld, _bahnhof)| *feld == punkt)
            .map(|(_feld, bahnhof)| bahnhof)
    }
}

fn ring_karte(felder: &[Punkt]) -> RingKarte {
    let mut karte = RingKarte::default();
    for (index, punkt) in felder.iter().enumerate() {
        let nächstes = felder.get(index + 1).or(felder.first()).copied().unwrap_or(*punkt);
        let _ = karte
            .setze_gleis(*punkt, Box::new(RingStück { ursprung: *punkt, nächstes }))
            .expect("Test verwendet wenige Ids.");
    }
    karte
}

#[test]
fn geschlossener_ring() -> Result<(), Expectation> {
    init_test_logging();

    let felder = [Punkt::NULL, Punkt::neu(5, 0), Punkt::neu(9, 9)];
    let karte = ring_karte(&felder);
    let start = iteriere_gleis(&karte, Punkt::NULL, Richtung::PlusX).expect("Gültige Richtung.");
    expect_eq(start.status(), Status::Ok)?;
    let start_id = start.fahrmarke().map(|fahrmarke| fahrmarke.gleis.clone());

    let mut iterator = start;
    for erwartet in [Punkt::neu(5, 0), Punkt::neu(9, 9), Punkt::NULL] {
        iterator = iterator.nächstes().expect("Gültiges Gleis.");
        expect_eq(iterator.status(), Status::Ok)?;
        expect_eq(iterator.fahrmarke().map(|fahrmarke| fahrmarke.position), Some(erwartet))?;
        expect_eq(iterator.gleis().map(|segment| segment.ursprung()), Some(erwartet))?;
    }
    expect_eq(iterator.fahrmarke().map(|fahrmarke| fahrmarke.gleis.clone()), start_id)?;
    expect_eq(iterator.richtung(), Richtung::PlusX)?;
    Ok(())
}

#[test]
fn bahnhof() -> Result<(), Expectation> {
    init_test_logging();

    let felder = [Punkt::NULL, Punkt::neu(1, 0), Punkt::neu(2, 0)];
    let mut karte = ring_karte(&felder);
    karte.bahnhöfe.push((Punkt::neu(2, 0), Bahnhof::neu("Hauptbahnhof")));

    let iterator = iteriere_gleis(&karte, Punkt::neu(1, 0), Richtung::PlusX).expect("Gültig.");
    expect_eq(iterator.status(), Status::Ok)?;
    expect_true(iterator.bahnhof().is_none())?;
    let iterator = iterator.nächstes().expect("Gültiges Gleis.");
    expect_eq(iterator.status(), Status::Bahnhof)?;
    expect_eq(iterator.bahnhof().cloned(), Some(Bahnhof::neu("Hauptbahnhof")))?;
    // Die Fahrt kann am Bahnhof fortgesetzt werden.
    let iterator = iterator.nächstes().expect("Gültiges Gleis.");
    expect_eq(iterator.status(), Status::Ok)?;
    expect_eq(iterator.fahrmarke().map(|fahrmarke| fahrmarke.position), Some(Punkt::NULL))?;
    Ok(())
}

#[test]
fn kein_nachbar() -> Result<(), Expectation> {
    init_test_logging();

    let mut gleisnetz = Gleisnetz::neu();
    let _ = gleisnetz
        .setze_gleis(Punkt::NULL, Box::new(Gerade::neu(Richtung::PlusX)))
        .expect("Test verwendet wenige Ids.");

    let iterator = iteriere_gleis(&gleisnetz, Punkt::NULL, Richtung::MinusX).expect("Gültig.");
    expect_eq(iterator.status(), Status::Ok)?;
    let ende = iterator.nächstes().expect("Gültiges Gleis.");
    expect_eq(ende.status(), Status::KeineWeiteren)?;
    expect_true(ende.fahrmarke().is_none())?;
    expect_true(ende.gleis().is_none())?;
    expect_eq(ende.richtung(), Richtung::MinusX)?;

    let nochmal = ende.nächstes().expect("Ende bleibt Ende.");
    expect_eq(nochmal.status(), Status::KeineWeiteren)?;

    let leer = iteriere_gleis(&gleisnetz, Punkt::neu(3, 3), Richtung::PlusY).expect("Gültig.");
    expect_eq(leer.status(), Status::KeineWeiteren)?;
    Ok(())
}

#[test]
fn unpassender_nachbar() -> Result<(), Expectation> {
    init_test_logging();

    let mut gleisnetz = Gleisnetz::neu();
    for (punkt, achse) in [(Punkt::NULL, Richtung::PlusX), (Punkt::neu(1, 0), Richtung::PlusY)] {
        let _ = gleisnetz
            .setze_gleis(punkt, Box::new(Gerade::neu(achse)))
            .expect("Test verwendet wenige Ids.");
    }
    let iterator = iteriere_gleis(&gleisnetz, Punkt::NULL, Richtung::PlusX).expect("Gültig.");
    expect_true(matches!(iterator.nächstes(), Err(Fehler::UngültigeRichtung(_))))?;
    expect_true(matches!(
        iteriere_gleis(&gleisnetz, Punkt::NULL, Richtung::PlusY),
        Err(Fehler::UngültigeRichtung(_))
    ))?;
    Ok(())
}

#[test]
fn kreis_aus_vier_kurven() -> Result<(), Expectation> {
    init_test_logging();

    let mut gleisnetz = Gleisnetz::neu();
    for (ursprung, start) in [
        (Punkt::NULL, 0.),
        (Punkt::neu(1, -2), 90.),
        (Punkt::neu(-1, -3), 180.),
        (Punkt::neu(-2, -1), 270.),
    ] {
        let kurve = Kurve::neu(WinkelGradmaß::neu(start), WinkelGradmaß::neu(start + 90.), 2)
            .expect("Gültige Kurve.");
        let _ = gleisnetz.setze_gleis(ursprung, Box::new(kurve)).expect("Wenige Ids.");
    }
    expect_eq(gleisnetz.anzahl_gleise(), 4)?;

    let start = iteriere_gleis(&gleisnetz, Punkt::NULL, Richtung::PlusX).expect("Gültig.");
    let start_id = start.fahrmarke().map(|fahrmarke| fahrmarke.gleis.clone());
    let mut iterator = start;
    let mut positionen = Vec::new();
    for _ in 0..4 {
        iterator = iterator.nächstes().expect("Geschlossener Kreis.");
        expect_eq(iterator.status(), Status::Ok)?;
        positionen.extend(iterator.fahrmarke().map(|fahrmarke| fahrmarke.position));
    }
    expect_eq(
        positionen,
        vec![Punkt::neu(1, -2), Punkt::neu(-1, -3), Punkt::neu(-2, -1), Punkt::NULL],
    )?;
    expect_eq(iterator.fahrmarke().map(|fahrmarke| fahrmarke.gleis.clone()), start_id)?;
    expect_eq(iterator.richtung(), Richtung::PlusX)?;
    Ok(())
}

#[test]
fn einfahrt_am_falschen_ende() -> Result<(), Expectation> {
    init_test_logging();

    // Die Gerade führt auf den Ursprung der Kurve, dort ist nur die Einfahrt nach +X möglich.
    let mut gleisnetz = Gleisnetz::neu();
    let kurve = Kurve::neu(WinkelGradmaß::neu(0.), WinkelGradmaß::neu(90.), 2).expect("Gültig.");
    let _ = gleisnetz.setze_gleis(Punkt::NULL, Box::new(kurve)).expect("Wenige Ids.");
    let _ = gleisnetz
        .setze_gleis(Punkt::neu(0, -1), Box::new(Gerade::neu(Richtung::PlusY)))
        .expect("Wenige Ids.");
    let iterator =
        iteriere_gleis(&gleisnetz, Punkt::neu(0, -1), Richtung::PlusY).expect("Gültig.");
    expect_true(matches!(
        iterator.nächstes(),
        Err(Fehler::UngültigeRichtung(UngültigeRichtung { position, .. }))
            if position == Punkt::NULL
    ))?;

    // Eine Gerade neben der Weiche führt auf den abzweigenden Endpunkt, aber in Richtung +X.
    let mut gleisnetz = Gleisnetz::neu();
    let _ = gleisnetz
        .setze_gleis(Punkt::NULL, Box::new(Weiche::neu(Richtung::PlusX, false)))
        .expect("Wenige Ids.");
    let _ = gleisnetz
        .setze_gleis(Punkt::neu(1, 1), Box::new(Gerade::neu(Richtung::PlusX)))
        .expect("Wenige Ids.");
    let iterator =
        iteriere_gleis(&gleisnetz, Punkt::neu(1, 1), Richtung::PlusX).expect("Gültig.");
    expect_true(matches!(
        iterator.nächstes(),
        Err(Fehler::UngültigeRichtung(UngültigeRichtung { position, .. }))
            if position == Punkt::neu(2, 1)
    ))?;
    Ok(())
}
