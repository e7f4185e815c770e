//! Methoden zum hinzufügen und entfernen von Gleisen und Bahnhöfen.

use log::{debug, error, info};

use zugbau_gleis::Segment;
use zugbau_id::{GleisId, KeineIdVerfügbar};
use zugbau_typen::Punkt;

use crate::{Bahnhof, Gleisnetz};

impl Gleisnetz {
    /// Füge ein neues Gleis mit Ursprung `punkt` hinzu.
    ///
    /// Bestehende Gleise auf einem der belegten Felder werden entfernt.
    ///
    /// ## Errors
    ///
    /// Es war keine [`GleisId`] verfügbar.
    pub(crate) fn hinzufügen(
        &mut self,
        punkt: Punkt,
        mut segment: Box<dyn Segment>,
    ) -> Result<GleisId, KeineIdVerfügbar> {
        let gleis_id = GleisId::neu()?;
        segment.setze_ursprung(punkt);
        let felder = segment.belegte_felder();
        for feld in &felder {
            if let Some(bisher) = self.felder.get(feld).cloned() {
                let _ = self.entfernen(&bisher);
            }
        }
        for feld in felder {
            let _ = self.felder.insert(feld, gleis_id.clone());
        }
        debug!("{} bei {punkt} als {gleis_id} hinzugefügt.", segment.art());
        let _ = self.gleise.insert(gleis_id.clone(), segment);
        Ok(gleis_id)
    }

    /// Entferne das Gleis mit der [`GleisId`].
    ///
    /// Rückgabewert ist das entfernte Gleis, sofern es existiert hat.
    pub fn entfernen(&mut self, gleis_id: &GleisId) -> Option<Box<dyn Segment>> {
        let segment = self.gleise.remove(gleis_id)?;
        for feld in segment.belegte_felder() {
            match self.felder.get(&feld) {
                Some(id) if id == gleis_id => {
                    let _ = self.felder.remove(&feld);
                },
                Some(id) => error!("Feld {feld} von {gleis_id} ist durch {id} belegt!"),
                None => error!("Feld {feld} von {gleis_id} war nicht belegt!"),
            }
        }
        debug!("{} bei {} ({gleis_id}) entfernt.", segment.art(), segment.ursprung());
        Some(segment)
    }

    /// Entferne das Gleis, welches das Feld `punkt` belegt.
    pub fn entfernen_bei(&mut self, punkt: Punkt) -> Option<Box<dyn Segment>> {
        let gleis_id = self.felder.get(&punkt)?.clone();
        self.entfernen(&gleis_id)
    }

    /// Entferne alle Gleise und Bahnhöfe im Rechteck mit den Ecken `ecke_a` und `ecke_b`.
    ///
    /// Ein Gleis wird entfernt, sobald eines seiner belegten Felder im Rechteck liegt.
    /// Rückgabewert ist die Anzahl entfernter Gleise.
    pub fn lösche_bereich(&mut self, ecke_a: Punkt, ecke_b: Punkt) -> usize {
        let mut gleis_ids: Vec<GleisId> = self
            .felder
            .iter()
            .filter(|(feld, _id)| feld.in_rechteck(&ecke_a, &ecke_b))
            .map(|(_feld, id)| id.clone())
            .collect();
        gleis_ids.sort();
        gleis_ids.dedup();
        let anzahl = gleis_ids.iter().filter_map(|id| self.entfernen(id)).count();
        self.bahnhöfe.retain(|punkt, _bahnhof| !punkt.in_rechteck(&ecke_a, &ecke_b));
        info!("{anzahl} Gleise zwischen {ecke_a} und {ecke_b} entfernt.");
        anzahl
    }

    /// Setze einen Bahnhof auf das Feld `punkt`.
    ///
    /// Rückgabewert ist der bisherige Bahnhof an diesem Feld.
    pub fn setze_bahnhof(&mut self, punkt: Punkt, bahnhof: Bahnhof) -> Option<Bahnhof> {
        debug!("{bahnhof} bei {punkt}.");
        self.bahnhöfe.insert(punkt, bahnhof)
    }

    /// Entferne den Bahnhof am Feld `punkt`.
    pub fn entferne_bahnhof(&mut self, punkt: Punkt) -> Option<Bahnhof> {
        self.bahnhöfe.remove(&punkt)
    }
}
