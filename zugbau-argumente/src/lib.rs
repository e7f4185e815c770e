//! Kommandozeilen-Argumente.

// Ausgelöst durch das derive-Macro für Parse.
#![allow(clippy::shadow_unrelated)]

use std::{
    env,
    fmt::{self, Debug, Display, Formatter},
    num::NonZeroI32,
};

use kommandozeilen_argumente::{EnumArgument, Parse};

use zugbau_typen::{Punkt, Richtung};

#[derive(Debug, Clone, Parse)]
/// Fahrt über ein Gleisnetz aus Geraden, Kurven, Weichen und Kreuzungen.
#[kommandozeilen_argumente(sprache: deutsch, version, hilfe(lang: [hilfe, help], kurz: h))]
#[allow(clippy::struct_excessive_bools)]
pub struct Argumente {
    /// Lade das Gleisnetz aus der angegebenen Datei.
    /// Ohne Datei wird ein Beispiel-Gleisnetz verwendet.
    #[kommandozeilen_argumente(kurz, meta_var: DATEI)]
    pub pfad: Option<String>,

    /// Speichere das verwendete Gleisnetz in der angegebenen Datei.
    #[kommandozeilen_argumente(meta_var: DATEI)]
    pub speichern: Option<String>,

    /// X-Koordinate des Start-Feldes.
    #[kommandozeilen_argumente(standard: 0, kurz, meta_var: X)]
    pub x: i32,

    /// Y-Koordinate des Start-Feldes.
    #[kommandozeilen_argumente(standard: 0, kurz, meta_var: Y)]
    pub y: i32,

    /// Fahrtrichtung beim Start.
    #[kommandozeilen_argumente(standard: RichtungArgument::PlusX, kurz, meta_var: RICHTUNG)]
    pub richtung: RichtungArgument,

    /// Maximale Anzahl befahrener Gleise.
    #[kommandozeilen_argumente(standard: 16, kurz: n, meta_var: ANZAHL)]
    pub schritte: u32,

    /// Anzahl berechneter Positionen pro Gleis.
    #[kommandozeilen_argumente(standard: 4, meta_var: ANZAHL)]
    pub abtastung: u8,

    /// Schalte vor der Fahrt alle Weichen in den abzweigenden Zustand.
    pub umschalten: bool,

    /// Fahre an Bahnhöfen vorbei, statt am ersten Bahnhof anzuhalten.
    pub ohne_halt: bool,

    /// Zeige zusätzliche Informationen in der Konsole an.
    pub verbose: bool,

    /// Speichere Log-Nachrichten zusätzlich in einer Datei.
    #[kommandozeilen_argumente(kurz: l, invertiere_präfix: keine)]
    pub log_datei: bool,
}

impl Argumente {
    /// Parse Kommandozeilen-Argumente.
    /// Ein einzelnes Argument (das nicht mit "-" beginnt) wird als Pfad interpretiert.
    ///
    /// ## Panics
    ///
    /// Programmierfehler, wenn [`NonZeroI32::new`] [`None`] für den Exit-Code zurückgibt.
    #[must_use]
    pub fn parse_aus_env_einzelnes_als_pfad() -> Self {
        let mut args: Vec<_> = env::args_os().skip(1).collect();
        if args.len() == 1
            && !args
                .first()
                .and_then(|os_string| os_string.to_str())
                .is_some_and(|string| string.starts_with('-'))
        {
            // Einzelnes Argument, dass nicht mit '-' beginnt.
            args.insert(0, "--pfad".to_owned().into());
        }
        Argumente::parse_mit_fehlermeldung(args.into_iter(), NonZeroI32::new(1).expect("1 != 0"))
    }

    /// Das Start-Feld der Fahrt.
    #[must_use]
    pub fn start(&self) -> Punkt {
        Punkt::neu(self.x, self.y)
    }
}

/// Fahrtrichtung beim Start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumArgument)]
#[kommandozeilen_argumente(case: insensitive)]
pub enum RichtungArgument {
    /// In Richtung der positiven x-Achse.
    PlusX,
    /// In Richtung der negativen x-Achse.
    MinusX,
    /// In Richtung der positiven y-Achse.
    PlusY,
    /// In Richtung der negativen y-Achse.
    MinusY,
}

impl Display for RichtungArgument {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, formatter)
    }
}

impl From<RichtungArgument> for Richtung {
    fn from(argument: RichtungArgument) -> Self {
        match argument {
            RichtungArgument::PlusX => Richtung::PlusX,
            RichtungArgument::MinusX => Richtung::MinusX,
            RichtungArgument::PlusY => Richtung::PlusY,
            RichtungArgument::MinusY => Richtung::MinusY,
        }
    }
}
