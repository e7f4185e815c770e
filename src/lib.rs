//! Bau von Gleisnetzen aus Geraden, Kurven, Weichen und Kreuzungen auf einem Raster
//! und Fahrten über diese Gleisnetze.

use flexi_logger::{Duplicate, FileSpec, FlexiLoggerError, LogSpecBuilder, Logger, LoggerHandle};
use log::{info, LevelFilter};
use thiserror::Error;

use zugbau_argumente::Argumente;
use zugbau_gleise::{Fehler as GleiseFehler, Gleisnetz, LadenFehler, SpeichernFehler};
use zugbau_typen::Punkt;

pub mod beispiel;
pub mod fahrt;


/// Bei der [Ausführung](ausführen) potentiell auftretende Fehler.
#[derive(Debug, Error)]
pub enum Fehler {
    /// Ein Fehler beim starten des Loggers.
    #[error("Fehler beim Starten des Loggers: {0}")]
    FlexiLogger(#[from] FlexiLoggerError),
    /// Ein Fehler beim Laden des Gleisnetzes.
    #[error("Fehler beim Laden: {0}")]
    Laden(#[from] LadenFehler),
    /// Ein Fehler beim Speichern des Gleisnetzes.
    #[error("Fehler beim Speichern: {0}")]
    Speichern(#[from] SpeichernFehler),
    /// Ein Fehler bei einer Operation auf dem Gleisnetz.
    #[error(transparent)]
    Gleise(#[from] GleiseFehler),
}

/// Parse die Kommandozeilen-Argumente und führe die Anwendung aus.
///
/// ## Errors
///
/// Siehe [`ausführen`].
#[inline(always)]
pub fn ausführen_aus_env() -> Result<(), Fehler> {
    let argumente = Argumente::parse_aus_env_einzelnes_als_pfad();
    ausführen(argumente)
}

/// Lade ein Gleisnetz, schalte auf Wunsch alle Weichen um und protokolliere eine Fahrt darüber.
///
/// ## Errors
///
/// Der Logger konnte nicht gestartet werden, Laden oder Speichern ist fehlgeschlagen,
/// oder die Fahrt war nicht möglich.
pub fn ausführen(argumente: Argumente) -> Result<(), Fehler> {
    fn start_logger(verbose: bool, log_datei: bool) -> Result<LoggerHandle, FlexiLoggerError> {
        let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
        let mut log_spec_builder = LogSpecBuilder::new();
        let _ = log_spec_builder.default(LevelFilter::Error).module("zugbau", log_level);
        let log_spec = log_spec_builder.finalize();
        let logger_base = Logger::with(log_spec);
        let logger = if log_datei {
            logger_base
                .log_to_file(FileSpec::default().directory("log"))
                .duplicate_to_stderr(Duplicate::All)
        } else {
            logger_base.log_to_stderr()
        };
        logger.start()
    }
    let logger_handle = start_logger(argumente.verbose, argumente.log_datei)?;

    let mut gleisnetz = if let Some(pfad) = &argumente.pfad {
        let mut gleisnetz = Gleisnetz::neu();
        gleisnetz.laden(pfad)?;
        gleisnetz
    } else {
        info!("Kein Pfad angegeben, verwende Beispiel-Gleisnetz.");
        beispiel::kreis()?
    };

    if argumente.umschalten {
        let anzahl = schalte_weichen_um(&mut gleisnetz)?;
        info!("{anzahl} Weichen umgeschaltet.");
    }

    let einstellungen = fahrt::Einstellungen {
        start: argumente.start(),
        richtung: argumente.richtung.into(),
        schritte: argumente.schritte,
        abtastung: argumente.abtastung,
        ohne_halt: argumente.ohne_halt,
    };
    let schritte = fahrt::fahre(&gleisnetz, einstellungen)?;
    for (nummer, schritt) in schritte.iter().enumerate() {
        info!("#{nummer}: {} bei {} in Richtung {}", schritt.art, schritt.punkt, schritt.richtung);
        for lage in &schritt.lagen {
            info!("    {lage}");
        }
        if let Some(bahnhof) = &schritt.bahnhof {
            info!("    {bahnhof}");
        }
    }

    if let Some(pfad) = &argumente.speichern {
        gleisnetz.speichern(pfad)?;
    }

    // explizit drop aufrufen, damit logger_handle auf jeden Fall lang genug in scope bleibt.
    drop(logger_handle);

    Ok(())
}

/// Schalte jedes Gleis mit mehreren Zuständen einmal weiter.
///
/// Gibt die Anzahl umgeschalteter Gleise zurück.
///
/// ## Errors
///
/// Ein Gleis wurde während des Umschaltens entfernt.
pub fn schalte_weichen_um(gleisnetz: &mut Gleisnetz) -> Result<usize, GleiseFehler> {
    let ursprünge: Vec<Punkt> = gleisnetz
        .gleise()
        .into_iter()
        .filter(|(_id, segment)| segment.hat_mehrere_zustände())
        .map(|(_id, segment)| segment.ursprung())
        .collect();
    for ursprung in &ursprünge {
        let _ = gleisnetz.nächster_zustand(*ursprung)?;
    }
    Ok(ursprünge.len())
}
