//! Journalisation (natif seulement).
//!
//! `RUST_LOG` prime ; sinon le filtre passé en `--log`.
//! Sortie sur stderr : stdout reste réservé au résultat en mode --texte.

use tracing_subscriber::EnvFilter;

pub const FILTRE_DEFAUT: &str = "info";

pub fn init_journal(filtre: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filtre));

    // try_init : un second appel (tests) ne doit pas paniquer
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
