//! src/ocr/reconnaisseur.rs
//!
//! Point d’entrée du collaborateur OCR (boîte noire).
//!
//! Contrat :
//! - une reconnaissance = UNE tâche asynchrone à usage unique (pas d’annulation)
//! - la fin de la tâche déclenche l’évaluation côté appelant
//! - un échec de reconnaissance n’est jamais fatal

use futures::future::{self, BoxFuture, FutureExt};
use thiserror::Error;

use super::texte::TexteReconnu;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurReconnaissance {
    /// Panne du moteur OCR (modèle absent, image illisible...).
    /// La saisie manuelle ne peut pas échouer : seul un vrai moteur la produit.
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("reconnaissance échouée : {0}")]
    Echec(String),
}

pub type TacheReconnaissance = BoxFuture<'static, Result<TexteReconnu, ErreurReconnaissance>>;

pub trait Reconnaisseur {
    fn reconnaitre(&self, source: &str) -> TacheReconnaissance;
}

/// Saisie manuelle : le texte tapé/collé tient lieu de texte reconnu.
/// Se termine immédiatement. Texte blanc => reconnaissance vide (aucun bloc).
#[derive(Clone, Copy, Debug, Default)]
pub struct ReconnaisseurManuel;

impl Reconnaisseur for ReconnaisseurManuel {
    fn reconnaitre(&self, source: &str) -> TacheReconnaissance {
        future::ready(Ok(TexteReconnu::depuis_saisie(source))).boxed()
    }
}
