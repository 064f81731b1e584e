//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de l’écran (source, tâche de reconnaissance en cours,
//! les deux lignes de résultat, erreur) et offrir des opérations simples.
//!
//! Contrats :
//! - Aucun parsing ici : la tâche terminée passe par `ocr::traiter`.
//! - Chaque lecture efface d’abord le résultat précédent.
//! - Un échec (évaluation OU reconnaissance) affiche le même placeholder.

use std::task::{Context, Poll};

use futures::task::noop_waker_ref;
use futures::FutureExt;
use tracing::{debug, warn};

use crate::noyau::{affichage_details, affichage_valeur, EvaluationResult, PLACEHOLDER_INVALIDE};
use crate::ocr::{
    traiter, ErreurReconnaissance, Reconnaisseur, ReconnaisseurManuel, TacheReconnaissance,
};

pub struct AppImage {
    // --- entrée (ce que le reconnaisseur reçoit) ---
    pub source: String,

    // --- sorties ---
    pub total: String,   // "{valeur}"
    pub details: String, // "{gauche} {op} {droite}"
    pub erreur: String,  // message du collaborateur OCR (si échec)

    // --- collaborateur + tâche à usage unique ---
    reconnaisseur: Box<dyn Reconnaisseur>,
    tache: Option<TacheReconnaissance>,

    // --- UX ---
    pub focus_source: bool,
}

impl Default for AppImage {
    fn default() -> Self {
        Self::avec_reconnaisseur(Box::new(ReconnaisseurManuel))
    }
}

impl AppImage {
    pub fn avec_reconnaisseur(reconnaisseur: Box<dyn Reconnaisseur>) -> Self {
        Self {
            source: String::new(),
            total: String::new(),
            details: String::new(),
            erreur: String::new(),
            reconnaisseur,
            tache: None,
            focus_source: true,
        }
    }

    pub fn en_cours(&self) -> bool {
        self.tache.is_some()
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Lire : efface le résultat précédent puis lance la reconnaissance.
    /// Une tâche encore en cours est remplacée (pas d’annulation à gérer).
    pub fn lancer(&mut self) {
        self.clear_resultats();
        if self.tache.is_some() {
            debug!("tâche précédente abandonnée");
        }
        self.tache = Some(self.reconnaisseur.reconnaitre(&self.source));
        self.focus_source = true;
    }

    /// Sonde la tâche une fois (à chaque frame). Retourne true si elle est encore en cours.
    pub fn sonder(&mut self) -> bool {
        let Some(tache) = self.tache.as_mut() else {
            return false;
        };

        let mut cx = Context::from_waker(noop_waker_ref());
        let fini = match tache.poll_unpin(&mut cx) {
            Poll::Pending => return true,
            Poll::Ready(r) => r,
        };
        self.tache = None;

        match fini {
            Ok(texte) => {
                if let Some(r) = traiter(&texte) {
                    self.set_resultat(&r);
                }
            }
            Err(e) => self.set_echec_reconnaissance(e),
        }
        false
    }

    /// C : effacer seulement la source.
    pub fn clear_source(&mut self) {
        self.source.clear();
        self.focus_source = true;
    }

    /// Effacer les deux lignes de résultat + erreur.
    pub fn clear_resultats(&mut self) {
        self.total.clear();
        self.details.clear();
        self.erreur.clear();
    }

    /// AC : tout remettre à zéro (tâche en cours comprise).
    pub fn reset_total(&mut self) {
        self.clear_source();
        self.clear_resultats();
        self.tache = None;
    }

    /* ------------------------ Utilitaires ------------------------ */

    pub fn set_resultat(&mut self, r: &EvaluationResult) {
        self.erreur.clear();
        self.total = affichage_valeur(r);
        self.details = affichage_details(r);
    }

    pub fn set_echec_reconnaissance(&mut self, e: ErreurReconnaissance) {
        warn!(erreur = %e, "reconnaissance en échec");
        self.total = PLACEHOLDER_INVALIDE.to_string();
        self.details = PLACEHOLDER_INVALIDE.to_string();
        self.erreur = e.to_string();
    }
}
