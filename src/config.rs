//! Ligne de commande (natif seulement).
//!
//! Sans `--texte` : l’écran egui démarre.
//! Avec `--texte` : évaluation sans UI, deux lignes (ou JSON) sur stdout.

use clap::Parser;

use crate::journal::FILTRE_DEFAUT;
use crate::noyau::{
    affichage_details, affichage_valeur, EvalError, EvaluationResult, PLACEHOLDER_INVALIDE,
};
use crate::ocr::{traiter, TexteReconnu};

#[derive(Parser, Debug)]
#[command(version, about = "Calcule l’opération lue sur une photo (a op b).")]
pub struct Args {
    /// Texte reconnu à évaluer sans interface (ex: "12 + 7")
    #[arg(long)]
    pub texte: Option<String>,

    /// Sortie JSON (avec --texte)
    #[arg(long, requires = "texte")]
    pub json: bool,

    /// Filtre de journal si RUST_LOG est absent
    #[arg(long, default_value = FILTRE_DEFAUT)]
    pub log: String,
}

/// Sortie du mode sans UI + succès ?
pub fn rendu_sans_ui(texte: &str, json: bool) -> Result<(String, bool), serde_json::Error> {
    // même chemin qu’une reconnaissance : structure OCR -> concaténation -> noyau
    let Some(r) = traiter(&TexteReconnu::depuis_saisie(texte)) else {
        // reconnaissance vide : rien d’évalué, mais stdout doit rester lisible
        if json {
            let vide = EvaluationResult::Failure {
                raison: EvalError::UnrecognizedOperator,
            };
            return Ok((serde_json::to_string(&vide)?, false));
        }
        return Ok((PLACEHOLDER_INVALIDE.to_string(), false));
    };

    let ok = r.is_success();
    let sortie = if json {
        serde_json::to_string(&r)?
    } else {
        deux_lignes(&r)
    };
    Ok((sortie, ok))
}

fn deux_lignes(r: &EvaluationResult) -> String {
    format!("{}\n{}", affichage_valeur(r), affichage_details(r))
}
