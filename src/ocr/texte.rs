// src/ocr/texte.rs
//
// Sortie du collaborateur OCR : blocs -> lignes -> éléments.
// Le noyau ne voit qu’une chaîne : chaque élément précédé d’UN espace,
// dans l’ordre bloc -> ligne -> élément.

use tracing::debug;

use crate::noyau::{evaluate, EvaluationResult};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub texte: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ligne {
    pub elements: Vec<Element>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bloc {
    pub lignes: Vec<Ligne>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TexteReconnu {
    pub blocs: Vec<Bloc>,
}

impl TexteReconnu {
    pub fn est_vide(&self) -> bool {
        self.blocs.is_empty()
    }

    /// " e1 e2 e3..." (espace devant chaque élément, y compris le premier).
    pub fn concatener(&self) -> String {
        let mut out = String::new();
        for bloc in &self.blocs {
            for ligne in &bloc.lignes {
                for el in &ligne.elements {
                    out.push(' ');
                    out.push_str(&el.texte);
                }
            }
        }
        out
    }

    /// Texte saisi/collé -> structure OCR.
    /// Paragraphe (séparé par une ligne vide) = bloc, ligne = ligne, mot = élément.
    pub fn depuis_saisie(saisie: &str) -> Self {
        let mut blocs = Vec::new();
        let mut courant = Bloc::default();

        for l in saisie.lines() {
            let elements: Vec<Element> = l
                .split_whitespace()
                .map(|m| Element {
                    texte: m.to_string(),
                })
                .collect();

            if elements.is_empty() {
                if !courant.lignes.is_empty() {
                    blocs.push(std::mem::take(&mut courant));
                }
                continue;
            }
            courant.lignes.push(Ligne { elements });
        }
        if !courant.lignes.is_empty() {
            blocs.push(courant);
        }

        Self { blocs }
    }
}

/// Reconnaissance terminée -> évaluation.
/// Reconnaissance vide => None (rien à afficher, l’écran reste effacé).
pub fn traiter(texte: &TexteReconnu) -> Option<EvaluationResult> {
    if texte.est_vide() {
        debug!("reconnaissance vide, pas d’évaluation");
        return None;
    }
    Some(evaluate(&texte.concatener()))
}
