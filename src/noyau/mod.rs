//! Noyau : lecture d’une opération `a op b` dans un texte reconnu
//!
//! Organisation interne :
//! - operateur.rs  : table symbole -> opération (synonymes x × * / % + -)
//! - extraction.rs : premier opérateur + jetons adjacents -> i32
//! - eval.rs       : calcul exact + résultat terminal (succès / échec)
//! - format.rs     : les deux lignes affichées (valeur, détail)
//! - erreur.rs     : taxonomie des échecs

pub mod erreur;
pub mod eval;
pub mod extraction;
pub mod format;
pub mod operateur;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::EvalError;
pub use eval::{evaluate, EvaluationResult};
pub use format::{affichage_details, affichage_valeur, PLACEHOLDER_INVALIDE};
