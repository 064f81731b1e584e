//! Noyau — taxonomie des échecs d’évaluation.
//!
//! Chaque variante a un code stable (journal, tests, sortie --json).
//! L’affichage utilisateur, lui, ne montre qu’un message générique.

use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// Un des deux jetons adjacents à l’opérateur n’est pas un entier i32.
    #[error("expression invalide : opérandes non entiers")]
    NotAValidExpression,

    /// Aucun symbole d’opérateur reconnu dans le texte.
    #[error("opérateur non reconnu")]
    UnrecognizedOperator,

    #[error("division par zéro")]
    DivisionByZero,
}

impl EvalError {
    pub fn code(&self) -> &'static str {
        match self {
            EvalError::NotAValidExpression => "not-a-valid-expression",
            EvalError::UnrecognizedOperator => "unrecognized-operator",
            EvalError::DivisionByZero => "division-by-zero",
        }
    }
}

impl Serialize for EvalError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
