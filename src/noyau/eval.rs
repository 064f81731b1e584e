//! Noyau — évaluation (pipeline réel)
//!
//! texte reconnu -> premier opérateur -> jetons adjacents -> i32 -> calcul exact
//!
//! Fonction pure : même entrée => même résultat, aucun état partagé.

use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use tracing::debug;

use super::erreur::EvalError;
use super::extraction::{extraire, ParsedExpression};
use super::operateur::Operator;

/// Résultat terminal d’une évaluation (succès OU échec, jamais de panique).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum EvaluationResult {
    Success {
        #[serde(rename = "left")]
        gauche: i32,
        #[serde(rename = "operator")]
        operateur: Operator,
        #[serde(rename = "right")]
        droite: i32,
        /// Valeur exacte : les opérandes restent bornés à i32, pas le résultat.
        #[serde(rename = "value", serialize_with = "en_texte")]
        valeur: BigInt,
    },
    Failure {
        #[serde(rename = "reason")]
        raison: EvalError,
    },
}

impl EvaluationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn raison(&self) -> Option<EvalError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { raison } => Some(*raison),
        }
    }
}

impl From<Result<(ParsedExpression, BigInt), EvalError>> for EvaluationResult {
    fn from(r: Result<(ParsedExpression, BigInt), EvalError>) -> Self {
        match r {
            Ok((e, valeur)) => EvaluationResult::Success {
                gauche: e.gauche,
                operateur: e.operateur,
                droite: e.droite,
                valeur,
            },
            Err(raison) => EvaluationResult::Failure { raison },
        }
    }
}

/// API publique : évalue le texte reconnu.
pub fn evaluate(texte: &str) -> EvaluationResult {
    let r = calcule(texte);
    match &r {
        Ok((_, v)) => debug!(texte, valeur = %v, "évaluation réussie"),
        Err(e) => debug!(texte, raison = e.code(), "évaluation en échec"),
    }
    r.into()
}

fn calcule(texte: &str) -> Result<(ParsedExpression, BigInt), EvalError> {
    let e = extraire(texte)?;
    let v = e.operateur.appliquer(e.gauche, e.droite)?;
    Ok((e, v))
}

fn en_texte<S: Serializer>(v: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(v)
}
