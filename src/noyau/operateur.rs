// src/noyau/operateur.rs
//
// Table statique symbole -> opération.
// Synonymes conservés tels quels : x / × / * = multiplication, / et % = division.
// `%` n’est JAMAIS un modulo ici.

use num_bigint::BigInt;
use num_traits::Zero;
use serde::Serialize;

use super::erreur::EvalError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Multiplication,
    Division,
    Addition,
    Soustraction,
}

/// Opérateur lu dans le texte : on garde le symbole réellement vu
/// (pour le réafficher) + l’opération qu’il désigne.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Operator {
    #[serde(rename = "symbol")]
    pub symbole: char,
    pub operation: Operation,
}

const SYMBOLES: [(char, Operation); 7] = [
    ('x', Operation::Multiplication),
    ('×', Operation::Multiplication),
    ('*', Operation::Multiplication),
    ('/', Operation::Division),
    ('%', Operation::Division),
    ('+', Operation::Addition),
    ('-', Operation::Soustraction),
];

impl Operator {
    pub fn depuis_symbole(c: char) -> Option<Self> {
        SYMBOLES
            .iter()
            .find(|(s, _)| *s == c)
            .map(|&(symbole, operation)| Operator { symbole, operation })
    }

    /// Premier opérateur rencontré (gauche -> droite) + son indice en octets.
    pub fn premier_dans(texte: &str) -> Option<(usize, Self)> {
        texte
            .char_indices()
            .find_map(|(i, c)| Self::depuis_symbole(c).map(|op| (i, op)))
    }

    pub fn appliquer(&self, gauche: i32, droite: i32) -> Result<BigInt, EvalError> {
        let a = BigInt::from(gauche);
        let b = BigInt::from(droite);

        match self.operation {
            Operation::Multiplication => Ok(a * b),
            Operation::Division => {
                if b.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                // BigInt: division tronquée vers zéro (comme les entiers natifs)
                Ok(a / b)
            }
            Operation::Addition => Ok(a + b),
            Operation::Soustraction => Ok(a - b),
        }
    }
}
