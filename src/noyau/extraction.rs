//! Noyau — extraction `gauche op droite` depuis un texte reconnu (bruité).
//!
//! Règles :
//! - opérateur = PREMIER symbole reconnu (gauche -> droite), même s’il y en a d’autres
//! - jeton gauche = dernier mot (séparé par ' ') juste avant l’opérateur
//! - jeton droit  = premier mot juste après l’opérateur
//! - les deux jetons doivent être des entiers i32 en base 10

use tracing::debug;

use super::erreur::EvalError;
use super::operateur::Operator;

/// Expression lue (transitoire : n’existe que le temps d’une évaluation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedExpression {
    pub gauche: i32,
    pub operateur: Operator,
    pub droite: i32,
}

pub fn extraire(texte: &str) -> Result<ParsedExpression, EvalError> {
    let (i, operateur) = Operator::premier_dans(texte).ok_or(EvalError::UnrecognizedOperator)?;

    let avant = &texte[..i];
    let apres = &texte[i + operateur.symbole.len_utf8()..];

    let g = jeton_gauche(avant);
    let d = jeton_droit(apres);
    debug!(gauche = g, operateur = %operateur.symbole, droite = d, "jetons extraits");

    Ok(ParsedExpression {
        gauche: lire_entier(g)?,
        operateur,
        droite: lire_entier(d)?,
    })
}

/// Dernier mot de `avant` (après trim).
fn jeton_gauche(avant: &str) -> &str {
    avant.trim().rsplit(' ').next().unwrap_or_default().trim()
}

/// Premier mot de `apres` (après trim).
fn jeton_droit(apres: &str) -> &str {
    apres.trim().split(' ').next().unwrap_or_default().trim()
}

/// Entier i32 strict : signe optionnel, pas de décimales, pas de débordement.
fn lire_entier(jeton: &str) -> Result<i32, EvalError> {
    jeton
        .parse::<i32>()
        .map_err(|_| EvalError::NotAValidExpression)
}
