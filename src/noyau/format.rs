// src/noyau/format.rs
//
// Les deux lignes affichées à l’écran : "{valeur}" et "{gauche} {op} {droite}".
// Tout échec => placeholder fixe (le détail reste dans le journal).

use super::eval::EvaluationResult;

pub const PLACEHOLDER_INVALIDE: &str = "Image invalide";

pub fn affichage_valeur(r: &EvaluationResult) -> String {
    match r {
        EvaluationResult::Success { valeur, .. } => valeur.to_string(),
        EvaluationResult::Failure { .. } => PLACEHOLDER_INVALIDE.to_string(),
    }
}

pub fn affichage_details(r: &EvaluationResult) -> String {
    match r {
        EvaluationResult::Success {
            gauche,
            operateur,
            droite,
            ..
        } => format!("{gauche} {} {droite}", operateur.symbole),
        EvaluationResult::Failure { .. } => PLACEHOLDER_INVALIDE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::evaluate;

    #[test]
    fn succes() {
        let r = evaluate(" 9 x 9");
        assert_eq!(affichage_valeur(&r), "81");
        assert_eq!(affichage_details(&r), "9 x 9");
    }

    #[test]
    fn operandes_normalises() {
        // "+2" relu comme 2 : on affiche l’entier, pas le jeton brut
        let r = evaluate("4 * +2");
        assert_eq!(affichage_details(&r), "4 * 2");
        assert_eq!(affichage_valeur(&r), "8");
    }

    #[test]
    fn negatifs() {
        let r = evaluate("12 - -3");
        assert_eq!(affichage_details(&r), "12 - -3");
        assert_eq!(affichage_valeur(&r), "15");
    }

    #[test]
    fn echecs_meme_message() {
        for s in ["8 / 0", "foo bar", "abc + 5"] {
            let r = evaluate(s);
            assert_eq!(affichage_valeur(&r), PLACEHOLDER_INVALIDE, "{s:?}");
            assert_eq!(affichage_details(&r), PLACEHOLDER_INVALIDE, "{s:?}");
        }
    }
}
