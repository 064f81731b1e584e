//! Tests de propriétés : génération déterministe + budget temps.
//!
//! - RNG déterministe (seed fixe), pas de dépendance externe
//! - invariants : résultat = calcul direct, idempotence, bruit toléré,
//!   aucun opérateur => échec, division par zéro => échec (jamais de panique)

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::{evaluate, EvalError, EvaluationResult};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn entier(&mut self) -> i32 {
        match self.pick(4) {
            0 => 0,
            1 => self.pick(10) as i32,
            2 => -(self.pick(1000) as i32),
            _ => self.next_u32() as i32,
        }
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence ------------------------ */

const SYMBOLES: [char; 7] = ['x', '×', '*', '/', '%', '+', '-'];

fn attendu(a: i32, op: char, b: i32) -> Result<BigInt, EvalError> {
    let (a, b) = (a as i64, b as i64);
    match op {
        'x' | '×' | '*' => Ok(BigInt::from(a * b)),
        '/' | '%' if b == 0 => Err(EvalError::DivisionByZero),
        '/' | '%' => Ok(BigInt::from(a / b)),
        '+' => Ok(BigInt::from(a + b)),
        '-' => Ok(BigInt::from(a - b)),
        _ => unreachable!(),
    }
}

fn espaces(rng: &mut Rng) -> String {
    " ".repeat(rng.pick(4) as usize)
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn prop_forme_bien_formee() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2_000 {
        budget(start, max);

        let a = rng.entier();
        let b = rng.entier();
        let op = SYMBOLES[rng.pick(SYMBOLES.len() as u32) as usize];

        // gauche négative : son '-' serait lu comme l’opérateur
        if a < 0 {
            continue;
        }

        let s = format!("{}{a} {op} {b}{}", espaces(&mut rng), espaces(&mut rng));

        match (evaluate(&s), attendu(a, op, b)) {
            (EvaluationResult::Success { valeur, .. }, Ok(v)) => {
                assert_eq!(valeur, v, "s={s:?}")
            }
            (EvaluationResult::Failure { raison }, Err(e)) => assert_eq!(raison, e, "s={s:?}"),
            (r, e) => panic!("s={s:?} obtenu={r:?} attendu={e:?}"),
        }
    }
}

#[test]
fn prop_bruit_autour_des_operandes() {
    let mut rng = Rng::new(42);
    let bruits_avant = ["total", "Q3.", "calcul:", "==", "ab cd"];
    let bruits_apres = ["=", "?", "fin", "12 34", "merci !"];

    for _ in 0..500 {
        let a = rng.pick(10_000) as i32;
        let b = 1 + rng.pick(10_000) as i32;
        let avant = bruits_avant[rng.pick(5) as usize];
        let apres = bruits_apres[rng.pick(5) as usize];

        let s = format!("  {avant} {a} + {b} {apres}  ");
        let r = evaluate(&s);
        assert_eq!(r, evaluate(&format!("{a} + {b}")), "s={s:?}");
        assert!(r.is_success(), "s={s:?} r={r:?}");
    }
}

#[test]
fn prop_idempotence() {
    let mut rng = Rng::new(7);
    let echantillons = ["12 + 7", "8 / 0", "foo", "", " 9 x 9 ", "abc + 5", "-5 + 3"];

    for s in echantillons {
        assert_eq!(evaluate(s), evaluate(s), "s={s:?}");
    }
    for _ in 0..200 {
        let s = format!("{} {} {}", rng.entier(), SYMBOLES[rng.pick(7) as usize], rng.entier());
        assert_eq!(evaluate(&s), evaluate(&s), "s={s:?}");
    }
}

#[test]
fn prop_sans_operateur_echoue() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(1234);
    // alphabet sans aucun symbole d’opérateur
    let alphabet: Vec<char> = "0123456789 abcdefghijklmnopqrstuvwyz&=^.,:;()".chars().collect();

    for _ in 0..1_000 {
        budget(start, max);

        let n = rng.pick(24) as usize;
        let s: String = (0..n)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        assert_eq!(
            evaluate(&s),
            EvaluationResult::Failure {
                raison: EvalError::UnrecognizedOperator
            },
            "s={s:?}"
        );
    }
}

#[test]
fn prop_jamais_de_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(99);
    let alphabet: Vec<char> = "0123456789 -+*/%x×é\t\nab.".chars().collect();

    for _ in 0..3_000 {
        budget(start, max);

        let n = rng.pick(16) as usize;
        let s: String = (0..n)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        // seul contrat : un résultat, toujours
        let _ = evaluate(&s);
    }
}
