// src/noyau/arith.rs
//
// Arithmétique f64 (pas de précision arbitraire)
// ---------------------------------------------
// - combiner    : + - * ÷ , plus le déclencheur de fête {2, 6}
// - factorielle : produit itératif 2..=floor(n)
// - table des fonctions unaires (trig en degrés, 8 décimales)
//
// Division par zéro, ln(0), √(-1)... : on laisse IEEE-754 produire ±inf / NaN.

use std::f64::consts::PI;

use num_traits::ToPrimitive;

use super::erreur::ErreurCalc;
use super::format::{format_fixe, format_nombre};
use super::jetons::{FonctionUnaire, Operateur};

/// Décimales fixes pour sin/cos/tan.
pub const DECIMALES_TRIG: usize = 8;

/// Au-delà, n! dépasse f64::MAX : inutile de boucler.
const FACTORIELLE_MAX: u64 = 170;

/// Combine deux opérandes. Le booléen signale la fête : {a, b} == {2, 6}.
pub fn combiner(op: Operateur, a: f64, b: f64) -> (f64, bool) {
    let fete = declenche_fete(a, b);

    let r = match op {
        Operateur::Add => a + b,
        Operateur::Sub => a - b,
        Operateur::Mul => a * b,
        Operateur::Div => a / b,
    };

    (r, fete)
}

/// Paire non ordonnée {2, 6}, indépendante du résultat.
pub fn declenche_fete(a: f64, b: f64) -> bool {
    (a == 2.0 && b == 6.0) || (a == 6.0 && b == 2.0)
}

/// n! pour n >= 0 (partie entière de n). Négatif => OperandeInvalide.
pub fn factorielle(n: f64) -> Result<f64, ErreurCalc> {
    if n < 0.0 {
        return Err(ErreurCalc::OperandeInvalide(n));
    }

    // NaN : l’intervalle 2..=floor(NaN) est vide, produit = 1
    let borne = match n.floor().to_u64() {
        Some(k) if k <= FACTORIELLE_MAX => k,
        None if n.is_nan() => 0,
        _ => return Ok(f64::INFINITY),
    };

    let mut r = 1.0_f64;
    for i in 2..=borne {
        r *= i as f64;
    }
    Ok(r)
}

impl FonctionUnaire {
    /// Applique la fonction et renvoie directement le texte d’affichage.
    pub fn appliquer(self, x: f64) -> String {
        let rad = x * PI / 180.0;

        match self {
            FonctionUnaire::Sin => format_fixe(rad.sin(), DECIMALES_TRIG),
            FonctionUnaire::Cos => format_fixe(rad.cos(), DECIMALES_TRIG),
            FonctionUnaire::Tan => format_fixe(rad.tan(), DECIMALES_TRIG),

            FonctionUnaire::Sinh => format_nombre(x.sinh()),
            FonctionUnaire::Cosh => format_nombre(x.cosh()),
            FonctionUnaire::Tanh => format_nombre(x.tanh()),

            FonctionUnaire::Ln => format_nombre(x.ln()),
            FonctionUnaire::Log10 => format_nombre(x.log10()),

            FonctionUnaire::Carre => format_nombre(x.powi(2)),
            FonctionUnaire::Cube => format_nombre(x.powi(3)),
            FonctionUnaire::ExpE => format_nombre(x.exp()),
            FonctionUnaire::Exp10 => format_nombre(10f64.powf(x)),
            FonctionUnaire::Racine2 => format_nombre(x.sqrt()),
            FonctionUnaire::Racine3 => format_nombre(x.cbrt()),

            // ignore x
            FonctionUnaire::Pi => format_nombre(PI),
        }
    }
}
