// src/noyau/format.rs
//
// Texte <-> nombre pour l’affichage
// ---------------------------------
// - format_nombre : écriture la plus courte qui relit le même f64
//                   (entiers sans ".0", exposant hors [1e-6, 1e21), Infinity/NaN)
// - format_fixe   : virgule fixe (trig en degrés : 8 décimales)
// - lire_nombre   : plus long préfixe numérique ; sinon 0

/// Écriture courte d’un f64, stable d’un appel à l’autre.
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // -0 s’affiche 0
    if x == 0.0 {
        return "0".to_string();
    }

    let abs = x.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{x}");
    }

    // Notation exposant : 1e21 -> 1e+21, 1.5e-7 reste tel quel
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

/// Virgule fixe arrondie à `chiffres` décimales (les non-finis passent par format_nombre).
pub fn format_fixe(x: f64, chiffres: usize) -> String {
    if !x.is_finite() {
        return format_nombre(x);
    }
    // -0 s’affiche 0.00000000 (un petit négatif non nul garde son signe)
    let x = if x == 0.0 { 0.0 } else { x };
    format!("{x:.chiffres$}")
}

/// Lit le plus long préfixe numérique de `s`.
///
/// Accepte : signe, chiffres, un seul point, exposant, et les textes non finis
/// produits par `format_nombre`. Tout le reste (vide, "-", ".", "Error"...) vaut 0.
pub fn lire_nombre(s: &str) -> f64 {
    let s = s.trim();

    for (texte, valeur) in [
        ("Infinity", f64::INFINITY),
        ("+Infinity", f64::INFINITY),
        ("-Infinity", f64::NEG_INFINITY),
        ("NaN", f64::NAN),
        ("+NaN", f64::NAN),
        ("-NaN", f64::NAN),
    ] {
        if s.starts_with(texte) {
            return valeur;
        }
    }

    let fin = longueur_prefixe(s.as_bytes());
    if fin == 0 {
        return 0.0;
    }
    s[..fin].parse::<f64>().unwrap_or(0.0)
}

/// Longueur (en octets) du préfixe décimal valide ; 0 si aucun chiffre.
fn longueur_prefixe(b: &[u8]) -> usize {
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let debut_chiffres = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut nb_chiffres = i - debut_chiffres;

    if i < b.len() && b[i] == b'.' {
        i += 1;
        let debut_frac = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        nb_chiffres += i - debut_frac;
    }

    if nb_chiffres == 0 {
        return 0;
    }

    // Exposant : seulement s’il est suivi d’au moins un chiffre
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let debut_exp = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut_exp {
            i = j;
        }
    }

    i
}
