//! src/app/touches.rs
//!
//! Clavier affiché : 49 libellés dans un ordre fixe (10 colonnes, la dernière
//! rangée en a 9) + rôle visuel de chaque touche.
//!
//! Beaucoup de touches n’ont pas de sens dans la machine (mc, m+, Rad, Rand...) :
//! elles tombent dans `Touche::Symbole` et s’ajoutent à l’affichage.

pub const COLONNES: usize = 10;

#[rustfmt::skip]
pub static LIBELLES: [&str; 49] = [
    "(",   ")",    "mc",  "m+",  "m-",  "mr",    "C", "+/-", "%", "÷",
    "2nd", "x^2",  "x^3", "x^y", "e^x", "10^x",  "7", "8",   "9", "*",
    "1/x", "2√x",  "3√x", "y√x", "ln",  "log10", "4", "5",   "6", "-",
    "x!",  "sin",  "cos", "tan", "e",   "EE",    "1", "2",   "3", "+",
    "Rad", "sinh", "cosh","tanh","π",   "Rand",  "0", ".",   "=",
];

/// Groupe de style (couleur / largeur) d’une touche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Effacer,
    Signe,
    Zero,
    Nombre,
    Operateur,
    Egal,
    Rad,
    Neutre,
}

pub fn role(libelle: &str) -> Role {
    match libelle {
        "C" => Role::Effacer,
        "+/-" => Role::Signe,
        "0" => Role::Zero,
        "Rad" => Role::Rad,
        "=" => Role::Egal,
        "+" | "-" | "*" | "÷" => Role::Operateur,
        "." => Role::Nombre,
        _ if libelle.parse::<f64>().is_ok() => Role::Nombre,
        _ => Role::Neutre,
    }
}

/// Rangées du clavier (la dernière est plus courte).
pub fn rangees() -> impl Iterator<Item = &'static [&'static str]> {
    LIBELLES.chunks(COLONNES)
}
