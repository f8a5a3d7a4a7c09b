//! Noyau de la calculatrice à touches
//!
//! Organisation interne :
//! - jetons.rs   : libellé de bouton -> Touche (frontière, une seule fois)
//! - machine.rs  : EtatCalc + appliquer (réducteur pur, une touche à la fois)
//! - arith.rs    : combiner (+ fête {2, 6}), factorielle, table des fonctions
//! - format.rs   : f64 <-> texte d’affichage
//! - erreur.rs   : erreurs locales (jamais propagées hors de appliquer)

pub mod arith;
pub mod erreur;
pub mod format;
pub mod jetons;
pub mod machine;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use jetons::Touche;
pub use machine::{appliquer, EtatCalc, Issue, MARQUEUR_ERREUR};
