//! Erreurs locales du noyau.
//!
//! Aucune ne traverse `appliquer` : la machine les convertit toujours en un
//! état suivant valide (marqueur d’erreur, ou état inchangé).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    /// Factorielle d’un nombre négatif.
    #[error("opérande invalide pour x! : {0}")]
    OperandeInvalide(f64),

    /// Fonction à deux arguments (x^y, y√x) : mode binaire non câblé.
    #[error("touche non implémentée : {0}")]
    NonImplemente(&'static str),
}
