//! Noyau — machine à états de la calculatrice.
//!
//! Une touche à la fois : `appliquer(etat, touche) -> Issue`.
//! Fonction pure : l’ancien état est consommé, le nouveau est rendu entier
//! (la vue remplace sa valeur d’un bloc). La fête n’est PAS dans l’état :
//! c’est un signal de sortie (`Issue::fete`), le minuteur appartient à la vue.
//!
//! Évaluation immédiate, de gauche à droite (pas de priorité d’opérateurs).

use tracing::{debug, info, trace, warn};

use super::arith::{combiner, factorielle};
use super::erreur::ErreurCalc;
use super::format::{format_nombre, lire_nombre};
use super::jetons::{FonctionUnaire, Operateur, Touche};

/// Marqueur d’erreur affiché tel quel (seul `C` en sort).
pub const MARQUEUR_ERREUR: &str = "Error";

const AFFICHAGE_INITIAL: &str = "0";

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    affichage: String,
    operateur: Option<Operateur>,
    premier: Option<f64>,
    attend_second: bool,
    historique: Vec<String>,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_INITIAL.to_string(),
            operateur: None,
            premier: None,
            attend_second: false,
            historique: Vec::new(),
        }
    }
}

/// Résultat d’une touche : nouvel état + signal de fête (transitoire).
#[derive(Clone, Debug, PartialEq)]
pub struct Issue {
    pub etat: EtatCalc,
    pub fete: bool,
}

impl EtatCalc {
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn premier(&self) -> Option<f64> {
        self.premier
    }

    pub fn attend_second(&self) -> bool {
        self.attend_second
    }

    /// Historique en ordre de complétion (lecture seule).
    pub fn historique(&self) -> &[String] {
        &self.historique
    }

    pub fn en_erreur(&self) -> bool {
        self.affichage == MARQUEUR_ERREUR
    }

    /// Raccourci frontière : libellé brut -> Touche -> appliquer.
    pub fn presser(self, libelle: &str) -> Issue {
        appliquer(self, &Touche::depuis_libelle(libelle))
    }

    fn sans_fete(self) -> Issue {
        Issue {
            etat: self,
            fete: false,
        }
    }
}

/// Applique une touche. Ne panique pas, n’échoue pas : toujours un état valide.
pub fn appliquer(etat: EtatCalc, touche: &Touche) -> Issue {
    // Marqueur d’erreur : tout est bloqué jusqu’à C
    if etat.en_erreur() && *touche != Touche::Effacer {
        trace!(touche = touche.libelle(), "ignorée (affichage en erreur)");
        return etat.sans_fete();
    }

    debug!(touche = touche.libelle(), affichage = %etat.affichage, "touche");

    match touche {
        Touche::Operateur(op) => presser_operateur(etat, *op),
        Touche::Egal => presser_egal(etat),
        Touche::Effacer => effacer(etat).sans_fete(),
        Touche::Signe => basculer_signe(etat).sans_fete(),
        Touche::Point => ajouter_point(etat).sans_fete(),
        Touche::Factorielle => presser_factorielle(etat).sans_fete(),
        Touche::Fonction(f) => presser_fonction(etat, *f).sans_fete(),
        Touche::FonctionBinaire(f) => {
            if let Err(e) = f.verifier() {
                debug!(%e, "état inchangé");
            }
            etat.sans_fete()
        }
        Touche::Symbole(s) => ajouter_symbole(etat, s).sans_fete(),
    }
}

/* ------------------------ Transitions ------------------------ */

fn presser_operateur(mut etat: EtatCalc, suivant: Operateur) -> Issue {
    // Deux opérateurs d’affilée : on remplace seulement
    if etat.operateur.is_some() && etat.attend_second {
        etat.operateur = Some(suivant);
        return etat.sans_fete();
    }

    let courant = lire_nombre(&etat.affichage);
    let mut fete = false;

    match (etat.premier, etat.operateur) {
        (None, _) => etat.premier = Some(courant),
        (Some(a), Some(precedent)) => {
            let (r, f) = combiner(precedent, a, courant);
            fete = f;
            etat.affichage = format_nombre(r);
            etat.premier = Some(r);
        }
        // Après "=" : premier = dernier résultat, on le garde
        (Some(_), None) => {}
    }

    etat.operateur = Some(suivant);
    etat.attend_second = true;

    if fete {
        info!("fête : opérandes {{2, 6}}");
    }
    Issue { etat, fete }
}

fn presser_egal(mut etat: EtatCalc) -> Issue {
    let (Some(op), Some(a)) = (etat.operateur, etat.premier) else {
        trace!("= sans opérateur ou sans premier opérande");
        return etat.sans_fete();
    };

    let b = lire_nombre(&etat.affichage);
    let (r, fete) = combiner(op, a, b);
    let r_txt = format_nombre(r);

    etat.historique.push(format!(
        "{} {} {} = {}",
        format_nombre(a),
        op.symbole(),
        format_nombre(b),
        r_txt
    ));
    etat.affichage = r_txt;
    etat.premier = Some(r);
    etat.operateur = None;
    etat.attend_second = false;

    if fete {
        info!("fête : opérandes {{2, 6}}");
    }
    Issue { etat, fete }
}

/// C : remise à zéro, historique conservé.
fn effacer(etat: EtatCalc) -> EtatCalc {
    EtatCalc {
        historique: etat.historique,
        ..EtatCalc::default()
    }
}

fn basculer_signe(mut etat: EtatCalc) -> EtatCalc {
    etat.affichage = match etat.affichage.strip_prefix('-') {
        Some(reste) => reste.to_string(),
        None => format!("-{}", etat.affichage),
    };
    etat
}

fn ajouter_point(mut etat: EtatCalc) -> EtatCalc {
    if !etat.affichage.contains('.') {
        etat.affichage.push('.');
    }
    etat
}

fn presser_factorielle(mut etat: EtatCalc) -> EtatCalc {
    let n = lire_nombre(&etat.affichage);

    match factorielle(n) {
        Ok(r) => {
            let r_txt = format_nombre(r);
            etat.historique.push(format!("{}! = {}", format_nombre(n), r_txt));
            etat.affichage = r_txt;
            etat.attend_second = true;
        }
        Err(e @ ErreurCalc::OperandeInvalide(_)) => {
            warn!(%e, "affichage en erreur");
            etat.affichage = MARQUEUR_ERREUR.to_string();
        }
        Err(e) => debug!(%e, "état inchangé"),
    }
    etat
}

fn presser_fonction(mut etat: EtatCalc, f: FonctionUnaire) -> EtatCalc {
    let x = lire_nombre(&etat.affichage);
    let r_txt = f.appliquer(x);

    etat.historique.push(format!("{}({}) = {}", f.libelle(), format_nombre(x), r_txt));
    etat.affichage = r_txt;
    etat.attend_second = true;
    etat
}

fn ajouter_symbole(mut etat: EtatCalc, s: &str) -> EtatCalc {
    if etat.attend_second {
        etat.affichage = s.to_string();
        etat.attend_second = false;
    } else if etat.affichage == AFFICHAGE_INITIAL {
        etat.affichage = s.to_string();
    } else {
        etat.affichage.push_str(s);
    }
    etat
}
