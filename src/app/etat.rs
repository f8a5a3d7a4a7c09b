//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir la valeur courante du noyau (`EtatCalc`), le thème, et le
//! minuteur de fête. Le noyau ne connaît pas le temps : c’est ici qu’on arme,
//! relance ou laisse expirer l’effet.
//!
//! Contrats :
//! - Aucune arithmétique ici : une touche = `EtatCalc::presser`, remplacé d’un bloc.
//! - Horloge fournie par l’appelant (secondes egui), donc testable sans fenêtre.
//! - Une nouvelle fête remplace le minuteur en cours (pas d’empilement).

use tracing::debug;

use crate::config::Reglages;
use crate::noyau::EtatCalc;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- noyau ---
    pub calc: EtatCalc,

    // --- UX ---
    pub theme_sombre: bool,

    // Fin de la fête (horloge egui, secondes) ; None = pas d’effet
    fin_fete: Option<f64>,
    duree_fete_ms: u64,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            calc: EtatCalc::default(),
            theme_sombre: reglages.theme_sombre,
            fin_fete: None,
            duree_fete_ms: reglages.duree_fete_ms,
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Une touche : remplace l’état du noyau, (re)lance la fête si signalée.
    pub fn presser(&mut self, libelle: &str, maintenant: f64) {
        let issue = std::mem::take(&mut self.calc).presser(libelle);
        self.calc = issue.etat;

        if issue.fete {
            let fin = maintenant + self.duree_fete_ms as f64 / 1000.0;
            debug!(fin, "minuteur de fête relancé");
            self.fin_fete = Some(fin);
        }
    }

    pub fn basculer_theme(&mut self) {
        self.theme_sombre = !self.theme_sombre;
    }

    /* ------------------------ Minuteur de fête ------------------------ */

    pub fn fete_active(&self, maintenant: f64) -> bool {
        self.temps_restant_fete(maintenant).is_some()
    }

    /// Secondes restantes avant la fin de l’effet (None si inactif / expiré).
    pub fn temps_restant_fete(&self, maintenant: f64) -> Option<f64> {
        self.fin_fete
            .map(|fin| fin - maintenant)
            .filter(|reste| *reste > 0.0)
    }

    /// Progression 0..1 de l’effet (pour l’animation).
    pub fn progression_fete(&self, maintenant: f64) -> Option<f32> {
        let duree = self.duree_fete_ms as f64 / 1000.0;
        if duree <= 0.0 {
            return None;
        }
        self.temps_restant_fete(maintenant)
            .map(|reste| (1.0 - reste / duree).clamp(0.0, 1.0) as f32)
    }

    /// Oublie un minuteur expiré (appelé à chaque frame).
    pub fn expirer_fete(&mut self, maintenant: f64) {
        if self.fin_fete.is_some() && !self.fete_active(maintenant) {
            self.fin_fete = None;
        }
    }
}
