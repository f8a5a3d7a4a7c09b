// src/app.rs
//
// Calculatrice à touches — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + touches.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Pas de raccourcis clavier : l’entrée passe uniquement par les boutons.

pub mod etat;
pub mod touches;
pub mod vue;


pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.theme_sombre {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let maintenant = ctx.input(|i| i.time);
        self.expirer_fete(maintenant);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant);
        });

        // Fête en cours : animation continue ; la frame après l’échéance efface l’effet.
        if self.fete_active(maintenant) {
            ctx.request_repaint();
        }
    }
}
