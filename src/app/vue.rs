// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage verbatim du noyau (y compris "3." en cours de saisie)
// - Clavier fixe de 49 touches (touches.rs), couleurs par rôle
// - Historique : plus récent en bas, défilement collé en bas
// - Fête : confettis par-dessus tout tant que le minuteur court

use eframe::egui;

use super::etat::AppCalc;
use super::touches::{rangees, role, Role};

/// Taille d’une touche du pavé.
const TAILLE_TOUCHE: [f32; 2] = [58.0, 40.0];

/// Nombre de confettis dessinés.
const CONFETTIS: usize = 160;

const JAUNE: egui::Color32 = egui::Color32::from_rgb(255, 159, 10);

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);
                ui.add_space(6.0);

                self.ui_affichage(ui);
                ui.add_space(8.0);

                self.ui_pave(ui, maintenant);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });

        if let Some(p) = self.progression_fete(maintenant) {
            Self::dessiner_confettis(ui, p);
        }
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // trois “pastilles” façon fenêtre
            for couleur in [
                egui::Color32::from_rgb(255, 95, 86),
                egui::Color32::from_rgb(255, 189, 46),
                egui::Color32::from_rgb(39, 201, 63),
            ] {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 6.0, couleur);
            }

            ui.add_space(12.0);

            let texte = if self.theme_sombre {
                "Passer en thème clair"
            } else {
                "Passer en thème sombre"
            };
            if ui.button(texte).clicked() {
                self.basculer_theme();
            }
        });
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.calc.affichage())
                            .monospace()
                            .size(36.0),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        // On collecte d’abord le clic, on applique après la grille (emprunt de self).
        let mut presse: Option<&'static str> = None;

        egui::Grid::new("pave_touches")
            .num_columns(super::touches::COLONNES)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in rangees() {
                    for &libelle in rangee {
                        if self.bouton_touche(ui, libelle) {
                            presse = Some(libelle);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(libelle) = presse {
            self.presser(libelle, maintenant);
        }
    }

    fn bouton_touche(&self, ui: &mut egui::Ui, libelle: &str) -> bool {
        let r = role(libelle);
        let mut texte = egui::RichText::new(libelle).size(16.0);
        if matches!(r, Role::Operateur | Role::Egal) {
            texte = texte.strong().color(egui::Color32::WHITE);
        }

        let mut bouton = egui::Button::new(texte);
        if let Some(fond) = self.couleur_role(r) {
            bouton = bouton.fill(fond);
        }

        ui.add_sized(TAILLE_TOUCHE, bouton).clicked()
    }

    fn couleur_role(&self, r: Role) -> Option<egui::Color32> {
        let (clair, fonce) = match r {
            Role::Operateur | Role::Egal => return Some(JAUNE),
            Role::Effacer | Role::Signe => ((212, 212, 210), (165, 165, 165)),
            Role::Nombre | Role::Zero => ((238, 238, 238), (80, 80, 80)),
            Role::Rad => ((225, 225, 232), (62, 62, 70)),
            Role::Neutre => return None,
        };
        let (r, g, b) = if self.theme_sombre { fonce } else { clair };
        Some(egui::Color32::from_rgb(r, g, b))
    }

    fn ui_historique(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                let lignes = self.calc.historique();
                if lignes.is_empty() {
                    ui.weak("(vide)");
                    return;
                }

                egui::ScrollArea::vertical()
                    .id_salt("historique_defilement")
                    .max_height(160.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for ligne in lignes {
                            ui.monospace(ligne);
                        }
                    });
            });
    }

    /// Confettis déterministes (pas de RNG) : position = f(indice, progression).
    fn dessiner_confettis(ui: &egui::Ui, progression: f32) {
        let zone = ui.max_rect();
        let painter = ui.painter();
        let alpha = ((1.0 - progression) * 255.0) as u8;

        let palette = [
            (255, 95, 86),
            (255, 189, 46),
            (39, 201, 63),
            (64, 156, 255),
            (191, 90, 242),
        ];

        for i in 0..CONFETTIS {
            let graine = i as f32;
            // fractions “quasi aléatoires” (suite de Weyl)
            let fx = (graine * 0.618_034).fract();
            let fv = (graine * 0.414_214 + 0.3).fract();
            let derive = ((graine * 0.732_051).fract() - 0.5) * 120.0;

            let x = zone.left() + fx * zone.width() + derive * progression;
            let y = zone.top() + (0.2 + 0.8 * fv) * progression * zone.height() * 1.4
                - zone.height() * 0.1;

            let (r, g, b) = palette[i % palette.len()];
            let couleur = egui::Color32::from_rgba_unmultiplied(r, g, b, alpha);
            painter.circle_filled(egui::pos2(x, y), 3.0 + (i % 3) as f32, couleur);
        }
    }
}
