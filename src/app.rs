// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppImage (pour main.rs: use crate::app::AppImage;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

pub use etat::AppImage;

use eframe::egui;

impl eframe::App for AppImage {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Tâche de reconnaissance : sondée à chaque frame tant qu’elle tourne.
        if self.sonder() {
            ctx.request_repaint();
        }

        // ESC = effacer seulement le texte (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_source();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
