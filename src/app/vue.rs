// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Un seul écran :
// - zone "Texte reconnu" (ce que le reconnaisseur reçoit)
// - bouton Lire : efface l’écran, lance la reconnaissance
// - Total + Détail (ou placeholder si l’image est invalide)
//
// Note :
// - Ctrl+Enter lance la lecture (Enter seul = retour à la ligne dans la zone)

use eframe::egui;

use super::etat::AppImage;

impl AppImage {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(crate::TITRE_APP);
                ui.add_space(6.0);

                self.ui_source(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);
            });
    }

    fn ui_source(&mut self, ui: &mut egui::Ui) {
        ui.label("Texte reconnu :");

        let resp = ui.add(
            egui::TextEdit::multiline(&mut self.source)
                .desired_width(ui.available_width())
                .desired_rows(4)
                .hint_text("Ex: 12 + 7, 100 / 4, 9 x 9")
                .id_source("source_edit")
                .code_editor(),
        );

        if self.focus_source {
            resp.request_focus();
            self.focus_source = false;
        }

        let ctrl_enter = ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && ctrl_enter {
            self.lancer();
            ui.ctx().request_repaint();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let lire = ui
                .add_enabled(
                    !self.en_cours(),
                    egui::Button::new("Lire").min_size(egui::vec2(96.0, 32.0)),
                )
                .on_hover_text("Efface le résultat puis lit l’opération");
            if lire.clicked() {
                self.lancer();
                ui.ctx().request_repaint();
            }

            ui.separator();

            if ui
                .add_sized([56.0, 30.0], egui::Button::new("C"))
                .on_hover_text("Efface seulement le texte")
                .clicked()
            {
                self.clear_source();
            }
            if ui
                .add_sized([56.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Remise à zéro totale")
                .clicked()
            {
                self.reset_total();
            }

            if self.en_cours() {
                ui.spinner();
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Total :");
        Self::champ_monospace(ui, "total_out", &self.total, 28.0);

        ui.add_space(6.0);

        ui.label("Détail :");
        Self::champ_monospace(ui, "details_out", &self.details, 16.0);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, taille: f32) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new(contenu).monospace().size(taille));
                });
            });
    }
}
