use super::*;

impl HomeApp {
    /// Borra el progreso del idioma actual conservando la identidad del
    /// usuario.
    pub fn reset_progress(&mut self) {
        if let Some(lang) = self.selected_language {
            let (user_id, display_name) = self
                .profile()
                .map(|p| (p.user_id.clone(), p.display_name.clone()))
                .unwrap_or_else(|| ("local".to_owned(), "Tú".to_owned()));
            self.profiles
                .insert(lang, UserProfile::new(&user_id, &display_name));
            self.confirm_reset = false;
            self.ir_a_inicio();
        }
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(
                    "¿Seguro que quieres borrar todo tu progreso de este idioma? ¡Esta acción no se puede deshacer!",
                );
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
