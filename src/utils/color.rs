use eframe::egui::Color32;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub card: Color32,
    pub glow_left: Color32,
    pub glow_right: Color32,
    pub halo: Color32,
    pub accent: Color32,
    pub text: Color32,
    pub muted: Color32,
    pub error: Color32,
    pub progress: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(14, 14, 20),
            card: Color32::from_white_alpha(12),
            glow_left: Color32::from_rgb(245, 158, 11).gamma_multiply(0.2),
            glow_right: Color32::from_rgb(236, 72, 153).gamma_multiply(0.2),
            halo: Color32::from_rgb(250, 204, 21).gamma_multiply(0.15),
            accent: Color32::from_rgb(129, 140, 248),
            text: Color32::WHITE,
            muted: Color32::from_white_alpha(204),
            error: Color32::from_rgb(253, 164, 175),
            progress: Color32::from_white_alpha(178),
        }
    }
}
