// =========================
//          Color
// =========================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255, 255);
    pub const CYAN: Color = Color(0, 255, 255, 255);

    pub fn to_array(self) -> [u8; 4] {
        [self.0, self.1, self.2, self.3]
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba(self.to_array())
    }
}

// =========================
//         Style
// =========================

/// Emphasis state of a phrase, decided by its index within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Strong,
}

impl Emphasis {
    /// Even segments are normal, odd segments are emphasised.
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            Emphasis::Normal
        } else {
            Emphasis::Strong
        }
    }
}

/// Every tunable of the title layout.
///
/// The defaults reproduce the stock title images: 50px text, white with
/// cyan emphasis, on a half transparent black band.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStyle {
    pub font_size: u32,
    /// Gap between the text block and the banner edge, above and below.
    pub padding_y: u32,
    /// Extra space between two consecutive lines.
    pub line_spacing: u32,
    pub delimiter: char,
    pub normal_color: Color,
    pub emphasis_color: Color,
    pub banner_color: Color,
}

impl LayoutStyle {
    pub fn color_for(&self, emphasis: Emphasis) -> Color {
        match emphasis {
            Emphasis::Normal => self.normal_color,
            Emphasis::Strong => self.emphasis_color,
        }
    }
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            font_size: 50,
            padding_y: 25,
            line_spacing: 20,
            delimiter: '$',
            normal_color: Color::WHITE,
            emphasis_color: Color::CYAN,
            banner_color: Color(0, 0, 0, 128),
        }
    }
}
