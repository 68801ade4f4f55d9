//! Fixed layout constants and sample copy.
//!
//! Everything the renderer places on the canvas is described here so that
//! [`render_preview`](crate::render_preview) stays a function of
//! `(pair, theme, layout)` alone.

use image::RgbaImage;

use crate::theme::{Color, LIGHT, rgba};

/// Pixel sizes of the type hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeScale {
    pub h1: f32,
    pub h2: f32,
    pub h5: f32,
    pub body_xlarge: f32,
    pub body_large: f32,
    pub body_regular: f32,
    pub body_small: f32,
    pub caption: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLayout {
    pub title: String,
    pub top: f32,
    /// Gap between the title line and the subtitle line.
    pub spacing: f32,
    /// Space between the logo and the header text.
    pub logo_gap: f32,
    /// Logo top, relative to `top`.
    pub logo_offset: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub top: f32,
    pub columns: u32,
    pub row_spacing: f32,
    pub height: f32,
    pub padding: f32,
    pub radius: f64,
    pub border: f64,
    pub title_offset: f32,
    pub subtitle_offset: f32,
    pub body_large_offset: f32,
    pub body_large_line: f32,
    pub body_regular_offset: f32,
    pub body_regular_line: f32,
    pub caption_margin_bottom: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonLayout {
    pub height: f32,
    pub padding: f32,
    pub radius: f64,
    pub margin_bottom: f32,
    pub shadow_offset: f64,
    pub shadow: Color,
    pub text_shadow: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterLayout {
    /// Distance from the bottom edge to the top of the QR code.
    pub offset_from_bottom: f32,
    pub qr_size: u32,
    pub qr_url: String,
    pub channel_name: String,
    pub channel_description: String,
    pub text_gap: f32,
    pub line_spacing: f32,
    pub font_info_offset: f32,
}

/// Background tiling of thin rhombi.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternLayout {
    pub rhombus_size: f64,
    pub spacing: f64,
    pub acute_angle: f64,
    pub obtuse_angle: f64,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub body_large: Vec<String>,
    pub body_regular: Vec<String>,
    pub button: String,
    pub caption: String,
}

impl CardContent {
    fn new(
        eyebrow: &str,
        title: &str,
        subtitle: &str,
        body_large: [&str; 2],
        body_regular: [&str; 2],
        button: &str,
        caption: &str,
    ) -> Self {
        Self {
            eyebrow: eyebrow.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            body_large: body_large.iter().map(|s| s.to_string()).collect(),
            body_regular: body_regular.iter().map(|s| s.to_string()).collect(),
            button: button.to_string(),
            caption: caption.to_string(),
        }
    }
}

/// Layout of a single pair preview.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub margin: f32,
    pub sizes: TypeScale,
    pub header: HeaderLayout,
    pub cards: CardLayout,
    pub button: ButtonLayout,
    pub footer: FooterLayout,
    pub pattern: PatternLayout,
    pub content: Vec<CardContent>,
    /// Drawn left of the header text, scaled to the height of title and subtitle.
    pub logo: Option<RgbaImage>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 1400,
            margin: 70.0,
            sizes: TypeScale {
                h1: 72.0,
                h2: 44.0,
                h5: 24.0,
                body_xlarge: 22.0,
                body_large: 18.0,
                body_regular: 16.0,
                body_small: 14.0,
                caption: 12.0,
            },
            header: HeaderLayout {
                title: "Typography Exploration".to_string(),
                top: 60.0,
                spacing: 25.0,
                logo_gap: 40.0,
                logo_offset: 5.0,
            },
            cards: CardLayout {
                top: 240.0,
                columns: 2,
                row_spacing: 400.0,
                height: 380.0,
                padding: 40.0,
                radius: 12.0,
                border: 2.0,
                title_offset: 30.0,
                subtitle_offset: 85.0,
                body_large_offset: 130.0,
                body_large_line: 28.0,
                body_regular_offset: 190.0,
                body_regular_line: 24.0,
                caption_margin_bottom: 25.0,
            },
            button: ButtonLayout {
                height: 44.0,
                padding: 20.0,
                radius: 8.0,
                margin_bottom: 80.0,
                shadow_offset: 2.0,
                shadow: rgba(0, 0, 0, 50),
                text_shadow: rgba(0, 0, 0, 60),
            },
            footer: FooterLayout {
                offset_from_bottom: 200.0,
                qr_size: 120,
                qr_url: "https://fonts.google.com".to_string(),
                channel_name: "Google Fonts".to_string(),
                channel_description: "Free, open source typefaces".to_string(),
                text_gap: 30.0,
                line_spacing: 25.0,
                font_info_offset: 45.0,
            },
            pattern: PatternLayout {
                rhombus_size: 15.0,
                spacing: 1.1,
                acute_angle: 32.0,
                obtuse_angle: 148.0,
                opacity: 0.035,
            },
            content: default_content(),
            logo: None,
        }
    }
}

fn default_content() -> Vec<CardContent> {
    vec![
        CardContent::new(
            "TECHNOLOGY",
            "Digital Innovation",
            "Transforming the Future",
            [
                "Artificial intelligence and machine learning are",
                "revolutionizing how we interact with technology.",
            ],
            [
                "These groundbreaking advances are creating new",
                "opportunities for innovation across industries.",
            ],
            "Explore AI Solutions",
            "Weekly digest • AI use cases for everyone",
        ),
        CardContent::new(
            "DESIGN",
            "User Experience",
            "Designing for Humans",
            [
                "Great design puts human needs first. Understanding",
                "user behavior and psychology.",
            ],
            [
                "We create intuitive interfaces that delight users",
                "while solving complex problems effectively.",
            ],
            "Learn More",
            "Updated weekly • Latest trends in UX",
        ),
        CardContent::new(
            "SECURITY",
            "Data Privacy",
            "Protecting Digital Rights",
            [
                "In our interconnected world, protecting personal",
                "data has become crucial.",
            ],
            [
                "Organizations must implement robust security",
                "measures while maintaining transparency.",
            ],
            "View Guidelines",
            "Essential reading • Security guidelines",
        ),
        CardContent::new(
            "ENVIRONMENT",
            "Sustainability",
            "Building Tomorrow",
            [
                "Environmental consciousness is reshaping how we",
                "approach development.",
            ],
            [
                "From renewable energy to sustainable materials,",
                "every choice impacts our future.",
            ],
            "Join Initiative",
            "Ongoing initiative • Join the movement",
        ),
    ]
}

/// Layout of the comparison sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub columns: u32,
    /// Width every preview is scaled to; height keeps the aspect ratio.
    pub thumb_width: u32,
    pub padding: u32,
    pub caption_height: u32,
    /// Space between a thumbnail and its caption.
    pub caption_gap: u32,
    pub caption_size: f32,
    pub footer_height: u32,
    pub qr_size: u32,
    pub qr_url: String,
    pub stamp_size: f32,
    pub background: Color,
    pub text: Color,
    pub muted: Color,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 4,
            thumb_width: 700,
            padding: 60,
            caption_height: 70,
            caption_gap: 20,
            caption_size: 18.0,
            footer_height: 200,
            qr_size: 120,
            qr_url: "https://fonts.google.com".to_string(),
            stamp_size: 14.0,
            background: LIGHT.background,
            text: LIGHT.body,
            muted: LIGHT.muted,
        }
    }
}
