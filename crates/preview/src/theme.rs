//! Light and dark color schemes.

use std::fmt;

use image::Rgba;

pub type Color = Rgba<u8>;

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Rgba([r, g, b, 255])
}

pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Rgba([r, g, b, a])
}

pub const WHITE: Color = rgb(255, 255, 255);
pub const BLACK: Color = rgb(0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors for one content card variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub fill: Color,
    pub border: Color,
    pub title: Color,
    pub body: Color,
    pub accent: Color,
    pub button: Color,
    pub button_text: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub pattern: Color,
    pub headline: Color,
    pub body: Color,
    pub muted: Color,
    pub card: CardStyle,
    /// Right-hand column cards.
    pub inverted: CardStyle,
}

const TEAL_900: Color = rgb(10, 47, 47);
const TEAL_500: Color = rgb(20, 184, 166);
const TEAL_400: Color = rgb(45, 212, 191);
const TEAL_600: Color = rgb(13, 148, 136);
const TEAL_100: Color = rgb(204, 251, 241);
const SLATE_900: Color = rgb(15, 23, 42);
const SLATE_800: Color = rgb(30, 41, 59);
const SLATE_700: Color = rgb(51, 65, 85);
const SLATE_600: Color = rgb(71, 85, 105);
const SLATE_500: Color = rgb(100, 116, 139);
const SLATE_400: Color = rgb(148, 163, 184);
const SLATE_300: Color = rgb(203, 213, 225);
const SLATE_200: Color = rgb(226, 232, 240);
const SLATE_100: Color = rgb(241, 245, 249);

pub const LIGHT: Palette = Palette {
    background: rgb(252, 252, 252),
    pattern: TEAL_900,
    headline: TEAL_900,
    body: SLATE_600,
    muted: SLATE_500,
    card: CardStyle {
        fill: WHITE,
        border: SLATE_200,
        title: TEAL_900,
        body: SLATE_600,
        accent: TEAL_500,
        button: TEAL_500,
        button_text: WHITE,
    },
    inverted: CardStyle {
        fill: TEAL_900,
        border: SLATE_200,
        title: WHITE,
        body: WHITE,
        accent: TEAL_500,
        button: WHITE,
        button_text: TEAL_500,
    },
};

pub const DARK: Palette = Palette {
    background: SLATE_900,
    pattern: SLATE_400,
    headline: SLATE_100,
    body: SLATE_300,
    muted: SLATE_400,
    card: CardStyle {
        fill: SLATE_800,
        border: SLATE_700,
        title: SLATE_100,
        body: SLATE_300,
        accent: TEAL_400,
        button: TEAL_400,
        button_text: SLATE_900,
    },
    inverted: CardStyle {
        fill: TEAL_100,
        border: SLATE_700,
        title: TEAL_900,
        body: SLATE_800,
        accent: TEAL_600,
        button: TEAL_900,
        button_text: TEAL_100,
    },
};
