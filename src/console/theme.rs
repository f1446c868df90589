use crossterm::style::Color;

pub struct Theme {
    pub banner: Color,     // Blue
    pub heading: Color,    // Yellow
    pub subheading: Color, // Cyan
    pub text: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    banner: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    },
    heading: Color::Rgb {
        r: 249,
        g: 226,
        b: 175,
    },
    subheading: Color::Rgb {
        r: 148,
        g: 226,
        b: 213,
    },
    text: Color::Rgb {
        r: 205,
        g: 214,
        b: 244,
    },
};
