#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32 },
    Derived { base: Box<Color>, ops: Vec<ColorOp> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorOp {
    Lighten(f32),
    Darken(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn lighten(self, amount: f32) -> Self {
        self.with_op(ColorOp::Lighten(amount))
    }

    pub fn darken(self, amount: f32) -> Self {
        self.with_op(ColorOp::Darken(amount))
    }

    fn with_op(self, op: ColorOp) -> Self {
        match self {
            Self::Derived { base, mut ops } => {
                ops.push(op);
                Self::Derived { base, ops }
            }
            other => Self::Derived {
                base: Box::new(other),
                ops: vec![op],
            },
        }
    }

    /// Resolve to concrete RGB. Derived colors apply their ops in Oklch space.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            _ => oklch_to_rgb(to_oklch(self)),
        }
    }
}

impl ColorOp {
    fn apply(&self, color: palette::Oklch) -> palette::Oklch {
        use palette::{Darken, Lighten};

        match self {
            Self::Lighten(amount) => color.lighten(*amount),
            Self::Darken(amount) => color.darken(*amount),
        }
    }
}

fn to_oklch(color: &Color) -> palette::Oklch {
    use palette::{IntoColor, Oklch, Srgb};

    match color {
        Color::Rgb { r, g, b } => {
            let srgb = Srgb::new(
                f32::from(*r) / 255.0,
                f32::from(*g) / 255.0,
                f32::from(*b) / 255.0,
            );
            srgb.into_color()
        }
        Color::Oklch { l, c, h } => Oklch::new(*l, *c, *h),
        Color::Derived { base, ops } => {
            let mut oklch = to_oklch(base);
            for op in ops {
                oklch = op.apply(oklch);
            }
            oklch
        }
    }
}

fn oklch_to_rgb(oklch: palette::Oklch) -> Rgb {
    use palette::{IntoColor, Srgb};

    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
