use rand::Rng;

/// A display color carried by game objects. Rendering maps it onto the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const INDIAN_RED: Rgb = Rgb::new(255, 106, 106);
    pub const CADET_BLUE: Rgb = Rgb::new(95, 158, 160);
    pub const DARK_BLUE: Rgb = Rgb::new(0, 0, 139);
    pub const CHOCOLATE: Rgb = Rgb::new(210, 105, 30);
    pub const DARK_MAGENTA: Rgb = Rgb::new(139, 0, 139);
    pub const GOLDENROD: Rgb = Rgb::new(255, 185, 15);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random color with every channel in 1..=255
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.gen_range(1..=255),
            rng.gen_range(1..=255),
            rng.gen_range(1..=255),
        )
    }
}
