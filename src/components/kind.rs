use std::fmt::Display;

/// Native pixel representation of a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub enum ElementKind {
    UInt8,
    UInt16,
    Float32,
    /// One `0xAARRGGBB` word per pixel.
    PackedArgb32,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::UInt8,
        ElementKind::UInt16,
        ElementKind::Float32,
        ElementKind::PackedArgb32,
    ];

    pub fn bytes_per_element(&self) -> usize {
        match self {
            ElementKind::UInt8 => 1,
            ElementKind::UInt16 => 2,
            ElementKind::Float32 | ElementKind::PackedArgb32 => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::UInt8 => "uint8",
            ElementKind::UInt16 => "uint16",
            ElementKind::Float32 => "float32",
            ElementKind::PackedArgb32 => "argb32",
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Packed `0xAARRGGBB` color as stored in [ElementKind::PackedArgb32] planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb(pub u32);

impl Argb {
    pub fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(u32::from_be_bytes([alpha, red, green, blue]))
    }

    pub fn alpha(&self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    pub fn red(&self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    pub fn green(&self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    pub fn blue(&self) -> u8 {
        self.0.to_be_bytes()[3]
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}
