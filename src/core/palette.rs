/// Master palette every generated sculpture draws its subset from.
pub const MASTER_PALETTE: [u32; 17] = [
    0x004225, // deep ink green
    0xFF4500, // orange red
    0xC0C0C0, // silver
    0xFFFF00, // bright yellow
    0x9DB7F1, // glacier blue
    0xDAB1DA, // pale lilac
    0xFF4D94, // vivid pink
    0x0055FF, // klein blue
    0x40E0D0, // mint
    0x8B0000, // wine red
    0xD4AF37, // champagne gold
    0x00FFFF, // cyan
    0x000000, // black
    0xFFFFFF, // white
    0x333333, // dark grey
    0x808080, // grey
    0xE5E5E5, // light grey
];

/// Glitter colors the particle field cycles between.
pub const GLITTER_PINK: u32 = 0xFF00BB;
pub const GLITTER_GOLD: u32 = 0xFFD700;

/// Convert a packed `0xRRGGBB` value into normalized RGB components.
#[inline]
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    [r, g, b]
}
