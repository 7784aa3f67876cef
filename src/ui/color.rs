/// Accepts "#rrggbb" (or without '#') and returns a packed 0xRRGGBB value.
/// Panics on invalid input; use only with trusted literals.
/// Evaluated at COMPILE TIME if assigned to a const/static.
pub const fn rgb_hex(s: &str) -> u32 {
    let bytes = s.as_bytes();

    // Handle optional '#' by offsetting start index
    let (bytes, len) = if !bytes.is_empty() && bytes[0] == b'#' {
        let (_, rem) = bytes.split_at(1);
        (rem, s.len() - 1)
    } else {
        (bytes, s.len())
    };

    // Const-safe hex char to u8
    const fn val(b: u8) -> u8 {
        match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => 10 + (b - b'a'),
            b'A'..=b'F' => 10 + (b - b'A'),
            _ => panic!("invalid hex digit in color string"),
        }
    }

    const fn byte2(h: u8, l: u8) -> u8 {
        (val(h) << 4) | val(l)
    }

    if len != 6 {
        panic!("color hex string must be 6 digits");
    }

    ((byte2(bytes[0], bytes[1]) as u32) << 16)
        | ((byte2(bytes[2], bytes[3]) as u32) << 8)
        | (byte2(bytes[4], bytes[5]) as u32)
}

#[inline(always)]
pub const fn rgb_unpack(rgb: u32) -> (u8, u8, u8) {
    (
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    )
}

/// Display label for a packed color swatch, e.g. `0x3366FF`.
#[inline(always)]
pub fn swatch_label(rgb: u32) -> String {
    format!("0x{rgb:06X}")
}

pub const ON_OFF_LABELS: [&str; 2] = ["Off", "On"];

/* =========================== THEME PALETTE =========================== */

/// The selectable theme swatches, grouped by hue (blues, cyans, greens,
/// magentas, violets, reds, yellows, oranges, grays).
pub const THEME_SWATCHES: &[u32] = &[
    0x000022, 0x000044, 0x000066, 0x000088, 0x0000AA, 0x0000CC, 0x1E2329, 0x3366FF, 0x4D7AFF,
    0x6699FF, 0x80B3FF, 0x99CCFF, 0xB3D9FF, //
    0x002222, 0x004444, 0x006666, 0x008888, 0x00AAAA, 0x00CCCC, 0x33FFFF, 0x4DFFFF, 0x66FFFF,
    0x80FFFF, 0x99FFFF, 0xB3FFFF, //
    0x002200, 0x004400, 0x006600, 0x008800, 0x00AA00, 0x00CC00, 0x33FF33, 0x4DFF4D, 0x66FF66,
    0x80FF80, 0x99FF99, 0xB3FFB3, //
    0x220022, 0x440044, 0x660066, 0x880088, 0x9B2257, 0xAA00AA, 0xCC00CC, 0xFF33FF, 0xFF4DFF,
    0xFF66FF, 0xFF80FF, 0xFF99FF, 0xFFB3FF, //
    0x110022, 0x220044, 0x330066, 0x440088, 0x5500AA, 0x6600CC, 0x8833FF, 0x994DFF, 0xAA66FF,
    0xBB80FF, 0xCC99FF, 0xDDB3FF, //
    0x220000, 0x440000, 0x660000, 0x880000, 0xAA0000, 0xCC0000, 0xFF3333, 0xFF4D4D, 0xFF6666,
    0xFF8080, 0xFF9999, 0xFFB3B3, //
    0x222200, 0x444400, 0x666600, 0x888800, 0xAAAA00, 0xCCCC00, 0xFFFF33, 0xFFFF4D, 0xFFFF66,
    0xFFFF80, 0xFFFF99, 0xFFFFB3, //
    0x221100, 0x442200, 0x663300, 0x884400, 0xAA5500, 0xCC6600, 0xFF8833, 0xFF994D, 0xFFAA66,
    0xFFBB80, 0xFFCC99, 0xFFDDB3, //
    0x000000, 0x141414, 0x282828, 0x3C3C3C, 0x505050, 0x646464, 0x8C8C8C, 0xA0A0A0, 0xB4B4B4,
    0xC8C8C8, 0xDCDCDC, 0xFFFFFF,
];

/// Swatch labels, parallel to `THEME_SWATCHES`.
pub fn theme_swatch_labels() -> Vec<String> {
    THEME_SWATCHES.iter().map(|&c| swatch_label(c)).collect()
}
