//! Seven-segment codec
//!
//! Pure functions from values to per-digit segment bitmaps. Nothing here
//! touches hardware.

/// Top segment
pub const SEG_A: u8 = 0x04;
/// Top right segment
pub const SEG_B: u8 = 0x01;
/// Bottom right segment
pub const SEG_C: u8 = 0x08;
/// Bottom segment
pub const SEG_D: u8 = 0x20;
/// Bottom left segment
pub const SEG_E: u8 = 0x10;
/// Top left segment
pub const SEG_F: u8 = 0x80;
/// Middle segment
pub const SEG_G: u8 = 0x40;

/// Auxiliary bit: centre dot on digit 1, side LED on digit 2
pub const AUX: u8 = 0x02;

/// Digit position carrying the centre dot
pub const DOT_DIGIT: usize = 1;
/// Digit position carrying the side LED
pub const LED_DIGIT: usize = 2;

/// Segment bitmaps for the hexadecimal digits 0-F
pub const HEX_DIGITS: [u8; 16] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,         // 0
    SEG_B | SEG_C,                                         // 1
    SEG_A | SEG_B | SEG_G | SEG_E | SEG_D,                 // 2
    SEG_A | SEG_B | SEG_G | SEG_C | SEG_D,                 // 3
    SEG_F | SEG_G | SEG_B | SEG_C,                         // 4
    SEG_A | SEG_F | SEG_G | SEG_C | SEG_D,                 // 5
    SEG_A | SEG_F | SEG_G | SEG_C | SEG_D | SEG_E,         // 6
    SEG_A | SEG_B | SEG_C,                                 // 7
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G, // 8
    SEG_G | SEG_F | SEG_A | SEG_B | SEG_C | SEG_D,         // 9
    SEG_E | SEG_F | SEG_A | SEG_B | SEG_C | SEG_G,         // A
    SEG_F | SEG_E | SEG_D | SEG_C | SEG_G,                 // b
    SEG_A | SEG_F | SEG_E | SEG_D,                         // C
    SEG_B | SEG_C | SEG_D | SEG_E | SEG_G,                 // d
    SEG_A | SEG_F | SEG_G | SEG_E | SEG_D,                 // E
    SEG_A | SEG_F | SEG_G | SEG_E,                         // F
];

/// Four digit bitmaps, left-most digit first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    pub digits: [u8; 4],
}

impl DisplayFrame {
    /// All segments off
    pub const BLANK: Self = Self { digits: [0; 4] };

    pub const fn new(digits: [u8; 4]) -> Self {
        Self { digits }
    }

    /// Light the centre dot
    pub fn with_dot(mut self, on: bool) -> Self {
        if on {
            self.digits[DOT_DIGIT] |= AUX;
        }
        self
    }

    /// Light the side LED
    pub fn with_indicator(mut self, on: bool) -> Self {
        if on {
            self.digits[LED_DIGIT] |= AUX;
        }
        self
    }

    /// Digits right-most first, the order the controller expects them
    pub fn right_to_left(&self) -> [u8; 4] {
        let [d0, d1, d2, d3] = self.digits;
        [d3, d2, d1, d0]
    }
}

/// Encode a 16-bit value as four hexadecimal digits
///
/// The most significant nibble lands in the left-most digit. `dot` lights
/// the centre dot, `indicator` the side LED.
pub fn encode(value: u16, dot: bool, indicator: bool) -> DisplayFrame {
    let nibble = |shift: u16| HEX_DIGITS[((value >> shift) & 0xf) as usize];
    DisplayFrame::new([nibble(12), nibble(8), nibble(4), nibble(0)])
        .with_dot(dot)
        .with_indicator(indicator)
}

/// Segment bitmap for a character, if it can be shown
///
/// Covers hexadecimal digits (either case) and a few letters that read
/// unambiguously on seven segments.
pub fn glyph(c: char) -> Option<u8> {
    let bits = match c {
        '0'..='9' => HEX_DIGITS[c as usize - '0' as usize],
        'A'..='F' => HEX_DIGITS[c as usize - 'A' as usize + 10],
        'a'..='f' => HEX_DIGITS[c as usize - 'a' as usize + 10],
        'O' | 'o' => HEX_DIGITS[0],
        'L' | 'l' => SEG_F | SEG_E | SEG_D,
        'P' | 'p' => SEG_A | SEG_B | SEG_G | SEG_E | SEG_F,
        'H' | 'h' => SEG_F | SEG_B | SEG_G | SEG_E | SEG_C,
        'U' | 'u' => SEG_F | SEG_B | SEG_E | SEG_C | SEG_D,
        '-' => SEG_G,
        ' ' => 0,
        _ => return None,
    };
    Some(bits)
}

/// Encode exactly four characters
///
/// Returns `None` if the text is not four characters long or contains a
/// character without a glyph.
pub fn encode_text(text: &str) -> Option<DisplayFrame> {
    let mut digits = [0u8; 4];
    let mut chars = text.chars();
    for digit in digits.iter_mut() {
        *digit = glyph(chars.next()?)?;
    }
    if chars.next().is_some() {
        return None;
    }
    Some(DisplayFrame::new(digits))
}
