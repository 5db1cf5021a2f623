//! Hex text <-> byte conversions used by the prompts and the grid.
//!
//! Input is a whitespace-separated list of tokens, each one or two hex digits
//! with an optional `0x` prefix: `"48 65 6c 0x6C 6f"`.

/// A token in user input that is not a valid hex byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexParseError {
    pub token: String,
}

impl std::fmt::Display for HexParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid hex byte '{}' (expected 00-FF)", self.token)
    }
}

impl std::error::Error for HexParseError {}

/// Parse a single hex byte token such as `"ff"`, `"7"` or `"0x41"`
pub fn parse_hex_byte(token: &str) -> Result<u8, HexParseError> {
    let token = token.trim();
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    let valid = (1..=2).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(HexParseError {
            token: token.to_string(),
        });
    }
    u8::from_str_radix(digits, 16).map_err(|_| HexParseError {
        token: token.to_string(),
    })
}

/// Parse a whitespace-separated list of hex byte tokens.
///
/// Blank input yields an empty vector.
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>, HexParseError> {
    input.split_whitespace().map(parse_hex_byte).collect()
}

/// Two-digit hex rendering of a byte
pub fn format_hex_byte(byte: u8, uppercase: bool) -> String {
    if uppercase {
        format!("{byte:02X}")
    } else {
        format!("{byte:02x}")
    }
}

/// Character shown in the ASCII column: the byte itself if printable, `.` otherwise
pub fn ascii_display_char(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        '.'
    }
}
