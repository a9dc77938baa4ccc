macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

byte_map! {
    /// Separator of list elements, `,`.
    #[inline(always)]
    pub const fn is_list_separator(byte: u8) {
        byte == b','
    }
}

byte_map! {
    /// Separator of list elements and their parameters, `,` / `;` / `=`.
    #[inline(always)]
    pub const fn is_param_separator(byte: u8) {
        matches!(byte, b',' | b';' | b'=')
    }
}

byte_map! {
    /// SP / VCHAR, `%x20-7E`
    #[inline(always)]
    pub const fn is_printable(byte: u8) {
        matches!(byte, 0x20..=0x7E)
    }
}

byte_map! {
    /// Bytes that cannot appear unquoted in a rendered token.
    #[inline(always)]
    pub const fn is_quote_required(byte: u8) {
        matches!(byte, b'"' | b',' | b';' | b'=')
    }
}

/// Returns `true` if every character is printable ASCII, `U+0020` to `U+007E`.
///
/// An empty string is printable.
pub fn is_ascii_printable(input: &str) -> bool {
    input.bytes().all(is_printable)
}
