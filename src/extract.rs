use crate::{
    consts::{MARKER_KEYWORD, MARKER_NAME},
    error::CartError,
};
use log::debug;
use std::path::Path;

/// The kind of file the cartridge data is read from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceKind {
    /// A plain dump (`.txt`): the whole content is data.
    Text,
    /// A PICO-8 web export (`.js`): data follows the `var _cartdat =` assignment.
    Script,
}

impl SourceKind {
    /// Determines the source kind from a path's extension, ignoring case.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the extension is neither `.txt` nor `.js`.
    pub fn from_path(path: &Path) -> Result<Self, CartError> {
        let ext = path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase()).unwrap_or_default();
        match ext.as_str() {
            "txt" => Ok(Self::Text),
            "js" => Ok(Self::Script),
            _ => Err(CartError::UnsupportedExtension(ext)),
        }
    }
}

/// Extracts every decimal number of the data region in order of appearance.
///
/// Any text that is not an ASCII digit separates numbers and is otherwise ignored.
///
/// # Errors
///
/// Will return `Err` if `kind` is [`SourceKind::Script`] and no `var _cartdat =` assignment exists.
pub fn extract_numbers(content: &str, kind: SourceKind) -> Result<Vec<u64>, CartError> {
    let data = match kind {
        SourceKind::Text => content,
        SourceKind::Script => {
            let start = find_data_start(content).ok_or(CartError::DataMarkerNotFound)?;
            debug!("data region starts at byte {start}");
            &content[start..]
        },
    };
    let numbers = tokenize(data);
    debug!("extracted {} numbers", numbers.len());
    Ok(numbers)
}

// returns the byte index just past the `=` of the first `var <ws>+ _cartdat <ws>* =`
fn find_data_start(content: &str) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut search = 0;
    while let Some(found) = content[search..].find(MARKER_KEYWORD) {
        let keyword_end = search + found + MARKER_KEYWORD.len();
        if let Some(end) = match_assignment(bytes, keyword_end) {return Some(end);}
        search = search + found + 1;
    }
    None
}

// matches `<ws>+ _cartdat <ws>* =` starting at index
fn match_assignment(bytes: &[u8], mut index: usize) -> Option<usize> {
    let ws_start = index;
    index = skip_whitespace(bytes, index);
    if index == ws_start {return None;}
    if !bytes[index..].starts_with(MARKER_NAME.as_bytes()) {return None;}
    index = skip_whitespace(bytes, index + MARKER_NAME.len());
    if bytes.get(index) != Some(&b'=') {return None;}
    Some(index + 1)
}

const fn skip_whitespace(bytes: &[u8], mut index: usize) -> usize {
    while index < bytes.len() && bytes[index].is_ascii_whitespace() {index += 1;}
    index
}

// every maximal run of ascii digits. accumulation wraps so the low byte stays exact for any length.
fn tokenize(data: &str) -> Vec<u64> {
    let mut numbers = Vec::new();
    let mut current: Option<u64> = None;
    for byte in data.bytes() {
        if byte.is_ascii_digit() {
            let digit = u64::from(byte - b'0');
            current = Some(current.unwrap_or(0).wrapping_mul(10).wrapping_add(digit));
        } else if let Some(number) = current.take() {
            numbers.push(number);
        }
    }
    if let Some(number) = current {numbers.push(number);}
    numbers
}

#[cfg(test)]
mod tests {
    use crate::error::CartError;
    use super::{extract_numbers, find_data_start, skip_whitespace, tokenize, SourceKind};
    use std::path::Path;
    #[test]
    fn good_from_path() {
        assert!(SourceKind::from_path(Path::new("cart.txt")).ok() == Some(SourceKind::Text));
        assert!(SourceKind::from_path(Path::new("dir/cart.js")).ok() == Some(SourceKind::Script));
        assert!(SourceKind::from_path(Path::new("CART.JS")).ok() == Some(SourceKind::Script));
        assert!(SourceKind::from_path(Path::new("cart.p8.TxT")).ok() == Some(SourceKind::Text));
    }
    #[test]
    fn bad_from_path() {
        match SourceKind::from_path(Path::new("cart.dat")) {
            Err(CartError::UnsupportedExtension(ext)) => assert!(ext == "dat"),
            _ => unreachable!(),
        }
        match SourceKind::from_path(Path::new("cart")) {
            Err(CartError::UnsupportedExtension(ext)) => assert!(ext.is_empty()),
            _ => unreachable!(),
        }
    }
    #[test]
    fn good_extract_text() {
        let numbers = extract_numbers("1 2 3", SourceKind::Text).unwrap();
        assert!(numbers == [1, 2, 3]);
        let numbers = extract_numbers("[255,0;\n17]x42", SourceKind::Text).unwrap();
        assert!(numbers == [255, 0, 17, 42]);
        assert!(extract_numbers("", SourceKind::Text).unwrap().is_empty());
        assert!(extract_numbers("no digits here", SourceKind::Text).unwrap().is_empty());
    }
    #[test]
    fn good_extract_script() {
        let numbers = extract_numbers("var _cartdat = 10,20,30", SourceKind::Script).unwrap();
        assert!(numbers == [10, 20, 30]);
        let source = "var _cdpos = 0;\nvar\t_cartdat=[\n1,2,\n3];\nvar _x = 99;";
        let numbers = extract_numbers(source, SourceKind::Script).unwrap();
        assert!(numbers == [1, 2, 3, 99]); // everything after the marker counts
    }
    #[test]
    fn bad_extract_script() {
        let result = extract_numbers("var data = [1, 2, 3];", SourceKind::Script);
        assert!(matches!(result, Err(CartError::DataMarkerNotFound)));
        let result = extract_numbers("var_cartdat = [1];", SourceKind::Script); // needs whitespace after var
        assert!(matches!(result, Err(CartError::DataMarkerNotFound)));
        let result = extract_numbers("var _cartdat [1];", SourceKind::Script);
        assert!(matches!(result, Err(CartError::DataMarkerNotFound)));
        let result = extract_numbers("", SourceKind::Script);
        assert!(matches!(result, Err(CartError::DataMarkerNotFound)));
    }
    #[test]
    fn good_find_data_start() {
        assert!(find_data_start("var _cartdat = 1") == Some(14));
        assert!(find_data_start("variable; var _cartdat=1") == Some(23));
        assert!(find_data_start("var _cartdat").is_none());
    }
    #[test]
    const fn infallible_skip_whitespace() {
        assert!(skip_whitespace(b"  \t\nx", 0) == 4);
        assert!(skip_whitespace(b"x", 0) == 0);
        assert!(skip_whitespace(b"  ", 0) == 2);
    }
    #[test]
    fn infallible_tokenize_large_numbers() {
        let numbers = tokenize("300 18446744073709551616");
        assert!(numbers[0] == 300);
        assert!(numbers[1] & 0xFF == 0); // 2^64 wraps to 0, low byte is still exact
        let numbers = tokenize("007");
        assert!(numbers == [7]);
    }
}
