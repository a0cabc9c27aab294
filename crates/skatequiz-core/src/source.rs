//! Reading `;`-delimited quiz data files.
//!
//! Files are authored on Windows and are often saved in the legacy ANSI
//! code page rather than UTF-8, so decoding falls back to Windows-1252.

use std::path::Path;

use crate::error::DataError;

/// Field delimiter of every quiz data file.
pub const DELIMITER: u8 = b';';

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Windows-1252 code points for bytes 0x80..=0x9F. Unassigned bytes map to
/// the C1 control with the same value.
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

/// Read a data file into text.
pub fn read_data_file(path: &Path) -> Result<String, DataError> {
    if !path.exists() {
        return Err(DataError::SourceMissing {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(&bytes))
}

/// Decode file bytes: UTF-8 (BOM stripped) when valid, Windows-1252 otherwise.
pub fn decode(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::debug!("data file is not UTF-8, decoding as Windows-1252");
            bytes.iter().map(|&b| decode_cp1252(b)).collect()
        }
    }
}

fn decode_cp1252(byte: u8) -> char {
    match byte {
        0x80..=0x9F => CP1252_HIGH[usize::from(byte - 0x80)],
        _ => char::from(byte),
    }
}

/// Split text into rows of trimmed fields. No row is treated as a header
/// here; each loader applies its own header rule.
pub fn delimited_rows(text: &str, path: &Path) -> Result<Vec<Vec<String>>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(|field| field.trim().to_string()).collect())
                .map_err(|source| DataError::Csv {
                    path: path.to_path_buf(),
                    source,
                })
        })
        .collect()
}
