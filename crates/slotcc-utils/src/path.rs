//! File name helpers for user preset storage.

/// Characters that are not allowed (or not portable) in preset file names.
const RESERVED: [char; 10] = [' ', '/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Build the file stem for a user preset from its manufacturer and name.
///
/// The two parts are joined with `_` and every reserved character is
/// replaced by `_`. The result is only a storage key; the preset file itself
/// keeps the manufacturer and name as typed.
///
/// ```
/// use slotcc_utils::sanitize_file_stem;
///
/// assert_eq!(sanitize_file_stem("Moog", "Sub 37"), "Moog_Sub_37");
/// ```
pub fn sanitize_file_stem(manufacturer: &str, name: &str) -> String {
    let mut stem = String::with_capacity(manufacturer.len() + name.len() + 1);
    stem.push_str(manufacturer);
    stem.push('_');
    stem.push_str(name);
    stem.chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect()
}
