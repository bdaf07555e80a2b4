use std::path::Path;

use tracing::debug;

use crate::data;
use crate::error::Result;

const KEY_LEN: usize = 3;

fn apply_key(bytes: &[u8], key: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .zip(key.iter().cycle())
        .map(|(&b, &k)| b ^ k)
        .collect()
}

/// Each key byte only touches every third character, so the columns are
/// solved independently: pick the lowercase byte that decodes the most
/// spaces.
fn find_key(cipher: &[u8]) -> [u8; KEY_LEN] {
    let mut key = [b'a'; KEY_LEN];
    for (col, slot) in key.iter_mut().enumerate() {
        *slot = (b'a'..=b'z')
            .max_by_key(|&k| {
                cipher
                    .iter()
                    .skip(col)
                    .step_by(KEY_LEN)
                    .filter(|&&c| c ^ k == b' ')
                    .count()
            })
            .unwrap_or(b'a');
    }
    key
}

/// PE59: XOR Decryption
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, "cipher.txt")?;
    let cipher: Vec<u8> = data::number_row(content.trim(), Some(','), "cipher.txt", 1)?;

    let key = find_key(&cipher);
    let plain = apply_key(&cipher, &key);
    debug!(key = %String::from_utf8_lossy(&key), "recovered key");

    Ok(plain.iter().map(|&b| b as u64).sum::<u64>().to_string())
}
