//! Wire format for seed lists crossing a process boundary.
//!
//! The interactive front end and the graph-building side run as separate
//! processes and exchange the two seed lists over a pipe. The format is the
//! minimal "size first, then payload" framing: a little-endian u64 count
//! followed by that many little-endian i64 indices.

use std::io::{self, Read, Write};

/// Serialize a seed list: u64 length, then each index, all little-endian.
pub fn write_seed_list<W: Write>(writer: &mut W, seeds: &[i64]) -> io::Result<()> {
    writer.write_all(&(seeds.len() as u64).to_le_bytes())?;
    for &seed in seeds {
        writer.write_all(&seed.to_le_bytes())?;
    }
    Ok(())
}

/// Deserialize a seed list written by [`write_seed_list`].
///
/// A short stream yields `UnexpectedEof`; nothing else is validated here,
/// since out-of-range indices are handled during terminal wiring.
pub fn read_seed_list<R: Read>(reader: &mut R) -> io::Result<Vec<i64>> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    let len = u64::from_le_bytes(buf) as usize;

    let mut seeds = Vec::with_capacity(len);
    for _ in 0..len {
        reader.read_exact(&mut buf)?;
        seeds.push(i64::from_le_bytes(buf));
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_roundtrip() {
        let seeds = vec![0i64, 42, -7, i64::MAX, 1_000_000];
        let mut buf = Vec::new();
        write_seed_list(&mut buf, &seeds).unwrap();
        assert_eq!(buf.len(), 8 + 8 * seeds.len());

        let decoded = read_seed_list(&mut Cursor::new(buf)).unwrap();
        assert_eq!(decoded, seeds);
    }

    #[test]
    fn test_empty_list() {
        let mut buf = Vec::new();
        write_seed_list(&mut buf, &[]).unwrap();
        assert_eq!(buf.len(), 8);
        assert!(read_seed_list(&mut Cursor::new(buf)).unwrap().is_empty());
    }

    #[test]
    fn test_two_lists_back_to_back() {
        // Foreground then background on one stream, the way the front end
        // sends them after the user confirms the selection
        let fg = vec![3i64, 14, 15];
        let bg = vec![92i64, 65];

        let mut buf = Vec::new();
        write_seed_list(&mut buf, &fg).unwrap();
        write_seed_list(&mut buf, &bg).unwrap();

        let mut cursor = Cursor::new(buf);
        assert_eq!(read_seed_list(&mut cursor).unwrap(), fg);
        assert_eq!(read_seed_list(&mut cursor).unwrap(), bg);
    }

    #[test]
    fn test_truncated_stream() {
        let mut buf = Vec::new();
        write_seed_list(&mut buf, &[1, 2, 3]).unwrap();
        buf.truncate(buf.len() - 4);

        let err = read_seed_list(&mut Cursor::new(buf)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
