use {
    anyhow::{bail, Context, Result},
    byteorder::{ByteOrder, LittleEndian},
    std::{fs::File, io::Write, path::Path},
};

/// Writes a `.r8` record: an 8 byte time stamp followed by the values, all
/// little-endian f64.
pub fn write_r8<P: AsRef<Path>>(path: P, time: f64, values: &[f64]) -> Result<()> {
    let mut bytes = vec![0u8; 8 * (values.len() + 1)];

    LittleEndian::write_f64(&mut bytes[..8], time);
    LittleEndian::write_f64_into(values, &mut bytes[8..]);

    let mut f = File::create(path)?;
    f.write_all(&bytes)?;

    Ok(())
}

/// Reads back a record written by `write_r8`, skipping the time stamp.
pub fn read_r8<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    if bytes.len() < 8 || bytes.len() % 8 != 0 {
        bail!(
            "{} holds {} bytes, not a whole number of f64 values after the time stamp",
            path.display(),
            bytes.len()
        );
    }

    Ok(bytes
        .chunks_exact(8)
        .skip(1)
        .map(LittleEndian::read_f64)
        .collect::<Vec<f64>>())
}

#[cfg(test)]
pub(crate) fn assert_approx_eq_slice(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, e) in a.iter().enumerate() {
        approx::assert_abs_diff_eq!(*e, b[i], epsilon = 1.0E-13);
    }
}
