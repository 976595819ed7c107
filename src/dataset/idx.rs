//! Reader for IDX binary files as used by MNIST and its derivatives
//! (Fashion-MNIST, EMNIST, …).
//!
//! # IDX3 image file layout
//! ```text
//! bytes  0-1:   0x00 0x00   (reserved, must be zero)
//! byte   2:     0x08        (dtype = uint8)
//! byte   3:     0x03        (number of dimensions = 3)
//! bytes  4-7:   N           (number of images, big-endian u32)
//! bytes  8-11:  rows        (image height in pixels, big-endian u32)
//! bytes 12-15:  cols        (image width in pixels, big-endian u32)
//! bytes 16..:   N * rows * cols bytes, row-major, uint8
//! ```
//!
//! # IDX1 label file layout
//! ```text
//! bytes  0-1:   0x00 0x00   (reserved, must be zero)
//! byte   2:     0x08        (dtype = uint8)
//! byte   3:     0x01        (number of dimensions = 1)
//! bytes  4-7:   N           (number of labels, big-endian u32)
//! bytes  8..:   N bytes, each a class index in [0, n_classes)
//! ```

use std::fs;
use std::path::Path;

use crate::error::NetworkError;

const IMAGE_HEADER_LEN: usize = 16;
const LABEL_HEADER_LEN: usize = 8;

/// Parses a pair of IDX buffers (image + label) into `(inputs, labels)`
/// ready for `train_loop` / `evaluate`.
///
/// - `inputs[i]` is a `Vec<f64>` of length `rows * cols`, each pixel divided
///   by 255.0 so values lie in `[0.0, 1.0]`.
/// - `labels[i]` is the integer class index of sample `i`.
pub fn parse_idx_pair(
    image_bytes: &[u8],
    label_bytes: &[u8],
    n_classes: usize,
) -> Result<(Vec<Vec<f64>>, Vec<usize>), NetworkError> {
    // ── Image file validation ───────────────────────────────────────────────

    if image_bytes.len() < IMAGE_HEADER_LEN {
        return Err(dataset_err(format!(
            "IDX image file too short: expected at least {} header bytes, got {}",
            IMAGE_HEADER_LEN,
            image_bytes.len()
        )));
    }
    if image_bytes[0] != 0x00 || image_bytes[1] != 0x00 {
        return Err(dataset_err(format!(
            "IDX image file: bytes 0-1 must be 0x00 0x00 (reserved), got 0x{:02X} 0x{:02X}",
            image_bytes[0], image_bytes[1]
        )));
    }
    if image_bytes[2] != 0x08 {
        return Err(dataset_err(format!(
            "IDX image file: byte 2 (dtype) must be 0x08 (uint8), got 0x{:02X}",
            image_bytes[2]
        )));
    }
    if image_bytes[3] != 0x03 {
        return Err(dataset_err(format!(
            "IDX image file: byte 3 (dimensions) must be 3, got {}; \
             this does not appear to be an IDX3 image file",
            image_bytes[3]
        )));
    }

    let n_items = be_u32(&image_bytes[4..8]) as usize;
    let rows = be_u32(&image_bytes[8..12]) as usize;
    let cols = be_u32(&image_bytes[12..16]) as usize;

    let n_pixels = rows.checked_mul(cols).ok_or_else(|| {
        dataset_err(format!(
            "IDX image file: rows * cols overflows usize (rows={}, cols={})",
            rows, cols
        ))
    })?;
    if n_pixels == 0 {
        return Err(dataset_err(format!(
            "IDX image file: images have zero pixels (rows={}, cols={})",
            rows, cols
        )));
    }
    let data_len = n_items.checked_mul(n_pixels).ok_or_else(|| {
        dataset_err(format!(
            "IDX image file: item count * pixel count overflows usize \
             (n_items={}, n_pixels={})",
            n_items, n_pixels
        ))
    })?;

    if image_bytes.len() < IMAGE_HEADER_LEN + data_len {
        return Err(dataset_err(format!(
            "IDX image file too short: header declares {} items of {}×{} pixels \
             ({} data bytes needed after the header), but the file is only {} bytes",
            n_items,
            rows,
            cols,
            data_len,
            image_bytes.len()
        )));
    }

    // ── Label file validation ───────────────────────────────────────────────

    if label_bytes.len() < LABEL_HEADER_LEN {
        return Err(dataset_err(format!(
            "IDX label file too short: expected at least {} header bytes, got {}",
            LABEL_HEADER_LEN,
            label_bytes.len()
        )));
    }
    if label_bytes[0] != 0x00 || label_bytes[1] != 0x00 {
        return Err(dataset_err(format!(
            "IDX label file: bytes 0-1 must be 0x00 0x00 (reserved), got 0x{:02X} 0x{:02X}",
            label_bytes[0], label_bytes[1]
        )));
    }
    if label_bytes[2] != 0x08 {
        return Err(dataset_err(format!(
            "IDX label file: byte 2 (dtype) must be 0x08 (uint8), got 0x{:02X}",
            label_bytes[2]
        )));
    }
    if label_bytes[3] != 0x01 {
        return Err(dataset_err(format!(
            "IDX label file: byte 3 (dimensions) must be 1, got {}; \
             this does not appear to be an IDX1 label file",
            label_bytes[3]
        )));
    }

    let label_count = be_u32(&label_bytes[4..8]) as usize;
    if label_count != n_items {
        return Err(dataset_err(format!(
            "IDX file mismatch: image file declares {} items but label file declares {}",
            n_items, label_count
        )));
    }
    if label_bytes.len() < LABEL_HEADER_LEN + n_items {
        return Err(dataset_err(format!(
            "IDX label file too short: header declares {} labels but the file is only {} bytes",
            n_items,
            label_bytes.len()
        )));
    }

    // ── Build inputs and labels ─────────────────────────────────────────────

    let image_data = &image_bytes[IMAGE_HEADER_LEN..IMAGE_HEADER_LEN + data_len];
    let inputs: Vec<Vec<f64>> = image_data
        .chunks_exact(n_pixels)
        .map(|chunk| chunk.iter().map(|&px| px as f64 / 255.0).collect())
        .collect();

    let label_data = &label_bytes[LABEL_HEADER_LEN..LABEL_HEADER_LEN + n_items];
    let mut labels: Vec<usize> = Vec::with_capacity(n_items);
    for (i, &class) in label_data.iter().enumerate() {
        let class = class as usize;
        if class >= n_classes {
            return Err(dataset_err(format!(
                "IDX label at index {}: class index {} is out of range for n_classes={}",
                i, class, n_classes
            )));
        }
        labels.push(class);
    }

    Ok((inputs, labels))
}

/// Reads and parses an IDX image/label file pair from disk.
pub fn load_idx_pair(
    image_path: impl AsRef<Path>,
    label_path: impl AsRef<Path>,
    n_classes: usize,
) -> Result<(Vec<Vec<f64>>, Vec<usize>), NetworkError> {
    let image_bytes = fs::read(image_path)?;
    let label_bytes = fs::read(label_path)?;
    parse_idx_pair(&image_bytes, &label_bytes, n_classes)
}

fn be_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn dataset_err(msg: String) -> NetworkError {
    NetworkError::Dataset(msg)
}
