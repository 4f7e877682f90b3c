//! Raster decoding: TIFF bytes → `ElevationGrid` (first sample of each pixel).
//!
//! `tiff::decoder::Decoder` needs `Read + Seek`, so byte buffers are wrapped
//! in a `Cursor`. Interleaved multi-sample images keep sample 0 only.
use std::fs;
use std::io::Cursor;
use std::path::Path;

use tiff::decoder::{Decoder, DecodingResult};

use crate::error::{AnalysisError, Result};
use crate::grid::ElevationGrid;

/// Decode a TIFF held in memory.
pub fn load_tiff(bytes: &[u8]) -> Result<ElevationGrid> {
    if bytes.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut decoder = Decoder::new(Cursor::new(bytes))?;
    let (w, h) = decoder.dimensions()?;
    let (width, height) = (w as usize, h as usize);
    log::info!("Original size: {width} x {height}");

    let samples = to_f32(decoder.read_image()?);
    let cells = width * height;
    if cells == 0 || samples.len() < cells {
        return Err(AnalysisError::Dimension {
            width,
            height,
            reason: "decoded sample buffer is smaller than width * height",
        });
    }

    let per_pixel = samples.len() / cells;
    let data = if per_pixel == 1 {
        samples
    } else {
        log::debug!("keeping band 0 of {per_pixel} interleaved samples");
        samples.into_iter().step_by(per_pixel).take(cells).collect()
    };

    ElevationGrid::new(width, height, data)
}

/// Read and decode a TIFF from disk.
pub fn load_tiff_path(path: impl AsRef<Path>) -> Result<ElevationGrid> {
    let bytes = fs::read(path.as_ref())?;
    load_tiff(&bytes)
}

fn to_f32(result: DecodingResult) -> Vec<f32> {
    match result {
        DecodingResult::U8(v) => v.into_iter().map(f32::from).collect(),
        DecodingResult::U16(v) => v.into_iter().map(f32::from).collect(),
        DecodingResult::U32(v) => v.into_iter().map(|x| x as f32).collect(),
        DecodingResult::U64(v) => v.into_iter().map(|x| x as f32).collect(),
        DecodingResult::I8(v) => v.into_iter().map(f32::from).collect(),
        DecodingResult::I16(v) => v.into_iter().map(f32::from).collect(),
        DecodingResult::I32(v) => v.into_iter().map(|x| x as f32).collect(),
        DecodingResult::I64(v) => v.into_iter().map(|x| x as f32).collect(),
        DecodingResult::F32(v) => v,
        DecodingResult::F64(v) => v.into_iter().map(|x| x as f32).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiff::encoder::{colortype, TiffEncoder};

    fn encode<C: colortype::ColorType>(w: u32, h: u32, data: &[C::Inner]) -> Vec<u8>
    where
        [C::Inner]: tiff::encoder::TiffValue,
    {
        let mut buf = Cursor::new(Vec::new());
        TiffEncoder::new(&mut buf)
            .unwrap()
            .write_image::<C>(w, h, data)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn decodes_float_dem() {
        let data = [1.5f32, 2.5, 3.5, 4.5, 5.5, 6.5];
        let bytes = encode::<colortype::Gray32Float>(3, 2, &data);
        let grid = load_tiff(&bytes).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.data(), &data);
    }

    #[test]
    fn decodes_integer_dem() {
        let data = [0u16, 100, 500, 65535];
        let bytes = encode::<colortype::Gray16>(2, 2, &data);
        let grid = load_tiff(&bytes).unwrap();
        assert_eq!(grid.data(), &[0.0, 100.0, 500.0, 65535.0]);
    }

    #[test]
    fn keeps_first_band_of_rgb() {
        let data = [10u8, 1, 2, 20, 3, 4];
        let bytes = encode::<colortype::RGB8>(2, 1, &data);
        let grid = load_tiff(&bytes).unwrap();
        assert_eq!(grid.data(), &[10.0, 20.0]);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(load_tiff(&[]), Err(AnalysisError::EmptyInput)));
    }

    #[test]
    fn garbage_is_a_decode_failure() {
        let err = load_tiff(b"definitely not a tiff").unwrap_err();
        assert!(matches!(err, AnalysisError::Decode(_)), "got {err}");
    }
}
